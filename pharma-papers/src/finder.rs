use tracing::{debug, instrument};

use crate::affiliation::AffiliationClassifier;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pubmed::PubMedClient;
use crate::report::{build_reports, ArticleReport};

/// Two-stage search: PMIDs from ESearch, then classified records from EFetch
///
/// Transport failures surface as errors, so callers can tell a failed
/// request apart from a search that matched nothing.
#[derive(Clone)]
pub struct PaperFinder {
    /// PubMed client used for both stages
    pub pubmed: PubMedClient,
    classifier: AffiliationClassifier,
}

impl PaperFinder {
    /// Create a finder with default client settings and built-in keywords
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::PaperFinder;
    ///
    /// let finder = PaperFinder::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            pubmed: PubMedClient::with_config(config),
            classifier: AffiliationClassifier::default(),
        }
    }

    /// Replace the affiliation classifier
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::{AffiliationClassifier, KeywordConfig, PaperFinder};
    ///
    /// let keywords = KeywordConfig::from_yaml_str("pharma: [Widgets]")?;
    /// let finder = PaperFinder::new().with_classifier(AffiliationClassifier::new(&keywords)?);
    /// assert!(finder.classifier().is_pharma_company("Acme Widgets"));
    /// # Ok::<(), pharma_papers::PapersError>(())
    /// ```
    pub fn with_classifier(mut self, classifier: AffiliationClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn classifier(&self) -> &AffiliationClassifier {
        &self.classifier
    }

    /// Return up to `max_results` PMIDs for `query`, in upstream order
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let pmids = self.pubmed.search_articles(query, max_results).await?;
        debug!(?pmids, "PubMed IDs fetched");
        Ok(pmids)
    }

    /// Fetch `pmids` and keep the articles with company-affiliated authors
    ///
    /// An empty `pmids` slice returns immediately without a request.
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_and_classify<S: AsRef<str>>(&self, pmids: &[S]) -> Result<Vec<ArticleReport>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let articles = self.pubmed.fetch_articles(pmids).await?;
        Ok(build_reports(&articles, &self.classifier))
    }

    /// Run both stages
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pharma_papers::PaperFinder;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let finder = PaperFinder::new();
    ///     for report in finder.find_papers("cancer immunotherapy", 30).await? {
    ///         println!("{}: {}", report.pubmed_id, report.company_affiliations);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn find_papers(&self, query: &str, max_results: usize) -> Result<Vec<ArticleReport>> {
        let pmids = self.search(query, max_results).await?;
        self.fetch_and_classify(&pmids).await
    }
}

impl Default for PaperFinder {
    fn default() -> Self {
        Self::new()
    }
}
