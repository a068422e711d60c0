use crate::config::ClientConfig;
use crate::error::{PapersError, Result};
use crate::pubmed::models::ArticleRecord;
use crate::pubmed::parser::{parse_articles_from_xml, parse_ids_from_xml};
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// PubMed limits: retstart cannot exceed 9998, and retmax is capped at 9999
pub const MAX_RETRIEVABLE: usize = 9999;

/// Client for the ESearch and EFetch endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_email("researcher@university.edu");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build configured HTTP client, using defaults");
                Client::new()
            });

        let base_url = config.effective_base_url().to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    /// Search PubMed and return matching PMIDs in the order ESearch lists them
    ///
    /// A blank query or a `limit` of zero returns an empty list without a
    /// request.
    ///
    /// # Errors
    ///
    /// * `PapersError::SearchLimitExceeded` - If `limit` exceeds [`MAX_RETRIEVABLE`]
    /// * `PapersError::RequestError` - If the HTTP request fails
    /// * `PapersError::ApiError` - If the server answers with a non-success status
    ///   or an `<ERROR>` element
    /// * `PapersError::XmlError` - If the response is not well-formed XML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pharma_papers::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_articles("cancer immunotherapy", 10).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_articles(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if limit > MAX_RETRIEVABLE {
            return Err(PapersError::SearchLimitExceeded {
                requested: limit,
                maximum: MAX_RETRIEVABLE,
            });
        }

        if query.trim().is_empty() || limit == 0 {
            debug!("Empty query or zero limit, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmode=xml&retmax={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let pmids = parse_ids_from_xml(&xml_text)?;
        info!(pmids_count = pmids.len(), "Search completed");
        Ok(pmids)
    }

    /// Fetch article records for `pmids` in a single EFetch request
    ///
    /// Identifiers are passed through as given and joined with commas.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pharma_papers::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let articles = client.fetch_articles(&["31978945", "33515491"]).await?;
    ///     for article in &articles {
    ///         println!("{:?}: {:?}", article.pmid, article.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_articles<S: AsRef<str>>(&self, pmids: &[S]) -> Result<Vec<ArticleRecord>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let id_list = pmids
            .iter()
            .map(|id| urlencoding::encode(id.as_ref()).into_owned())
            .collect::<Vec<_>>()
            .join(",");

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url, id_list
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let articles = parse_articles_from_xml(&xml_text)?;
        info!(
            requested = pmids.len(),
            parsed = articles.len(),
            "Fetch completed"
        );
        Ok(articles)
    }

    /// Send a GET request, appending the configured `email`/`tool` parameters
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PapersError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
