//! Report rows for articles with company-affiliated authors

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::affiliation::AffiliationClassifier;
use crate::pubmed::models::{ArticleRecord, NOT_AVAILABLE};

/// Separator between joined values in a report field
pub const FIELD_SEPARATOR: &str = "; ";

/// Value of `non_academic_authors` when every affiliated author is academic
pub const NO_AUTHORS: &str = "None";

/// CSV column names, in output order
pub const CSV_HEADERS: [&str; 6] = [
    "PubMed_ID",
    "Title",
    "Publication Date",
    "Non Academic Author(s)",
    "Company Affiliations",
    "Corresponding Author Email",
];

/// One output row describing a qualifying article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleReport {
    #[serde(rename = "PubMed_ID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non Academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliations")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_emails: String,
}

impl ArticleReport {
    /// Field values paired with their column names, in column order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            (CSV_HEADERS[0], self.pubmed_id.as_str()),
            (CSV_HEADERS[1], self.title.as_str()),
            (CSV_HEADERS[2], self.publication_date.as_str()),
            (CSV_HEADERS[3], self.non_academic_authors.as_str()),
            (CSV_HEADERS[4], self.company_affiliations.as_str()),
            (CSV_HEADERS[5], self.corresponding_author_emails.as_str()),
        ]
    }

    /// Classify an article's affiliations and build its report row
    ///
    /// Returns `None` unless at least one author affiliation matches the
    /// company keywords. Authors without affiliation text are ignored.
    pub fn from_article(
        article: &ArticleRecord,
        classifier: &AffiliationClassifier,
    ) -> Option<Self> {
        let mut non_academic_authors = Vec::new();
        let mut company_affiliations = OrderedSet::default();
        let mut emails = OrderedSet::default();

        for author in &article.authors {
            let Some(affiliation) = author.affiliation.as_deref() else {
                continue;
            };
            let outcome = classifier.classify(affiliation);

            if !outcome.is_academic {
                non_academic_authors.push(format!("{} ({})", author.full_name(), affiliation));
            }
            if outcome.is_pharma_company {
                company_affiliations.insert(affiliation.to_string());
            }
            for email in outcome.emails {
                emails.insert(email);
            }
        }

        if company_affiliations.is_empty() {
            return None;
        }

        let non_academic_authors = if non_academic_authors.is_empty() {
            NO_AUTHORS.to_string()
        } else {
            non_academic_authors.join(FIELD_SEPARATOR)
        };

        let corresponding_author_emails = if emails.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            emails.join(FIELD_SEPARATOR)
        };

        Some(Self {
            pubmed_id: article
                .pmid
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            title: article
                .title
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            publication_date: article.pub_date.display(),
            non_academic_authors,
            company_affiliations: company_affiliations.join(FIELD_SEPARATOR),
            corresponding_author_emails,
        })
    }
}

/// Build reports for every qualifying article, preserving article order
pub fn build_reports(
    articles: &[ArticleRecord],
    classifier: &AffiliationClassifier,
) -> Vec<ArticleReport> {
    let reports: Vec<ArticleReport> = articles
        .iter()
        .filter_map(|article| ArticleReport::from_article(article, classifier))
        .collect();

    debug!(
        articles = articles.len(),
        qualifying = reports.len(),
        "Total articles found with pharma affiliations: {}",
        reports.len()
    );
    reports
}

/// Insertion-ordered de-duplication
#[derive(Debug, Default)]
struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    fn insert(&mut self, value: String) {
        if self.seen.insert(value.clone()) {
            self.items.push(value);
        }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn join(&self, sep: &str) -> String {
        self.items.join(sep)
    }
}
