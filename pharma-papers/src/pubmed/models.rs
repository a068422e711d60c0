use serde::{Deserialize, Serialize};

/// Placeholder used for missing identifiers, titles and dates
pub const NOT_AVAILABLE: &str = "N/A";

/// An author as listed in a PubMed record
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AuthorRecord {
    /// Given name (`ForeName`), empty when absent
    pub fore_name: String,
    /// Family name (`LastName`), empty when absent
    pub last_name: String,
    /// First listed affiliation, trimmed
    pub affiliation: Option<String>,
}

impl AuthorRecord {
    /// Display name: given and family name separated by a space, trimmed
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::pubmed::AuthorRecord;
    ///
    /// let author = AuthorRecord {
    ///     fore_name: String::new(),
    ///     last_name: "Consortium".to_string(),
    ///     affiliation: None,
    /// };
    /// assert_eq!(author.full_name(), "Consortium");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.fore_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Publication date components from `PubDate`
///
/// Each component is kept verbatim (`Month` is often an abbreviation such as
/// `Jan`).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PublicationDate {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl PublicationDate {
    /// Present components joined with `-`, or `"N/A"` when none are present
    pub fn display(&self) -> String {
        let parts: Vec<&str> = [&self.year, &self.month, &self.day]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            parts.join("-")
        }
    }
}

/// Article fields needed for affiliation screening
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ArticleRecord {
    /// PubMed ID
    pub pmid: Option<String>,
    /// Article title
    pub title: Option<String>,
    /// Publication date
    pub pub_date: PublicationDate,
    /// Authors in listed order
    pub authors: Vec<AuthorRecord>,
}
