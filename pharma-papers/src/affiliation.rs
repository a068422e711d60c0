//! Affiliation classification heuristics
//!
//! An affiliation is *academic* when it contains any academic keyword as a
//! case-insensitive substring, and a *pharma company* when any company keyword
//! appears as a case-insensitive whole word. Keywords are regex-escaped and
//! then wrapped in `\b`, so keywords that end in punctuation (`Inc.`, `Ltd.`)
//! only match when a word character follows the period.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{PapersError, Result};

/// Keywords marking an affiliation as academic
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "University",
    "Institute",
    "Department",
    "Hospital",
    "Research",
    "Clinic",
    "Center",
    "College",
    "Faculty",
];

/// Keywords marking an affiliation as a pharmaceutical or biotech company
pub const PHARMA_KEYWORDS: &[&str] = &[
    "Pharma",
    "Biotech",
    "Inc.",
    "Ltd.",
    "GmbH",
    "Corporation",
    "Therapeutics",
    "Solutions",
    "Sciences",
    "Lifesciences",
    "Biosciences",
    "MedTech",
    "Biopharma",
    "Oncology",
    "Medicines",
    "Vaccines",
    "Diagnostics",
    "Biosystems",
    "Laboratories",
    "Genomics",
    "Biotechnology",
    "Theranostics",
    "Biologics",
    "Immunotherapy",
];

fn default_academic() -> Vec<String> {
    ACADEMIC_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_pharma() -> Vec<String> {
    PHARMA_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Keyword lists used by [`AffiliationClassifier`]
///
/// Can be loaded from YAML; a list missing from the file keeps its default.
///
/// ```yaml
/// academic: [University, Hospital]
/// pharma: [Pharma, GmbH]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default = "default_academic")]
    pub academic: Vec<String>,
    #[serde(default = "default_pharma")]
    pub pharma: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            academic: default_academic(),
            pharma: default_pharma(),
        }
    }
}

impl KeywordConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PapersError::ConfigError(format!("keyword file: {}", e)))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }
}

/// Outcome of classifying a single affiliation string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub is_academic: bool,
    pub is_pharma_company: bool,
    pub emails: Vec<String>,
}

/// Keyword-based affiliation classifier
///
/// # Example
///
/// ```
/// use pharma_papers::AffiliationClassifier;
///
/// let classifier = AffiliationClassifier::default();
/// assert!(classifier.is_academic("Dept. of Biology, Stanford University"));
/// assert!(classifier.is_pharma_company("XYZ Pharma Inc., Boston, MA"));
/// assert!(!classifier.is_pharma_company("Department of Pharmacology"));
/// ```
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    academic: Vec<String>,
    pharma: Option<Regex>,
}

impl AffiliationClassifier {
    /// Build a classifier from keyword lists
    ///
    /// Blank keywords are ignored. An empty company list matches nothing.
    #[instrument(skip(config), fields(academic = config.academic.len(), pharma = config.pharma.len()))]
    pub fn new(config: &KeywordConfig) -> Result<Self> {
        let academic = config
            .academic
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let escaped: Vec<String> = config
            .pharma
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        let pharma = if escaped.is_empty() {
            None
        } else {
            let pattern = format!(r"\b(?:{})\b", escaped.join("|"));
            debug!(pattern = %pattern, "Compiled company keyword pattern");
            Some(
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| PapersError::ConfigError(e.to_string()))?,
            )
        };

        Ok(Self { academic, pharma })
    }

    /// Case-insensitive substring match against the academic keywords
    pub fn is_academic(&self, affiliation: &str) -> bool {
        let lower = affiliation.to_lowercase();
        self.academic.iter().any(|keyword| lower.contains(keyword))
    }

    /// Case-insensitive whole-word match against the company keywords
    pub fn is_pharma_company(&self, affiliation: &str) -> bool {
        self.pharma
            .as_ref()
            .is_some_and(|re| re.is_match(affiliation))
    }

    /// All email-like substrings, in order of appearance
    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        extract_emails(text)
    }

    pub fn classify(&self, affiliation: &str) -> Classification {
        Classification {
            is_academic: self.is_academic(affiliation),
            is_pharma_company: self.is_pharma_company(affiliation),
            emails: self.extract_emails(affiliation),
        }
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(&KeywordConfig::default()).expect("built-in keyword lists compile")
    }
}

/// Extract every `local@domain.tld` substring from `text`
///
/// Repeated addresses are returned repeatedly; callers de-duplicate.
pub fn extract_emails(text: &str) -> Vec<String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Failed to compile email regex")
    });

    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
