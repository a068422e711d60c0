//! # pharma-papers
//!
//! Find PubMed articles written with pharmaceutical or biotech company
//! authors.
//!
//! The search runs in two stages against the NCBI E-utilities:
//!
//! 1. **ESearch** turns a free-text query into an ordered list of PMIDs.
//! 2. **EFetch** retrieves the article records. Every author affiliation is then
//!    screened with keyword heuristics, and articles with at least one company
//!    affiliation become [`ArticleReport`] rows.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pharma_papers::{export, PaperFinder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let finder = PaperFinder::new();
//!
//!     let pmids = finder.search("mRNA vaccine", 50).await?;
//!     let reports = finder.fetch_and_classify(&pmids).await?;
//!
//!     export::save_csv("results.csv", &reports)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Classification
//!
//! ```
//! use pharma_papers::AffiliationClassifier;
//!
//! let classifier = AffiliationClassifier::default();
//! let outcome = classifier.classify("XYZ Pharma Inc., Boston, MA, contact: j.smith@xyzpharma.com");
//! assert!(outcome.is_pharma_company);
//! assert!(!outcome.is_academic);
//! assert_eq!(outcome.emails, vec!["j.smith@xyzpharma.com"]);
//! ```

pub mod affiliation;
pub mod common;
pub mod config;
pub mod error;
pub mod export;
pub mod finder;
pub mod pubmed;
pub mod report;

// Re-export main types for convenience
pub use affiliation::{AffiliationClassifier, Classification, KeywordConfig};
pub use config::ClientConfig;
pub use error::{PapersError, Result};
pub use finder::PaperFinder;
pub use pubmed::{ArticleRecord, AuthorRecord, PubMedClient, PublicationDate};
pub use report::ArticleReport;
