//! PubMed XML parser module
//!
//! Parses ESearch and EFetch XML responses into identifiers and
//! [`ArticleRecord`](crate::pubmed::ArticleRecord)s. Field extraction is
//! written against [`XmlAccess`](crate::common::XmlAccess) so it does not
//! depend on the underlying XML library.
//!
//! # Module Organization
//!
//! - `esearch` - identifier list extraction
//! - `efetch` - article, date and author extraction

mod efetch;
mod esearch;

pub use efetch::{extract_article, parse_articles_from_xml};
pub use esearch::{extract_ids, parse_ids_from_xml};
