//! PubMed client for searching and fetching article metadata
//!
//! - `client` - ESearch/EFetch requests
//! - `models` - article, author and date records
//! - `parser` - XML response parsing

pub mod client;
pub mod models;
pub mod parser;

pub use client::{PubMedClient, MAX_RETRIEVABLE};
pub use models::{ArticleRecord, AuthorRecord, PublicationDate, NOT_AVAILABLE};
pub use parser::{extract_article, extract_ids, parse_articles_from_xml, parse_ids_from_xml};
