use tracing::{debug, instrument};

use crate::common::{parse_document, XmlAccess};
use crate::error::Result;
use crate::pubmed::models::{ArticleRecord, AuthorRecord, PublicationDate};

/// Extract one `PubmedArticle` element
///
/// Every field is optional. Absent elements and empty text become `None`
/// (or an empty name), so a sparse record never fails extraction.
pub fn extract_article<N: XmlAccess>(article: &N) -> ArticleRecord {
    let pub_date = PublicationDate {
        year: article.first_text(".//PubDate/Year"),
        month: article.first_text(".//PubDate/Month"),
        day: article.first_text(".//PubDate/Day"),
    };

    let authors = article
        .find_all(".//Author")
        .into_iter()
        .map(extract_author)
        .collect();

    ArticleRecord {
        pmid: article.first_text(".//PMID"),
        title: article.first_text(".//ArticleTitle"),
        pub_date,
        authors,
    }
}

fn extract_author<N: XmlAccess>(author: &N) -> AuthorRecord {
    AuthorRecord {
        fore_name: author.first_text("ForeName").unwrap_or_default(),
        last_name: author.first_text("LastName").unwrap_or_default(),
        affiliation: author.first_text(".//AffiliationInfo/Affiliation"),
    }
}

/// Parse every `PubmedArticle` in an EFetch XML response
///
/// Malformed markup fails the whole response with
/// [`PapersError::XmlError`](crate::PapersError::XmlError).
///
/// # Example
///
/// ```
/// use pharma_papers::pubmed::parse_articles_from_xml;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle><MedlineCitation><PMID>1</PMID>
///     <Article><ArticleTitle>First</ArticleTitle></Article>
///   </MedlineCitation></PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let articles = parse_articles_from_xml(xml)?;
/// assert_eq!(articles[0].title.as_deref(), Some("First"));
/// # Ok::<(), pharma_papers::PapersError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_articles_from_xml(xml: &str) -> Result<Vec<ArticleRecord>> {
    let root = parse_document(xml)?;

    let articles: Vec<ArticleRecord> = root
        .find_all(".//PubmedArticle")
        .into_iter()
        .map(extract_article)
        .collect();

    debug!(articles = articles.len(), "Parsed EFetch response");
    Ok(articles)
}
