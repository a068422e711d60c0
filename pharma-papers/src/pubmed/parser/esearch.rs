use tracing::instrument;

use crate::common::{parse_document, XmlAccess};
use crate::error::{PapersError, Result};

/// Collect the text of every `Id` element, in document order
pub fn extract_ids<N: XmlAccess>(root: &N) -> Vec<String> {
    root.find_all(".//Id")
        .into_iter()
        .filter_map(|node| node.text())
        .map(str::to_string)
        .collect()
}

/// Parse PMIDs from an ESearch XML response
///
/// NCBI occasionally answers 200 OK with an `<ERROR>` element instead of a
/// result set; that is reported as [`PapersError::ApiError`].
///
/// # Example
///
/// ```
/// use pharma_papers::pubmed::parse_ids_from_xml;
///
/// let xml = r#"<eSearchResult><Count>2</Count><IdList><Id>38000001</Id><Id>38000002</Id></IdList></eSearchResult>"#;
/// assert_eq!(parse_ids_from_xml(xml)?, vec!["38000001", "38000002"]);
/// # Ok::<(), pharma_papers::PapersError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_ids_from_xml(xml: &str) -> Result<Vec<String>> {
    let root = parse_document(xml)?;

    if let Some(error_msg) = root.first_text("ERROR") {
        return Err(PapersError::ApiError {
            status: 200,
            message: format!("NCBI ESearch API error: {}", error_msg),
        });
    }

    Ok(extract_ids(&root))
}
