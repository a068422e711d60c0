//! XML preprocessing and reader helpers

use std::borrow::Cow;
use std::sync::OnceLock;

use quick_xml::events::BytesText;
use quick_xml::Reader;
use regex::Regex;
use tracing::debug;

use crate::error::{PapersError, Result};

/// Strip inline HTML-like formatting tags from XML content
///
/// Handles tags like `<i>`, `<sup>`, `<sub>`, `<b>`, `<u>` that can appear in
/// `ArticleTitle` and `Affiliation`. Removing them up front keeps element text
/// contiguous so a title such as `CO<sub>2</sub> capture` reads `CO2 capture`.
///
/// # Example
///
/// ```
/// use pharma_papers::common::xml_utils::strip_inline_html_tags;
///
/// let xml = "<ArticleTitle>CO<sub>2</sub> levels</ArticleTitle>";
/// assert_eq!(
///     strip_inline_html_tags(xml),
///     "<ArticleTitle>CO2 levels</ArticleTitle>"
/// );
/// ```
pub fn strip_inline_html_tags(xml: &str) -> Cow<'_, str> {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("Failed to compile inline tag regex")
    });

    let cleaned = re.replace_all(xml, "");

    if let Cow::Owned(_) = cleaned {
        debug!(
            "Stripped inline HTML tags: original {} bytes -> cleaned {} bytes (removed {} bytes)",
            xml.len(),
            cleaned.len(),
            xml.len() - cleaned.len()
        );
    }

    cleaned
}

/// Create a configured `Reader` from a string slice.
///
/// `expand_empty_elements(true)` turns `<tag/>` into `Start` + `End` events so
/// the tree builder only has to handle one element shape. Text is not trimmed;
/// callers trim the collected text.
pub fn make_reader(content: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().expand_empty_elements = true;
    reader
}

/// Unescape a text event into an owned string
pub fn unescape_text(text: &BytesText) -> Result<String> {
    text.unescape()
        .map(|s| s.into_owned())
        .map_err(|e| PapersError::XmlError(e.to_string()))
}
