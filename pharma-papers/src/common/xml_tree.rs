//! Minimal element tree and path accessors over PubMed XML
//!
//! Parsers in [`crate::pubmed::parser`] only talk to the [`XmlAccess`] trait, so
//! the markup library stays an implementation detail of this module.
//!
//! Paths are a small subset of ElementTree syntax:
//!
//! - `A/B` selects `B` children of `A` children of the current element
//! - `.//A/B` selects `A` elements at any depth below the current element,
//!   then their `B` children
//!
//! Matches are returned in document order.

use quick_xml::events::Event;
use tracing::instrument;

use super::xml_utils::{make_reader, strip_inline_html_tags, unescape_text};
use crate::error::{PapersError, Result};

/// Read-only path access over an XML element
pub trait XmlAccess {
    /// Element name
    fn name(&self) -> &str;

    /// Trimmed text content of the element, `None` if empty
    fn text(&self) -> Option<&str>;

    /// All elements matching `path`, in document order
    fn find_all(&self, path: &str) -> Vec<&Self>;

    /// First element matching `path`
    fn find_first(&self, path: &str) -> Option<&Self> {
        self.find_all(path).into_iter().next()
    }

    /// Text of the first element matching `path`
    ///
    /// Returns `None` when no element matches or the first match has no text;
    /// later matches are not consulted.
    fn first_text(&self, path: &str) -> Option<String> {
        self.find_first(path)
            .and_then(|node| node.text())
            .map(str::to_string)
    }
}

/// An XML element with its direct text and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    fn collect_descendants<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.name == name {
                out.push(child);
            }
            child.collect_descendants(name, out);
        }
    }
}

impl XmlAccess for XmlElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    fn find_all(&self, path: &str) -> Vec<&Self> {
        let (descendant, rest) = match path.strip_prefix(".//") {
            Some(rest) => (true, rest),
            None => (false, path.strip_prefix("./").unwrap_or(path)),
        };

        let mut steps = rest.split('/').filter(|step| !step.is_empty());
        let Some(first) = steps.next() else {
            return Vec::new();
        };

        let mut current: Vec<&XmlElement> = if descendant {
            let mut found = Vec::new();
            self.collect_descendants(first, &mut found);
            found
        } else {
            self.children.iter().filter(|c| c.name == first).collect()
        };

        for step in steps {
            current = current
                .into_iter()
                .flat_map(|node| node.children.iter().filter(move |c| c.name == step))
                .collect();
        }

        current
    }
}

/// Parse an XML document into its root [`XmlElement`]
///
/// Inline formatting tags are stripped before parsing. Any reader error,
/// mismatched end tag, or unclosed element fails the whole document.
///
/// # Example
///
/// ```
/// use pharma_papers::common::{parse_document, XmlAccess};
///
/// let root = parse_document("<eSearchResult><IdList><Id>1</Id><Id>2</Id></IdList></eSearchResult>")?;
/// let ids: Vec<_> = root.find_all(".//Id").iter().filter_map(|n| n.text()).collect();
/// assert_eq!(ids, vec!["1", "2"]);
/// # Ok::<(), pharma_papers::PapersError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_document(xml: &str) -> Result<XmlElement> {
    let cleaned = strip_inline_html_tags(xml);
    let mut reader = make_reader(&cleaned);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            PapersError::XmlError(format!(
                "error at position {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(ref e) => {
                if root.is_some() && stack.is_empty() {
                    return Err(PapersError::XmlError(
                        "multiple root elements".to_string(),
                    ));
                }
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push(XmlElement::new(name));
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    PapersError::XmlError("unexpected closing tag".to_string())
                })?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(ref e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&unescape_text(e)?);
                }
            }
            Event::CData(ref e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(PapersError::XmlError(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| PapersError::XmlError("document has no root element".to_string()))
}
