//! XML helpers shared by the ESearch and EFetch parsers

pub mod xml_tree;
pub mod xml_utils;

pub use xml_tree::{parse_document, XmlAccess, XmlElement};
