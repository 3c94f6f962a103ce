//! # DFDL-style record layouts
//!
//! The record shape comes from an XML schema in the DFDL dialect: a
//! top-level `complexType` holds a `sequence` of `element` nodes, and each
//! element carries a `dfdl:length` attribute with its fixed width. Only
//! names and lengths matter here, the rest of the schema vocabulary is
//! ignored.

use displaydoc::Display;
use log::warn;
use thiserror::Error;

/// Field width assumed when an element declares none.
pub const DEFAULT_FIELD_LENGTH: usize = 26;

/// A single named, fixed-width field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// The element name from the schema.
    pub name: String,
    /// The width in record characters.
    pub length: usize,
}

/// The ordered field list of one record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    /// The name of the matched complex type.
    pub type_name: String,
    /// The fields in document order.
    pub fields: Vec<FieldSpec>,
}

/// Error locating the record shape in a schema
#[derive(Debug, Display, Error)]
pub enum LayoutError {
    /// no complex type matching `{marker}` in the schema
    SchemaNotFound {
        /// The type-name fragment that was searched for.
        marker: String,
    },
    /// complex type `{type_name}` has no element sequence
    MissingSequence {
        /// The name of the matched complex type.
        type_name: String,
    },
    /// malformed schema document: {0}
    Xml(#[from] roxmltree::Error),
}

impl RecordLayout {
    /// Finds the first top-level complex type whose name contains `marker`
    /// (case-insensitive) and collects its element sequence.
    ///
    /// Elements without a `name` attribute are skipped with a warning.
    /// A `dfdl:length` that is missing or not a whole number falls back to
    /// [`DEFAULT_FIELD_LENGTH`].
    pub fn parse(xml: &str, marker: &str) -> Result<Self, LayoutError> {
        let doc = roxmltree::Document::parse(xml)?;
        let marker_lc = marker.to_lowercase();

        let complex = doc
            .root_element()
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "complexType")
            .find(|n| match n.attribute("name") {
                Some(name) => name.to_lowercase().contains(&marker_lc),
                None => false,
            })
            .ok_or_else(|| LayoutError::SchemaNotFound {
                marker: marker.to_owned(),
            })?;
        let type_name = complex.attribute("name").unwrap_or_default().to_owned();

        let sequence = complex
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == "sequence")
            .ok_or_else(|| LayoutError::MissingSequence {
                type_name: type_name.clone(),
            })?;

        let mut fields = Vec::new();
        for element in sequence
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "element")
        {
            let name = match element.attribute("name") {
                Some(name) => name.to_owned(),
                None => {
                    warn!("skipping unnamed element in `{}`", type_name);
                    continue;
                }
            };
            let length = attr_local(element, "length")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(DEFAULT_FIELD_LENGTH);
            fields.push(FieldSpec { name, length });
        }
        if fields.is_empty() {
            return Err(LayoutError::MissingSequence { type_name });
        }

        Ok(RecordLayout { type_name, fields })
    }

    /// The sum of all declared field widths, duplicates included.
    pub fn total_length(&self) -> usize {
        self.fields.iter().map(|f| f.length).sum()
    }
}

/// Reads an attribute by local name, ignoring any namespace prefix.
fn attr_local<'a>(node: roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value())
}
