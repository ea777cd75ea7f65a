//! JSON format implementation
//!
//! The JSON block array is the lossless encoding of a post: it is what the editor
//! saves, and the only encoding that survives a later re-edit without losing
//! inline formatting.
//!
//! # Reading
//!
//! A source is accepted only when it is a JSON array and every element has the
//! block shape (see [`wire`]). Accepted documents go through the repair pass, so
//! `{"kind":"paragraph","children":[]}` comes back with one empty run.
//!
//! # Writing
//!
//! Serialization is a pure function of the tree. Top-level blocks that fail the
//! structural invariants are dropped rather than repaired, and a document with no
//! valid block serializes to the empty string.

mod wire;

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::model::repair::repaired;
use crate::model::Document;
use std::collections::HashMap;
use wire::{block_from_wire, block_to_wire, WireBlock};

/// Interprets `raw` as a JSON block array, returning `None` if it is not one.
pub fn detect_json(raw: &str) -> Option<Document> {
    let wire: Vec<WireBlock> = serde_json::from_str(raw.trim()).ok()?;
    let blocks = wire
        .into_iter()
        .map(block_from_wire)
        .collect::<Option<Vec<_>>>()?;
    if blocks.is_empty() {
        return Some(Document::empty());
    }
    Some(repaired(Document::new(blocks)))
}

/// Encodes a document as a compact JSON block array.
pub fn encode(doc: &Document) -> String {
    encode_with(doc, false)
}

/// Encodes a document, optionally pretty-printed.
pub fn encode_with(doc: &Document, pretty: bool) -> String {
    let wire: Vec<WireBlock> = doc
        .blocks
        .iter()
        .filter(|block| {
            let valid = block.is_valid();
            if !valid {
                tracing::debug!(kind = %block.kind(), "dropping invalid block from encoding");
            }
            valid
        })
        .map(block_to_wire)
        .collect();

    if wire.is_empty() {
        return String::new();
    }

    let result = if pretty {
        serde_json::to_string_pretty(&wire)
    } else {
        serde_json::to_string(&wire)
    };
    result.unwrap_or_else(|err| {
        tracing::error!(%err, "failed to encode document as JSON");
        String::new()
    })
}

/// Format implementation for the JSON block array
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn pretty() -> Self {
        JsonFormat { pretty: true }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Lossless JSON array of content blocks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        if let Err(err) = serde_json::from_str::<serde_json::Value>(source) {
            return Err(FormatError::ParseError(format!("invalid JSON: {err}")));
        }
        detect_json(source).ok_or_else(|| {
            FormatError::ParseError("JSON is not an array of content blocks".to_string())
        })
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(encode_with(doc, self.pretty))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let pretty = bool_option(options, "pretty", self.pretty)?;
        Ok(encode_with(doc, pretty))
    }
}
