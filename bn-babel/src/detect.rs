//! Stored-content detection
//!
//! A stored post body is in exactly one of three historical encodings, and nothing
//! records which. Detection runs pure detectors in strict priority order and stops
//! at the first that accepts the string:
//!
//! 1. empty or whitespace-only → the canonical empty document
//! 2. a JSON array of blocks → the lossless editor encoding
//! 3. markup with at least one top-level element → naive or rich HTML
//! 4. anything else → raw text, kept verbatim in one paragraph
//!
//! Valid JSON of the right shape always wins over markup. Decoding never fails.

use crate::formats::html::detect_markup;
use crate::formats::json::detect_json;
use crate::model::{Block, Document, Text};
use std::fmt;

/// A stored string, classified by the encoding it was written in.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredContent {
    /// Empty or whitespace-only
    Empty,
    /// JSON array of blocks
    Json(Document),
    /// Naive or rich HTML, with its lossy decoding
    Markup(Document),
    /// Nothing structured; the raw string
    PlainText(String),
}

/// Names of the stored encodings, as reported to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Empty,
    Json,
    Markup,
    PlainText,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Empty => "empty",
            Encoding::Json => "json",
            Encoding::Markup => "markup",
            Encoding::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StoredContent {
    pub fn encoding(&self) -> Encoding {
        match self {
            StoredContent::Empty => Encoding::Empty,
            StoredContent::Json(_) => Encoding::Json,
            StoredContent::Markup(_) => Encoding::Markup,
            StoredContent::PlainText(_) => Encoding::PlainText,
        }
    }

    /// The document this content decodes to.
    pub fn into_document(self) -> Document {
        match self {
            StoredContent::Empty => Document::empty(),
            StoredContent::Json(doc) | StoredContent::Markup(doc) => doc,
            StoredContent::PlainText(raw) => {
                Document::new(vec![Block::paragraph(vec![Text::plain(raw)])])
            }
        }
    }
}

/// Classifies a stored string.
pub fn detect(raw: &str) -> StoredContent {
    if raw.trim().is_empty() {
        tracing::debug!("stored content is empty");
        return StoredContent::Empty;
    }
    if let Some(doc) = detect_json(raw) {
        tracing::debug!(blocks = doc.blocks.len(), "stored content is a JSON block array");
        return StoredContent::Json(doc);
    }
    if let Some(doc) = detect_markup(raw) {
        tracing::debug!(blocks = doc.blocks.len(), "stored content is markup");
        return StoredContent::Markup(doc);
    }
    tracing::warn!(
        len = raw.len(),
        "stored content has no structured encoding, keeping it as raw text"
    );
    StoredContent::PlainText(raw.to_string())
}

/// Decodes a stored string into a structurally valid document. Never fails.
pub fn decode(raw: &str) -> Document {
    detect(raw).into_document()
}
