//! Plain text format
//!
//! Import turns every non-blank line into a paragraph. Export writes one line per
//! document line with light markers (`- ` and `1. ` for list items), which is what
//! post cards and search snippets need. The `excerpt` option truncates the output
//! to a number of characters on a word boundary.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::{flatten_text, Block, Document, ListKind, Text};
use std::collections::HashMap;

/// Format implementation for plain text
pub struct TextFormat;

/// Render a document as plain text lines.
pub fn to_plain_text(doc: &Document) -> String {
    let mut lines = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::Text(b) => lines.push(flatten_text(&b.children)),
            Block::Link(b) => lines.push(format!("{} <{}>", flatten_text(&b.children), b.url)),
            Block::Image(b) => lines.push(format!("[image: {}]", b.url)),
            Block::List(b) => {
                for (index, item) in b.items.iter().enumerate() {
                    let text = flatten_text(&item.children);
                    lines.push(match b.kind {
                        ListKind::Bulleted => format!("- {text}"),
                        ListKind::Numbered => format!("{}. {text}", index + 1),
                    });
                }
            }
        }
    }
    lines.join("\n")
}

/// Shortens text to at most `max_chars` characters, cutting at the last space and
/// appending an ellipsis when anything was removed.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text, one paragraph per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let blocks: Vec<Block> = source
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Block::paragraph(vec![Text::plain(line)]))
            .collect();
        if blocks.is_empty() {
            Ok(Document::empty())
        } else {
            Ok(Document::new(blocks))
        }
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_plain_text(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let text = to_plain_text(doc);
        match options.get("excerpt") {
            None => Ok(text),
            Some(raw) => {
                let max_chars = raw.parse::<usize>().map_err(|_| {
                    FormatError::SerializationError(format!(
                        "Invalid excerpt length '{raw}', expected a number"
                    ))
                })?;
                Ok(excerpt(&text, max_chars))
            }
        }
    }
}
