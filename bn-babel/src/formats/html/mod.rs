//! HTML format implementation
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for both directions:
//! - `html5ever`: Browser-grade HTML5 parser and serializer from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Stored posts contain markup written by hand, by the first editor release and by
//! a full WYSIWYG surface, so import has to survive anything a browser would.
//!
//! # Element Mapping Table
//!
//! | Block        | Export                      | Import                                        |
//! |--------------|-----------------------------|-----------------------------------------------|
//! | paragraph    | `<p>`                       | `<p>` and every unrecognized element          |
//! | heading1..3  | `<h1>`..`<h3>`              | `<h1>`..`<h3>`                                |
//! | blockquote   | `<blockquote>`              | `<blockquote>`                                |
//! | bulletedList | `<ul><li>`                  | `<ul>`, one item per direct child element     |
//! | numberedList | `<ol><li>`                  | `<ol>`, one item per direct child element     |
//! | listItem     | `<li>`                      | (only inside lists)                           |
//! | link         | `<a href>`                  | top-level `<a href>`                          |
//! | image        | `<img src alt="">`          | top-level `<img src>`                         |
//! | runs         | `<strong>`,`<em>`,`<u>`     | flattened to one unformatted run              |
//! | align        | `style="text-align: …"`     | dropped                                       |
//!
//! # Lossy Conversions
//!
//! Import keeps only the text of each top-level node, so inline formatting and any
//! nesting below the first level are lost. Export is lossless for the model.

mod parser;
mod serializer;

pub use parser::{detect_markup, parse_to_blocks};
pub use serializer::{serialize_to_html, serialize_to_html_with_options, HtmlOptions};

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::model::Document;
use std::collections::HashMap;

/// Format implementation for HTML
#[derive(Debug, Default, Clone)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// HTML format producing complete pages instead of fragments
    pub fn standalone(title: impl Into<String>) -> Self {
        Self::new(HtmlOptions::standalone(title))
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment (or standalone page) for display"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let blocks = parse_to_blocks(source);
        if blocks.is_empty() {
            Ok(Document::empty())
        } else {
            Ok(crate::model::repair::repaired(Document::new(blocks)))
        }
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_to_html_with_options(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut html_options = self.options.clone();
        html_options.standalone = bool_option(options, "standalone", html_options.standalone)?;
        if let Some(title) = options.get("title") {
            html_options.title = Some(title.clone());
        }
        serialize_to_html_with_options(doc, &html_options)
    }
}
