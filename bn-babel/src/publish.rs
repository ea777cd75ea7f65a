//! Document publishing pipeline.
//!
//! Two entry points live here:
//!
//! - [`render_stored`] is the public read path: given the string the backend stored
//!   for a post, produce HTML for the post page. It runs the same detection as
//!   [`crate::decode`] so posts saved under an older encoding still display.
//! - [`publish`] converts an already decoded document to any registered format and
//!   either returns it or writes it to disk.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::detect::{detect, StoredContent};
use crate::error::FormatError;
use crate::formats::html::serialize_to_html;
use crate::model::{Block, Document, Text};
use crate::registry::FormatRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// What the read path does with content stored as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupPolicy {
    /// Emit the stored markup unchanged, keeping rich WYSIWYG formatting.
    #[default]
    PassThrough,
    /// Re-render the lossy decoded tree, normalizing the markup.
    Rebuild,
}

/// Options for [`render_stored`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub legacy_markup: MarkupPolicy,
}

/// Renders a document to an HTML fragment. Total: a serializer failure is logged
/// and yields an empty fragment.
pub fn to_html(doc: &Document) -> String {
    serialize_to_html(doc).unwrap_or_else(|err| {
        tracing::error!(%err, "failed to render document");
        String::new()
    })
}

/// Renders a stored post body for display.
///
/// An empty or whitespace-only body renders as `""`, so a post with no content shows
/// nothing. This differs from [`crate::decode`], which hands the editor the canonical
/// empty document (one empty paragraph, `<p></p>` through [`to_html`]) to type into.
pub fn render_stored(raw: &str, options: &RenderOptions) -> String {
    match detect(raw) {
        StoredContent::Empty => String::new(),
        StoredContent::Json(doc) => to_html(&doc),
        StoredContent::Markup(doc) => match options.legacy_markup {
            MarkupPolicy::PassThrough => raw.to_string(),
            MarkupPolicy::Rebuild => to_html(&doc),
        },
        StoredContent::PlainText(text) => to_html(&Document::new(vec![Block::paragraph(vec![
            Text::plain(text),
        ])])),
    }
}

/// Specifies how to publish a document.
///
/// Use the builder pattern to configure the publication:
///
/// ```ignore
/// let spec = PublishSpec::new(&document, "html")
///     .with_output_path("post.html")
///     .with_option("standalone", "true");
/// ```
///
/// If no output path is provided, the serialized content is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The decoded document to convert.
    pub document: &'a Document,
    /// Target format name (e.g., "json", "html", "text").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., pretty printing, standalone pages).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    /// Creates a publish request for the given document and format.
    pub fn new(document: &'a Document, format: &'a str) -> Self {
        Self {
            document,
            format,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a format-specific option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Adds several format-specific options.
    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options.extend(options);
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output path was given).
    InMemory(String),
    /// Path to the written file (when output path was specified).
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    /// The published artifact (in-memory content or file path).
    pub artifact: PublishArtifact,
}

/// Publishes a document as described by `spec`.
///
/// Uses the default format registry to find the appropriate serializer.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - The format is not supported
/// - Serialization fails
/// - File I/O fails
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let text = registry.serialize_with_options(spec.document, spec.format, &spec.options)?;
    match spec.output {
        Some(path) => write_to_path(path, text).map(|path| PublishResult {
            artifact: PublishArtifact::File(path),
        }),
        None => Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        }),
    }
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    fs::write(&path, text)
        .map(|_| path.clone())
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}
