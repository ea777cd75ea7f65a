//! Post content model and format interoperability for BachelorNepal
//!
//!     This crate holds the structured document behind every post body: the block tree the
//!     editor mutates, the decoders that read any stored encoding back into it, and the
//!     renderers that turn it into HTML for the public site.
//!
//!     This is a pure lib, that is, it powers the bn cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it printing, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError, EditError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── detect.rs               # Stored-content detection ladder, decode()
//!     ├── publish.rs              # Public read path (render_stored) and publishing
//!     ├── model
//!     │   ├── nodes.rs            # Document, Block, Text
//!     │   ├── repair.rs           # Structural repair pass
//!     │   └── lines.rs            # Flat line view used by the editor
//!     ├── editor
//!     │   ├── selection.rs        # Point, Selection
//!     │   ├── runs.rs             # Run splitting and merging
//!     │   ├── commands.rs         # Command, apply()
//!     │   └── mod.rs              # Session
//!     └── formats
//!         ├── json                # Lossless stored encoding
//!         ├── html                # Legacy stored encodings and display rendering
//!         ├── text                # Plain text and excerpts
//!         └── treeviz             # Debug tree view
//!
//! Stored Encodings
//!
//!     A post body has been saved under three encodings over the life of the site: naive HTML
//!     (one `<p>` per paragraph), a JSON array of blocks, and rich HTML from a WYSIWYG
//!     surface. Nothing records which one a string uses, so [`decode`] detects it (see
//!     [`detect`]) and never fails: the worst case is a post shown as one paragraph of raw text.
//!
//!     New content is always written as JSON ([`encode`]), the only encoding that survives a
//!     later re-edit without losing inline formatting.
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod detect;
pub mod editor;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod publish;
pub mod registry;

pub use detect::{decode, detect, Encoding, StoredContent};
pub use editor::{Command, EditorState, Point, Selection, Session};
pub use error::{EditError, FormatError};
pub use format::Format;
pub use formats::json::encode;
pub use model::{Block, BlockKind, Document, Mark, Marks, Text};
pub use publish::{render_stored, to_html, MarkupPolicy, RenderOptions};
pub use registry::FormatRegistry;
