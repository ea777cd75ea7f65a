//! Editing sessions over a post document.
//!
//! The commands themselves are pure (`apply(state, command) -> state'`); a
//! [`Session`] owns one evolving state and reports a freshly encoded document
//! after every command that changed the content, which is what the surrounding
//! form stores. Selection-only changes produce no new value.

pub mod commands;
pub mod runs;
pub mod selection;

pub use commands::{apply, is_block_active, is_mark_active, Command, EditorState};
pub use selection::{Point, Selection};

use crate::detect::decode;
use crate::error::EditError;
use crate::formats::json::encode;
use crate::model::{BlockKind, Document, Mark};

/// An editing session exclusively owning its document.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: EditorState,
}

impl Session {
    /// A session for new content, starting from the canonical empty document.
    pub fn new() -> Self {
        Session::default()
    }

    /// A session editing stored content, in whichever encoding it was saved.
    pub fn open(raw: &str) -> Self {
        Session {
            state: EditorState::new(decode(raw)),
        }
    }

    /// Applies a command. Returns the encoded document when the content changed.
    pub fn apply(&mut self, command: &Command) -> Result<Option<String>, EditError> {
        let next = apply(&self.state, command)?;
        let changed = next.document != self.state.document;
        self.state = next;
        tracing::debug!(?command, changed, "applied editor command");
        Ok(changed.then(|| encode(&self.state.document)))
    }

    pub fn document(&self) -> &Document {
        &self.state.document
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The current document, encoded for storage.
    pub fn value(&self) -> String {
        encode(&self.state.document)
    }

    pub fn is_mark_active(&self, mark: Mark) -> bool {
        is_mark_active(&self.state, mark)
    }

    pub fn is_block_active(&self, kind: BlockKind) -> bool {
        is_block_active(&self.state, kind)
    }
}
