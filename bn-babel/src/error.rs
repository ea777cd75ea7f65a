//! Error types for format and editing operations

use crate::model::BlockKind;
use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the operation
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors raised by editing commands
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// A selection point addresses a line or offset outside the document
    InvalidSelection { line: usize, offset: usize },
    /// The command needs a text line but the selection sits on an image
    NotEditable(usize),
    /// Lines cannot be retyped to this kind
    UnsupportedTarget(BlockKind),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::InvalidSelection { line, offset } => {
                write!(f, "Selection point {line}:{offset} is outside the document")
            }
            EditError::NotEditable(line) => write!(f, "Line {line} holds no editable text"),
            EditError::UnsupportedTarget(kind) => {
                write!(f, "Cannot turn lines into '{kind}' blocks")
            }
        }
    }
}

impl std::error::Error for EditError {}
