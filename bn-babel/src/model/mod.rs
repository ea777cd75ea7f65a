//! Structured document model for post content.
//!
//! A [`Document`](nodes::Document) is an ordered list of blocks whose leaves are text
//! runs with bold/italic/underline flags. The editor works on a flat [line view](lines)
//! of the same tree, and every decoded document passes through the [repair pass](repair).

pub mod lines;
pub mod nodes;
pub mod repair;

pub use nodes::*;
