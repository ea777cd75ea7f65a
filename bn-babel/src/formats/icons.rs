//! Shared icon mapping for tree visualization
//!
//! Keeps the glyph used for each block kind in one place so every tree view of a
//! post looks the same.

use crate::model::BlockKind;

/// Get the Unicode icon for a block kind
pub fn get_icon(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Paragraph => "¶",
        BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 => "§",
        BlockKind::Blockquote => "❝",
        BlockKind::BulletedList | BlockKind::NumberedList => "☰",
        BlockKind::ListItem => "•",
        BlockKind::Link => "⊕",
        BlockKind::Image => "▣",
    }
}

/// Icon for the document root
pub const DOCUMENT_ICON: &str = "⧉";

/// Icon for an inline run
pub const RUN_ICON: &str = "◦";
