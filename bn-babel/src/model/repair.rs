//! Structural repair pass.
//!
//! Every block except images must hold at least one child so that renderers and the
//! editor never meet a node they cannot process. Repair substitutes the smallest valid
//! content: a single empty run, or for lists a single item holding an empty run.

use super::nodes::{Block, Document, ListItem, Text};

/// Repairs every block of the document in place.
pub fn repair_document(doc: &mut Document) {
    for block in &mut doc.blocks {
        repair_block(block);
    }
}

/// Returns a repaired copy of the document.
pub fn repaired(mut doc: Document) -> Document {
    repair_document(&mut doc);
    doc
}

pub fn repair_block(block: &mut Block) {
    match block {
        Block::Text(b) => repair_runs(&mut b.children),
        Block::Link(b) => repair_runs(&mut b.children),
        Block::List(b) => {
            if b.items.is_empty() {
                b.items.push(ListItem::new(Vec::new()));
            }
            for item in &mut b.items {
                repair_runs(&mut item.children);
            }
        }
        Block::Image(_) => {}
    }
}

fn repair_runs(runs: &mut Vec<Text>) {
    if runs.is_empty() {
        runs.push(Text::default());
    }
}
