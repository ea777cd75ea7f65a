//! Flat line view of a document.
//!
//! # The High-Level Concept
//!
//! Editing commands address positions by *line*: each top-level non-list block is one
//! line and each list item is one line that remembers which list it belongs to. Lists
//! are therefore not containers in this view but a membership tag carried by their items.
//!
//! Wrapping lines into a list or unwrapping them out of one only rewrites membership
//! tags, so line indices (and with them every selection) stay stable across block
//! toggles. Converting back groups adjacent lines with the same membership into a list.
//!
//! # The Algorithm
//!
//! 1. **Flattening:** walk the blocks in order; a list emits one line per item tagged
//!    with `(kind, group)` where `group` is the block index of the list.
//! 2. **Editing:** commands rewrite line bodies and membership tags in place.
//! 3. **Rebuilding:** walk the lines; a tagged line either extends the list opened by the
//!    previous line (same group) or opens a new list. Untagged lines become blocks.
//!
//! Lists without items produce no lines and vanish on the way back; callers run the
//! repair pass before flattening.

use super::nodes::{
    Block, Document, ImageBlock, LinkBlock, ListBlock, ListItem, ListKind, Text, TextBlock,
    TextKind,
};

/// One editable line of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub list: Option<Membership>,
    pub body: LineBody,
}

/// The list a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub kind: ListKind,
    pub group: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineBody {
    Text(TextBlock),
    Link(LinkBlock),
    Image(ImageBlock),
}

impl Line {
    pub fn runs(&self) -> Option<&Vec<Text>> {
        match &self.body {
            LineBody::Text(b) => Some(&b.children),
            LineBody::Link(b) => Some(&b.children),
            LineBody::Image(_) => None,
        }
    }

    pub fn runs_mut(&mut self) -> Option<&mut Vec<Text>> {
        match &mut self.body {
            LineBody::Text(b) => Some(&mut b.children),
            LineBody::Link(b) => Some(&mut b.children),
            LineBody::Image(_) => None,
        }
    }

    /// Length of the line's text in characters; images have length zero.
    pub fn char_len(&self) -> usize {
        self.runs()
            .map(|runs| runs.iter().map(Text::char_len).sum())
            .unwrap_or(0)
    }

    pub fn text_kind(&self) -> Option<TextKind> {
        match &self.body {
            LineBody::Text(b) => Some(b.kind),
            _ => None,
        }
    }
}

/// Converts a document to its flat line view.
pub fn document_to_lines(doc: &Document) -> Vec<Line> {
    let mut lines = Vec::new();
    for (index, block) in doc.blocks.iter().enumerate() {
        match block {
            Block::Text(b) => lines.push(Line {
                list: None,
                body: LineBody::Text(b.clone()),
            }),
            Block::Link(b) => lines.push(Line {
                list: None,
                body: LineBody::Link(b.clone()),
            }),
            Block::Image(b) => lines.push(Line {
                list: None,
                body: LineBody::Image(b.clone()),
            }),
            Block::List(ListBlock { kind, items }) => {
                let membership = Membership {
                    kind: *kind,
                    group: index,
                };
                for item in items {
                    lines.push(Line {
                        list: Some(membership),
                        body: LineBody::Text(TextBlock {
                            kind: TextKind::ListItem,
                            align: None,
                            children: item.children.clone(),
                        }),
                    });
                }
            }
        }
    }
    lines
}

/// Rebuilds a document from its line view.
pub fn lines_to_document(lines: Vec<Line>) -> Document {
    let mut blocks: Vec<Block> = Vec::new();
    let mut open_group: Option<usize> = None;

    for line in lines {
        match (line.list, line.body) {
            (Some(membership), LineBody::Text(text)) => {
                let item = ListItem::new(text.children);
                let extends_open = open_group == Some(membership.group)
                    && matches!(blocks.last(), Some(Block::List(l)) if l.kind == membership.kind);
                if extends_open {
                    if let Some(Block::List(list)) = blocks.last_mut() {
                        list.items.push(item);
                    }
                } else {
                    blocks.push(Block::list(membership.kind, vec![item]));
                    open_group = Some(membership.group);
                }
            }
            (_, body) => {
                open_group = None;
                blocks.push(match body {
                    LineBody::Text(b) => Block::Text(b),
                    LineBody::Link(b) => Block::Link(b),
                    LineBody::Image(b) => Block::Image(b),
                });
            }
        }
    }

    Document { blocks }
}

/// A group id no line currently uses.
pub fn next_group(lines: &[Line]) -> usize {
    lines
        .iter()
        .filter_map(|l| l.list.map(|m| m.group))
        .max()
        .map_or(0, |g| g + 1)
}
