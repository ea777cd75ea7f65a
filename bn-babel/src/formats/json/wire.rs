//! Wire shape of the JSON encoding and its mapping to the document model.
//!
//! The stored JSON is an array of nodes keyed by `kind`:
//!
//! ```text
//! [{"kind":"heading1","children":[{"text":"Hi","bold":true}]},
//!  {"kind":"bulletedList","children":[{"kind":"listItem","children":[{"text":"One"}]}]},
//!  {"kind":"image","url":"https://cdn.example/cover.png"}]
//! ```
//!
//! Posts saved by the first editor release used `type` instead of `kind` and
//! kebab-case names (`heading-one`, `list-item`); both are accepted on read.

use crate::model::nodes::{
    flatten_text, Align, Block, BlockKind, ImageBlock, LinkBlock, ListBlock, ListItem, Text,
    TextBlock,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WireBlock {
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<WireNode>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireNode {
    Text(Text),
    Block(WireBlock),
}

/// Maps a wire node to a block, or `None` when it violates the block shape.
pub(crate) fn block_from_wire(wire: WireBlock) -> Option<Block> {
    let Some(kind) = BlockKind::parse(&wire.kind) else {
        // Unknown kinds degrade to a paragraph holding their flattened text.
        let runs = runs_from_wire(wire.children?);
        return Some(Block::paragraph(vec![Text::plain(flatten_text(&runs))]));
    };

    if kind == BlockKind::Image {
        return Some(Block::Image(ImageBlock {
            url: wire.url.unwrap_or_default(),
        }));
    }

    let children = wire.children?;

    if let Some(list_kind) = kind.as_list() {
        let items = children
            .into_iter()
            .map(list_item_from_wire)
            .collect::<Option<Vec<_>>>()?;
        return Some(Block::List(ListBlock {
            kind: list_kind,
            items,
        }));
    }

    let runs = runs_from_wire(children);
    if kind == BlockKind::Link {
        return Some(Block::Link(LinkBlock {
            url: wire.url.unwrap_or_default(),
            children: runs,
        }));
    }

    let text_kind = kind.as_text()?;
    Some(Block::Text(TextBlock {
        kind: text_kind,
        align: wire.align.as_deref().and_then(parse_align),
        children: runs,
    }))
}

fn list_item_from_wire(node: WireNode) -> Option<ListItem> {
    match node {
        WireNode::Block(block) if BlockKind::parse(&block.kind) == Some(BlockKind::ListItem) => {
            let children = block.children?;
            if children.iter().all(|c| matches!(c, WireNode::Text(_))) {
                Some(ListItem::new(runs_from_wire(children)))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Collects the runs of a text-bearing node. Inline elements (links inside a
/// paragraph, for instance) contribute their own runs in place.
fn runs_from_wire(children: Vec<WireNode>) -> Vec<Text> {
    let mut runs = Vec::new();
    for child in children {
        match child {
            WireNode::Text(text) => runs.push(text),
            WireNode::Block(block) => runs.extend(runs_from_wire(block.children.unwrap_or_default())),
        }
    }
    runs
}

fn parse_align(value: &str) -> Option<Align> {
    match value {
        "left" => Some(Align::Left),
        "center" => Some(Align::Center),
        "right" => Some(Align::Right),
        _ => None,
    }
}

fn align_name(align: Align) -> &'static str {
    match align {
        Align::Left => "left",
        Align::Center => "center",
        Align::Right => "right",
    }
}

pub(crate) fn block_to_wire(block: &Block) -> WireBlock {
    let kind = block.kind().as_str().to_string();
    match block {
        Block::Text(b) => WireBlock {
            kind,
            url: None,
            align: b.align.map(|a| align_name(a).to_string()),
            children: Some(runs_to_wire(&b.children)),
        },
        Block::List(b) => WireBlock {
            kind,
            url: None,
            align: None,
            children: Some(
                b.items
                    .iter()
                    .map(|item| {
                        WireNode::Block(WireBlock {
                            kind: BlockKind::ListItem.as_str().to_string(),
                            url: None,
                            align: None,
                            children: Some(runs_to_wire(&item.children)),
                        })
                    })
                    .collect(),
            ),
        },
        Block::Link(b) => WireBlock {
            kind,
            url: Some(b.url.clone()),
            align: None,
            children: Some(runs_to_wire(&b.children)),
        },
        Block::Image(b) => WireBlock {
            kind,
            url: Some(b.url.clone()),
            align: None,
            children: None,
        },
    }
}

fn runs_to_wire(runs: &[Text]) -> Vec<WireNode> {
    runs.iter().cloned().map(WireNode::Text).collect()
}
