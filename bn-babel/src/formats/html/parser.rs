//! HTML import (HTML → Document)
//!
//! This is a lossy, one-way degrade of stored markup, not a full markup reader:
//! only the top-level nodes of the fragment are mapped, and each one keeps just its
//! flattened text as a single unformatted run. Inline formatting inside markup is
//! intentionally not reconstructed.
//!
//! Pipeline: HTML string → html5ever fragment parser (body context) → RcDom → top-level nodes → blocks

use crate::model::repair::repaired;
use crate::model::{Block, Document, ListItem, ListKind, Text, TextKind};
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, ns, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Interprets `raw` as markup, returning `None` when it contains no element at the
/// top level (plain text is not markup).
pub fn detect_markup(raw: &str) -> Option<Document> {
    let dom = parse_fragment_dom(raw);
    let root = fragment_root(&dom)?;
    let has_element = root
        .children
        .borrow()
        .iter()
        .any(|child| matches!(child.data, NodeData::Element { .. }));
    if !has_element {
        return None;
    }

    let blocks = blocks_from_root(&root);
    if blocks.is_empty() {
        None
    } else {
        Some(repaired(Document::new(blocks)))
    }
}

/// Maps every top-level node of an HTML fragment to a block.
pub fn parse_to_blocks(raw: &str) -> Vec<Block> {
    let dom = parse_fragment_dom(raw);
    fragment_root(&dom)
        .map(|root| blocks_from_root(&root))
        .unwrap_or_default()
}

/// Parses `raw` as the contents of a `<body>` element. The returned dom owns every
/// node; handles into it are only usable while it is alive.
fn parse_fragment_dom(raw: &str) -> RcDom {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new(), false).one(raw)
}

/// The synthetic `<html>` element that holds the parsed fragment.
fn fragment_root(dom: &RcDom) -> Option<Handle> {
    find_child_element(&dom.document, "html")
}

fn find_child_element(parent: &Handle, tag: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| element_name(child).as_deref() == Some(tag))
        .cloned()
}

fn blocks_from_root(root: &Handle) -> Vec<Block> {
    root.children
        .borrow()
        .iter()
        .filter_map(block_from_node)
        .collect()
}

fn block_from_node(node: &Handle) -> Option<Block> {
    match &node.data {
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if text.trim().is_empty() {
                None
            } else {
                Some(Block::paragraph(vec![Text::plain(text)]))
            }
        }
        NodeData::Element { name, .. } => {
            let block = match &*name.local {
                "h1" => text_block(TextKind::Heading1, node),
                "h2" => text_block(TextKind::Heading2, node),
                "h3" => text_block(TextKind::Heading3, node),
                "blockquote" => text_block(TextKind::Blockquote, node),
                "ul" => list_block(ListKind::Bulleted, node),
                "ol" => list_block(ListKind::Numbered, node),
                "img" => Block::image(attribute(node, "src").unwrap_or_default()),
                "a" => match attribute(node, "href") {
                    Some(href) => Block::link(href, vec![Text::plain(text_content(node))]),
                    None => text_block(TextKind::Paragraph, node),
                },
                _ => text_block(TextKind::Paragraph, node),
            };
            Some(block)
        }
        _ => None,
    }
}

fn text_block(kind: TextKind, node: &Handle) -> Block {
    Block::text(kind, vec![Text::plain(text_content(node))])
}

fn list_block(kind: ListKind, node: &Handle) -> Block {
    let items = node
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .map(|child| ListItem::new(vec![Text::plain(text_content(child))]))
        .collect();
    Block::list(kind, items)
}

fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn attribute(node: &Handle, attr: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Concatenated text of every descendant text node.
fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}
