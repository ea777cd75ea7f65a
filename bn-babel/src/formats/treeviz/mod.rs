//! Treeviz formatter for post documents
//!
//! Treeviz is a visual representation of the block tree, handy when checking what
//! a stored post actually decodes to.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (3 blocks)
//! ├─ § heading1: Welcome
//! ├─ ☰ bulletedList (2 items)
//! │ ├─ • Physics
//! │ └─ • Chemistry
//! └─ ▣ /media/cover.png
//!
//! Icons
//!     Document: ⧉
//!     Paragraph: ¶
//!     Heading: §
//!     Blockquote: ❝
//!     List: ☰
//!     ListItem: •
//!     Link: ⊕
//!     Image: ▣
//!     Run: ◦

use super::icons::{get_icon, DOCUMENT_ICON, RUN_ICON};
use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::model::{flatten_text, Block, BlockKind, Document, Text, TextKind};
use std::collections::HashMap;

const LABEL_WIDTH: usize = 30;

fn truncate(label: &str) -> String {
    if label.chars().count() <= LABEL_WIDTH {
        label.to_string()
    } else {
        let cut: String = label.chars().take(LABEL_WIDTH - 1).collect();
        format!("{cut}…")
    }
}

fn run_label(run: &Text) -> String {
    let mut flags = Vec::new();
    if run.bold {
        flags.push("bold");
    }
    if run.italic {
        flags.push("italic");
    }
    if run.underline {
        flags.push("underline");
    }
    let text = truncate(&format!("{:?}", run.text));
    if flags.is_empty() {
        text
    } else {
        format!("{text} [{}]", flags.join(", "))
    }
}

fn block_label(block: &Block) -> String {
    match block {
        Block::Text(b) => {
            let label = truncate(&flatten_text(&b.children));
            match b.kind {
                TextKind::Paragraph => label,
                kind => format!("{}: {label}", BlockKind::from(kind)),
            }
        }
        Block::List(b) => format!("{} ({} items)", block.kind(), b.items.len()),
        Block::Link(b) => format!("{} → {}", truncate(&flatten_text(&b.children)), b.url),
        Block::Image(b) => b.url.clone(),
    }
}

fn format_runs(runs: &[Text], prefix: &str, output: &mut String) {
    for (i, run) in runs.iter().enumerate() {
        let connector = if i == runs.len() - 1 { "└─" } else { "├─" };
        output.push_str(&format!("{prefix}{connector} {RUN_ICON} {}\n", run_label(run)));
    }
}

/// Format a single block node
fn format_block(
    block: &Block,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    show_runs: bool,
) -> String {
    let mut output = String::new();
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(block.kind()),
        block_label(block)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    match block {
        Block::List(list) => {
            let count = list.items.len();
            for (i, item) in list.items.iter().enumerate() {
                let item_last = i == count - 1;
                output.push_str(&format!(
                    "{}{} {} {}\n",
                    child_prefix,
                    if item_last { "└─" } else { "├─" },
                    get_icon(BlockKind::ListItem),
                    truncate(&flatten_text(&item.children))
                ));
                if show_runs {
                    let item_prefix =
                        format!("{}{}", child_prefix, if item_last { "  " } else { "│ " });
                    format_runs(&item.children, &item_prefix, &mut output);
                }
            }
        }
        Block::Text(b) if show_runs => format_runs(&b.children, &child_prefix, &mut output),
        Block::Link(b) if show_runs => format_runs(&b.children, &child_prefix, &mut output),
        _ => {}
    }

    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    render_tree(doc, false)
}

/// Convert a document to treeviz string with optional parameters
///
/// # Parameters
///
/// - `"runs"`: When set to `"true"`, lists every inline run with its marks below
///   the block that holds it.
pub fn to_treeviz_str_with_params(
    doc: &Document,
    params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let show_runs = bool_option(params, "runs", false)?;
    Ok(render_tree(doc, show_runs))
}

fn render_tree(doc: &Document, show_runs: bool) -> String {
    let mut output = format!(
        "{} Document ({} blocks)\n",
        DOCUMENT_ICON,
        doc.blocks.len()
    );
    let count = doc.blocks.len();
    for (i, block) in doc.blocks.iter().enumerate() {
        output.push_str(&format_block(block, "", i, count, show_runs));
    }
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        to_treeviz_str_with_params(doc, options)
    }
}
