//! HTML serialization (Document → HTML)
//!
//! Pipeline: Document → RcDom → HTML string (→ optional standalone page)
//!
//! Building an `RcDom` and letting html5ever serialize it means text and attribute
//! values are always escaped, whatever a post's runs contain.

use crate::error::FormatError;
use crate::model::{Align, Block, Document, Text};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Options for standalone page output
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete HTML page with the post stylesheet
    pub standalone: bool,
    /// Page title, used only for standalone output
    pub title: Option<String>,
}

impl HtmlOptions {
    pub fn standalone(title: impl Into<String>) -> Self {
        Self {
            standalone: true,
            title: Some(title.into()),
        }
    }
}

/// Render a document to an HTML fragment.
pub fn serialize_to_html(doc: &Document) -> Result<String, FormatError> {
    let container = build_html_dom(doc);
    serialize_children(&container)
}

/// Render a document with full options
pub fn serialize_to_html_with_options(
    doc: &Document,
    options: &HtmlOptions,
) -> Result<String, FormatError> {
    let fragment = serialize_to_html(doc)?;
    if options.standalone {
        let title = options.title.as_deref().unwrap_or("Post");
        Ok(wrap_in_document(&fragment, title))
    } else {
        Ok(fragment)
    }
}

/// Build a detached container element holding one node per block
fn build_html_dom(doc: &Document) -> Handle {
    let container = create_element("div", vec![]);
    for block in &doc.blocks {
        container.children.borrow_mut().push(block_to_node(block));
    }
    container
}

fn block_to_node(block: &Block) -> Handle {
    match block {
        Block::Text(b) => {
            let style = b.align.map(align_style);
            let attrs = match &style {
                Some(style) => vec![("style", style.as_str())],
                None => vec![],
            };
            let element = create_element(b.kind.tag_name(), attrs);
            append_runs(&element, &b.children);
            element
        }
        Block::List(b) => {
            let list = create_element(b.kind.tag_name(), vec![]);
            for item in &b.items {
                let li = create_element("li", vec![]);
                append_runs(&li, &item.children);
                list.children.borrow_mut().push(li);
            }
            list
        }
        Block::Link(b) => {
            let anchor = create_element("a", vec![("href", b.url.as_str())]);
            append_runs(&anchor, &b.children);
            anchor
        }
        Block::Image(b) => create_element("img", vec![("src", b.url.as_str()), ("alt", "")]),
    }
}

/// Add runs to an element. Marks wrap innermost-first: strong, then em, then u.
fn append_runs(parent: &Handle, runs: &[Text]) {
    for run in runs {
        let mut node = create_text(&run.text);
        if run.bold {
            node = wrap(node, "strong");
        }
        if run.italic {
            node = wrap(node, "em");
        }
        if run.underline {
            node = wrap(node, "u");
        }
        parent.children.borrow_mut().push(node);
    }
}

fn wrap(child: Handle, tag: &str) -> Handle {
    let element = create_element(tag, vec![]);
    element.children.borrow_mut().push(child);
    element
}

fn align_style(align: Align) -> String {
    let value = match align {
        Align::Left => "left",
        Align::Center => "center",
        Align::Right => "right",
    };
    format!("text-align: {value}")
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize each child of the container, without the container itself
fn serialize_children(container: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap the fragment in a complete HTML page with the embedded post stylesheet
fn wrap_in_document(body_html: &str, title: &str) -> String {
    let post_css = include_str!("../../../css/post.css");
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="bn-babel">
  <title>{escaped_title}</title>
  <style>
{post_css}
  </style>
</head>
<body>
<article class="post-content">
{body_html}
</article>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
