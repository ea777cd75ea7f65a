//! Export tests for the display renderer and the registry formats.

use bn_babel::model::{Align, ListItem, ListKind, TextBlock, TextKind};
use bn_babel::{decode, to_html, Block, Document, FormatRegistry, Marks, Text};
use insta::assert_snapshot;
use std::collections::HashMap;

fn marked(text: &str, bold: bool, italic: bool, underline: bool) -> Text {
    Text::with_marks(
        text,
        Marks {
            bold,
            italic,
            underline,
        },
    )
}

fn kitchensink() -> Document {
    Document::new(vec![
        Block::text(TextKind::Heading1, vec![Text::plain("Entrance Exam Guide")]),
        Block::Text(TextBlock {
            kind: TextKind::Paragraph,
            align: Some(Align::Center),
            children: vec![
                Text::plain("Read "),
                marked("carefully", true, false, false),
                Text::plain(" and "),
                marked("early", true, true, true),
                Text::plain("."),
            ],
        }),
        Block::list(
            ListKind::Numbered,
            vec![
                ListItem::new(vec![Text::plain("Physics")]),
                ListItem::new(vec![marked("Chemistry", false, true, false)]),
            ],
        ),
        Block::text(TextKind::Blockquote, vec![Text::plain("Practice beats <luck>.")]),
        Block::link("https://bachelornepal.example/blog", vec![Text::plain("More posts")]),
        Block::image("/media/exam.png"),
    ])
}

#[test]
fn test_stored_heading_renders_bold() {
    let doc = decode(r#"[{"kind":"heading1","children":[{"text":"Hi","bold":true}]}]"#);
    assert_eq!(to_html(&doc), "<h1><strong>Hi</strong></h1>");
}

#[test]
fn test_mark_nesting_is_strong_em_u() {
    let doc = Document::new(vec![Block::paragraph(vec![
        marked("b", true, false, false),
        marked("i", false, true, false),
        marked("u", false, false, true),
        marked("bu", true, false, true),
    ])]);
    assert_eq!(
        to_html(&doc),
        "<p><strong>b</strong><em>i</em><u>u</u><u><strong>bu</strong></u></p>"
    );
}

#[test]
fn test_kitchensink_html() {
    assert_snapshot!(to_html(&kitchensink()), @r#"<h1>Entrance Exam Guide</h1><p style="text-align: center">Read <strong>carefully</strong> and <u><em><strong>early</strong></em></u>.</p><ol><li>Physics</li><li><em>Chemistry</em></li></ol><blockquote>Practice beats &lt;luck&gt;.</blockquote><a href="https://bachelornepal.example/blog">More posts</a><img src="/media/exam.png" alt="">"#);
}

#[test]
fn test_kitchensink_treeviz() {
    let registry = FormatRegistry::default();
    let tree = registry.serialize(&kitchensink(), "treeviz").unwrap();
    assert_snapshot!(tree.trim_end(), @r"
    ⧉ Document (6 blocks)
    ├─ § heading1: Entrance Exam Guide
    ├─ ¶ Read carefully and early.
    ├─ ☰ numberedList (2 items)
    │ ├─ • Physics
    │ └─ • Chemistry
    ├─ ❝ blockquote: Practice beats <luck>.
    ├─ ⊕ More posts → https://bachelornepal.example/blog
    └─ ▣ /media/exam.png
    ");
}

#[test]
fn test_kitchensink_text() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.serialize(&kitchensink(), "text").unwrap(),
        "Entrance Exam Guide\n\
         Read carefully and early.\n\
         1. Physics\n\
         2. Chemistry\n\
         Practice beats <luck>.\n\
         More posts <https://bachelornepal.example/blog>\n\
         [image: /media/exam.png]"
    );
}

#[test]
fn test_text_excerpt_for_post_cards() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("excerpt".to_string(), "30".to_string());
    let excerpt = registry
        .serialize_with_options(&kitchensink(), "text", &options)
        .unwrap();
    assert_eq!(excerpt, "Entrance Exam Guide Read…");
}

#[test]
fn test_standalone_page() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("standalone".to_string(), "true".to_string());
    options.insert("title".to_string(), "Exam Guide".to_string());
    let page = registry
        .serialize_with_options(&kitchensink(), "html", &options)
        .unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Exam Guide</title>"));
    assert!(page.contains("<article class=\"post-content\">"));
    assert!(page.contains("<h1>Entrance Exam Guide</h1>"));
}

#[test]
fn test_html_round_trip_keeps_structure_but_not_marks() {
    let registry = FormatRegistry::default();
    let html = registry.serialize(&kitchensink(), "html").unwrap();
    let back = registry.parse(&html, "html").unwrap();
    assert_eq!(back.blocks.len(), 6);
    assert_eq!(back.plain_text(), kitchensink().plain_text());
    assert_eq!(
        back.blocks[2],
        Block::list(
            ListKind::Numbered,
            vec![
                ListItem::new(vec![Text::plain("Physics")]),
                ListItem::new(vec![Text::plain("Chemistry")]),
            ]
        )
    );
}
