//! Detection ladder: empty → JSON → markup → raw text.

use bn_babel::model::{ListItem, ListKind, TextKind};
use bn_babel::{decode, detect, Block, Document, Encoding, Marks, Text};

#[test]
fn test_empty_and_blank_strings() {
    assert_eq!(decode(""), Document::empty());
    assert_eq!(decode("   "), Document::empty());
    assert_eq!(decode("\n\t \n"), Document::empty());
}

#[test]
fn test_json_heading_with_bold_run() {
    let doc = decode(r#"[{"kind":"heading1","children":[{"text":"Hi","bold":true}]}]"#);
    assert_eq!(
        doc.blocks,
        vec![Block::text(
            TextKind::Heading1,
            vec![Text::with_marks(
                "Hi",
                Marks {
                    bold: true,
                    ..Marks::default()
                }
            )]
        )]
    );
}

#[test]
fn test_naive_markup() {
    let raw = "<h2>Topic</h2><ul><li>One</li><li>Two</li></ul>";
    assert_eq!(detect(raw).encoding(), Encoding::Markup);
    let doc = decode(raw);
    assert_eq!(
        doc.blocks,
        vec![
            Block::text(TextKind::Heading2, vec![Text::plain("Topic")]),
            Block::list(
                ListKind::Bulleted,
                vec![
                    ListItem::new(vec![Text::plain("One")]),
                    ListItem::new(vec![Text::plain("Two")]),
                ]
            ),
        ]
    );
}

#[test]
fn test_leading_head_elements_stay_in_the_post() {
    let raw = "<title>Exam</title><p>body</p>";
    assert_eq!(detect(raw).encoding(), Encoding::Markup);
    assert_eq!(
        decode(raw).blocks,
        vec![
            Block::paragraph(vec![Text::plain("Exam")]),
            Block::paragraph(vec![Text::plain("body")]),
        ]
    );
}

#[test]
fn test_raw_text_fallback_is_verbatim() {
    let raw = "not json and not html-like <<<";
    assert_eq!(detect(raw).encoding(), Encoding::PlainText);
    assert_eq!(
        decode(raw).blocks,
        vec![Block::paragraph(vec![Text::plain(raw)])]
    );
}

#[test]
fn test_json_takes_priority_over_markup() {
    let raw = r#"[{"kind":"blockquote","children":[{"text":"<h1>not a heading</h1>"}]}]"#;
    assert_eq!(detect(raw).encoding(), Encoding::Json);
    assert_eq!(
        decode(raw).blocks,
        vec![Block::text(
            TextKind::Blockquote,
            vec![Text::plain("<h1>not a heading</h1>")]
        )]
    );
}

#[test]
fn test_malformed_json_falls_back_to_text() {
    let raw = r#"[{"kind":"paragraph","children":[{"text":"cut off"#;
    assert_eq!(detect(raw).encoding(), Encoding::PlainText);
    assert_eq!(decode(raw).plain_text(), raw);
}

#[test]
fn test_json_with_wrong_shape_is_not_json() {
    // A list whose children are runs instead of list items.
    let raw = r#"[{"kind":"bulletedList","children":[{"text":"x"}]}]"#;
    assert_ne!(detect(raw).encoding(), Encoding::Json);
}

#[test]
fn test_empty_children_are_repaired() {
    let doc = decode(r#"[{"kind":"paragraph","children":[]},{"kind":"numberedList","children":[]}]"#);
    assert_eq!(
        doc.blocks,
        vec![
            Block::paragraph(vec![Text::default()]),
            Block::list(ListKind::Numbered, vec![ListItem::new(vec![Text::default()])]),
        ]
    );
}

#[test]
fn test_images_and_links_in_json() {
    let doc = decode(
        r#"[{"kind":"image","url":"/media/a.png"},{"kind":"link","url":"https://bachelornepal.example","children":[{"text":"home"}]}]"#,
    );
    assert_eq!(
        doc.blocks,
        vec![
            Block::image("/media/a.png"),
            Block::link("https://bachelornepal.example", vec![Text::plain("home")]),
        ]
    );
}
