//! Posts saved by earlier releases of the site.

use bn_babel::model::{Align, ListItem, ListKind, TextBlock, TextKind};
use bn_babel::{decode, detect, Block, Encoding, Text};

#[test]
fn test_first_editor_release_node_shape() {
    let raw = r#"[
        {"type":"heading-one","children":[{"text":"Syllabus"}]},
        {"type":"bulleted-list","children":[
            {"type":"list-item","children":[{"text":"Physics"}]},
            {"type":"list-item","children":[{"text":"Chemistry","italic":true}]}
        ]}
    ]"#;
    assert_eq!(detect(raw).encoding(), Encoding::Json);
    let doc = decode(raw);
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(
        doc.blocks[0],
        Block::text(TextKind::Heading1, vec![Text::plain("Syllabus")])
    );
    match &doc.blocks[1] {
        Block::List(list) => {
            assert_eq!(list.kind, ListKind::Bulleted);
            assert_eq!(list.items.len(), 2);
            assert!(list.items[1].children[0].italic);
        }
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn test_alignment_is_kept_and_unknown_values_dropped() {
    let doc = decode(
        r#"[{"kind":"paragraph","align":"center","children":[{"text":"c"}]},{"kind":"paragraph","align":"justify","children":[{"text":"j"}]}]"#,
    );
    assert_eq!(
        doc.blocks,
        vec![
            Block::Text(TextBlock {
                kind: TextKind::Paragraph,
                align: Some(Align::Center),
                children: vec![Text::plain("c")],
            }),
            Block::paragraph(vec![Text::plain("j")]),
        ]
    );
}

#[test]
fn test_unknown_json_kind_degrades_to_paragraph() {
    let doc = decode(
        r#"[{"kind":"callout","children":[{"text":"Note: "},{"text":"exams moved","bold":true}]}]"#,
    );
    assert_eq!(
        doc.blocks,
        vec![Block::paragraph(vec![Text::plain("Note: exams moved")])]
    );
}

#[test]
fn test_naive_html_one_paragraph_per_blob() {
    let doc = decode("<p>First paragraph.</p>\n<p>Second paragraph.</p>\n");
    assert_eq!(
        doc.blocks,
        vec![
            Block::paragraph(vec![Text::plain("First paragraph.")]),
            Block::paragraph(vec![Text::plain("Second paragraph.")]),
        ]
    );
}

#[test]
fn test_rich_wysiwyg_html_is_flattened() {
    let raw = concat!(
        "<!-- generated -->",
        "<h3>Notes <em>for</em> <strong>Grade 12</strong></h3>",
        "<div class=\"wrapper\"><p>Inner <span style=\"color:red\">text</span></p></div>",
        "<ol><li>One <a href=\"/x\">link</a></li><li><p>Two</p></li></ol>",
        "<blockquote>Quote</blockquote>",
    );
    assert_eq!(detect(raw).encoding(), Encoding::Markup);
    assert_eq!(
        decode(raw).blocks,
        vec![
            Block::text(TextKind::Heading3, vec![Text::plain("Notes for Grade 12")]),
            Block::paragraph(vec![Text::plain("Inner text")]),
            Block::list(
                ListKind::Numbered,
                vec![
                    ListItem::new(vec![Text::plain("One link")]),
                    ListItem::new(vec![Text::plain("Two")]),
                ]
            ),
            Block::text(TextKind::Blockquote, vec![Text::plain("Quote")]),
        ]
    );
}

#[test]
fn test_markup_images_and_links() {
    let doc = decode(r#"<img src="/media/poster.jpg"><a href="/category/science">Science</a>"#);
    assert_eq!(
        doc.blocks,
        vec![
            Block::image("/media/poster.jpg"),
            Block::link("/category/science", vec![Text::plain("Science")]),
        ]
    );
}
