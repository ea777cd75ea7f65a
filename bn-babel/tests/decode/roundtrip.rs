//! Round-trip properties of the JSON encoding.

use bn_babel::model::{Align, ListItem, ListKind, TextBlock, TextKind};
use bn_babel::{decode, encode, Block, Document, Text};
use proptest::prelude::*;

fn arb_text() -> impl Strategy<Value = Text> {
    (
        "[a-zA-Z0-9 <>&\"'é\\n]{0,12}",
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(text, bold, italic, underline)| Text {
            text,
            bold,
            italic,
            underline,
        })
}

fn arb_runs() -> impl Strategy<Value = Vec<Text>> {
    prop::collection::vec(arb_text(), 1..4)
}

fn arb_text_kind() -> impl Strategy<Value = TextKind> {
    prop_oneof![
        Just(TextKind::Paragraph),
        Just(TextKind::Heading1),
        Just(TextKind::Heading2),
        Just(TextKind::Heading3),
        Just(TextKind::Blockquote),
        Just(TextKind::ListItem),
    ]
}

fn arb_align() -> impl Strategy<Value = Option<Align>> {
    prop_oneof![
        Just(None),
        Just(Some(Align::Left)),
        Just(Some(Align::Center)),
        Just(Some(Align::Right)),
    ]
}

fn arb_block() -> impl Strategy<Value = Block> {
    prop_oneof![
        (arb_text_kind(), arb_align(), arb_runs()).prop_map(|(kind, align, children)| {
            Block::Text(TextBlock {
                kind,
                align,
                children,
            })
        }),
        (
            prop_oneof![Just(ListKind::Bulleted), Just(ListKind::Numbered)],
            prop::collection::vec(arb_runs().prop_map(ListItem::new), 1..4),
        )
            .prop_map(|(kind, items)| Block::list(kind, items)),
        ("/[a-z]{1,8}", arb_runs()).prop_map(|(url, runs)| Block::link(url, runs)),
        "/media/[a-z]{1,8}\\.png".prop_map(Block::image),
    ]
}

fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(arb_block(), 1..6).prop_map(Document::new)
}

fn arb_stored() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,40}",
        "(<(p|h1|h2|h3|ul|ol|li|em|strong|blockquote|div)>|[a-z .]{1,6}|</(p|h1|ul|ol|li|div)>){0,12}",
        arb_document().prop_map(|doc| encode(&doc)),
    ]
}

proptest! {
    #[test]
    fn test_json_round_trip_is_lossless(doc in arb_document()) {
        prop_assert_eq!(decode(&encode(&doc)), doc);
    }

    #[test]
    fn test_decode_encode_is_idempotent(raw in arb_stored()) {
        let once = decode(&raw);
        let twice = decode(&encode(&once));
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(decode(&encode(&twice)), once);
    }

    #[test]
    fn test_decode_always_yields_valid_blocks(raw in arb_stored()) {
        let doc = decode(&raw);
        prop_assert!(!doc.blocks.is_empty());
        prop_assert!(doc.blocks.iter().all(Block::is_valid));
    }
}

#[test]
fn test_canonical_empty_document_round_trips() {
    let encoded = encode(&Document::empty());
    assert_eq!(encoded, r#"[{"kind":"paragraph","children":[{"text":""}]}]"#);
    assert_eq!(decode(&encoded), Document::empty());
}

#[test]
fn test_document_without_blocks_encodes_to_empty_string() {
    assert_eq!(encode(&Document::default()), "");
}
