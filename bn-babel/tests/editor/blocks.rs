//! Block toggling through a session.

use bn_babel::model::{ListItem, ListKind, TextKind};
use bn_babel::{Block, BlockKind, Command, Point, Selection, Session, Text};

fn select_lines(session: &mut Session, first: usize, last: usize) {
    session
        .apply(&Command::Select(Selection::new(
            Point::new(first, 0),
            Point::new(last, 0),
        )))
        .unwrap();
}

#[test]
fn test_bulleted_list_toggle_round_trip() {
    let mut session = Session::open("<p>Bring your admit card</p>");
    let original = session.document().clone();

    session
        .apply(&Command::ToggleBlock(BlockKind::BulletedList))
        .unwrap();
    assert_eq!(
        session.document().blocks,
        vec![Block::list(
            ListKind::Bulleted,
            vec![ListItem::new(vec![Text::plain("Bring your admit card")])]
        )]
    );
    assert!(session.is_block_active(BlockKind::BulletedList));

    session
        .apply(&Command::ToggleBlock(BlockKind::BulletedList))
        .unwrap();
    assert_eq!(session.document(), &original);
    assert_eq!(session.document().blocks[0].kind(), BlockKind::Paragraph);
}

#[test]
fn test_several_paragraphs_become_one_list() {
    let mut session = Session::open("<p>a</p><p>b</p><p>c</p>");
    select_lines(&mut session, 0, 1);
    session
        .apply(&Command::ToggleBlock(BlockKind::NumberedList))
        .unwrap();
    assert_eq!(
        session.document().blocks,
        vec![
            Block::list(
                ListKind::Numbered,
                vec![
                    ListItem::new(vec![Text::plain("a")]),
                    ListItem::new(vec![Text::plain("b")]),
                ]
            ),
            Block::paragraph(vec![Text::plain("c")]),
        ]
    );
}

#[test]
fn test_unwrapping_the_middle_item_splits_the_list() {
    let mut session = Session::open("<ul><li>a</li><li>b</li><li>c</li></ul>");
    select_lines(&mut session, 1, 1);
    session
        .apply(&Command::ToggleBlock(BlockKind::BulletedList))
        .unwrap();
    assert_eq!(
        session.document().blocks,
        vec![
            Block::list(ListKind::Bulleted, vec![ListItem::new(vec![Text::plain("a")])]),
            Block::paragraph(vec![Text::plain("b")]),
            Block::list(ListKind::Bulleted, vec![ListItem::new(vec![Text::plain("c")])]),
        ]
    );
    assert_eq!(session.selection(), Selection::collapsed(Point::new(1, 0)));
}

#[test]
fn test_quote_toggle() {
    let mut session = Session::open("<h2>Tip</h2>");
    session
        .apply(&Command::ToggleBlock(BlockKind::Blockquote))
        .unwrap();
    assert_eq!(
        session.document().blocks,
        vec![Block::text(TextKind::Blockquote, vec![Text::plain("Tip")])]
    );
    session
        .apply(&Command::ToggleBlock(BlockKind::Blockquote))
        .unwrap();
    assert_eq!(
        session.document().blocks,
        vec![Block::paragraph(vec![Text::plain("Tip")])]
    );
}

#[test]
fn test_list_item_target_behaves_as_paragraph() {
    let mut session = Session::open("<h1>Title</h1>");
    session
        .apply(&Command::ToggleBlock(BlockKind::ListItem))
        .unwrap();
    assert_eq!(
        session.document().blocks,
        vec![Block::paragraph(vec![Text::plain("Title")])]
    );
}
