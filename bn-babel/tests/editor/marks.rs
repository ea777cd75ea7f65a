//! Mark toggling through a session.

use bn_babel::{Command, Mark, Point, Selection, Session};

fn select(session: &mut Session, line: usize, from: usize, to: usize) {
    session
        .apply(&Command::Select(Selection::new(
            Point::new(line, from),
            Point::new(line, to),
        )))
        .unwrap();
}

#[test]
fn test_toggle_bold_twice_restores_the_runs() {
    let mut session = Session::open("<p>Admission opens on Monday</p>");
    let original = session.document().clone();
    select(&mut session, 0, 10, 15);

    let first = session.apply(&Command::ToggleMark(Mark::Bold)).unwrap();
    assert_eq!(
        first.as_deref(),
        Some(
            r#"[{"kind":"paragraph","children":[{"text":"Admission "},{"text":"opens","bold":true},{"text":" on Monday"}]}]"#
        )
    );

    session.apply(&Command::ToggleMark(Mark::Bold)).unwrap();
    assert_eq!(session.document(), &original);
}

#[test]
fn test_every_mark_toggles_independently() {
    let mut session = Session::open("<p>abc</p>");
    select(&mut session, 0, 0, 3);
    for mark in [Mark::Bold, Mark::Italic, Mark::Underline] {
        session.apply(&Command::ToggleMark(mark)).unwrap();
    }
    assert_eq!(
        session.value(),
        r#"[{"kind":"paragraph","children":[{"text":"abc","bold":true,"italic":true,"underline":true}]}]"#
    );
    session.apply(&Command::ToggleMark(Mark::Italic)).unwrap();
    assert_eq!(
        session.value(),
        r#"[{"kind":"paragraph","children":[{"text":"abc","bold":true,"underline":true}]}]"#
    );
}

// The activity check reads the run at the anchor only. A selection that starts
// in a bold run unbolds everything; the same range selected backwards from a
// plain run bolds everything.
#[test]
fn test_mixed_selection_uses_the_anchor_run() {
    let stored = r#"[{"kind":"paragraph","children":[{"text":"bold","bold":true},{"text":" plain"}]}]"#;

    let mut forward = Session::open(stored);
    select(&mut forward, 0, 0, 10);
    assert!(forward.is_mark_active(Mark::Bold));
    forward.apply(&Command::ToggleMark(Mark::Bold)).unwrap();
    assert_eq!(
        forward.value(),
        r#"[{"kind":"paragraph","children":[{"text":"bold plain"}]}]"#
    );

    let mut backward = Session::open(stored);
    select(&mut backward, 0, 10, 0);
    assert!(!backward.is_mark_active(Mark::Bold));
    backward.apply(&Command::ToggleMark(Mark::Bold)).unwrap();
    assert_eq!(
        backward.value(),
        r#"[{"kind":"paragraph","children":[{"text":"bold plain","bold":true}]}]"#
    );
}

#[test]
fn test_pending_marks_apply_to_typed_text() {
    let mut session = Session::new();
    let changed = session.apply(&Command::ToggleMark(Mark::Italic)).unwrap();
    assert_eq!(changed, None);
    assert!(session.is_mark_active(Mark::Italic));

    session
        .apply(&Command::InsertText("Note".to_string()))
        .unwrap();
    session.apply(&Command::ToggleMark(Mark::Italic)).unwrap();
    session
        .apply(&Command::InsertText(": read".to_string()))
        .unwrap();
    assert_eq!(
        session.value(),
        r#"[{"kind":"paragraph","children":[{"text":"Note","italic":true},{"text":": read"}]}]"#
    );
}
