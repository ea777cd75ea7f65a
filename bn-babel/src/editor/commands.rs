//! Editing commands as pure transforms: `apply(state, command) -> state'`.
//!
//! Every command works on the line view of the document (see
//! [`crate::model::lines`]) and converts back once at the end, so selections stay
//! valid however lists are wrapped or unwrapped.
//!
//! # Mark activity
//!
//! Whether a mark counts as active is decided by one representative point, the
//! selection anchor, not by the whole selection. A selection over mixed runs is
//! therefore flipped all-or-nothing based on the run at the anchor. On a boundary
//! between two runs the anchor belongs to the run inside the selection (the one
//! after it for a forward selection, the one before it for a backward one). A
//! collapsed cursor reads the run it would extend when typing, or the pending marks.

use super::runs::{self, Lean};
use super::selection::{Point, Selection};
use crate::error::EditError;
use crate::model::lines::{
    document_to_lines, lines_to_document, next_group, Line, LineBody, Membership,
};
use crate::model::repair::repaired;
use crate::model::{BlockKind, Document, Mark, Marks, Text, TextBlock, TextKind};

/// A user command issued against an editing session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToggleMark(Mark),
    ToggleBlock(BlockKind),
    InsertText(String),
    /// Split the line at the cursor.
    InsertBreak,
    DeleteSelection,
    Select(Selection),
}

/// Everything a command reads and produces.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub document: Document,
    pub selection: Selection,
    /// Marks applied to the next inserted text, set by toggling a mark while the
    /// selection is collapsed. Cleared whenever the selection moves.
    pub marks: Option<Marks>,
}

impl EditorState {
    /// A state with the cursor at the start of the (repaired) document.
    pub fn new(document: Document) -> Self {
        let document = if document.blocks.is_empty() {
            Document::empty()
        } else {
            repaired(document)
        };
        EditorState {
            document,
            selection: Selection::default(),
            marks: None,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        EditorState::new(Document::empty())
    }
}

/// Applies one command, returning the next state. The input state is untouched.
pub fn apply(state: &EditorState, command: &Command) -> Result<EditorState, EditError> {
    let mut lines = document_to_lines(&state.document);
    state.selection.validate(&lines)?;

    let mut selection = state.selection;
    let mut marks = state.marks;
    match command {
        Command::Select(next) => {
            next.validate(&lines)?;
            selection = *next;
            marks = None;
        }
        Command::ToggleMark(mark) => {
            marks = toggle_mark(&mut lines, selection, marks, *mark);
        }
        Command::ToggleBlock(kind) => toggle_block(&mut lines, selection, *kind)?,
        Command::InsertText(text) => {
            selection = insert_text(&mut lines, selection, marks, text)?;
            marks = None;
        }
        Command::InsertBreak => {
            selection = insert_break(&mut lines, selection);
            marks = None;
        }
        Command::DeleteSelection => {
            selection = Selection::collapsed(delete_range(&mut lines, selection));
            marks = None;
        }
    }

    Ok(EditorState {
        document: lines_to_document(lines),
        selection,
        marks,
    })
}

/// Whether `mark` is active at the selection anchor (or in the pending marks).
pub fn is_mark_active(state: &EditorState, mark: Mark) -> bool {
    let lines = document_to_lines(&state.document);
    mark_active(&lines, state.selection, state.marks, mark)
}

/// Whether any selected line, or the list holding it, has the given kind.
pub fn is_block_active(state: &EditorState, kind: BlockKind) -> bool {
    let lines = document_to_lines(&state.document);
    let (first, last) = (state.selection.start().line, state.selection.end().line);
    lines
        .get(first..=last)
        .is_some_and(|selected| block_active(selected, kind))
}

fn mark_active(lines: &[Line], selection: Selection, pending: Option<Marks>, mark: Mark) -> bool {
    if selection.is_collapsed() {
        if let Some(marks) = pending {
            return marks.has(mark);
        }
    }
    let lean = if selection.is_collapsed() || selection.is_backward() {
        Lean::Backward
    } else {
        Lean::Forward
    };
    anchor_marks(lines, selection.anchor, lean).has(mark)
}

fn anchor_marks(lines: &[Line], point: Point, lean: Lean) -> Marks {
    lines
        .get(point.line)
        .and_then(Line::runs)
        .map(|line_runs| runs::marks_at(line_runs, point.offset, lean))
        .unwrap_or_default()
}

fn block_active(lines: &[Line], kind: BlockKind) -> bool {
    lines.iter().any(|line| {
        line.list.is_some_and(|m| BlockKind::from(m.kind) == kind)
            || line.text_kind().is_some_and(|k| BlockKind::from(k) == kind)
    })
}

/// Flips `mark` over the selected runs, or over the pending marks when the
/// selection is collapsed. Returns the new pending marks.
fn toggle_mark(
    lines: &mut [Line],
    selection: Selection,
    pending: Option<Marks>,
    mark: Mark,
) -> Option<Marks> {
    let active = mark_active(lines, selection, pending, mark);

    if selection.is_collapsed() {
        let current =
            pending.unwrap_or_else(|| anchor_marks(lines, selection.anchor, Lean::Backward));
        return Some(current.with(mark, !active));
    }

    let (start, end) = (selection.start(), selection.end());
    for index in start.line..=end.line {
        let line = &mut lines[index];
        let from = if index == start.line { start.offset } else { 0 };
        let to = if index == end.line {
            end.offset
        } else {
            line.char_len()
        };
        let Some(line_runs) = line.runs_mut() else {
            continue;
        };
        if from >= to {
            continue;
        }
        let first = runs::split_at(line_runs, from);
        let last = runs::split_at(line_runs, to);
        for run in &mut line_runs[first..last] {
            let marks = run.marks().with(mark, !active);
            run.set_marks(marks);
        }
        runs::normalize(line_runs);
    }
    None
}

/// Retypes the selected lines, unwrapping them from any list first.
fn toggle_block(lines: &mut [Line], selection: Selection, kind: BlockKind) -> Result<(), EditError> {
    let target = match kind {
        BlockKind::ListItem => BlockKind::Paragraph,
        BlockKind::Link | BlockKind::Image => return Err(EditError::UnsupportedTarget(kind)),
        other => other,
    };
    let (first, last) = (selection.start().line, selection.end().line);
    let active = block_active(&lines[first..=last], target);
    let group = next_group(lines);

    for line in &mut lines[first..=last] {
        let LineBody::Text(block) = &mut line.body else {
            continue;
        };
        line.list = None;
        match target.as_list() {
            Some(list_kind) if !active => {
                block.kind = TextKind::ListItem;
                block.align = None;
                line.list = Some(Membership {
                    kind: list_kind,
                    group,
                });
            }
            Some(_) => block.kind = TextKind::Paragraph,
            None if active => block.kind = TextKind::Paragraph,
            None => block.kind = target.as_text().unwrap_or(TextKind::Paragraph),
        }
    }
    tracing::debug!(%target, active, lines = last - first + 1, "toggled block");
    Ok(())
}

fn insert_text(
    lines: &mut Vec<Line>,
    selection: Selection,
    pending: Option<Marks>,
    text: &str,
) -> Result<Selection, EditError> {
    let cursor = delete_range(lines, selection);
    let Some(line_runs) = lines[cursor.line].runs_mut() else {
        return Err(EditError::NotEditable(cursor.line));
    };
    let marks = pending.unwrap_or_else(|| runs::marks_at(line_runs, cursor.offset, Lean::Backward));
    let at = runs::split_at(line_runs, cursor.offset);
    line_runs.insert(at, Text::with_marks(text, marks));
    runs::normalize(line_runs);
    Ok(Selection::collapsed(Point::new(
        cursor.line,
        cursor.offset + text.chars().count(),
    )))
}

/// Splits the line at the cursor. The new line keeps the kind and list of the old
/// one; breaking after an image opens an empty paragraph.
fn insert_break(lines: &mut Vec<Line>, selection: Selection) -> Selection {
    let cursor = delete_range(lines, selection);
    let line = &mut lines[cursor.line];
    let next = match line.runs_mut() {
        Some(line_runs) => {
            let tail = runs::split_off(line_runs, cursor.offset);
            let mut next = line.clone();
            if let Some(next_runs) = next.runs_mut() {
                *next_runs = tail;
            }
            next
        }
        None => empty_line(),
    };
    lines.insert(cursor.line + 1, next);
    Selection::collapsed(Point::new(cursor.line + 1, 0))
}

/// Removes the selected content and returns where the cursor lands.
fn delete_range(lines: &mut Vec<Line>, selection: Selection) -> Point {
    if selection.is_collapsed() {
        return selection.focus;
    }
    let (start, end) = (selection.start(), selection.end());

    if start.line == end.line {
        if let Some(line_runs) = lines[start.line].runs_mut() {
            runs::remove_range(line_runs, start.offset, end.offset);
        }
        return start;
    }

    let tail = lines[end.line].runs().map(|line_runs| {
        let mut line_runs = line_runs.clone();
        runs::split_off(&mut line_runs, end.offset)
    });

    if lines[start.line].runs().is_some() {
        if let Some(head) = lines[start.line].runs_mut() {
            runs::split_off(head, start.offset);
            if let Some(tail) = tail {
                head.extend(tail);
                runs::normalize(head);
            }
        }
        lines.drain(start.line + 1..=end.line);
        return start;
    }

    // The selection starts on an image, which goes away entirely.
    match tail {
        Some(tail) => {
            if let Some(line_runs) = lines[end.line].runs_mut() {
                *line_runs = tail;
            }
            lines.drain(start.line..end.line);
        }
        None => {
            lines.drain(start.line..=end.line);
            if lines.is_empty() {
                lines.push(empty_line());
            }
        }
    }
    Point::new(start.line.min(lines.len() - 1), 0)
}

fn empty_line() -> Line {
    Line {
        list: None,
        body: LineBody::Text(TextBlock {
            kind: TextKind::Paragraph,
            align: None,
            children: vec![Text::default()],
        }),
    }
}
