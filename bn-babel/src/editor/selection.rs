//! Selection points addressed by line and character offset.

use crate::error::EditError;
use crate::model::lines::Line;

/// A position in the line view: a line index and a character offset inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Point {
    pub line: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(line: usize, offset: usize) -> Self {
        Point { line, offset }
    }
}

/// An anchor (where the selection started) and a focus (where it ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: Point,
    pub focus: Point,
}

impl Selection {
    pub fn new(anchor: Point, focus: Point) -> Self {
        Selection { anchor, focus }
    }

    pub fn collapsed(point: Point) -> Self {
        Selection::new(point, point)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Whether the anchor comes after the focus.
    pub fn is_backward(&self) -> bool {
        self.anchor > self.focus
    }

    pub fn start(&self) -> Point {
        self.anchor.min(self.focus)
    }

    pub fn end(&self) -> Point {
        self.anchor.max(self.focus)
    }

    /// Checks both points against the line view.
    pub(crate) fn validate(&self, lines: &[Line]) -> Result<(), EditError> {
        for point in [self.anchor, self.focus] {
            let in_range = lines
                .get(point.line)
                .is_some_and(|line| point.offset <= line.char_len());
            if !in_range {
                return Err(EditError::InvalidSelection {
                    line: point.line,
                    offset: point.offset,
                });
            }
        }
        Ok(())
    }
}
