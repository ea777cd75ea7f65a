//! Helpers over a line's inline runs. Offsets are counted in characters.

use crate::model::{Marks, Text};

/// Which run a point on a boundary between two runs belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lean {
    /// The run starting at the point.
    Forward,
    /// The run ending at the point.
    Backward,
}

/// Index of the run holding `offset`.
///
/// Off the ends, the first or last run is used. `None` only for a line with no runs.
pub fn run_at(runs: &[Text], offset: usize, lean: Lean) -> Option<usize> {
    if runs.is_empty() {
        return None;
    }
    let mut start = 0;
    for (index, run) in runs.iter().enumerate() {
        let end = start + run.char_len();
        let holds = match lean {
            Lean::Forward => start <= offset && offset < end,
            Lean::Backward => start < offset && offset <= end,
        };
        if holds {
            return Some(index);
        }
        start = end;
    }
    match lean {
        Lean::Forward => Some(runs.len() - 1),
        Lean::Backward => Some(0),
    }
}

/// Marks of the run holding `offset`; a line without runs has no marks.
pub fn marks_at(runs: &[Text], offset: usize, lean: Lean) -> Marks {
    run_at(runs, offset, lean)
        .map(|index| runs[index].marks())
        .unwrap_or_default()
}

/// Makes sure a run boundary falls at `offset` and returns the index of the first
/// run starting there (`runs.len()` at the end of the line).
pub fn split_at(runs: &mut Vec<Text>, offset: usize) -> usize {
    let mut start = 0;
    for index in 0..runs.len() {
        if offset == start {
            return index;
        }
        let len = runs[index].char_len();
        if offset < start + len {
            let split = byte_index(&runs[index].text, offset - start);
            let tail_text = runs[index].text.split_off(split);
            let tail = Text::with_marks(tail_text, runs[index].marks());
            runs.insert(index + 1, tail);
            return index + 1;
        }
        start += len;
    }
    runs.len()
}

/// Removes the characters in `[from, to)`.
pub fn remove_range(runs: &mut Vec<Text>, from: usize, to: usize) {
    if from >= to {
        return;
    }
    let first = split_at(runs, from);
    let last = split_at(runs, to);
    runs.drain(first..last);
    normalize(runs);
}

/// Splits the runs at `offset`, returning everything after it.
pub fn split_off(runs: &mut Vec<Text>, offset: usize) -> Vec<Text> {
    let marks = marks_at(runs, offset, Lean::Backward);
    let at = split_at(runs, offset);
    let mut tail = runs.split_off(at);
    for part in [&mut *runs, &mut tail] {
        if part.is_empty() {
            part.push(Text::with_marks("", marks));
        }
        normalize(part);
    }
    tail
}

/// Merges adjacent runs with identical marks and drops empty runs, keeping at least
/// one run so the line stays valid.
pub fn normalize(runs: &mut Vec<Text>) {
    let fallback = runs.first().map(Text::marks).unwrap_or_default();
    let mut merged: Vec<Text> = Vec::with_capacity(runs.len());
    for run in runs.drain(..) {
        if run.text.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(prev) if prev.marks() == run.marks() => prev.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    if merged.is_empty() {
        merged.push(Text::with_marks("", fallback));
    }
    *runs = merged;
}

fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| index)
}
