//! Editing session tests.

mod blocks;
mod marks;
