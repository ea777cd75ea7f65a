//! Format implementations
//!
//! This module contains all format implementations that convert between
//! post documents and their text representations.

pub mod html;
pub mod icons;
pub mod json;
pub mod text;
pub mod treeviz;

pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use text::TextFormat;
pub use treeviz::TreevizFormat;
