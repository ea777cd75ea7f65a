//! Rendering tests for the public read path and the registry formats.

mod export;
mod stored;
