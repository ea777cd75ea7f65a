//! Decoding tests
//!
//! Detection of the three stored encodings, the fallback ladder, and the
//! round-trip properties of the JSON encoding.

mod detection;
mod legacy;
mod roundtrip;
