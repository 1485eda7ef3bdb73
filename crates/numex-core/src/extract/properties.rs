//! Property-based tests for the extraction pipeline.
//!
//! These check the guarantees callers rely on:
//!
//! - extraction is deterministic
//! - findings never overlap and come back in text order
//! - every `source` is exactly the text under its span
//! - every numeral the grammar can spell is read back
