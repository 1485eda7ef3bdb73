//! Data models for extracted values and configuration.

pub mod config;
pub mod finding;

pub use config::{ExtractionConfig, NumexConfig, OutputConfig};
pub use finding::{NumericFinding, NumericKind, Span};
