//! Error types for the numex-core library.

use thiserror::Error;

/// Main error type for the numex library.
#[derive(Error, Debug)]
pub enum NumexError {
    /// A static normalization table is malformed.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invariant violations in the static unit/currency tables.
///
/// User input can never produce one of these; they point at a bad entry
/// in `extract::rules::tables`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A lookup key is empty.
    #[error("empty key in table {table}")]
    EmptyKey { table: &'static str },

    /// Lookups lowercase their input, so keys must already be lowercase.
    #[error("key {key:?} in table {table} is not lowercase")]
    NotLowercase { table: &'static str, key: &'static str },

    /// The same key appears twice.
    #[error("duplicate key {key:?} in table {table}")]
    DuplicateKey { table: &'static str, key: &'static str },

    /// An entry maps to an empty unit code or symbol.
    #[error("entry {key:?} in table {table} has an empty code")]
    EmptyCode { table: &'static str, key: &'static str },
}

/// Result type for the numex library.
pub type Result<T> = std::result::Result<T, NumexError>;
