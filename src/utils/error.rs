//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a `.chi` log
///
/// Every variant carries the 1-based line number of the offending line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: malformed legend `{text}` (expected `Print_Legend <n>: <code>(<name>)`)")]
    LegendParse { line: usize, text: String },

    #[error("line {line}: column {column} value `{token}` is not a finite floating-point number")]
    NumericParse {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: data row has {found} columns but the header declared {expected}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: input truncated, {expected}")]
    TruncatedInput { line: usize, expected: String },

    #[error("line {line}: header row before `X` marker has no columns")]
    EmptyHeader { line: usize },
}

impl ParseError {
    /// Line number the error was raised on
    pub fn line(&self) -> usize {
        match self {
            Self::LegendParse { line, .. }
            | Self::NumericParse { line, .. }
            | Self::ColumnCount { line, .. }
            | Self::TruncatedInput { line, .. }
            | Self::EmptyHeader { line } => *line,
        }
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid JSON schema: {0}")]
    InvalidSchema(String),
}
