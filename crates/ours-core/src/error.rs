//! Parse errors, each pinned to the 1-based input line that triggered it.

use thiserror::Error;

/// Errors raised while reading an `ours` timetable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line 1 is not a `/* ours@X.Y */` header.
    #[error("line {line}: unsupported syntax file, expected a `/* ours@X.Y */` header")]
    UnsupportedSyntax { line: usize },

    #[error("line {line}: mismatched file syntax version, expected {expected}, found {found}")]
    VersionMismatch {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: activity with ID `{id}` is already registered")]
    DuplicateActivity { line: usize, id: String },

    #[error("line {line}: color `{color}` not found in registered colors")]
    UnknownColor { line: usize, color: String },

    #[error("line {line}: activity with ID `{id}` not found in registered activities")]
    UnknownActivity { line: usize, id: String },

    #[error("line {line}: day `{day}` is not one of MON-FRI or 01-05")]
    InvalidDay { line: usize, day: String },

    #[error("line {line}: time `{time}` is outside the allowed schedule window")]
    InvalidTime { line: usize, time: String },

    #[error("line {line}: invalid syntax rule")]
    InvalidSyntax { line: usize },
}

impl ParseError {
    /// The input line the error refers to.
    pub const fn line(&self) -> usize {
        match self {
            Self::UnsupportedSyntax { line }
            | Self::VersionMismatch { line, .. }
            | Self::DuplicateActivity { line, .. }
            | Self::UnknownColor { line, .. }
            | Self::UnknownActivity { line, .. }
            | Self::InvalidDay { line, .. }
            | Self::InvalidTime { line, .. }
            | Self::InvalidSyntax { line } => *line,
        }
    }
}
