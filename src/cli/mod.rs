//! CLI support for jsonpath-ast
//!
//! Provides programmatic access to the `jpath` commands so they can be
//! embedded in other tools and tested without spawning the binary.

mod check;
mod docs;
mod inspect;

pub use check::{CheckOutcome, check_lines, execute_check};
pub use docs::{DocTopic, get_doc_topic, get_docs_overview};
pub use inspect::{InspectOptions, execute_parse, execute_tokens};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No query argument and nothing piped on stdin
    #[error("No query provided. Pass a query or pipe queries to stdin, one per line.")]
    NoInput,

    /// At least one query of a batch check failed
    #[error("{0} of {1} queries are invalid")]
    InvalidQueries(usize, usize),

    #[error("Unknown topic: '{0}'\nRun 'jpath docs' to see available topics.")]
    UnknownTopic(String),
}

impl From<crate::LexError> for CliError {
    fn from(e: crate::LexError) -> Self {
        CliError::Parse(e.into())
    }
}
