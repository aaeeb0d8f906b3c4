//! Syntax-only validation of path queries

use super::CliError;
use crate::{ParseError, parse};
use std::fmt;
use std::io::BufRead;

/// Result of validating one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub query: String,
    pub error: Option<ParseError>,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => f.write_str("ok"),
            Some(e) => write!(f, "error: {}", e),
        }
    }
}

/// Validate a single query
pub fn execute_check(query: &str) -> CheckOutcome {
    CheckOutcome {
        query: query.to_string(),
        error: parse(query).err(),
    }
}

/// Validate one query per line. Blank lines are skipped; trailing line
/// endings are not part of the query.
pub fn check_lines<R: BufRead>(reader: R) -> Result<Vec<CheckOutcome>, CliError> {
    let mut outcomes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let query = line.trim_end_matches('\r');
        if query.trim().is_empty() {
            continue;
        }
        outcomes.push(execute_check(query));
    }
    log::debug!("checked {} queries", outcomes.len());
    Ok(outcomes)
}
