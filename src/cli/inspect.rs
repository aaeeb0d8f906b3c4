//! Render the AST or token stream of a query

use super::CliError;
use crate::output::{to_json, to_json_pretty};
use crate::{parse, tokenize};
use serde::Serialize;

/// Options shared by the `parse` and `tokens` commands
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// The query to inspect
    pub query: String,
    /// Emit JSON instead of the text rendering
    pub json: bool,
    /// Indent JSON output
    pub pretty: bool,
}

impl InspectOptions {
    fn render_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CliError> {
        let json = if self.pretty {
            to_json_pretty(value)?
        } else {
            to_json(value)?
        };
        Ok(json)
    }
}

/// Parse the query and render its AST
pub fn execute_parse(options: &InspectOptions) -> Result<String, CliError> {
    let path = parse(&options.query)?;
    if options.json {
        options.render_json(&path)
    } else {
        Ok(path.to_string())
    }
}

/// Scan the query and render every token, the trailing EOF included
pub fn execute_tokens(options: &InspectOptions) -> Result<String, CliError> {
    let tokens = tokenize(&options.query)?;
    if options.json {
        options.render_json(&tokens)
    } else {
        let lines: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        Ok(lines.join("\n"))
    }
}
