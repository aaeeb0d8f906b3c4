//! # Path Query Abstract Syntax Tree
//!
//! This module defines the tokens and the AST for a restricted JSONPath
//! subset. A query always starts at the root anchor and chains member and
//! array selectors:
//!
//! ```text
//! $.store.book[*]
//! $..author
//! $.store.*[0]
//! ```
//!
//! ## Layout
//!
//! - **[tokens]** - Lexical tokens produced by the lexer, with byte offsets
//! - **[steps]** - The seven step variants a path is made of
//! - **[path]** - The parsed path, an ordered sequence of steps
//!
//! ## Grammar
//!
//! The grammar never branches, so a parsed path is a flat sequence rather
//! than a tree. Each step only constrains the step right after it:
//!
//! | Step | May be followed by |
//! |---|---|
//! | `$` | `.`, `..`, `[` |
//! | `.` / `..` | identifier, `*` |
//! | identifier | `.`, `..`, `[`, end |
//! | `*`, `[n]`, `[*]` | `.`, `..`, `[`, end |
//!
//! Filters, slices, unions and negative indices are not part of the
//! language. `:` and `,` are still tokenized so that they produce a precise
//! error instead of an identifier failure.
//!
//! ## Rendering
//!
//! Paths render as `Kind(value)` pairs joined by arrows:
//!
//! ```text
//! $..book[0]  =>  Root($) -> RecursiveDescent(..) -> Identifier(book) -> ArrayIndex(0)
//! ```
pub mod path;
pub mod steps;
pub mod tokens;

pub use path::JsonPath;
pub use steps::{Step, StepKind};
pub use tokens::{Token, TokenKind};
