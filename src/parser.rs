use crate::{
    ast::{JsonPath, Step, Token, TokenKind},
    lexer::{LexError, Lexer},
};
use std::{fmt, mem};
use thiserror::Error;

const AFTER_ROOT: &[TokenKind] = &[
    TokenKind::Dot,
    TokenKind::LBracket,
    TokenKind::RecursiveDescent,
];

const MEMBER: &[TokenKind] = &[TokenKind::Identifier, TokenKind::Wildcard];

const AFTER_IDENTIFIER: &[TokenKind] = &[
    TokenKind::LBracket,
    TokenKind::Dot,
    TokenKind::RecursiveDescent,
    TokenKind::Eof,
];

const AFTER_SELECTOR: &[TokenKind] = &[
    TokenKind::LBracket,
    TokenKind::Eof,
    TokenKind::Dot,
    TokenKind::RecursiveDescent,
];

const ARRAY_SELECTOR: &[TokenKind] = &[TokenKind::Wildcard, TokenKind::Number];

const CLOSE_BRACKET: &[TokenKind] = &[TokenKind::RBracket];

/// Set of token kinds a production would have accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected(pub &'static [TokenKind]);

impl Expected {
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0.contains(&kind)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{}", kind)?;
        }
        Ok(())
    }
}

/// Errors that abort a parse. The first one encountered wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("JSONPath must start with $")]
    RootMissing,

    #[error("unexpected EOF after root")]
    UnexpectedEnd,

    /// The root anchor is followed by something other than `.`, `[` or `..`.
    #[error("expected '.' or '[' or '..', got {found}")]
    UnexpectedAfterRoot { found: TokenKind, position: usize },

    /// The token after a production is not one it may be followed by.
    #[error("expected {expected} after {after}, got {found}")]
    UnexpectedTransition {
        expected: Expected,
        after: &'static str,
        found: TokenKind,
        position: usize,
    },

    /// A token that starts no production.
    #[error("expected token {found} at position {position}")]
    UnexpectedToken { found: TokenKind, position: usize },
}

impl ParseError {
    /// Byte offset of the offending input, when there is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lex(e) => Some(e.position()),
            ParseError::RootMissing | ParseError::UnexpectedEnd => None,
            ParseError::UnexpectedAfterRoot { position, .. }
            | ParseError::UnexpectedTransition { position, .. }
            | ParseError::UnexpectedToken { position, .. } => Some(*position),
        }
    }
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    fn transition_error(&self, expected: &'static [TokenKind], after: &'static str) -> ParseError {
        ParseError::UnexpectedTransition {
            expected: Expected(expected),
            after,
            found: self.current_token.kind,
            position: self.current_token.start,
        }
    }

    /// Fails unless the current token is one of `expected`.
    fn ensure(
        &self,
        expected: &'static [TokenKind],
        after: &'static str,
    ) -> Result<(), ParseError> {
        if Expected(expected).contains(self.current_token.kind) {
            Ok(())
        } else {
            Err(self.transition_error(expected, after))
        }
    }

    /// Moves past the current production and validates what follows it.
    fn expect_next(
        &mut self,
        expected: &'static [TokenKind],
        after: &'static str,
    ) -> Result<(), ParseError> {
        self.advance()?;
        self.ensure(expected, after)
    }

    /// Parse a complete path. The whole input must be consumed.
    pub fn parse(&mut self) -> Result<JsonPath, ParseError> {
        let result = self.parse_path();
        match &result {
            Ok(path) => log::debug!("parsed {} steps: {}", path.len(), path),
            Err(e) => log::debug!("parse failed: {}", e),
        }
        result
    }

    fn parse_path(&mut self) -> Result<JsonPath, ParseError> {
        if !self.check(TokenKind::Root) {
            return Err(ParseError::RootMissing);
        }
        let mut steps = vec![Step::Root];

        self.advance()?;
        if self.check(TokenKind::Eof) {
            return Err(ParseError::UnexpectedEnd);
        }
        if !AFTER_ROOT.contains(&self.current_token.kind) {
            return Err(ParseError::UnexpectedAfterRoot {
                found: self.current_token.kind,
                position: self.current_token.start,
            });
        }

        // Every production validates its follower, so the loop can only end on Eof.
        while !self.check(TokenKind::Eof) {
            let step = self.parse_step()?;
            log::trace!("step {}", step);
            steps.push(step);
        }

        Ok(JsonPath::from_steps(steps))
    }

    fn parse_step(&mut self) -> Result<Step, ParseError> {
        match self.current_token.kind {
            TokenKind::Dot => {
                self.expect_next(MEMBER, "Dot")?;
                Ok(Step::Dot)
            }
            TokenKind::RecursiveDescent => {
                self.expect_next(MEMBER, "RecursiveDescent")?;
                Ok(Step::RecursiveDescent)
            }
            TokenKind::Identifier => {
                let name = mem::take(&mut self.current_token.literal);
                self.expect_next(AFTER_IDENTIFIER, "Identifier")?;
                Ok(Step::Identifier(name))
            }
            TokenKind::Wildcard => {
                self.expect_next(AFTER_SELECTOR, "Wildcard")?;
                Ok(Step::Wildcard)
            }
            TokenKind::LBracket => self.parse_array_selector(),
            found => Err(ParseError::UnexpectedToken {
                found,
                position: self.current_token.start,
            }),
        }
    }

    /// `[*]` or `[n]`
    fn parse_array_selector(&mut self) -> Result<Step, ParseError> {
        self.advance()?; // consume '['

        let step = match self.current_token.kind {
            TokenKind::Wildcard => {
                self.expect_next(CLOSE_BRACKET, "Lbracket and Wildcard")?;
                Step::ArrayWildcard
            }
            TokenKind::Number => {
                let digits = mem::take(&mut self.current_token.literal);
                self.expect_next(CLOSE_BRACKET, "Lbracket and Number")?;
                Step::ArrayIndex(digits)
            }
            _ => return Err(self.transition_error(ARRAY_SELECTOR, "Lbracket")),
        };

        self.expect_next(AFTER_SELECTOR, "Array")?;
        Ok(step)
    }
}

/// Parses `query` with a fresh lexer and parser.
///
/// # Examples
///
/// ```
/// let path = jsonpath_ast::parse("$.store").unwrap();
/// assert_eq!(path.to_string(), "Root($) -> Dot(.) -> Identifier(store)");
///
/// let err = jsonpath_ast::parse("$").unwrap_err();
/// assert_eq!(err.to_string(), "unexpected EOF after root");
/// ```
pub fn parse(query: &str) -> Result<JsonPath, ParseError> {
    log::debug!("parsing {:?}", query);
    Parser::new(Lexer::new(query))?.parse()
}
