use serde::Serialize;
use std::fmt;

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// End of input
    ///
    /// Returned once the cursor has consumed every character, and on every
    /// call after that.
    Eof,

    /// Root anchor
    ///
    /// # Examples
    /// ```text
    /// $
    /// $.store
    /// ```
    Root,

    /// Recursive descent, matching a member at any depth
    ///
    /// # Examples
    /// ```text
    /// $..book
    /// $..*
    /// ```
    RecursiveDescent,

    /// Member name made of ASCII letters, digits and underscores
    ///
    /// A run that is entirely digits is reclassified as [`TokenKind::Number`].
    ///
    /// # Examples
    /// ```text
    /// store
    /// book_2
    /// _id
    /// ```
    Identifier,

    /// Unsigned decimal run, only meaningful as an array index
    ///
    /// # Examples
    /// ```text
    /// 0
    /// 12
    /// ```
    Number,

    /// Wildcard member or array element
    Wildcard,

    /// Colon. Tokenized but never accepted by the grammar.
    Colon,

    /// Comma. Tokenized but never accepted by the grammar.
    Comma,

    /// Member access
    Dot,

    /// Left bracket opening an array selector
    LBracket,

    /// Right bracket closing an array selector
    RBracket,
}

impl TokenKind {
    /// Name used for this kind in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Root => "Root",
            TokenKind::RecursiveDescent => "RecursiveDescent",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Wildcard => "Wildcard",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::LBracket => "Lbracket",
            TokenKind::RBracket => "Rbracket",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the query string.
///
/// `start` and `end` are byte offsets into the original input, with
/// `end == start + literal.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, start: usize) -> Self {
        let literal = literal.into();
        let end = start + literal.len();
        Token {
            kind,
            literal,
            start,
            end,
        }
    }

    pub fn eof(position: usize) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' {}..{}",
            self.kind, self.literal, self.start, self.end
        )
    }
}
