use crate::ast::{Token, TokenKind};
use thiserror::Error;

/// Failure while scanning a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A member-name run contains something other than an ASCII letter,
    /// digit or underscore.
    #[error("{ch}: invalid identifier")]
    InvalidIdentifier { ch: char, position: usize },
}

impl LexError {
    /// Byte offset of the offending character.
    pub fn position(&self) -> usize {
        match self {
            LexError::InvalidIdentifier { position, .. } => *position,
        }
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    // byte offset of `position` in the original string
    offset: usize,
    failed: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            offset: 0,
            failed: false,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.offset += ch.len_utf8();
            self.position += 1;
        }
    }

    fn single(&mut self, kind: TokenKind, literal: &str) -> Token {
        let token = Token::new(kind, literal, self.offset);
        self.advance();
        token
    }

    /// Scans a member name or index. The run ends when the next character is
    /// a delimiter; anything else that is not a valid identifier character is
    /// an error rather than a boundary.
    fn read_identifier(&mut self) -> Result<Token, LexError> {
        let start = self.offset;
        let mut literal = String::new();

        while let Some(ch) = self.current_char() {
            if !is_identifier_char(ch) {
                return Err(LexError::InvalidIdentifier {
                    ch,
                    position: self.offset,
                });
            }
            literal.push(ch);
            self.advance();

            if self.current_char().is_none_or(is_delimiter) {
                break;
            }
        }

        let kind = if literal.bytes().all(|b| b.is_ascii_digit()) {
            TokenKind::Number
        } else {
            TokenKind::Identifier
        };
        Ok(Token::new(kind, literal, start))
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = match self.current_char() {
            None => Token::eof(self.offset),
            Some('$') => self.single(TokenKind::Root, "$"),
            Some('.') => {
                if self.peek_char(1) == Some('.') {
                    let token = Token::new(TokenKind::RecursiveDescent, "..", self.offset);
                    self.advance();
                    self.advance();
                    token
                } else {
                    self.single(TokenKind::Dot, ".")
                }
            }
            Some('*') => self.single(TokenKind::Wildcard, "*"),
            Some('[') => self.single(TokenKind::LBracket, "["),
            Some(']') => self.single(TokenKind::RBracket, "]"),
            Some(',') => self.single(TokenKind::Comma, ","),
            Some(':') => self.single(TokenKind::Colon, ":"),
            Some(_) => match self.read_identifier() {
                Ok(token) => token,
                Err(e) => {
                    self.failed = true;
                    return Err(e);
                }
            },
        };

        log::trace!("lexed {}", token);
        Ok(token)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, the end of input. Stops after
    /// the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is(TokenKind::Eof) => None,
            other => Some(other),
        }
    }
}

/// Scans the whole query, including the trailing `Eof` token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_delimiter(ch: char) -> bool {
    matches!(ch, '.' | ',' | ':' | '[' | ']' | '*' | '$' | ' ')
}

#[test]
fn test_recursive_descent_vs_dot() {
    let mut lexer = Lexer::new("$..a.b");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Root);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::RecursiveDescent);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dot);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_number_reclassification() {
    let mut lexer = Lexer::new("12[a1]");
    let number = lexer.next_token().unwrap();
    assert_eq!(number, Token::new(TokenKind::Number, "12", 0));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LBracket);
    let ident = lexer.next_token().unwrap();
    assert_eq!(ident, Token::new(TokenKind::Identifier, "a1", 3));
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("$");
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token().unwrap(), Token::eof(1));
    assert_eq!(lexer.next_token().unwrap(), Token::eof(1));
}
