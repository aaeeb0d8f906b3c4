//! Grammar reference for the jpath CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Syntax,
    Tokens,
    Errors,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "tokens" | "token" | "lexer" => Some(Self::Tokens),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"JPATH DOCUMENTATION

jpath parses a restricted JSONPath subset into a flat sequence of steps.
Every query starts at the root anchor $ and chains member and array
selectors. Filters, slices, unions and negative indices are not supported.

DOCUMENTATION TOPICS

  syntax            Steps, what may follow each one, and rendered output
  tokens            How the lexer splits a query, with byte offsets
  errors            Every error message and what triggers it

QUICK REFERENCE

  $                 Root anchor (must come first, cannot stand alone)
  .name             Member access
  ..name            Member at any depth
  .*  ..*           Every member
  [0]               Array element by index
  [*]               Every array element

Run 'jpath doc <topic>' for detailed documentation.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Syntax) => Ok(SYNTAX_DOC),
        Some(DocTopic::Tokens) => Ok(TOKENS_DOC),
        Some(DocTopic::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

STEPS
  Root              $        First step of every query
  Dot               .        Member access, needs a name or * after it
  RecursiveDescent  ..       Member at any depth, needs a name or * after it
  Identifier        name     ASCII letters, digits and underscores
  Wildcard          *        Every member
  ArrayIndex        [12]     Unsigned decimal index
  ArrayWildcard     [*]      Every array element

TRANSITIONS
  $                 followed by  .  ..  [
  .  ..             followed by  name  *
  name              followed by  .  ..  [  end
  *  [n]  [*]       followed by  .  ..  [  end

EXAMPLES
  jpath parse '$.store.book[*]'
  => Root($) -> Dot(.) -> Identifier(store) -> Dot(.) -> Identifier(book) -> ArrayWildcard([*])

  jpath parse '$..author'
  => Root($) -> RecursiveDescent(..) -> Identifier(author)

  jpath parse --json '$[0]'
  => [{"kind":"Root","value":"$"},{"kind":"ArrayIndex","value":"0"}]

NOT SUPPORTED
  $..book[-1]       negative indices
  $..book[0:2]      slices
  $..book[0,1]      unions
  $..book[?(@.x)]   filters
"#;

const TOKENS_DOC: &str = r#"TOKENS

The lexer produces one token per call. Offsets are byte positions into the
query, and end = start + length of the literal.

  EOF               end of input, empty literal
  Root              $
  RecursiveDescent  ..
  Dot               .
  Wildcard          *
  Lbracket          [
  Rbracket          ]
  Comma             ,
  Colon             :
  Identifier        run of letters, digits and underscores
  Number            run made only of digits

A run ends in front of . , : [ ] * $ or a space. Any other character inside a
run is an error, not a boundary:

  jpath tokens '$.store@book'
  => Parse error: @: invalid identifier

EXAMPLE
  jpath tokens '$.a[0]'
  => Root '$' 0..1
     Dot '.' 1..2
     Identifier 'a' 2..3
     Lbracket '[' 3..4
     Number '0' 4..5
     Rbracket ']' 5..6
     EOF '' 6..6
"#;

const ERRORS_DOC: &str = r#"ERRORS

The first error aborts the parse; no partial result is returned.

  JSONPath must start with $
      The query is empty or its first token is not $.

  unexpected EOF after root
      The query is exactly $.

  expected '.' or '[' or '..', got <kind>
      The root anchor is followed by anything else, for example:
        $*             expected '.' or '[' or '..', got Wildcard

  <c>: invalid identifier
      A name contains a character other than a letter, digit or underscore.

  expected <kinds> after <step>, got <kind>
      A step is followed by a token it does not allow, for example:
        $.store.       expected Identifier or Wildcard after Dot, got EOF
        $[0:1]         expected Rbracket after Lbracket and Number, got Colon
        $[a]           expected Wildcard or Number after Lbracket, got Identifier
        $.a*           expected Lbracket or Dot or RecursiveDescent or EOF after Identifier, got Wildcard

USING CHECK
  jpath check '$.a.b'               prints ok or the error
  cat queries.txt | jpath check     validates one query per line
"#;
