// tests/parser_tests.rs

use jsonpath_ast::ast::{JsonPath, Step, StepKind, TokenKind};
use jsonpath_ast::lexer::{LexError, Lexer};
use jsonpath_ast::parser::{Expected, ParseError, Parser};

fn parse(query: &str) -> Result<JsonPath, ParseError> {
    let lexer = Lexer::new(query);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

fn render(query: &str) -> String {
    parse(query).unwrap().to_string()
}

fn error(query: &str) -> String {
    parse(query).unwrap_err().to_string()
}

// ============================================================================
// Simple paths
// ============================================================================

#[test]
fn test_member() {
    let path = parse("$.store").unwrap();
    assert_eq!(
        path.steps(),
        &[Step::Root, Step::Dot, Step::Identifier("store".into())]
    );
}

#[test]
fn test_array_index() {
    let path = parse("$.book[0]").unwrap();
    assert_eq!(
        path.steps(),
        &[
            Step::Root,
            Step::Dot,
            Step::Identifier("book".into()),
            Step::ArrayIndex("0".into()),
        ]
    );
    assert_eq!(path.last().unwrap().index(), Some(0));
}

#[test]
fn test_array_wildcard() {
    let path = parse("$.book[*]").unwrap();
    assert!(matches!(path.last(), Some(Step::ArrayWildcard)));
    assert_eq!(path.last().unwrap().value(), "[*]");
}

#[test]
fn test_recursive_descent() {
    let path = parse("$..book").unwrap();
    assert_eq!(
        path.steps(),
        &[
            Step::Root,
            Step::RecursiveDescent,
            Step::Identifier("book".into()),
        ]
    );
}

#[test]
fn test_member_wildcard() {
    let path = parse("$.*").unwrap();
    assert_eq!(path.steps(), &[Step::Root, Step::Dot, Step::Wildcard]);

    let path = parse("$..*").unwrap();
    assert_eq!(path.steps(), &[Step::Root, Step::RecursiveDescent, Step::Wildcard]);
}

#[test]
fn test_root_followed_by_bracket() {
    assert_eq!(render("$[0]"), "Root($) -> ArrayIndex(0)");
    assert_eq!(render("$[*]"), "Root($) -> ArrayWildcard([*])");
}

// ============================================================================
// Chained steps
// ============================================================================

#[test]
fn test_every_step_is_kept() {
    assert_eq!(
        render("$.store.book[*]"),
        "Root($) -> Dot(.) -> Identifier(store) -> Dot(.) -> Identifier(book) -> ArrayWildcard([*])"
    );
}

#[test]
fn test_chained_indices() {
    assert_eq!(
        render("$.matrix[1][2]"),
        "Root($) -> Dot(.) -> Identifier(matrix) -> ArrayIndex(1) -> ArrayIndex(2)"
    );
}

#[test]
fn test_wildcard_followers() {
    let test_cases = vec![
        ("$.*.age", "Root($) -> Dot(.) -> Wildcard(*) -> Dot(.) -> Identifier(age)"),
        ("$.*[0]", "Root($) -> Dot(.) -> Wildcard(*) -> ArrayIndex(0)"),
        ("$.*..id", "Root($) -> Dot(.) -> Wildcard(*) -> RecursiveDescent(..) -> Identifier(id)"),
    ];

    for (query, expected) in test_cases {
        assert_eq!(render(query), expected, "Failed for query: {}", query);
    }
}

#[test]
fn test_array_followers() {
    let test_cases = vec![
        ("$[0].a", "Root($) -> ArrayIndex(0) -> Dot(.) -> Identifier(a)"),
        ("$[*]..a", "Root($) -> ArrayWildcard([*]) -> RecursiveDescent(..) -> Identifier(a)"),
        ("$[*][3]", "Root($) -> ArrayWildcard([*]) -> ArrayIndex(3)"),
    ];

    for (query, expected) in test_cases {
        assert_eq!(render(query), expected, "Failed for query: {}", query);
    }
}

#[test]
fn test_long_path() {
    let path = parse("$.*.age.children[12]").unwrap();
    let kinds: Vec<StepKind> = path.iter().map(Step::kind).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Root,
            StepKind::Dot,
            StepKind::Wildcard,
            StepKind::Dot,
            StepKind::Identifier,
            StepKind::Dot,
            StepKind::Identifier,
            StepKind::ArrayIndex,
        ]
    );
    assert_eq!(path.len(), 8);
}

#[test]
fn test_index_keeps_digits_as_written() {
    let path = parse("$[007]").unwrap();
    assert_eq!(path.last().unwrap().value(), "007");
    assert_eq!(path.last().unwrap().index(), Some(7));

    let path = parse("$[99999999999999999999999]").unwrap();
    assert_eq!(path.last().unwrap().value(), "99999999999999999999999");
    assert_eq!(path.last().unwrap().index(), None);
}

// ============================================================================
// Structural invariants
// ============================================================================

#[test]
fn test_structural_invariants() {
    let queries = [
        "$.a",
        "$..a",
        "$.a.b.c",
        "$..a..b[0]",
        "$.*..*[*]",
        "$[1].x..y.*",
    ];

    for query in queries {
        let path = parse(query).unwrap();
        assert_eq!(path.steps()[0], Step::Root, "{}", query);
        for (i, step) in path.iter().enumerate() {
            if matches!(step, Step::Dot | Step::RecursiveDescent) {
                let next = path.successor(i).map(Step::kind);
                assert!(
                    matches!(next, Some(StepKind::Identifier) | Some(StepKind::Wildcard)),
                    "{} at step {} in {}",
                    step,
                    i,
                    query
                );
            }
            if let Step::ArrayIndex(digits) = step {
                assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
            }
        }
        assert!(path.successor(path.len() - 1).is_none());
    }
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn test_root_missing() {
    for query in ["", ".store", "store", "[0]", "*", "..a"] {
        let err = parse(query).unwrap_err();
        assert_eq!(err, ParseError::RootMissing, "Failed for query: {:?}", query);
        assert_eq!(err.to_string(), "JSONPath must start with $");
        assert_eq!(err.position(), None);
    }
}

#[test]
fn test_root_alone() {
    assert_eq!(parse("$").unwrap_err(), ParseError::UnexpectedEnd);
    assert_eq!(error("$"), "unexpected EOF after root");
}

#[test]
fn test_bad_token_after_root() {
    let err = parse("$*").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedAfterRoot {
            found: TokenKind::Wildcard,
            position: 1,
        }
    );
    assert_eq!(err.to_string(), "expected '.' or '[' or '..', got Wildcard");
    assert_eq!(err.position(), Some(1));

    let test_cases = vec![
        ("$a", "expected '.' or '[' or '..', got Identifier"),
        ("$$", "expected '.' or '[' or '..', got Root"),
        ("$,", "expected '.' or '[' or '..', got Comma"),
        ("$:", "expected '.' or '[' or '..', got Colon"),
        ("$]", "expected '.' or '[' or '..', got Rbracket"),
        ("$0", "expected '.' or '[' or '..', got Number"),
    ];

    for (query, expected) in test_cases {
        assert_eq!(error(query), expected, "Failed for query: {}", query);
    }
}

#[test]
fn test_lex_error_is_propagated() {
    let err = parse("$.store@book").unwrap_err();
    assert_eq!(
        err,
        ParseError::Lex(LexError::InvalidIdentifier { ch: '@', position: 7 })
    );
    assert_eq!(err.to_string(), "@: invalid identifier");
    assert_eq!(err.position(), Some(7));
}

#[test]
fn test_lex_error_on_first_token() {
    assert!(error("@.a").contains("@: invalid identifier"));
}

#[test]
fn test_after_dot() {
    assert_eq!(error("$."), "expected Identifier or Wildcard after Dot, got EOF");
    assert_eq!(error("$.[0]"), "expected Identifier or Wildcard after Dot, got Lbracket");
    assert_eq!(error("$.0"), "expected Identifier or Wildcard after Dot, got Number");
}

#[test]
fn test_after_recursive_descent() {
    assert_eq!(
        error("$.."),
        "expected Identifier or Wildcard after RecursiveDescent, got EOF"
    );
    assert_eq!(
        error("$..[0]"),
        "expected Identifier or Wildcard after RecursiveDescent, got Lbracket"
    );
    assert_eq!(
        error("$...a"),
        "expected Identifier or Wildcard after RecursiveDescent, got Dot"
    );
}

#[test]
fn test_after_identifier() {
    assert_eq!(
        error("$.a*"),
        "expected Lbracket or Dot or RecursiveDescent or EOF after Identifier, got Wildcard"
    );
    assert_eq!(
        error("$.a]"),
        "expected Lbracket or Dot or RecursiveDescent or EOF after Identifier, got Rbracket"
    );
    assert_eq!(
        error("$.a$"),
        "expected Lbracket or Dot or RecursiveDescent or EOF after Identifier, got Root"
    );
}

#[test]
fn test_after_wildcard() {
    assert_eq!(
        error("$.**"),
        "expected Lbracket or EOF or Dot or RecursiveDescent after Wildcard, got Wildcard"
    );
    assert_eq!(
        error("$.*a"),
        "expected Lbracket or EOF or Dot or RecursiveDescent after Wildcard, got Identifier"
    );
}

#[test]
fn test_inside_brackets() {
    assert_eq!(error("$[a]"), "expected Wildcard or Number after Lbracket, got Identifier");
    assert_eq!(error("$[]"), "expected Wildcard or Number after Lbracket, got Rbracket");
    assert_eq!(error("$["), "expected Wildcard or Number after Lbracket, got EOF");
    assert_eq!(error("$[*"), "expected Rbracket after Lbracket and Wildcard, got EOF");
    assert_eq!(error("$[0"), "expected Rbracket after Lbracket and Number, got EOF");
}

#[test]
fn test_after_array() {
    assert_eq!(
        error("$[0]a"),
        "expected Lbracket or EOF or Dot or RecursiveDescent after Array, got Identifier"
    );
    assert_eq!(
        error("$[*]*"),
        "expected Lbracket or EOF or Dot or RecursiveDescent after Array, got Wildcard"
    );
}

#[test]
fn test_unsupported_selectors() {
    // slices, unions and negative indices only ever fail on transitions
    assert_eq!(error("$[0:2]"), "expected Rbracket after Lbracket and Number, got Colon");
    assert_eq!(error("$[0,1]"), "expected Rbracket after Lbracket and Number, got Comma");
    assert_eq!(error("$[:2]"), "expected Wildcard or Number after Lbracket, got Colon");
    assert!(error("$[-1]").contains("-: invalid identifier"));
}

#[test]
fn test_transition_error_fields() {
    let err = parse("$.a.b[x]").unwrap_err();
    match err {
        ParseError::UnexpectedTransition {
            expected,
            after,
            found,
            position,
        } => {
            assert_eq!(expected, Expected(&[TokenKind::Wildcard, TokenKind::Number]));
            assert!(expected.contains(TokenKind::Number));
            assert!(!expected.contains(TokenKind::Identifier));
            assert_eq!(after, "Lbracket");
            assert_eq!(found, TokenKind::Identifier);
            assert_eq!(position, 6);
        }
        other => panic!("Expected transition error, got {:?}", other),
    }
}

#[test]
fn test_first_error_wins() {
    // the bracket error comes before the invalid character
    assert_eq!(error("$[a].b@"), "expected Wildcard or Number after Lbracket, got Identifier");
    // the invalid character comes first
    assert_eq!(error("$.b@[a]"), "@: invalid identifier");
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_parse_twice_is_equal() {
    for query in ["$.store.book[*]", "$..author", "$[0][1]", "$.*..x"] {
        let first = parse(query).unwrap();
        let second = parse(query).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.to_string(), first.to_string());
    }
}
