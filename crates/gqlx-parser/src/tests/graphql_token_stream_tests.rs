//! Tests for `GraphQLTokenStream`.

use crate::GraphQLTokenStream;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

fn stream(source: &str) -> GraphQLTokenStream<'_, StrGraphQLTokenSource<'_>> {
    GraphQLTokenStream::new(StrGraphQLTokenSource::new(source))
}

/// Verifies that peek() returns the next token without consuming it.
#[test]
fn peek_does_not_consume() {
    let mut stream = stream("query Q");
    let first = stream.peek().map(|t| t.kind.clone());
    let second = stream.peek().map(|t| t.kind.clone());
    assert_eq!(first, second);
    assert_eq!(first, Some(GraphQLTokenKind::name_borrowed("query")));

    let consumed = stream.consume().map(|t| t.kind);
    assert_eq!(consumed, first);
}

/// Verifies lookahead beyond the next token.
#[test]
fn peek_nth() {
    let mut stream = stream("{ a b }");
    assert_eq!(
        stream.peek_nth(2).map(|t| t.kind.clone()),
        Some(GraphQLTokenKind::name_borrowed("b")),
    );
    assert_eq!(stream.current_buffer_len(), 3);
    assert_eq!(stream.peek().map(|t| t.kind.clone()), Some(GraphQLTokenKind::CurlyBraceOpen));
    assert!(stream.peek_nth(10).is_none());
}

/// Verifies end-of-input detection.
#[test]
fn is_at_end() {
    let mut stream = stream("a");
    assert!(!stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    assert_eq!(stream.consume().map(|t| t.kind), Some(GraphQLTokenKind::Eof));
    assert!(stream.is_at_end());
    assert!(stream.consume().is_none());
}
