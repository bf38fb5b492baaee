//! Shared helpers for parser tests.

use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::ast;

/// Parses `source`, panicking with the rendered errors if it is invalid.
pub fn parse_ok(source: &str) -> ast::Document {
    let result = GraphQLParser::new(source).parse_executable_document();
    if result.has_errors() {
        panic!(
            "expected `{source}` to parse, got:\n{}",
            result.format_errors(Some(source)),
        );
    }
    result
        .into_valid_ast()
        .expect("a document without errors")
}

/// Parses `source`, returning its errors and panicking if there are none.
pub fn parse_errors(source: &str) -> Vec<GraphQLParseError> {
    let result = GraphQLParser::new(source).parse_executable_document();
    assert!(result.has_errors(), "expected `{source}` to fail to parse");
    result.errors
}

/// The single operation of a one-definition document.
pub fn only_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        ast::Definition::Operation(op) => op,
        other => panic!("expected an operation, found {other:?}"),
    }
}

/// The field at `selections[idx]`.
pub fn field_at(set: &ast::SelectionSet, idx: usize) -> &ast::Field {
    match &set.selections[idx] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, found {other:?}"),
    }
}

/// The value of the first argument of the first root field.
pub fn first_argument_value(source: &str) -> ast::Value {
    let doc = parse_ok(source);
    let op = only_operation(&doc);
    field_at(&op.selection_set, 0).arguments[0].value.clone()
}
