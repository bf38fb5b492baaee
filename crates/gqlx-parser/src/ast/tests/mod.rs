//! Tests for AST helpers that do not need the parser.

use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::ast;
use crate::ast::AstKind;
use crate::ast::Location;

fn int(value: i64) -> ast::Value {
    ast::Value::Int(ast::IntValue::new(value, Location::none()))
}

fn variable(name: &str) -> ast::Value {
    ast::Value::Variable(ast::Variable {
        name: ast::Name::new(name),
        loc: Location::none(),
    })
}

fn field(alias: Option<&str>, name: &str) -> ast::Field {
    ast::Field {
        alias: alias.map(ast::Name::new),
        name: ast::Name::new(name),
        arguments: vec![ast::Argument {
            name: ast::Name::new("id"),
            value: int(4),
            loc: Location::none(),
        }],
        directives: vec![],
        selection_set: None,
        loc: Location::none(),
    }
}

// =============================================================================
// Location
// =============================================================================

/// Verifies that locations never affect equality.
#[test]
fn locations_compare_equal() {
    let span = GraphQLSourceSpan::new(
        SourcePosition::new(1, 2, Some(2), 10),
        SourcePosition::new(1, 5, Some(5), 13),
    );
    assert_eq!(Location::new(span.clone()), Location::none());
    assert_eq!(Location::from(span.clone()).start(), Some(10));
    assert_eq!(Location::from(span.clone()).end(), Some(13));
    assert_eq!(
        Location::new(span).source_location(),
        Some(crate::SourceLocation { line: 2, column: 3 }),
    );
    assert!(Location::none().span().is_none());
    assert!(Location::default().source_location().is_none());
}

// =============================================================================
// Node helpers
// =============================================================================

/// Verifies response keys and argument lookup.
#[test]
fn field_helpers() {
    assert_eq!(field(None, "user").response_key(), "user");
    assert_eq!(field(Some("me"), "user").response_key(), "me");
    assert_eq!(field(None, "user").argument("id").map(|a| &a.value), Some(&int(4)));
    assert!(field(None, "user").argument("missing").is_none());
}

/// Verifies variable detection in nested literals.
#[test]
fn contains_variables() {
    assert!(!int(1).contains_variables());
    assert!(variable("v").contains_variables());

    let nested = ast::Value::List(ast::ListValue {
        values: vec![
            int(1),
            ast::Value::Object(ast::ObjectValue {
                fields: vec![ast::ObjectField {
                    name: ast::Name::new("x"),
                    value: variable("v"),
                    loc: Location::none(),
                }],
                loc: Location::none(),
            }),
        ],
        loc: Location::none(),
    });
    assert!(nested.contains_variables());
}

/// Verifies that the innermost named type is found through wrappers.
#[test]
fn named_type_of_wrapped_type() {
    let ty = ast::Type::NonNull(ast::NonNullType {
        inner_type: Box::new(ast::Type::List(ast::ListType {
            item_type: Box::new(ast::Type::Named(ast::NamedType::new("Int"))),
            loc: Location::none(),
        })),
        loc: Location::none(),
    });
    assert_eq!(ty.named_type().name.value, "Int");
    assert_eq!(ty.to_string(), "[Int]!");
    assert_eq!(ty.kind(), AstKind::NonNullType);
}

/// Verifies document lookups of operations and fragments.
#[test]
fn document_lookups() {
    let selection_set = ast::SelectionSet {
        selections: vec![ast::Selection::Field(field(None, "a"))],
        loc: Location::none(),
    };
    let doc = ast::Document {
        definitions: vec![
            ast::Definition::Fragment(ast::FragmentDefinition {
                name: ast::Name::new("F"),
                type_condition: ast::NamedType::new("T"),
                directives: vec![],
                selection_set: selection_set.clone(),
                loc: Location::none(),
            }),
            ast::Definition::Operation(ast::OperationDefinition {
                operation: ast::OperationType::Query,
                name: Some(ast::Name::new("Q")),
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
                loc: Location::none(),
            }),
        ],
        loc: Location::none(),
    };
    assert_eq!(doc.operations().count(), 1);
    assert_eq!(doc.fragments().count(), 1);
    assert!(doc.fragment("F").is_some());
    assert!(doc.fragment("G").is_none());
    assert_eq!(doc.operations().next().and_then(|op| op.name()), Some("Q"));
    assert_eq!(ast::OperationType::Mutation.to_string(), "mutation");
}

/// Verifies the snake_case kind tags.
#[test]
fn kind_tags() {
    assert_eq!(AstKind::OperationDefinition.as_str(), "operation_definition");
    assert_eq!(AstKind::NonNullType.to_string(), "non_null_type");
    assert_eq!(int(1).kind(), AstKind::IntValue);
    assert_eq!(ast::Name::new("x").kind(), AstKind::Name);
}
