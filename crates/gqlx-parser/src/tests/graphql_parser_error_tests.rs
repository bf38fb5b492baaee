//! Tests for syntax errors, error recovery and lexer error integration.

use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::ValueParsingError;
use crate::tests::utils::parse_errors;

// =============================================================================
// Error Recovery
// =============================================================================

/// Verifies that independent errors in separate definitions are all
/// reported in one pass.
#[test]
fn recovery_reports_every_broken_definition() {
    let errors = parse_errors("query A { a(x: ) } query B { b } query C { c(: 1) }");
    assert_eq!(errors.len(), 2, "{errors:#?}");
}

/// Verifies that the recovered document still contains the definitions
/// that parsed cleanly.
#[test]
fn recovery_keeps_valid_definitions() {
    let result = GraphQLParser::new("query A { a(x: ) } query B { b }").parse_executable_document();
    assert!(result.has_errors());
    assert!(result.valid_ast().is_none());
    let doc = result.ast().expect("recovered document");
    assert!(doc.operations().any(|op| op.name() == Some("B")));
}

/// Verifies that a field named like an operation keyword inside a broken
/// selection set does not restart parsing at the wrong place.
#[test]
fn recovery_ignores_keyword_field_names() {
    let errors = parse_errors("{ a(x: ) query }");
    assert!(!errors.is_empty());
}

// =============================================================================
// Unexpected tokens
// =============================================================================

/// Verifies the message and location of a missing `:` in an argument.
#[test]
fn missing_colon_in_argument() {
    let errors = parse_errors("{ user(id 1) }");
    assert_eq!(errors[0].message(), "expected `:`, found `1`");
    let loc = errors[0].location();
    assert_eq!((loc.line, loc.column), (1, 11));
    assert!(matches!(
        errors[0].kind(),
        GraphQLParseErrorKind::UnexpectedToken { found, .. } if found == "1",
    ));
}

/// Verifies that a document with no definitions is rejected.
#[test]
fn empty_document() {
    for source in ["", "   ", "# just a comment\n"] {
        let errors = parse_errors(source);
        assert!(matches!(errors[0].kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
    }
}

/// Verifies that a missing selection set after an operation header is
/// reported at the end of input.
#[test]
fn operation_without_selection_set() {
    let errors = parse_errors("query Q");
    assert_eq!(errors[0].message(), "expected `{`, found end of input");
    assert!(matches!(errors[0].kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
}

/// Verifies that type-system definitions are rejected with a hint.
#[test]
fn type_definition_in_executable_document() {
    let errors = parse_errors("type Query { a: String }");
    assert!(errors[0].message().starts_with("expected operation or fragment definition"));
    assert!(errors[0].notes().iter().any(|n| n.message.contains("type system")));
}

/// Verifies that a fragment definition requires `on`.
#[test]
fn fragment_without_type_condition() {
    let errors = parse_errors("fragment F { a }");
    assert_eq!(errors[0].message(), "expected `on`, found `{`");
}

/// Verifies that an inline fragment needs a selection set.
#[test]
fn inline_fragment_without_selection_set() {
    parse_errors("{ ... on T }");
}

/// Verifies that only one `!` may follow a type.
#[test]
fn double_non_null() {
    parse_errors("query ($a: Int!!) { a }");
}

// =============================================================================
// Values
// =============================================================================

/// Verifies that variables are rejected in variable default values.
#[test]
fn variable_in_default_value() {
    let errors = parse_errors("query ($a: Int = $b) { f }");
    assert_eq!(errors[0].message(), "variables are not allowed in variable default values");
}

/// Verifies that duplicate object literal fields are a syntax error that
/// points back at the first occurrence.
#[test]
fn duplicate_object_field() {
    let errors = parse_errors("{ f(a: {x: 1, y: 2, x: 3}) }");
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0].kind(),
        GraphQLParseErrorKind::DuplicateInputField { name } if name == "x",
    ));
    assert_eq!(errors[0].location().column, 21);
    assert_eq!(errors[0].notes().len(), 1);
}

/// Verifies that an invalid escape sequence is reported as an invalid
/// string value.
#[test]
fn invalid_escape_sequence() {
    let errors = parse_errors(r#"{ f(a: "bad \q") }"#);
    assert!(matches!(
        errors[0].kind(),
        GraphQLParseErrorKind::InvalidValue(ValueParsingError::String(_)),
    ));
}

/// Verifies that a lone surrogate escape is rejected.
#[test]
fn lone_surrogate_escape() {
    parse_errors(r#"{ f(a: "\uD83D") }"#);
    parse_errors(r#"{ f(a: "\uDE00") }"#);
}

// =============================================================================
// Empty constructs and delimiters
// =============================================================================

/// Verifies that `{}`, `()` on fields and `()` on variables are rejected.
#[test]
fn empty_constructs() {
    for (source, construct) in [
        ("{ }", "selection set"),
        ("{ f() }", "argument list"),
        ("query () { f }", "variable definitions"),
        ("{ f @d() }", "argument list"),
    ] {
        let errors = parse_errors(source);
        assert!(
            errors.iter().any(|e| matches!(
                e.kind(),
                GraphQLParseErrorKind::InvalidEmptyConstruct { construct: c } if c == construct,
            )),
            "{source}: {errors:#?}",
        );
    }
}

/// Verifies that an unclosed selection set notes where it was opened.
#[test]
fn unclosed_selection_set() {
    let errors = parse_errors("{ a { b }");
    let error = errors
        .iter()
        .find(|e| matches!(e.kind(), GraphQLParseErrorKind::UnclosedDelimiter { .. }))
        .expect("an unclosed delimiter error");
    assert_eq!(error.message(), "unclosed `{`");
    assert_eq!(error.notes()[0].message, "opening `{` in selection set here");
}

/// Verifies unclosed lists and argument lists.
#[test]
fn unclosed_list_and_arguments() {
    let errors = parse_errors("{ f(a: [1, 2");
    assert!(errors.iter().any(|e| e.message() == "unclosed `[`"));

    let errors = parse_errors("{ f(a: 1");
    assert!(errors.iter().any(|e| e.message() == "unclosed `(`"));
}

/// Verifies that nesting beyond the depth limit is an error, not a stack
/// overflow.
#[test]
fn nesting_depth_limit() {
    let deep_list = format!("{{ f(a: {}1{}) }}", "[".repeat(200), "]".repeat(200));
    let errors = parse_errors(&deep_list);
    assert!(errors.iter().any(|e| e.message() == "maximum nesting depth exceeded"));

    let deep_selection = format!("{}{}", "{ f ".repeat(100), "}".repeat(100));
    let errors = parse_errors(&deep_selection);
    assert!(errors.iter().any(|e| e.message() == "maximum nesting depth exceeded"));
}

/// Verifies that nesting just under the limit is accepted.
#[test]
fn nesting_under_limit() {
    let source = format!("{{ f(a: {}1{}) }}", "[".repeat(40), "]".repeat(40));
    assert!(GraphQLParser::new(&source).parse_executable_document().is_ok());
}

// =============================================================================
// Reserved names
// =============================================================================

/// Verifies that a fragment may not be named `on`.
#[test]
fn fragment_named_on() {
    let errors = parse_errors("fragment on on T { a }");
    assert_eq!(errors[0].message(), "fragment name cannot be `on`");
    assert!(matches!(errors[0].kind(), GraphQLParseErrorKind::ReservedName { .. }));
}

// =============================================================================
// Lexer errors
// =============================================================================

/// Verifies that lexer errors surface as parse errors with their notes.
#[test]
fn lexer_errors_propagate() {
    let errors = parse_errors("{ a ..b }");
    assert!(matches!(errors[0].kind(), GraphQLParseErrorKind::LexerError));
    assert!(errors[0].message().contains("`..`"));
    assert!(!errors[0].notes().is_empty());
}

/// Verifies lexer diagnostics for malformed numbers.
#[test]
fn malformed_numbers() {
    for (source, fragment) in [
        ("{ f(a: 00) }", "leading zeros"),
        ("{ f(a: 1.) }", "expected a digit after `.`"),
        ("{ f(a: 1e) }", "exponent"),
        ("{ f(a: 12abc) }", "after numeric literal"),
    ] {
        let errors = parse_errors(source);
        assert!(
            errors[0].message().contains(fragment),
            "{source}: {}",
            errors[0].message(),
        );
    }
}

/// Verifies that unterminated strings are reported.
#[test]
fn unterminated_strings() {
    let errors = parse_errors("{ f(a: \"abc) }");
    assert!(errors[0].message().contains("Unterminated string"));

    let errors = parse_errors("{ f(a: \"\"\"abc) }");
    assert!(errors[0].message().contains("Unterminated block string"));
}

/// Verifies that invalid characters are named by code point.
#[test]
fn invalid_character() {
    let errors = parse_errors("{ a \u{0007} }");
    assert!(errors[0].message().contains("U+0007"), "{}", errors[0].message());
}

/// Verifies that a control character inside a string is rejected.
#[test]
fn control_character_in_string() {
    let errors = parse_errors("{ f(a: \"a\u{0001}b\") }");
    assert!(errors[0].message().contains("Invalid character within string"));
}
