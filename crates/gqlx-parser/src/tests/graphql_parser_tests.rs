//! Tests for successful parses of executable documents.

use crate::ast;
use crate::ast::AstKind;
use crate::tests::utils::field_at;
use crate::tests::utils::first_argument_value;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_ok;

// =============================================================================
// Operations
// =============================================================================

/// Verifies that a bare selection set parses as an anonymous query.
#[test]
fn shorthand_query() {
    let doc = parse_ok("{ hello }");
    let op = only_operation(&doc);
    assert_eq!(op.operation, ast::OperationType::Query);
    assert!(op.name.is_none());
    assert!(op.variable_definitions.is_empty());
    assert_eq!(field_at(&op.selection_set, 0).name.value, "hello");
}

/// Verifies that named operations of each type keep their name and type.
#[test]
fn named_operations_of_each_type() {
    let doc = parse_ok(
        "query Q { a } mutation M { b } subscription S { c }",
    );
    let ops: Vec<_> = doc
        .operations()
        .map(|op| (op.operation, op.name().map(str::to_string)))
        .collect();
    assert_eq!(
        ops,
        vec![
            (ast::OperationType::Query, Some("Q".to_string())),
            (ast::OperationType::Mutation, Some("M".to_string())),
            (ast::OperationType::Subscription, Some("S".to_string())),
        ],
    );
}

/// Verifies that an operation keyword without a name is accepted.
#[test]
fn unnamed_mutation() {
    let doc = parse_ok("mutation { doIt }");
    let op = only_operation(&doc);
    assert_eq!(op.operation, ast::OperationType::Mutation);
    assert!(op.name.is_none());
}

/// Verifies that variable definitions parse with types, defaults and
/// directives.
#[test]
fn variable_definitions() {
    let doc = parse_ok(
        "query Q($id: ID!, $limit: Int = 10, $tags: [String!] @deprecated) { a }",
    );
    let op = only_operation(&doc);
    let vars = &op.variable_definitions;
    assert_eq!(vars.len(), 3);

    assert_eq!(vars[0].variable.name.value, "id");
    assert_eq!(vars[0].ty.to_string(), "ID!");
    assert!(vars[0].default_value.is_none());

    assert_eq!(vars[1].ty.to_string(), "Int");
    assert!(matches!(
        &vars[1].default_value,
        Some(ast::Value::Int(int)) if int.as_i64() == Some(10),
    ));

    assert_eq!(vars[2].ty.to_string(), "[String!]");
    assert_eq!(vars[2].directives[0].name.value, "deprecated");
}

/// Verifies that operation-level directives are attached to the operation.
#[test]
fn operation_directives() {
    let doc = parse_ok("query Q @live @cache(ttl: 5) { a }");
    let op = only_operation(&doc);
    let names: Vec<_> = op.directives.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["live", "cache"]);
    assert_eq!(op.directives[1].arguments[0].name.value, "ttl");
}

/// Verifies that `true`, `false` and `null` are valid operation and field
/// names.
#[test]
fn literal_keywords_are_names() {
    let doc = parse_ok("query true { null false: true }");
    let op = only_operation(&doc);
    assert_eq!(op.name(), Some("true"));
    assert_eq!(field_at(&op.selection_set, 0).name.value, "null");
    let aliased = field_at(&op.selection_set, 1);
    assert_eq!(aliased.alias.as_ref().map(|a| a.as_str()), Some("false"));
    assert_eq!(aliased.name.value, "true");
}

// =============================================================================
// Selections
// =============================================================================

/// Verifies aliases, arguments, directives and nested selection sets on a
/// field.
#[test]
fn field_with_everything() {
    let doc = parse_ok("{ smallPic: profilePic(size: 64) @include(if: $big) { url } }");
    let op = only_operation(&doc);
    let field = field_at(&op.selection_set, 0);
    assert_eq!(field.response_key(), "smallPic");
    assert_eq!(field.name.value, "profilePic");
    assert!(matches!(
        field.argument("size").map(|a| &a.value),
        Some(ast::Value::Int(int)) if int.as_i64() == Some(64),
    ));
    assert_eq!(field.directives[0].name.value, "include");
    let nested = field.selection_set.as_ref().expect("nested selection set");
    assert_eq!(field_at(nested, 0).name.value, "url");
}

/// Verifies that a field without an alias uses its name as response key.
#[test]
fn response_key_defaults_to_name() {
    let doc = parse_ok("{ plain }");
    let op = only_operation(&doc);
    assert_eq!(field_at(&op.selection_set, 0).response_key(), "plain");
}

/// Verifies fragment spreads, typed inline fragments and untyped inline
/// fragments.
#[test]
fn fragment_selections() {
    let doc = parse_ok(
        "{ ...Parts @skip(if: false) ... on Dog { woofs } ... @include(if: true) { name } }",
    );
    let op = only_operation(&doc);
    let sels = &op.selection_set.selections;

    match &sels[0] {
        ast::Selection::FragmentSpread(spread) => {
            assert_eq!(spread.name.value, "Parts");
            assert_eq!(spread.directives[0].name.value, "skip");
        },
        other => panic!("expected spread, got {other:?}"),
    }
    match &sels[1] {
        ast::Selection::InlineFragment(frag) => {
            assert_eq!(
                frag.type_condition.as_ref().map(|t| t.name.as_str()),
                Some("Dog"),
            );
        },
        other => panic!("expected inline fragment, got {other:?}"),
    }
    match &sels[2] {
        ast::Selection::InlineFragment(frag) => {
            assert!(frag.type_condition.is_none());
            assert_eq!(frag.directives[0].name.value, "include");
        },
        other => panic!("expected inline fragment, got {other:?}"),
    }
}

/// Verifies that a spread of a fragment literally named `on...` is still a
/// spread, while `... on` starts an inline fragment.
#[test]
fn spread_of_name_starting_with_on() {
    let doc = parse_ok("{ ...onion }");
    let op = only_operation(&doc);
    assert!(matches!(
        &op.selection_set.selections[0],
        ast::Selection::FragmentSpread(spread) if spread.name.value == "onion",
    ));
}

/// Verifies that fragment definitions keep their type condition and
/// directives, and that `Document::fragment` finds them.
#[test]
fn fragment_definition() {
    let doc = parse_ok("fragment Parts on User @dir { id name }");
    let frag = doc.fragment("Parts").expect("fragment Parts");
    assert_eq!(frag.type_condition.name.value, "User");
    assert_eq!(frag.directives[0].name.value, "dir");
    assert_eq!(frag.selection_set.selections.len(), 2);
    assert_eq!(doc.operations().count(), 0);
}

/// Verifies that mutually recursive fragments are syntactically fine.
#[test]
fn cyclic_fragments_parse() {
    let doc = parse_ok(
        "{ ...A } fragment A on T { ...B } fragment B on T { ...A }",
    );
    assert_eq!(doc.fragments().count(), 2);
}

// =============================================================================
// Values
// =============================================================================

/// Verifies every scalar literal form.
#[test]
fn scalar_literals() {
    let cases = [
        ("{ f(a: -42) }", "-42"),
        ("{ f(a: 1.5e3) }", "1.5e3"),
        ("{ f(a: 0.25) }", "0.25"),
        ("{ f(a: \"hi\\nthere\") }", "\"hi\\nthere\""),
        ("{ f(a: true) }", "true"),
        ("{ f(a: false) }", "false"),
        ("{ f(a: null) }", "null"),
        ("{ f(a: RED) }", "RED"),
        ("{ f(a: $v) }", "$v"),
    ];
    for (source, printed) in cases {
        assert_eq!(first_argument_value(source).to_string(), printed, "{source}");
    }
}

/// Verifies that numeric literals outside the range of `i64` and `f64`
/// still parse, keeping their source text.
#[test]
fn out_of_range_numbers() {
    match first_argument_value("{ f(a: 99999999999999999999) }") {
        ast::Value::Int(int) => {
            assert_eq!(int.raw, "99999999999999999999");
            assert_eq!(int.as_i64(), None);
            assert_eq!(int.as_f64(), Some(1e20));
        },
        other => panic!("expected int, got {other:?}"),
    }
    match first_argument_value("{ f(a: 1.0e400) }") {
        ast::Value::Float(float) => {
            assert_eq!(float.raw, "1.0e400");
            assert_eq!(float.as_f64(), None);
        },
        other => panic!("expected float, got {other:?}"),
    }
}

/// Verifies the kind tags of value nodes.
#[test]
fn value_kinds() {
    let cases = [
        ("{ f(a: 1) }", AstKind::IntValue),
        ("{ f(a: 1.0) }", AstKind::FloatValue),
        ("{ f(a: \"s\") }", AstKind::StringValue),
        ("{ f(a: true) }", AstKind::BooleanValue),
        ("{ f(a: null) }", AstKind::NullValue),
        ("{ f(a: E) }", AstKind::EnumValue),
        ("{ f(a: [1]) }", AstKind::ListValue),
        ("{ f(a: {b: 1}) }", AstKind::ObjectValue),
        ("{ f(a: $v) }", AstKind::Variable),
    ];
    for (source, kind) in cases {
        assert_eq!(first_argument_value(source).kind(), kind, "{source}");
    }
}

/// Verifies escape sequences, including surrogate pairs, in quoted
/// strings.
#[test]
fn quoted_string_escapes() {
    let value = first_argument_value(
        r#"{ f(a: "q\" b\\ s\/ \b\f\n\r\t \u0041 \uD83D\uDE00 \u{1F600}") }"#,
    );
    match value {
        ast::Value::String(s) => {
            assert!(!s.block);
            assert_eq!(s.value, "q\" b\\ s/ \u{8}\u{c}\n\r\t A \u{1F600} \u{1F600}");
        },
        other => panic!("expected string, got {other:?}"),
    }
}

/// Verifies that block strings strip common indentation and blank edge
/// lines.
#[test]
fn block_string_dedent() {
    let source = "{ f(a: \"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  \"\"\") }";
    match first_argument_value(source) {
        ast::Value::String(s) => {
            assert!(s.block);
            assert_eq!(s.value, "Hello,\n  World!\n\nYours,\n  GraphQL.");
        },
        other => panic!("expected string, got {other:?}"),
    }
}

/// Verifies that whitespace-only lines do not count toward the common
/// indentation of a block string.
#[test]
fn block_string_whitespace_only_lines() {
    let source = "{ f(a: \"\"\"\n  a\n \n  b\n\"\"\") }";
    match first_argument_value(source) {
        ast::Value::String(s) => assert_eq!(s.value, "a\n\nb"),
        other => panic!("expected string, got {other:?}"),
    }
}

/// Verifies that `\"""` is the only escape inside a block string.
#[test]
fn block_string_escaped_triple_quote() {
    match first_argument_value(r#"{ f(a: """a \""" b \n""") }"#) {
        ast::Value::String(s) => assert_eq!(s.value, r#"a """ b \n"#),
        other => panic!("expected string, got {other:?}"),
    }
}

/// Verifies nested list and object literals.
#[test]
fn nested_list_and_object() {
    let value = first_argument_value("{ f(a: [1, {b: [true, $v], c: {d: null}}, []]) }");
    let list = match value {
        ast::Value::List(list) => list,
        other => panic!("expected list, got {other:?}"),
    };
    assert_eq!(list.values.len(), 3);
    let obj = match &list.values[1] {
        ast::Value::Object(obj) => obj,
        other => panic!("expected object, got {other:?}"),
    };
    assert!(obj.field("b").is_some_and(|f| f.value.contains_variables()));
    assert!(obj.field("c").is_some_and(|f| !f.value.contains_variables()));
    assert!(matches!(&list.values[2], ast::Value::List(empty) if empty.values.is_empty()));
}

/// Verifies that an empty object literal is allowed.
#[test]
fn empty_object_literal() {
    assert!(matches!(
        first_argument_value("{ f(a: {}) }"),
        ast::Value::Object(obj) if obj.fields.is_empty(),
    ));
}

// =============================================================================
// Type annotations
// =============================================================================

/// Verifies that type annotations nest in the expected order.
#[test]
fn type_annotations() {
    let doc = parse_ok("query ($a: [[Int!]!]!, $b: [Int], $c: Boolean) { x }");
    let op = only_operation(&doc);
    let a = &op.variable_definitions[0].ty;
    assert_eq!(a.to_string(), "[[Int!]!]!");
    assert_eq!(a.named_type().name.value, "Int");
    match a {
        ast::Type::NonNull(outer) => match outer.inner_type.as_ref() {
            ast::Type::List(list) => {
                assert!(matches!(list.item_type.as_ref(), ast::Type::NonNull(_)));
            },
            other => panic!("expected list, got {other:?}"),
        },
        other => panic!("expected non-null, got {other:?}"),
    }
    assert!(matches!(&op.variable_definitions[1].ty, ast::Type::List(_)));
    assert!(matches!(&op.variable_definitions[2].ty, ast::Type::Named(_)));
}

// =============================================================================
// Ignored tokens and locations
// =============================================================================

/// Verifies that commas, comments, BOMs and line terminators are ignored.
#[test]
fn ignored_tokens() {
    let doc = parse_ok("\u{FEFF}# leading comment\r\n{ a,,, b # trailing\r c\n}");
    let op = only_operation(&doc);
    let names: Vec<_> = op
        .selection_set
        .selections
        .iter()
        .map(|s| match s {
            ast::Selection::Field(f) => f.name.value.clone(),
            _ => String::new(),
        })
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

/// Verifies that nodes carry 1-based source locations.
#[test]
fn node_locations() {
    let doc = parse_ok("query Q {\n  user {\n    name\n  }\n}");
    let op = only_operation(&doc);
    let user = field_at(&op.selection_set, 0);
    let loc = user.loc.source_location().expect("location");
    assert_eq!((loc.line, loc.column), (2, 3));

    let name = field_at(user.selection_set.as_ref().expect("selection set"), 0);
    let loc = name.loc.source_location().expect("location");
    assert_eq!((loc.line, loc.column), (3, 5));

    let doc_loc = doc.loc.source_location().expect("location");
    assert_eq!((doc_loc.line, doc_loc.column), (1, 1));
}

/// Verifies that a field's span covers its alias through its selection
/// set.
#[test]
fn field_span_covers_whole_field() {
    let source = "{ a: b(x: 1) { c } }";
    let doc = parse_ok(source);
    let op = only_operation(&doc);
    let field = field_at(&op.selection_set, 0);
    let (start, end) = (
        field.loc.start().expect("start"),
        field.loc.end().expect("end"),
    );
    assert_eq!(&source[start..end], "a: b(x: 1) { c }");
}

/// Verifies that equality ignores locations.
#[test]
fn equality_ignores_locations() {
    let compact = parse_ok("{a(x:1){b}}");
    let spaced = parse_ok("\n\n{\n  a ( x : 1 )\n  {\n    b\n  }\n}\n");
    assert_eq!(compact, spaced);
    assert_ne!(compact, parse_ok("{ a(x: 2) { b } }"));
}

/// Verifies the canonical kind tags of definition and selection nodes.
#[test]
fn node_kinds() {
    let doc = parse_ok("query Q($v: Int) { f ...S ... on T { g } } fragment S on T { h }");
    assert_eq!(doc.kind().as_str(), "document");
    assert_eq!(doc.definitions[0].kind().as_str(), "operation_definition");
    assert_eq!(doc.definitions[1].kind().as_str(), "fragment_definition");
    let op = only_operation_in(&doc);
    assert_eq!(op.variable_definitions[0].kind().as_str(), "variable_definition");
    assert_eq!(op.variable_definitions[0].ty.kind().as_str(), "named_type");
    assert_eq!(op.selection_set.kind().as_str(), "selection_set");
    let kinds: Vec<_> = op
        .selection_set
        .selections
        .iter()
        .map(|s| s.kind().as_str())
        .collect();
    assert_eq!(kinds, vec!["field", "fragment_spread", "inline_fragment"]);
}

fn only_operation_in(doc: &ast::Document) -> &ast::OperationDefinition {
    doc.operations().next().expect("an operation")
}
