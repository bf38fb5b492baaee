use crate::Value;
use crate::execution::ExecutionArgs;
use crate::execution::FieldError;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::tests::utils::constant;
use crate::tests::utils::run;
use crate::tests::utils::run_with;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn string() -> TypeAnnotation {
    TypeAnnotation::named("String")
}

fn int() -> TypeAnnotation {
    TypeAnnotation::named("Int")
}

/// A schema whose `Query` has `a`, `b` and `c` returning their own names,
/// plus `echo(n: Int)` returning its argument.
fn abc_schema() -> Result<Schema> {
    let query = ObjectType::builder("Query")
        .field("a", Field::new(string()).with_resolver(constant("a")))
        .field("b", Field::new(string()).with_resolver(constant("b")))
        .field("c", Field::new(string()).with_resolver(constant("c")))
        .field(
            "echo",
            Field::new(int())
                .with_argument("n", InputValue::new(int()))
                .with_resolver(|_, _, args| Ok(args.get("n").cloned().unwrap_or_default())),
        )
        .build()?;
    Schema::builder().query(query).build()
}

fn response_keys(result: &crate::ExecutionResult) -> Vec<String> {
    result
        .data
        .as_ref()
        .and_then(|data| data.as_object())
        .map(|data| data.keys().cloned().collect())
        .unwrap_or_default()
}

// =============================================================================
// Operation selection
// =============================================================================

/// Verifies that a document with several operations needs an operation
/// name, and that execution never starts without one.
#[test]
fn multiple_operations_require_a_name() -> Result<()> {
    let schema = abc_schema()?;
    let result = run(&schema, "query A { a } query B { b }");
    assert_eq!(
        result.to_json(),
        json!({"errors": [{
            "message": "Must provide operation name if query contains multiple operations.",
        }]}),
    );
    Ok(())
}

/// Verifies that the named operation is the one executed.
#[test]
fn operation_name_selects_operation() -> Result<()> {
    let schema = abc_schema()?;
    let result = run_with(
        &schema,
        "query A { a } query B { b }",
        ExecutionArgs::new().operation_name("B"),
    );
    assert_eq!(result.to_json(), json!({"data": {"b": "b"}}));
    Ok(())
}

/// Verifies the error for an operation name the document does not define.
#[test]
fn unknown_operation_name() -> Result<()> {
    let schema = abc_schema()?;
    let result = run_with(&schema, "query A { a }", ExecutionArgs::new().operation_name("Nope"));
    assert_eq!(result.data, None);
    assert_eq!(result.errors[0].message, "Unknown operation named 'Nope'.");
    Ok(())
}

/// Verifies the error for a document with fragments but no operation.
#[test]
fn document_without_operation() -> Result<()> {
    let schema = abc_schema()?;
    let result = run(&schema, "fragment F on Query { a }");
    assert_eq!(result.data, None);
    assert_eq!(result.errors[0].message, "Must provide an operation.");
    Ok(())
}

/// Verifies that a mutation against a schema without a mutation root is a
/// located error and produces null data.
#[test]
fn mutation_without_mutation_root() -> Result<()> {
    let schema = abc_schema()?;
    let result = run(&schema, "mutation { a }");
    assert_eq!(
        result.to_json(),
        json!({
            "data": null,
            "errors": [{
                "message": "Schema is not configured for mutations.",
                "locations": [{"line": 1, "column": 1}],
            }],
        }),
    );
    Ok(())
}

// =============================================================================
// Variables and arguments
// =============================================================================

/// Verifies that variables reach arguments, and that a variable's default
/// is used when the request does not supply it.
#[test]
fn variables_and_defaults() -> Result<()> {
    let schema = abc_schema()?;
    let document = "query Q($n: Int = 3, $m: Int) { x: echo(n: $n) y: echo(n: $m) }";

    let result = run(&schema, document);
    assert_eq!(result.to_json(), json!({"data": {"x": 3, "y": null}}));

    let result = run_with(&schema, document, ExecutionArgs::new().variable("n", 7).variable("m", 8));
    assert_eq!(result.to_json(), json!({"data": {"x": 7, "y": 8}}));
    Ok(())
}

/// Verifies that variables given as a JSON object are converted.
#[test]
fn variables_from_json() -> Result<()> {
    let schema = abc_schema()?;
    let variables = json!({"n": 42}).as_object().cloned().unwrap_or_default();
    let result = run_with(
        &schema,
        "query Q($n: Int) { echo(n: $n) }",
        ExecutionArgs::new().variables_from_json(variables),
    );
    assert_eq!(result.to_json(), json!({"data": {"echo": 42}}));
    Ok(())
}

/// Verifies that a missing required variable aborts execution.
#[test]
fn missing_required_variable() -> Result<()> {
    let schema = abc_schema()?;
    let result = run(&schema, "query Q($n: Int!) { echo(n: $n) }");
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "Variable \"$n\" of required type \"Int!\" was not provided.",
    );
    Ok(())
}

/// Verifies that every invalid variable is reported, not just the first.
#[test]
fn invalid_variables_are_all_reported() -> Result<()> {
    let schema = abc_schema()?;
    let result = run_with(
        &schema,
        "query Q($n: Int, $m: Int) { x: echo(n: $n) y: echo(n: $m) }",
        ExecutionArgs::new().variable("n", "abc").variable("m", true),
    );
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 2);
    assert!(
        result.errors[0]
            .message
            .starts_with("Variable \"$n\" got invalid value \"abc\"."),
        "unexpected message: {}",
        result.errors[0].message,
    );
    assert!(result.errors[1].message.starts_with("Variable \"$m\" got invalid value true."));
    Ok(())
}

/// Verifies that an argument literal of the wrong type fails only its
/// field.
#[test]
fn invalid_argument_literal_is_a_field_error() -> Result<()> {
    let schema = abc_schema()?;
    let result = run(&schema, r#"{ a echo(n: "x") }"#);
    assert_eq!(
        result.to_json(),
        json!({
            "data": {"a": "a", "echo": null},
            "errors": [{
                "message": "Argument \"n\" has invalid value \"x\".",
                "locations": [{"line": 1, "column": 5}],
                "path": ["echo"],
            }],
        }),
    );
    Ok(())
}

// =============================================================================
// Response shape
// =============================================================================

/// Verifies that response keys follow the selection order, not the order
/// the fields were defined in.
#[test]
fn response_follows_selection_order() -> Result<()> {
    let schema = abc_schema()?;
    let result = run(&schema, "{ c a b a2: a }");
    assert_eq!(response_keys(&result), ["c", "a", "b", "a2"]);
    Ok(())
}

/// Verifies that fields the type does not define are left out silently.
#[test]
fn unknown_fields_are_omitted() -> Result<()> {
    let schema = abc_schema()?;
    let result = run(&schema, "{ a nope }");
    assert_eq!(result.to_json(), json!({"data": {"a": "a"}}));
    Ok(())
}

/// Verifies that `__typename` resolves to the runtime object type.
#[test]
fn typename_meta_field() -> Result<()> {
    let schema = abc_schema()?;
    let result = run(&schema, "{ __typename t: __typename }");
    assert_eq!(
        result.to_json(),
        json!({"data": {"__typename": "Query", "t": "Query"}}),
    );
    Ok(())
}

// =============================================================================
// Errors and null propagation
// =============================================================================

/// Verifies that a non-null violation at the root nulls the whole data.
#[test]
fn non_null_violation_at_root() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field("ok", Field::new(string()).with_resolver(constant("ok")))
        .field("required", Field::new(string().non_null()).with_resolver(constant(())))
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{ ok required }");
    assert_eq!(
        result.to_json(),
        json!({
            "data": null,
            "errors": [{
                "message": "Cannot return null for non-nullable field Query.required.",
                "locations": [{"line": 1, "column": 6}],
                "path": ["required"],
            }],
        }),
    );
    Ok(())
}

/// Verifies that an error in a nullable list item only nulls that item.
#[test]
fn list_item_error_nulls_only_the_item() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field(
            "numbers",
            Field::new(TypeAnnotation::list(int())).with_resolver(|_, _, _| {
                Ok(Value::list([
                    Value::Int(1),
                    Value::Error(FieldError::new("no two")),
                    Value::Int(3),
                ]))
            }),
        )
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{ numbers }");
    assert_eq!(
        result.to_json(),
        json!({
            "data": {"numbers": [1, null, 3]},
            "errors": [{
                "message": "no two",
                "locations": [{"line": 1, "column": 3}],
                "path": ["numbers", 1],
            }],
        }),
    );
    Ok(())
}

/// Verifies that a null item in a list of non-null items nulls the list.
#[test]
fn null_in_non_null_list_nulls_the_list() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field(
            "numbers",
            Field::new(TypeAnnotation::list(int().non_null()))
                .with_resolver(|_, _, _| Ok(Value::list([Value::Int(1), Value::Null]))),
        )
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{ numbers }");
    assert_eq!(result.to_json()["data"], json!({"numbers": null}));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "Cannot return null for non-nullable field Query.numbers.",
    );
    assert_eq!(
        serde_json::to_value(&result.errors[0].path).ok(),
        Some(json!(["numbers", 1])),
    );
    Ok(())
}

/// Verifies that a list field must resolve to a list; strings do not
/// count.
#[test]
fn list_field_requires_a_list() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field(
            "numbers",
            Field::new(TypeAnnotation::list(int())).with_resolver(constant("1, 2, 3")),
        )
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{ numbers }");
    assert_eq!(result.to_json()["data"], json!({"numbers": null}));
    assert_eq!(
        result.errors[0].message,
        "User Error: expected iterable, but did not find one for field Query.numbers.",
    );
    Ok(())
}

/// Verifies that leaf values which fail to serialize are field errors.
#[test]
fn leaf_serialization_errors() -> Result<()> {
    let color = EnumType::builder("Color").value("RED").value("GREEN").build()?;
    let query = ObjectType::builder("Query")
        .field("count", Field::new(int()).with_resolver(constant("many")))
        .field(
            "color",
            Field::new(TypeAnnotation::named("Color")).with_resolver(constant("BLUE")),
        )
        .field(
            "favorite",
            Field::new(TypeAnnotation::named("Color")).with_resolver(constant("GREEN")),
        )
        .build()?;
    let schema = Schema::builder().query(query).add_type(color).build()?;

    let result = run(&schema, "{ count color favorite }");
    assert_eq!(
        result.to_json()["data"],
        json!({"count": null, "color": null, "favorite": "GREEN"}),
    );
    let messages = result
        .errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        messages,
        [
            "Int cannot represent non-integer value: \"many\"",
            "Enum \"Color\" cannot represent value: \"BLUE\"",
        ],
    );
    Ok(())
}

/// Verifies that a resolver error keeps its extensions and its source.
#[test]
fn resolver_error_keeps_extensions_and_source() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field(
            "coded",
            Field::new(string()).with_resolver(|_, _, _| {
                let extensions = json!({"code": "FORBIDDEN"})
                    .as_object()
                    .cloned()
                    .unwrap_or_default();
                Err(FieldError::new("denied").with_extensions(extensions))
            }),
        )
        .field(
            "parsed",
            Field::new(int()).with_resolver(|_, _, _| {
                let n = "twelve".parse::<i64>().map_err(FieldError::from_error)?;
                Ok(n.into())
            }),
        )
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{ coded parsed }");
    assert_eq!(
        result.to_json()["errors"][0],
        json!({
            "message": "denied",
            "locations": [{"line": 1, "column": 3}],
            "path": ["coded"],
            "extensions": {"code": "FORBIDDEN"},
        }),
    );
    assert_eq!(result.errors[1].message, "invalid digit found in string");
    assert!(result.errors[1].original_error.is_some());
    Ok(())
}

/// Verifies that sorted errors come out in document order.
#[test]
fn sorted_errors_follow_locations() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field(
            "fail",
            Field::new(string()).with_resolver(|_, info, _| {
                Err(FieldError::new(format!("failed at {:?}", info.path_list())))
            }),
        )
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{\n  second: fail\n  first: fail\n}");
    let sorted = result
        .sorted_errors()
        .into_iter()
        .map(|error| error.locations[0].line)
        .collect::<Vec<_>>();
    assert_eq!(sorted, [2, 3]);
    Ok(())
}

// =============================================================================
// Abstract types
// =============================================================================

fn pets_schema(
    resolved_name: &'static str,
    pet_value: Value,
) -> Result<Schema> {
    let pet = InterfaceType::builder("Pet")
        .field("name", Field::new(string()))
        .resolve_type(move |_, _| Some(resolved_name.to_string()))
        .build()?;
    let dog = ObjectType::builder("Dog")
        .implements("Pet")
        .field("name", Field::new(string()))
        .build()?;
    let rock = ObjectType::builder("Rock")
        .field("name", Field::new(string()))
        .build()?;
    let query = ObjectType::builder("Query")
        .field("pet", Field::new(TypeAnnotation::named("Pet")).with_resolver(constant(pet_value)))
        .build()?;
    Schema::builder()
        .query(query)
        .add_types([GraphQLType::from(pet), dog.into(), rock.into()])
        .build()
}

/// Verifies that `resolve_type` picks the object type used for completion.
#[test]
fn resolve_type_picks_runtime_type() -> Result<()> {
    let schema = pets_schema("Dog", Value::map([("name", "Odie")]))?;
    let result = run(&schema, "{ pet { __typename name } }");
    assert_eq!(
        result.to_json(),
        json!({"data": {"pet": {"__typename": "Dog", "name": "Odie"}}}),
    );
    Ok(())
}

/// Verifies that resolving to a type the schema does not have is a field
/// error.
#[test]
fn resolve_type_to_unknown_type() -> Result<()> {
    let schema = pets_schema("Fish", Value::map([("name", "Nemo")]))?;
    let result = run(&schema, "{ pet { name } }");
    assert_eq!(result.to_json()["data"], json!({"pet": null}));
    assert_eq!(
        result.errors[0].message,
        "Abstract type Pet must resolve to an Object type at runtime for field Query.pet \
        with value { name: \"Nemo\" }, received \"Fish\".",
    );
    Ok(())
}

/// Verifies that resolving to an object type outside the abstract type is
/// a field error.
#[test]
fn resolve_type_to_impossible_type() -> Result<()> {
    let schema = pets_schema("Rock", Value::map([("name", "Pebble")]))?;
    let result = run(&schema, "{ pet { name } }");
    assert_eq!(result.to_json()["data"], json!({"pet": null}));
    assert_eq!(
        result.errors[0].message,
        "Runtime Object type \"Rock\" is not a possible type for \"Pet\".",
    );
    Ok(())
}

/// Verifies that, without `resolve_type`, a `__typename` entry in a map
/// value decides the member of a union.
#[test]
fn union_resolves_from_typename_entry() -> Result<()> {
    let photo = ObjectType::builder("Photo")
        .field("url", Field::new(string()))
        .is_type_of(|value, _| value.get("url").is_some())
        .build()?;
    let article = ObjectType::builder("Article")
        .field("title", Field::new(string()))
        .is_type_of(|value, _| value.get("title").is_some())
        .build()?;
    let result_type = UnionType::builder("SearchResult")
        .member("Photo")
        .member("Article")
        .build()?;
    let query = ObjectType::builder("Query")
        .field(
            "search",
            Field::new(TypeAnnotation::list(TypeAnnotation::named("SearchResult")))
                .with_resolver(|_, _, _| {
                    Ok(Value::list([
                        Value::map([("__typename", "Article"), ("title", "News")]),
                        Value::map([("url", "cat.png")]),
                    ]))
                }),
        )
        .build()?;
    let schema = Schema::builder()
        .query(query)
        .add_types([GraphQLType::from(photo), article.into(), result_type.into()])
        .build()?;

    let result = run(
        &schema,
        "{ search { __typename ... on Photo { url } ... on Article { title } } }",
    );
    assert_eq!(
        result.to_json(),
        json!({"data": {"search": [
            {"__typename": "Article", "title": "News"},
            {"__typename": "Photo", "url": "cat.png"},
        ]}}),
    );
    Ok(())
}

/// Verifies that an object type's `is_type_of` rejecting a value is a
/// field error.
#[test]
fn is_type_of_rejection() -> Result<()> {
    let dog = ObjectType::builder("Dog")
        .field("name", Field::new(string()))
        .is_type_of(|value, _| value.get("barks").is_some())
        .build()?;
    let query = ObjectType::builder("Query")
        .field(
            "dog",
            Field::new(TypeAnnotation::named("Dog"))
                .with_resolver(constant(Value::map([("name", "Tom")]))),
        )
        .build()?;
    let schema = Schema::builder().query(query).add_type(dog).build()?;

    let result = run(&schema, "{ dog { name } }");
    assert_eq!(result.to_json()["data"], json!({"dog": null}));
    assert_eq!(
        result.errors[0].message,
        "Expected value of type \"Dog\" but got: { name: \"Tom\" }.",
    );
    Ok(())
}

// =============================================================================
// Scheduling
// =============================================================================

fn logging_field(log: &Arc<Mutex<Vec<String>>>, name: &'static str) -> Field {
    let log = Arc::clone(log);
    Field::new(string()).with_resolver(move |_, _, _| {
        log.lock().unwrap_or_else(|e| e.into_inner()).push(format!("resolve {name}"));
        let log = Arc::clone(&log);
        Ok(Value::deferred(move || {
            log.lock().unwrap_or_else(|e| e.into_inner()).push(format!("settle {name}"));
            Ok(name.into())
        }))
    })
}

fn logging_schema(log: &Arc<Mutex<Vec<String>>>) -> Result<Schema> {
    let query = ObjectType::builder("Query")
        .field("a", logging_field(log, "a"))
        .field("b", logging_field(log, "b"))
        .build()?;
    let mutation = ObjectType::builder("Mutation")
        .field("a", logging_field(log, "a"))
        .field("b", logging_field(log, "b"))
        .build()?;
    Schema::builder().query(query).mutation(mutation).build()
}

/// Verifies that a mutation field's deferred value settles before the next
/// mutation field is resolved.
#[test]
fn mutation_settles_each_field_before_the_next() -> Result<()> {
    let log = Arc::new(Mutex::new(vec![]));
    let schema = logging_schema(&log)?;

    let result = run(&schema, "mutation { b a }");

    assert_eq!(result.to_json(), json!({"data": {"b": "b", "a": "a"}}));
    assert_eq!(
        *log.lock().unwrap(),
        ["resolve b", "settle b", "resolve a", "settle a"],
    );
    Ok(())
}

/// Verifies that query fields are all resolved before any of them is
/// completed, and still come back in selection order.
#[test]
fn query_resolves_siblings_before_completing() -> Result<()> {
    let log = Arc::new(Mutex::new(vec![]));
    let schema = logging_schema(&log)?;

    let result = run(&schema, "{ b a }");

    assert_eq!(response_keys(&result), ["b", "a"]);
    assert_eq!(
        *log.lock().unwrap(),
        ["resolve b", "resolve a", "settle b", "settle a"],
    );
    Ok(())
}

/// Verifies that a deferred error behaves like a returned error.
#[test]
fn deferred_error_is_a_field_error() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field(
            "later",
            Field::new(string()).with_resolver(|_, _, _| {
                Ok(Value::deferred(|| Err(FieldError::new("gave up"))))
            }),
        )
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{ later }");
    assert_eq!(result.to_json()["data"], json!({"later": null}));
    assert_eq!(result.errors[0].message, "gave up");
    Ok(())
}

// =============================================================================
// Execution arguments
// =============================================================================

/// Verifies that resolvers can reach the context value and the root value.
#[test]
fn context_and_root_values() -> Result<()> {
    struct Viewer {
        login: &'static str,
    }

    let query = ObjectType::builder("Query")
        .field(
            "viewer",
            Field::new(string()).with_resolver(|_, info, _| {
                Ok(info.context::<Viewer>().map(|viewer| viewer.login).into())
            }),
        )
        .field("motd", Field::new(string()))
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run_with(
        &schema,
        "{ viewer motd }",
        ExecutionArgs::new()
            .context_value(Viewer { login: "ada" })
            .root_value(Value::map([("motd", "hello")])),
    );
    assert_eq!(
        result.to_json(),
        json!({"data": {"viewer": "ada", "motd": "hello"}}),
    );
    Ok(())
}

/// Verifies that a custom field resolver replaces the default one, but not
/// a field's own resolver.
#[test]
fn custom_field_resolver() -> Result<()> {
    let schema = abc_schema()?;
    let query = ObjectType::builder("Query")
        .field("plain", Field::new(string()))
        .field("own", Field::new(string()).with_resolver(constant("mine")))
        .build()?;
    let custom = Schema::builder().query(query).build()?;

    let result = run_with(
        &custom,
        "{ plain own }",
        ExecutionArgs::new()
            .field_resolver(|_, info, _| Ok(info.field_name.to_uppercase().into())),
    );
    assert_eq!(result.to_json(), json!({"data": {"plain": "PLAIN", "own": "mine"}}));

    let result = run(&schema, "{ a }");
    assert_eq!(result.to_json(), json!({"data": {"a": "a"}}));
    Ok(())
}
