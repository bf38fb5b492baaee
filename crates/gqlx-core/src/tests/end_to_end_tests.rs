//! Whole requests against small schemas, from document text to JSON.

use crate::ObjectValue;
use crate::Value;
use crate::execution::FieldError;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::tests::utils::constant;
use crate::tests::utils::run;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
struct Dog {
    name: &'static str,
    woofs: bool,
}
impl ObjectValue for Dog {
    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(self.name.into()),
            "woofs" => Some(self.woofs.into()),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Cat {
    name: &'static str,
    meows: bool,
}
impl ObjectValue for Cat {
    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(self.name.into()),
            "meows" => Some(self.meows.into()),
            _ => None,
        }
    }
}

fn is_a<T: ObjectValue + 'static>(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.downcast_ref::<T>().is_some())
}

/// Verifies the smallest possible request: one field with its own resolver.
#[test]
fn hello_world() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field("hello", Field::new(TypeAnnotation::named("String")).with_resolver(constant("World")))
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{ hello }");

    assert_eq!(result.to_json(), json!({"data": {"hello": "World"}}));
    assert!(!result.has_errors());
    Ok(())
}

/// Verifies that aliases keep both selections of one field apart and that
/// an omitted argument takes its default.
#[test]
fn aliases_with_arguments() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field(
            "greet",
            Field::new(TypeAnnotation::named("String"))
                .with_argument(
                    "name",
                    InputValue::new(TypeAnnotation::named("String")).with_default_value("Anon"),
                )
                .with_resolver(|_, _, args| {
                    let name = args.get("name").and_then(Value::as_str).unwrap_or_default();
                    Ok(format!("Hello, {name}").into())
                }),
        )
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, r#"{ a: greet b: greet(name: "Ada") }"#);

    assert_eq!(
        result.to_json(),
        json!({"data": {"a": "Hello, Anon", "b": "Hello, Ada"}}),
    );
    Ok(())
}

/// Verifies that inline fragments on an interface's implementations only
/// apply to values of that implementation.
#[test]
fn fragments_on_interface_implementations() -> Result<()> {
    let pet = InterfaceType::builder("Pet")
        .field("name", Field::new(TypeAnnotation::named("String")))
        .build()?;
    let dog = ObjectType::builder("Dog")
        .implements("Pet")
        .field("name", Field::new(TypeAnnotation::named("String")))
        .field("woofs", Field::new(TypeAnnotation::named("Boolean")))
        .is_type_of(|value, _| is_a::<Dog>(value))
        .build()?;
    let cat = ObjectType::builder("Cat")
        .implements("Pet")
        .field("name", Field::new(TypeAnnotation::named("String")))
        .field("meows", Field::new(TypeAnnotation::named("Boolean")))
        .is_type_of(|value, _| is_a::<Cat>(value))
        .build()?;
    let query = ObjectType::builder("Query")
        .field(
            "pets",
            Field::new(TypeAnnotation::list(TypeAnnotation::named("Pet"))).with_resolver(
                |_, _, _| {
                    Ok(Value::list([
                        Value::object(Dog {
                            name: "Odie",
                            woofs: true,
                        }),
                        Value::object(Cat {
                            name: "Garfield",
                            meows: false,
                        }),
                    ]))
                },
            ),
        )
        .build()?;
    let schema = Schema::builder()
        .query(query)
        .add_types([GraphQLType::from(pet), dog.into(), cat.into()])
        .build()?;

    let result = run(
        &schema,
        "{ pets { name ... on Dog { woofs } ... on Cat { meows } } }",
    );

    assert_eq!(
        result.to_json(),
        json!({"data": {"pets": [
            {"name": "Odie", "woofs": true},
            {"name": "Garfield", "meows": false},
        ]}}),
    );
    Ok(())
}

/// Verifies that an error in a non-null field nulls out its nullable
/// parent and is reported once, at the failing field.
#[test]
fn non_null_error_nulls_the_nullable_parent() -> Result<()> {
    let nest = ObjectType::builder("Nest")
        .field(
            "nonNullSync",
            Field::new(TypeAnnotation::named("String").non_null())
                .with_resolver(|_, _, _| Err(FieldError::new("boom"))),
        )
        .build()?;
    let query = ObjectType::builder("Query")
        .field(
            "nest",
            Field::new(TypeAnnotation::named("Nest")).with_resolver(constant(Value::map([("x", 1)]))),
        )
        .build()?;
    let schema = Schema::builder().query(query).add_type(nest).build()?;

    let result = run(&schema, "{ nest { nonNullSync } }");

    assert_eq!(
        result.to_json(),
        json!({
            "data": {"nest": null},
            "errors": [{
                "message": "boom",
                "locations": [{"line": 1, "column": 10}],
                "path": ["nest", "nonNullSync"],
            }],
        }),
    );
    Ok(())
}

/// Verifies that mutation root fields run one after the other.
#[test]
fn mutation_fields_run_serially() -> Result<()> {
    let counter = Arc::new(AtomicI64::new(0));
    let query = ObjectType::builder("Query")
        .field("count", Field::new(TypeAnnotation::named("Int")))
        .build()?;
    let mutation = ObjectType::builder("Mutation")
        .field(
            "inc",
            Field::new(TypeAnnotation::named("Int"))
                .with_argument("n", InputValue::new(TypeAnnotation::named("Int")))
                .with_resolver(move |_, _, args| {
                    let n = args.get("n").and_then(Value::as_i64).unwrap_or(0);
                    Ok(Value::Int(counter.fetch_add(n, Ordering::SeqCst) + n))
                }),
        )
        .build()?;
    let schema = Schema::builder().query(query).mutation(mutation).build()?;

    let result = run(
        &schema,
        "mutation { a: inc(n: 1) b: inc(n: 1) c: inc(n: 1) }",
    );

    assert_eq!(result.to_json(), json!({"data": {"a": 1, "b": 2, "c": 3}}));
    Ok(())
}

/// Verifies that `@include(if: false)` omits a field even when `@skip`
/// would keep it.
#[test]
fn include_false_omits_field() -> Result<()> {
    let query = ObjectType::builder("Query")
        .field("a", Field::new(TypeAnnotation::named("String")).with_resolver(constant("a")))
        .field("b", Field::new(TypeAnnotation::named("String")).with_resolver(constant("b")))
        .build()?;
    let schema = Schema::builder().query(query).build()?;

    let result = run(&schema, "{ a b @include(if: false) @skip(if: false) }");

    assert_eq!(result.to_json(), json!({"data": {"a": "a"}}));
    Ok(())
}
