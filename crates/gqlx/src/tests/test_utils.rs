use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;

/// `Query { hello: String, greet(name: String!): String }` and
/// `Mutation { touch: Boolean }`.
pub(super) fn greeting_schema() -> Result<Schema, SchemaBuildError> {
    let query = ObjectType::builder("Query")
        .field(
            "hello",
            Field::new(TypeAnnotation::named("String"))
                .with_resolver(|_, _, _| Ok("World".into())),
        )
        .field(
            "greet",
            Field::new(TypeAnnotation::named("String"))
                .with_argument("name", InputValue::new(TypeAnnotation::named("String").non_null()))
                .with_resolver(|_, _, args| {
                    let name = args.get("name").and_then(|name| name.as_str()).unwrap_or_default();
                    Ok(format!("Hello, {name}!").into())
                }),
        )
        .build()?;
    let mutation = ObjectType::builder("Mutation")
        .field(
            "touch",
            Field::new(TypeAnnotation::named("Boolean"))
                .with_resolver(|_, _, _| Ok(true.into())),
        )
        .build()?;
    Schema::builder().query(query).mutation(mutation).build()
}
