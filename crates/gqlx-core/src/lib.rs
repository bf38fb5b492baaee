//! The type system and executor of the `gqlx` GraphQL engine.
//!
//! A [`Schema`](schema::Schema) is assembled from [`types`] with a
//! [`SchemaBuilder`](schema::SchemaBuilder), which checks it once up front.
//! Parsed documents (see [`gqlx_parser`]) are checked by [`validation`] and
//! then evaluated by [`execution::execute`] against a caller-supplied root
//! [`Value`], producing an [`ExecutionResult`].
//!
//! ```
//! use gqlx_core::ExecutionResult;
//! use gqlx_core::execution::ExecutionArgs;
//! use gqlx_core::schema::SchemaBuilder;
//! use gqlx_core::types::Field;
//! use gqlx_core::types::ObjectType;
//! use gqlx_core::types::TypeAnnotation;
//!
//! let query = ObjectType::builder("Query")
//!     .field(
//!         "hello",
//!         Field::new(TypeAnnotation::named("String"))
//!             .with_resolver(|_source, _info, _args| Ok("World".into())),
//!     )
//!     .build()
//!     .expect("valid type");
//! let schema = SchemaBuilder::new().query(query).build().expect("valid schema");
//!
//! let document = gqlx_parser::parse("{ hello }").expect("valid document");
//! let result: ExecutionResult =
//!     gqlx_core::execution::execute(&schema, &document, ExecutionArgs::new());
//! assert_eq!(result.to_json(), serde_json::json!({"data": {"hello": "World"}}));
//! ```

pub mod coercion;
pub mod execution;
mod execution_result;
mod graphql_error;
pub mod introspection;
pub mod schema;
pub mod types;
pub mod validation;
mod value;

pub use execution_result::ExecutionResult;
pub use graphql_error::ErrorLocation;
pub use graphql_error::GraphQLError;
pub use graphql_error::PathSegment;
pub use value::Arguments;
pub use value::AsAny;
pub use value::Callable;
pub use value::Deferred;
pub use value::ObjectValue;
pub use value::Value;

/// Re-exported so callers can name AST types without a direct dependency.
pub use gqlx_parser::ast;

#[cfg(test)]
mod tests;
