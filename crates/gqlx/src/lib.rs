//! A GraphQL execution engine.
//!
//! Everything from [`gqlx_core`] is re-exported at the root of this crate;
//! the parser lives under [`parser`]. [`graphql()`] runs a request end to
//! end, and [`Request`] is the shape of a GraphQL-over-HTTP request body.
//!
//! ```
//! use gqlx::execution::ExecutionArgs;
//! use gqlx::schema::Schema;
//! use gqlx::types::Field;
//! use gqlx::types::ObjectType;
//! use gqlx::types::TypeAnnotation;
//!
//! let query = ObjectType::builder("Query")
//!     .field(
//!         "hello",
//!         Field::new(TypeAnnotation::named("String"))
//!             .with_resolver(|_source, _info, _args| Ok("World".into())),
//!     )
//!     .build()
//!     .expect("valid type");
//! let schema = Schema::builder().query(query).build().expect("valid schema");
//!
//! let result = gqlx::graphql(&schema, "{ hello }", ExecutionArgs::new());
//! assert_eq!(result.to_json(), serde_json::json!({"data": {"hello": "World"}}));
//! ```

mod graphql;
mod request;

pub use gqlx_core::*;
pub use graphql::graphql;
pub use graphql::graphql_with_rules;
pub use request::Request;

/// The executable-document lexer, parser and printer.
pub mod parser {
    pub use gqlx_parser::*;
}

#[cfg(test)]
mod tests;
