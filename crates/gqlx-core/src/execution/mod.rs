//! Execution of operations against a [`Schema`](crate::schema::Schema).
//!
//! [`execute`] selects an operation, coerces its variables, then walks its
//! selection sets calling field [`Resolver`]s and completing their results
//! into a JSON response.

mod collect_fields;
mod execute;
mod execution_context;
mod field_error;
mod middleware;
mod resolve_info;
mod resolver;
mod response_path;

pub(crate) use execution_context::ExecutionContext;
pub use execute::ExecutionArgs;
pub use execute::execute;
pub use field_error::FieldError;
pub use middleware::FnMiddleware;
pub use middleware::Middleware;
pub use middleware::MiddlewareChain;
pub use middleware::Next;
pub use resolve_info::ResolveInfo;
pub use resolver::Resolver;
pub use resolver::ResolverResult;
pub use resolver::default_field_resolver;
pub use response_path::PathKey;
pub use response_path::ResponsePath;

#[cfg(test)]
mod tests;
