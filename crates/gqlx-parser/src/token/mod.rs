//! The token types produced by the lexer and consumed by the parser.

mod graphql_token;
mod graphql_token_kind;
mod string_value;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub use string_value::block_string_value;
pub use string_value::cook_string_literal;

#[cfg(test)]
mod tests;
