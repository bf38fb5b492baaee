use crate::GraphQLStringParsingError;

/// Errors that occur when converting raw literal text to a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    #[error("Invalid GraphQL string: {0}")]
    String(#[from] GraphQLStringParsingError),
}
