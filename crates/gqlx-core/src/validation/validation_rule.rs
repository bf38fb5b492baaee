use crate::GraphQLError;
use crate::validation::ValidationContext;

/// One check run by [`validate`](crate::validation::validate).
pub trait ValidationRule: Send + Sync {
    /// The rule's name, as it appears in logs.
    fn name(&self) -> &'static str;

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<GraphQLError>;
}
