use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// An anonymous operation must be the only operation in its document.
///
/// https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation
#[derive(Clone, Copy, Debug, Default)]
pub struct LoneAnonymousOperation;
impl ValidationRule for LoneAnonymousOperation {
    fn name(&self) -> &'static str {
        "LoneAnonymousOperation"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<GraphQLError> {
        let operation_count = ctx.document.operations().count();
        if operation_count <= 1 {
            return vec![];
        }
        ctx.document
            .operations()
            .filter(|operation| operation.name.is_none())
            .map(|operation| {
                GraphQLError::new("This anonymous operation must be the only defined operation.")
                    .at([&operation.loc])
            })
            .collect()
    }
}
