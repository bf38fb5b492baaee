use crate::GraphQLError;
use crate::ast;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueOperationNames;
impl ValidationRule for UniqueOperationNames {
    fn name(&self) -> &'static str {
        "UniqueOperationNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<GraphQLError> {
        let mut seen = HashMap::<&str, &ast::Name>::new();
        let mut errors = vec![];
        for name in ctx.document.operations().filter_map(|op| op.name.as_ref()) {
            match seen.get(name.as_str()) {
                Some(first) => errors.push(
                    GraphQLError::new(format!(
                        "There can be only one operation named \"{name}\"."
                    ))
                    .at([&first.loc, &name.loc]),
                ),
                None => {
                    seen.insert(name.as_str(), name);
                },
            }
        }
        errors
    }
}
