use crate::GraphQLError;
use crate::ast;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueFragmentNames;
impl ValidationRule for UniqueFragmentNames {
    fn name(&self) -> &'static str {
        "UniqueFragmentNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<GraphQLError> {
        let mut seen = HashMap::<&str, &ast::Name>::new();
        let mut errors = vec![];
        for fragment in ctx.document.fragments() {
            let name = &fragment.name;
            if let Some(first) = seen.get(name.as_str()) {
                errors.push(
                    GraphQLError::new(format!(
                        "There can be only one fragment named \"{name}\"."
                    ))
                    .at([&first.loc, &name.loc]),
                );
            } else {
                seen.insert(name.as_str(), name);
            }
        }
        errors
    }
}
