use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Every fragment spread names a fragment defined in the document.
///
/// https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownFragmentNames;
impl ValidationRule for KnownFragmentNames {
    fn name(&self) -> &'static str {
        "KnownFragmentNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<GraphQLError> {
        ctx.fragment_spreads()
            .into_iter()
            .filter(|spread| ctx.document.fragment(spread.name.as_str()).is_none())
            .map(|spread| {
                GraphQLError::new(format!("Unknown fragment \"{}\".", spread.name))
                    .at([&spread.name.loc])
            })
            .collect()
    }
}
