//! Checks a parsed document against a schema before it is executed.
//!
//! Only a handful of the standard rules ship with this crate; callers can
//! supply more by implementing [`ValidationRule`].

mod rules;
mod validation_context;
mod validation_rule;

pub use rules::KnownFragmentNames;
pub use rules::LoneAnonymousOperation;
pub use rules::UniqueFragmentNames;
pub use rules::UniqueOperationNames;
pub use validation_context::ValidationContext;
pub use validation_rule::ValidationRule;

use crate::GraphQLError;
use crate::ast;
use crate::schema::Schema;

/// The rules [`validate`] should run when the caller has no opinion.
pub fn specified_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(LoneAnonymousOperation),
        Box::new(UniqueOperationNames),
        Box::new(UniqueFragmentNames),
        Box::new(KnownFragmentNames),
    ]
}

/// Runs every rule over `document` and returns all errors they report, in
/// rule order. An empty list means the document may be executed.
pub fn validate(
    schema: &Schema,
    document: &ast::Document,
    rules: &[Box<dyn ValidationRule>],
) -> Vec<GraphQLError> {
    let ctx = ValidationContext::new(schema, document);
    rules
        .iter()
        .flat_map(|rule| {
            let errors = rule.validate(&ctx);
            if !errors.is_empty() {
                log::debug!("{} reported {} error(s)", rule.name(), errors.len());
            }
            errors
        })
        .collect()
}
