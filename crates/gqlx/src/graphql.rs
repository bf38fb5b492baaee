use gqlx_core::ExecutionResult;
use gqlx_core::GraphQLError;
use gqlx_core::execution::ExecutionArgs;
use gqlx_core::execution::execute;
use gqlx_core::schema::Schema;
use gqlx_core::validation::ValidationRule;
use gqlx_core::validation::specified_rules;
use gqlx_core::validation::validate;

/// Parses, validates and executes `source` against `schema`.
///
/// Syntax errors and validation errors are reported in the result's
/// `errors` with `data` absent; nothing is executed in either case.
pub fn graphql(schema: &Schema, source: &str, args: ExecutionArgs) -> ExecutionResult {
    graphql_with_rules(schema, source, args, &specified_rules())
}

/// Like [`graphql`], but validates with `rules` instead of
/// [`specified_rules`].
pub fn graphql_with_rules(
    schema: &Schema,
    source: &str,
    args: ExecutionArgs,
    rules: &[Box<dyn ValidationRule>],
) -> ExecutionResult {
    let document = match gqlx_parser::parse(source) {
        Ok(document) => document,
        Err(parse_errors) => {
            log::debug!("request has {} syntax error(s)", parse_errors.len());
            return ExecutionResult::from_errors(
                parse_errors.iter().map(GraphQLError::from_parse_error).collect(),
            );
        },
    };

    let validation_errors = validate(schema, &document, rules);
    if !validation_errors.is_empty() {
        log::debug!("request failed validation with {} error(s)", validation_errors.len());
        return ExecutionResult::from_errors(validation_errors);
    }

    execute(schema, &document, args)
}
