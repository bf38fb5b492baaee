use crate::Arguments;
use crate::ExecutionResult;
use crate::Value;
use crate::ast;
use crate::execution::ExecutionArgs;
use crate::execution::ResolveInfo;
use crate::execution::ResolverResult;
use crate::execution::execute;
use crate::schema::Schema;

pub(crate) fn parse(source: &str) -> ast::Document {
    gqlx_parser::parse(source).expect("test document should parse")
}

pub(crate) fn run(schema: &Schema, source: &str) -> ExecutionResult {
    run_with(schema, source, ExecutionArgs::new())
}

pub(crate) fn run_with(schema: &Schema, source: &str, args: ExecutionArgs) -> ExecutionResult {
    execute(schema, &parse(source), args)
}

/// A resolver that always returns `value`.
pub(crate) fn constant<V>(
    value: V,
) -> impl Fn(&Value, &ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync + 'static
where
    V: Into<Value> + Clone + Send + Sync + 'static,
{
    move |_, _, _| Ok(value.clone().into())
}
