use crate::ast;
use crate::execution::ExecutionContext;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Fields grouped by response key, in the order the keys first appear.
pub(crate) type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a ast::Field>>;

/// Gathers the fields `selection_set` selects on `runtime_type` into
/// `fields`, expanding fragments whose type condition applies.
///
/// Each named fragment is expanded at most once per call tree, which also
/// keeps cyclic fragment spreads from recursing forever.
///
/// https://spec.graphql.org/October2021/#CollectFields()
pub(crate) fn collect_fields<'a>(
    ctx: &ExecutionContext<'a>,
    runtime_type: &ObjectType,
    selection_set: &'a ast::SelectionSet,
    fields: &mut GroupedFields<'a>,
    visited_fragments: &mut HashSet<&'a str>,
) {
    for selection in &selection_set.selections {
        if !should_include_node(ctx, selection.directives()) {
            continue;
        }
        match selection {
            ast::Selection::Field(field) => {
                fields.entry(field.response_key()).or_default().push(field);
            },
            ast::Selection::InlineFragment(fragment) => {
                if !does_fragment_condition_match(
                    ctx,
                    fragment.type_condition.as_ref(),
                    runtime_type,
                ) {
                    continue;
                }
                collect_fields(
                    ctx,
                    runtime_type,
                    &fragment.selection_set,
                    fields,
                    visited_fragments,
                );
            },
            ast::Selection::FragmentSpread(spread) => {
                let fragment_name = spread.name.as_str();
                if !visited_fragments.insert(fragment_name) {
                    continue;
                }
                let Some(fragment) = ctx.fragments.get(fragment_name).copied() else {
                    continue;
                };
                if !does_fragment_condition_match(
                    ctx,
                    Some(&fragment.type_condition),
                    runtime_type,
                ) {
                    continue;
                }
                collect_fields(
                    ctx,
                    runtime_type,
                    &fragment.selection_set,
                    fields,
                    visited_fragments,
                );
            },
        }
    }
}

/// `@skip(if: true)` excludes a selection and wins over `@include`;
/// `@include(if: false)` excludes it too.
fn should_include_node(ctx: &ExecutionContext<'_>, directives: &[ast::Directive]) -> bool {
    if directives.is_empty() {
        return true;
    }
    if directive_condition(ctx, "skip", directives) == Some(true) {
        return false;
    }
    directive_condition(ctx, "include", directives) != Some(false)
}

/// The coerced `if` argument of the named directive, when it is present.
fn directive_condition(
    ctx: &ExecutionContext<'_>,
    directive_name: &str,
    directives: &[ast::Directive],
) -> Option<bool> {
    let directive_def = ctx.schema.get_directive(directive_name)?;
    match crate::coercion::get_directive_values(
        ctx.schema,
        directive_def,
        directives,
        &ctx.variable_values,
    ) {
        Ok(args) => args?.get("if")?.as_bool(),
        Err(err) => {
            log::debug!("ignoring invalid @{directive_name}: {err}");
            None
        },
    }
}

fn does_fragment_condition_match(
    ctx: &ExecutionContext<'_>,
    type_condition: Option<&ast::NamedType>,
    runtime_type: &ObjectType,
) -> bool {
    let Some(type_condition) = type_condition else {
        return true;
    };
    let condition_name = type_condition.name.as_str();
    if condition_name == runtime_type.name() {
        return true;
    }
    ctx.schema
        .get_type(condition_name)
        .is_some_and(|condition_type| condition_type.is_abstract())
        && ctx.schema.is_possible_type(condition_name, runtime_type.name())
}
