use crate::Arguments;
use crate::Value;
use crate::execution::FieldError;
use crate::execution::ResolveInfo;
use std::sync::Arc;

pub type ResolverResult = Result<Value, FieldError>;

/// Produces the value of a field from its parent value (the "source"), the
/// field's [`ResolveInfo`] and its coerced arguments.
///
/// A resolver may return [`Value::Deferred`] to hand back a value that
/// settles later, or [`Value::Error`] to fail a single list item.
pub type Resolver =
    Arc<dyn Fn(&Value, &ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync>;

/// Resolves fields that have no resolver of their own.
///
/// Reads the field from a map source by key or from an object source by
/// attribute; anything else resolves to null. A [`Value::Callable`] found
/// that way is called once with the field's info and arguments, and its
/// result is used instead.
pub fn default_field_resolver(
    source: &Value,
    info: &ResolveInfo<'_>,
    args: &Arguments,
) -> ResolverResult {
    let property = match source {
        Value::Map(entries) => entries.get(info.field_name).cloned().unwrap_or_default(),
        Value::Object(object) => object.attribute(info.field_name).unwrap_or_default(),
        _ => Value::Null,
    };
    match property {
        Value::Callable(callable) => callable.call(info, args),
        property => Ok(property),
    }
}
