use crate::Arguments;
use crate::ObjectValue;
use crate::Value;
use crate::execution::FieldError;
use crate::execution::ResolveInfo;
use crate::execution::ResolverResult;
use crate::types::DirectiveDefinition;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use std::sync::Arc;

/// The source value of every introspection object.
///
/// Nodes only carry what they describe; anything that needs the schema is
/// looked up through [`ResolveInfo::schema`] when the field is resolved.
#[derive(Clone, Debug)]
pub enum IntrospectionNode {
    Schema,
    /// A `__Type`. Wrapping types are described by their annotation; named
    /// types by a nullable named annotation.
    Type(TypeAnnotation),
    Field {
        name: String,
        field: Field,
    },
    InputValue {
        name: String,
        input_value: InputValue,
    },
    EnumValue {
        name: String,
        enum_value: EnumValue,
    },
    Directive(Arc<DirectiveDefinition>),
}
impl IntrospectionNode {
    pub(crate) fn into_value(self) -> Value {
        Value::object(self)
    }

    pub(crate) fn named_type(name: &str) -> Value {
        Self::Type(TypeAnnotation::named(name)).into_value()
    }
}

/// Schema-independent properties are plain attributes, read by the default
/// field resolver.
impl ObjectValue for IntrospectionNode {
    fn attribute(&self, attribute_name: &str) -> Option<Value> {
        match (self, attribute_name) {
            (Self::Field { name, .. }, "name")
            | (Self::InputValue { name, .. }, "name")
            | (Self::EnumValue { name, .. }, "name") => Some(name.as_str().into()),
            (Self::Directive(directive), "name") => Some(directive.name().into()),

            (Self::Field { field, .. }, "description") => Some(field.description().into()),
            (Self::InputValue { input_value, .. }, "description") => {
                Some(input_value.description().into())
            },
            (Self::EnumValue { enum_value, .. }, "description") => {
                Some(enum_value.description().into())
            },
            (Self::Directive(directive), "description") => {
                Some(directive.description().into())
            },

            (Self::Field { field, .. }, "isDeprecated") => {
                Some(field.deprecation_state().is_deprecated().into())
            },
            (Self::InputValue { input_value, .. }, "isDeprecated") => {
                Some(input_value.deprecation_state().is_deprecated().into())
            },
            (Self::EnumValue { enum_value, .. }, "isDeprecated") => {
                Some(enum_value.deprecation_state().is_deprecated().into())
            },

            (Self::Field { field, .. }, "deprecationReason") => {
                Some(field.deprecation_state().reason().into())
            },
            (Self::InputValue { input_value, .. }, "deprecationReason") => {
                Some(input_value.deprecation_state().reason().into())
            },
            (Self::EnumValue { enum_value, .. }, "deprecationReason") => {
                Some(enum_value.deprecation_state().reason().into())
            },

            (Self::Directive(directive), "isRepeatable") => {
                Some(directive.is_repeatable().into())
            },
            (Self::Directive(directive), "locations") => Some(Value::list(
                directive.locations().iter().map(|location| location.as_str()),
            )),
            _ => None,
        }
    }

    fn type_name(&self) -> Option<&str> {
        Some(match self {
            Self::Schema => "__Schema",
            Self::Type(_) => "__Type",
            Self::Field { .. } => "__Field",
            Self::InputValue { .. } => "__InputValue",
            Self::EnumValue { .. } => "__EnumValue",
            Self::Directive(_) => "__Directive",
        })
    }
}

/// Adapts a resolver over [`IntrospectionNode`] sources into a field
/// resolver.
pub(crate) fn node_resolver<F>(
    resolve: F,
) -> impl Fn(&Value, &ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync + 'static
where
    F: Fn(&IntrospectionNode, &ResolveInfo<'_>, &Arguments) -> ResolverResult
        + Send
        + Sync
        + 'static,
{
    move |source, info, args| {
        let node = source
            .as_object()
            .and_then(|object| object.downcast_ref::<IntrospectionNode>())
            .ok_or_else(|| {
                FieldError::new(format!(
                    "Introspection field {}.{} resolved on a non-introspection value.",
                    info.parent_type.name(),
                    info.field_name,
                ))
            })?;
        resolve(node, info, args)
    }
}
