use crate::Value;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;

/// The definition of a field argument, directive argument or input-object
/// field.
///
/// `default_value` is an internal (already coerced) value. When `out_name`
/// is set, the coerced value is stored under that key instead of the
/// declared name.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    type_annotation: TypeAnnotation,
    default_value: Option<Value>,
    description: Option<String>,
    out_name: Option<String>,
    deprecation_reason: Option<String>,
}
impl InputValue {
    pub fn new(type_annotation: TypeAnnotation) -> Self {
        Self {
            type_annotation,
            default_value: None,
            description: None,
            out_name: None,
            deprecation_reason: None,
        }
    }

    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_out_name(mut self, out_name: impl Into<String>) -> Self {
        self.out_name = Some(out_name.into());
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn out_name(&self) -> Option<&str> {
        self.out_name.as_deref()
    }

    /// The key the coerced value is stored under.
    pub(crate) fn output_key<'a>(&'a self, declared_name: &'a str) -> &'a str {
        self.out_name.as_deref().unwrap_or(declared_name)
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.deprecation_reason.as_ref().into()
    }

    /// Required inputs are non-null and have no default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }
}
