use crate::Arguments;
use crate::Value;
use crate::execution::ResolveInfo;
use crate::execution::Resolver;
use crate::execution::ResolverResult;
use crate::types::DeprecationState;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// An output field of an object or interface type.
///
/// A field without a resolver is resolved by the executor's default field
/// resolver.
#[derive(Clone)]
pub struct Field {
    type_annotation: TypeAnnotation,
    arguments: IndexMap<String, InputValue>,
    pub(crate) duplicate_arguments: Vec<String>,
    resolver: Option<Resolver>,
    description: Option<String>,
    deprecation_reason: Option<String>,
}
impl Field {
    pub fn new(type_annotation: TypeAnnotation) -> Self {
        Self {
            type_annotation,
            arguments: IndexMap::new(),
            duplicate_arguments: vec![],
            resolver: None,
            description: None,
            deprecation_reason: None,
        }
    }

    /// Adds an argument. Declaring the same name twice is reported when the
    /// schema is built.
    pub fn with_argument(mut self, name: impl Into<String>, argument: InputValue) -> Self {
        let name = name.into();
        if self.arguments.contains_key(&name) {
            self.duplicate_arguments.push(name);
        } else {
            self.arguments.insert(name, argument);
        }
        self
    }

    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&InputValue> {
        self.arguments.get(name)
    }

    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.deprecation_reason.as_ref().into()
    }
}
impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("type_annotation", &self.type_annotation)
            .field("arguments", &self.arguments)
            .field("has_resolver", &self.resolver.is_some())
            .field("description", &self.description)
            .field("deprecation_reason", &self.deprecation_reason)
            .finish()
    }
}
