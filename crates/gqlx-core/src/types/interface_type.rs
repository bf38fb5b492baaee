use crate::Value;
use crate::execution::ResolveInfo;
use crate::types::Field;
use crate::types::FieldsThunk;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeBuildError;
use crate::types::object_or_interface_type_data::ObjectOrInterfaceTypeDataBuilder;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Names the object type a runtime value of an abstract type belongs to.
///
/// Returning `None` means the value could not be resolved, which surfaces
/// as a field error.
pub type ResolveTypeFn =
    Arc<dyn Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync>;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone)]
pub struct InterfaceType {
    pub(crate) data: ObjectOrInterfaceTypeData,
    resolve_type: Option<ResolveTypeFn>,
}
impl InterfaceType {
    pub fn builder(name: impl Into<String>) -> InterfaceTypeBuilder {
        InterfaceTypeBuilder {
            data: ObjectOrInterfaceTypeDataBuilder::new(name.into()),
            resolve_type: None,
        }
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().get(name)
    }

    /// Interfaces may themselves implement other interfaces.
    pub fn interface_names(&self) -> Vec<&str> {
        self.data.interface_names()
    }

    pub fn has_resolve_type(&self) -> bool {
        self.resolve_type.is_some()
    }

    pub(crate) fn resolve_type_fn(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }
}
impl fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceType")
            .field("name", &self.data.name)
            .field("interfaces", &self.data.interfaces)
            .field("fields", &self.data.fields)
            .field("has_resolve_type", &self.resolve_type.is_some())
            .finish()
    }
}

pub struct InterfaceTypeBuilder {
    data: ObjectOrInterfaceTypeDataBuilder,
    resolve_type: Option<ResolveTypeFn>,
}
impl InterfaceTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.data.description(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.data.field(name.into(), field);
        self
    }

    pub fn fields_thunk<F>(mut self, thunk: F) -> Self
    where
        F: Fn() -> IndexMap<String, Field> + Send + Sync + 'static,
    {
        self.data.fields_thunk(FieldsThunk::lazy(thunk));
        self
    }

    pub fn implements(mut self, interface_name: impl Into<String>) -> Self {
        self.data.implements(interface_name.into());
        self
    }

    pub fn resolve_type<F>(mut self, resolve_type: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn build(self) -> Result<InterfaceType, TypeBuildError> {
        Ok(InterfaceType {
            data: self.data.build()?,
            resolve_type: self.resolve_type,
        })
    }
}
