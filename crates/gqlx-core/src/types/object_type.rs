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

/// Decides whether a runtime value belongs to an object type.
pub type IsTypeOfFn = Arc<dyn Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync>;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Clone)]
pub struct ObjectType {
    pub(crate) data: ObjectOrInterfaceTypeData,
    is_type_of: Option<IsTypeOfFn>,
}
impl ObjectType {
    pub fn builder(name: impl Into<String>) -> ObjectTypeBuilder {
        ObjectTypeBuilder {
            data: ObjectOrInterfaceTypeDataBuilder::new(name.into()),
            is_type_of: None,
        }
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    /// The fields of this type in declaration order. Forces the field thunk
    /// if it has not been forced yet.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().get(name)
    }

    /// The names of the interfaces this type declares that it implements,
    /// in declaration order.
    pub fn interface_names(&self) -> Vec<&str> {
        self.data.interface_names()
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.data.interfaces.iter().any(|name| name == interface_name)
    }

    pub fn has_is_type_of(&self) -> bool {
        self.is_type_of.is_some()
    }

    /// Runs the type's `is_type_of` hook. `None` when the type has none.
    pub fn is_type_of(&self, value: &Value, info: &ResolveInfo<'_>) -> Option<bool> {
        self.is_type_of.as_ref().map(|is_type_of| is_type_of(value, info))
    }
}
impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.data.name)
            .field("interfaces", &self.data.interfaces)
            .field("fields", &self.data.fields)
            .field("has_is_type_of", &self.is_type_of.is_some())
            .finish()
    }
}

pub struct ObjectTypeBuilder {
    data: ObjectOrInterfaceTypeDataBuilder,
    is_type_of: Option<IsTypeOfFn>,
}
impl ObjectTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.data.description(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.data.field(name.into(), field);
        self
    }

    /// Supplies (more) fields through a closure that runs when the schema
    /// is built, so that the fields may refer to types defined later.
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

    pub fn is_type_of<F>(mut self, is_type_of: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    {
        self.is_type_of = Some(Arc::new(is_type_of));
        self
    }

    pub fn build(self) -> Result<ObjectType, TypeBuildError> {
        Ok(ObjectType {
            data: self.data.build()?,
            is_type_of: self.is_type_of,
        })
    }
}
