use crate::types::FieldsThunk;
use crate::types::InputValue;
use crate::types::TypeBuildError;
use crate::types::type_build_error::validate_name;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: FieldsThunk<InputValue>,
}
impl InputObjectType {
    pub fn builder(name: impl Into<String>) -> InputObjectTypeBuilder {
        InputObjectTypeBuilder {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            fields_thunk: None,
            duplicate_field: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        self.fields.get()
    }

    pub fn field(&self, name: &str) -> Option<&InputValue> {
        self.fields().get(name)
    }
}

pub struct InputObjectTypeBuilder {
    name: String,
    description: Option<String>,
    fields: IndexMap<String, InputValue>,
    fields_thunk: Option<FieldsThunk<InputValue>>,
    duplicate_field: Option<String>,
}
impl InputObjectTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: InputValue) -> Self {
        let name = name.into();
        if self.fields.contains_key(&name) {
            self.duplicate_field.get_or_insert(name);
        } else {
            self.fields.insert(name, field);
        }
        self
    }

    /// Supplies the fields through a closure that runs when the schema is
    /// built. Replaces any fields added with [`Self::field`].
    pub fn fields_thunk<F>(mut self, thunk: F) -> Self
    where
        F: Fn() -> IndexMap<String, InputValue> + Send + Sync + 'static,
    {
        self.fields_thunk = Some(FieldsThunk::lazy(thunk));
        self
    }

    pub fn build(self) -> Result<InputObjectType, TypeBuildError> {
        validate_name(&self.name)?;
        if let Some(field_name) = self.duplicate_field {
            return Err(TypeBuildError::DuplicateFieldNameDefinition {
                type_name: self.name,
                field_name,
            });
        }
        for field_name in self.fields.keys() {
            validate_name(field_name)?;
        }
        Ok(InputObjectType {
            name: self.name,
            description: self.description,
            fields: self
                .fields_thunk
                .unwrap_or_else(|| FieldsThunk::ready(self.fields)),
        })
    }
}
