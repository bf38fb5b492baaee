use crate::types::Field;
use crate::types::FieldsThunk;
use crate::types::TypeBuildError;
use crate::types::type_build_error::validate_name;
use indexmap::IndexMap;

/// The state object and interface types have in common.
#[derive(Clone, Debug)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: FieldsThunk,
    pub(crate) interfaces: Vec<String>,
}
impl ObjectOrInterfaceTypeData {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(String::as_str).collect()
    }
}

/// Builder state shared by [`ObjectTypeBuilder`](crate::types::ObjectTypeBuilder)
/// and [`InterfaceTypeBuilder`](crate::types::InterfaceTypeBuilder).
///
/// Duplicates are remembered rather than rejected on the spot so that the
/// builders can keep their by-value chaining API; `build()` reports the
/// first one.
pub(crate) struct ObjectOrInterfaceTypeDataBuilder {
    name: String,
    description: Option<String>,
    fields: IndexMap<String, Field>,
    fields_thunk: Option<FieldsThunk>,
    interfaces: Vec<String>,
    duplicate_field: Option<String>,
    duplicate_interface: Option<String>,
}
impl ObjectOrInterfaceTypeDataBuilder {
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: None,
            fields: IndexMap::new(),
            fields_thunk: None,
            interfaces: vec![],
            duplicate_field: None,
            duplicate_interface: None,
        }
    }

    pub fn description(&mut self, description: String) {
        self.description = Some(description);
    }

    pub fn field(&mut self, name: String, field: Field) {
        if self.fields.contains_key(&name) {
            self.duplicate_field.get_or_insert(name);
        } else {
            self.fields.insert(name, field);
        }
    }

    pub fn fields_thunk(&mut self, thunk: FieldsThunk) {
        self.fields_thunk = Some(thunk);
    }

    pub fn implements(&mut self, interface_name: String) {
        if self.interfaces.contains(&interface_name) {
            self.duplicate_interface.get_or_insert(interface_name);
        } else {
            self.interfaces.push(interface_name);
        }
    }

    pub fn build(self) -> Result<ObjectOrInterfaceTypeData, TypeBuildError> {
        validate_name(&self.name)?;
        if let Some(field_name) = self.duplicate_field {
            return Err(TypeBuildError::DuplicateFieldNameDefinition {
                type_name: self.name,
                field_name,
            });
        }
        if let Some(duplicated_interface_name) = self.duplicate_interface {
            return Err(TypeBuildError::DuplicateInterfaceImplementsDeclaration {
                duplicated_interface_name,
                type_name: self.name,
            });
        }
        for field_name in self.fields.keys() {
            validate_name(field_name)?;
        }
        for interface_name in &self.interfaces {
            validate_name(interface_name)?;
        }

        // Eagerly supplied fields and a thunk may be combined; the thunk's
        // fields follow the eager ones.
        let fields = match self.fields_thunk {
            None => FieldsThunk::ready(self.fields),
            Some(thunk) if self.fields.is_empty() => thunk,
            Some(thunk) => {
                let eager = self.fields;
                FieldsThunk::lazy(move || {
                    let mut fields = eager.clone();
                    for (name, field) in thunk.get() {
                        fields.entry(name.clone()).or_insert_with(|| field.clone());
                    }
                    fields
                })
            },
        };

        Ok(ObjectOrInterfaceTypeData {
            name: self.name,
            description: self.description,
            fields,
            interfaces: self.interfaces,
        })
    }
}
