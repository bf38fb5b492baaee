use crate::Value;
use crate::ast;
use crate::types::DeprecationState;
use crate::types::TypeBuildError;
use crate::types::type_build_error::validate_name;
use indexmap::IndexMap;

/// One value of an [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) value: Value,
    pub(crate) description: Option<String>,
    pub(crate) deprecation_reason: Option<String>,
}
impl EnumValue {
    /// An enum value whose internal representation is `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            description: None,
            deprecation_reason: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.deprecation_reason.as_ref().into()
    }
}

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
///
/// Each value has a name (what clients see) and an internal [`Value`]
/// (what resolvers see). Serialization maps internal values to names;
/// parsing maps names to internal values.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn builder(name: impl Into<String>) -> EnumTypeBuilder {
        EnumTypeBuilder {
            name: name.into(),
            description: None,
            values: IndexMap::new(),
            duplicate_value: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// The name of the value whose internal representation equals `value`.
    pub fn serialize(&self, value: &Value) -> Option<&str> {
        self.values
            .iter()
            .find(|(_, enum_value)| &enum_value.value == value)
            .map(|(name, _)| name.as_str())
    }

    /// The internal value for a runtime input: an enum name given as a
    /// string.
    pub fn parse_value(&self, value: &Value) -> Option<Value> {
        let name = value.as_str()?;
        self.values.get(name).map(|enum_value| enum_value.value.clone())
    }

    /// The internal value for an enum literal. Strings are not enum
    /// literals.
    pub fn parse_literal(&self, literal: &ast::Value) -> Option<Value> {
        match literal {
            ast::Value::Enum(enum_literal) => self
                .values
                .get(enum_literal.value.as_str())
                .map(|enum_value| enum_value.value.clone()),
            _ => None,
        }
    }
}

pub struct EnumTypeBuilder {
    name: String,
    description: Option<String>,
    values: IndexMap<String, EnumValue>,
    duplicate_value: Option<String>,
}
impl EnumTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a value whose internal representation is its own name.
    pub fn value(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let enum_value = EnumValue::new(name.as_str());
        self.value_with(name, enum_value)
    }

    pub fn value_with(mut self, name: impl Into<String>, value: EnumValue) -> Self {
        let name = name.into();
        if self.values.contains_key(&name) {
            self.duplicate_value.get_or_insert(name);
        } else {
            self.values.insert(name, value);
        }
        self
    }

    pub fn build(self) -> Result<EnumType, TypeBuildError> {
        validate_name(&self.name)?;
        if let Some(value_name) = self.duplicate_value {
            return Err(TypeBuildError::DuplicateEnumValueDefinition {
                enum_name: self.name,
                value_name,
            });
        }
        if self.values.is_empty() {
            return Err(TypeBuildError::EnumWithNoVariants {
                type_name: self.name,
            });
        }
        for value_name in self.values.keys() {
            validate_name(value_name)?;
            // https://spec.graphql.org/October2021/#EnumValue
            if matches!(value_name.as_str(), "true" | "false" | "null") {
                return Err(TypeBuildError::InvalidEnumValueName {
                    enum_name: self.name.clone(),
                    name: value_name.clone(),
                });
            }
        }
        Ok(EnumType {
            name: self.name,
            description: self.description,
            values: self.values,
        })
    }
}
