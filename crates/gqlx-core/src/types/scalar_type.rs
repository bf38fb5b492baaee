use crate::Value;
use crate::ast;
use crate::coercion::value_from_ast_untyped;
use crate::types::TypeBuildError;
use crate::types::type_build_error::validate_name;
use std::fmt;
use std::sync::Arc;

/// A scalar rejected a value during serialization or parsing.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ScalarCoercionError {
    pub message: String,
}
impl ScalarCoercionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Converts an internal value into its response representation.
pub type SerializeFn =
    Arc<dyn Fn(&Value) -> Result<serde_json::Value, ScalarCoercionError> + Send + Sync>;

/// Converts an externally supplied (variable) value into an internal value.
pub type ParseValueFn =
    Arc<dyn Fn(&Value) -> Result<Value, ScalarCoercionError> + Send + Sync>;

/// Converts a variable-free literal into an internal value.
pub type ParseLiteralFn =
    Arc<dyn Fn(&ast::Value) -> Result<Value, ScalarCoercionError> + Send + Sync>;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars): a leaf
/// type whose values are converted by three functions.
///
/// Literals reach [`ScalarType::parse_literal`] with any variables already
/// substituted, so a scalar never has to look variables up itself.
#[derive(Clone)]
pub struct ScalarType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) specified_by_url: Option<String>,
    serialize: SerializeFn,
    parse_value: ParseValueFn,
    parse_literal: ParseLiteralFn,
}
impl ScalarType {
    pub fn builder(name: impl Into<String>) -> ScalarTypeBuilder {
        ScalarTypeBuilder::new(name)
    }

    pub(crate) fn built_in<S, V, L>(
        name: &str,
        description: &str,
        serialize: S,
        parse_value: V,
        parse_literal: L,
    ) -> Self
    where
        S: Fn(&Value) -> Result<serde_json::Value, ScalarCoercionError> + Send + Sync + 'static,
        V: Fn(&Value) -> Result<Value, ScalarCoercionError> + Send + Sync + 'static,
        L: Fn(&ast::Value) -> Result<Value, ScalarCoercionError> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            specified_by_url: None,
            serialize: Arc::new(serialize),
            parse_value: Arc::new(parse_value),
            parse_literal: Arc::new(parse_literal),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The URL of a document describing this scalar's behavior, exposed as
    /// `specifiedByURL` through introspection.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }

    pub fn serialize(&self, value: &Value) -> Result<serde_json::Value, ScalarCoercionError> {
        (self.serialize)(value)
    }

    pub fn parse_value(&self, value: &Value) -> Result<Value, ScalarCoercionError> {
        (self.parse_value)(value)
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Result<Value, ScalarCoercionError> {
        (self.parse_literal)(value)
    }
}
impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("specified_by_url", &self.specified_by_url)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`ScalarType`].
///
/// `serialize` is mandatory. `parse_value` and `parse_literal` come as a
/// pair: a scalar that supplies neither passes input values through
/// unchanged and reads literals as untyped values.
pub struct ScalarTypeBuilder {
    name: String,
    description: Option<String>,
    specified_by_url: Option<String>,
    serialize: Option<SerializeFn>,
    parse_value: Option<ParseValueFn>,
    parse_literal: Option<ParseLiteralFn>,
}
impl ScalarTypeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    pub fn serialize<F>(mut self, serialize: F) -> Self
    where
        F: Fn(&Value) -> Result<serde_json::Value, ScalarCoercionError> + Send + Sync + 'static,
    {
        self.serialize = Some(Arc::new(serialize));
        self
    }

    pub fn parse_value<F>(mut self, parse_value: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ScalarCoercionError> + Send + Sync + 'static,
    {
        self.parse_value = Some(Arc::new(parse_value));
        self
    }

    pub fn parse_literal<F>(mut self, parse_literal: F) -> Self
    where
        F: Fn(&ast::Value) -> Result<Value, ScalarCoercionError> + Send + Sync + 'static,
    {
        self.parse_literal = Some(Arc::new(parse_literal));
        self
    }

    pub fn build(self) -> Result<ScalarType, TypeBuildError> {
        validate_name(&self.name)?;
        let Some(serialize) = self.serialize else {
            return Err(TypeBuildError::MissingScalarSerialize {
                type_name: self.name,
            });
        };
        let (parse_value, parse_literal) = match (self.parse_value, self.parse_literal) {
            (Some(parse_value), Some(parse_literal)) => (parse_value, parse_literal),
            (None, None) => {
                let parse_value: ParseValueFn = Arc::new(|value| Ok(value.clone()));
                let parse_literal: ParseLiteralFn = {
                    let parse_value = Arc::clone(&parse_value);
                    Arc::new(move |literal| parse_value(&value_from_ast_untyped(literal, None)))
                };
                (parse_value, parse_literal)
            },
            _ => {
                return Err(TypeBuildError::IncompleteScalarParsers {
                    type_name: self.name,
                });
            },
        };
        Ok(ScalarType {
            name: self.name,
            description: self.description,
            specified_by_url: self.specified_by_url,
            serialize,
            parse_value,
            parse_literal,
        })
    }
}
