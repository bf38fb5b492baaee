use crate::types::DirectiveLocation;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use crate::types::TypeBuildError;
use crate::types::type_build_error::validate_name;
use indexmap::IndexMap;

/// The definition of a directive: where it may appear and what arguments
/// it takes.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) arguments: IndexMap<String, InputValue>,
    pub(crate) is_repeatable: bool,
}
impl DirectiveDefinition {
    pub fn builder(name: impl Into<String>) -> DirectiveDefinitionBuilder {
        DirectiveDefinitionBuilder {
            definition: DirectiveDefinition {
                name: name.into(),
                description: None,
                locations: vec![],
                arguments: IndexMap::new(),
                is_repeatable: false,
            },
            duplicate_argument: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    pub fn is_built_in(&self) -> bool {
        matches!(
            self.name.as_str(),
            "skip" | "include" | "deprecated" | "specifiedBy"
        )
    }

    /// `@skip(if: Boolean!)`
    pub fn skip() -> Self {
        Self::conditional(
            "skip",
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
            "Skipped when true.",
        )
    }

    /// `@include(if: Boolean!)`
    pub fn include() -> Self {
        Self::conditional(
            "include",
            "Directs the executor to include this field or fragment only when the `if` argument is true.",
            "Included when true.",
        )
    }

    fn conditional(name: &str, description: &str, if_description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            locations: vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            arguments: IndexMap::from([(
                "if".to_string(),
                InputValue::new(TypeAnnotation::named("Boolean").non_null())
                    .with_description(if_description),
            )]),
            is_repeatable: false,
        }
    }

    /// `@deprecated(reason: String = "No longer supported")`
    pub fn deprecated() -> Self {
        Self {
            name: "deprecated".to_string(),
            description: Some("Marks an element of a GraphQL schema as no longer supported.".to_string()),
            locations: vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            arguments: IndexMap::from([(
                "reason".to_string(),
                InputValue::new(TypeAnnotation::named("String"))
                    .with_default_value(DEFAULT_DEPRECATION_REASON)
                    .with_description(
                        "Explains why this element was deprecated, usually also including a \
                        suggestion for how to access supported similar data.",
                    ),
            )]),
            is_repeatable: false,
        }
    }

    /// `@specifiedBy(url: String!)`
    pub fn specified_by() -> Self {
        Self {
            name: "specifiedBy".to_string(),
            description: Some("Exposes a URL that specifies the behavior of this scalar.".to_string()),
            locations: vec![DirectiveLocation::Scalar],
            arguments: IndexMap::from([(
                "url".to_string(),
                InputValue::new(TypeAnnotation::named("String").non_null())
                    .with_description("The URL that specifies the behavior of this scalar."),
            )]),
            is_repeatable: false,
        }
    }
}

/// The reason reported for `@deprecated` when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

pub struct DirectiveDefinitionBuilder {
    definition: DirectiveDefinition,
    duplicate_argument: Option<String>,
}
impl DirectiveDefinitionBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.definition.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: DirectiveLocation) -> Self {
        if !self.definition.locations.contains(&location) {
            self.definition.locations.push(location);
        }
        self
    }

    pub fn argument(mut self, name: impl Into<String>, argument: InputValue) -> Self {
        let name = name.into();
        if self.definition.arguments.contains_key(&name) {
            self.duplicate_argument.get_or_insert(name);
        } else {
            self.definition.arguments.insert(name, argument);
        }
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.definition.is_repeatable = true;
        self
    }

    pub fn build(self) -> Result<DirectiveDefinition, TypeBuildError> {
        validate_name(&self.definition.name)?;
        if let Some(argument_name) = self.duplicate_argument {
            return Err(TypeBuildError::DuplicateArgumentDefinition {
                owner: format!("@{}", self.definition.name),
                argument_name,
            });
        }
        Ok(self.definition)
    }
}
