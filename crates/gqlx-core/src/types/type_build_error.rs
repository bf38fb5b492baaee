use thiserror::Error;

/// Errors raised while building a single type, before it joins a schema.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeBuildError {
    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple arguments named `{argument_name}` were defined on `{owner}`")]
    DuplicateArgumentDefinition {
        owner: String,
        argument_name: String,
    },

    #[error("Multiple enum values named `{value_name}` were defined on the `{enum_name}` enum")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
    },

    #[error("The `{type_name}` union specifies `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
    },

    #[error("Enum types must define one or more unique values: `{type_name}` defines none")]
    EnumWithNoVariants {
        type_name: String,
    },

    #[error("`{name}` can not be used as an enum value name on the `{enum_name}` enum")]
    InvalidEnumValueName {
        enum_name: String,
        name: String,
    },

    #[error("Names must start with [_a-zA-Z] but \"{name}\" does not.")]
    InvalidNameStart {
        name: String,
    },

    #[error("Names must only contain [_a-zA-Z0-9] but \"{name}\" does not.")]
    InvalidNameCharacter {
        name: String,
    },

    #[error("`{annotation}` is not a valid type annotation")]
    InvalidTypeAnnotation {
        annotation: String,
    },

    #[error("The `{type_name}` scalar must provide a `serialize` function")]
    MissingScalarSerialize {
        type_name: String,
    },

    #[error(
        "The `{type_name}` scalar must provide both `parse_value` and \
        `parse_literal` functions, or neither"
    )]
    IncompleteScalarParsers {
        type_name: String,
    },

    #[error("Expected name to be a non-empty string.")]
    EmptyName,
}

/// Checks `name` against `/[_A-Za-z][_0-9A-Za-z]*/`.
///
/// https://spec.graphql.org/October2021/#Name
pub(crate) fn validate_name(name: &str) -> Result<(), TypeBuildError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(TypeBuildError::EmptyName);
    };
    if !(first == '_' || first.is_ascii_alphabetic()) {
        return Err(TypeBuildError::InvalidNameStart {
            name: name.to_string(),
        });
    }
    if !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        return Err(TypeBuildError::InvalidNameCharacter {
            name: name.to_string(),
        });
    }
    Ok(())
}
