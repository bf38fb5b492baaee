use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;

/// A problem with how the types of a schema fit together, found while
/// building the schema.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeValidationError {
    #[error(
        "Abstract types must be resolvable at runtime: the `{abstract_type_name}` \
        {} has no `resolve_type` function and its possible type \
        `{object_type_name}` has no `is_type_of` function",
        if *is_union { "union" } else { "interface" },
    )]
    AbstractTypeNotResolvable {
        abstract_type_name: String,
        is_union: bool,
        object_type_name: String,
    },

    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "Multiple arguments named `{argument_name}` were defined on the \
        `{type_name}.{field_name}` field"
    )]
    DuplicateArgumentDefinition {
        argument_name: String,
        field_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` {} type must define one or more fields", kind.name())]
    EmptyFieldSet {
        kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("The `{type_name}` union must define one or more member types")]
    EmptyUnion {
        type_name: String,
    },

    #[error(
        "The `{type_name}` type attempts to implement `{non_interface_type_name}`, \
        which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
    },

    #[error(
        "The `{type_name}` type attempts to implement `{undefined_interface_name}`, \
        which is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
    },

    #[error("Field and argument names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        field_name: String,
        type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is an output type."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter was declared with the \
        `{outputonly_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        parameter_name: String,
        outputonly_type_name: String,
    },

    #[error(
        "Invalid parameter type: The `{type_name}.{field_name}` field \
        defines the `{parameter_name}` parameter with a type of \
        `{invalid_parameter_type}`, but `{interface_name}.{field_name}` \
        defines this parameter with type `{expected_parameter_type}`"
    )]
    InvalidInterfaceSpecifiedFieldParameterType {
        expected_parameter_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_parameter_type: TypeAnnotation,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "Invalid interface-specified field type: The \
        `{type_name}.{field_name}` field's type is defined as \
        `{invalid_field_type}` which is incompatible with \
        `{interface_name}.{field_name}` whose type is defined as `{expected_field_type}`."
    )]
    InvalidInterfaceSpecifiedFieldType {
        expected_field_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_field_type: TypeAnnotation,
        type_name: String,
    },

    #[error(
        "Additional parameters defined on interface-specified fields must not \
        be required: `{type_name}.{field_name}({parameter_name})` is required \
        but not declared on `{interface_name}.{field_name}`"
    )]
    InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{}`, but this type is a {} type and union members \
        can only be object types.",
        invalid_member_type.name(),
        GraphQLTypeKind::from(invalid_member_type).name(),
    )]
    InvalidUnionMemberTypeKind {
        union_type_name: String,
        invalid_member_type: GraphQLType,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but does not define a field named `{field_name}`"
    )]
    MissingInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface \
        which defines a `{missing_parameter_name}` parameter on the \
        `{field_name}` field, but `{type_name}` has no \
        `{missing_parameter_name}` parameter defined on \
        `{type_name}.{field_name}`"
    )]
    MissingInterfaceSpecifiedFieldParameter {
        field_name: String,
        interface_name: String,
        missing_parameter_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements {}, therefore \
        `{type_name}` must also implement \
        `{missing_recursive_interface_name}`",
        inheritance_path.iter()
            .map(|iface_name| format!("the `{iface_name}` interface"))
            .collect::<Vec<_>>()
            .join(" which implements "),
    )]
    MissingRecursiveInterfaceImplementation {
        inheritance_path: Vec<String>,
        missing_recursive_interface_name: String,
        type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        undefined_type_name: String,
    },
}
