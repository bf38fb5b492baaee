//! The runtime representation of GraphQL types.
//!
//! Named types reference each other by name through [`TypeAnnotation`]s;
//! the [`Schema`](crate::schema::Schema) resolves those names. This keeps
//! cyclic type graphs free of reference cycles.

pub mod built_in_scalars;
mod deprecation_state;
mod directive_definition;
mod directive_location;
mod enum_type;
mod field;
mod fields_thunk;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod input_object_type_validator;
mod input_value;
mod interface_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_validator;
mod object_type;
mod scalar_type;
mod type_annotation;
mod type_build_error;
mod type_predicates;
mod union_type;
mod union_type_validator;

pub use deprecation_state::DeprecationState;
pub use directive_definition::DEFAULT_DEPRECATION_REASON;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveDefinitionBuilder;
pub use directive_location::DirectiveLocation;
pub use enum_type::EnumType;
pub use enum_type::EnumTypeBuilder;
pub use enum_type::EnumValue;
pub use field::Field;
pub use fields_thunk::FieldsThunk;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use input_object_type::InputObjectTypeBuilder;
pub use input_value::InputValue;
pub use interface_type::InterfaceType;
pub use interface_type::InterfaceTypeBuilder;
pub use interface_type::ResolveTypeFn;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub(crate) use input_object_type_validator::InputObjectTypeValidator;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub(crate) use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::IsTypeOfFn;
pub use object_type::ObjectType;
pub use object_type::ObjectTypeBuilder;
pub use scalar_type::ParseLiteralFn;
pub use scalar_type::ParseValueFn;
pub use scalar_type::ScalarCoercionError;
pub use scalar_type::ScalarType;
pub use scalar_type::ScalarTypeBuilder;
pub use scalar_type::SerializeFn;
pub use type_annotation::TypeAnnotation;
pub use type_build_error::TypeBuildError;
pub use type_predicates::get_named_type;
pub use type_predicates::get_nullable_type;
pub use type_predicates::is_abstract_type;
pub use type_predicates::is_composite_type;
pub use type_predicates::is_input_type;
pub use type_predicates::is_leaf_type;
pub use type_predicates::is_list_type;
pub use type_predicates::is_non_null_type;
pub use type_predicates::is_object_type;
pub use type_predicates::is_output_type;
pub use union_type::UnionType;
pub use union_type::UnionTypeBuilder;
pub(crate) use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
