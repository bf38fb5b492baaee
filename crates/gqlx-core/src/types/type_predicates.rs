//! Free-function forms of the type predicates the executor and coercion
//! rely on. Each takes a [`TypeAnnotation`] and, where the answer depends
//! on the named type, the [`Schema`] it is resolved against.

use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// Unwraps list and non-null layers down to the named type.
pub fn get_named_type<'a>(schema: &'a Schema, annot: &TypeAnnotation) -> Option<&'a GraphQLType> {
    schema.get_type(annot.innermost_type_name())
}

/// Strips a single outermost non-null.
pub fn get_nullable_type(annot: &TypeAnnotation) -> TypeAnnotation {
    annot.to_nullable()
}

pub fn is_list_type(annot: &TypeAnnotation) -> bool {
    annot.as_list_annotation().is_some()
}

pub fn is_non_null_type(annot: &TypeAnnotation) -> bool {
    !annot.nullable()
}

fn named_type_matches(
    schema: &Schema,
    annot: &TypeAnnotation,
    predicate: impl Fn(&GraphQLType) -> bool,
) -> bool {
    annot.as_named_annotation().is_some()
        && get_named_type(schema, annot).is_some_and(predicate)
}

/// Whether `annot` directly names an interface or union (lists are not
/// abstract).
pub fn is_abstract_type(schema: &Schema, annot: &TypeAnnotation) -> bool {
    named_type_matches(schema, annot, GraphQLType::is_abstract)
}

pub fn is_leaf_type(schema: &Schema, annot: &TypeAnnotation) -> bool {
    named_type_matches(schema, annot, GraphQLType::is_leaf)
}

pub fn is_object_type(schema: &Schema, annot: &TypeAnnotation) -> bool {
    named_type_matches(schema, annot, |t| t.as_object().is_some())
}

pub fn is_composite_type(schema: &Schema, annot: &TypeAnnotation) -> bool {
    named_type_matches(schema, annot, GraphQLType::is_composite)
}

pub fn is_input_type(schema: &Schema, annot: &TypeAnnotation) -> bool {
    get_named_type(schema, annot).is_some_and(GraphQLType::is_input_type)
}

pub fn is_output_type(schema: &Schema, annot: &TypeAnnotation) -> bool {
    get_named_type(schema, annot).is_some_and(GraphQLType::is_output_type)
}
