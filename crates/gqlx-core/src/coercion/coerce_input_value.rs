use crate::Value;
use crate::coercion::CoercionError;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Coerces an externally supplied runtime value (e.g. a variable decoded
/// from JSON) into an internal value of the given input type.
///
/// Every problem found is reported, each message prefixed with where in the
/// value it was found.
pub fn coerce_input_value(
    schema: &Schema,
    value: &Value,
    ty: &TypeAnnotation,
) -> Result<Value, Vec<CoercionError>> {
    if !ty.nullable() {
        if value.is_null() {
            return Err(vec![CoercionError::new(format!("Expected \"{ty}\", found null."))]);
        }
        return coerce_input_value(schema, value, &ty.to_nullable());
    }

    if value.is_null() {
        return Ok(Value::Null);
    }

    match ty {
        TypeAnnotation::List(list_annot) => {
            let item_type = list_annot.inner_type_annotation();
            let Value::List(items) = value else {
                return coerce_input_value(schema, value, item_type)
                    .map(|item| Value::List(vec![item]));
            };
            let mut coerced = Vec::with_capacity(items.len());
            let mut errors = vec![];
            for (index, item) in items.iter().enumerate() {
                match coerce_input_value(schema, item, item_type) {
                    Ok(item) => coerced.push(item),
                    Err(item_errors) => errors.extend(
                        item_errors
                            .into_iter()
                            .map(|error| error.nested(format_args!("In element #{index}"))),
                    ),
                }
            }
            if errors.is_empty() { Ok(Value::List(coerced)) } else { Err(errors) }
        },

        TypeAnnotation::Named(named_annot) => {
            let type_name = named_annot.graphql_type_name();
            let Some(named_type) = schema.get_type(type_name) else {
                return Err(vec![CoercionError::new(format!("Unknown type \"{type_name}\"."))]);
            };
            match named_type {
                GraphQLType::Scalar(scalar_type) => {
                    scalar_type.parse_value(value).map_err(|error| {
                        vec![CoercionError::new(format!(
                            "Expected type \"{type_name}\", found {value}; {error}"
                        ))]
                    })
                },

                GraphQLType::Enum(enum_type) => enum_type.parse_value(value).ok_or_else(|| {
                    vec![CoercionError::new(format!(
                        "Expected type \"{type_name}\", found {value}."
                    ))]
                }),

                GraphQLType::InputObject(input_type) => {
                    let Value::Map(entries) = value else {
                        return Err(vec![CoercionError::new(format!(
                            "Expected type \"{type_name}\" to be an object."
                        ))]);
                    };
                    let fields = input_type.fields();
                    let mut coerced = IndexMap::new();
                    let mut errors = vec![];
                    for (field_name, field_def) in fields {
                        let field_type = field_def.type_annotation();
                        let Some(field_value) = entries.get(field_name) else {
                            if let Some(default_value) = field_def.default_value() {
                                coerced.insert(
                                    field_def.output_key(field_name).to_string(),
                                    default_value.clone(),
                                );
                            } else if !field_type.nullable() {
                                errors.push(CoercionError::new(format!(
                                    "Field \"{field_name}\" of required type \"{field_type}\" was not provided."
                                )));
                            }
                            continue;
                        };
                        match coerce_input_value(schema, field_value, field_type) {
                            Ok(field_value) => {
                                coerced.insert(
                                    field_def.output_key(field_name).to_string(),
                                    field_value,
                                );
                            },
                            Err(field_errors) => errors.extend(field_errors.into_iter().map(
                                |error| error.nested(format_args!("In field \"{field_name}\"")),
                            )),
                        }
                    }
                    for key in entries.keys() {
                        if !fields.contains_key(key) {
                            errors.push(
                                CoercionError::new("Unknown field.")
                                    .nested(format_args!("In field \"{key}\"")),
                            );
                        }
                    }
                    if errors.is_empty() { Ok(Value::Map(coerced)) } else { Err(errors) }
                },

                GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                    Err(vec![CoercionError::new(format!(
                        "Expected an input type, found \"{type_name}\"."
                    ))])
                },
            }
        },
    }
}
