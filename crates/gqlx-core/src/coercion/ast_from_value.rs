use crate::Value;
use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

fn name(value: &str) -> ast::Name {
    ast::Name::new(value)
}

fn loc() -> ast::Location {
    ast::Location::none()
}

fn null_literal() -> ast::Value {
    ast::Value::Null(ast::NullValue { loc: loc() })
}

fn string_literal(value: String) -> ast::Value {
    ast::Value::String(ast::StringValue {
        value,
        block: false,
        loc: loc(),
    })
}

/// Produces a literal spelling an internal value of the given input type,
/// e.g. to print argument defaults in introspection.
///
/// Returns `None` when the value cannot be represented in that type.
pub fn ast_from_value(schema: &Schema, value: &Value, ty: &TypeAnnotation) -> Option<ast::Value> {
    if !ty.nullable() {
        let literal = ast_from_value(schema, value, &ty.to_nullable())?;
        return (!matches!(literal, ast::Value::Null(_))).then_some(literal);
    }

    if value.is_null() {
        return Some(null_literal());
    }

    match ty {
        TypeAnnotation::List(list_annot) => {
            let item_type = list_annot.inner_type_annotation();
            match value {
                Value::List(items) => Some(ast::Value::List(ast::ListValue {
                    values: items
                        .iter()
                        .filter_map(|item| ast_from_value(schema, item, item_type))
                        .collect(),
                    loc: loc(),
                })),
                _ => ast_from_value(schema, value, item_type),
            }
        },

        TypeAnnotation::Named(named_annot) => {
            match schema.get_type(named_annot.graphql_type_name())? {
                GraphQLType::InputObject(input_type) => {
                    let fields = input_type
                        .fields()
                        .iter()
                        .filter_map(|(field_name, field_def)| {
                            let field_value = value.get(field_name)?;
                            Some(ast::ObjectField {
                                name: name(field_name),
                                value: ast_from_value(
                                    schema,
                                    &field_value,
                                    field_def.type_annotation(),
                                )?,
                                loc: loc(),
                            })
                        })
                        .collect();
                    Some(ast::Value::Object(ast::ObjectValue { fields, loc: loc() }))
                },

                GraphQLType::Enum(enum_type) => {
                    let enum_name = enum_type.serialize(value)?;
                    Some(ast::Value::Enum(ast::EnumValue {
                        value: enum_name.to_string(),
                        loc: loc(),
                    }))
                },

                GraphQLType::Scalar(scalar_type) => {
                    let serialized = scalar_type.serialize(value).ok()?;
                    // IDs that look like integers print as integers.
                    if scalar_type.name() == "ID"
                        && let serde_json::Value::String(id) = &serialized
                        && let Ok(int) = id.parse::<i64>()
                        && int.to_string() == *id
                    {
                        return Some(ast::Value::Int(ast::IntValue::new(int, loc())));
                    }
                    ast_from_json(&serialized)
                },

                GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                    None
                },
            }
        },
    }
}

fn ast_from_json(json: &serde_json::Value) -> Option<ast::Value> {
    Some(match json {
        serde_json::Value::Null => null_literal(),
        serde_json::Value::Bool(value) => ast::Value::Boolean(ast::BooleanValue {
            value: *value,
            loc: loc(),
        }),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(value) => ast::Value::Int(ast::IntValue::new(value, loc())),
            None => ast::Value::Float(ast::FloatValue::new(number.as_f64()?, loc())),
        },
        serde_json::Value::String(value) => string_literal(value.clone()),
        serde_json::Value::Array(items) => ast::Value::List(ast::ListValue {
            values: items.iter().map(ast_from_json).collect::<Option<Vec<_>>>()?,
            loc: loc(),
        }),
        serde_json::Value::Object(entries) => ast::Value::Object(ast::ObjectValue {
            fields: entries
                .iter()
                .map(|(key, value)| {
                    Some(ast::ObjectField {
                        name: name(key),
                        value: ast_from_json(value)?,
                        loc: loc(),
                    })
                })
                .collect::<Option<Vec<_>>>()?,
            loc: loc(),
        }),
    })
}

/// Spells a runtime value as a literal without consulting any type.
/// Host objects, callables and errors have no literal form.
pub(crate) fn untyped_ast_from_value(value: &Value) -> Option<ast::Value> {
    Some(match value {
        Value::Null => null_literal(),
        Value::Boolean(value) => ast::Value::Boolean(ast::BooleanValue {
            value: *value,
            loc: loc(),
        }),
        Value::Int(value) => ast::Value::Int(ast::IntValue::new(*value, loc())),
        Value::Float(value) if value.is_finite() => {
            ast::Value::Float(ast::FloatValue::new(*value, loc()))
        },
        Value::Float(_) => return None,
        Value::String(value) => string_literal(value.clone()),
        Value::List(items) => ast::Value::List(ast::ListValue {
            values: items.iter().map(untyped_ast_from_value).collect::<Option<Vec<_>>>()?,
            loc: loc(),
        }),
        Value::Map(entries) => ast::Value::Object(ast::ObjectValue {
            fields: entries
                .iter()
                .map(|(key, value)| {
                    Some(ast::ObjectField {
                        name: name(key),
                        value: untyped_ast_from_value(value)?,
                        loc: loc(),
                    })
                })
                .collect::<Option<Vec<_>>>()?,
            loc: loc(),
        }),
        Value::Object(_) | Value::Callable(_) | Value::Deferred(_) | Value::Error(_) => {
            return None;
        },
    })
}
