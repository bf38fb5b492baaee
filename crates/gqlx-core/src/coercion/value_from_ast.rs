use crate::Value;
use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Produces the internal value of an input literal for the given input
/// type.
///
/// Returns `None` when the literal is invalid for the type, including when
/// it references a variable that `variables` does not provide. An explicit
/// `null` literal for a nullable type produces `Some(Value::Null)`.
///
/// Variables are read as already-coerced values. Scalars only ever see
/// variable-free literals: any variables inside a literal are substituted
/// before [`ScalarType::parse_literal`](crate::types::ScalarType::parse_literal)
/// runs.
pub fn value_from_ast(
    schema: &Schema,
    node: &ast::Value,
    ty: &TypeAnnotation,
    variables: Option<&IndexMap<String, Value>>,
) -> Option<Value> {
    if let ast::Value::Variable(variable) = node {
        let value = variables?.get(variable.name.as_str())?;
        if value.is_null() && !ty.nullable() {
            return None;
        }
        return Some(value.clone());
    }

    if !ty.nullable() {
        if matches!(node, ast::Value::Null(_)) {
            return None;
        }
        return value_from_ast(schema, node, &ty.to_nullable(), variables);
    }

    if matches!(node, ast::Value::Null(_)) {
        return Some(Value::Null);
    }

    match ty {
        TypeAnnotation::List(list_annot) => {
            let item_type = list_annot.inner_type_annotation();
            let ast::Value::List(list) = node else {
                return value_from_ast(schema, node, item_type, variables)
                    .map(|item| Value::List(vec![item]));
            };
            let mut items = Vec::with_capacity(list.values.len());
            for item_node in &list.values {
                if is_missing_variable(item_node, variables) {
                    // A missing variable in a list becomes null, if the
                    // item type allows it.
                    if !item_type.nullable() {
                        return None;
                    }
                    items.push(Value::Null);
                } else {
                    items.push(value_from_ast(schema, item_node, item_type, variables)?);
                }
            }
            Some(Value::List(items))
        },

        TypeAnnotation::Named(named_annot) => {
            match schema.get_type(named_annot.graphql_type_name())? {
                GraphQLType::InputObject(input_type) => {
                    let ast::Value::Object(object) = node else {
                        return None;
                    };
                    let fields = input_type.fields();
                    if object.fields.iter().any(|f| !fields.contains_key(f.name.as_str())) {
                        return None;
                    }
                    let mut coerced = IndexMap::new();
                    for (field_name, field_def) in fields {
                        let field_node = object
                            .field(field_name)
                            .filter(|f| !is_missing_variable(&f.value, variables));
                        let Some(field_node) = field_node else {
                            if let Some(default_value) = field_def.default_value() {
                                coerced.insert(
                                    field_def.output_key(field_name).to_string(),
                                    default_value.clone(),
                                );
                            } else if !field_def.type_annotation().nullable() {
                                return None;
                            }
                            continue;
                        };
                        let field_value = value_from_ast(
                            schema,
                            &field_node.value,
                            field_def.type_annotation(),
                            variables,
                        )?;
                        coerced.insert(field_def.output_key(field_name).to_string(), field_value);
                    }
                    Some(Value::Map(coerced))
                },

                GraphQLType::Enum(enum_type) => enum_type.parse_literal(node),

                GraphQLType::Scalar(scalar_type) => {
                    if node.contains_variables() {
                        let substituted = substitute_variables(node, variables)?;
                        scalar_type.parse_literal(&substituted).ok()
                    } else {
                        scalar_type.parse_literal(node).ok()
                    }
                },

                GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                    None
                },
            }
        },
    }
}

fn is_missing_variable(node: &ast::Value, variables: Option<&IndexMap<String, Value>>) -> bool {
    match node {
        ast::Value::Variable(variable) => {
            variables.is_none_or(|variables| !variables.contains_key(variable.name.as_str()))
        },
        _ => false,
    }
}

/// Replaces every variable inside `node` with a literal spelling of its
/// value.
fn substitute_variables(
    node: &ast::Value,
    variables: Option<&IndexMap<String, Value>>,
) -> Option<ast::Value> {
    Some(match node {
        ast::Value::Variable(variable) => {
            let value = variables?.get(variable.name.as_str())?;
            super::ast_from_value::untyped_ast_from_value(value)?
        },
        ast::Value::List(list) => ast::Value::List(ast::ListValue {
            values: list
                .values
                .iter()
                .map(|item| substitute_variables(item, variables))
                .collect::<Option<Vec<_>>>()?,
            loc: list.loc.clone(),
        }),
        ast::Value::Object(object) => ast::Value::Object(ast::ObjectValue {
            fields: object
                .fields
                .iter()
                .map(|field| {
                    Some(ast::ObjectField {
                        name: field.name.clone(),
                        value: substitute_variables(&field.value, variables)?,
                        loc: field.loc.clone(),
                    })
                })
                .collect::<Option<Vec<_>>>()?,
            loc: object.loc.clone(),
        }),
        other => other.clone(),
    })
}

/// Produces a value from a literal without any type information: enums
/// become strings and objects become maps. Unknown variables become null.
pub fn value_from_ast_untyped(
    node: &ast::Value,
    variables: Option<&IndexMap<String, Value>>,
) -> Value {
    match node {
        ast::Value::Variable(variable) => variables
            .and_then(|variables| variables.get(variable.name.as_str()))
            .cloned()
            .unwrap_or_default(),
        ast::Value::Int(int) => match int.as_i64() {
            Some(num) => Value::Int(num),
            None => int.as_f64().map(Value::Float).unwrap_or_default(),
        },
        ast::Value::Float(float) => float.as_f64().map(Value::Float).unwrap_or_default(),
        ast::Value::String(string) => Value::String(string.value.clone()),
        ast::Value::Boolean(boolean) => Value::Boolean(boolean.value),
        ast::Value::Null(_) => Value::Null,
        ast::Value::Enum(enum_value) => Value::String(enum_value.value.clone()),
        ast::Value::List(list) => Value::List(
            list.values
                .iter()
                .map(|item| value_from_ast_untyped(item, variables))
                .collect(),
        ),
        ast::Value::Object(object) => Value::Map(
            object
                .fields
                .iter()
                .map(|field| {
                    (
                        field.name.value.clone(),
                        value_from_ast_untyped(&field.value, variables),
                    )
                })
                .collect(),
        ),
    }
}
