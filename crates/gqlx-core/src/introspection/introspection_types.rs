use crate::Arguments;
use crate::Value;
use crate::coercion::ast_from_value;
use crate::introspection::IntrospectionNode;
use crate::introspection::introspection_node::node_resolver;
use crate::schema::MetaFields;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputValue;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::TypeBuildError;
use gqlx_parser::printer::print_value;
use std::sync::Arc;

fn named(name: &str) -> TypeAnnotation {
    TypeAnnotation::named(name)
}

fn non_null(name: &str) -> TypeAnnotation {
    TypeAnnotation::named(name).non_null()
}

fn list_of(name: &str) -> TypeAnnotation {
    TypeAnnotation::list(non_null(name))
}

fn include_deprecated_argument() -> InputValue {
    InputValue::new(named("Boolean")).with_default_value(false)
}

fn include_deprecated(args: &Arguments) -> bool {
    args.get("includeDeprecated")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// The named type a `__Type` node describes. `None` for wrapping types.
fn described_type<'s>(schema: &'s Schema, annot: &TypeAnnotation) -> Option<&'s GraphQLType> {
    match annot {
        TypeAnnotation::Named(named_annot) if named_annot.nullable() => {
            schema.get_type(named_annot.graphql_type_name())
        },
        _ => None,
    }
}

fn field_nodes<'f>(
    fields: impl IntoIterator<Item = (&'f String, &'f Field)>,
    include_deprecated: bool,
) -> Value {
    Value::List(
        fields
            .into_iter()
            .filter(|(_, field)| include_deprecated || !field.deprecation_state().is_deprecated())
            .map(|(name, field)| {
                IntrospectionNode::Field {
                    name: name.clone(),
                    field: field.clone(),
                }
                .into_value()
            })
            .collect(),
    )
}

fn input_value_nodes<'f>(
    input_values: impl IntoIterator<Item = (&'f String, &'f InputValue)>,
    include_deprecated: bool,
) -> Value {
    Value::List(
        input_values
            .into_iter()
            .filter(|(_, input_value)| {
                include_deprecated || !input_value.deprecation_state().is_deprecated()
            })
            .map(|(name, input_value)| {
                IntrospectionNode::InputValue {
                    name: name.clone(),
                    input_value: input_value.clone(),
                }
                .into_value()
            })
            .collect(),
    )
}

/// The types backing the `__schema` and `__type` meta-fields. Every schema
/// contains them.
pub(crate) fn introspection_types() -> Result<Vec<GraphQLType>, TypeBuildError> {
    Ok(vec![
        schema_type()?.into(),
        type_type()?.into(),
        field_type()?.into(),
        input_value_type()?.into(),
        enum_value_type()?.into(),
        directive_type()?.into(),
        type_kind_enum()?.into(),
        directive_location_enum()?.into(),
    ])
}

fn schema_type() -> Result<ObjectType, TypeBuildError> {
    ObjectType::builder("__Schema")
        .description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
            available types and directives on the server, as well as the entry points for \
            query, mutation, and subscription operations.",
        )
        .field(
            "description",
            Field::new(named("String")).with_resolver(|_, info, _| {
                Ok(info.schema.description().into())
            }),
        )
        .field(
            "types",
            Field::new(list_of("__Type").non_null())
                .with_description("A list of all types supported by this server.")
                .with_resolver(|_, info, _| {
                    Ok(Value::List(
                        info.schema
                            .types()
                            .keys()
                            .map(|name| IntrospectionNode::named_type(name))
                            .collect(),
                    ))
                }),
        )
        .field(
            "queryType",
            Field::new(non_null("__Type"))
                .with_description("The type that query operations will be rooted at.")
                .with_resolver(|_, info, _| {
                    Ok(IntrospectionNode::named_type(info.schema.query_type().name()))
                }),
        )
        .field(
            "mutationType",
            Field::new(named("__Type"))
                .with_description(
                    "If this server supports mutation, the type that mutation operations \
                    will be rooted at.",
                )
                .with_resolver(|_, info, _| {
                    Ok(info
                        .schema
                        .mutation_type()
                        .map(|t| IntrospectionNode::named_type(t.name()))
                        .unwrap_or_default())
                }),
        )
        .field(
            "subscriptionType",
            Field::new(named("__Type"))
                .with_description(
                    "If this server support subscription, the type that subscription \
                    operations will be rooted at.",
                )
                .with_resolver(|_, info, _| {
                    Ok(info
                        .schema
                        .subscription_type()
                        .map(|t| IntrospectionNode::named_type(t.name()))
                        .unwrap_or_default())
                }),
        )
        .field(
            "directives",
            Field::new(list_of("__Directive").non_null())
                .with_description("A list of all directives supported by this server.")
                .with_resolver(|_, info, _| {
                    Ok(Value::List(
                        info.schema
                            .directives()
                            .values()
                            .map(|directive| {
                                IntrospectionNode::Directive(Arc::clone(directive)).into_value()
                            })
                            .collect(),
                    ))
                }),
        )
        .build()
}

fn type_type() -> Result<ObjectType, TypeBuildError> {
    ObjectType::builder("__Type")
        .description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
            types in GraphQL as represented by the `__TypeKind` enum.",
        )
        .field(
            "kind",
            Field::new(non_null("__TypeKind")).with_resolver(node_resolver(
                |node, info, _| {
                    let IntrospectionNode::Type(annot) = node else {
                        return Ok(Value::Null);
                    };
                    let kind = match annot {
                        annot if !annot.nullable() => Some(GraphQLTypeKind::NonNull),
                        TypeAnnotation::List(_) => Some(GraphQLTypeKind::List),
                        TypeAnnotation::Named(_) => {
                            described_type(info.schema, annot).map(GraphQLType::kind)
                        },
                    };
                    Ok(kind.map(|kind| kind.as_str()).into())
                },
            )),
        )
        .field(
            "name",
            Field::new(named("String")).with_resolver(node_resolver(|node, info, _| {
                let IntrospectionNode::Type(annot) = node else {
                    return Ok(Value::Null);
                };
                Ok(described_type(info.schema, annot).map(GraphQLType::name).into())
            })),
        )
        .field(
            "description",
            Field::new(named("String")).with_resolver(node_resolver(|node, info, _| {
                let IntrospectionNode::Type(annot) = node else {
                    return Ok(Value::Null);
                };
                Ok(described_type(info.schema, annot)
                    .and_then(GraphQLType::description)
                    .into())
            })),
        )
        .field(
            "specifiedByURL",
            Field::new(named("String")).with_resolver(node_resolver(|node, info, _| {
                let IntrospectionNode::Type(annot) = node else {
                    return Ok(Value::Null);
                };
                Ok(described_type(info.schema, annot)
                    .and_then(GraphQLType::as_scalar)
                    .and_then(|scalar_type| scalar_type.specified_by_url())
                    .into())
            })),
        )
        .field(
            "fields",
            Field::new(list_of("__Field"))
                .with_argument("includeDeprecated", include_deprecated_argument())
                .with_resolver(node_resolver(|node, info, args| {
                    let IntrospectionNode::Type(annot) = node else {
                        return Ok(Value::Null);
                    };
                    Ok(described_type(info.schema, annot)
                        .and_then(GraphQLType::fields)
                        .map(|fields| field_nodes(fields, include_deprecated(args)))
                        .unwrap_or_default())
                })),
        )
        .field(
            "interfaces",
            Field::new(list_of("__Type")).with_resolver(node_resolver(|node, info, _| {
                let IntrospectionNode::Type(annot) = node else {
                    return Ok(Value::Null);
                };
                Ok(match described_type(info.schema, annot) {
                    Some(t @ (GraphQLType::Object(_) | GraphQLType::Interface(_))) => Value::List(
                        t.interface_names()
                            .into_iter()
                            .map(IntrospectionNode::named_type)
                            .collect(),
                    ),
                    _ => Value::Null,
                })
            })),
        )
        .field(
            "possibleTypes",
            Field::new(list_of("__Type")).with_resolver(node_resolver(|node, info, _| {
                let IntrospectionNode::Type(annot) = node else {
                    return Ok(Value::Null);
                };
                Ok(match described_type(info.schema, annot) {
                    Some(t) if t.is_abstract() => Value::List(
                        info.schema
                            .get_possible_types(t.name())
                            .iter()
                            .map(|object_type| IntrospectionNode::named_type(object_type.name()))
                            .collect(),
                    ),
                    _ => Value::Null,
                })
            })),
        )
        .field(
            "enumValues",
            Field::new(list_of("__EnumValue"))
                .with_argument("includeDeprecated", include_deprecated_argument())
                .with_resolver(node_resolver(|node, info, args| {
                    let IntrospectionNode::Type(annot) = node else {
                        return Ok(Value::Null);
                    };
                    let Some(enum_type) =
                        described_type(info.schema, annot).and_then(GraphQLType::as_enum)
                    else {
                        return Ok(Value::Null);
                    };
                    let include_deprecated = include_deprecated(args);
                    Ok(Value::List(
                        enum_type
                            .values()
                            .iter()
                            .filter(|(_, enum_value)| {
                                include_deprecated
                                    || !enum_value.deprecation_state().is_deprecated()
                            })
                            .map(|(name, enum_value)| {
                                IntrospectionNode::EnumValue {
                                    name: name.clone(),
                                    enum_value: enum_value.clone(),
                                }
                                .into_value()
                            })
                            .collect(),
                    ))
                })),
        )
        .field(
            "inputFields",
            Field::new(list_of("__InputValue"))
                .with_argument("includeDeprecated", include_deprecated_argument())
                .with_resolver(node_resolver(|node, info, args| {
                    let IntrospectionNode::Type(annot) = node else {
                        return Ok(Value::Null);
                    };
                    Ok(described_type(info.schema, annot)
                        .and_then(GraphQLType::as_input_object)
                        .map(|input_type| {
                            input_value_nodes(input_type.fields(), include_deprecated(args))
                        })
                        .unwrap_or_default())
                })),
        )
        .field(
            "ofType",
            Field::new(named("__Type")).with_resolver(node_resolver(|node, _, _| {
                let IntrospectionNode::Type(annot) = node else {
                    return Ok(Value::Null);
                };
                let of_type = match annot {
                    annot if !annot.nullable() => Some(annot.to_nullable()),
                    TypeAnnotation::List(list_annot) => {
                        Some(list_annot.inner_type_annotation().clone())
                    },
                    TypeAnnotation::Named(_) => None,
                };
                Ok(of_type
                    .map(|of_type| IntrospectionNode::Type(of_type).into_value())
                    .unwrap_or_default())
            })),
        )
        .build()
}

fn field_type() -> Result<ObjectType, TypeBuildError> {
    ObjectType::builder("__Field")
        .description(
            "Object and Interface types are described by a list of Fields, each of which has \
            a name, potentially a list of arguments, and a return type.",
        )
        .field("name", Field::new(non_null("String")))
        .field("description", Field::new(named("String")))
        .field(
            "args",
            Field::new(list_of("__InputValue").non_null())
                .with_argument("includeDeprecated", include_deprecated_argument())
                .with_resolver(node_resolver(|node, _, args| {
                    let IntrospectionNode::Field { field, .. } = node else {
                        return Ok(Value::Null);
                    };
                    Ok(input_value_nodes(field.arguments(), include_deprecated(args)))
                })),
        )
        .field(
            "type",
            Field::new(non_null("__Type")).with_resolver(node_resolver(|node, _, _| {
                let IntrospectionNode::Field { field, .. } = node else {
                    return Ok(Value::Null);
                };
                Ok(IntrospectionNode::Type(field.type_annotation().clone()).into_value())
            })),
        )
        .field("isDeprecated", Field::new(non_null("Boolean")))
        .field("deprecationReason", Field::new(named("String")))
        .build()
}

fn input_value_type() -> Result<ObjectType, TypeBuildError> {
    ObjectType::builder("__InputValue")
        .description(
            "Arguments provided to Fields or Directives and the input fields of an \
            InputObject are represented as Input Values which describe their type and \
            optionally a default value.",
        )
        .field("name", Field::new(non_null("String")))
        .field("description", Field::new(named("String")))
        .field(
            "type",
            Field::new(non_null("__Type")).with_resolver(node_resolver(|node, _, _| {
                let IntrospectionNode::InputValue { input_value, .. } = node else {
                    return Ok(Value::Null);
                };
                Ok(IntrospectionNode::Type(input_value.type_annotation().clone()).into_value())
            })),
        )
        .field(
            "defaultValue",
            Field::new(named("String"))
                .with_description(
                    "A GraphQL-formatted string representing the default value for this \
                    input value.",
                )
                .with_resolver(node_resolver(|node, info, _| {
                    let IntrospectionNode::InputValue { input_value, .. } = node else {
                        return Ok(Value::Null);
                    };
                    Ok(input_value
                        .default_value()
                        .and_then(|value| {
                            ast_from_value(info.schema, value, input_value.type_annotation())
                        })
                        .map(|literal| print_value(&literal))
                        .into())
                })),
        )
        .field("isDeprecated", Field::new(non_null("Boolean")))
        .field("deprecationReason", Field::new(named("String")))
        .build()
}

fn enum_value_type() -> Result<ObjectType, TypeBuildError> {
    ObjectType::builder("__EnumValue")
        .description(
            "One possible value for a given Enum. Enum values are unique values, not a \
            placeholder for a string or numeric value. However an Enum value is returned in \
            a JSON response as a string.",
        )
        .field("name", Field::new(non_null("String")))
        .field("description", Field::new(named("String")))
        .field("isDeprecated", Field::new(non_null("Boolean")))
        .field("deprecationReason", Field::new(named("String")))
        .build()
}

fn directive_type() -> Result<ObjectType, TypeBuildError> {
    ObjectType::builder("__Directive")
        .description(
            "A Directive provides a way to describe alternate runtime execution and type \
            validation behavior in a GraphQL document.",
        )
        .field("name", Field::new(non_null("String")))
        .field("description", Field::new(named("String")))
        .field("isRepeatable", Field::new(non_null("Boolean")))
        .field(
            "locations",
            Field::new(list_of("__DirectiveLocation").non_null()),
        )
        .field(
            "args",
            Field::new(list_of("__InputValue").non_null())
                .with_argument("includeDeprecated", include_deprecated_argument())
                .with_resolver(node_resolver(|node, _, args| {
                    let IntrospectionNode::Directive(directive) = node else {
                        return Ok(Value::Null);
                    };
                    Ok(input_value_nodes(directive.arguments(), include_deprecated(args)))
                })),
        )
        .build()
}

fn type_kind_enum() -> Result<EnumType, TypeBuildError> {
    GraphQLTypeKind::ALL
        .iter()
        .fold(
            EnumType::builder("__TypeKind")
                .description("An enum describing what kind of type a given `__Type` is."),
            |builder, kind| builder.value(kind.as_str()),
        )
        .build()
}

fn directive_location_enum() -> Result<EnumType, TypeBuildError> {
    DirectiveLocation::ALL
        .iter()
        .fold(
            EnumType::builder("__DirectiveLocation").description(
                "A Directive can be adjacent to many parts of the GraphQL language, a \
                __DirectiveLocation describes one such possible adjacencies.",
            ),
            |builder, location| {
                builder.value_with(location.as_str(), EnumValue::new(location.as_str()))
            },
        )
        .build()
}

/// The `__schema`, `__type` and `__typename` fields.
pub(crate) fn meta_fields() -> MetaFields {
    MetaFields {
        schema: Field::new(non_null("__Schema"))
            .with_description("Access the current type schema of this server.")
            .with_resolver(|_, _, _| Ok(IntrospectionNode::Schema.into_value())),
        type_: Field::new(named("__Type"))
            .with_description("Request the type information of a single type.")
            .with_argument("name", InputValue::new(non_null("String")))
            .with_resolver(|_, info, args| {
                let type_name = args.get("name").and_then(Value::as_str);
                Ok(type_name
                    .and_then(|type_name| info.schema.get_type(type_name))
                    .map(|t| IntrospectionNode::named_type(t.name()))
                    .unwrap_or_default())
            }),
        typename: Field::new(non_null("String"))
            .with_description("The name of the current Object type at runtime.")
            .with_resolver(|_, info, _| Ok(info.parent_type.name().into())),
    }
}
