use crate::ast::OperationType;
use crate::introspection;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::TypeBuildError;
use crate::types::UnionTypeValidator;
use crate::types::built_in_scalars;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Assembles and validates a [`Schema`].
///
/// Types reference each other by name, so every named type a schema uses
/// must be handed to the builder: the root types through
/// [`SchemaBuilder::query`] and friends, everything else through
/// [`SchemaBuilder::add_type`]. The built-in scalars and the introspection
/// types are added automatically.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    description: Option<String>,
    query_type: Option<Arc<ObjectType>>,
    mutation_type: Option<Arc<ObjectType>>,
    subscription_type: Option<Arc<ObjectType>>,
    types: Vec<GraphQLType>,
    directives: Vec<DirectiveDefinition>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn query(mut self, query_type: impl Into<Arc<ObjectType>>) -> Self {
        self.query_type = Some(query_type.into());
        self
    }

    pub fn mutation(mut self, mutation_type: impl Into<Arc<ObjectType>>) -> Self {
        self.mutation_type = Some(mutation_type.into());
        self
    }

    pub fn subscription(mut self, subscription_type: impl Into<Arc<ObjectType>>) -> Self {
        self.subscription_type = Some(subscription_type.into());
        self
    }

    /// Adds a named type. A type named after a built-in scalar replaces
    /// that scalar.
    pub fn add_type(mut self, type_: impl Into<GraphQLType>) -> Self {
        self.types.push(type_.into());
        self
    }

    pub fn add_types<T: Into<GraphQLType>>(mut self, types: impl IntoIterator<Item = T>) -> Self {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Adds a custom directive. `@skip`, `@include`, `@deprecated` and
    /// `@specifiedBy` are always present.
    pub fn add_directive(mut self, directive: DirectiveDefinition) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn build(self) -> Result<Schema> {
        let query_type = self.query_type.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        check_unique_root_types(
            &query_type,
            self.mutation_type.as_ref(),
            self.subscription_type.as_ref(),
        )?;

        let mut types = IndexMap::<String, GraphQLType>::new();
        let roots = [Some(&query_type), self.mutation_type.as_ref(), self.subscription_type.as_ref()];
        for root_type in roots.into_iter().flatten() {
            insert_user_type(&mut types, GraphQLType::Object(Arc::clone(root_type)))?;
        }
        for type_ in self.types {
            insert_user_type(&mut types, type_)?;
        }
        for type_ in introspection::introspection_types()? {
            types.insert(type_.name().to_string(), type_);
        }

        let directives = build_directives(self.directives)?;

        // Forces every field thunk, so that executions never do.
        for type_ in types.values() {
            match type_ {
                GraphQLType::Object(t) => {
                    t.fields();
                },
                GraphQLType::Interface(t) => {
                    t.fields();
                },
                GraphQLType::InputObject(t) => {
                    t.fields();
                },
                _ => (),
            }
        }

        add_referenced_built_in_scalars(&mut types, &directives);

        let mut errors = vec![];
        for type_ in types.values() {
            errors.append(&mut match type_ {
                GraphQLType::Object(t) => {
                    ObjectOrInterfaceTypeValidator::new(GraphQLTypeKind::Object, &t.data, &types)
                        .validate()
                },
                GraphQLType::Interface(t) => {
                    ObjectOrInterfaceTypeValidator::new(GraphQLTypeKind::Interface, &t.data, &types)
                        .validate()
                },
                GraphQLType::Union(t) => UnionTypeValidator::new(t, &types).validate(),
                GraphQLType::InputObject(t) => InputObjectTypeValidator::new(t, &types).validate(),
                GraphQLType::Enum(_) | GraphQLType::Scalar(_) => vec![],
            });
        }
        errors.append(&mut validate_directive_arguments(&directives, &types));

        let possible_types = collect_possible_types(&types);
        errors.append(&mut validate_abstract_type_resolution(&types, &possible_types));

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        log::debug!(
            "built schema with {} types and {} directives (query: `{}`, mutation: {:?}, subscription: {:?})",
            types.len(),
            directives.len(),
            query_type.name(),
            self.mutation_type.as_ref().map(|t| t.name()),
            self.subscription_type.as_ref().map(|t| t.name()),
        );

        Ok(Schema {
            description: self.description,
            query_type,
            mutation_type: self.mutation_type,
            subscription_type: self.subscription_type,
            types,
            directives,
            possible_types,
            meta_fields: introspection::meta_fields(),
        })
    }
}

fn check_unique_root_types(
    query_type: &Arc<ObjectType>,
    mutation_type: Option<&Arc<ObjectType>>,
    subscription_type: Option<&Arc<ObjectType>>,
) -> Result<()> {
    let roots = [
        (OperationType::Query, Some(query_type)),
        (OperationType::Mutation, mutation_type),
        (OperationType::Subscription, subscription_type),
    ];
    for (i, (operation1, type1)) in roots.iter().enumerate() {
        let Some(type1) = type1 else { continue };
        for (operation2, type2) in &roots[i + 1..] {
            if let Some(type2) = type2
                && type1.name() == type2.name()
            {
                return Err(SchemaBuildError::NonUniqueOperationTypes {
                    reused_type_name: type1.name().to_string(),
                    operation1: *operation1,
                    operation2: *operation2,
                });
            }
        }
    }
    Ok(())
}

fn insert_user_type(types: &mut IndexMap<String, GraphQLType>, type_: GraphQLType) -> Result<()> {
    let type_name = type_.name().to_string();
    if type_name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name });
    }
    match types.get(&type_name) {
        // The same definition handed over twice (e.g. as a root and as an
        // extra type) is fine.
        Some(existing) if existing == &type_ => Ok(()),
        Some(_) => Err(SchemaBuildError::DuplicateTypeDefinition { type_name }),
        None => {
            types.insert(type_name, type_);
            Ok(())
        },
    }
}

fn build_directives(
    custom_directives: Vec<DirectiveDefinition>,
) -> Result<IndexMap<String, Arc<DirectiveDefinition>>> {
    let mut directives = IndexMap::new();
    for directive in [
        DirectiveDefinition::include(),
        DirectiveDefinition::skip(),
        DirectiveDefinition::deprecated(),
        DirectiveDefinition::specified_by(),
    ] {
        directives.insert(directive.name().to_string(), Arc::new(directive));
    }
    for directive in custom_directives {
        let directive_name = directive.name().to_string();
        if directive.is_built_in() {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name });
        }
        if directive_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName { directive_name });
        }
        if directives.contains_key(&directive_name) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name });
        }
        directives.insert(directive_name, Arc::new(directive));
    }
    Ok(directives)
}

/// Every type name mentioned by a field, argument, input field or
/// directive argument.
fn referenced_type_names<'a>(
    types: &'a IndexMap<String, GraphQLType>,
    directives: &'a IndexMap<String, Arc<DirectiveDefinition>>,
) -> Vec<&'a str> {
    let mut names = vec![];
    let mut push = |annot: &'a TypeAnnotation| names.push(annot.innermost_type_name());
    for type_ in types.values() {
        match type_ {
            GraphQLType::Object(_) | GraphQLType::Interface(_) => {
                for field in type_.fields().into_iter().flat_map(|fields| fields.values()) {
                    push(field.type_annotation());
                    for argument in field.arguments().values() {
                        push(argument.type_annotation());
                    }
                }
            },
            GraphQLType::InputObject(t) => {
                for field in t.fields().values() {
                    push(field.type_annotation());
                }
            },
            _ => (),
        }
    }
    for directive in directives.values() {
        for argument in directive.arguments().values() {
            push(argument.type_annotation());
        }
    }
    names
}

fn add_referenced_built_in_scalars(
    types: &mut IndexMap<String, GraphQLType>,
    directives: &IndexMap<String, Arc<DirectiveDefinition>>,
) {
    let missing = referenced_type_names(types, directives)
        .into_iter()
        .filter(|name| !types.contains_key(*name))
        .filter_map(built_in_scalars::built_in_scalar)
        .collect::<Vec<_>>();
    for scalar in missing {
        if !types.contains_key(scalar.name()) {
            types.insert(scalar.name().to_string(), scalar.into());
        }
    }
}

fn validate_directive_arguments(
    directives: &IndexMap<String, Arc<DirectiveDefinition>>,
    types: &IndexMap<String, GraphQLType>,
) -> Vec<TypeValidationError> {
    let mut errors = vec![];
    for directive in directives.values() {
        for (argument_name, argument) in directive.arguments() {
            let type_name = argument.type_annotation().innermost_type_name();
            match types.get(type_name) {
                Some(type_) if !type_.is_input_type() => {
                    errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                        parameter_name: argument_name.to_string(),
                        outputonly_type_name: type_name.to_string(),
                    });
                },
                Some(_) => (),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    undefined_type_name: type_name.to_string(),
                }),
            }
        }
    }
    errors
}

/// Maps each interface to the object types implementing it and each union
/// to its object members, in type-definition order.
fn collect_possible_types(
    types: &IndexMap<String, GraphQLType>,
) -> HashMap<String, Vec<Arc<ObjectType>>> {
    let mut possible_types = HashMap::<String, Vec<Arc<ObjectType>>>::new();
    for type_ in types.values() {
        match type_ {
            GraphQLType::Interface(iface) => {
                let implementations = types
                    .values()
                    .filter_map(GraphQLType::as_object)
                    .filter(|object_type| object_type.implements(iface.name()))
                    .cloned()
                    .collect();
                possible_types.insert(iface.name().to_string(), implementations);
            },
            GraphQLType::Union(union_type) => {
                let members = union_type
                    .member_names()
                    .into_iter()
                    .filter_map(|name| types.get(name).and_then(GraphQLType::as_object))
                    .cloned()
                    .collect();
                possible_types.insert(union_type.name().to_string(), members);
            },
            _ => (),
        }
    }
    possible_types
}

/// An abstract type without `resolve_type` can only be resolved if each
/// of its possible types provides `is_type_of`.
fn validate_abstract_type_resolution(
    types: &IndexMap<String, GraphQLType>,
    possible_types: &HashMap<String, Vec<Arc<ObjectType>>>,
) -> Vec<TypeValidationError> {
    let mut errors = vec![];
    for type_ in types.values() {
        let (has_resolve_type, is_union) = match type_ {
            GraphQLType::Interface(t) => (t.has_resolve_type(), false),
            GraphQLType::Union(t) => (t.has_resolve_type(), true),
            _ => continue,
        };
        if has_resolve_type {
            continue;
        }
        for object_type in possible_types.get(type_.name()).into_iter().flatten() {
            if !object_type.has_is_type_of() {
                errors.push(TypeValidationError::AbstractTypeNotResolvable {
                    abstract_type_name: type_.name().to_string(),
                    is_union,
                    object_type_name: object_type.name().to_string(),
                });
            }
        }
    }
    errors
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Multiple directives named `@{directive_name}` were defined")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Custom directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        directive_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operations are defined with \
        the same GraphQL type (`{reused_type_name}`), but this is not allowed \
        in GraphQL. All root operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationType,
        operation2: OperationType,
    },

    #[error("Attempted to redefine the built-in `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
    },

    #[error(transparent)]
    TypeBuildError(#[from] TypeBuildError),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
