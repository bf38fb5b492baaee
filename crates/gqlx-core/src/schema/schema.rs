use crate::ast::OperationType;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveDefinition;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// The `__typename`, `__schema` and `__type` fields, which are resolvable
/// without being declared on any type.
#[derive(Clone, Debug)]
pub(crate) struct MetaFields {
    pub schema: Field,
    pub type_: Field,
    pub typename: Field,
}

/// Represents a fully validated and immutable GraphQL schema.
///
/// A [`Schema`] is `Send + Sync` and is meant to be built once and shared
/// (e.g. behind an [`Arc`]) across any number of concurrent executions.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) description: Option<String>,
    pub(crate) query_type: Arc<ObjectType>,
    pub(crate) mutation_type: Option<Arc<ObjectType>>,
    pub(crate) subscription_type: Option<Arc<ObjectType>>,
    pub(crate) types: IndexMap<String, GraphQLType>,
    pub(crate) directives: IndexMap<String, Arc<DirectiveDefinition>>,
    pub(crate) possible_types: HashMap<String, Vec<Arc<ObjectType>>>,
    pub(crate) meta_fields: MetaFields,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The root type for query operations.
    pub fn query_type(&self) -> &Arc<ObjectType> {
        &self.query_type
    }

    pub fn mutation_type(&self) -> Option<&Arc<ObjectType>> {
        self.mutation_type.as_ref()
    }

    pub fn subscription_type(&self) -> Option<&Arc<ObjectType>> {
        self.subscription_type.as_ref()
    }

    /// The root type operations of the given kind execute against, if the
    /// schema defines one.
    pub fn root_type(&self, operation: OperationType) -> Option<&Arc<ObjectType>> {
        match operation {
            OperationType::Query => Some(&self.query_type),
            OperationType::Mutation => self.mutation_type.as_ref(),
            OperationType::Subscription => self.subscription_type.as_ref(),
        }
    }

    /// Every named type in this schema, including the built-in scalars it
    /// references and the introspection types.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Every directive this schema supports, built-ins included.
    pub fn directives(&self) -> &IndexMap<String, Arc<DirectiveDefinition>> {
        &self.directives
    }

    pub fn get_directive(&self, name: &str) -> Option<&Arc<DirectiveDefinition>> {
        self.directives.get(name)
    }

    /// The object types a value of the abstract type named
    /// `abstract_type_name` may have at runtime. Empty for non-abstract
    /// types.
    pub fn get_possible_types(&self, abstract_type_name: &str) -> &[Arc<ObjectType>] {
        self.possible_types
            .get(abstract_type_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_possible_type(&self, abstract_type_name: &str, object_type_name: &str) -> bool {
        self.get_possible_types(abstract_type_name)
            .iter()
            .any(|object_type| object_type.name() == object_type_name)
    }

    /// Looks up a field the way the executor does: `__typename` exists on
    /// every object type, `__schema` and `__type` exist on the query root,
    /// and everything else comes from the type's own fields.
    pub fn field_definition<'a>(
        &'a self,
        parent_type: &'a ObjectType,
        field_name: &str,
    ) -> Option<&'a Field> {
        match field_name {
            "__typename" => Some(&self.meta_fields.typename),
            "__schema" if parent_type.name() == self.query_type.name() => {
                Some(&self.meta_fields.schema)
            },
            "__type" if parent_type.name() == self.query_type.name() => {
                Some(&self.meta_fields.type_)
            },
            _ => parent_type.field(field_name),
        }
    }
}
