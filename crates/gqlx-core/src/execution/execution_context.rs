use crate::GraphQLError;
use crate::Value;
use crate::ast;
use crate::coercion::coerce_variable_values;
use crate::execution::ExecutionArgs;
use crate::execution::FieldError;
use crate::execution::MiddlewareChain;
use crate::execution::ResolveInfo;
use crate::execution::Resolver;
use crate::execution::ResponsePath;
use crate::execution::collect_fields::GroupedFields;
use crate::execution::collect_fields::collect_fields;
use crate::execution::default_field_resolver;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;

type SubfieldCacheKey = (String, Vec<usize>);

/// The state of a single execution: the selected operation, the coerced
/// variables and the errors recorded so far.
pub(crate) struct ExecutionContext<'a> {
    pub schema: &'a Schema,
    pub operation: &'a ast::OperationDefinition,
    pub fragments: HashMap<String, &'a ast::FragmentDefinition>,
    pub variable_values: IndexMap<String, Value>,
    pub root_value: &'a Value,
    pub context_value: Option<&'a (dyn Any + Send + Sync)>,
    pub field_resolver: Resolver,
    pub middleware: &'a MiddlewareChain,
    errors: RefCell<Vec<GraphQLError>>,
    subfield_cache: RefCell<HashMap<SubfieldCacheKey, Rc<GroupedFields<'a>>>>,
}
impl<'a> ExecutionContext<'a> {
    /// Selects the operation to run and coerces the request's variables.
    ///
    /// Failures here mean execution never starts; they are returned as the
    /// response's only errors.
    pub fn build(
        schema: &'a Schema,
        document: &'a ast::Document,
        args: &'a ExecutionArgs,
    ) -> Result<Self, Vec<GraphQLError>> {
        let operation = select_operation(document, args.operation_name.as_deref())?;
        let fragments = document
            .fragments()
            .map(|fragment| (fragment.name.as_str().to_string(), fragment))
            .collect();
        let variable_values = coerce_variable_values(
            schema,
            &operation.variable_definitions,
            &args.variable_values,
        )?;

        Ok(Self {
            schema,
            operation,
            fragments,
            variable_values,
            root_value: &args.root_value,
            context_value: args.context_value.as_deref(),
            field_resolver: args
                .field_resolver
                .clone()
                .unwrap_or_else(|| Arc::new(default_field_resolver)),
            middleware: &args.middleware,
            errors: RefCell::new(vec![]),
            subfield_cache: RefCell::new(HashMap::new()),
        })
    }

    pub fn resolve_info<'b>(
        &'b self,
        field_def: &'b Field,
        field_nodes: &'b [&'b ast::Field],
        parent_type: &'b ObjectType,
        path: &'b ResponsePath<'b>,
    ) -> ResolveInfo<'b> {
        ResolveInfo {
            field_name: field_nodes
                .first()
                .map(|node| node.name.as_str())
                .unwrap_or_default(),
            field_nodes,
            return_type: field_def.type_annotation(),
            parent_type,
            path,
            schema: self.schema,
            fragments: &self.fragments,
            root_value: self.root_value,
            operation: self.operation,
            variable_values: &self.variable_values,
            context_value: self.context_value,
        }
    }

    /// The fields selected on `runtime_type` by the selection sets of all
    /// `field_nodes`, merged in document order.
    ///
    /// The result only depends on the runtime type and the nodes, so it is
    /// computed once per pair and shared by every list item.
    pub fn collect_subfields(
        &self,
        runtime_type: &ObjectType,
        field_nodes: &[&'a ast::Field],
    ) -> Rc<GroupedFields<'a>> {
        let key = (
            runtime_type.name().to_string(),
            field_nodes
                .iter()
                .map(|node| *node as *const ast::Field as usize)
                .collect::<Vec<_>>(),
        );
        if let Some(cached) = self.subfield_cache.borrow().get(&key) {
            return Rc::clone(cached);
        }

        let mut subfields = GroupedFields::new();
        let mut visited_fragments = HashSet::new();
        for node in field_nodes {
            if let Some(selection_set) = &node.selection_set {
                collect_fields(
                    self,
                    runtime_type,
                    selection_set,
                    &mut subfields,
                    &mut visited_fragments,
                );
            }
        }
        let subfields = Rc::new(subfields);
        self.subfield_cache
            .borrow_mut()
            .insert(key, Rc::clone(&subfields));
        subfields
    }

    /// Turns a resolver error into a response error anchored at the field.
    pub fn located_error(
        &self,
        error: FieldError,
        field_nodes: &[&ast::Field],
        path: &ResponsePath<'_>,
    ) -> GraphQLError {
        let mut located = GraphQLError::new(error.message())
            .at(field_nodes.iter().map(|node| &node.loc))
            .with_path(path.as_list());
        located.extensions = error.extensions().cloned();
        located.original_error = error.source_error();
        located
    }

    pub fn record_error(&self, error: GraphQLError) {
        log::debug!("field error at {:?}: {}", error.path, error.message);
        self.errors.borrow_mut().push(error);
    }

    pub fn take_errors(&self) -> Vec<GraphQLError> {
        self.errors.take()
    }
}

/// https://spec.graphql.org/October2021/#GetOperation()
fn select_operation<'a>(
    document: &'a ast::Document,
    operation_name: Option<&str>,
) -> Result<&'a ast::OperationDefinition, Vec<GraphQLError>> {
    let mut selected = None;
    for operation in document.operations() {
        match operation_name {
            None if selected.is_some() => {
                return Err(vec![GraphQLError::new(
                    "Must provide operation name if query contains multiple operations.",
                )]);
            },
            None => selected = Some(operation),
            Some(name) if operation.name() == Some(name) => selected = Some(operation),
            Some(_) => (),
        }
    }
    selected.ok_or_else(|| {
        vec![GraphQLError::new(match operation_name {
            Some(name) => format!("Unknown operation named '{name}'."),
            None => "Must provide an operation.".to_string(),
        })]
    })
}
