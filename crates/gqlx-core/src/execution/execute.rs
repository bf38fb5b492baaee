use crate::Arguments;
use crate::ExecutionResult;
use crate::GraphQLError;
use crate::Value;
use crate::ast;
use crate::ast::OperationType;
use crate::coercion::coerce_argument_values;
use crate::execution::ExecutionContext;
use crate::execution::FieldError;
use crate::execution::MiddlewareChain;
use crate::execution::ResolveInfo;
use crate::execution::Resolver;
use crate::execution::ResolverResult;
use crate::execution::ResponsePath;
use crate::execution::collect_fields::GroupedFields;
use crate::execution::collect_fields::collect_fields;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Everything an execution needs besides the schema and the document.
///
/// ```
/// use gqlx_core::Value;
/// use gqlx_core::execution::ExecutionArgs;
///
/// let args = ExecutionArgs::new()
///     .root_value(Value::map([("greeting", "hi")]))
///     .variable("first", 10)
///     .operation_name("Feed");
/// # let _ = args;
/// ```
#[derive(Clone, Default)]
pub struct ExecutionArgs {
    pub(crate) root_value: Value,
    pub(crate) context_value: Option<Arc<dyn Any + Send + Sync>>,
    pub(crate) variable_values: IndexMap<String, Value>,
    pub(crate) operation_name: Option<String>,
    pub(crate) field_resolver: Option<Resolver>,
    pub(crate) middleware: MiddlewareChain,
}
impl ExecutionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// The source value of the root type's fields.
    pub fn root_value(mut self, root_value: impl Into<Value>) -> Self {
        self.root_value = root_value.into();
        self
    }

    /// A value every resolver can reach through [`ResolveInfo::context`].
    pub fn context_value<T: Any + Send + Sync>(mut self, context_value: T) -> Self {
        self.context_value = Some(Arc::new(context_value));
        self
    }

    pub fn variable_values(mut self, variable_values: IndexMap<String, Value>) -> Self {
        self.variable_values = variable_values;
        self
    }

    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variable_values.insert(name.into(), value.into());
        self
    }

    /// Takes the variables from a JSON object, as found in a request body.
    pub fn variables_from_json(mut self, variables: JsonMap<String, JsonValue>) -> Self {
        self.variable_values = variables
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect();
        self
    }

    /// Selects the operation to run when the document has several.
    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// Replaces [`default_field_resolver`](crate::execution::default_field_resolver)
    /// for fields that have no resolver of their own.
    pub fn field_resolver<F>(mut self, field_resolver: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync + 'static,
    {
        self.field_resolver = Some(Arc::new(field_resolver));
        self
    }

    pub fn middleware(mut self, middleware: MiddlewareChain) -> Self {
        self.middleware = middleware;
        self
    }
}
impl fmt::Debug for ExecutionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionArgs")
            .field("root_value", &self.root_value)
            .field("has_context_value", &self.context_value.is_some())
            .field("variable_values", &self.variable_values)
            .field("operation_name", &self.operation_name)
            .field("has_field_resolver", &self.field_resolver.is_some())
            .field("middleware", &self.middleware)
            .finish()
    }
}

/// Executes an operation of `document` against `schema`.
///
/// The document is expected to have passed
/// [`validate`](crate::validation::validate); executing an invalid
/// document gives unspecified (but memory-safe) results.
///
/// Errors raised while resolving a field are recorded in the result and
/// null out the nearest nullable field or list item above them. Fields of
/// a query are all resolved before any of them is completed; the root
/// fields of a mutation are resolved and completed one after the other.
///
/// https://spec.graphql.org/October2021/#sec-Executing-Requests
pub fn execute(schema: &Schema, document: &ast::Document, args: ExecutionArgs) -> ExecutionResult {
    let ctx = match ExecutionContext::build(schema, document, &args) {
        Ok(ctx) => ctx,
        Err(errors) => return ExecutionResult::from_errors(errors),
    };
    log::debug!(
        "executing {} operation {:?}",
        ctx.operation.operation,
        ctx.operation.name(),
    );
    let data = execute_operation(&ctx);
    ExecutionResult {
        data: Some(data),
        errors: ctx.take_errors(),
    }
}

fn execute_operation(ctx: &ExecutionContext<'_>) -> JsonValue {
    let operation = ctx.operation;
    let Some(root_type) = ctx.schema.root_type(operation.operation) else {
        let message = match operation.operation {
            OperationType::Query => "Schema is not configured for queries.",
            OperationType::Mutation => "Schema is not configured for mutations.",
            OperationType::Subscription => "Schema is not configured for subscriptions.",
        };
        ctx.record_error(GraphQLError::new(message).at([&operation.loc]));
        return JsonValue::Null;
    };

    let mut fields = GroupedFields::new();
    collect_fields(
        ctx,
        root_type,
        &operation.selection_set,
        &mut fields,
        &mut HashSet::new(),
    );
    let serial = operation.operation == OperationType::Mutation;
    match execute_fields(ctx, root_type, ctx.root_value, &fields, None, serial) {
        Ok(data) => JsonValue::Object(data),
        Err(error) => {
            ctx.record_error(error);
            JsonValue::Null
        },
    }
}

/// Executes the grouped `fields` on `source`.
///
/// An `Err` is a non-null violation that the enclosing field or list item
/// has to absorb.
fn execute_fields<'a>(
    ctx: &ExecutionContext<'a>,
    parent_type: &ObjectType,
    source: &Value,
    fields: &GroupedFields<'a>,
    path: Option<&ResponsePath<'_>>,
    serial: bool,
) -> Result<JsonMap<String, JsonValue>, GraphQLError> {
    let paths = fields
        .keys()
        .map(|key| match path {
            Some(path) => path.with_key(key),
            None => ResponsePath::root(key),
        })
        .collect::<Vec<_>>();

    let mut data = JsonMap::new();
    if serial {
        for ((key, nodes), path) in fields.iter().zip(&paths) {
            let Some((info, result)) = resolve_field(ctx, parent_type, source, nodes, path)
            else {
                continue;
            };
            let completed = complete_field(ctx, info.return_type, nodes, &info, path, result)?;
            data.insert(key.to_string(), completed);
        }
    } else {
        let resolved = fields
            .iter()
            .zip(&paths)
            .filter_map(|((key, nodes), path)| {
                resolve_field(ctx, parent_type, source, nodes, path)
                    .map(|(info, result)| (*key, nodes, path, info, result))
            })
            .collect::<Vec<_>>();
        for (key, nodes, path, info, result) in resolved {
            let completed = complete_field(ctx, info.return_type, nodes, &info, path, result)?;
            data.insert(key.to_string(), completed);
        }
    }
    Ok(data)
}

/// Runs the field's resolver (through the middleware chain) on `source`.
///
/// Returns `None` for fields the parent type does not define. Resolver and
/// argument errors come back as [`Value::Error`].
fn resolve_field<'b>(
    ctx: &'b ExecutionContext<'_>,
    parent_type: &'b ObjectType,
    source: &Value,
    field_nodes: &'b [&'b ast::Field],
    path: &'b ResponsePath<'b>,
) -> Option<(ResolveInfo<'b>, Value)> {
    let field_node = field_nodes.first()?;
    let field_def = ctx
        .schema
        .field_definition(parent_type, field_node.name.as_str())?;
    let info = ctx.resolve_info(field_def, field_nodes, parent_type, path);
    log::trace!(
        "resolving {}.{} at {:?}",
        parent_type.name(),
        info.field_name,
        path.as_list(),
    );

    let result = match coerce_argument_values(
        ctx.schema,
        field_def.arguments(),
        &field_node.arguments,
        &ctx.variable_values,
    ) {
        Ok(args) => {
            let resolver = field_def.resolver().unwrap_or(&ctx.field_resolver);
            let outcome = if ctx.middleware.is_empty() {
                resolver(source, &info, &args)
            } else {
                ctx.middleware.resolve(resolver, source, &info, &args)
            };
            outcome.unwrap_or_else(Value::Error)
        },
        Err(error) => Value::Error(FieldError::from_error(error)),
    };
    Some((info, result))
}

/// Completes a field or list item, absorbing errors into `null` when
/// `return_type` is nullable.
fn complete_field<'a>(
    ctx: &ExecutionContext<'a>,
    return_type: &TypeAnnotation,
    field_nodes: &[&'a ast::Field],
    info: &ResolveInfo<'_>,
    path: &ResponsePath<'_>,
    result: Value,
) -> Result<JsonValue, GraphQLError> {
    match complete_value(ctx, return_type, field_nodes, info, path, result) {
        Ok(completed) => Ok(completed),
        Err(error) if return_type.nullable() => {
            ctx.record_error(error);
            Ok(JsonValue::Null)
        },
        Err(error) => Err(error),
    }
}

/// https://spec.graphql.org/October2021/#CompleteValue()
fn complete_value<'a>(
    ctx: &ExecutionContext<'a>,
    return_type: &TypeAnnotation,
    field_nodes: &[&'a ast::Field],
    info: &ResolveInfo<'_>,
    path: &ResponsePath<'_>,
    mut result: Value,
) -> Result<JsonValue, GraphQLError> {
    while let Value::Deferred(deferred) = &result {
        let settled = deferred.settle().unwrap_or_else(Value::Error);
        result = settled;
    }
    let field_error = |message: String| ctx.located_error(FieldError::new(message), field_nodes, path);
    if let Value::Error(error) = result {
        return Err(ctx.located_error(error, field_nodes, path));
    }

    if !return_type.nullable() {
        let completed = complete_value(
            ctx,
            &return_type.to_nullable(),
            field_nodes,
            info,
            path,
            result,
        )?;
        if completed.is_null() {
            return Err(field_error(format!(
                "Cannot return null for non-nullable field {}.{}.",
                info.parent_type.name(),
                info.field_name,
            )));
        }
        return Ok(completed);
    }

    if result.is_null() {
        return Ok(JsonValue::Null);
    }

    let named_annot = match return_type {
        TypeAnnotation::List(list_annot) => {
            let Value::List(items) = result else {
                return Err(field_error(format!(
                    "User Error: expected iterable, but did not find one for field {}.{}.",
                    info.parent_type.name(),
                    info.field_name,
                )));
            };
            let item_type = list_annot.inner_type_annotation();
            let mut completed = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                let item_path = path.with_index(index);
                completed.push(complete_field(
                    ctx,
                    item_type,
                    field_nodes,
                    info,
                    &item_path,
                    item,
                )?);
            }
            return Ok(JsonValue::Array(completed));
        },
        TypeAnnotation::Named(named_annot) => named_annot,
    };

    let type_name = named_annot.graphql_type_name();
    let Some(named_type) = ctx.schema.get_type(type_name) else {
        return Err(field_error(format!("Unknown type \"{type_name}\".")));
    };
    match named_type {
        GraphQLType::Scalar(scalar_type) => scalar_type
            .serialize(&result)
            .map_err(|error| ctx.located_error(FieldError::from_error(error), field_nodes, path)),
        GraphQLType::Enum(enum_type) => match enum_type.serialize(&result) {
            Some(value_name) => Ok(JsonValue::String(value_name.to_string())),
            None => Err(field_error(format!(
                "Enum \"{}\" cannot represent value: {result}",
                enum_type.name(),
            ))),
        },
        GraphQLType::Object(object_type) => {
            complete_object_value(ctx, object_type, field_nodes, info, path, result)
        },
        GraphQLType::Interface(_) | GraphQLType::Union(_) => {
            let runtime_type =
                resolve_runtime_type(ctx, named_type, field_nodes, info, path, &result)?;
            complete_object_value(ctx, runtime_type, field_nodes, info, path, result)
        },
        GraphQLType::InputObject(_) => Err(field_error(format!(
            "Input object type \"{type_name}\" cannot be used as an output type."
        ))),
    }
}

fn complete_object_value<'a>(
    ctx: &ExecutionContext<'a>,
    object_type: &ObjectType,
    field_nodes: &[&'a ast::Field],
    info: &ResolveInfo<'_>,
    path: &ResponsePath<'_>,
    result: Value,
) -> Result<JsonValue, GraphQLError> {
    if object_type.is_type_of(&result, info) == Some(false) {
        return Err(ctx.located_error(
            FieldError::new(format!(
                "Expected value of type \"{}\" but got: {result}.",
                object_type.name(),
            )),
            field_nodes,
            path,
        ));
    }
    let subfields = ctx.collect_subfields(object_type, field_nodes);
    execute_fields(ctx, object_type, &result, &subfields, Some(path), false)
        .map(JsonValue::Object)
}

/// Determines the object type of a value whose field returns an abstract
/// type.
fn resolve_runtime_type<'a>(
    ctx: &ExecutionContext<'a>,
    abstract_type: &GraphQLType,
    field_nodes: &[&'a ast::Field],
    info: &ResolveInfo<'_>,
    path: &ResponsePath<'_>,
    result: &Value,
) -> Result<&'a ObjectType, GraphQLError> {
    let abstract_name = abstract_type.name();
    let resolve_type = match abstract_type {
        GraphQLType::Interface(interface_type) => interface_type.resolve_type_fn(),
        GraphQLType::Union(union_type) => union_type.resolve_type_fn(),
        _ => None,
    };
    let runtime_name = match resolve_type {
        Some(resolve_type) => resolve_type(result, info),
        None => default_resolve_type(ctx, abstract_name, result, info),
    };
    let field_error = |message: String| ctx.located_error(FieldError::new(message), field_nodes, path);

    let Some(runtime_name) = runtime_name else {
        return Err(field_error(format!(
            "Abstract type {abstract_name} must resolve to an Object type at runtime for \
            field {}.{} with value {result}, received \"null\".",
            info.parent_type.name(),
            info.field_name,
        )));
    };
    let Some(GraphQLType::Object(runtime_type)) = ctx.schema.get_type(&runtime_name) else {
        return Err(field_error(format!(
            "Abstract type {abstract_name} must resolve to an Object type at runtime for \
            field {}.{} with value {result}, received \"{runtime_name}\".",
            info.parent_type.name(),
            info.field_name,
        )));
    };
    if !ctx.schema.is_possible_type(abstract_name, &runtime_name) {
        return Err(field_error(format!(
            "Runtime Object type \"{runtime_name}\" is not a possible type for \
            \"{abstract_name}\"."
        )));
    }
    Ok(runtime_type.as_ref())
}

/// Used when the abstract type has no `resolve_type` of its own: a
/// `__typename` entry or the object's own type name wins, then the first
/// possible type whose `is_type_of` accepts the value.
fn default_resolve_type(
    ctx: &ExecutionContext<'_>,
    abstract_name: &str,
    value: &Value,
    info: &ResolveInfo<'_>,
) -> Option<String> {
    if let Some(Value::String(type_name)) = value.get("__typename") {
        return Some(type_name);
    }
    if let Value::Object(object) = value
        && let Some(type_name) = object.type_name()
    {
        return Some(type_name.to_string());
    }
    ctx.schema
        .get_possible_types(abstract_name)
        .iter()
        .find(|possible_type| possible_type.is_type_of(value, info) == Some(true))
        .map(|possible_type| possible_type.name().to_string())
}
