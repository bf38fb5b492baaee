use crate::graphql;
use gqlx_core::ExecutionResult;
use gqlx_core::execution::ExecutionArgs;
use gqlx_core::schema::Schema;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

/// A GraphQL request as posted by clients:
/// `{"query": ..., "operationName": ..., "variables": {...}}`.
///
/// `operationName` and `variables` may be omitted or `null`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<JsonMap<String, JsonValue>>,
}
impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.variables
            .get_or_insert_with(JsonMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Runs this request through [`graphql()`](crate::graphql()).
    ///
    /// The request's operation name and variables replace any already set
    /// on `args`; its root value, context and resolvers are kept.
    pub fn execute(&self, schema: &Schema, mut args: ExecutionArgs) -> ExecutionResult {
        if let Some(operation_name) = &self.operation_name {
            args = args.operation_name(operation_name.as_str());
        }
        if let Some(variables) = &self.variables {
            args = args.variables_from_json(variables.clone());
        }
        graphql(schema, &self.query, args)
    }
}
