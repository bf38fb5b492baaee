use crate::GraphQLError;

/// The outcome of executing an operation: `{ data, errors }`.
///
/// `data` is `None` when execution never started (no operation could be
/// selected, or the variables failed to coerce) and `Some(Null)` when a
/// non-null violation reached the root. `errors` is omitted from the
/// serialized form when empty.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExecutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}
impl ExecutionResult {
    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self { data: None, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The errors ordered by `(line, column, path)`.
    ///
    /// Errors are recorded in completion order; this gives a stable order
    /// for comparisons.
    pub fn sorted_errors(&self) -> Vec<&GraphQLError> {
        let mut errors = self.errors.iter().collect::<Vec<_>>();
        errors.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        errors
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut response = serde_json::Map::new();
        if let Some(data) = &self.data {
            response.insert("data".to_string(), data.clone());
        }
        if !self.errors.is_empty() {
            let errors = self
                .errors
                .iter()
                .map(|error| serde_json::to_value(error).unwrap_or_default())
                .collect();
            response.insert("errors".to_string(), serde_json::Value::Array(errors));
        }
        serde_json::Value::Object(response)
    }
}
