use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// An error raised by a resolver (or while completing its value).
///
/// The executor turns it into a located [`GraphQLError`](crate::GraphQLError)
/// carrying the field's path; `extensions` are passed through to the
/// response untouched.
///
/// ```
/// use gqlx_core::execution::FieldError;
///
/// fn parse_id(raw: &str) -> Result<u32, FieldError> {
///     raw.parse::<u32>().map_err(FieldError::from_error)
/// }
/// assert_eq!(parse_id("x").unwrap_err().message(), "invalid digit found in string");
/// ```
#[derive(Clone, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    message: String,
    extensions: Option<serde_json::Map<String, serde_json::Value>>,
    #[source]
    source: Option<Arc<dyn Error + Send + Sync>>,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: None,
            source: None,
        }
    }

    /// Wraps any error, keeping it as the source of the resulting response
    /// error.
    pub fn from_error<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self {
            message: error.to_string(),
            extensions: None,
            source: Some(Arc::new(error)),
        }
    }

    pub fn with_extensions(
        mut self,
        extensions: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn extensions(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.extensions.as_ref()
    }

    pub(crate) fn source_error(&self) -> Option<Arc<dyn Error + Send + Sync>> {
        self.source.clone()
    }
}
impl fmt::Debug for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldError")
            .field("message", &self.message)
            .field("extensions", &self.extensions)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}
impl PartialEq for FieldError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.extensions == other.extensions
    }
}
impl From<&str> for FieldError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
impl From<String> for FieldError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
