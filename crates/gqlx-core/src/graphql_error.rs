use gqlx_parser::GraphQLParseError;
use gqlx_parser::ast;
use std::sync::Arc;

/// A 1-based line/column pair pointing into the request document.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}
impl ErrorLocation {
    pub fn of(loc: &ast::Location) -> Option<Self> {
        loc.source_location().map(|source_location| Self {
            line: source_location.line,
            column: source_location.column,
        })
    }
}

/// One step of a response path: a response key or a list index.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}
impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}
impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// An error as it appears in the `errors` list of a response.
///
/// https://spec.graphql.org/October2021/#sec-Errors
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Map<String, serde_json::Value>>,

    /// The error this one was raised for, if any.
    #[serde(skip)]
    #[source]
    pub original_error: Option<Arc<dyn std::error::Error + Send + Sync>>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
            extensions: None,
            original_error: None,
        }
    }

    /// Anchors the error at the given nodes' locations. Nodes without a
    /// location are skipped.
    pub fn at<'a>(mut self, locs: impl IntoIterator<Item = &'a ast::Location>) -> Self {
        self.locations.extend(locs.into_iter().filter_map(ErrorLocation::of));
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn from_parse_error(error: &GraphQLParseError) -> Self {
        let location = error.location();
        Self {
            locations: vec![ErrorLocation {
                line: location.line,
                column: location.column,
            }],
            ..Self::new(error.message())
        }
    }

    /// Orders errors by first location, then by path. Errors without a
    /// location sort first.
    pub(crate) fn sort_key(&self) -> (Option<ErrorLocation>, Option<&[PathSegment]>) {
        (self.locations.first().copied(), self.path.as_deref())
    }
}
impl PartialEq for GraphQLError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.locations == other.locations
            && self.path == other.path
            && self.extensions == other.extensions
    }
}
