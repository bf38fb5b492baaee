use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// How a note is rendered (`= note:`, `= help:` or `= spec:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context, e.g. "opening `{` here".
    General,

    /// An actionable suggestion for fixing the error.
    Help,

    /// A link into the GraphQL specification.
    Spec,
}

impl GraphQLErrorNoteKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
            GraphQLErrorNoteKind::Spec => "spec",
        }
    }
}

/// A note attached to a lexer or parser error.
///
/// When `span` is present the note is rendered with a snippet pointing at the
/// related location (for example where an unclosed delimiter was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }
}

/// Most errors carry 0-2 notes, so they live inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
