use crate::ReservedNameContext;
use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise; full human-readable messages
/// live in `GraphQLParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// query { user(id 1) }
    ///                 ^ expected `:`, found `1`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer produced an error token. Its message and notes are carried
    /// over to the enclosing `GraphQLParseError`.
    #[error("lexer error")]
    LexerError,

    /// A delimiter was opened but never closed.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A string literal could not be decoded.
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// A reserved name was used where it is not allowed.
    ///
    /// ```text
    /// fragment on on User { name }
    ///          ^^ fragment name cannot be `on`
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
        context: ReservedNameContext,
    },

    /// An object literal names the same field twice.
    ///
    /// ```text
    /// { f(arg: { a: 1, a: 2 }) }
    ///                  ^ duplicate input field `a`
    /// ```
    #[error("duplicate input field: `{name}`")]
    DuplicateInputField {
        name: String,
    },

    /// A construct that must not be empty (`()`, `{}`).
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// Catch-all; the specific problem is described by the message.
    #[error("invalid syntax")]
    InvalidSyntax,
}
