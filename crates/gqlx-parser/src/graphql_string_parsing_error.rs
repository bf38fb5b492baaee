/// Error returned when cooking a raw GraphQL string literal fails.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// The string was not properly terminated.
    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,

    /// An invalid Unicode escape (bad hex digits, a lone surrogate, or a
    /// code point outside the Unicode range).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
