use crate::token::GraphQLToken;

/// Marker trait for lexers: iterators that produce [`GraphQLToken`]s.
///
/// All lookahead and buffering is handled by
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream). Lexers are responsible
/// for:
/// - Skipping ignored tokens (whitespace, commas, comments)
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for lexical errors instead of stopping
/// - Emitting exactly one final
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
