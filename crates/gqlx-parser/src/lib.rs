//! A GraphQL executable-document parser.
//!
//! Lexes and parses the October 2021 `ExecutableDocument` grammar
//! (operations, fragments, variables, directives and every literal form)
//! into an owned [`ast::Document`], collecting every syntax error of a
//! document in one pass. [`printer`] turns any AST node back into
//! canonical GraphQL text.
//!
//! ```
//! let doc = gqlx_parser::parse("{ hero { name } }").expect("valid document");
//! assert_eq!(gqlx_parser::printer::print_document(&doc), "{\n  hero {\n    name\n  }\n}");
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod parse_result;
pub mod printer;
mod reserved_name_context;
mod source;
mod source_position;
pub mod token;
pub mod token_source;
mod value_parsing_error;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parse_result::ParseResult;
pub use reserved_name_context::ReservedNameContext;
pub use source::Source;
pub use source::SourceLocation;
pub use source_position::SourcePosition;
pub use value_parsing_error::ValueParsingError;

/// Parses an executable document, failing with every syntax error found.
pub fn parse(source: &str) -> Result<ast::Document, Vec<GraphQLParseError>> {
    GraphQLParser::new(source).parse_executable_document().into()
}

/// Like [`parse`], but spans carry the file path of `source` (if any).
pub fn parse_source(source: &Source) -> Result<ast::Document, Vec<GraphQLParseError>> {
    GraphQLParser::from_source(source)
        .parse_executable_document()
        .into()
}

#[cfg(test)]
mod tests;
