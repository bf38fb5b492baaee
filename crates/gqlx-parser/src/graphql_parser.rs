//! Recursive descent parser for executable GraphQL documents.
//!
//! [`GraphQLParser`] works over any token source implementing
//! [`GraphQLTokenSource`] and produces an [`ast::Document`].
//!
//! # Error Recovery
//!
//! Every grammar rule has a `parse_*` method returning `Result<T, ()>`.
//! `Err(())` means an error has already been recorded; the caller either
//! propagates it or skips ahead to a recovery point. At the top level the
//! parser resumes at the next token that looks like the start of a
//! definition, so a single pass reports every independent syntax error.

use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::ParseResult;
use crate::ReservedNameContext;
use crate::Source;
use crate::SourcePosition;
use crate::ValueParsingError;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use smallvec::SmallVec;

// =============================================================================
// Delimiter tracking for error recovery
// =============================================================================

/// Context in which a delimiter was opened, for error messages.
#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    /// `{ field ... }` in operations/fragments
    SelectionSet,
    /// `(arg: value)` in field arguments
    FieldArguments,
    /// `@directive(arg: value)` in directive arguments
    DirectiveArguments,
    /// `($var: Type)` in operation variable definitions
    VariableDefinitions,
    /// `[Type]` in type annotations
    ListType,
    /// `[value, ...]` in list literals
    ListValue,
    /// `{ field: value }` in object literals
    ObjectValue,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::FieldArguments => "field arguments",
            DelimiterContext::DirectiveArguments => "directive arguments",
            DelimiterContext::VariableDefinitions => "variable definitions",
            DelimiterContext::ListType => "list type annotation",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
        }
    }
}

#[derive(Debug, Clone)]
struct OpenDelimiter {
    span: GraphQLSourceSpan,
    context: DelimiterContext,
}

/// Decided while peeking, acted on afterwards, so the peek borrow ends
/// before the token stream is advanced.
enum RecoveryAction {
    Stop,
    Skip,
    CheckKeyword(String),
}

/// Whether a value may reference variables.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    /// Field and operation-level directive arguments.
    AllowVariables,
    /// `$var: Type = <here>`
    VariableDefaultValue,
    /// Arguments of directives on variable definitions.
    DirectiveArgument,
}

impl ConstContext {
    fn allows_variables(&self) -> bool {
        matches!(self, ConstContext::AllowVariables)
    }

    fn description(&self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "this position",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::DirectiveArgument => "variable directive arguments",
        }
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for executable GraphQL documents.
///
/// ```
/// use gqlx_parser::GraphQLParser;
/// use gqlx_parser::ast;
///
/// let result = GraphQLParser::new("query Q { hello }").parse_executable_document();
/// let doc = result.valid_ast().expect("valid document");
/// assert!(matches!(doc.definitions[0], ast::Definition::Operation(_)));
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    errors: Vec<GraphQLParseError>,

    /// Open delimiters, innermost last. Real documents rarely nest more
    /// than a handful deep.
    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Shared depth counter for values, selection sets and type
    /// annotations.
    recursion_depth: usize,

    /// End of the most recently consumed token; anchors EOF errors and
    /// closes node spans.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over a string-like source.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }

    /// Creates a parser over a [`Source`], carrying its file path (if any)
    /// into every span.
    pub fn from_source(source: &'src Source) -> Self {
        let token_source = match source.file_path() {
            Some(path) => StrGraphQLTokenSource::with_file_path(source.body(), path),
            None => StrGraphQLTokenSource::new(source.body()),
        };
        Self::from_token_source(token_source)
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth for values, selection sets and type
    /// annotations.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            errors: Vec::new(),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    // =========================================================================
    // Error recording and recovery
    // =========================================================================

    fn record_error(&mut self, error: GraphQLParseError) {
        self.errors.push(error);
    }

    fn push_delimiter(&mut self, span: GraphQLSourceSpan, context: DelimiterContext) {
        self.delimiter_stack.push(OpenDelimiter { span, context });
    }

    fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Skips tokens until something that starts a definition: `{`, or a
    /// `query`/`mutation`/`subscription`/`fragment` keyword in a position
    /// where it reads as one.
    fn recover_to_next_definition(&mut self) {
        loop {
            let action = match self.token_stream.peek() {
                None => RecoveryAction::Stop,
                Some(token) => match &token.kind {
                    GraphQLTokenKind::Eof | GraphQLTokenKind::CurlyBraceOpen => {
                        RecoveryAction::Stop
                    },
                    GraphQLTokenKind::Name(name) => RecoveryAction::CheckKeyword(name.to_string()),
                    _ => RecoveryAction::Skip,
                },
            };

            match action {
                RecoveryAction::Stop => break,
                RecoveryAction::Skip => {
                    self.consume_token();
                },
                RecoveryAction::CheckKeyword(keyword) => {
                    if self.looks_like_definition_start(&keyword) {
                        break;
                    }
                    self.consume_token();
                },
            }
        }
        self.delimiter_stack.clear();
    }

    /// Peeks past `keyword` so that e.g. a field named `query` inside a
    /// broken selection set is not mistaken for a new operation.
    fn looks_like_definition_start(&mut self, keyword: &str) -> bool {
        let next = self.token_stream.peek_nth(1).map(|t| &t.kind);
        match keyword {
            "query" | "mutation" | "subscription" => {
                matches!(
                    next,
                    Some(
                        GraphQLTokenKind::Name(_)
                            | GraphQLTokenKind::True
                            | GraphQLTokenKind::False
                            | GraphQLTokenKind::Null
                            | GraphQLTokenKind::CurlyBraceOpen
                            | GraphQLTokenKind::ParenOpen
                            | GraphQLTokenKind::At
                    )
                ) || next.is_none()
            },
            "fragment" => match next {
                Some(GraphQLTokenKind::Name(n)) => n.as_ref() != "on",
                Some(GraphQLTokenKind::True | GraphQLTokenKind::False | GraphQLTokenKind::Null) => {
                    true
                },
                _ => false,
            },
            _ => false,
        }
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Consumes a token of `expected_kind` (payload ignored) or records an
    /// error.
    fn expect(&mut self, expected_kind: &GraphQLTokenKind) -> Result<GraphQLToken<'src>, ()> {
        let expected = Self::token_kind_display(expected_kind);
        let mismatch = match self.token_stream.peek() {
            None => Some((self.eof_span(), None)),
            Some(token) if Self::token_kinds_match(&token.kind, expected_kind) => None,
            Some(token) => Some((token.span.clone(), Some(token.kind.clone()))),
        };
        match mismatch {
            None => self.advance(),
            Some((span, found)) => {
                self.record_unexpected(&[expected.as_str()], span, found);
                Err(())
            },
        }
    }

    /// Records "expected X, found Y", or the lexer's own error if the
    /// offending token is an error token.
    fn record_unexpected(
        &mut self,
        expected: &[&str],
        span: GraphQLSourceSpan,
        found: Option<GraphQLTokenKind<'src>>,
    ) {
        let expected_desc = match expected {
            [single] => format!("`{single}`"),
            many => many
                .iter()
                .map(|e| format!("`{e}`"))
                .collect::<Vec<_>>()
                .join(" or "),
        };
        let expected_owned = expected.iter().map(|e| e.to_string()).collect();
        match found {
            None | Some(GraphQLTokenKind::Eof) => {
                self.record_error(GraphQLParseError::new(
                    format!("expected {expected_desc}, found end of input"),
                    span,
                    GraphQLParseErrorKind::UnexpectedEof {
                        expected: expected_owned,
                    },
                ));
            },
            Some(GraphQLTokenKind::Error {
                message,
                error_notes,
            }) => {
                self.consume_token();
                self.record_error(GraphQLParseError::from_lexer_error(
                    message,
                    span,
                    error_notes,
                ));
            },
            Some(kind) => {
                let found = Self::token_kind_display(&kind);
                self.record_error(GraphQLParseError::new(
                    format!("expected {expected_desc}, found `{found}`"),
                    span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: expected_owned,
                        found,
                    },
                ));
            },
        }
    }

    /// Records an unexpected-token error for whatever is next.
    fn record_unexpected_next(&mut self, expected: &[&str]) {
        let (span, found) = match self.token_stream.peek() {
            Some(token) => (token.span.clone(), Some(token.kind.clone())),
            None => (self.eof_span(), None),
        };
        self.record_unexpected(expected, span, found);
    }

    /// Expects a name. `true`, `false` and `null` are names everywhere but
    /// in value position, so they are accepted here.
    fn expect_name(&mut self) -> Result<ast::Name, ()> {
        let is_name = matches!(
            self.token_stream.peek().map(|t| &t.kind),
            Some(
                GraphQLTokenKind::Name(_)
                    | GraphQLTokenKind::True
                    | GraphQLTokenKind::False
                    | GraphQLTokenKind::Null
            )
        );
        if !is_name {
            self.record_unexpected_next(&["name"]);
            return Err(());
        }
        let token = self.advance()?;
        let value = match token.kind {
            GraphQLTokenKind::Name(name) => name.into_owned(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            _ => "null".to_string(),
        };
        Ok(ast::Name {
            value,
            loc: ast::Location::new(token.span),
        })
    }

    /// Expects a structural keyword. `true`/`false`/`null` never match.
    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLSourceSpan, ()> {
        if self.peek_is_keyword(keyword) {
            return self.advance().map(|token| token.span);
        }
        self.record_unexpected_next(&[keyword]);
        Err(())
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        match self.token_stream.peek() {
            Some(token) => matches!(&token.kind, GraphQLTokenKind::Name(name) if name == keyword),
            None => false,
        }
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        match self.token_stream.peek() {
            Some(token) => Self::token_kinds_match(&token.kind, kind),
            None => false,
        }
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn consume_token(&mut self) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
        }
        token
    }

    /// Consumes the next token, which the caller has already peeked at.
    fn advance(&mut self) -> Result<GraphQLToken<'src>, ()> {
        match self.consume_token() {
            Some(token) => Ok(token),
            None => {
                let span = self.eof_span();
                self.record_error(GraphQLParseError::new(
                    "unexpected end of input",
                    span,
                    GraphQLParseErrorKind::UnexpectedEof {
                        expected: Vec::new(),
                    },
                ));
                Err(())
            },
        }
    }

    fn eof_span(&self) -> GraphQLSourceSpan {
        match &self.last_end_position {
            Some(pos) => GraphQLSourceSpan::new(pos.clone(), pos.clone()),
            None => {
                let zero = SourcePosition::new(0, 0, Some(0), 0);
                GraphQLSourceSpan::new(zero.clone(), zero)
            },
        }
    }

    /// A span from the start of `start` to the end of the last consumed
    /// token.
    fn make_span(&self, start: GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.end_exclusive.clone());
        GraphQLSourceSpan {
            start_inclusive: start.start_inclusive,
            end_exclusive: end,
            file_path: start.file_path,
        }
    }

    fn make_loc(&self, start: GraphQLSourceSpan) -> ast::Location {
        ast::Location::new(self.make_span(start))
    }

    fn peek_span(&mut self) -> GraphQLSourceSpan {
        match self.token_stream.peek() {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        }
    }

    fn token_kind_display(kind: &GraphQLTokenKind) -> String {
        match kind {
            GraphQLTokenKind::StringValue(_) => "string".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => format!("tokenization error: {message}"),
            other => other.to_string(),
        }
    }

    /// Compares token kinds by variant, ignoring payloads.
    ///
    /// Exhaustive on `actual` so new variants must be considered here.
    fn token_kinds_match(actual: &GraphQLTokenKind, expected: &GraphQLTokenKind) -> bool {
        match actual {
            GraphQLTokenKind::Name(_) => matches!(expected, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::IntValue(_) => matches!(expected, GraphQLTokenKind::IntValue(_)),
            GraphQLTokenKind::FloatValue(_) => matches!(expected, GraphQLTokenKind::FloatValue(_)),
            GraphQLTokenKind::StringValue(_) => {
                matches!(expected, GraphQLTokenKind::StringValue(_))
            },
            GraphQLTokenKind::Error { .. } => matches!(expected, GraphQLTokenKind::Error { .. }),
            GraphQLTokenKind::Ampersand
            | GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof => actual == expected,
        }
    }

    /// Turns a lexer error token (if that is what's next) into a parse
    /// error. Returns `true` if it did.
    fn handle_lexer_error(&mut self) -> bool {
        let error = match self.token_stream.peek() {
            Some(GraphQLToken {
                kind: GraphQLTokenKind::Error {
                    message,
                    error_notes,
                },
                span,
            }) => GraphQLParseError::from_lexer_error(
                message.clone(),
                span.clone(),
                error_notes.clone(),
            ),
            _ => return false,
        };
        self.consume_token();
        self.record_error(error);
        true
    }

    fn enter_recursion(&mut self) -> Result<(), ()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            let span = self.peek_span();
            self.consume_token();
            self.record_error(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
            self.recursion_depth -= 1;
            return Err(());
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    fn unclosed_delimiter_error(&mut self, delimiter: &str) {
        let span = self.eof_span();
        let open_delim = self.pop_delimiter();
        let mut error = GraphQLParseError::new(
            format!("unclosed `{delimiter}`"),
            span,
            GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            },
        );
        if let Some(delim) = open_delim {
            error.add_note_with_span(
                format!("opening `{delimiter}` in {} here", delim.context.description()),
                delim.span,
            );
        }
        self.record_error(error);
    }

    fn empty_construct_error(&mut self, construct: &str, message: &str, span: GraphQLSourceSpan) {
        self.record_error(GraphQLParseError::new(
            message,
            span,
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        ));
    }

    // =========================================================================
    // Value parsing
    // =========================================================================

    fn parse_value(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        let kind = match self.token_stream.peek() {
            Some(token) => token.kind.clone(),
            None => GraphQLTokenKind::Eof,
        };
        match kind {
            GraphQLTokenKind::Dollar => {
                let variable = self.parse_variable()?;
                if context.allows_variables() {
                    return Ok(ast::Value::Variable(variable));
                }
                let span = match variable.loc.span() {
                    Some(span) => span.clone(),
                    None => self.eof_span(),
                };
                self.record_error(GraphQLParseError::new(
                    format!("variables are not allowed in {}", context.description()),
                    span,
                    GraphQLParseErrorKind::InvalidSyntax,
                ));
                Err(())
            },

            GraphQLTokenKind::IntValue(raw) => {
                let token = self.advance()?;
                Ok(ast::Value::Int(ast::IntValue {
                    raw: raw.into_owned(),
                    loc: ast::Location::new(token.span),
                }))
            },

            GraphQLTokenKind::FloatValue(raw) => {
                let token = self.advance()?;
                Ok(ast::Value::Float(ast::FloatValue {
                    raw: raw.into_owned(),
                    loc: ast::Location::new(token.span),
                }))
            },

            GraphQLTokenKind::StringValue(_) => {
                let token = self.advance()?;
                let block = token.kind.is_block_string();
                match token.kind.parse_string_value() {
                    Some(Ok(value)) => Ok(ast::Value::String(ast::StringValue {
                        value,
                        block,
                        loc: ast::Location::new(token.span),
                    })),
                    Some(Err(e)) => {
                        self.record_error(GraphQLParseError::new(
                            format!("invalid string: {e}"),
                            token.span,
                            GraphQLParseErrorKind::InvalidValue(ValueParsingError::String(e)),
                        ));
                        Err(())
                    },
                    None => Err(()),
                }
            },

            GraphQLTokenKind::True | GraphQLTokenKind::False => {
                let token = self.advance()?;
                Ok(ast::Value::Boolean(ast::BooleanValue {
                    value: matches!(token.kind, GraphQLTokenKind::True),
                    loc: ast::Location::new(token.span),
                }))
            },

            GraphQLTokenKind::Null => {
                let token = self.advance()?;
                Ok(ast::Value::Null(ast::NullValue {
                    loc: ast::Location::new(token.span),
                }))
            },

            GraphQLTokenKind::SquareBracketOpen => self.parse_list_value(context),

            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(context),

            GraphQLTokenKind::Name(name) => {
                let token = self.advance()?;
                Ok(ast::Value::Enum(ast::EnumValue {
                    value: name.into_owned(),
                    loc: ast::Location::new(token.span),
                }))
            },

            _ => {
                self.record_unexpected_next(&["value"]);
                Err(())
            },
        }
    }

    /// `$name`
    fn parse_variable(&mut self) -> Result<ast::Variable, ()> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_name()?;
        Ok(ast::Variable {
            name,
            loc: self.make_loc(dollar.span),
        })
    }

    /// `[value, value, ...]`
    fn parse_list_value(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        let open_token = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::ListValue);

        let mut values = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::SquareBracketClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.unclosed_delimiter_error("[");
                return Err(());
            }
            let depth = self.delimiter_stack.len();
            match self.parse_value(context) {
                Ok(value) => values.push(value),
                Err(()) => {
                    self.delimiter_stack.truncate(depth);
                    self.skip_to_list_recovery_point();
                },
            }
        }

        self.expect(&GraphQLTokenKind::SquareBracketClose)?;
        self.pop_delimiter();

        Ok(ast::Value::List(ast::ListValue {
            values,
            loc: self.make_loc(open_token.span),
        }))
    }

    /// `{ field: value, ... }`
    fn parse_object_value(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        let open_token = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::ObjectValue);

        let mut fields: Vec<ast::ObjectField> = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.unclosed_delimiter_error("{");
                return Err(());
            }

            let name = self.expect_name()?;
            let name_span = name.loc.span().cloned().unwrap_or_else(|| self.eof_span());
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(context)?;

            if let Some(first) = fields.iter().find(|f| f.name.value == name.value) {
                let mut error = GraphQLParseError::new(
                    format!("duplicate input field `{}`", name.value),
                    name_span.clone(),
                    GraphQLParseErrorKind::DuplicateInputField {
                        name: name.value.clone(),
                    },
                );
                if let Some(first_span) = first.name.loc.span() {
                    error.add_note_with_span("first defined here", first_span.clone());
                }
                self.record_error(error);
            }

            fields.push(ast::ObjectField {
                name,
                value,
                loc: self.make_loc(name_span),
            });
        }

        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();

        Ok(ast::Value::Object(ast::ObjectValue {
            fields,
            loc: self.make_loc(open_token.span),
        }))
    }

    /// Skips to the next token that could start a list item, or to `]`.
    ///
    /// Exhaustive so new token kinds must be classified here.
    fn skip_to_list_recovery_point(&mut self) {
        loop {
            match self.token_stream.peek().map(|t| &t.kind) {
                None => break,
                Some(kind) => match kind {
                    GraphQLTokenKind::SquareBracketClose | GraphQLTokenKind::Eof => break,
                    GraphQLTokenKind::Dollar
                    | GraphQLTokenKind::IntValue(_)
                    | GraphQLTokenKind::FloatValue(_)
                    | GraphQLTokenKind::StringValue(_)
                    | GraphQLTokenKind::True
                    | GraphQLTokenKind::False
                    | GraphQLTokenKind::Null
                    | GraphQLTokenKind::SquareBracketOpen
                    | GraphQLTokenKind::CurlyBraceOpen
                    | GraphQLTokenKind::Name(_) => break,
                    GraphQLTokenKind::Ampersand
                    | GraphQLTokenKind::At
                    | GraphQLTokenKind::Bang
                    | GraphQLTokenKind::Colon
                    | GraphQLTokenKind::CurlyBraceClose
                    | GraphQLTokenKind::Ellipsis
                    | GraphQLTokenKind::Equals
                    | GraphQLTokenKind::ParenClose
                    | GraphQLTokenKind::ParenOpen
                    | GraphQLTokenKind::Pipe
                    | GraphQLTokenKind::Error { .. } => {
                        self.consume_token();
                    },
                },
            }
        }
    }

    // =========================================================================
    // Type annotation parsing
    // =========================================================================

    /// `Name`, `[Type]`, `Type!`, `[Type!]!`, ...
    fn parse_type_annotation(&mut self) -> Result<ast::Type, ()> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> Result<ast::Type, ()> {
        let start = self.peek_span();
        let base = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            self.parse_list_type()?
        } else {
            let name = self.expect_name()?;
            ast::Type::Named(ast::NamedType {
                loc: name.loc.clone(),
                name,
            })
        };

        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.advance()?;
            Ok(ast::Type::NonNull(ast::NonNullType {
                inner_type: Box::new(base),
                loc: self.make_loc(start),
            }))
        } else {
            Ok(base)
        }
    }

    fn parse_list_type(&mut self) -> Result<ast::Type, ()> {
        let open_token = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::ListType);

        let inner = self.parse_type_annotation()?;

        self.expect(&GraphQLTokenKind::SquareBracketClose)?;
        self.pop_delimiter();

        Ok(ast::Type::List(ast::ListType {
            item_type: Box::new(inner),
            loc: self.make_loc(open_token.span),
        }))
    }

    /// `on Name`
    fn parse_type_condition(&mut self) -> Result<ast::NamedType, ()> {
        let on_span = self.expect_keyword("on")?;
        let name = self.expect_name()?;
        Ok(ast::NamedType {
            name,
            loc: self.make_loc(on_span),
        })
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    fn parse_directives(&mut self, context: ConstContext) -> Result<Vec<ast::Directive>, ()> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            directives.push(self.parse_directive(context)?);
        }
        Ok(directives)
    }

    /// `@name` or `@name(args)`
    fn parse_directive(&mut self, context: ConstContext) -> Result<ast::Directive, ()> {
        let at = self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments(DelimiterContext::DirectiveArguments, context)?
        } else {
            Vec::new()
        };
        Ok(ast::Directive {
            name,
            arguments,
            loc: self.make_loc(at.span),
        })
    }

    /// `(name: value, ...)`
    fn parse_arguments(
        &mut self,
        delimiter_context: DelimiterContext,
        context: ConstContext,
    ) -> Result<Vec<ast::Argument>, ()> {
        let open_token = self.expect(&GraphQLTokenKind::ParenOpen)?;
        self.push_delimiter(open_token.span.clone(), delimiter_context);

        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.empty_construct_error(
                "argument list",
                "argument list cannot be empty; omit the parentheses instead",
                open_token.span.clone(),
            );
        }

        let mut arguments = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::ParenClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.unclosed_delimiter_error("(");
                return Err(());
            }

            let name = self.expect_name()?;
            let name_span = name.loc.span().cloned().unwrap_or_else(|| self.eof_span());
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(context)?;
            arguments.push(ast::Argument {
                name,
                value,
                loc: self.make_loc(name_span),
            });
        }

        self.expect(&GraphQLTokenKind::ParenClose)?;
        self.pop_delimiter();
        Ok(arguments)
    }

    // =========================================================================
    // Selection set parsing
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, ()> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<ast::SelectionSet, ()> {
        let open_token = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::SelectionSet);

        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            self.empty_construct_error(
                "selection set",
                "selection set cannot be empty",
                open_token.span.clone(),
            );
        }

        let mut selections = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.unclosed_delimiter_error("{");
                return Err(());
            }
            let depth = self.delimiter_stack.len();
            match self.parse_selection() {
                Ok(selection) => selections.push(selection),
                Err(()) => {
                    self.delimiter_stack.truncate(depth);
                    self.skip_to_selection_recovery_point();
                },
            }
        }

        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();

        Ok(ast::SelectionSet {
            selections,
            loc: self.make_loc(open_token.span),
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection, ()> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis) {
            return self.parse_field().map(ast::Selection::Field);
        }

        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis)?;
        if self.peek_is_keyword("on")
            || self.peek_is(&GraphQLTokenKind::At)
            || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
        {
            self.parse_inline_fragment(ellipsis.span)
                .map(ast::Selection::InlineFragment)
        } else {
            self.parse_fragment_spread(ellipsis.span)
                .map(ast::Selection::FragmentSpread)
        }
    }

    /// `alias: name(args) @directives { selections }`
    fn parse_field(&mut self) -> Result<ast::Field, ()> {
        let first_name = self.expect_name()?;
        let start = first_name
            .loc
            .span()
            .cloned()
            .unwrap_or_else(|| self.eof_span());

        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.advance()?;
            let name = self.expect_name()?;
            (Some(first_name), name)
        } else {
            (None, first_name)
        };

        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments(DelimiterContext::FieldArguments, ConstContext::AllowVariables)?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.make_loc(start),
        })
    }

    /// `...Name @directives`, after the `...`.
    fn parse_fragment_spread(&mut self, start: GraphQLSourceSpan) -> Result<ast::FragmentSpread, ()> {
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        Ok(ast::FragmentSpread {
            name,
            directives,
            loc: self.make_loc(start),
        })
    }

    /// `... on Type @directives { selections }`, after the `...`. The type
    /// condition is optional.
    fn parse_inline_fragment(&mut self, start: GraphQLSourceSpan) -> Result<ast::InlineFragment, ()> {
        let type_condition = if self.peek_is_keyword("on") {
            Some(self.parse_type_condition()?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.make_loc(start),
        })
    }

    fn skip_to_selection_recovery_point(&mut self) {
        loop {
            match self.token_stream.peek().map(|t| &t.kind) {
                None => break,
                Some(
                    GraphQLTokenKind::CurlyBraceClose
                    | GraphQLTokenKind::Eof
                    | GraphQLTokenKind::Ellipsis
                    | GraphQLTokenKind::Name(_)
                    | GraphQLTokenKind::True
                    | GraphQLTokenKind::False
                    | GraphQLTokenKind::Null,
                ) => break,
                Some(_) => {
                    self.consume_token();
                },
            }
        }
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition, ()> {
        // Shorthand: `{ ... }` is an anonymous query.
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let start = self.peek_span();
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                operation: ast::OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                loc: self.make_loc(start),
            });
        }

        let operation = if self.peek_is_keyword("query") {
            ast::OperationType::Query
        } else if self.peek_is_keyword("mutation") {
            ast::OperationType::Mutation
        } else if self.peek_is_keyword("subscription") {
            ast::OperationType::Subscription
        } else {
            self.record_unexpected_next(&["query", "mutation", "subscription", "{"]);
            return Err(());
        };
        let start = self.expect_keyword(operation.as_str())?;

        let name = match self.token_stream.peek().map(|t| &t.kind) {
            Some(
                GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null,
            ) => Some(self.expect_name()?),
            _ => None,
        };

        let variable_definitions = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.make_loc(start),
        })
    }

    /// `($var: Type = default, ...)`
    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>, ()> {
        let open_token = self.expect(&GraphQLTokenKind::ParenOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::VariableDefinitions);

        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.empty_construct_error(
                "variable definitions",
                "variable definitions cannot be empty; omit the parentheses instead",
                open_token.span.clone(),
            );
        }

        let mut definitions = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::ParenClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.unclosed_delimiter_error("(");
                return Err(());
            }
            definitions.push(self.parse_variable_definition()?);
        }

        self.expect(&GraphQLTokenKind::ParenClose)?;
        self.pop_delimiter();
        Ok(definitions)
    }

    /// `$name: Type = default @directives`
    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition, ()> {
        let variable = self.parse_variable()?;
        let start = variable
            .loc
            .span()
            .cloned()
            .unwrap_or_else(|| self.eof_span());
        self.expect(&GraphQLTokenKind::Colon)?;
        let ty = self.parse_type_annotation()?;

        let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
            self.advance()?;
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;

        Ok(ast::VariableDefinition {
            variable,
            ty,
            default_value,
            directives,
            loc: self.make_loc(start),
        })
    }

    /// `fragment Name on Type @directives { ... }`
    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition, ()> {
        let start = self.expect_keyword("fragment")?;

        let name = self.expect_name()?;
        if name.value == "on" {
            // Keep parsing; the document is still rejected.
            let mut error = GraphQLParseError::new(
                "fragment name cannot be `on`",
                name.loc.span().cloned().unwrap_or_else(|| self.eof_span()),
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                    context: ReservedNameContext::FragmentName,
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#FragmentName");
            self.record_error(error);
        }

        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.make_loc(start),
        })
    }

    /// Parses an executable document: operations and fragments only.
    pub fn parse_executable_document(mut self) -> ParseResult<ast::Document> {
        let start = self.peek_span();
        let mut definitions = Vec::new();

        while !self.token_stream.is_at_end() {
            match self.parse_definition() {
                Ok(def) => definitions.push(def),
                Err(()) => self.recover_to_next_definition(),
            }
        }

        if definitions.is_empty() && self.errors.is_empty() {
            let span = self.peek_span();
            self.record_error(GraphQLParseError::new(
                "document must contain at least one operation or fragment",
                span,
                GraphQLParseErrorKind::UnexpectedEof {
                    expected: vec!["query".to_string(), "{".to_string()],
                },
            ));
        }

        let document = ast::Document {
            definitions,
            loc: self.make_loc(start),
        };
        log::trace!(
            "parsed {} definition(s) with {} error(s)",
            document.definitions.len(),
            self.errors.len(),
        );

        if self.errors.is_empty() {
            ParseResult::ok(document)
        } else {
            ParseResult::recovered(document, self.errors)
        }
    }

    fn parse_definition(&mut self) -> Result<ast::Definition, ()> {
        if self.handle_lexer_error() {
            return Err(());
        }

        if self.peek_is_keyword("query")
            || self.peek_is_keyword("mutation")
            || self.peek_is_keyword("subscription")
            || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
        {
            return self
                .parse_operation_definition()
                .map(ast::Definition::Operation);
        }
        if self.peek_is_keyword("fragment") {
            return self
                .parse_fragment_definition()
                .map(ast::Definition::Fragment);
        }

        let is_type_system = ["type", "interface", "union", "enum", "scalar", "input", "directive", "schema", "extend"]
            .iter()
            .any(|kw| self.peek_is_keyword(kw));
        let span = self.peek_span();
        let found = self
            .token_stream
            .peek()
            .map(|t| Self::token_kind_display(&t.kind))
            .unwrap_or_else(|| "end of input".to_string());
        // Always consume so recovery makes progress.
        self.consume_token();

        let mut error = GraphQLParseError::new(
            format!("expected operation or fragment definition, found `{found}`"),
            span,
            GraphQLParseErrorKind::UnexpectedToken {
                expected: vec![
                    "query".to_string(),
                    "mutation".to_string(),
                    "subscription".to_string(),
                    "fragment".to_string(),
                    "{".to_string(),
                ],
                found,
            },
        );
        if is_type_system {
            error.add_help("type system definitions are not allowed in executable documents");
        }
        self.record_error(error);
        Err(())
    }
}
