//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes a `&str`.
//!
//! Token values borrow directly from the source (`Cow::Borrowed`). Positions
//! are tracked as 0-based line plus both UTF-8 character and UTF-16 code unit
//! columns. Invalid input yields `Error` tokens rather than stopping, so the
//! parser can report several problems in one pass.
//!
//! ```rust
//! use gqlx_parser::token::GraphQLTokenKind;
//! use gqlx_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds.len(), 4);
//! assert_eq!(kinds[1], GraphQLTokenKind::name_borrowed("name"));
//! assert_eq!(kinds[3], GraphQLTokenKind::Eof);
//! ```

use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use smallvec::smallvec;
use std::path::Path;

pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,

    /// Characters (not bytes) since the start of the line.
    curr_col_utf8: usize,

    /// UTF-16 code units since the start of the line.
    curr_col_utf16: usize,

    /// Set after `\r` so the `\n` of a `\r\n` pair does not count as a
    /// second line break.
    last_char_was_cr: bool,

    finished: bool,

    file_path: Option<&'src Path>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a token source whose spans carry `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.peek_char_nth(0)
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character, updating line and column tracking.
    /// `\n`, `\r` and `\r\n` each count as one line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `count` characters that are known not to be line breaks.
    fn consume_n(&mut self, count: usize) {
        for _ in 0..count {
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn punctuator(&mut self, kind: GraphQLTokenKind<'src>) -> GraphQLToken<'src> {
        let start = self.curr_position();
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();
        let start = self.curr_position();

        match self.peek_char() {
            None => self.make_token(GraphQLTokenKind::Eof, start),

            Some('!') => self.punctuator(GraphQLTokenKind::Bang),
            Some('$') => self.punctuator(GraphQLTokenKind::Dollar),
            Some('&') => self.punctuator(GraphQLTokenKind::Ampersand),
            Some('(') => self.punctuator(GraphQLTokenKind::ParenOpen),
            Some(')') => self.punctuator(GraphQLTokenKind::ParenClose),
            Some(':') => self.punctuator(GraphQLTokenKind::Colon),
            Some('=') => self.punctuator(GraphQLTokenKind::Equals),
            Some('@') => self.punctuator(GraphQLTokenKind::At),
            Some('[') => self.punctuator(GraphQLTokenKind::SquareBracketOpen),
            Some(']') => self.punctuator(GraphQLTokenKind::SquareBracketClose),
            Some('{') => self.punctuator(GraphQLTokenKind::CurlyBraceOpen),
            Some('}') => self.punctuator(GraphQLTokenKind::CurlyBraceClose),
            Some('|') => self.punctuator(GraphQLTokenKind::Pipe),

            Some('.') => self.lex_dot_or_ellipsis(start),
            Some('"') => self.lex_string(start),
            Some(c) if is_name_start(c) => self.lex_name(start),
            Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            Some(_) => self.lex_invalid_character(start),
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, line terminators, commas, the BOM and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (not including) the line terminator.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let comment = &rest[..len];
        self.curr_col_utf8 += comment.chars().count();
        self.curr_col_utf16 += comment.encode_utf16().count();
        self.curr_byte_offset += len;
        self.last_char_was_cr = false;
    }

    fn skip_whitespace_same_line(&mut self) {
        while let Some(' ' | '\t' | '\u{FEFF}') = self.peek_char() {
            self.consume();
        }
    }

    // =========================================================================
    // Dot / Ellipsis
    // =========================================================================

    /// Lexes `...`, or an error with a hint for the near-misses `..`,
    /// `. .`, `.. .` and `. ..` on a single line.
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let first_dot_line = self.curr_line;
        self.consume();
        self.skip_whitespace_same_line();

        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            return self.make_token(GraphQLTokenKind::error("Unexpected `.`", smallvec![]), start);
        }

        let second_dot_start = self.curr_position();
        let first_two_adjacent = second_dot_start.byte_offset() == start.byte_offset() + 1;
        self.consume();
        self.skip_whitespace_same_line();

        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            let kind = if first_two_adjacent {
                GraphQLTokenKind::error(
                    "Unexpected `..` (use `...` for spread operator)",
                    smallvec![GraphQLErrorNote::help(
                        "Add one more `.` to form the spread operator `...`"
                    )],
                )
            } else {
                GraphQLTokenKind::error(
                    "Unexpected `. .` (use `...` for spread operator)",
                    smallvec![spread_spacing_help()],
                )
            };
            return self.make_token(kind, start);
        }

        let third_dot_start = self.curr_position();
        self.consume();
        let second_third_adjacent =
            third_dot_start.byte_offset() == second_dot_start.byte_offset() + 1;

        let kind = match (first_two_adjacent, second_third_adjacent) {
            (true, true) => GraphQLTokenKind::Ellipsis,
            (true, false) => {
                GraphQLTokenKind::error("Unexpected `.. .`", smallvec![spread_spacing_help()])
            },
            (false, true) => {
                GraphQLTokenKind::error("Unexpected `. ..`", smallvec![spread_spacing_help()])
            },
            (false, false) => {
                GraphQLTokenKind::error("Unexpected `. . .`", smallvec![spread_spacing_help()])
            },
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes `/[_A-Za-z][_0-9A-Za-z]*/`; `true`, `false` and `null` get
    /// their own token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        let len = self
            .remaining()
            .bytes()
            .take_while(|b| *b == b'_' || b.is_ascii_alphanumeric())
            .count();
        self.consume_n(len);

        let name = &self.source[name_start..self.curr_byte_offset];
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
    ///
    /// A number may not be directly followed by a `.` or a name character.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        Some("https://spec.graphql.org/October2021/#sec-Int-Value"),
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
            Some(_) | None => {
                return self.make_token(GraphQLTokenKind::error("Unexpected `-`", smallvec![]), start);
            },
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: expected a digit after `.`",
                    Some("https://spec.graphql.org/October2021/#sec-Float-Value"),
                );
            }
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some('e' | 'E') = self.peek_char() {
            is_float = true;
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    Some("https://spec.graphql.org/October2021/#sec-Float-Value"),
                );
            }
            self.consume_digits();
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch))
        {
            return self.lex_number_error(
                start,
                num_start,
                &format!("Invalid number: unexpected `{ch}` after numeric literal"),
                None,
            );
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(num_text)
        } else {
            GraphQLTokenKind::int_value_borrowed(num_text)
        };
        self.make_token(kind, start)
    }

    fn consume_digits(&mut self) {
        let len = self
            .remaining()
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.consume_n(len);
    }

    /// Builds an error token for a malformed number, swallowing the rest of
    /// the number-like run so lexing resumes after it.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: Option<&str>,
    ) -> GraphQLToken<'src> {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-' | '_') {
                self.consume();
            } else {
                break;
            }
        }

        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        let mut error_notes = smallvec![];
        if let Some(url) = spec_url {
            error_notes.push(GraphQLErrorNote::spec(url));
        }
        let kind = GraphQLTokenKind::error(format!("{message}: `{invalid_text}`"), error_notes);
        self.make_token(kind, start)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                self.make_span(start.clone()),
                            ),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    );
                    return self.make_token(kind, start);
                },
                Some('\n' | '\r') => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines"
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line strings, \
                                 or escape the newline with `\\n`"
                            ),
                        ],
                    );
                    return self.make_token(kind, start);
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if let Some(ch) = self.peek_char()
                        && ch != '\n'
                        && ch != '\r'
                    {
                        self.consume();
                    }
                },
                Some(ch) if is_disallowed_source_char(ch) => {
                    return self.lex_string_control_char(start, ch);
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::string_value_borrowed(string_text), start)
    }

    fn lex_block_string(&mut self, start: SourcePosition, str_start: usize) -> GraphQLToken<'src> {
        self.consume_n(3);

        loop {
            match self.peek_char() {
                None => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated block string",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "Block string started here",
                                self.make_span(start.clone()),
                            ),
                            GraphQLErrorNote::help("Add closing `\"\"\"`"),
                        ],
                    );
                    return self.make_token(kind, start);
                },
                Some('\\') if self.remaining().starts_with("\\\"\"\"") => self.consume_n(4),
                Some('"') if self.remaining().starts_with("\"\"\"") => {
                    self.consume_n(3);
                    break;
                },
                Some(ch) if is_disallowed_source_char(ch) => {
                    return self.lex_string_control_char(start, ch);
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::string_value_borrowed(string_text), start)
    }

    /// Reports a control character inside a string, then skips to the end of
    /// the line so the parser resynchronizes on the next line.
    fn lex_string_control_char(&mut self, start: SourcePosition, ch: char) -> GraphQLToken<'src> {
        let message = format!("Invalid character within string: {}", describe_char(ch));
        while let Some(next) = self.peek_char() {
            if next == '\n' || next == '\r' {
                break;
            }
            self.consume();
        }
        self.make_token(GraphQLTokenKind::error(message, smallvec![]), start)
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let message = match self.consume() {
            Some(ch) => format!("Unexpected character {}", describe_char(ch)),
            None => "Unexpected end of input".to_string(),
        };
        self.make_token(GraphQLTokenKind::error(message, smallvec![]), start)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn spread_spacing_help() -> GraphQLErrorNote {
    GraphQLErrorNote::help(
        "These dots may have been intended to form a `...` spread operator. \
         Try removing the extra spacing between the dots.",
    )
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Control characters other than tab and line terminators are not valid
/// inside string literals.
fn is_disallowed_source_char(ch: char) -> bool {
    ch < '\u{0020}' && !matches!(ch, '\t' | '\n' | '\r')
}

/// Quotes `ch` for an error message, naming invisible characters by code
/// point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch.escape_default(), ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        _ => None,
    }
}
