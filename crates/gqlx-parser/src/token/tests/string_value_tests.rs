//! Tests for string literal cooking and the block string algorithm.

use crate::GraphQLStringParsingError;
use crate::token::block_string_value;
use crate::token::cook_string_literal;

// =============================================================================
// Quoted strings
// =============================================================================

/// Verifies every simple escape sequence.
#[test]
fn simple_escapes() {
    assert_eq!(
        cook_string_literal(r#""\" \\ \/ \b \f \n \r \t""#),
        Ok("\" \\ / \u{8} \u{c} \n \r \t".to_string()),
    );
}

/// Verifies fixed-width, braced and surrogate-pair unicode escapes.
#[test]
fn unicode_escapes() {
    assert_eq!(cook_string_literal(r#""\u00e9""#), Ok("\u{e9}".to_string()));
    assert_eq!(cook_string_literal(r#""\u{1F600}""#), Ok("\u{1F600}".to_string()));
    assert_eq!(cook_string_literal(r#""\uD83D\uDE00""#), Ok("\u{1F600}".to_string()));
}

/// Verifies rejection of malformed unicode escapes.
#[test]
fn invalid_unicode_escapes() {
    for raw in [r#""\u12""#, r#""\uZZZZ""#, r#""\uD83D""#, r#""\uDE00""#, r#""\u{110000}""#, r#""\uD83Dx""#] {
        assert!(
            matches!(cook_string_literal(raw), Err(GraphQLStringParsingError::InvalidUnicodeEscape(_))),
            "{raw}",
        );
    }
}

/// Verifies rejection of unknown escapes and unterminated literals.
#[test]
fn invalid_escapes() {
    assert_eq!(
        cook_string_literal(r#""\x""#),
        Err(GraphQLStringParsingError::InvalidEscapeSequence("\\x".to_string())),
    );
    assert_eq!(cook_string_literal("\"abc"), Err(GraphQLStringParsingError::UnterminatedString));
}

// =============================================================================
// Block strings
// =============================================================================

/// Verifies that common indentation is removed from every line but the
/// first.
#[test]
fn removes_common_indentation() {
    assert_eq!(block_string_value("\n    a\n      b\n    c\n  "), "a\n  b\nc");
    assert_eq!(block_string_value("first\n    a\n    b"), "first\na\nb");
}

/// Verifies that leading and trailing blank lines are dropped but interior
/// ones are kept.
#[test]
fn trims_blank_lines() {
    assert_eq!(block_string_value("\n  \n  a\n\n  b\n \n"), "a\n\nb");
    assert_eq!(block_string_value("   "), "");
}

/// Verifies that all line terminators are normalized to `\n`.
#[test]
fn normalizes_line_terminators() {
    assert_eq!(block_string_value("a\r\n  b\r  c"), "a\nb\nc");
}

/// Verifies that escaped triple quotes become plain triple quotes and no
/// other escapes are processed.
#[test]
fn block_string_escapes() {
    assert_eq!(
        cook_string_literal("\"\"\"say \\\"\"\" and \\n\"\"\""),
        Ok("say \"\"\" and \\n".to_string()),
    );
}
