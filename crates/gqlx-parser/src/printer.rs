//! Prints AST nodes back to GraphQL text.
//!
//! The output format is canonical: two-space indentation, one selection per
//! line, `, ` between arguments and list items, and field arguments broken
//! onto their own lines once the field's line would exceed
//! [`MAX_LINE_LENGTH`]. Printing a parsed document and parsing the result
//! yields a document equal to the original.

use crate::ast;

/// Field argument lists longer than this are printed one per line.
pub const MAX_LINE_LENGTH: usize = 80;

pub fn print_document(doc: &ast::Document) -> String {
    join(doc.definitions.iter().map(print_definition), "\n\n")
}

pub fn print_definition(def: &ast::Definition) -> String {
    match def {
        ast::Definition::Operation(op) => print_operation_definition(op),
        ast::Definition::Fragment(frag) => print_fragment_definition(frag),
    }
}

pub fn print_operation_definition(op: &ast::OperationDefinition) -> String {
    let var_defs = wrap(
        "(",
        &join(op.variable_definitions.iter().map(print_variable_definition), ", "),
        ")",
    );
    let name = op.name.as_ref().map(|n| n.value.clone()).unwrap_or_default();
    let prefix = join(
        [
            op.operation.as_str().to_string(),
            format!("{name}{var_defs}"),
            print_directives(&op.directives),
        ],
        " ",
    );
    let selection_set = print_selection_set(&op.selection_set);
    // An anonymous query with nothing else to say uses the shorthand form.
    if prefix == "query" {
        selection_set
    } else {
        format!("{prefix} {selection_set}")
    }
}

pub fn print_variable_definition(var_def: &ast::VariableDefinition) -> String {
    format!(
        "${}: {}{}{}",
        var_def.variable.name.value,
        print_type(&var_def.ty),
        wrap(" = ", &var_def.default_value.as_ref().map(print_value).unwrap_or_default(), ""),
        wrap(" ", &print_directives(&var_def.directives), ""),
    )
}

pub fn print_fragment_definition(frag: &ast::FragmentDefinition) -> String {
    format!(
        "fragment {} on {} {}{}",
        frag.name.value,
        frag.type_condition.name.value,
        wrap("", &print_directives(&frag.directives), " "),
        print_selection_set(&frag.selection_set),
    )
}

pub fn print_selection_set(set: &ast::SelectionSet) -> String {
    block(set.selections.iter().map(print_selection))
}

pub fn print_selection(selection: &ast::Selection) -> String {
    match selection {
        ast::Selection::Field(field) => print_field(field),
        ast::Selection::FragmentSpread(spread) => print_fragment_spread(spread),
        ast::Selection::InlineFragment(fragment) => print_inline_fragment(fragment),
    }
}

pub fn print_field(field: &ast::Field) -> String {
    let prefix = match &field.alias {
        Some(alias) => format!("{}: {}", alias.value, field.name.value),
        None => field.name.value.clone(),
    };
    let args: Vec<String> = field.arguments.iter().map(print_argument).collect();
    let mut args_line = format!("{prefix}{}", wrap("(", &args.join(", "), ")"));
    if args_line.chars().count() > MAX_LINE_LENGTH {
        args_line = format!("{prefix}{}", wrap("(\n", &indent(&args.join("\n")), "\n)"));
    }
    join(
        [
            args_line,
            print_directives(&field.directives),
            field
                .selection_set
                .as_ref()
                .map(print_selection_set)
                .unwrap_or_default(),
        ],
        " ",
    )
}

pub fn print_argument(arg: &ast::Argument) -> String {
    format!("{}: {}", arg.name.value, print_value(&arg.value))
}

pub fn print_fragment_spread(spread: &ast::FragmentSpread) -> String {
    format!(
        "...{}{}",
        spread.name.value,
        wrap(" ", &print_directives(&spread.directives), ""),
    )
}

pub fn print_inline_fragment(fragment: &ast::InlineFragment) -> String {
    join(
        [
            "...".to_string(),
            fragment
                .type_condition
                .as_ref()
                .map(|tc| format!("on {}", tc.name.value))
                .unwrap_or_default(),
            print_directives(&fragment.directives),
            print_selection_set(&fragment.selection_set),
        ],
        " ",
    )
}

pub fn print_directive(directive: &ast::Directive) -> String {
    format!(
        "@{}{}",
        directive.name.value,
        wrap(
            "(",
            &join(directive.arguments.iter().map(print_argument), ", "),
            ")",
        ),
    )
}

fn print_directives(directives: &[ast::Directive]) -> String {
    join(directives.iter().map(print_directive), " ")
}

pub fn print_type(ty: &ast::Type) -> String {
    match ty {
        ast::Type::Named(named) => named.name.value.clone(),
        ast::Type::List(list) => format!("[{}]", print_type(&list.item_type)),
        ast::Type::NonNull(non_null) => format!("{}!", print_type(&non_null.inner_type)),
    }
}

pub fn print_value(value: &ast::Value) -> String {
    match value {
        ast::Value::Variable(var) => format!("${}", var.name.value),
        ast::Value::Int(int) => int.raw.clone(),
        ast::Value::Float(float) => float.raw.clone(),
        ast::Value::String(string) => print_string_value(string),
        ast::Value::Boolean(boolean) => boolean.value.to_string(),
        ast::Value::Null(_) => "null".to_string(),
        ast::Value::Enum(enum_value) => enum_value.value.clone(),
        ast::Value::List(list) => print_list_value(list),
        ast::Value::Object(obj) => print_object_value(obj),
    }
}

/// Prints a float so that it lexes back as a `FloatValue`: `1.0`, `1.5e-7`.
pub fn print_float(value: f64) -> String {
    format!("{value:?}")
}

pub fn print_string_value(string: &ast::StringValue) -> String {
    if string.block && is_printable_as_block_string(&string.value) {
        print_block_string(&string.value)
    } else {
        print_quoted_string(&string.value)
    }
}

pub fn print_list_value(list: &ast::ListValue) -> String {
    format!("[{}]", join(list.values.iter().map(print_value), ", "))
}

pub fn print_object_value(obj: &ast::ObjectValue) -> String {
    format!("{{{}}}", join(obj.fields.iter().map(print_object_field), ", "))
}

pub fn print_object_field(field: &ast::ObjectField) -> String {
    format!("{}: {}", field.name.value, print_value(&field.value))
}

/// Prints `value` as a double-quoted string, escaping quotes, backslashes
/// and control characters.
pub fn print_quoted_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}' => {
                out.push_str(&format!("\\u{:04X}", ch as u32));
            },
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// `true` if `value` survives a trip through a block string unchanged.
///
/// Block strings cannot represent control characters, carriage returns,
/// leading or trailing blank lines, or indentation common to every line
/// after the first.
pub fn is_printable_as_block_string(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let mut is_empty_line = true;
    let mut has_indent = false;
    let mut has_common_indent = true;
    let mut seen_non_empty_line = false;

    for ch in value.chars() {
        match ch {
            '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\r' => {
                return false;
            },
            '\n' => {
                if is_empty_line && !seen_non_empty_line {
                    // leading blank line
                    return false;
                }
                seen_non_empty_line = true;
                is_empty_line = true;
                has_indent = false;
            },
            '\t' | ' ' => {
                has_indent = has_indent || is_empty_line;
            },
            _ => {
                has_common_indent = has_common_indent && has_indent;
                is_empty_line = false;
            },
        }
    }

    if is_empty_line {
        // trailing blank line
        return false;
    }
    !(has_common_indent && seen_non_empty_line)
}

/// Prints `value` as a `"""` block string. The caller must check
/// [`is_printable_as_block_string`] first.
pub fn print_block_string(value: &str) -> String {
    let escaped = value.replace("\"\"\"", "\\\"\"\"");
    let lines: Vec<&str> = escaped.split('\n').collect();
    let is_single_line = lines.len() == 1;

    let force_leading_newline = lines.len() > 1
        && lines[1..]
            .iter()
            .all(|line| line.is_empty() || line.starts_with([' ', '\t']));
    let has_trailing_triple_quotes = escaped.ends_with("\\\"\"\"");
    let has_trailing_quote = value.ends_with('"') && !has_trailing_triple_quotes;
    let has_trailing_slash = value.ends_with('\\');
    let force_trailing_newline = has_trailing_quote || has_trailing_slash;
    let print_as_multiple_lines = !is_single_line
        || value.chars().count() > 70
        || force_trailing_newline
        || force_leading_newline
        || has_trailing_triple_quotes;

    let skip_leading_newline = is_single_line && value.starts_with([' ', '\t']);

    let mut out = String::from("\"\"\"");
    if (print_as_multiple_lines && !skip_leading_newline) || force_leading_newline {
        out.push('\n');
    }
    out.push_str(&escaped);
    if print_as_multiple_lines || force_trailing_newline {
        out.push('\n');
    }
    out.push_str("\"\"\"");
    out
}

/// Joins the non-empty parts with `separator`.
fn join(parts: impl IntoIterator<Item = String>, separator: &str) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `start + content + end`, or the empty string if `content` is empty.
fn wrap(start: &str, content: &str, end: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("{start}{content}{end}")
    }
}

fn indent(content: &str) -> String {
    wrap("  ", &content.replace('\n', "\n  "), "")
}

fn block(parts: impl IntoIterator<Item = String>) -> String {
    wrap("{\n", &indent(&join(parts, "\n")), "\n}")
}
