use crate::Arguments;
use crate::GraphQLError;
use crate::Value;
use crate::ast;
use crate::coercion::CoercionError;
use crate::coercion::coerce_input_value;
use crate::coercion::value_from_ast;
use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use gqlx_parser::printer::print_value;
use indexmap::IndexMap;

/// Coerces the variables supplied with a request against the operation's
/// variable definitions.
///
/// Missing variables take their default (coerced as a literal) or are left
/// out; a missing variable of a non-null type without a default is an
/// error. All offending variables are reported together.
pub fn coerce_variable_values(
    schema: &Schema,
    variable_definitions: &[ast::VariableDefinition],
    inputs: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, Vec<GraphQLError>> {
    let mut coerced = IndexMap::new();
    let mut errors = vec![];
    for var_def in variable_definitions {
        let var_name = var_def.variable.name.as_str();
        let var_type = TypeAnnotation::from_ast_type(&var_def.ty);
        let is_input_type = schema
            .get_type(var_type.innermost_type_name())
            .is_some_and(|t| t.is_input_type());
        if !is_input_type {
            errors.push(
                GraphQLError::new(format!(
                    "Variable \"${var_name}\" expected value of type \"{var_type}\" which \
                    cannot be used as an input type."
                ))
                .at([&var_def.loc]),
            );
            continue;
        }

        match inputs.get(var_name) {
            None => {
                if let Some(default_value) = &var_def.default_value {
                    if let Some(value) = value_from_ast(schema, default_value, &var_type, None) {
                        coerced.insert(var_name.to_string(), value);
                    }
                } else if !var_type.nullable() {
                    errors.push(
                        GraphQLError::new(format!(
                            "Variable \"${var_name}\" of required type \"{var_type}\" was not provided."
                        ))
                        .at([&var_def.loc]),
                    );
                }
            },
            Some(input) => match coerce_input_value(schema, input, &var_type) {
                Ok(value) => {
                    coerced.insert(var_name.to_string(), value);
                },
                Err(coercion_errors) => {
                    let details = coercion_errors
                        .iter()
                        .map(|error| error.message.as_str())
                        .collect::<Vec<_>>()
                        .join("\n");
                    errors.push(
                        GraphQLError::new(format!(
                            "Variable \"${var_name}\" got invalid value {input}.\n{details}"
                        ))
                        .at([&var_def.loc]),
                    );
                },
            },
        }
    }

    log::debug!(
        "coerced {} of {} declared variables ({} errors)",
        coerced.len(),
        variable_definitions.len(),
        errors.len(),
    );
    if errors.is_empty() { Ok(coerced) } else { Err(errors) }
}

/// Coerces the arguments given to a field or directive against their
/// definitions.
///
/// An argument that is neither given nor defaulted is left out, even when
/// it is required: that is for validation to report. An argument given as
/// a variable the request did not supply behaves like an absent argument.
pub fn coerce_argument_values(
    schema: &Schema,
    argument_definitions: &IndexMap<String, InputValue>,
    argument_nodes: &[ast::Argument],
    variables: &IndexMap<String, Value>,
) -> Result<Arguments, CoercionError> {
    let mut coerced = Arguments::new();
    for (arg_name, arg_def) in argument_definitions {
        let arg_type = arg_def.type_annotation();
        let out_key = arg_def.output_key(arg_name);
        let arg_node = argument_nodes.iter().find(|node| node.name.as_str() == arg_name);

        let value = match arg_node.map(|node| &node.value) {
            Some(ast::Value::Variable(variable)) => variables
                .get(variable.name.as_str())
                .or_else(|| arg_def.default_value())
                .cloned(),
            Some(literal) => {
                if !matches!(literal, ast::Value::Null(_)) {
                    let value = value_from_ast(schema, literal, arg_type, Some(variables));
                    let Some(value) = value else {
                        return Err(CoercionError::new(format!(
                            "Argument \"{arg_name}\" has invalid value {}.",
                            print_value(literal),
                        )));
                    };
                    Some(value)
                } else {
                    Some(Value::Null)
                }
            },
            None => arg_def.default_value().cloned(),
        };

        let Some(value) = value else { continue };
        if value.is_null() && !arg_type.nullable() {
            return Err(CoercionError::new(format!(
                "Argument \"{arg_name}\" of non-null type \"{arg_type}\" must not be null."
            )));
        }
        coerced.insert(out_key, value);
    }
    Ok(coerced)
}

/// The coerced arguments of the `directive_def` directive if it appears in
/// `directives`, or `None` if it does not.
pub fn get_directive_values(
    schema: &Schema,
    directive_def: &DirectiveDefinition,
    directives: &[ast::Directive],
    variables: &IndexMap<String, Value>,
) -> Result<Option<Arguments>, CoercionError> {
    let Some(directive) = directives
        .iter()
        .find(|directive| directive.name.as_str() == directive_def.name())
    else {
        return Ok(None);
    };
    coerce_argument_values(schema, directive_def.arguments(), &directive.arguments, variables)
        .map(Some)
}
