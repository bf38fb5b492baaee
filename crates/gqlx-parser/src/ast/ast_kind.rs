/// The closed set of AST node kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AstKind {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
}

impl AstKind {
    /// The canonical snake_case tag, e.g. `"operation_definition"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AstKind::Name => "name",
            AstKind::Document => "document",
            AstKind::OperationDefinition => "operation_definition",
            AstKind::VariableDefinition => "variable_definition",
            AstKind::SelectionSet => "selection_set",
            AstKind::Field => "field",
            AstKind::Argument => "argument",
            AstKind::FragmentSpread => "fragment_spread",
            AstKind::InlineFragment => "inline_fragment",
            AstKind::FragmentDefinition => "fragment_definition",
            AstKind::Variable => "variable",
            AstKind::IntValue => "int_value",
            AstKind::FloatValue => "float_value",
            AstKind::StringValue => "string_value",
            AstKind::BooleanValue => "boolean_value",
            AstKind::NullValue => "null_value",
            AstKind::EnumValue => "enum_value",
            AstKind::ListValue => "list_value",
            AstKind::ObjectValue => "object_value",
            AstKind::ObjectField => "object_field",
            AstKind::Directive => "directive",
            AstKind::NamedType => "named_type",
            AstKind::ListType => "list_type",
            AstKind::NonNullType => "non_null_type",
        }
    }
}

impl std::fmt::Display for AstKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
