use crate::ast::AstKind;
use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Value;
use crate::printer;
use inherent::inherent;

/// `{ ... }`. Never empty when produced by the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn directives(&self) -> &[Directive] {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(fragment) => &fragment.directives,
        }
    }
}

/// `alias: name(arguments) @directives { selection_set }`
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub loc: Location,
}

impl Field {
    /// The key this field's value is stored under in the response: the
    /// alias if present, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Location,
}

/// `...Name @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Location,
}

/// `... on Type @directives { selection_set }`
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Location,
}

/// `@name(arguments)`
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Location,
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn kind(&self) -> AstKind {
        AstKind::SelectionSet
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_selection_set(self));
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn kind(&self) -> AstKind {
        match self {
            Selection::Field(_) => AstKind::Field,
            Selection::FragmentSpread(_) => AstKind::FragmentSpread,
            Selection::InlineFragment(_) => AstKind::InlineFragment,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Selection::Field(s) => &s.loc,
            Selection::FragmentSpread(s) => &s.loc,
            Selection::InlineFragment(s) => &s.loc,
        }
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_selection(self));
    }
}

#[inherent]
impl AstNode for Field {
    pub fn kind(&self) -> AstKind {
        AstKind::Field
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_field(self));
    }
}

#[inherent]
impl AstNode for Argument {
    pub fn kind(&self) -> AstKind {
        AstKind::Argument
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_argument(self));
    }
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn kind(&self) -> AstKind {
        AstKind::FragmentSpread
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_fragment_spread(self));
    }
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn kind(&self) -> AstKind {
        AstKind::InlineFragment
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_inline_fragment(self));
    }
}

#[inherent]
impl AstNode for Directive {
    pub fn kind(&self) -> AstKind {
        AstKind::Directive
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_directive(self));
    }
}
