use crate::ast::AstKind;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::printer;
use inherent::inherent;

/// A parsed executable document: an ordered list of operations and
/// fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Location,
}

impl Document {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }

    /// The first fragment definition named `name`.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name.value == name)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_document(self))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `query Name($var: Type) @directives { ... }`, or the shorthand
/// `{ ... }` which is an anonymous query.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Location,
}

impl OperationDefinition {
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(Name::as_str)
    }
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Location,
}

/// `fragment Name on Type @directives { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Location,
}

#[inherent]
impl AstNode for Document {
    pub fn kind(&self) -> AstKind {
        AstKind::Document
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_document(self));
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn kind(&self) -> AstKind {
        match self {
            Definition::Operation(_) => AstKind::OperationDefinition,
            Definition::Fragment(_) => AstKind::FragmentDefinition,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Definition::Operation(op) => &op.loc,
            Definition::Fragment(frag) => &frag.loc,
        }
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_definition(self));
    }
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn kind(&self) -> AstKind {
        AstKind::OperationDefinition
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_operation_definition(self));
    }
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn kind(&self) -> AstKind {
        AstKind::VariableDefinition
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_variable_definition(self));
    }
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn kind(&self) -> AstKind {
        AstKind::FragmentDefinition
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_fragment_definition(self));
    }
}
