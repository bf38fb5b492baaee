use crate::ast::AstKind;
use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Name;
use crate::printer;
use inherent::inherent;

/// A type reference as written in a variable definition: `Int`, `[Int]`,
/// `Int!`, `[Int!]!`.
///
/// The parser never produces a `NonNull` directly inside another `NonNull`.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl Type {
    /// The innermost named type, e.g. `Int` for `[Int!]!`.
    pub fn named_type(&self) -> &NamedType {
        match self {
            Type::Named(named) => named,
            Type::List(list) => list.item_type.named_type(),
            Type::NonNull(non_null) => non_null.inner_type.named_type(),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_type(self))
    }
}

#[inherent]
impl AstNode for Type {
    pub fn kind(&self) -> AstKind {
        match self {
            Type::Named(_) => AstKind::NamedType,
            Type::List(_) => AstKind::ListType,
            Type::NonNull(_) => AstKind::NonNullType,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Type::Named(t) => &t.loc,
            Type::List(t) => &t.loc,
            Type::NonNull(t) => &t.loc,
        }
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_type(self));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub loc: Location,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            loc: Location::none(),
        }
    }
}

#[inherent]
impl AstNode for NamedType {
    pub fn kind(&self) -> AstKind {
        AstKind::NamedType
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&self.name.value);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub item_type: Box<Type>,
    pub loc: Location,
}

#[inherent]
impl AstNode for ListType {
    pub fn kind(&self) -> AstKind {
        AstKind::ListType
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push('[');
        self.item_type.append_source(sink);
        sink.push(']');
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub inner_type: Box<Type>,
    pub loc: Location,
}

#[inherent]
impl AstNode for NonNullType {
    pub fn kind(&self) -> AstKind {
        AstKind::NonNullType
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        self.inner_type.append_source(sink);
        sink.push('!');
    }
}
