use crate::ast::AstKind;
use crate::ast::AstNode;
use crate::ast::Location;
use inherent::inherent;

/// A GraphQL [name](https://spec.graphql.org/October2021/#sec-Names).
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub loc: Location,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: Location::none(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

#[inherent]
impl AstNode for Name {
    pub fn kind(&self) -> AstKind {
        AstKind::Name
    }

    pub fn location(&self) -> &Location {
        &self.loc
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&self.value);
    }
}
