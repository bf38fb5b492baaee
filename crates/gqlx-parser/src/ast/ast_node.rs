use crate::ast::AstKind;
use crate::ast::Location;

/// Implemented by every AST node.
///
/// Nodes implement this via `#[inherent] impl AstNode`, so the methods are
/// callable without importing the trait while still being usable as a
/// bound for generic utilities.
pub trait AstNode {
    fn kind(&self) -> AstKind;

    fn location(&self) -> &Location;

    /// Appends the canonical GraphQL text for this node to `sink`.
    fn append_source(&self, sink: &mut String);

    /// Returns the canonical GraphQL text for this node.
    fn to_source(&self) -> String {
        let mut s = String::new();
        self.append_source(&mut s);
        s
    }
}
