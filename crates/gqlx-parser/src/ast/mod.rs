//! The executable-document AST.
//!
//! Nodes own their strings so a parsed [`Document`] can outlive its source
//! text and be shared between threads. Every node carries a [`Location`];
//! locations never take part in equality, so two parses of differently
//! formatted but equivalent text compare equal.

mod ast_kind;
mod ast_node;
mod definitions;
mod location;
mod name;
mod selections;
mod type_refs;
mod values;

pub use ast_kind::AstKind;
pub use ast_node::AstNode;
pub use definitions::Definition;
pub use definitions::Document;
pub use definitions::FragmentDefinition;
pub use definitions::OperationDefinition;
pub use definitions::OperationType;
pub use definitions::VariableDefinition;
pub use location::Location;
pub use name::Name;
pub use selections::Argument;
pub use selections::Directive;
pub use selections::Field;
pub use selections::FragmentSpread;
pub use selections::InlineFragment;
pub use selections::Selection;
pub use selections::SelectionSet;
pub use type_refs::ListType;
pub use type_refs::NamedType;
pub use type_refs::NonNullType;
pub use type_refs::Type;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;

#[cfg(test)]
mod tests;
