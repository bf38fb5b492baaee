//! Conversion of input values into internal values, and back.
//!
//! Literals in a document go through [`value_from_ast`]; values supplied
//! at runtime (variables) go through [`coerce_input_value`]. Output values
//! are serialized by the leaf types themselves during execution.

mod ast_from_value;
mod coerce_input_value;
mod coercion_error;
mod value_from_ast;
mod values;

pub use ast_from_value::ast_from_value;
pub use coerce_input_value::coerce_input_value;
pub use coercion_error::CoercionError;
pub use value_from_ast::value_from_ast;
pub use value_from_ast::value_from_ast_untyped;
pub use values::coerce_argument_values;
pub use values::coerce_variable_values;
pub use values::get_directive_values;
