use crate::PathSegment;
use crate::Value;
use crate::ast;
use crate::execution::ResponsePath;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Everything a resolver may want to know about the field it resolves and
/// the operation it belongs to.
#[derive(Clone, Copy)]
pub struct ResolveInfo<'a> {
    /// The field's name (not its alias).
    pub field_name: &'a str,

    /// Every node in the document that selected this response key. They all
    /// select the same field; the first one supplies the arguments.
    pub field_nodes: &'a [&'a ast::Field],

    pub return_type: &'a TypeAnnotation,
    pub parent_type: &'a ObjectType,
    pub path: &'a ResponsePath<'a>,
    pub schema: &'a Schema,
    pub fragments: &'a HashMap<String, &'a ast::FragmentDefinition>,
    pub root_value: &'a Value,
    pub operation: &'a ast::OperationDefinition,
    pub variable_values: &'a IndexMap<String, Value>,
    pub(crate) context_value: Option<&'a (dyn Any + Send + Sync)>,
}
impl<'a> ResolveInfo<'a> {
    /// The context value passed to the execution, if it is a `T`.
    pub fn context<T: Any>(&self) -> Option<&'a T> {
        self.context_value?.downcast_ref::<T>()
    }

    /// The response path of this field as it would appear in an error.
    pub fn path_list(&self) -> Vec<PathSegment> {
        self.path.as_list()
    }
}
impl fmt::Debug for ResolveInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveInfo")
            .field("field_name", &self.field_name)
            .field("return_type", &self.return_type.to_string())
            .field("parent_type", &self.parent_type.name())
            .field("path", &self.path.as_list())
            .field("operation", &self.operation.name())
            .finish_non_exhaustive()
    }
}
