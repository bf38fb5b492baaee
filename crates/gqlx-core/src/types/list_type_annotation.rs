use crate::types::TypeAnnotation;

/// A list type reference, e.g. `[Int]` or `[User!]!`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) inner: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    /// The annotation of the list's items.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
