/// A reference to a named type, e.g. `Int` or `User!`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(super) name: String,
    pub(super) nullable: bool,
}
impl NamedTypeAnnotation {
    /// The name of the referenced type.
    pub fn graphql_type_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
