use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A named type defined within a [`Schema`](crate::schema::Schema).
///
/// Cloning is cheap: every variant is reference counted. Two
/// [`GraphQLType`]s are equal when they refer to the same definition.
#[derive(Clone)]
pub enum GraphQLType {
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
    Interface(Arc<InterfaceType>),
    Object(Arc<ObjectType>),
    Scalar(Arc<ScalarType>),
    Union(Arc<UnionType>),
}
impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn as_enum(&self) -> Option<&Arc<EnumType>> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&Arc<InputObjectType>> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&Arc<InterfaceType>> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&Arc<ScalarType>> {
        if let Self::Scalar(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&Arc<UnionType>> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    /// Interfaces and unions.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Objects, interfaces and unions.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Scalars and enums.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    /// https://spec.graphql.org/October2021/#IsInputType()
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    /// https://spec.graphql.org/October2021/#IsOutputType()
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    /// The output fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// The interfaces an object or interface type implements. Empty for
    /// every other kind.
    pub fn interface_names(&self) -> Vec<&str> {
        match self {
            Self::Interface(t) => t.interface_names(),
            Self::Object(t) => t.interface_names(),
            _ => vec![],
        }
    }
}
impl PartialEq for GraphQLType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Enum(a), Self::Enum(b)) => Arc::ptr_eq(a, b),
            (Self::InputObject(a), Self::InputObject(b)) => Arc::ptr_eq(a, b),
            (Self::Interface(a), Self::Interface(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Scalar(a), Self::Scalar(b)) => Arc::ptr_eq(a, b),
            (Self::Union(a), Self::Union(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
impl fmt::Debug for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphQLType::{:?}({})", self.kind(), self.name())
    }
}

impl From<EnumType> for GraphQLType {
    fn from(t: EnumType) -> Self {
        Self::Enum(Arc::new(t))
    }
}

impl From<InputObjectType> for GraphQLType {
    fn from(t: InputObjectType) -> Self {
        Self::InputObject(Arc::new(t))
    }
}

impl From<InterfaceType> for GraphQLType {
    fn from(t: InterfaceType) -> Self {
        Self::Interface(Arc::new(t))
    }
}

impl From<ObjectType> for GraphQLType {
    fn from(t: ObjectType) -> Self {
        Self::Object(Arc::new(t))
    }
}

impl From<ScalarType> for GraphQLType {
    fn from(t: ScalarType) -> Self {
        Self::Scalar(Arc::new(t))
    }
}

impl From<UnionType> for GraphQLType {
    fn from(t: UnionType) -> Self {
        Self::Union(Arc::new(t))
    }
}
