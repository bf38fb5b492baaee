use crate::ast;
use crate::types::GraphQLType;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeBuildError;
use crate::types::type_build_error::validate_name;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// The annotated type of a field, argument, input field or variable.
///
/// Non-null is a flag on each level rather than a wrapper, so a non-null
/// type can never wrap another non-null type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// A nullable reference to the type named `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable: true,
        })
    }

    /// A nullable list of `inner`.
    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner: Box::new(inner),
            nullable: true,
        })
    }

    /// This annotation, made non-null.
    pub fn non_null(self) -> Self {
        self.with_nullable(false)
    }

    /// This annotation with its outermost non-null stripped.
    pub fn to_nullable(&self) -> Self {
        self.clone().with_nullable(true)
    }

    fn with_nullable(self, nullable: bool) -> Self {
        match self {
            Self::List(annot) => Self::List(ListTypeAnnotation { nullable, ..annot }),
            Self::Named(annot) => Self::Named(NamedTypeAnnotation { nullable, ..annot }),
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable,
            Self::Named(annot) => annot.nullable,
        }
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner, .. }) => {
                inner.innermost_named_type_annotation()
            },
            Self::Named(named_annot) => named_annot,
        }
    }

    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }

    pub fn from_ast_type(ast_type: &ast::Type) -> Self {
        match ast_type {
            ast::Type::Named(named) => Self::named(named.name.as_str()),
            ast::Type::List(list) => Self::list(Self::from_ast_type(&list.item_type)),
            ast::Type::NonNull(non_null) => {
                Self::from_ast_type(&non_null.inner_type).non_null()
            },
        }
    }

    /// Whether a value of this type can always be used where `other` is
    /// expected. Abstract types in `other` accept their possible types.
    ///
    /// https://spec.graphql.org/October2021/#IsValidImplementationFieldType()
    pub fn is_subtype_of(
        &self,
        other: &TypeAnnotation,
        types_map: &IndexMap<String, GraphQLType>,
    ) -> bool {
        if !other.nullable() {
            return !self.nullable()
                && self.to_nullable().is_subtype_of(&other.to_nullable(), types_map);
        }
        if !self.nullable() {
            return self.to_nullable().is_subtype_of(other, types_map);
        }
        match (self, other) {
            (Self::List(sub), Self::List(sup)) => sub
                .inner_type_annotation()
                .is_subtype_of(sup.inner_type_annotation(), types_map),
            (Self::Named(sub), Self::Named(sup)) => {
                let sub_name = sub.graphql_type_name();
                let sup_name = sup.graphql_type_name();
                if sub_name == sup_name {
                    return true;
                }
                let sub_type = types_map.get(sub_name);
                match types_map.get(sup_name) {
                    Some(GraphQLType::Interface(_)) => sub_type
                        .map(|t| t.interface_names().into_iter().any(|name| name == sup_name))
                        .unwrap_or(false),
                    Some(GraphQLType::Union(union_type)) => {
                        matches!(sub_type, Some(GraphQLType::Object(_)))
                            && union_type.member_names().into_iter().any(|name| name == sub_name)
                    },
                    _ => false,
                }
            },
            _ => false,
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(annot) => write!(f, "[{}]", annot.inner)?,
            Self::Named(annot) => f.write_str(&annot.name)?,
        }
        if !self.nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// Parses the GraphQL spelling of a type reference: `Int`, `[Int!]!`, ...
impl FromStr for TypeAnnotation {
    type Err = TypeBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeBuildError::InvalidTypeAnnotation {
            annotation: s.to_string(),
        };
        let trimmed = s.trim();
        if let Some(inner) = trimmed.strip_suffix('!') {
            let inner = inner.parse::<TypeAnnotation>().map_err(|_| invalid())?;
            if !inner.nullable() {
                return Err(invalid());
            }
            return Ok(inner.non_null());
        }
        if let Some(inner) = trimmed.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(invalid)?;
            let inner = inner.parse::<TypeAnnotation>().map_err(|_| invalid())?;
            return Ok(Self::list(inner));
        }
        validate_name(trimmed).map_err(|_| invalid())?;
        Ok(Self::named(trimmed))
    }
}
