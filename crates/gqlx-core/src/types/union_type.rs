use crate::Value;
use crate::execution::ResolveInfo;
use crate::types::ResolveTypeFn;
use crate::types::TypeBuildError;
use crate::types::type_build_error::validate_name;
use std::fmt;
use std::sync::Arc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone)]
pub struct UnionType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    resolve_type: Option<ResolveTypeFn>,
}
impl UnionType {
    pub fn builder(name: impl Into<String>) -> UnionTypeBuilder {
        UnionTypeBuilder {
            name: name.into(),
            description: None,
            members: vec![],
            duplicate_member: None,
            resolve_type: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The names of this union's member types, in declaration order.
    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(String::as_str).collect()
    }

    pub fn has_resolve_type(&self) -> bool {
        self.resolve_type.is_some()
    }

    pub(crate) fn resolve_type_fn(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }
}
impl fmt::Debug for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name)
            .field("members", &self.members)
            .field("has_resolve_type", &self.resolve_type.is_some())
            .finish()
    }
}

pub struct UnionTypeBuilder {
    name: String,
    description: Option<String>,
    members: Vec<String>,
    duplicate_member: Option<String>,
    resolve_type: Option<ResolveTypeFn>,
}
impl UnionTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn member(mut self, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        if self.members.contains(&type_name) {
            self.duplicate_member.get_or_insert(type_name);
        } else {
            self.members.push(type_name);
        }
        self
    }

    pub fn resolve_type<F>(mut self, resolve_type: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn build(self) -> Result<UnionType, TypeBuildError> {
        validate_name(&self.name)?;
        if let Some(member_name) = self.duplicate_member {
            return Err(TypeBuildError::DuplicatedUnionMember {
                type_name: self.name,
                member_name,
            });
        }
        Ok(UnionType {
            name: self.name,
            description: self.description,
            members: self.members,
            resolve_type: self.resolve_type,
        })
    }
}
