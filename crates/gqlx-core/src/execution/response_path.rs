use crate::PathSegment;

/// One step of a [`ResponsePath`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathKey<'a> {
    Key(&'a str),
    Index(usize),
}

/// The path from the response root to the field being executed, as a
/// singly linked list that borrows from its parent. Extending a path never
/// copies it.
#[derive(Clone, Copy, Debug)]
pub struct ResponsePath<'a> {
    pub prev: Option<&'a ResponsePath<'a>>,
    pub key: PathKey<'a>,
}
impl<'a> ResponsePath<'a> {
    pub fn root(key: &'a str) -> Self {
        Self {
            prev: None,
            key: PathKey::Key(key),
        }
    }

    pub fn with_key(&'a self, key: &'a str) -> Self {
        Self {
            prev: Some(self),
            key: PathKey::Key(key),
        }
    }

    pub fn with_index(&'a self, index: usize) -> Self {
        Self {
            prev: Some(self),
            key: PathKey::Index(index),
        }
    }

    /// The path rendered from the root down, as it appears in errors.
    pub fn as_list(&self) -> Vec<PathSegment> {
        let mut segments = vec![];
        let mut current = Some(self);
        while let Some(path) = current {
            segments.push(match path.key {
                PathKey::Key(key) => PathSegment::Key(key.to_string()),
                PathKey::Index(index) => PathSegment::Index(index),
            });
            current = path.prev;
        }
        segments.reverse();
        segments
    }
}
