use crate::types::Field;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

type FieldsFn<F> = dyn Fn() -> IndexMap<String, F> + Send + Sync;

/// The fields of an object, interface or input object type, either given
/// up front or produced on first use.
///
/// Deferring the field map lets mutually recursive types refer to each
/// other. The schema builder forces every thunk exactly once, so executing
/// against a built schema never runs user code to compute fields.
#[derive(Clone)]
pub struct FieldsThunk<F = Field> {
    fields: Arc<OnceLock<IndexMap<String, F>>>,
    thunk: Option<Arc<FieldsFn<F>>>,
}
impl<F> FieldsThunk<F> {
    pub fn ready(fields: IndexMap<String, F>) -> Self {
        Self {
            fields: Arc::new(OnceLock::from(fields)),
            thunk: None,
        }
    }

    pub fn lazy<T>(thunk: T) -> Self
    where
        T: Fn() -> IndexMap<String, F> + Send + Sync + 'static,
    {
        Self {
            fields: Arc::new(OnceLock::new()),
            thunk: Some(Arc::new(thunk)),
        }
    }

    /// The field map, computing it on first call.
    pub fn get(&self) -> &IndexMap<String, F> {
        self.fields.get_or_init(|| match &self.thunk {
            Some(thunk) => thunk(),
            None => IndexMap::new(),
        })
    }

    pub fn is_forced(&self) -> bool {
        self.fields.get().is_some()
    }
}
impl<F> Default for FieldsThunk<F> {
    fn default() -> Self {
        Self::ready(IndexMap::new())
    }
}
impl<F: fmt::Debug> fmt::Debug for FieldsThunk<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fields.get() {
            Some(fields) => f.debug_tuple("FieldsThunk").field(fields).finish(),
            None => f.write_str("FieldsThunk(<unforced>)"),
        }
    }
}
