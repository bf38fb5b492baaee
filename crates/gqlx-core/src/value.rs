use crate::execution::FieldError;
use crate::execution::ResolveInfo;
use crate::execution::ResolverResult;
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Gives trait objects access to their concrete type.
///
/// Implemented for every `'static` type, so implementors of
/// [`ObjectValue`] get it for free.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}
impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A host-language object exposed to the executor.
///
/// The default field resolver reads fields of an object value through
/// [`ObjectValue::attribute`]. An attribute that is a [`Value::Callable`]
/// behaves like a method: it is invoked once with the field's arguments.
pub trait ObjectValue: AsAny + fmt::Debug + Send + Sync {
    /// Looks up the attribute named `name`, if the object has one.
    fn attribute(&self, name: &str) -> Option<Value>;

    /// The name of the GraphQL object type this value represents.
    ///
    /// Used to resolve abstract types when neither the abstract type nor
    /// its possible types provide their own resolution hooks.
    fn type_name(&self) -> Option<&str> {
        None
    }
}
impl dyn ObjectValue {
    pub fn downcast_ref<T: ObjectValue + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

type CallableFn =
    dyn Fn(&ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync;

/// A function-valued attribute, invoked by the default resolver with the
/// field's [`ResolveInfo`] and coerced arguments.
#[derive(Clone)]
pub struct Callable(Arc<CallableFn>);
impl Callable {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    pub fn call(&self, info: &ResolveInfo<'_>, args: &Arguments) -> ResolverResult {
        (self.0)(info, args)
    }
}
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

type DeferredFn = dyn Fn() -> ResolverResult + Send + Sync;

/// A value that is not available yet.
///
/// Resolvers may return a deferred value instead of a settled one; the
/// executor settles it exactly once, right before the value is completed.
#[derive(Clone)]
pub struct Deferred(Arc<DeferredFn>);
impl Deferred {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn() -> ResolverResult + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    /// Waits for the value to settle.
    pub fn settle(&self) -> ResolverResult {
        (self.0)()
    }
}
impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deferred(..)")
    }
}

/// A runtime value flowing through resolvers and value coercion.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    /// An insertion-ordered mapping; resolved by key.
    Map(IndexMap<String, Value>),
    /// A host object; resolved by attribute.
    Object(Arc<dyn ObjectValue>),
    Callable(Callable),
    Deferred(Deferred),
    /// A failure carried as a value. Completing it raises the error.
    Error(FieldError),
}
impl Value {
    pub fn object(object: impl ObjectValue + 'static) -> Self {
        Self::Object(Arc::new(object))
    }

    pub fn callable<F>(func: F) -> Self
    where
        F: Fn(&ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync + 'static,
    {
        Self::Callable(Callable::new(func))
    }

    pub fn deferred<F>(func: F) -> Self
    where
        F: Fn() -> ResolverResult + Send + Sync + 'static,
    {
        Self::Deferred(Deferred::new(func))
    }

    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn list<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Ints widen to floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<dyn ObjectValue>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Looks up `key` in a map value or an object value's attributes.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Self::Map(entries) => entries.get(key).cloned(),
            Self::Object(object) => object.attribute(key),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Callable(a), Self::Callable(b)) => Arc::ptr_eq(&a.0, &b.0),
            (Self::Deferred(a), Self::Deferred(b)) => Arc::ptr_eq(&a.0, &b.0),
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Boolean(value) => f.debug_tuple("Boolean").field(value).finish(),
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::String(value) => f.debug_tuple("String").field(value).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Object(object) => f.debug_tuple("Object").field(object).finish(),
            Self::Callable(callable) => callable.fmt(f),
            Self::Deferred(deferred) => deferred.fmt(f),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}

/// Renders a value for error messages: strings are quoted, maps print as
/// `{ key: value }`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::String(value) => {
                write!(f, "{}", serde_json::Value::String(value.clone()))
            },
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Map(entries) if entries.is_empty() => f.write_str("{}"),
            Self::Map(entries) => {
                f.write_str("{ ")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str(" }")
            },
            Self::Object(object) => match object.type_name() {
                Some(name) => write!(f, "<{name} object>"),
                None => f.write_str("<object>"),
            },
            Self::Callable(_) => f.write_str("<function>"),
            Self::Deferred(_) => f.write_str("<deferred>"),
            Self::Error(error) => write!(f, "<error: {}>", error.message()),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Map(entries)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

impl From<Deferred> for Value {
    fn from(deferred: Deferred) -> Self {
        Self::Deferred(deferred)
    }
}

impl From<FieldError> for Value {
    fn from(error: FieldError) -> Self {
        Self::Error(error)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Boolean(value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Self::Int(int),
                None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(value) => Self::String(value),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Value::from).collect())
            },
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// The coerced arguments of a field, keyed by argument name (or the
/// argument's out-name, when it declares one).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments(IndexMap<String, Value>);
impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> IndexMap<String, Value> {
        self.0
    }
}
impl From<IndexMap<String, Value>> for Arguments {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
