use crate::ast::AstKind;
use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Name;
use crate::printer;
use inherent::inherent;

/// An input value literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    /// `true` if this literal, or anything nested in it, references a
    /// variable.
    pub fn contains_variables(&self) -> bool {
        match self {
            Value::Variable(_) => true,
            Value::List(list) => list.values.iter().any(Value::contains_variables),
            Value::Object(obj) => obj.fields.iter().any(|f| f.value.contains_variables()),
            Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Boolean(_)
            | Value::Null(_)
            | Value::Enum(_) => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_value(self))
    }
}

#[inherent]
impl AstNode for Value {
    pub fn kind(&self) -> AstKind {
        match self {
            Value::Variable(_) => AstKind::Variable,
            Value::Int(_) => AstKind::IntValue,
            Value::Float(_) => AstKind::FloatValue,
            Value::String(_) => AstKind::StringValue,
            Value::Boolean(_) => AstKind::BooleanValue,
            Value::Null(_) => AstKind::NullValue,
            Value::Enum(_) => AstKind::EnumValue,
            Value::List(_) => AstKind::ListValue,
            Value::Object(_) => AstKind::ObjectValue,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Value::Variable(v) => &v.loc,
            Value::Int(v) => &v.loc,
            Value::Float(v) => &v.loc,
            Value::String(v) => &v.loc,
            Value::Boolean(v) => &v.loc,
            Value::Null(v) => &v.loc,
            Value::Enum(v) => &v.loc,
            Value::List(v) => &v.loc,
            Value::Object(v) => &v.loc,
        }
    }

    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&printer::print_value(self));
    }
}

/// `$name`
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub loc: Location,
}

/// An integer literal, kept as written. Literals too large for an `i64`
/// still parse; the input type reading them decides whether they fit.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub raw: String,
    pub loc: Location,
}
impl IntValue {
    pub fn new(value: i64, loc: Location) -> Self {
        Self {
            raw: value.to_string(),
            loc,
        }
    }

    /// `None` when the literal does not fit in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.raw.parse().ok()
    }

    /// The literal read as a float; `None` if it overflows to infinity.
    pub fn as_f64(&self) -> Option<f64> {
        finite_f64(&self.raw)
    }
}

/// A float literal, kept as written.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub raw: String,
    pub loc: Location,
}
impl FloatValue {
    /// A literal spelling `value`. Non-finite values have no literal form
    /// and must not be passed.
    pub fn new(value: f64, loc: Location) -> Self {
        Self {
            raw: printer::print_float(value),
            loc,
        }
    }

    /// `None` when the literal overflows to infinity.
    pub fn as_f64(&self) -> Option<f64> {
        finite_f64(&self.raw)
    }
}

fn finite_f64(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// A cooked string literal. `block` records whether it was written with
/// triple quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub block: bool,
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Location,
}

/// `{ a: 1, b: 2 }`. The parser guarantees field names are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Location,
}

impl ObjectValue {
    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|f| f.name.value == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Location,
}

/// Implements `AstNode` for a value node, given how to print it.
macro_rules! value_node {
    ($node:ident, $kind:ident, |$this:ident| $print:expr) => {
        #[inherent]
        impl AstNode for $node {
            pub fn kind(&self) -> AstKind {
                AstKind::$kind
            }

            pub fn location(&self) -> &Location {
                &self.loc
            }

            pub fn append_source(&self, sink: &mut String) {
                let $this = self;
                sink.push_str(&$print);
            }
        }
    };
}

value_node!(Variable, Variable, |v| format!("${}", v.name.value));
value_node!(IntValue, IntValue, |v| v.raw.clone());
value_node!(FloatValue, FloatValue, |v| v.raw.clone());
value_node!(StringValue, StringValue, |v| printer::print_string_value(v));
value_node!(BooleanValue, BooleanValue, |v| v.value.to_string());
value_node!(NullValue, NullValue, |_v| "null".to_string());
value_node!(EnumValue, EnumValue, |v| v.value.clone());
value_node!(ListValue, ListValue, |v| printer::print_list_value(v));
value_node!(ObjectValue, ObjectValue, |v| printer::print_object_value(v));
value_node!(ObjectField, ObjectField, |v| printer::print_object_field(v));
