//! The five scalars every schema can use: `Int`, `Float`, `String`,
//! `Boolean` and `ID`.
//!
//! Serialization is lenient (compatible host values are converted) while
//! parsing inputs is strict.

use crate::Value;
use crate::ast;
use crate::types::ScalarCoercionError;
use crate::types::ScalarType;
use gqlx_parser::printer::print_value;

/// Ints are limited to the integers an IEEE-754 double represents exactly.
pub const MAX_INT: i64 = 9_007_199_254_740_991;
pub const MIN_INT: i64 = -9_007_199_254_740_991;

pub const BUILT_IN_SCALAR_NAMES: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

pub fn is_built_in_scalar_name(name: &str) -> bool {
    BUILT_IN_SCALAR_NAMES.contains(&name)
}

/// The built-in scalar named `name`, if there is one.
pub fn built_in_scalar(name: &str) -> Option<ScalarType> {
    match name {
        "Int" => Some(int_type()),
        "Float" => Some(float_type()),
        "String" => Some(string_type()),
        "Boolean" => Some(boolean_type()),
        "ID" => Some(id_type()),
        _ => None,
    }
}

fn error(message: String) -> ScalarCoercionError {
    ScalarCoercionError::new(message)
}

fn int_in_range(num: i64) -> bool {
    (MIN_INT..=MAX_INT).contains(&num)
}

fn float_to_int(num: f64) -> Option<i64> {
    if num.fract() != 0.0 || !num.is_finite() {
        return None;
    }
    (num >= MIN_INT as f64 && num <= MAX_INT as f64).then_some(num as i64)
}

pub fn int_type() -> ScalarType {
    ScalarType::built_in(
        "Int",
        "The `Int` scalar type represents non-fractional signed whole numeric values. \
        Int can represent values between -(2^53 - 1) and 2^53 - 1.",
        serialize_int,
        |value| match value {
            Value::Int(num) if int_in_range(*num) => Ok(Value::Int(*num)),
            Value::Int(_) => Err(error(format!(
                "Int cannot represent non 53-bit signed integer value: {value}"
            ))),
            Value::Float(num) => float_to_int(*num).map(Value::Int).ok_or_else(|| {
                error(format!("Int cannot represent non-integer value: {value}"))
            }),
            _ => Err(error(format!("Int cannot represent non-integer value: {value}"))),
        },
        |literal| match literal {
            ast::Value::Int(int) => int
                .as_i64()
                .filter(|num| int_in_range(*num))
                .map(Value::Int)
                .ok_or_else(|| {
                    error(format!(
                        "Int cannot represent non 53-bit signed integer value: {}",
                        print_value(literal),
                    ))
                }),
            _ => Err(error(format!(
                "Int cannot represent non-integer value: {}",
                print_value(literal),
            ))),
        },
    )
}

fn serialize_int(value: &Value) -> Result<serde_json::Value, ScalarCoercionError> {
    let num = match value {
        Value::Boolean(b) => i64::from(*b),
        Value::Int(num) => *num,
        Value::Float(num) => float_to_int(*num).ok_or_else(|| {
            error(format!("Int cannot represent non-integer value: {value}"))
        })?,
        Value::String(s) if !s.trim().is_empty() => {
            let parsed = s.trim().parse::<f64>().ok().and_then(float_to_int);
            parsed.ok_or_else(|| {
                error(format!("Int cannot represent non-integer value: {value}"))
            })?
        },
        _ => return Err(error(format!("Int cannot represent non-integer value: {value}"))),
    };
    if !int_in_range(num) {
        return Err(error(format!(
            "Int cannot represent non 53-bit signed integer value: {value}"
        )));
    }
    Ok(serde_json::Value::from(num))
}

pub fn float_type() -> ScalarType {
    ScalarType::built_in(
        "Float",
        "The `Float` scalar type represents signed double-precision fractional values \
        as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point).",
        serialize_float,
        |value| match value {
            Value::Int(num) => Ok(Value::Float(*num as f64)),
            Value::Float(num) if num.is_finite() => Ok(Value::Float(*num)),
            _ => Err(error(format!("Float cannot represent non numeric value: {value}"))),
        },
        |literal| match literal {
            ast::Value::Int(ast::IntValue { raw, .. })
            | ast::Value::Float(ast::FloatValue { raw, .. }) => raw
                .parse::<f64>()
                .ok()
                .filter(|num| num.is_finite())
                .map(Value::Float)
                .ok_or_else(|| error(format!("Float cannot represent non numeric value: {raw}"))),
            _ => Err(error(format!(
                "Float cannot represent non numeric value: {}",
                print_value(literal),
            ))),
        },
    )
}

fn serialize_float(value: &Value) -> Result<serde_json::Value, ScalarCoercionError> {
    let num = match value {
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::Int(num) => *num as f64,
        Value::Float(num) => *num,
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    };
    serde_json::Number::from_f64(num)
        .map(serde_json::Value::Number)
        .ok_or_else(|| error(format!("Float cannot represent non numeric value: {value}")))
}

pub fn string_type() -> ScalarType {
    ScalarType::built_in(
        "String",
        "The `String` scalar type represents textual data, represented as UTF-8 \
        character sequences. The String type is most often used by GraphQL to \
        represent free-form human-readable text.",
        |value| match value {
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Boolean(b) => Ok(serde_json::Value::String(b.to_string())),
            Value::Int(num) => Ok(serde_json::Value::String(num.to_string())),
            Value::Float(num) if num.is_finite() => {
                Ok(serde_json::Value::String(num.to_string()))
            },
            _ => Err(error(format!("String cannot represent value: {value}"))),
        },
        |value| match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            _ => Err(error(format!("String cannot represent a non string value: {value}"))),
        },
        |literal| match literal {
            ast::Value::String(s) => Ok(Value::String(s.value.clone())),
            _ => Err(error(format!(
                "String cannot represent a non string value: {}",
                print_value(literal),
            ))),
        },
    )
}

pub fn boolean_type() -> ScalarType {
    ScalarType::built_in(
        "Boolean",
        "The `Boolean` scalar type represents `true` or `false`.",
        |value| match value {
            Value::Boolean(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Int(num) => Ok(serde_json::Value::Bool(*num != 0)),
            Value::Float(num) if num.is_finite() => Ok(serde_json::Value::Bool(*num != 0.0)),
            _ => Err(error(format!("Boolean cannot represent a non boolean value: {value}"))),
        },
        |value| match value {
            Value::Boolean(b) => Ok(Value::Boolean(*b)),
            _ => Err(error(format!("Boolean cannot represent a non boolean value: {value}"))),
        },
        |literal| match literal {
            ast::Value::Boolean(b) => Ok(Value::Boolean(b.value)),
            _ => Err(error(format!(
                "Boolean cannot represent a non boolean value: {}",
                print_value(literal),
            ))),
        },
    )
}

pub fn id_type() -> ScalarType {
    ScalarType::built_in(
        "ID",
        "The `ID` scalar type represents a unique identifier, often used to refetch \
        an object or as key for a cache. The ID type appears in a JSON response as a \
        String; however, it is not intended to be human-readable. When expected as an \
        input type, any string (such as `\"4\"`) or integer (such as `4`) input value \
        will be accepted as an ID.",
        |value| match value {
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Int(num) => Ok(serde_json::Value::String(num.to_string())),
            _ => Err(error(format!("ID cannot represent value: {value}"))),
        },
        |value| match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            Value::Int(num) => Ok(Value::String(num.to_string())),
            _ => Err(error(format!("ID cannot represent value: {value}"))),
        },
        |literal| match literal {
            ast::Value::String(s) => Ok(Value::String(s.value.clone())),
            ast::Value::Int(int) => Ok(Value::String(int.raw.clone())),
            _ => Err(error(format!(
                "ID cannot represent a non-string and non-integer value: {}",
                print_value(literal),
            ))),
        },
    )
}
