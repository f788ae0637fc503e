//! Conversion of raw switch text into typed values
//!
//! Every switch carries one of a closed set of value kinds. The kind decides whether the switch
//! needs an explicit `=value` and how the raw text is turned into a typed value when it is read.

use crate::error::Error;
use std::fmt;

/// The family a switch's value type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    String,
}

impl ValueKind {
    /// Whether a switch of this kind must be given an explicit `=value`.
    ///
    /// Booleans are set by presence alone, every other kind needs text to convert.
    pub fn requires_value(self) -> bool {
        !matches!(self, ValueKind::Boolean)
    }

    /// The name shown in usage text and diagnostics
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Boolean => "bool",
            ValueKind::Integer => "int",
            ValueKind::Float => "number",
            ValueKind::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A typed value whose concrete type is only known at runtime.
///
/// Used to keep defaults of differently-typed switches in one registry, and to read values when
/// walking over all declared switches.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Boolean,
            Value::I32(_) | Value::I64(_) | Value::U32(_) | Value::U64(_) | Value::Usize(_) => {
                ValueKind::Integer
            }
            Value::F32(_) | Value::F64(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::String,
        }
    }

    /// Reads `raw` as the same concrete type as `self`, falling back to `self` when `raw` is
    /// `None`
    pub(crate) fn read_like(&self, raw: Option<&str>) -> Result<Value, Error> {
        Ok(match self {
            Value::Bool(d) => Value::Bool(bool::read(raw, d)?),
            Value::I32(d) => Value::I32(i32::read(raw, d)?),
            Value::I64(d) => Value::I64(i64::read(raw, d)?),
            Value::U32(d) => Value::U32(u32::read(raw, d)?),
            Value::U64(d) => Value::U64(u64::read(raw, d)?),
            Value::Usize(d) => Value::Usize(usize::read(raw, d)?),
            Value::F32(d) => Value::F32(f32::read(raw, d)?),
            Value::F64(d) => Value::F64(f64::read(raw, d)?),
            Value::Str(d) => Value::Str(String::read(raw, d)?),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Usize(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
        }
    }
}

/// A type a switch can be declared with
pub trait SwitchValue: Clone + Sized + 'static {
    const KIND: ValueKind;

    /// Converts raw switch text into a value of this type
    fn convert(raw: &str) -> Result<Self, Error>;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;

    /// Produces the value of a switch given its raw text (`None` when the switch was absent)
    fn read(raw: Option<&str>, default: &Self) -> Result<Self, Error> {
        match raw {
            Some(raw) => Self::convert(raw),
            None => Ok(default.clone()),
        }
    }
}

impl SwitchValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn convert(raw: &str) -> Result<Self, Error> {
        match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(conversion_error::<Self>(raw)),
        }
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    // Presence alone means true, whatever text came with it.
    fn read(raw: Option<&str>, default: &Self) -> Result<Self, Error> {
        Ok(raw.is_some() || *default)
    }
}

impl SwitchValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn convert(raw: &str) -> Result<Self, Error> {
        Ok(raw.to_string())
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(v) => Some(v.clone()),
            _ => None,
        }
    }
}

macro_rules! numeric_switch_value {
    ($($ty:ty => $variant:ident, $kind:ident;)*) => {
        $(
            impl SwitchValue for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                fn convert(raw: &str) -> Result<Self, Error> {
                    raw.parse::<$ty>().map_err(|_| conversion_error::<Self>(raw))
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

numeric_switch_value! {
    i32 => I32, Integer;
    i64 => I64, Integer;
    u32 => U32, Integer;
    u64 => U64, Integer;
    usize => Usize, Integer;
    f32 => F32, Float;
    f64 => F64, Float;
}

fn conversion_error<T: SwitchValue>(raw: &str) -> Error {
    Error::ValueConversion {
        raw: raw.to_string(),
        kind: T::KIND,
    }
}
