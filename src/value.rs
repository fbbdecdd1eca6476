use std::{collections::HashMap, fmt};

macro_rules! from {
    ($to:ty, $variant:ident, $($from:ty),+) => {
        $(impl From<$from> for $to {
            fn from(value: $from) -> Self {
                Self::$variant(value.into())
            }
        })+
    };
}

/// A single typed value stored in a [`Document`](crate::Document) field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Value {
    /// Empty value.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit unsigned integer.
    Uint(u64),
    /// 64-bit floating point number.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Raw byte string.
    Blob(Vec<u8>),
    /// List of values.
    List(Vec<Value>),
    /// Map of values, keyed by field name.
    Map(HashMap<String, Value>),
}

impl Value {
    /// Whether this value is the empty value.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// If this value is a boolean, return the associated `bool`. Return `None` otherwise.
    ///
    /// ```
    /// # use vellum::Value;
    /// let v = Value::from(true);
    ///
    /// assert_eq!(Some(true), v.as_bool());
    /// assert_eq!(None, v.as_i64());
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// If this value is a 64-bit signed integer, return the associated `i64`. Return `None`
    /// otherwise.
    #[inline]
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// If this value is a 64-bit unsigned integer, return the associated `u64`. Return `None`
    /// otherwise.
    #[inline]
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(value) => Some(*value),
            _ => None,
        }
    }

    /// If this value is a floating point number, return the associated `f64`. Return `None`
    /// otherwise.
    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// If this value is a string, return the associated `str`. Return `None` otherwise.
    ///
    /// ```
    /// # use vellum::Value;
    /// let v = Value::from("hello");
    ///
    /// assert_eq!(Some("hello"), v.as_str());
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// If this value is a byte string, return the associated bytes. Return `None` otherwise.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Blob(value) => Some(value),
            _ => None,
        }
    }
}

from!(Value, Bool, bool);
from!(Value, Int, i8, i16, i32, i64, u8, u16, u32);
from!(Value, Uint, u64);
from!(Value, Float, f32, f64);
from!(Value, String, &str, String);
from!(Value, Blob, &[u8], Vec<u8>);
from!(Value, List, &[Self], Vec<Self>);
from!(Value, Map, HashMap<String, Self>);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("<nil>"),
            Self::Bool(value) => value.fmt(f),
            Self::Int(value) => value.fmt(f),
            Self::Uint(value) => value.fmt(f),
            Self::Float(value) => value.fmt(f),
            Self::String(value) => value.fmt(f),
            Self::Blob(value) => write!(f, "{value:?}"),
            Self::List(value) => write!(f, "{value:?}"),
            Self::Map(value) => write!(f, "{value:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Value;

    #[test]
    fn conversions() {
        assert_eq!(Value::Int(42), Value::from(42_u8));
        assert_eq!(Value::Int(-7), Value::from(-7_i32));
        assert_eq!(Value::Uint(u64::MAX), Value::from(u64::MAX));
        assert_eq!(Value::Bool(true), Value::from(true));
        assert_eq!(Value::String("abc".to_owned()), Value::from("abc"));
        assert_eq!(Value::Blob(vec![1, 2, 3]), Value::from(vec![1_u8, 2, 3]));
        assert_eq!(
            Value::List(vec![Value::Int(1), Value::Int(2)]),
            Value::from(vec![Value::from(1), Value::from(2)])
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Some(10), Value::from(10).as_i64());
        assert_eq!(None, Value::from(10).as_u64());
        assert_eq!(Some(1.5), Value::from(1.5).as_f64());
        assert_eq!(Some("x"), Value::from("x").as_str());
        assert_eq!(Some(&[1_u8, 2][..]), Value::from(vec![1_u8, 2]).as_bytes());
        assert!(Value::Nil.is_nil());
        assert!(!Value::from(0).is_nil());
    }

    #[test]
    fn display() {
        assert_eq!("<nil>", Value::Nil.to_string());
        assert_eq!("42", Value::from(42).to_string());
        assert_eq!("hello", Value::from("hello").to_string());
        assert_eq!(
            "[Int(1), Int(2)]",
            Value::from(vec![Value::from(1), Value::from(2)]).to_string()
        );
    }

    #[test]
    fn map_equality() {
        let mut map = HashMap::new();
        map.insert("a".to_owned(), Value::from(1));
        assert_eq!(Value::from(map.clone()), Value::Map(map));
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn serialize_round_trip() {
        let value = Value::from(vec![Value::from(1), Value::from("two")]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(value, serde_json::from_str::<Value>(&json).unwrap());
    }
}
