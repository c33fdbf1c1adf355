use alloc::string::String;
use alloc::vec::Vec;

use indexmap::IndexMap;
use marshal_utils::hash::FixedHashState;

use crate::{Number, ValueKind};

// -----------------------------------------------------------------------------
// Map

/// Text-keyed map of [`Value`]s, iterated in insertion order.
///
/// Equality ignores the order of entries.
pub type Map = IndexMap<String, Value, FixedHashState>;

// -----------------------------------------------------------------------------
// Value

/// A node of the canonical value tree.
///
/// # Examples
///
/// ```
/// use marshal_value::{Map, Value};
///
/// let mut map = Map::default();
/// map.insert("x".into(), Value::from(1));
/// map.insert("tags".into(), Value::from(vec!["a", "b"]));
///
/// let value = Value::Map(map);
/// assert_eq!(value.to_string(), r#"{"x":1,"tags":["a","b"]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Returns the [`ValueKind`] of this node.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the number as `i64` if it is an integer in range.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Returns the number as `u64` if it is a non-negative integer.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    /// Returns the number as `f64`, integers are converted.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` if this is a map.
    ///
    /// ```
    /// use marshal_value::Value;
    ///
    /// let value: Value = [("x", 1)].into_iter().collect();
    /// assert_eq!(value.get("x"), Some(&Value::from(1)));
    /// assert_eq!(value.get("y"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(key)
    }
}
