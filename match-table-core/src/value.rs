use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A loosely typed value as delivered by the fixtures endpoint.
///
/// The server does not guarantee the shape of most descriptor fields (ids may be numbers or
/// strings, team descriptors may be lists or objects). `Value` accepts any json document and
/// renders it the same way a browser would stringify it, except that a missing value renders as
/// an empty string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value would be considered set when used as a condition: not null,
    /// not `false`, not zero and not an empty string. Lists and objects are always set.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::U64(n) => *n != 0,
            Self::I64(n) => *n != 0,
            Self::F64(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::List(_) | Self::Object(_) => true,
        }
    }
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::Null
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => b.fmt(f),
            Self::U64(n) => n.fmt(f),
            Self::I64(n) => n.fmt(f),
            Self::F64(n) => n.fmt(f),
            Self::String(s) => f.write_str(s),
            Self::List(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index != 0 {
                        f.write_str(",")?;
                    }

                    value.fmt(f)?;
                }

                Ok(())
            }
            Self::Object(_) => f.write_str("[object Object]"),
        }
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<u64> for Value {
    #[inline]
    fn from(n: u64) -> Self {
        Self::U64(n)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(n: i64) -> Self {
        Self::I64(n)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
