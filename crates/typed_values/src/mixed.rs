//! Dynamic input and its coercion to text
//!
//! Every kind accepts dynamic input by first reducing it to a string with
//! [`Mixed::to_text`] and then running its textual constructor. The coercion
//! rule is shared by all kinds:
//!
//! - numbers and booleans use their `Display` rendering (`5.0` becomes `"5"`)
//! - `Null` becomes the empty string
//! - a renderable object uses its `Display` rendering
//! - lists, maps, raw bytes and opaque objects cannot be rendered
//!
//! # Examples
//!
//! ```
//! use typed_values::Mixed;
//!
//! assert_eq!(Mixed::from(5.0).to_text().unwrap(), "5");
//! assert_eq!(Mixed::from(true).to_text().unwrap(), "true");
//! assert_eq!(Mixed::Null.to_text().unwrap(), "");
//! assert!(Mixed::List(vec![]).to_text().is_err());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::errors::ValidationError;

/// A dynamically-typed input value
#[derive(Clone)]
pub enum Mixed {
    /// Absence of a value
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// An unsigned integer too large for `i64`
    UInt(u64),
    /// A floating-point number
    Float(f64),
    /// A string
    Text(String),
    /// An object with a textual rendering
    Renderable(Arc<dyn fmt::Display + Send + Sync>),
    /// An ordered list
    List(Vec<Mixed>),
    /// A string-keyed map, in insertion order
    Map(Vec<(String, Mixed)>),
    /// Raw binary data
    Bytes(Vec<u8>),
    /// An object without a textual rendering, named by its type
    Opaque(&'static str),
}

impl Mixed {
    /// Wrap an object that renders itself as text
    pub fn renderable(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Renderable(Arc::new(value))
    }

    /// Short name of the input's shape
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Renderable(_) => "renderable object",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Bytes(_) => "bytes",
            Self::Opaque(name) => name,
        }
    }

    /// Reduce the input to text
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Uncoercible`] for structural or opaque input.
    pub fn to_text(&self) -> Result<Cow<'_, str>, ValidationError> {
        match self {
            Self::Null => Ok(Cow::Borrowed("")),
            Self::Bool(value) => Ok(Cow::Owned(value.to_string())),
            Self::Int(value) => Ok(Cow::Owned(value.to_string())),
            Self::UInt(value) => Ok(Cow::Owned(value.to_string())),
            // Negative zero renders as "-0", which no kind accepts
            Self::Float(value) if *value == 0.0 => Ok(Cow::Borrowed("0")),
            Self::Float(value) => Ok(Cow::Owned(value.to_string())),
            Self::Text(value) => Ok(Cow::Borrowed(value)),
            Self::Renderable(value) => Ok(Cow::Owned(value.to_string())),
            Self::List(_) | Self::Map(_) | Self::Bytes(_) | Self::Opaque(_) => {
                Err(ValidationError::Uncoercible {
                    shape: self.shape(),
                })
            },
        }
    }
}

impl fmt::Debug for Mixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::UInt(value) => f.debug_tuple("UInt").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Renderable(value) => f
                .debug_tuple("Renderable")
                .field(&value.to_string())
                .finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
            Self::Opaque(name) => f.debug_tuple("Opaque").field(name).finish(),
        }
    }
}

macro_rules! mixed_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Mixed {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

mixed_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Mixed {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<usize> for Mixed {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::UInt(value as u64), Self::Int)
    }
}

impl From<f64> for Mixed {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Mixed {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Mixed {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Mixed {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&[u8]> for Mixed {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<T: Into<Self>> From<Option<T>> for Mixed {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Mixed {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Mixed {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if let Some(uint) = number.as_u64() {
                    Self::UInt(uint)
                } else {
                    Self::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            },
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Deserializes any self-describing input into the matching variant
impl<'de> Deserialize<'de> for Mixed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
