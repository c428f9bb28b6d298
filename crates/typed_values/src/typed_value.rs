//! Generic typed value and its strict constructors
//!
//! # Examples
//!
//! ```
//! use typed_values::kinds::TinyInt;
//! use typed_values::TypedValue;
//!
//! let value = TypedValue::<TinyInt>::from_int(127).unwrap();
//! assert_eq!(*value.value(), 127);
//!
//! assert!(TypedValue::<TinyInt>::from_int(128).is_err());
//! assert!(TypedValue::<TinyInt>::from_str("128.0").is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::capability::Typed;
use crate::errors::{UndefinedAccess, ValidationError};
use crate::kind::{Kind, NumericKind};
use crate::maybe::Maybe;
use crate::mixed::Mixed;
use crate::tolerant::{Fallback, recover};
use crate::undefined::Undefined;

/// An immutable value of kind `K`
///
/// The held value has passed `K`'s validation exactly once, at construction,
/// and is in canonical form.
pub struct TypedValue<K: Kind> {
    value: K::Native,
    kind: PhantomData<fn() -> K>,
}

impl<K: Kind> TypedValue<K> {
    pub(crate) const fn new_unchecked(value: K::Native) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Create a value from its native representation
    pub fn from_native(value: K::Native) -> Result<Self, ValidationError> {
        K::admit(value).map(Self::new_unchecked)
    }

    /// Create a value from text
    ///
    /// Runs the kind's syntactic, canonicalization and round-trip checks,
    /// then its range checks.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, ValidationError> {
        let parsed = K::parse(text)?;
        Self::from_native(parsed)
    }

    /// Create a value from dynamic input
    pub fn from_mixed(input: &Mixed) -> Result<Self, ValidationError> {
        let text = input.to_text()?;
        Self::from_str(&text)
    }

    /// Create a value from an integer, coerced through its text form
    pub fn from_int(value: i64) -> Result<Self, ValidationError> {
        Self::from_mixed(&Mixed::Int(value))
    }

    /// Create a value from a float, coerced through its text form
    pub fn from_float(value: f64) -> Result<Self, ValidationError> {
        Self::from_mixed(&Mixed::Float(value))
    }

    /// Create a value from a boolean, coerced through its text form
    pub fn from_bool(value: bool) -> Result<Self, ValidationError> {
        Self::from_mixed(&Mixed::Bool(value))
    }

    /// Tolerant [`from_str`](Self::from_str): invalid input yields `Undefined`
    pub fn try_from_str(text: &str) -> Maybe<K> {
        Self::try_from_str_or(text, Undefined).into()
    }

    /// Tolerant [`from_native`](Self::from_native)
    pub fn try_from_native(value: K::Native) -> Maybe<K> {
        recover(K::NAME, Self::from_native(value), Undefined).into()
    }

    /// Tolerant [`from_mixed`](Self::from_mixed)
    pub fn try_from_mixed(input: &Mixed) -> Maybe<K> {
        Self::try_from_mixed_or(input, Undefined).into()
    }

    /// Tolerant [`from_int`](Self::from_int)
    pub fn try_from_int(value: i64) -> Maybe<K> {
        recover(K::NAME, Self::from_int(value), Undefined).into()
    }

    /// Tolerant [`from_float`](Self::from_float)
    pub fn try_from_float(value: f64) -> Maybe<K> {
        recover(K::NAME, Self::from_float(value), Undefined).into()
    }

    /// Tolerant [`from_bool`](Self::from_bool)
    pub fn try_from_bool(value: bool) -> Maybe<K> {
        recover(K::NAME, Self::from_bool(value), Undefined).into()
    }

    /// Tolerant [`from_str`](Self::from_str) with a caller-supplied default
    ///
    /// The default is returned verbatim and may be of any type.
    pub fn try_from_str_or<D>(text: &str, default: D) -> Fallback<Self, D> {
        recover(K::NAME, Self::from_str(text), default)
    }

    /// Tolerant [`from_mixed`](Self::from_mixed) with a caller-supplied default
    pub fn try_from_mixed_or<D>(input: &Mixed, default: D) -> Fallback<Self, D> {
        recover(K::NAME, Self::from_mixed(input), default)
    }

    /// The canonical native value
    pub const fn value(&self) -> &K::Native {
        &self.value
    }

    /// Consume the wrapper, returning the canonical native value
    pub fn into_inner(self) -> K::Native {
        self.value
    }

    /// JSON projection of the canonical value
    pub fn to_json(&self) -> serde_json::Value {
        K::project(&self.value)
    }
}

impl<K: NumericKind> TypedValue<K> {
    /// Integer projection
    pub fn to_int(&self) -> i64 {
        K::as_i64(&self.value)
    }

    /// Floating-point projection
    pub fn to_float(&self) -> f64 {
        K::as_f64(&self.value)
    }
}

impl<K: Kind> Typed for TypedValue<K> {
    fn kind_name(&self) -> &'static str {
        K::NAME
    }

    fn is_undefined(&self) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        K::render(&self.value).is_empty()
    }

    fn to_text(&self) -> Result<String, UndefinedAccess> {
        Ok(K::render(&self.value))
    }

    fn to_json(&self) -> Result<serde_json::Value, UndefinedAccess> {
        Ok(K::project(&self.value))
    }
}

impl<K: Kind> Clone for TypedValue<K> {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.value.clone())
    }
}

impl<K: Kind> Copy for TypedValue<K> where K::Native: Copy {}

impl<K: Kind> fmt::Debug for TypedValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::NAME, self.value)
    }
}

impl<K: Kind> fmt::Display for TypedValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&K::render(&self.value))
    }
}

impl<K: Kind> PartialEq for TypedValue<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: Kind> Eq for TypedValue<K> where K::Native: Eq {}

impl<K: Kind> Hash for TypedValue<K>
where
    K::Native: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: Kind> PartialOrd for TypedValue<K>
where
    K::Native: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K: Kind> Ord for TypedValue<K>
where
    K::Native: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: Kind> FromStr for TypedValue<K> {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_str(text)
    }
}

impl<K: Kind> TryFrom<&str> for TypedValue<K> {
    type Error = ValidationError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::from_str(text)
    }
}

impl<K: Kind> Serialize for TypedValue<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        K::project(&self.value).serialize(serializer)
    }
}

/// Custom deserialization that validates through [`TypedValue::from_mixed`]
impl<'de, K: Kind> Deserialize<'de> for TypedValue<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = Mixed::deserialize(deserializer)?;
        Self::from_mixed(&input).map_err(serde::de::Error::custom)
    }
}
