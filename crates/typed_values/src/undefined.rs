//! The `Undefined` sentinel
//!
//! `Undefined` stands in for "no valid value". It answers the same
//! capability queries as a typed value, but every accessor that would expose
//! a value fails with [`UndefinedAccess`].
//!
//! # Examples
//!
//! ```
//! use typed_values::{Typed, Undefined, UNDEFINED};
//!
//! assert!(UNDEFINED.is_undefined());
//! assert!(UNDEFINED.is_empty());
//! assert!(UNDEFINED.to_int().is_err());
//!
//! // Tolerant construction of the sentinel kind always succeeds
//! assert_eq!(Undefined::try_from_str("anything"), UNDEFINED);
//! ```

use serde::{Serialize, Serializer};

use crate::capability::Typed;
use crate::errors::UndefinedAccess;
use crate::mixed::Mixed;

/// The "no value" sentinel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Undefined;

/// Shared sentinel instance
pub const UNDEFINED: Undefined = Undefined;

impl Undefined {
    /// Kind name reported by the sentinel
    pub const NAME: &'static str = "undefined";

    /// Create the sentinel
    pub const fn new() -> Self {
        Self
    }

    /// Always succeeds with another sentinel
    pub const fn try_from_str(_text: &str) -> Self {
        Self
    }

    /// Always succeeds with another sentinel
    pub const fn try_from_int(_value: i64) -> Self {
        Self
    }

    /// Always succeeds with another sentinel
    pub const fn try_from_float(_value: f64) -> Self {
        Self
    }

    /// Always succeeds with another sentinel
    pub const fn try_from_bool(_value: bool) -> Self {
        Self
    }

    /// Always succeeds with another sentinel
    pub const fn try_from_mixed(_input: &Mixed) -> Self {
        Self
    }

    /// Fails: the sentinel has no value
    pub fn value<T>(&self) -> Result<T, UndefinedAccess> {
        Err(UndefinedAccess::new("value"))
    }

    /// Fails: the sentinel has no integer projection
    pub const fn to_int(&self) -> Result<i64, UndefinedAccess> {
        Err(UndefinedAccess::new("to_int"))
    }

    /// Fails: the sentinel has no float projection
    pub const fn to_float(&self) -> Result<f64, UndefinedAccess> {
        Err(UndefinedAccess::new("to_float"))
    }

    /// Fails: the sentinel has no boolean projection
    pub const fn to_bool(&self) -> Result<bool, UndefinedAccess> {
        Err(UndefinedAccess::new("to_bool"))
    }

    /// Fails: the sentinel has no array projection
    pub fn to_vec<T>(&self) -> Result<Vec<T>, UndefinedAccess> {
        Err(UndefinedAccess::new("to_vec"))
    }
}

impl Typed for Undefined {
    fn kind_name(&self) -> &'static str {
        Self::NAME
    }

    fn is_undefined(&self) -> bool {
        true
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn to_text(&self) -> Result<String, UndefinedAccess> {
        Err(UndefinedAccess::new("to_text"))
    }

    fn to_json(&self) -> Result<serde_json::Value, UndefinedAccess> {
        Err(UndefinedAccess::new("to_json"))
    }
}

/// Serialization always fails
impl Serialize for Undefined {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(serde::ser::Error::custom(UndefinedAccess::new("serialize")))
    }
}
