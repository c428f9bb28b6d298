//! A typed value or the `Undefined` sentinel

use std::fmt;

use serde::{Serialize, Serializer};

use crate::capability::Typed;
use crate::errors::UndefinedAccess;
use crate::kind::{Kind, NumericKind};
use crate::kinds::Boolean;
use crate::tolerant::Fallback;
use crate::typed_value::TypedValue;
use crate::undefined::Undefined;

/// Either a value of kind `K` or the sentinel
///
/// Produced by tolerant constructors. Value accessors fail with
/// [`UndefinedAccess`] on the sentinel arm.
pub enum Maybe<K: Kind> {
    /// A validated value
    Defined(TypedValue<K>),
    /// The sentinel
    Undefined(Undefined),
}

impl<K: Kind> Maybe<K> {
    /// Check whether this holds a value
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Borrow the typed value, if any
    pub const fn defined(&self) -> Option<&TypedValue<K>> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined(_) => None,
        }
    }

    /// Take the typed value, if any
    pub fn into_defined(self) -> Option<TypedValue<K>> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined(_) => None,
        }
    }

    /// The canonical native value
    pub fn value(&self) -> Result<&K::Native, UndefinedAccess> {
        match self {
            Self::Defined(value) => Ok(value.value()),
            Self::Undefined(sentinel) => sentinel.value(),
        }
    }

    /// The typed value, or `default` for the sentinel
    pub fn or(self, default: TypedValue<K>) -> TypedValue<K> {
        self.into_defined().unwrap_or(default)
    }
}

impl<K: NumericKind> Maybe<K> {
    /// Integer projection
    pub fn to_int(&self) -> Result<i64, UndefinedAccess> {
        match self {
            Self::Defined(value) => Ok(value.to_int()),
            Self::Undefined(sentinel) => sentinel.to_int(),
        }
    }

    /// Floating-point projection
    pub fn to_float(&self) -> Result<f64, UndefinedAccess> {
        match self {
            Self::Defined(value) => Ok(value.to_float()),
            Self::Undefined(sentinel) => sentinel.to_float(),
        }
    }
}

impl Maybe<Boolean> {
    /// Boolean projection
    pub fn to_bool(&self) -> Result<bool, UndefinedAccess> {
        match self {
            Self::Defined(value) => Ok(*value.value()),
            Self::Undefined(sentinel) => sentinel.to_bool(),
        }
    }
}

impl<K: Kind> Typed for Maybe<K> {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Defined(value) => value.kind_name(),
            Self::Undefined(sentinel) => sentinel.kind_name(),
        }
    }

    fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined(_))
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Defined(value) => value.is_empty(),
            Self::Undefined(sentinel) => sentinel.is_empty(),
        }
    }

    fn to_text(&self) -> Result<String, UndefinedAccess> {
        match self {
            Self::Defined(value) => Typed::to_text(value),
            Self::Undefined(sentinel) => sentinel.to_text(),
        }
    }

    fn to_json(&self) -> Result<serde_json::Value, UndefinedAccess> {
        match self {
            Self::Defined(value) => Typed::to_json(value),
            Self::Undefined(sentinel) => sentinel.to_json(),
        }
    }
}

impl<K: Kind> From<TypedValue<K>> for Maybe<K> {
    fn from(value: TypedValue<K>) -> Self {
        Self::Defined(value)
    }
}

impl<K: Kind> From<Undefined> for Maybe<K> {
    fn from(sentinel: Undefined) -> Self {
        Self::Undefined(sentinel)
    }
}

impl<K: Kind> From<Fallback<TypedValue<K>, Undefined>> for Maybe<K> {
    fn from(fallback: Fallback<TypedValue<K>, Undefined>) -> Self {
        fallback.unify()
    }
}

impl<K: Kind> From<Maybe<K>> for Option<TypedValue<K>> {
    fn from(maybe: Maybe<K>) -> Self {
        maybe.into_defined()
    }
}

impl<K: Kind> Clone for Maybe<K> {
    fn clone(&self) -> Self {
        match self {
            Self::Defined(value) => Self::Defined(value.clone()),
            Self::Undefined(sentinel) => Self::Undefined(*sentinel),
        }
    }
}

impl<K: Kind> fmt::Debug for Maybe<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(value) => fmt::Debug::fmt(value, f),
            Self::Undefined(_) => f.write_str(Undefined::NAME),
        }
    }
}

impl<K: Kind> PartialEq for Maybe<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Defined(left), Self::Defined(right)) => left == right,
            (Self::Undefined(_), Self::Undefined(_)) => true,
            _ => false,
        }
    }
}

/// Serialization fails on the sentinel
impl<K: Kind> Serialize for Maybe<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Defined(value) => value.serialize(serializer),
            Self::Undefined(sentinel) => sentinel.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Float, Integer};

    fn defined(value: i64) -> Maybe<Integer> {
        TypedValue::<Integer>::from_int(value).unwrap().into()
    }

    #[test]
    fn defined_exposes_value() {
        let maybe = defined(9);
        assert!(maybe.is_defined());
        assert!(!maybe.is_undefined());
        assert_eq!(maybe.value(), Ok(&9));
        assert_eq!(maybe.to_int(), Ok(9));
        assert_eq!(maybe.to_float(), Ok(9.0));
        assert_eq!(maybe.to_text(), Ok("9".to_string()));
        assert_eq!(maybe.kind_name(), "integer");
    }

    #[test]
    fn undefined_poisons_accessors() {
        let maybe: Maybe<Integer> = Undefined.into();
        assert!(maybe.is_undefined());
        assert!(maybe.is_empty());
        assert_eq!(maybe.value(), Err(UndefinedAccess::new("value")));
        assert_eq!(maybe.to_int(), Err(UndefinedAccess::new("to_int")));
        assert_eq!(maybe.to_float(), Err(UndefinedAccess::new("to_float")));
        assert_eq!(maybe.to_text(), Err(UndefinedAccess::new("to_text")));
        assert_eq!(maybe.to_json(), Err(UndefinedAccess::new("to_json")));
        assert_eq!(maybe.kind_name(), "undefined");
    }

    #[test]
    fn boolean_projection() {
        let maybe = TypedValue::<Boolean>::try_from_str("true");
        assert_eq!(maybe.to_bool(), Ok(true));

        let maybe = TypedValue::<Boolean>::try_from_str("maybe");
        assert_eq!(maybe.to_bool(), Err(UndefinedAccess::new("to_bool")));
    }

    #[test]
    fn or_replaces_sentinel() {
        let fallback = TypedValue::<Float>::from_float(0.5).unwrap();
        let maybe = TypedValue::<Float>::try_from_str("oops");
        assert_eq!(maybe.or(fallback), fallback);
    }

    #[test]
    fn into_option() {
        let option: Option<TypedValue<Integer>> = defined(1).into();
        assert!(option.is_some());

        let option: Option<TypedValue<Integer>> = Maybe::<Integer>::from(Undefined).into();
        assert!(option.is_none());
    }

    #[test]
    fn equality() {
        assert_eq!(defined(1), defined(1));
        assert_ne!(defined(1), defined(2));
        assert_ne!(defined(1), Maybe::from(Undefined));
        assert_eq!(Maybe::<Integer>::from(Undefined), Maybe::from(Undefined));
    }

    #[test]
    fn serialization() {
        assert_eq!(serde_json::to_string(&defined(3)).unwrap(), "3");
        assert!(serde_json::to_string(&Maybe::<Integer>::from(Undefined)).is_err());
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", defined(4)), "integer(4)");
        assert_eq!(format!("{:?}", Maybe::<Integer>::from(Undefined)), "undefined");
    }
}
