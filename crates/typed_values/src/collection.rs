//! Ordered collections of typed values
//!
//! # Examples
//!
//! ```
//! use typed_values::kinds::Integer;
//! use typed_values::{Mixed, TypedCollection};
//!
//! let raw: Vec<Mixed> = vec![1.into(), "bad".into(), 3.into()];
//!
//! let tolerant = TypedCollection::<Integer>::try_from_array(raw.clone());
//! assert_eq!(tolerant.len(), 3);
//! assert!(tolerant.has_undefined());
//! assert_eq!(tolerant.defined_items().len(), 2);
//!
//! assert!(TypedCollection::<Integer>::from_array(raw).is_err());
//! ```

use std::fmt;
use std::slice;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::errors::ValidationError;
use crate::kind::Kind;
use crate::maybe::Maybe;
use crate::mixed::Mixed;
use crate::tolerant::tolerant_all;
use crate::typed_value::TypedValue;

/// An immutable, ordered sequence of values of kind `K`
///
/// Members are either validated values or the `Undefined` sentinel; the
/// sentinel only appears in collections built tolerantly.
pub struct TypedCollection<K: Kind> {
    items: Vec<Maybe<K>>,
}

impl<K: Kind> TypedCollection<K> {
    /// Build a collection, failing on the first invalid element
    pub fn from_array<I>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<Mixed>,
    {
        let items = raw
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                TypedValue::<K>::from_mixed(&input.into())
                    .map(Maybe::Defined)
                    .map_err(|error| {
                        trace!(kind = K::NAME, index, %error, "collection element rejected");
                        error.at_index(index)
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    /// Build a collection with one member per input, invalid ones `Undefined`
    pub fn try_from_array<I>(raw: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Mixed>,
    {
        Self {
            items: tolerant_all::<TypedValue<K>, _>(raw),
        }
    }

    /// Build a collection from already validated values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = TypedValue<K>>,
    {
        Self {
            items: values.into_iter().map(Maybe::Defined).collect(),
        }
    }

    /// Number of members, sentinels included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`len`](Self::len)
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Check whether the collection has no members
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over members in order
    pub fn iter(&self) -> slice::Iter<'_, Maybe<K>> {
        self.items.iter()
    }

    /// Member at `index`
    pub fn get(&self, index: usize) -> Option<&Maybe<K>> {
        self.items.get(index)
    }

    /// Check whether any member is the sentinel
    pub fn has_undefined(&self) -> bool {
        self.items.iter().any(|item| !item.is_defined())
    }

    /// Number of sentinel members
    pub fn undefined_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_defined()).count()
    }

    /// The defined members, in order
    pub fn defined_items(&self) -> Vec<&TypedValue<K>> {
        self.items.iter().filter_map(Maybe::defined).collect()
    }

    /// Canonical native values of every member
    ///
    /// Fails if any member is the sentinel.
    pub fn to_natives(&self) -> Result<Vec<K::Native>, ValidationError> {
        self.project(|value| value.value().clone())
    }

    /// JSON projection of every member
    ///
    /// Fails if any member is the sentinel.
    pub fn to_json(&self) -> Result<serde_json::Value, ValidationError> {
        self.project(TypedValue::<K>::to_json)
            .map(serde_json::Value::Array)
    }

    fn project<T>(&self, f: impl Fn(&TypedValue<K>) -> T) -> Result<Vec<T>, ValidationError> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.defined().map(&f).ok_or(ValidationError::UndefinedMember {
                    kind: K::NAME,
                    index,
                })
            })
            .collect()
    }
}

impl<'a, K: Kind> IntoIterator for &'a TypedCollection<K> {
    type Item = &'a Maybe<K>;
    type IntoIter = slice::Iter<'a, Maybe<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Kind> Clone for TypedCollection<K> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<K: Kind> fmt::Debug for TypedCollection<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<K: Kind> PartialEq for TypedCollection<K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<K: Kind> Serialize for TypedCollection<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}
