//! Immutable, validated value wrappers
//!
//! A [`TypedValue<K>`] holds a value of kind `K` that passed the kind's
//! validation once, at construction, and is kept in canonical form. Strict
//! constructors (`from_*`) return a [`ValidationError`]; tolerant ones
//! (`try_from_*`) return the [`Undefined`] sentinel or a caller default.
//! [`TypedCollection`] applies either policy element-wise.
//!
//! # Examples
//!
//! ```
//! use typed_values::kinds::{Integer, Uuid4};
//! use typed_values::{Mixed, Typed, TypedValue};
//!
//! let id = TypedValue::<Uuid4>::from_str("550E8400-E29B-41D4-A716-446655440000").unwrap();
//! assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
//!
//! let missing = TypedValue::<Integer>::try_from_mixed(&Mixed::List(vec![]));
//! assert!(missing.is_undefined());
//! assert!(missing.to_int().is_err());
//! ```

pub mod canonical;
mod capability;
mod collection;
pub mod errors;
mod kind;
pub mod kinds;
mod maybe;
mod mixed;
mod tolerant;
mod typed_value;
mod undefined;

pub use capability::Typed;
pub use collection::TypedCollection;
pub use errors::{UndefinedAccess, ValidationError};
pub use kind::{Kind, NumericKind};
pub use maybe::Maybe;
pub use mixed::Mixed;
pub use tolerant::{Fallback, TolerantFactory, tolerant_all};
pub use typed_value::TypedValue;
pub use undefined::{UNDEFINED, Undefined};
