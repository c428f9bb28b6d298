//! The `Kind` trait: one semantic domain of validated values
//!
//! A kind supplies data only: how text is canonicalized, how a native value
//! is admitted, and how the canonical value is rendered. The construction
//! lifecycle lives once in [`TypedValue`](crate::TypedValue).

use std::fmt;

use crate::errors::ValidationError;

/// A semantic domain of validated values
///
/// # Contract
///
/// - [`Kind::parse`] performs the syntactic check, canonicalization and any
///   round-trip check on textual input.
/// - [`Kind::admit`] normalizes a native value and applies range/domain
///   constraints. It runs after `parse` on every textual construction, so
///   range rules belong here and nowhere else.
/// - `parse(&render(v))` must reproduce `v` for every admitted `v`.
pub trait Kind: Sized + 'static {
    /// The native representation of a canonical value
    type Native: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Short, stable kind name used in errors and `is_type_of`
    const NAME: &'static str;

    /// Canonicalize textual input
    fn parse(text: &str) -> Result<Self::Native, ValidationError>;

    /// Normalize and validate a native value
    fn admit(value: Self::Native) -> Result<Self::Native, ValidationError>;

    /// Render the canonical textual form
    fn render(value: &Self::Native) -> String;

    /// JSON projection of a canonical value
    ///
    /// Defaults to the canonical text.
    fn project(value: &Self::Native) -> serde_json::Value {
        serde_json::Value::String(Self::render(value))
    }
}

/// Kinds whose values have a numeric projection
pub trait NumericKind: Kind {
    /// Integer projection (truncating for fractional kinds)
    fn as_i64(value: &Self::Native) -> i64;

    /// Floating-point projection
    fn as_f64(value: &Self::Native) -> f64;
}
