//! Capability surface shared by typed values and the sentinel

use crate::errors::UndefinedAccess;

/// Queries every typed value and the [`Undefined`](crate::Undefined) sentinel answer
///
/// `is_undefined` is the discriminator: it is `true` only for the sentinel.
/// The projections fail with [`UndefinedAccess`] on the sentinel and always
/// succeed on a typed value.
pub trait Typed {
    /// Name of the value's kind
    fn kind_name(&self) -> &'static str;

    /// `true` only for the sentinel
    fn is_undefined(&self) -> bool;

    /// `true` for the sentinel and for values whose canonical text is empty
    fn is_empty(&self) -> bool;

    /// Canonical textual form
    fn to_text(&self) -> Result<String, UndefinedAccess>;

    /// JSON projection, consistent with `to_text`
    fn to_json(&self) -> Result<serde_json::Value, UndefinedAccess>;

    /// Check whether the value's kind is one of `names`
    fn is_type_of(&self, names: &[&str]) -> bool {
        let kind = self.kind_name();
        names.iter().any(|name| *name == kind)
    }
}
