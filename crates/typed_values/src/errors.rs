//! Validation and access errors

use thiserror::Error;

/// Errors raised when an input does not satisfy a kind's constraints
///
/// This is the only error family tolerant constructors recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input does not have the textual shape the kind expects
    #[error("malformed {kind}: {input:?} ({reason})")]
    Malformed {
        kind: &'static str,
        input: String,
        reason: String,
    },

    /// Input is well-formed but outside the kind's domain
    #[error("{kind} out of range: {value} (expected {expected})")]
    OutOfRange {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// Input parses, but re-rendering it does not reproduce the input
    #[error("non-canonical {kind}: {input:?} renders as {canonical:?}")]
    RoundTrip {
        kind: &'static str,
        input: String,
        canonical: String,
    },

    /// A dynamic input has no textual rendering
    #[error("cannot render {shape} as text")]
    Uncoercible { shape: &'static str },

    /// An element of a collection failed validation
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<ValidationError>,
    },

    /// A collection projection met an undefined member
    #[error("{kind} collection has an undefined member at index {index}")]
    UndefinedMember { kind: &'static str, index: usize },
}

impl ValidationError {
    /// Create a malformed input error
    pub fn malformed(
        kind: &'static str,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            kind,
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(
        kind: &'static str,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            kind,
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// Create a round-trip mismatch error
    pub fn round_trip(
        kind: &'static str,
        input: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        Self::RoundTrip {
            kind,
            input: input.into(),
            canonical: canonical.into(),
        }
    }

    /// Wrap an element failure with its position in the input
    pub fn at_index(self, index: usize) -> Self {
        Self::Element {
            index,
            source: Box::new(self),
        }
    }

    /// Name of the kind that rejected the input, if known
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Self::Malformed { kind, .. }
            | Self::OutOfRange { kind, .. }
            | Self::RoundTrip { kind, .. }
            | Self::UndefinedMember { kind, .. } => Some(kind),
            Self::Uncoercible { .. } => None,
            Self::Element { source, .. } => source.kind(),
        }
    }
}

/// Attempt to read a value out of the [`Undefined`](crate::Undefined) sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("`{operation}` is not available on an undefined value")]
pub struct UndefinedAccess {
    operation: &'static str,
}

impl UndefinedAccess {
    /// Create an access error for the named operation
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    /// The operation that was attempted
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_error_message() {
        let err = ValidationError::malformed("uuid4", "nope", "expected 36 characters");
        assert_eq!(
            err.to_string(),
            "malformed uuid4: \"nope\" (expected 36 characters)"
        );
    }

    #[test]
    fn out_of_range_error_message() {
        let err = ValidationError::out_of_range("tinyint", 128, "between -128 and 127");
        assert_eq!(
            err.to_string(),
            "tinyint out of range: 128 (expected between -128 and 127)"
        );
    }

    #[test]
    fn round_trip_error_message() {
        let err = ValidationError::round_trip("float", "5.00", "5");
        assert_eq!(
            err.to_string(),
            "non-canonical float: \"5.00\" renders as \"5\""
        );
    }

    #[test]
    fn uncoercible_error_message() {
        let err = ValidationError::Uncoercible { shape: "list" };
        assert_eq!(err.to_string(), "cannot render list as text");
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn element_error_keeps_source() {
        let err = ValidationError::malformed("integer", "bad", "expected digits").at_index(1);
        assert_eq!(
            err.to_string(),
            "element 1: malformed integer: \"bad\" (expected digits)"
        );
        assert_eq!(err.kind(), Some("integer"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn undefined_member_error_message() {
        let err = ValidationError::UndefinedMember {
            kind: "integer",
            index: 2,
        };
        assert_eq!(
            err.to_string(),
            "integer collection has an undefined member at index 2"
        );
    }

    #[test]
    fn undefined_access_names_operation() {
        let err = UndefinedAccess::new("value");
        assert_eq!(err.operation(), "value");
        assert_eq!(
            err.to_string(),
            "`value` is not available on an undefined value"
        );
    }
}
