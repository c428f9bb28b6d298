//! Version-4 UUID kind

use uuid::{Uuid, Variant};

use crate::errors::ValidationError;
use crate::kind::Kind;
use crate::typed_value::TypedValue;

const HYPHENATED_LEN: usize = 36;

/// A random (version 4, RFC 4122 variant) UUID
///
/// Only the hyphenated form is accepted. Letter case is free on input and
/// lowercased in canonical form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uuid4;

impl Kind for Uuid4 {
    type Native = Uuid;

    const NAME: &'static str = "uuid4";

    fn parse(text: &str) -> Result<Uuid, ValidationError> {
        if text.len() != HYPHENATED_LEN {
            return Err(ValidationError::malformed(
                Self::NAME,
                text,
                "expected the hyphenated 36-character form",
            ));
        }
        Uuid::parse_str(text)
            .map_err(|e| ValidationError::malformed(Self::NAME, text, e.to_string()))
    }

    fn admit(value: Uuid) -> Result<Uuid, ValidationError> {
        if value.get_version_num() != 4 || value.get_variant() != Variant::RFC4122 {
            return Err(ValidationError::out_of_range(
                Self::NAME,
                value,
                "a version 4 UUID",
            ));
        }
        Ok(value)
    }

    fn render(value: &Uuid) -> String {
        value.hyphenated().to_string()
    }
}

impl TypedValue<Uuid4> {
    /// Generate a fresh random UUID
    pub fn random() -> Self {
        Self::new_unchecked(Uuid::new_v4())
    }
}
