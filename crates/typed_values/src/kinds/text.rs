//! String kinds

use validator::ValidateEmail;

use crate::errors::ValidationError;
use crate::kind::Kind;

/// A string with at least one non-whitespace character, stored trimmed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonEmptyString;

impl Kind for NonEmptyString {
    type Native = String;

    const NAME: &'static str = "non_empty_string";

    fn parse(text: &str) -> Result<String, ValidationError> {
        Self::admit(text.to_string())
    }

    fn admit(value: String) -> Result<String, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::malformed(Self::NAME, value, "empty"));
        }
        if trimmed.len() == value.len() {
            Ok(value)
        } else {
            Ok(trimmed.to_string())
        }
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

/// SQL `VARCHAR(N)`: at most `N` characters
///
/// Whitespace is kept as given; the empty string is a valid value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VarChar<const N: usize>;

impl<const N: usize> Kind for VarChar<N> {
    type Native = String;

    const NAME: &'static str = "varchar";

    fn parse(text: &str) -> Result<String, ValidationError> {
        Self::admit(text.to_string())
    }

    fn admit(value: String) -> Result<String, ValidationError> {
        let length = value.chars().count();
        if length > N {
            return Err(ValidationError::malformed(
                Self::NAME,
                value,
                format!("{length} characters, at most {N} allowed"),
            ));
        }
        Ok(value)
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

/// An email address, trimmed and lowercased
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Email;

impl Kind for Email {
    type Native = String;

    const NAME: &'static str = "email";

    fn parse(text: &str) -> Result<String, ValidationError> {
        Self::admit(text.to_string())
    }

    fn admit(value: String) -> Result<String, ValidationError> {
        let normalized = value.trim().to_lowercase();
        if !normalized.validate_email() {
            return Err(ValidationError::malformed(
                Self::NAME,
                value,
                "not an email address",
            ));
        }
        Ok(normalized)
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::typed_value::TypedValue;

    proptest! {
        #[test]
        fn email_is_always_lowercase(input in "[A-Za-z]+@[A-Za-z]+\\.[a-z]{2,3}") {
            if let Ok(email) = TypedValue::<Email>::from_str(&input) {
                prop_assert_eq!(email.value(), &email.value().to_lowercase());
            }
        }

        #[test]
        fn non_empty_string_has_no_outer_whitespace(input in "\\s{0,3}[a-z ]{1,20}\\s{0,3}") {
            if let Ok(value) = TypedValue::<NonEmptyString>::from_str(&input) {
                prop_assert_eq!(value.value().trim(), value.value().as_str());
                prop_assert!(!value.value().is_empty());
            }
        }

        #[test]
        fn varchar_limit_is_exact(length in 0usize..20) {
            let input = "x".repeat(length);
            prop_assert_eq!(TypedValue::<VarChar<10>>::from_str(&input).is_ok(), length <= 10);
        }
    }
}
