//! SQL-style fixed-point decimal
//!
//! # Examples
//!
//! ```
//! use typed_values::kinds::Decimal;
//! use typed_values::TypedValue;
//!
//! type Price = Decimal<10, 2>;
//!
//! let price = TypedValue::<Price>::from_str("19.9").unwrap();
//! assert_eq!(price.to_string(), "19.90");
//!
//! // More fraction digits than the scale would lose precision
//! assert!(TypedValue::<Price>::from_str("19.999").is_err());
//! ```

use crate::errors::ValidationError;
use crate::kind::{Kind, NumericKind};

/// `DECIMAL(PRECISION, SCALE)` kept as canonical text
///
/// The canonical form has exactly `SCALE` fraction digits and no leading
/// zeros in the integer part. Input may use fewer fraction digits; it may not
/// use more, nor more than `PRECISION - SCALE` integer digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Decimal<const PRECISION: u32, const SCALE: u32>;

impl<const PRECISION: u32, const SCALE: u32> Decimal<PRECISION, SCALE> {
    const INTEGER_DIGITS: usize = PRECISION.saturating_sub(SCALE) as usize;
    const FRACTION_DIGITS: usize = SCALE as usize;

    fn canonicalize(text: &str) -> Result<String, ValidationError> {
        let malformed = || ValidationError::malformed(Self::NAME, text, "expected a decimal number");

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !digits(whole) || !digits(fraction) {
            return Err(malformed());
        }
        if unsigned.contains('.') && fraction.is_empty() {
            return Err(malformed());
        }

        if fraction.len() > Self::FRACTION_DIGITS {
            return Err(ValidationError::out_of_range(
                Self::NAME,
                text,
                format!("at most {} fraction digits", Self::FRACTION_DIGITS),
            ));
        }

        let trimmed_whole = whole.trim_start_matches('0');
        let whole_canonical = if trimmed_whole.is_empty() {
            "0"
        } else {
            trimmed_whole
        };
        if whole_canonical != whole {
            let canonical = Self::assemble(negative, whole_canonical, fraction);
            return Err(ValidationError::round_trip(Self::NAME, text, canonical));
        }

        if trimmed_whole.len() > Self::INTEGER_DIGITS {
            return Err(ValidationError::out_of_range(
                Self::NAME,
                text,
                format!("at most {} integer digits", Self::INTEGER_DIGITS),
            ));
        }

        Ok(Self::assemble(negative, whole_canonical, fraction))
    }

    fn assemble(negative: bool, whole: &str, fraction: &str) -> String {
        let mut canonical = String::with_capacity(whole.len() + Self::FRACTION_DIGITS + 2);
        let is_zero = whole == "0" && fraction.bytes().all(|b| b == b'0');
        if negative && !is_zero {
            canonical.push('-');
        }
        canonical.push_str(whole);
        if Self::FRACTION_DIGITS > 0 {
            canonical.push('.');
            canonical.push_str(fraction);
            for _ in fraction.len()..Self::FRACTION_DIGITS {
                canonical.push('0');
            }
        }
        canonical
    }
}

impl<const PRECISION: u32, const SCALE: u32> Kind for Decimal<PRECISION, SCALE> {
    type Native = String;

    const NAME: &'static str = "decimal";

    fn parse(text: &str) -> Result<String, ValidationError> {
        Self::canonicalize(text)
    }

    fn admit(value: String) -> Result<String, ValidationError> {
        Self::canonicalize(&value)
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

impl<const PRECISION: u32, const SCALE: u32> NumericKind for Decimal<PRECISION, SCALE> {
    fn as_i64(value: &String) -> i64 {
        let whole = value.split_once('.').map_or(value.as_str(), |(whole, _)| whole);
        // Saturate when the integer part exceeds i64
        whole.parse().unwrap_or(if whole.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    fn as_f64(value: &String) -> f64 {
        value.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed_value::TypedValue;

    type Money = Decimal<10, 2>;
    type Count = Decimal<5, 0>;

    #[test]
    fn pads_fraction_to_scale() {
        assert_eq!(TypedValue::<Money>::from_str("5").unwrap().to_string(), "5.00");
        assert_eq!(TypedValue::<Money>::from_str("5.1").unwrap().to_string(), "5.10");
        assert_eq!(TypedValue::<Money>::from_str("-0.25").unwrap().to_string(), "-0.25");
    }

    #[test]
    fn canonical_text_round_trips() {
        let value = TypedValue::<Money>::from_str("123.45").unwrap();
        assert_eq!(TypedValue::<Money>::from_str(&value.to_string()), Ok(value));
    }

    #[test]
    fn wide_integer_projection_saturates() {
        type Wide = Decimal<30, 0>;
        let big = TypedValue::<Wide>::from_str("99999999999999999999").unwrap();
        assert_eq!(big.to_int(), i64::MAX);
        let small = TypedValue::<Wide>::from_str("-99999999999999999999").unwrap();
        assert_eq!(small.to_int(), i64::MIN);
        let fits = TypedValue::<Wide>::from_str("-42").unwrap();
        assert_eq!(fits.to_int(), -42);
    }

    #[test]
    fn negative_zero_drops_sign() {
        assert_eq!(TypedValue::<Money>::from_str("-0").unwrap().to_string(), "0.00");
    }

    #[test]
    fn leading_zeros_are_non_canonical() {
        assert_eq!(
            TypedValue::<Money>::from_str("007.5"),
            Err(ValidationError::round_trip("decimal", "007.5", "7.50"))
        );
    }

    #[test]
    fn too_many_fraction_digits() {
        assert!(matches!(
            TypedValue::<Money>::from_str("1.234"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn too_many_integer_digits() {
        assert!(TypedValue::<Money>::from_str("12345678").is_ok());
        assert!(matches!(
            TypedValue::<Money>::from_str("123456789"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn malformed_shapes() {
        for text in ["", "-", "1.", ".5", "1e2", "1,5", "+1", "abc"] {
            assert!(matches!(
                TypedValue::<Money>::from_str(text),
                Err(ValidationError::Malformed { .. })
            ));
        }
    }

    #[test]
    fn zero_scale_has_no_point() {
        assert_eq!(TypedValue::<Count>::from_str("42").unwrap().to_string(), "42");
        assert!(TypedValue::<Count>::from_str("4.2").is_err());
    }

    #[test]
    fn projection_is_text_and_numeric_casts_work() {
        let value = TypedValue::<Money>::from_int(12).unwrap();
        assert_eq!(value.to_json(), serde_json::json!("12.00"));
        assert_eq!(value.to_int(), 12);
        assert_eq!(value.to_float(), 12.0);
    }

    #[test]
    fn from_native_canonicalizes() {
        let value = TypedValue::<Money>::from_native("3.5".to_string()).unwrap();
        assert_eq!(value.value(), "3.50");
    }
}
