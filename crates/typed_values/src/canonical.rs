//! Canonicalization and round-trip helpers shared by the numeric kinds
//!
//! Integers: plain decimal digits with an optional leading `-`; the text must
//! equal the rendering of the parsed value, so `"007"`, `"-0"` and `"5.0"`
//! are rejected.
//!
//! Floats: plain decimal notation only. Scientific notation, `inf` and `nan`
//! are malformed. The text must equal the rendering of the parsed value, or
//! the rendering followed by exactly one `".0"`. Negative zero normalizes to
//! zero.

use crate::errors::ValidationError;

/// Check that `text` is `-?[0-9]+(\.[0-9]+)?`, with the fraction optional
fn is_plain_decimal(text: &str, allow_fraction: bool) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) if allow_fraction => (whole, Some(fraction)),
        Some(_) => return false,
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

/// Parse a canonically spelled integer
pub fn parse_int(kind: &'static str, text: &str) -> Result<i64, ValidationError> {
    if !is_plain_decimal(text, false) {
        return Err(ValidationError::malformed(kind, text, "expected an integer"));
    }

    let value: i64 = text
        .parse()
        .map_err(|_| ValidationError::out_of_range(kind, text, "a 64-bit integer"))?;

    let canonical = value.to_string();
    if canonical != text {
        return Err(ValidationError::round_trip(kind, text, canonical));
    }

    Ok(value)
}

/// Check an integer against an inclusive range
pub fn check_int_range(
    kind: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(
            kind,
            value,
            format!("between {min} and {max}"),
        ))
    }
}

/// Canonical rendering of a float
pub fn render_float(value: f64) -> String {
    value.to_string()
}

/// JSON projection of a canonical float
///
/// Integral values within the exactly representable range project as JSON
/// integers, so `5.0` serializes as `5` like its canonical text.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn project_float(value: f64) -> serde_json::Value {
    const EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= EXACT {
        serde_json::Value::from(value as i64)
    } else {
        serde_json::Value::from(value)
    }
}

/// Normalize a float, rejecting non-finite values
pub fn normalize_float(kind: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::out_of_range(kind, value, "a finite number"));
    }
    // -0.0 == 0.0, so this folds negative zero into positive zero
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Parse a canonically spelled float
pub fn parse_float(kind: &'static str, text: &str) -> Result<f64, ValidationError> {
    if !is_plain_decimal(text, true) {
        return Err(ValidationError::malformed(
            kind,
            text,
            "expected a decimal number",
        ));
    }

    let parsed: f64 = text
        .parse()
        .map_err(|_| ValidationError::malformed(kind, text, "expected a decimal number"))?;
    let value = normalize_float(kind, parsed)?;

    let canonical = render_float(value);
    let matches_canonical = text == canonical
        || text
            .strip_suffix(".0")
            .is_some_and(|stem| stem == canonical);
    if !matches_canonical {
        return Err(ValidationError::round_trip(kind, text, canonical));
    }

    Ok(value)
}
