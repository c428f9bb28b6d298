//! Floating-point kinds

use crate::canonical;
use crate::errors::ValidationError;
use crate::kind::{Kind, NumericKind};

/// Any finite float
///
/// Text must be in plain decimal notation and canonical: `"5"` and `"5.0"`
/// are accepted, `"5.00"`, `"05"` and `"1e3"` are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Float;

impl Kind for Float {
    type Native = f64;

    const NAME: &'static str = "float";

    fn parse(text: &str) -> Result<f64, ValidationError> {
        canonical::parse_float(Self::NAME, text)
    }

    fn admit(value: f64) -> Result<f64, ValidationError> {
        canonical::normalize_float(Self::NAME, value)
    }

    fn render(value: &f64) -> String {
        canonical::render_float(*value)
    }

    fn project(value: &f64) -> serde_json::Value {
        canonical::project_float(*value)
    }
}

impl NumericKind for Float {
    fn as_i64(value: &f64) -> i64 {
        value.trunc() as i64
    }

    fn as_f64(value: &f64) -> f64 {
        *value
    }
}

/// A finite float `>= 0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonNegativeFloat;

impl Kind for NonNegativeFloat {
    type Native = f64;

    const NAME: &'static str = "non_negative_float";

    fn parse(text: &str) -> Result<f64, ValidationError> {
        canonical::parse_float(Self::NAME, text)
    }

    fn admit(value: f64) -> Result<f64, ValidationError> {
        let value = canonical::normalize_float(Self::NAME, value)?;
        if value < 0.0 {
            return Err(ValidationError::out_of_range(Self::NAME, value, "at least 0"));
        }
        Ok(value)
    }

    fn render(value: &f64) -> String {
        canonical::render_float(*value)
    }

    fn project(value: &f64) -> serde_json::Value {
        canonical::project_float(*value)
    }
}

impl NumericKind for NonNegativeFloat {
    fn as_i64(value: &f64) -> i64 {
        value.trunc() as i64
    }

    fn as_f64(value: &f64) -> f64 {
        *value
    }
}
