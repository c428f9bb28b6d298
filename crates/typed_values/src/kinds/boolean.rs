//! Boolean kind

use crate::errors::ValidationError;
use crate::kind::Kind;

/// A boolean
///
/// Accepts `true`, `false`, `1` and `0`; renders `true` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boolean;

impl Kind for Boolean {
    type Native = bool;

    const NAME: &'static str = "boolean";

    fn parse(text: &str) -> Result<bool, ValidationError> {
        match text {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ValidationError::malformed(
                Self::NAME,
                text,
                "expected true, false, 1 or 0",
            )),
        }
    }

    fn admit(value: bool) -> Result<bool, ValidationError> {
        Ok(value)
    }

    fn render(value: &bool) -> String {
        value.to_string()
    }

    fn project(value: &bool) -> serde_json::Value {
        serde_json::Value::Bool(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed_value::TypedValue;

    #[test]
    fn accepted_spellings() {
        assert_eq!(TypedValue::<Boolean>::from_str("true").map(|v| *v.value()), Ok(true));
        assert_eq!(TypedValue::<Boolean>::from_str("1").map(|v| *v.value()), Ok(true));
        assert_eq!(TypedValue::<Boolean>::from_str("false").map(|v| *v.value()), Ok(false));
        assert_eq!(TypedValue::<Boolean>::from_str("0").map(|v| *v.value()), Ok(false));
    }

    #[test]
    fn rejected_spellings() {
        for text in ["TRUE", "yes", "", "2", " true"] {
            assert!(TypedValue::<Boolean>::from_str(text).is_err());
        }
    }

    #[test]
    fn from_bool_and_int() {
        assert_eq!(TypedValue::<Boolean>::from_bool(false).unwrap().to_string(), "false");
        assert_eq!(TypedValue::<Boolean>::from_int(1).unwrap().to_string(), "true");
        assert!(TypedValue::<Boolean>::from_int(5).is_err());
    }

    #[test]
    fn projection_is_json_bool() {
        let value = TypedValue::<Boolean>::from_bool(true).unwrap();
        assert_eq!(value.to_json(), serde_json::json!(true));
    }
}
