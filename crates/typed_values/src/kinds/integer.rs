//! Integer kinds
//!
//! All integer kinds share one textual rule: canonical decimal digits only.
//! `"128.0"` is malformed even where `128` would be in range; integer kinds
//! never coerce integerish floats.

use crate::canonical;
use crate::errors::ValidationError;
use crate::kind::{Kind, NumericKind};
use crate::typed_value::TypedValue;

macro_rules! integer_kind {
    ($(#[$meta:meta])* $kind:ident, $name:literal, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $kind;

        impl $kind {
            /// Smallest admitted value
            pub const MIN: i64 = $min;
            /// Largest admitted value
            pub const MAX: i64 = $max;
        }

        impl Kind for $kind {
            type Native = i64;

            const NAME: &'static str = $name;

            fn parse(text: &str) -> Result<i64, ValidationError> {
                canonical::parse_int(Self::NAME, text)
            }

            fn admit(value: i64) -> Result<i64, ValidationError> {
                canonical::check_int_range(Self::NAME, value, Self::MIN, Self::MAX)
            }

            fn render(value: &i64) -> String {
                value.to_string()
            }

            fn project(value: &i64) -> serde_json::Value {
                serde_json::Value::from(*value)
            }
        }

        impl NumericKind for $kind {
            fn as_i64(value: &i64) -> i64 {
                *value
            }

            fn as_f64(value: &i64) -> f64 {
                *value as f64
            }
        }
    };
}

integer_kind!(
    /// Any 64-bit signed integer
    Integer,
    "integer",
    i64::MIN,
    i64::MAX
);

integer_kind!(
    /// An integer `>= 0`
    NonNegativeInt,
    "non_negative_int",
    0,
    i64::MAX
);

integer_kind!(
    /// An integer `> 0`
    PositiveInt,
    "positive_int",
    1,
    i64::MAX
);

integer_kind!(
    /// SQL `TINYINT`: `-128..=127`
    TinyInt,
    "tinyint",
    -128,
    127
);

integer_kind!(
    /// SQL `TINYINT UNSIGNED`: `0..=255`
    UnsignedTinyInt,
    "tinyint_unsigned",
    0,
    255
);

integer_kind!(
    /// SQL `SMALLINT`: `-32768..=32767`
    SmallInt,
    "smallint",
    -32_768,
    32_767
);

integer_kind!(
    /// ISO weekday number, Monday = 1 through Sunday = 7
    Weekday,
    "weekday",
    1,
    7
);

integer_kind!(
    /// Month number, January = 1 through December = 12
    Month,
    "month",
    1,
    12
);

impl TypedValue<Weekday> {
    /// The matching `chrono` weekday
    pub fn to_chrono(&self) -> chrono::Weekday {
        match *self.value() {
            1 => chrono::Weekday::Mon,
            2 => chrono::Weekday::Tue,
            3 => chrono::Weekday::Wed,
            4 => chrono::Weekday::Thu,
            5 => chrono::Weekday::Fri,
            6 => chrono::Weekday::Sat,
            _ => chrono::Weekday::Sun,
        }
    }

    /// Build from a `chrono` weekday
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        // number_from_monday is always 1..=7
        Self::new_unchecked(i64::from(weekday.number_from_monday()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Typed;

    #[test]
    fn integer_accepts_full_range() {
        assert!(TypedValue::<Integer>::from_int(i64::MIN).is_ok());
        assert!(TypedValue::<Integer>::from_int(i64::MAX).is_ok());
        assert!(TypedValue::<Integer>::from_str("-9223372036854775808").is_ok());
    }

    #[test]
    fn non_negative_bounds() {
        assert!(TypedValue::<NonNegativeInt>::from_int(0).is_ok());
        assert!(matches!(
            TypedValue::<NonNegativeInt>::from_int(-1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn positive_bounds() {
        assert!(TypedValue::<PositiveInt>::from_int(1).is_ok());
        assert!(matches!(
            TypedValue::<PositiveInt>::from_str("0"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn tinyint_bounds() {
        assert!(TypedValue::<TinyInt>::from_int(-128).is_ok());
        assert!(TypedValue::<TinyInt>::from_int(127).is_ok());
        assert!(TypedValue::<TinyInt>::from_int(-129).is_err());
        assert!(TypedValue::<TinyInt>::from_int(128).is_err());
        assert_eq!(TinyInt::MIN, -128);
        assert_eq!(TinyInt::MAX, 127);
    }

    #[test]
    fn unsigned_tinyint_and_smallint_bounds() {
        assert!(TypedValue::<UnsignedTinyInt>::from_int(255).is_ok());
        assert!(TypedValue::<UnsignedTinyInt>::from_int(256).is_err());
        assert!(TypedValue::<UnsignedTinyInt>::from_int(-1).is_err());
        assert!(TypedValue::<SmallInt>::from_int(-32768).is_ok());
        assert!(TypedValue::<SmallInt>::from_int(32768).is_err());
    }

    #[test]
    fn weekday_and_month_bounds() {
        assert!(TypedValue::<Weekday>::from_int(0).is_err());
        assert!(TypedValue::<Weekday>::from_int(8).is_err());
        assert!(TypedValue::<Month>::from_int(12).is_ok());
        assert!(TypedValue::<Month>::from_int(13).is_err());
    }

    #[test]
    fn leading_zeros_are_rejected() {
        assert!(matches!(
            TypedValue::<Month>::from_str("05"),
            Err(ValidationError::RoundTrip { .. })
        ));
    }

    #[test]
    fn projection_is_a_json_number() {
        let value = TypedValue::<SmallInt>::from_int(-12).unwrap();
        assert_eq!(value.to_json(), serde_json::json!(-12));
        assert_eq!(value.to_float(), -12.0);
        assert!(value.is_type_of(&["smallint"]));
    }

    #[test]
    fn weekday_chrono_conversion() {
        let monday = TypedValue::<Weekday>::from_int(1).unwrap();
        assert_eq!(monday.to_chrono(), chrono::Weekday::Mon);

        let sunday = TypedValue::<Weekday>::from_chrono(chrono::Weekday::Sun);
        assert_eq!(*sunday.value(), 7);
        assert_eq!(sunday.to_chrono(), chrono::Weekday::Sun);
    }
}
