//! Calendar and clock kinds backed by `chrono`

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use chrono_tz::Tz;

use crate::errors::ValidationError;
use crate::kind::Kind;
use crate::typed_value::TypedValue;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A calendar date, `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Date;

impl Kind for Date {
    type Native = NaiveDate;

    const NAME: &'static str = "date";

    fn parse(text: &str) -> Result<NaiveDate, ValidationError> {
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|e| ValidationError::malformed(Self::NAME, text, e.to_string()))?;
        let canonical = Self::render(&date);
        if canonical != text {
            return Err(ValidationError::round_trip(Self::NAME, text, canonical));
        }
        Ok(date)
    }

    fn admit(value: NaiveDate) -> Result<NaiveDate, ValidationError> {
        Ok(value)
    }

    fn render(value: &NaiveDate) -> String {
        value.format(DATE_FORMAT).to_string()
    }
}

/// A wall-clock timestamp without zone, `YYYY-MM-DD HH:MM:SS`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateTime;

impl Kind for DateTime {
    type Native = NaiveDateTime;

    const NAME: &'static str = "datetime";

    fn parse(text: &str) -> Result<NaiveDateTime, ValidationError> {
        let timestamp = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
            .map_err(|e| ValidationError::malformed(Self::NAME, text, e.to_string()))?;
        let canonical = Self::render(&timestamp);
        if canonical != text {
            return Err(ValidationError::round_trip(Self::NAME, text, canonical));
        }
        Ok(timestamp)
    }

    fn admit(value: NaiveDateTime) -> Result<NaiveDateTime, ValidationError> {
        // Sub-second precision has no canonical text
        if value.nanosecond() != 0 {
            return Err(ValidationError::out_of_range(
                Self::NAME,
                value,
                "whole seconds",
            ));
        }
        Ok(value)
    }

    fn render(value: &NaiveDateTime) -> String {
        value.format(DATETIME_FORMAT).to_string()
    }
}

/// An IANA time zone name such as `Europe/Berlin`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timezone;

impl Kind for Timezone {
    type Native = Tz;

    const NAME: &'static str = "timezone";

    fn parse(text: &str) -> Result<Tz, ValidationError> {
        let tz: Tz = text
            .parse()
            .map_err(|e| ValidationError::malformed(Self::NAME, text, format!("{e}")))?;
        if tz.name() != text {
            return Err(ValidationError::round_trip(Self::NAME, text, tz.name()));
        }
        Ok(tz)
    }

    fn admit(value: Tz) -> Result<Tz, ValidationError> {
        Ok(value)
    }

    fn render(value: &Tz) -> String {
        value.name().to_string()
    }
}

impl TypedValue<Timezone> {
    /// Check if this is a UTC timezone
    pub fn is_utc(&self) -> bool {
        matches!(self.value(), Tz::UTC | Tz::Etc__UTC | Tz::Etc__GMT)
    }
}
