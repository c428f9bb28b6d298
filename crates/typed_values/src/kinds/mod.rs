//! Concrete kinds and a name-indexed catalog of them
//!
//! The catalog lets callers that only know a kind by name (command lines,
//! configuration) validate dynamic input without naming the Rust type.

mod boolean;
mod country_code;
mod decimal;
mod float;
mod integer;
mod temporal;
mod text;
mod uuid4;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::collection::TypedCollection;
use crate::errors::ValidationError;
use crate::kind::Kind;
use crate::mixed::Mixed;
use crate::typed_value::TypedValue;

pub use boolean::Boolean;
pub use country_code::CountryCode;
pub use decimal::Decimal;
pub use float::{Float, NonNegativeFloat};
pub use integer::{
    Integer, Month, NonNegativeInt, PositiveInt, SmallInt, TinyInt, UnsignedTinyInt, Weekday,
};
pub use temporal::{Date, DateTime, Timezone};
pub use text::{Email, NonEmptyString, VarChar};
pub use uuid4::Uuid4;

pub type IntegerValue = TypedValue<Integer>;
pub type NonNegativeIntValue = TypedValue<NonNegativeInt>;
pub type PositiveIntValue = TypedValue<PositiveInt>;
pub type TinyIntValue = TypedValue<TinyInt>;
pub type UnsignedTinyIntValue = TypedValue<UnsignedTinyInt>;
pub type SmallIntValue = TypedValue<SmallInt>;
pub type WeekdayValue = TypedValue<Weekday>;
pub type MonthValue = TypedValue<Month>;
pub type FloatValue = TypedValue<Float>;
pub type NonNegativeFloatValue = TypedValue<NonNegativeFloat>;
pub type DecimalValue<const PRECISION: u32, const SCALE: u32> =
    TypedValue<Decimal<PRECISION, SCALE>>;
pub type BooleanValue = TypedValue<Boolean>;
pub type NonEmptyStringValue = TypedValue<NonEmptyString>;
pub type VarCharValue<const N: usize> = TypedValue<VarChar<N>>;
pub type Uuid4Value = TypedValue<Uuid4>;
pub type CountryCodeValue = TypedValue<CountryCode>;
pub type EmailValue = TypedValue<Email>;
pub type DateValue = TypedValue<Date>;
pub type DateTimeValue = TypedValue<DateTime>;
pub type TimezoneValue = TypedValue<Timezone>;

/// How a catalog entry builds collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Construction {
    /// Fail on the first invalid element
    #[default]
    Strict,
    /// Replace invalid elements with the sentinel
    Tolerant,
}

/// Summary of a collection built through the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionReport {
    pub count: usize,
    pub has_undefined: bool,
    pub undefined: usize,
    /// JSON projections of the defined members, in order
    pub defined: Vec<Value>,
}

impl CollectionReport {
    fn of<K: Kind>(collection: &TypedCollection<K>) -> Self {
        Self {
            count: collection.count(),
            has_undefined: collection.has_undefined(),
            undefined: collection.undefined_count(),
            defined: collection
                .defined_items()
                .into_iter()
                .map(TypedValue::<K>::to_json)
                .collect(),
        }
    }
}

/// A kind known by name
#[derive(Clone, Copy)]
pub struct KindEntry {
    name: &'static str,
    summary: &'static str,
    canonicalize: fn(&Mixed) -> Result<Value, ValidationError>,
    normalize: fn(&Mixed) -> Option<Value>,
    collect: fn(Vec<Mixed>, Construction) -> Result<CollectionReport, ValidationError>,
}

impl KindEntry {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn summary(&self) -> &'static str {
        self.summary
    }

    /// Strictly construct a value and return its JSON projection
    pub fn canonicalize(&self, input: &Mixed) -> Result<Value, ValidationError> {
        (self.canonicalize)(input)
    }

    /// Tolerantly construct a value; `None` stands for the sentinel
    pub fn normalize(&self, input: &Mixed) -> Option<Value> {
        (self.normalize)(input)
    }

    /// Build a collection and summarize it
    pub fn collect(
        &self,
        raw: Vec<Mixed>,
        construction: Construction,
    ) -> Result<CollectionReport, ValidationError> {
        (self.collect)(raw, construction)
    }
}

impl fmt::Debug for KindEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindEntry")
            .field("name", &self.name)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

fn canonicalize<K: Kind>(input: &Mixed) -> Result<Value, ValidationError> {
    TypedValue::<K>::from_mixed(input).map(|value| value.to_json())
}

fn normalize<K: Kind>(input: &Mixed) -> Option<Value> {
    TypedValue::<K>::try_from_mixed(input)
        .into_defined()
        .map(|value| value.to_json())
}

fn collect<K: Kind>(
    raw: Vec<Mixed>,
    construction: Construction,
) -> Result<CollectionReport, ValidationError> {
    let collection = match construction {
        Construction::Strict => TypedCollection::<K>::from_array(raw)?,
        Construction::Tolerant => TypedCollection::<K>::try_from_array(raw),
    };
    Ok(CollectionReport::of(&collection))
}

macro_rules! entry {
    ($kind:ty, $summary:literal) => {
        KindEntry {
            name: <$kind as Kind>::NAME,
            summary: $summary,
            canonicalize: canonicalize::<$kind>,
            normalize: normalize::<$kind>,
            collect: collect::<$kind>,
        }
    };
}

const CATALOG: &[KindEntry] = &[
    entry!(Integer, "64-bit signed integer"),
    entry!(NonNegativeInt, "integer >= 0"),
    entry!(PositiveInt, "integer > 0"),
    entry!(TinyInt, "integer in [-128, 127]"),
    entry!(UnsignedTinyInt, "integer in [0, 255]"),
    entry!(SmallInt, "integer in [-32768, 32767]"),
    entry!(Weekday, "ISO weekday, Monday = 1 to Sunday = 7"),
    entry!(Month, "month number in [1, 12]"),
    entry!(Float, "finite float in plain decimal notation"),
    entry!(NonNegativeFloat, "finite float >= 0"),
    entry!(Decimal<10, 2>, "DECIMAL(10,2), canonical with two fraction digits"),
    entry!(Boolean, "true, false, 1 or 0"),
    entry!(NonEmptyString, "trimmed string with at least one character"),
    entry!(VarChar<255>, "VARCHAR(255), at most 255 characters"),
    entry!(Uuid4, "version 4 UUID, lowercase hyphenated"),
    entry!(CountryCode, "ISO 3166-1 alpha-2 code, uppercase"),
    entry!(Email, "email address, trimmed and lowercased"),
    entry!(Date, "calendar date, YYYY-MM-DD"),
    entry!(DateTime, "timestamp, YYYY-MM-DD HH:MM:SS"),
    entry!(Timezone, "IANA time zone name"),
];

/// Every kind available by name
pub fn catalog() -> &'static [KindEntry] {
    CATALOG
}

/// Find a kind by its name
pub fn lookup(name: &str) -> Option<&'static KindEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = catalog().iter().map(KindEntry::name).collect();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(lookup("tinyint").map(KindEntry::name), Some("tinyint"));
        assert!(lookup("decimal").is_some());
        assert!(lookup("TINYINT").is_none());
        assert!(lookup("bigint").is_none());
    }

    #[test]
    fn canonicalize_returns_projection_or_error() {
        let entry = lookup("tinyint").unwrap();
        assert_eq!(entry.canonicalize(&Mixed::from("-128")), Ok(json!(-128)));
        assert!(matches!(
            entry.canonicalize(&Mixed::from(128)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn normalize_absorbs_failures() {
        let entry = lookup("uuid4").unwrap();
        assert_eq!(entry.normalize(&Mixed::from("not-a-uuid")), None);
        assert_eq!(
            entry.normalize(&Mixed::from("550E8400-E29B-41D4-A716-446655440000")),
            Some(json!("550e8400-e29b-41d4-a716-446655440000"))
        );
    }

    #[test]
    fn parameterized_entries_use_their_defaults() {
        let decimal = lookup("decimal").unwrap();
        assert_eq!(decimal.canonicalize(&Mixed::from("1.5")), Ok(json!("1.50")));

        let varchar = lookup("varchar").unwrap();
        assert!(varchar.canonicalize(&Mixed::from("x".repeat(255))).is_ok());
        assert!(varchar.canonicalize(&Mixed::from("x".repeat(256))).is_err());
    }

    #[test]
    fn collect_tolerant_report() {
        let raw = vec![Mixed::from(1), Mixed::from("bad"), Mixed::from(3)];
        let report = lookup("integer")
            .unwrap()
            .collect(raw, Construction::Tolerant)
            .unwrap();
        assert_eq!(report.count, 3);
        assert!(report.has_undefined);
        assert_eq!(report.undefined, 1);
        assert_eq!(report.defined, vec![json!(1), json!(3)]);
    }

    #[test]
    fn collect_strict_fails_with_index() {
        let raw = vec![Mixed::from("ok"), Mixed::from("")];
        let err = lookup("non_empty_string")
            .unwrap()
            .collect(raw, Construction::Strict)
            .unwrap_err();
        assert!(matches!(err, ValidationError::Element { index: 1, .. }));
    }

    #[test]
    fn report_serializes() {
        let report = lookup("boolean")
            .unwrap()
            .collect(vec![Mixed::from(true)], Construction::Strict)
            .unwrap();
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"count": 1, "has_undefined": false, "undefined": 0, "defined": [true]})
        );
    }
}
