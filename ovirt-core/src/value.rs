//! Scalar and field value traits.
//!
//! [`XmlScalar`] covers everything carried as element text or attribute
//! values. [`XmlValue`] covers everything that can appear as a child
//! element of a schema type: scalars, scalar collections, nested schema
//! types and lists of them.

use crate::error::Result;
use crate::reader::XmlReader;
use chrono::{DateTime, FixedOffset};
use quick_xml::events::BytesStart;

/// A value parsed from text.
pub trait XmlScalar: Sized {
    /// Human-readable name of the value kind, used in errors.
    const KIND: &'static str;

    /// Parses the raw text of an element or attribute.
    fn parse_text(text: &str) -> Option<Self>;
}

/// A value read from a child element.
pub trait XmlValue: Sized {
    /// Reads the element just opened by `start`, consuming it completely.
    ///
    /// # Errors
    /// Returns `ReadError` if the element is malformed.
    fn read_value(reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<Self>;
}

impl XmlScalar for String {
    const KIND: &'static str = "string";

    fn parse_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl XmlScalar for bool {
    const KIND: &'static str = "boolean";

    fn parse_text(text: &str) -> Option<Self> {
        parse_bool(text.trim())
    }
}

impl XmlScalar for i64 {
    const KIND: &'static str = "integer";

    fn parse_text(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

impl XmlScalar for f64 {
    const KIND: &'static str = "decimal";

    fn parse_text(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

impl XmlScalar for DateTime<FixedOffset> {
    const KIND: &'static str = "date-time";

    fn parse_text(text: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(text.trim()).ok()
    }
}

macro_rules! scalar_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl XmlValue for $ty {
                fn read_value(reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<Self> {
                    reader.read_scalar(start)
                }
            }
        )*
    };
}

scalar_value!(String, bool, i64, f64, DateTime<FixedOffset>);

impl<T: XmlScalar> XmlValue for Vec<T> {
    fn read_value(reader: &mut XmlReader<'_>, _start: &BytesStart<'_>) -> Result<Self> {
        reader.read_scalars()
    }
}

/// Parses a boolean the way the oVirt engine writes them.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts.
#[must_use]
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
