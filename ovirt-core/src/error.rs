//! Error types for reading oVirt XML documents.

use thiserror::Error;

/// Error type for XML read operations.
#[derive(Debug, Error)]
pub enum ReadError {
    /// XML tokenizer error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute syntax.
    #[error("attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Invalid escape sequence or entity reference.
    #[error("escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The element found is not the one the reader was asked for.
    #[error("tag not matched: expect <{expected}> but got <{actual}>")]
    TagMismatch {
        /// Tag the caller expected.
        expected: String,
        /// Tag actually found.
        actual: String,
    },

    /// A scalar value could not be parsed.
    #[error("invalid {expected} value '{value}' in <{element}>")]
    InvalidValue {
        /// Element or attribute carrying the value.
        element: String,
        /// Raw value.
        value: String,
        /// Kind of value that was expected.
        expected: &'static str,
    },

    /// The document ended while an element was still open.
    #[error("unexpected end of document inside <{element}>")]
    UnexpectedEof {
        /// Innermost open element.
        element: String,
    },

    /// Elements are nested deeper than the configured limit.
    #[error("element nesting exceeds the limit of {limit}")]
    DepthExceeded {
        /// Configured maximum depth.
        limit: usize,
    },

    /// The document contains no element.
    #[error("document contains no element")]
    EmptyDocument,
}

impl ReadError {
    /// Creates a tag mismatch error.
    pub fn tag_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TagMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(
        element: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidValue {
            element: element.into(),
            value: value.into(),
            expected,
        }
    }

    /// Creates an unexpected end-of-document error.
    pub fn unexpected_eof(element: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            element: element.into(),
        }
    }

    /// Returns true for a tag mismatch.
    #[must_use]
    pub const fn is_tag_mismatch(&self) -> bool {
        matches!(self, Self::TagMismatch { .. })
    }
}

/// Error returned when text does not name a known enumeration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value '{value}'")]
pub struct ParseEnumError {
    /// Enumeration name.
    pub kind: &'static str,
    /// Rejected text.
    pub value: String,
}

impl ParseEnumError {
    /// Creates a new enumeration parse error.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Result type alias for read operations.
pub type Result<T> = std::result::Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_mismatch_message() {
        let err = ReadError::tag_mismatch("vm", "host");
        assert_eq!(err.to_string(), "tag not matched: expect <vm> but got <host>");
        assert!(err.is_tag_mismatch());
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ReadError::invalid_value("memory", "lots", "integer");
        assert_eq!(err.to_string(), "invalid integer value 'lots' in <memory>");
        assert!(!err.is_tag_mismatch());
    }

    #[test]
    fn test_parse_enum_error() {
        let err = ParseEnumError::new("VmStatus", "sleepy");
        assert_eq!(err.to_string(), "unknown VmStatus value 'sleepy'");
    }
}
