//! # oVirt Core
//!
//! XML reader framework for the oVirt REST API binding.
//!
//! This crate provides:
//! - A pull reader over oVirt XML documents with typed scalar reads
//! - The `ReadOne` / `ReadMany` trait implemented by every schema type
//! - Collections that remember the URL they were announced under
//! - Reader configuration and error types

pub mod config;
pub mod error;
pub mod list;
pub mod read;
pub mod reader;
pub mod value;

pub use config::{ReaderConfig, XmlReaderBuilder};
pub use error::{ParseEnumError, ReadError, Result};
pub use list::{Link, List};
pub use read::{XmlRead, read_list};
pub use reader::{XmlReader, element_name, raw_attribute};
pub use value::{XmlScalar, XmlValue, parse_bool};

/// Re-exported so generated readers can name start elements.
pub use quick_xml::events::BytesStart;
