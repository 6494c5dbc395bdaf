//! # oVirt
//!
//! Typed XML readers for the oVirt REST API.
//!
//! The engine answers every request with an XML document. This crate turns
//! those documents into plain Rust values: one struct per schema type, with
//! nested objects, inlined collections and `<link>` relations preserved.
//!
//! ## Quick Start
//!
//! ```
//! use ovirt::prelude::*;
//!
//! let xml = r#"<vm id="123"><name>web-01</name><status>up</status></vm>"#;
//! let vm = Vm::from_xml(xml)?;
//! assert_eq!(vm.status(), Some(&VmStatus::Up));
//! # Ok::<(), ReadError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Pull reader, read traits, lists and links
//! - [`types`] - Schema types, builders and enumerations
//! - [`response`] - Fault and action checks on HTTP replies
//! - [`error`] - Errors raised by the response checks

pub mod error;
pub mod prelude;
pub mod response;

/// Pull reader, read traits and collections.
pub mod core {
    pub use ovirt_core::*;
}

/// Schema types of the API.
pub mod types {
    pub use ovirt_types::*;
}

pub use error::{Result, SdkError};
pub use response::{Response, build_error, check_action, check_fault, read_entity, read_list};
