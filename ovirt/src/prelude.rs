//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use ovirt::prelude::*;
//! ```

// Reader framework
pub use ovirt_core::{
    Link, List, ReadError, ReaderConfig, XmlRead, XmlReader, XmlReaderBuilder,
};

// Schema types
pub use ovirt_types::{
    Action, Api, Cluster, DataCenter, Disk, DiskAttachment, Fault, Host, Network, Nic,
    Permission, Snapshot, Statistic, StorageDomain, Tag, Template, User, Vm,
};
pub use ovirt_types::{DiskStatus, HostStatus, StorageDomainStatus, VmStatus};

// Response handling
pub use crate::error::SdkError;
pub use crate::response::{Response, check_action, check_fault, read_entity, read_list};
