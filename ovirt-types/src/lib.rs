//! # oVirt Types
//!
//! Schema types of the oVirt REST API.
//!
//! This crate provides:
//! - One struct per schema type, with optional fields and read-only getters
//! - A builder per struct for constructing objects in code
//! - An XML reader per struct, via [`ovirt_core::XmlRead`]
//! - The enumerated values used by those types

#[macro_use]
mod macros;

pub mod access;
pub mod action;
pub mod api;
pub mod cluster;
pub mod enums;
pub mod host;
pub mod network;
pub mod statistic;
pub mod storage;
pub mod template;
pub mod vm;

pub use access::{
    Domain, DomainBuilder, Group, GroupBuilder, Permission, PermissionBuilder, Permit,
    PermitBuilder, Role, RoleBuilder, Tag, TagBuilder, User, UserBuilder,
};
pub use action::{Action, ActionBuilder, Fault, FaultBuilder, Job, JobBuilder, Step, StepBuilder};
pub use api::{
    Api, ApiBuilder, ApiSummary, ApiSummaryBuilder, ApiSummaryItem, ApiSummaryItemBuilder,
    ProductInfo, ProductInfoBuilder, SpecialObjects, SpecialObjectsBuilder, Version,
    VersionBuilder,
};
pub use cluster::{
    AffinityGroup, AffinityGroupBuilder, AffinityRule, AffinityRuleBuilder, Cluster,
    ClusterBuilder, DataCenter, DataCenterBuilder,
};
pub use enums::*;
pub use host::{
    HardwareInformation, HardwareInformationBuilder, Host, HostBuilder, Spm, SpmBuilder,
    VmSummary, VmSummaryBuilder,
};
pub use network::{
    Ip, IpBuilder, Mac, MacBuilder, Network, NetworkBuilder, Nic, NicBuilder, NicConfiguration,
    NicConfigurationBuilder, Vlan, VlanBuilder, VnicPassThrough, VnicPassThroughBuilder,
    VnicProfile, VnicProfileBuilder,
};
pub use statistic::{Statistic, StatisticBuilder, Value, ValueBuilder};
pub use storage::{
    Disk, DiskAttachment, DiskAttachmentBuilder, DiskBuilder, HostStorage, HostStorageBuilder,
    LogicalUnit, LogicalUnitBuilder, StorageDomain, StorageDomainBuilder, StorageDomainLease,
    StorageDomainLeaseBuilder,
};
pub use template::{Template, TemplateBuilder, TemplateVersion, TemplateVersionBuilder};
pub use vm::{
    Boot, BootBuilder, Console, ConsoleBuilder, Cpu, CpuBuilder, CpuTopology, CpuTopologyBuilder,
    CustomProperty, CustomPropertyBuilder, Display, DisplayBuilder, HighAvailability,
    HighAvailabilityBuilder, Initialization, InitializationBuilder, InstanceType,
    InstanceTypeBuilder, MemoryOverCommit, MemoryOverCommitBuilder, MemoryPolicy,
    MemoryPolicyBuilder, OperatingSystem, OperatingSystemBuilder, Snapshot, SnapshotBuilder,
    TransparentHugePages, TransparentHugePagesBuilder, Vm, VmBuilder, VmPlacementPolicy,
    VmPlacementPolicyBuilder,
};
