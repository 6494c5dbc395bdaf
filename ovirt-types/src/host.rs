//! Hypervisor hosts.

use crate::access::{Permission, Tag};
use crate::api::Version;
use crate::cluster::Cluster;
use crate::enums::{ExternalStatus, HostStatus, HostType, SpmStatus};
use crate::network::Nic;
use crate::statistic::Statistic;
use crate::vm::{Cpu, OperatingSystem};
use ovirt_core::List;

xml_struct! {
    /// A host running the hypervisor.
    pub struct Host as "host" in "hosts" {
        builder HostBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            /// Address the engine uses to reach the host.
            address: String = "address",
            status: HostStatus = "status",
            status_detail: String = "status_detail",
            r#type: HostType = "type",
            port: i64 = "port",
            /// Physical memory in bytes.
            memory: i64 = "memory",
            max_scheduling_memory: i64 = "max_scheduling_memory",
            external_status: ExternalStatus = "external_status",
            update_available: bool = "update_available",
            nics: List<Nic> = "nics",
            statistics: List<Statistic> = "statistics",
            permissions: List<Permission> = "permissions",
            tags: List<Tag> = "tags",
        }
        nested {
            cluster: Cluster = "cluster",
            cpu: Cpu = "cpu",
            os: OperatingSystem = "os",
            version: Version = "version",
            libvirt_version: Version = "libvirt_version",
            spm: Spm = "spm",
            summary: VmSummary = "summary",
            hardware_information: HardwareInformation = "hardware_information",
        }
        links {
            "nics" => nics,
            "statistics" => statistics,
            "permissions" => permissions,
            "tags" => tags,
        }
    }
}

xml_struct! {
    /// Storage pool manager state of a host.
    pub struct Spm as "spm" in "spms" {
        builder SpmBuilder;
        attributes {}
        elements {
            priority: i64 = "priority",
            status: SpmStatus = "status",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// Counts of the virtual machines on a host.
    pub struct VmSummary as "vm_summary" in "vm_summaries" {
        builder VmSummaryBuilder;
        attributes {}
        elements {
            active: i64 = "active",
            migrating: i64 = "migrating",
            total: i64 = "total",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    pub struct HardwareInformation as "hardware_information" in "hardware_informations" {
        builder HardwareInformationBuilder;
        attributes {}
        elements {
            family: String = "family",
            manufacturer: String = "manufacturer",
            product_name: String = "product_name",
            serial_number: String = "serial_number",
            uuid: String = "uuid",
            version: String = "version",
        }
        nested {}
        links {}
    }
}
