//! Virtual machines and their configuration.

use crate::access::{Permission, Tag};
use crate::api::Version;
use crate::cluster::Cluster;
use crate::enums::{
    Architecture, AutoPinningPolicy, BootDevice, CpuMode, DisplayType, SnapshotStatus, SnapshotType, VmAffinity,
    VmStatus, VmType,
};
use crate::host::Host;
use crate::network::{Nic, NicConfiguration};
use crate::statistic::Statistic;
use crate::storage::{Disk, DiskAttachment, StorageDomain, StorageDomainLease};
use crate::template::Template;
use chrono::{DateTime, FixedOffset};
use ovirt_core::List;

xml_struct! {
    /// A virtual machine.
    pub struct Vm as "vm" in "vms" {
        builder VmBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            status: VmStatus = "status",
            status_detail: String = "status_detail",
            stop_reason: String = "stop_reason",
            r#type: VmType = "type",
            /// Memory in bytes.
            memory: i64 = "memory",
            cpu_shares: i64 = "cpu_shares",
            stateless: bool = "stateless",
            delete_protected: bool = "delete_protected",
            run_once: bool = "run_once",
            next_run_configuration_exists: bool = "next_run_configuration_exists",
            creation_time: DateTime<FixedOffset> = "creation_time",
            start_time: DateTime<FixedOffset> = "start_time",
            stop_time: DateTime<FixedOffset> = "stop_time",
            fqdn: String = "fqdn",
            origin: String = "origin",
            auto_pinning_policy: AutoPinningPolicy = "auto_pinning_policy",
            custom_properties: List<CustomProperty> = "custom_properties",
            nics: List<Nic> = "nics",
            disk_attachments: List<DiskAttachment> = "disk_attachments",
            snapshots: List<Snapshot> = "snapshots",
            tags: List<Tag> = "tags",
            permissions: List<Permission> = "permissions",
            statistics: List<Statistic> = "statistics",
        }
        nested {
            cpu: Cpu = "cpu",
            memory_policy: MemoryPolicy = "memory_policy",
            os: OperatingSystem = "os",
            high_availability: HighAvailability = "high_availability",
            initialization: Initialization = "initialization",
            placement_policy: VmPlacementPolicy = "placement_policy",
            display: Display = "display",
            console: Console = "console",
            cluster: Cluster = "cluster",
            host: Host = "host",
            template: Template = "template",
            original_template: Template = "original_template",
            instance_type: InstanceType = "instance_type",
            storage_domain: StorageDomain = "storage_domain",
            lease: StorageDomainLease = "lease",
        }
        links {
            "nics" => nics,
            "diskattachments" => disk_attachments,
            "snapshots" => snapshots,
            "tags" => tags,
            "permissions" => permissions,
            "statistics" => statistics,
        }
    }
}

xml_struct! {
    /// Virtual CPU configuration.
    pub struct Cpu as "cpu" in "cpus" {
        builder CpuBuilder;
        attributes {}
        elements {
            architecture: Architecture = "architecture",
            mode: CpuMode = "mode",
            name: String = "name",
            r#type: String = "type",
            level: i64 = "level",
            /// Clock speed in MHz.
            speed: f64 = "speed",
        }
        nested {
            topology: CpuTopology = "topology",
        }
        links {}
    }
}

xml_struct! {
    pub struct CpuTopology as "cpu_topology" in "cpu_topologies" {
        builder CpuTopologyBuilder;
        attributes {}
        elements {
            cores: i64 = "cores",
            sockets: i64 = "sockets",
            threads: i64 = "threads",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// Memory limits and overcommit settings.
    pub struct MemoryPolicy as "memory_policy" in "memory_policies" {
        builder MemoryPolicyBuilder;
        attributes {}
        elements {
            /// Memory guaranteed to the guest, in bytes.
            guaranteed: i64 = "guaranteed",
            /// Upper bound for memory hot plug, in bytes.
            max: i64 = "max",
            ballooning: bool = "ballooning",
        }
        nested {
            over_commit: MemoryOverCommit = "over_commit",
            transparent_huge_pages: TransparentHugePages = "transparent_hugepages",
        }
        links {}
    }
}

xml_struct! {
    pub struct MemoryOverCommit as "memory_over_commit" in "memory_over_commits" {
        builder MemoryOverCommitBuilder;
        attributes {}
        elements {
            percent: i64 = "percent",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    pub struct TransparentHugePages as "transparent_hugepages" in "transparent_hugepages_list" {
        builder TransparentHugePagesBuilder;
        attributes {}
        elements {
            enabled: bool = "enabled",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// Guest operating system and boot configuration.
    pub struct OperatingSystem as "os" in "operating_systems" {
        builder OperatingSystemBuilder;
        attributes {}
        elements {
            r#type: String = "type",
            cmdline: String = "cmdline",
            custom_kernel_cmdline: String = "custom_kernel_cmdline",
            reported_kernel_cmdline: String = "reported_kernel_cmdline",
            kernel: String = "kernel",
            initrd: String = "initrd",
        }
        nested {
            boot: Boot = "boot",
            version: Version = "version",
        }
        links {}
    }
}

xml_struct! {
    /// Boot order.
    pub struct Boot as "boot" in "boots" {
        builder BootBuilder;
        attributes {}
        elements {
            /// Devices in the order they are tried.
            devices: Vec<BootDevice> = "devices",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    pub struct HighAvailability as "high_availability" in "high_availabilities" {
        builder HighAvailabilityBuilder;
        attributes {}
        elements {
            enabled: bool = "enabled",
            priority: i64 = "priority",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// Guest initialization data passed to cloud-init or sysprep.
    pub struct Initialization as "initialization" in "initializations" {
        builder InitializationBuilder;
        attributes {}
        elements {
            host_name: String = "host_name",
            domain: String = "domain",
            timezone: String = "timezone",
            user_name: String = "user_name",
            root_password: String = "root_password",
            authorized_ssh_keys: String = "authorized_ssh_keys",
            regenerate_ssh_keys: bool = "regenerate_ssh_keys",
            dns_servers: String = "dns_servers",
            dns_search: String = "dns_search",
            custom_script: String = "custom_script",
            nic_configurations: List<NicConfiguration> = "nic_configurations",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// Where a virtual machine may run.
    pub struct VmPlacementPolicy as "placement_policy" in "placement_policies" {
        builder VmPlacementPolicyBuilder;
        attributes {}
        elements {
            affinity: VmAffinity = "affinity",
            hosts: List<Host> = "hosts",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// A named value passed to engine hooks.
    pub struct CustomProperty as "custom_property" in "custom_properties" {
        builder CustomPropertyBuilder;
        attributes {}
        elements {
            name: String = "name",
            value: String = "value",
            regexp: String = "regexp",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// Remote display settings.
    pub struct Display as "display" in "displays" {
        builder DisplayBuilder;
        attributes {}
        elements {
            r#type: DisplayType = "type",
            address: String = "address",
            port: i64 = "port",
            secure_port: i64 = "secure_port",
            monitors: i64 = "monitors",
            single_qxl_pci: bool = "single_qxl_pci",
            allow_override: bool = "allow_override",
            copy_paste_enabled: bool = "copy_paste_enabled",
            file_transfer_enabled: bool = "file_transfer_enabled",
            smartcard_enabled: bool = "smartcard_enabled",
            keyboard_layout: String = "keyboard_layout",
            proxy: String = "proxy",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    pub struct Console as "console" in "consoles" {
        builder ConsoleBuilder;
        attributes {}
        elements {
            enabled: bool = "enabled",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// A point-in-time copy of a virtual machine.
    pub struct Snapshot as "snapshot" in "snapshots" {
        builder SnapshotBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            date: DateTime<FixedOffset> = "date",
            persist_memorystate: bool = "persist_memorystate",
            snapshot_status: SnapshotStatus = "snapshot_status",
            snapshot_type: SnapshotType = "snapshot_type",
            disks: List<Disk> = "disks",
            nics: List<Nic> = "nics",
        }
        nested {
            vm: Vm = "vm",
        }
        links {
            "disks" => disks,
            "nics" => nics,
        }
    }
}

xml_struct! {
    /// A predefined hardware profile for new virtual machines.
    pub struct InstanceType as "instance_type" in "instance_types" {
        builder InstanceTypeBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            r#type: VmType = "type",
            memory: i64 = "memory",
            nics: List<Nic> = "nics",
        }
        nested {
            cpu: Cpu = "cpu",
            memory_policy: MemoryPolicy = "memory_policy",
            os: OperatingSystem = "os",
            high_availability: HighAvailability = "high_availability",
            display: Display = "display",
            console: Console = "console",
        }
        links {
            "nics" => nics,
        }
    }
}
