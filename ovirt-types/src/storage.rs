//! Storage domains, disks and their attachments.

use crate::access::Permission;
use crate::cluster::DataCenter;
use crate::enums::{
    DiskContentType, DiskFormat, DiskInterface, DiskStatus, DiskStorageType, ExternalStatus,
    LunStatus, NfsVersion, StorageDomainStatus, StorageDomainType, StorageFormat, StorageType,
};
use crate::host::Host;
use crate::statistic::Statistic;
use crate::template::Template;
use crate::vm::Vm;
use ovirt_core::List;

xml_struct! {
    /// A storage domain.
    pub struct StorageDomain as "storage_domain" in "storage_domains" {
        builder StorageDomainBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            /// Free space in bytes.
            available: i64 = "available",
            /// Used space in bytes.
            used: i64 = "used",
            /// Space promised to thin disks, in bytes.
            committed: i64 = "committed",
            block_size: i64 = "block_size",
            r#type: StorageDomainType = "type",
            status: StorageDomainStatus = "status",
            external_status: ExternalStatus = "external_status",
            master: bool = "master",
            backup: bool = "backup",
            wipe_after_delete: bool = "wipe_after_delete",
            discard_after_delete: bool = "discard_after_delete",
            supports_discard: bool = "supports_discard",
            warning_low_space_indicator: i64 = "warning_low_space_indicator",
            critical_space_action_blocker: i64 = "critical_space_action_blocker",
            storage_format: StorageFormat = "storage_format",
            data_centers: List<DataCenter> = "data_centers",
            disks: List<Disk> = "disks",
            templates: List<Template> = "templates",
            vms: List<Vm> = "vms",
            permissions: List<Permission> = "permissions",
        }
        nested {
            storage: HostStorage = "storage",
            data_center: DataCenter = "data_center",
            host: Host = "host",
        }
        links {
            "disks" => disks,
            "templates" => templates,
            "vms" => vms,
            "permissions" => permissions,
        }
    }
}

xml_struct! {
    /// Connection details of the storage behind a domain or LUN disk.
    pub struct HostStorage as "host_storage" in "host_storages" {
        builder HostStorageBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            address: String = "address",
            path: String = "path",
            r#type: StorageType = "type",
            mount_options: String = "mount_options",
            nfs_version: NfsVersion = "nfs_version",
            nfs_timeo: i64 = "nfs_timeo",
            nfs_retrans: i64 = "nfs_retrans",
            vfs_type: String = "vfs_type",
            portal: String = "portal",
            target: String = "target",
            port: i64 = "port",
            username: String = "username",
            password: String = "password",
            logical_units: List<LogicalUnit> = "logical_units",
        }
        nested {
            host: Host = "host",
        }
        links {}
    }
}

xml_struct! {
    /// A LUN exposed by block storage.
    pub struct LogicalUnit as "logical_unit" in "logical_units" {
        builder LogicalUnitBuilder;
        attributes {
            id: String = "id",
        }
        elements {
            address: String = "address",
            port: i64 = "port",
            target: String = "target",
            lun_mapping: i64 = "lun_mapping",
            paths: i64 = "paths",
            product_id: String = "product_id",
            vendor_id: String = "vendor_id",
            serial: String = "serial",
            /// Size in bytes.
            size: i64 = "size",
            status: LunStatus = "status",
            storage_domain_id: String = "storage_domain_id",
            volume_group_id: String = "volume_group_id",
            discard_max_size: i64 = "discard_max_size",
            discard_zeroes_data: bool = "discard_zeroes_data",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// A virtual disk.
    pub struct Disk as "disk" in "disks" {
        builder DiskBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            alias: String = "alias",
            /// Bytes actually allocated.
            actual_size: i64 = "actual_size",
            /// Size seen by the guest, in bytes.
            provisioned_size: i64 = "provisioned_size",
            total_size: i64 = "total_size",
            format: DiskFormat = "format",
            status: DiskStatus = "status",
            content_type: DiskContentType = "content_type",
            storage_type: DiskStorageType = "storage_type",
            bootable: bool = "bootable",
            shareable: bool = "shareable",
            sparse: bool = "sparse",
            propagate_errors: bool = "propagate_errors",
            wipe_after_delete: bool = "wipe_after_delete",
            image_id: String = "image_id",
            logical_name: String = "logical_name",
            storage_domains: List<StorageDomain> = "storage_domains",
            permissions: List<Permission> = "permissions",
            statistics: List<Statistic> = "statistics",
        }
        nested {
            vm: Vm = "vm",
            template: Template = "template",
            lun_storage: HostStorage = "lun_storage",
        }
        links {
            "permissions" => permissions,
            "statistics" => statistics,
        }
    }
}

xml_struct! {
    /// Attachment of a disk to a virtual machine or template.
    pub struct DiskAttachment as "disk_attachment" in "disk_attachments" {
        builder DiskAttachmentBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            active: bool = "active",
            bootable: bool = "bootable",
            pass_discard: bool = "pass_discard",
            read_only: bool = "read_only",
            uses_scsi_reservation: bool = "uses_scsi_reservation",
            interface: DiskInterface = "interface",
            logical_name: String = "logical_name",
        }
        nested {
            disk: Disk = "disk",
            vm: Vm = "vm",
            template: Template = "template",
        }
        links {}
    }
}

xml_struct! {
    /// A VM or template lease held on a storage domain.
    pub struct StorageDomainLease as "lease" in "leases" {
        builder StorageDomainLeaseBuilder;
        attributes {}
        elements {}
        nested {
            storage_domain: StorageDomain = "storage_domain",
        }
        links {}
    }
}
