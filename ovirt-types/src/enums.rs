//! Enumerated values of the oVirt schema.
//!
//! Each enum parses from and prints as the lowercase name the engine uses
//! in XML. Unknown names are rejected.

xml_enum! {
    /// Run state of a virtual machine.
    pub enum VmStatus {
        Down = "down",
        ImageLocked = "image_locked",
        Migrating = "migrating",
        NotResponding = "not_responding",
        Paused = "paused",
        PoweringDown = "powering_down",
        PoweringUp = "powering_up",
        RebootInProgress = "reboot_in_progress",
        RestoringState = "restoring_state",
        SavingState = "saving_state",
        Suspended = "suspended",
        Unassigned = "unassigned",
        Unknown = "unknown",
        Up = "up",
        WaitForLaunch = "wait_for_launch",
    }
}

xml_enum! {
    /// Optimization profile of a virtual machine or template.
    pub enum VmType {
        Desktop = "desktop",
        HighPerformance = "high_performance",
        Server = "server",
    }
}

xml_enum! {
    /// State of a host.
    pub enum HostStatus {
        Connecting = "connecting",
        Down = "down",
        Error = "error",
        Initializing = "initializing",
        InstallFailed = "install_failed",
        Installing = "installing",
        InstallingOs = "installing_os",
        Kdumping = "kdumping",
        Maintenance = "maintenance",
        NonOperational = "non_operational",
        NonResponsive = "non_responsive",
        PendingApproval = "pending_approval",
        PreparingForMaintenance = "preparing_for_maintenance",
        Reboot = "reboot",
        Unassigned = "unassigned",
        Up = "up",
    }
}

xml_enum! {
    /// Kind of operating system installed on a host.
    pub enum HostType {
        OvirtNode = "ovirt_node",
        Rhel = "rhel",
        Rhev = "rhev_h",
    }
}

xml_enum! {
    /// Storage pool manager role of a host.
    pub enum SpmStatus {
        Contending = "contending",
        None = "none",
        Spm = "spm",
    }
}

xml_enum! {
    /// State of a data center.
    pub enum DataCenterStatus {
        Contend = "contend",
        Maintenance = "maintenance",
        NotOperational = "not_operational",
        Problematic = "problematic",
        Uninitialized = "uninitialized",
        Up = "up",
    }
}

xml_enum! {
    /// On-disk metadata format of storage.
    pub enum StorageFormat {
        V1 = "v1",
        V2 = "v2",
        V3 = "v3",
        V4 = "v4",
        V5 = "v5",
    }
}

xml_enum! {
    /// Quota enforcement of a data center.
    pub enum QuotaModeType {
        Audit = "audit",
        Disabled = "disabled",
        Enabled = "enabled",
    }
}

xml_enum! {
    /// Image format of a disk.
    pub enum DiskFormat {
        Cow = "cow",
        Raw = "raw",
    }
}

xml_enum! {
    /// State of a disk.
    pub enum DiskStatus {
        Illegal = "illegal",
        Locked = "locked",
        Ok = "ok",
    }
}

xml_enum! {
    /// What a disk holds.
    pub enum DiskContentType {
        BackupScratch = "backup_scratch",
        Data = "data",
        HostedEngine = "hosted_engine",
        HostedEngineConfiguration = "hosted_engine_configuration",
        HostedEngineMetadata = "hosted_engine_metadata",
        HostedEngineSanlock = "hosted_engine_sanlock",
        Iso = "iso",
        MemoryDumpVolume = "memory_dump_volume",
        MemoryMetadataVolume = "memory_metadata_volume",
        OvfStore = "ovf_store",
    }
}

xml_enum! {
    /// Backing of a disk.
    pub enum DiskStorageType {
        Cinder = "cinder",
        Image = "image",
        Lun = "lun",
        ManagedBlockStorage = "managed_block_storage",
    }
}

xml_enum! {
    /// Bus a disk is attached through.
    pub enum DiskInterface {
        Ide = "ide",
        Sata = "sata",
        Spapr = "spapr_vscsi",
        Virtio = "virtio",
        VirtioScsi = "virtio_scsi",
    }
}

xml_enum! {
    /// Emulated model of a network interface.
    pub enum NicInterface {
        E1000 = "e1000",
        E1000e = "e1000e",
        PciPassthrough = "pci_passthrough",
        Rtl8139 = "rtl8139",
        Rtl8139Virtio = "rtl8139_virtio",
        SpaprVlan = "spapr_vlan",
        Virtio = "virtio",
    }
}

xml_enum! {
    /// Role a logical network plays in a cluster.
    pub enum NetworkUsage {
        DefaultRoute = "default_route",
        Display = "display",
        Gluster = "gluster",
        Management = "management",
        Migration = "migration",
        Vm = "vm",
    }
}

xml_enum! {
    /// State of a logical network.
    pub enum NetworkStatus {
        NonOperational = "non_operational",
        Operational = "operational",
    }
}

xml_enum! {
    /// Purpose of a storage domain.
    pub enum StorageDomainType {
        Data = "data",
        Export = "export",
        Image = "image",
        Iso = "iso",
        ManagedBlockStorage = "managed_block_storage",
        Volume = "volume",
    }
}

xml_enum! {
    /// State of a storage domain.
    pub enum StorageDomainStatus {
        Activating = "activating",
        Active = "active",
        Detaching = "detaching",
        Inactive = "inactive",
        Locked = "locked",
        Maintenance = "maintenance",
        Mixed = "mixed",
        PreparingForMaintenance = "preparing_for_maintenance",
        Unattached = "unattached",
        Unknown = "unknown",
    }
}

xml_enum! {
    /// Transport used to reach storage.
    pub enum StorageType {
        Cinder = "cinder",
        Fcp = "fcp",
        Glance = "glance",
        Glusterfs = "glusterfs",
        Iscsi = "iscsi",
        Localfs = "localfs",
        ManagedBlockStorage = "managed_block_storage",
        Nfs = "nfs",
        Posixfs = "posixfs",
    }
}

xml_enum! {
    /// NFS protocol version.
    pub enum NfsVersion {
        Auto = "auto",
        V3 = "v3",
        V4 = "v4",
        V40 = "v4_0",
        V41 = "v4_1",
        V42 = "v4_2",
    }
}

xml_enum! {
    /// Health reported by an external system.
    pub enum ExternalStatus {
        Error = "error",
        Failure = "failure",
        Info = "info",
        Ok = "ok",
        Warning = "warning",
    }
}

xml_enum! {
    /// CPU architecture.
    pub enum Architecture {
        Aarch64 = "aarch64",
        Ppc64 = "ppc64",
        S390x = "s390x",
        Undefined = "undefined",
        X86_64 = "x86_64",
    }
}

xml_enum! {
    /// How the guest CPU maps to the host CPU.
    pub enum CpuMode {
        Custom = "custom",
        HostModel = "host_model",
        HostPassthrough = "host_passthrough",
    }
}

xml_enum! {
    /// Device a virtual machine boots from.
    pub enum BootDevice {
        Cdrom = "cdrom",
        HardDisk = "hd",
        Network = "network",
    }
}

xml_enum! {
    /// Address configuration protocol of an interface.
    pub enum BootProtocol {
        Autoconf = "autoconf",
        Dhcp = "dhcp",
        None = "none",
        PolyDhcpAutoconf = "poly_dhcp_autoconf",
        Static = "static",
    }
}

xml_enum! {
    /// IP protocol version.
    pub enum IpVersion {
        V4 = "v4",
        V6 = "v6",
    }
}

xml_enum! {
    /// Remote display protocol.
    pub enum DisplayType {
        Spice = "spice",
        Vnc = "vnc",
    }
}

xml_enum! {
    /// How virtual CPUs are pinned to host CPUs.
    pub enum AutoPinningPolicy {
        Adjust = "adjust",
        Disabled = "disabled",
        Existing = "existing",
    }
}

xml_enum! {
    /// Migration policy of a virtual machine.
    pub enum VmAffinity {
        Migratable = "migratable",
        Pinned = "pinned",
        UserMigratable = "user_migratable",
    }
}

xml_enum! {
    /// Network switch implementation of a cluster.
    pub enum SwitchType {
        Legacy = "legacy",
        Ovs = "ovs",
    }
}

xml_enum! {
    /// Firewall of the hosts in a cluster.
    pub enum FirewallType {
        Firewalld = "firewalld",
        Iptables = "iptables",
    }
}

xml_enum! {
    /// State of a template.
    pub enum TemplateStatus {
        Illegal = "illegal",
        Locked = "locked",
        Ok = "ok",
    }
}

xml_enum! {
    /// State of a snapshot.
    pub enum SnapshotStatus {
        InPreview = "in_preview",
        Locked = "locked",
        Ok = "ok",
    }
}

xml_enum! {
    /// Kind of snapshot.
    pub enum SnapshotType {
        Active = "active",
        Preview = "preview",
        Regular = "regular",
        Stateless = "stateless",
    }
}

xml_enum! {
    /// State of an asynchronous job.
    pub enum JobStatus {
        Aborted = "aborted",
        Failed = "failed",
        Finished = "finished",
        Started = "started",
        Unknown = "unknown",
    }
}

xml_enum! {
    /// State of a job step.
    pub enum StepStatus {
        Aborted = "aborted",
        Failed = "failed",
        Finished = "finished",
        Started = "started",
        Unknown = "unknown",
    }
}

xml_enum! {
    /// Phase a job step belongs to.
    pub enum StepType {
        Executing = "executing",
        Finalizing = "finalizing",
        RebalancingVolume = "rebalancing_volume",
        RemovingBricks = "removing_bricks",
        Unknown = "unknown",
        Validating = "validating",
    }
}

xml_enum! {
    /// Whether a statistic is a gauge or a counter.
    pub enum StatisticKind {
        Counter = "counter",
        Gauge = "gauge",
    }
}

xml_enum! {
    /// Representation of statistic values.
    pub enum ValueType {
        Decimal = "decimal",
        Integer = "integer",
        String = "string",
    }
}

xml_enum! {
    /// Unit of a statistic.
    pub enum StatisticUnit {
        BitsPerSecond = "bits_per_second",
        BytesPerSecond = "bytes_per_second",
        Bytes = "bytes",
        CountPerSecond = "count_per_second",
        None = "none",
        Percent = "percent",
        Seconds = "seconds",
    }
}

xml_enum! {
    /// Device pass-through mode of a vNIC profile.
    pub enum VnicPassThroughMode {
        Disabled = "disabled",
        Enabled = "enabled",
    }
}

xml_enum! {
    /// State of a LUN as seen by a host.
    pub enum LunStatus {
        Free = "free",
        Unusable = "unusable",
        Used = "used",
    }
}
