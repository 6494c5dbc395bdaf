//! Logical networks, vNIC profiles and network interfaces.

use crate::access::Permission;
use crate::cluster::{Cluster, DataCenter};
use crate::enums::{
    BootProtocol, IpVersion, NetworkStatus, NetworkUsage, NicInterface, VnicPassThroughMode,
};
use crate::statistic::Statistic;
use crate::template::Template;
use crate::vm::Vm;
use ovirt_core::List;

xml_struct! {
    /// A logical network.
    pub struct Network as "network" in "networks" {
        builder NetworkBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            mtu: i64 = "mtu",
            stp: bool = "stp",
            required: bool = "required",
            display: bool = "display",
            profile_required: bool = "profile_required",
            port_isolation: bool = "port_isolation",
            status: NetworkStatus = "status",
            usages: Vec<NetworkUsage> = "usages",
            vnic_profiles: List<VnicProfile> = "vnic_profiles",
            permissions: List<Permission> = "permissions",
        }
        nested {
            data_center: DataCenter = "data_center",
            cluster: Cluster = "cluster",
            vlan: Vlan = "vlan",
            ip: Ip = "ip",
        }
        links {
            "vnicprofiles" => vnic_profiles,
            "permissions" => permissions,
        }
    }
}

xml_struct! {
    /// An 802.1Q tag. The tag number is carried in the `id` attribute.
    pub struct Vlan as "vlan" in "vlans" {
        builder VlanBuilder;
        attributes {
            id: i64 = "id",
        }
        elements {}
        nested {}
        links {}
    }
}

xml_struct! {
    /// A network interface of a virtual machine or template.
    pub struct Nic as "nic" in "nics" {
        builder NicBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            interface: NicInterface = "interface",
            linked: bool = "linked",
            plugged: bool = "plugged",
            on_boot: bool = "on_boot",
            boot_protocol: BootProtocol = "boot_protocol",
            statistics: List<Statistic> = "statistics",
        }
        nested {
            mac: Mac = "mac",
            vnic_profile: VnicProfile = "vnic_profile",
            network: Network = "network",
            vm: Vm = "vm",
            template: Template = "template",
        }
        links {
            "statistics" => statistics,
        }
    }
}

xml_struct! {
    pub struct Mac as "mac" in "macs" {
        builder MacBuilder;
        attributes {}
        elements {
            address: String = "address",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// Settings applied to the vNICs attached to a logical network.
    pub struct VnicProfile as "vnic_profile" in "vnic_profiles" {
        builder VnicProfileBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            port_mirroring: bool = "port_mirroring",
            migratable: bool = "migratable",
            permissions: List<Permission> = "permissions",
        }
        nested {
            network: Network = "network",
            pass_through: VnicPassThrough = "pass_through",
        }
        links {
            "permissions" => permissions,
        }
    }
}

xml_struct! {
    pub struct VnicPassThrough as "vnic_pass_through" in "vnic_pass_throughs" {
        builder VnicPassThroughBuilder;
        attributes {}
        elements {
            mode: VnicPassThroughMode = "mode",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// An IP address configuration.
    pub struct Ip as "ip" in "ips" {
        builder IpBuilder;
        attributes {}
        elements {
            address: String = "address",
            gateway: String = "gateway",
            netmask: String = "netmask",
            version: IpVersion = "version",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// Guest interface configuration applied at first boot.
    pub struct NicConfiguration as "nic_configuration" in "nic_configurations" {
        builder NicConfigurationBuilder;
        attributes {}
        elements {
            name: String = "name",
            on_boot: bool = "on_boot",
            boot_protocol: BootProtocol = "boot_protocol",
            ipv6_boot_protocol: BootProtocol = "ipv6_boot_protocol",
        }
        nested {
            ip: Ip = "ip",
            ipv6: Ip = "ipv6",
        }
        links {}
    }
}
