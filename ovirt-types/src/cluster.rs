//! Clusters, data centers and affinity groups.

use crate::access::Permission;
use crate::api::Version;
use crate::enums::{DataCenterStatus, FirewallType, QuotaModeType, StorageFormat, SwitchType};
use crate::host::Host;
use crate::network::Network;
use crate::storage::StorageDomain;
use crate::vm::{Cpu, MemoryPolicy, Vm};
use ovirt_core::List;

xml_struct! {
    /// A group of hosts sharing CPU type, networks and storage.
    pub struct Cluster as "cluster" in "clusters" {
        builder ClusterBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            ballooning_enabled: bool = "ballooning_enabled",
            virt_service: bool = "virt_service",
            gluster_service: bool = "gluster_service",
            threads_as_cores: bool = "threads_as_cores",
            ha_reservation: bool = "ha_reservation",
            trusted_service: bool = "trusted_service",
            tunnel_migration: bool = "tunnel_migration",
            switch_type: SwitchType = "switch_type",
            firewall_type: FirewallType = "firewall_type",
            networks: List<Network> = "networks",
            affinity_groups: List<AffinityGroup> = "affinity_groups",
            permissions: List<Permission> = "permissions",
        }
        nested {
            cpu: Cpu = "cpu",
            data_center: DataCenter = "data_center",
            version: Version = "version",
            memory_policy: MemoryPolicy = "memory_policy",
            management_network: Network = "management_network",
        }
        links {
            "networks" => networks,
            "affinitygroups" => affinity_groups,
            "permissions" => permissions,
        }
    }
}

xml_struct! {
    /// A data center, the top level container of clusters and storage.
    pub struct DataCenter as "data_center" in "data_centers" {
        builder DataCenterBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            /// Whether storage is local to a single host.
            local: bool = "local",
            status: DataCenterStatus = "status",
            storage_format: StorageFormat = "storage_format",
            quota_mode: QuotaModeType = "quota_mode",
            supported_versions: List<Version> = "supported_versions",
            clusters: List<Cluster> = "clusters",
            networks: List<Network> = "networks",
            storage_domains: List<StorageDomain> = "storage_domains",
            permissions: List<Permission> = "permissions",
        }
        nested {
            version: Version = "version",
        }
        links {
            "clusters" => clusters,
            "networks" => networks,
            "storagedomains" => storage_domains,
            "permissions" => permissions,
        }
    }
}

xml_struct! {
    /// A set of virtual machines and hosts that are placed together or apart.
    pub struct AffinityGroup as "affinity_group" in "affinity_groups" {
        builder AffinityGroupBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            enforcing: bool = "enforcing",
            positive: bool = "positive",
            priority: f64 = "priority",
            vms: List<Vm> = "vms",
            hosts: List<Host> = "hosts",
        }
        nested {
            cluster: Cluster = "cluster",
            vms_rule: AffinityRule = "vms_rule",
            hosts_rule: AffinityRule = "hosts_rule",
        }
        links {
            "vms" => vms,
            "hosts" => hosts,
        }
    }
}

xml_struct! {
    pub struct AffinityRule as "affinity_rule" in "affinity_rules" {
        builder AffinityRuleBuilder;
        attributes {}
        elements {
            enabled: bool = "enabled",
            enforcing: bool = "enforcing",
            positive: bool = "positive",
        }
        nested {}
        links {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Architecture;
    use ovirt_core::XmlRead;

    #[test]
    fn test_read_cluster() {
        let xml = r#"<cluster href="/ovirt-engine/api/clusters/c1" id="c1">
  <name>Default</name>
  <description>The default server cluster</description>
  <link href="/ovirt-engine/api/clusters/c1/networks" rel="networks"/>
  <link href="/ovirt-engine/api/clusters/c1/affinitygroups" rel="affinitygroups"/>
  <ballooning_enabled>true</ballooning_enabled>
  <cpu><architecture>x86_64</architecture><type>Intel Nehalem Family</type></cpu>
  <firewall_type>firewalld</firewall_type>
  <switch_type>legacy</switch_type>
  <threads_as_cores>false</threads_as_cores>
  <version><major>4</major><minor>6</minor></version>
  <virt_service>true</virt_service>
  <data_center href="/ovirt-engine/api/datacenters/d1" id="d1"/>
  <management_network href="/ovirt-engine/api/networks/n1" id="n1"/>
</cluster>"#;
        let cluster = Cluster::from_xml(xml).expect("Failed to read cluster");
        assert_eq!(cluster.name().map(String::as_str), Some("Default"));
        assert_eq!(cluster.ballooning_enabled(), Some(&true));
        assert_eq!(cluster.firewall_type(), Some(&FirewallType::Firewalld));
        assert_eq!(cluster.switch_type(), Some(&SwitchType::Legacy));
        assert_eq!(cluster.cpu().unwrap().architecture(), Some(&Architecture::X86_64));
        assert_eq!(cluster.version().unwrap().minor(), Some(&6));
        assert_eq!(cluster.data_center().unwrap().id().map(String::as_str), Some("d1"));
        assert_eq!(
            cluster.management_network().unwrap().href().map(String::as_str),
            Some("/ovirt-engine/api/networks/n1")
        );
        assert!(cluster.networks().unwrap().href().is_some());
        assert_eq!(
            cluster.affinity_groups().unwrap().href(),
            Some("/ovirt-engine/api/clusters/c1/affinitygroups")
        );
        assert!(cluster.permissions().is_none());
    }

    #[test]
    fn test_read_affinity_groups() {
        let xml = r#"<affinity_groups>
  <affinity_group href="/ovirt-engine/api/clusters/c1/affinitygroups/g1" id="g1">
    <name>web-spread</name>
    <link href="/ovirt-engine/api/clusters/c1/affinitygroups/g1/vms" rel="vms"/>
    <enforcing>true</enforcing>
    <positive>false</positive>
    <priority>1.0</priority>
    <hosts_rule><enabled>false</enabled><enforcing>false</enforcing><positive>true</positive></hosts_rule>
    <vms_rule><enabled>true</enabled><enforcing>true</enforcing><positive>false</positive></vms_rule>
    <cluster href="/ovirt-engine/api/clusters/c1" id="c1"/>
  </affinity_group>
  <affinity_group id="g2"><name>db-pair</name><positive>true</positive></affinity_group>
</affinity_groups>"#;
        let groups = AffinityGroup::list_from_xml(xml).unwrap();
        assert_eq!(groups.len(), 2);

        let spread = &groups[0];
        assert_eq!(spread.name().map(String::as_str), Some("web-spread"));
        assert_eq!(spread.enforcing(), Some(&true));
        assert_eq!(spread.positive(), Some(&false));
        assert_eq!(spread.vms_rule().unwrap().enabled(), Some(&true));
        assert_eq!(spread.hosts_rule().unwrap().positive(), Some(&true));
        assert_eq!(spread.cluster().unwrap().id().map(String::as_str), Some("c1"));
        assert_eq!(
            spread.vms().unwrap().href(),
            Some("/ovirt-engine/api/clusters/c1/affinitygroups/g1/vms")
        );
        assert!(spread.hosts().is_none());
        assert_eq!(groups[1].name().map(String::as_str), Some("db-pair"));
    }

    #[test]
    fn test_read_data_center() {
        let xml = r#"<data_center href="/ovirt-engine/api/datacenters/d1" id="d1">
  <name>Default</name>
  <link href="/ovirt-engine/api/datacenters/d1/clusters" rel="clusters"/>
  <link href="/ovirt-engine/api/datacenters/d1/storagedomains" rel="storagedomains"/>
  <local>false</local>
  <quota_mode>disabled</quota_mode>
  <status>up</status>
  <storage_format>v5</storage_format>
  <supported_versions>
    <version><major>4</major><minor>6</minor></version>
    <version><major>4</major><minor>7</minor></version>
  </supported_versions>
  <version><major>4</major><minor>7</minor></version>
</data_center>"#;
        let dc = DataCenter::from_xml(xml).unwrap();
        assert_eq!(dc.status(), Some(&DataCenterStatus::Up));
        assert_eq!(dc.storage_format(), Some(&StorageFormat::V5));
        assert_eq!(dc.quota_mode(), Some(&QuotaModeType::Disabled));
        let versions = dc.supported_versions().unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1].minor(), Some(&7));
        assert_eq!(
            dc.storage_domains().unwrap().href(),
            Some("/ovirt-engine/api/datacenters/d1/storagedomains")
        );
        assert!(dc.clusters().unwrap().is_empty());
    }
}
