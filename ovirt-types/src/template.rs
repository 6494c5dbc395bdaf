//! Templates and template versions.

use crate::access::{Permission, Tag};
use crate::cluster::Cluster;
use crate::enums::{TemplateStatus, VmType};
use crate::network::Nic;
use crate::storage::{DiskAttachment, StorageDomain, StorageDomainLease};
use crate::vm::{
    Console, Cpu, Display, HighAvailability, Initialization, MemoryPolicy, OperatingSystem, Vm,
};
use chrono::{DateTime, FixedOffset};
use ovirt_core::List;

xml_struct! {
    /// A template new virtual machines are created from.
    pub struct Template as "template" in "templates" {
        builder TemplateBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            status: TemplateStatus = "status",
            r#type: VmType = "type",
            memory: i64 = "memory",
            creation_time: DateTime<FixedOffset> = "creation_time",
            stateless: bool = "stateless",
            delete_protected: bool = "delete_protected",
            origin: String = "origin",
            nics: List<Nic> = "nics",
            disk_attachments: List<DiskAttachment> = "disk_attachments",
            tags: List<Tag> = "tags",
            permissions: List<Permission> = "permissions",
        }
        nested {
            cpu: Cpu = "cpu",
            memory_policy: MemoryPolicy = "memory_policy",
            os: OperatingSystem = "os",
            high_availability: HighAvailability = "high_availability",
            initialization: Initialization = "initialization",
            display: Display = "display",
            console: Console = "console",
            cluster: Cluster = "cluster",
            storage_domain: StorageDomain = "storage_domain",
            lease: StorageDomainLease = "lease",
            /// The virtual machine the template was created from.
            vm: Vm = "vm",
            version: TemplateVersion = "version",
        }
        links {
            "nics" => nics,
            "diskattachments" => disk_attachments,
            "tags" => tags,
            "permissions" => permissions,
        }
    }
}

xml_struct! {
    /// Position of a template in its version chain.
    pub struct TemplateVersion as "template_version" in "template_versions" {
        builder TemplateVersionBuilder;
        attributes {}
        elements {
            version_name: String = "version_name",
            version_number: i64 = "version_number",
        }
        nested {
            base_template: Template = "base_template",
        }
        links {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovirt_core::XmlRead;

    #[test]
    fn test_read_template_versions() {
        let xml = r#"<templates>
  <template href="/ovirt-engine/api/templates/t0" id="t0">
    <name>Blank</name>
    <description>Blank template</description>
    <link href="/ovirt-engine/api/templates/t0/permissions" rel="permissions"/>
    <memory>1073741824</memory>
    <status>ok</status>
    <type>server</type>
    <version><version_number>1</version_number></version>
  </template>
  <template href="/ovirt-engine/api/templates/t2" id="t2">
    <name>rhel8</name>
    <creation_time>2023-11-02T08:15:30.000Z</creation_time>
    <status>locked</status>
    <version>
      <version_name>patched</version_name>
      <version_number>2</version_number>
      <base_template href="/ovirt-engine/api/templates/t1" id="t1"/>
    </version>
    <lease><storage_domain id="s1"/></lease>
    <vm href="/ovirt-engine/api/vms/src" id="src"/>
  </template>
</templates>"#;
        let templates = Template::list_from_xml(xml).expect("Failed to read templates");
        assert_eq!(templates.len(), 2);

        let blank = &templates[0];
        assert_eq!(blank.r#type(), Some(&VmType::Server));
        assert_eq!(blank.version().unwrap().version_number(), Some(&1));
        assert!(blank.permissions().unwrap().href().is_some());

        let patched = &templates[1];
        assert_eq!(patched.status(), Some(&TemplateStatus::Locked));
        let version = patched.version().unwrap();
        assert_eq!(version.version_name().map(String::as_str), Some("patched"));
        assert_eq!(
            version.base_template().unwrap().id().map(String::as_str),
            Some("t1")
        );
        assert_eq!(patched.vm().unwrap().id().map(String::as_str), Some("src"));
        assert!(blank.lease().is_none());
        assert_eq!(
            patched.lease().unwrap().storage_domain().unwrap().id().map(String::as_str),
            Some("s1")
        );
        assert_eq!(patched.creation_time().unwrap().offset().local_minus_utc(), 0);
    }
}
