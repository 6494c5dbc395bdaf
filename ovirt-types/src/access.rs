//! Users, groups, roles, permissions and tags.

use crate::cluster::{Cluster, DataCenter};
use crate::host::Host;
use crate::storage::{Disk, StorageDomain};
use crate::template::Template;
use crate::vm::Vm;
use ovirt_core::List;

xml_struct! {
    /// A user known to the engine.
    pub struct User as "user" in "users" {
        builder UserBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            department: String = "department",
            domain_entry_id: String = "domain_entry_id",
            email: String = "email",
            last_name: String = "last_name",
            logged_in: bool = "logged_in",
            namespace: String = "namespace",
            /// Name of the user in the directory, e.g. `admin@internal-authz`.
            principal: String = "principal",
            user_name: String = "user_name",
            roles: List<Role> = "roles",
            groups: List<Group> = "groups",
            permissions: List<Permission> = "permissions",
            tags: List<Tag> = "tags",
        }
        nested {
            domain: Domain = "domain",
        }
        links {
            "roles" => roles,
            "groups" => groups,
            "permissions" => permissions,
            "tags" => tags,
        }
    }
}

xml_struct! {
    /// A directory group.
    pub struct Group as "group" in "groups" {
        builder GroupBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            domain_entry_id: String = "domain_entry_id",
            namespace: String = "namespace",
            roles: List<Role> = "roles",
            permissions: List<Permission> = "permissions",
            tags: List<Tag> = "tags",
        }
        nested {
            domain: Domain = "domain",
        }
        links {
            "roles" => roles,
            "permissions" => permissions,
            "tags" => tags,
        }
    }
}

xml_struct! {
    /// An authorization directory.
    pub struct Domain as "domain" in "domains" {
        builder DomainBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            users: List<User> = "users",
            groups: List<Group> = "groups",
        }
        nested {}
        links {
            "users" => users,
            "groups" => groups,
        }
    }
}

xml_struct! {
    /// A named set of permits.
    pub struct Role as "role" in "roles" {
        builder RoleBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            administrative: bool = "administrative",
            mutable: bool = "mutable",
            permits: List<Permit> = "permits",
        }
        nested {
            user: User = "user",
        }
        links {
            "permits" => permits,
        }
    }
}

xml_struct! {
    /// A single action a role allows.
    pub struct Permit as "permit" in "permits" {
        builder PermitBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            administrative: bool = "administrative",
        }
        nested {
            role: Role = "role",
        }
        links {}
    }
}

xml_struct! {
    /// A role granted to a user or group on one object.
    pub struct Permission as "permission" in "permissions" {
        builder PermissionBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
        }
        nested {
            role: Role = "role",
            user: User = "user",
            group: Group = "group",
            vm: Vm = "vm",
            host: Host = "host",
            cluster: Cluster = "cluster",
            data_center: DataCenter = "data_center",
            template: Template = "template",
            storage_domain: StorageDomain = "storage_domain",
            disk: Disk = "disk",
        }
        links {}
    }
}

xml_struct! {
    /// A label attached to objects. Tags form a tree.
    pub struct Tag as "tag" in "tags" {
        builder TagBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
        }
        nested {
            parent: Tag = "parent",
            vm: Vm = "vm",
            host: Host = "host",
            group: Group = "group",
            user: User = "user",
            template: Template = "template",
        }
        links {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovirt_core::XmlRead;

    #[test]
    fn test_read_user() {
        let xml = r#"<user href="/ovirt-engine/api/users/u1" id="u1">
  <name>admin</name>
  <link href="/ovirt-engine/api/users/u1/roles" rel="roles"/>
  <link href="/ovirt-engine/api/users/u1/permissions" rel="permissions"/>
  <link href="/ovirt-engine/api/users/u1/sshpublickeys" rel="sshpublickeys"/>
  <department></department>
  <domain_entry_id>5a9b3c1e</domain_entry_id>
  <email>admin@example.com</email>
  <last_name>Administrator</last_name>
  <logged_in>false</logged_in>
  <namespace>*</namespace>
  <principal>admin</principal>
  <user_name>admin@internal-authz</user_name>
  <domain href="/ovirt-engine/api/domains/dm1" id="dm1"><name>internal-authz</name></domain>
</user>"#;
        let user = User::from_xml(xml).expect("Failed to read user");
        assert_eq!(user.user_name().map(String::as_str), Some("admin@internal-authz"));
        assert_eq!(user.department().map(String::as_str), Some(""));
        assert_eq!(user.logged_in(), Some(&false));
        assert_eq!(
            user.domain().unwrap().name().map(String::as_str),
            Some("internal-authz")
        );
        assert!(user.roles().unwrap().href().is_some());
        assert!(user.groups().is_none());
    }

    #[test]
    fn test_read_permissions() {
        let xml = r#"<permissions>
  <permission href="/ovirt-engine/api/vms/123/permissions/p1" id="p1">
    <role href="/ovirt-engine/api/roles/r1" id="r1"/>
    <user href="/ovirt-engine/api/users/u1" id="u1"/>
    <vm href="/ovirt-engine/api/vms/123" id="123"/>
  </permission>
  <permission href="/ovirt-engine/api/vms/123/permissions/p2" id="p2">
    <group href="/ovirt-engine/api/groups/g1" id="g1"/>
    <role href="/ovirt-engine/api/roles/r2" id="r2"/>
    <vm href="/ovirt-engine/api/vms/123" id="123"/>
  </permission>
</permissions>"#;
        let permissions = Permission::list_from_xml(xml).unwrap();
        assert_eq!(permissions.len(), 2);
        assert_eq!(permissions[0].user().unwrap().id().map(String::as_str), Some("u1"));
        assert!(permissions[0].group().is_none());
        assert_eq!(permissions[1].group().unwrap().id().map(String::as_str), Some("g1"));
        assert_eq!(permissions[1].role().unwrap().id().map(String::as_str), Some("r2"));
    }

    #[test]
    fn test_read_role_with_permits() {
        let xml = r#"<role id="r1">
  <name>UserRole</name>
  <administrative>false</administrative>
  <mutable>false</mutable>
  <permits>
    <permit id="1"><name>create_vm</name><administrative>false</administrative></permit>
    <permit id="4"><name>vm_basic_operations</name><administrative>false</administrative></permit>
  </permits>
</role>"#;
        let role = Role::from_xml(xml).unwrap();
        let names: Vec<&str> = role
            .permits()
            .unwrap()
            .iter()
            .filter_map(|permit| permit.name().map(String::as_str))
            .collect();
        assert_eq!(names, ["create_vm", "vm_basic_operations"]);
        assert_eq!(role.permits().unwrap().href(), None);
    }

    #[test]
    fn test_tag_tree() {
        let xml = r#"<tag id="t2">
  <name>prod</name>
  <parent href="/ovirt-engine/api/tags/t1" id="t1"/>
</tag>"#;
        let tag = Tag::from_xml(xml).unwrap();
        assert_eq!(tag.name().map(String::as_str), Some("prod"));
        assert_eq!(tag.parent().unwrap().id().map(String::as_str), Some("t1"));
        assert!(tag.parent().unwrap().parent().is_none());
    }
}
