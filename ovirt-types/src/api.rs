//! Entry point document and version information.

use crate::access::{Tag, User};
use crate::template::Template;
use chrono::{DateTime, FixedOffset};

xml_struct! {
    /// Root of the API, returned by `GET /ovirt-engine/api`.
    pub struct Api as "api" in "apis" {
        builder ApiBuilder;
        attributes {}
        elements {
            /// Engine time when the document was produced.
            time: DateTime<FixedOffset> = "time",
        }
        nested {
            product_info: ProductInfo = "product_info",
            special_objects: SpecialObjects = "special_objects",
            summary: ApiSummary = "summary",
            authenticated_user: User = "authenticated_user",
            effective_user: User = "effective_user",
        }
        links {}
    }
}

xml_struct! {
    /// Name, vendor and version of the engine.
    pub struct ProductInfo as "product_info" in "product_infos" {
        builder ProductInfoBuilder;
        attributes {}
        elements {
            name: String = "name",
            vendor: String = "vendor",
            instance_id: String = "instance_id",
        }
        nested {
            version: Version = "version",
        }
        links {}
    }
}

xml_struct! {
    /// Objects every installation has.
    pub struct SpecialObjects as "special_objects" in "special_objects_list" {
        builder SpecialObjectsBuilder;
        attributes {}
        elements {}
        nested {
            blank_template: Template = "blank_template",
            root_tag: Tag = "root_tag",
        }
        links {}
    }
}

xml_struct! {
    /// Object counts of the installation.
    pub struct ApiSummary as "summary" in "summaries" {
        builder ApiSummaryBuilder;
        attributes {}
        elements {}
        nested {
            hosts: ApiSummaryItem = "hosts",
            storage_domains: ApiSummaryItem = "storage_domains",
            users: ApiSummaryItem = "users",
            vms: ApiSummaryItem = "vms",
        }
        links {}
    }
}

xml_struct! {
    /// Active and total count of one kind of object.
    pub struct ApiSummaryItem as "api_summary_item" in "api_summary_items" {
        builder ApiSummaryItemBuilder;
        attributes {}
        elements {
            active: i64 = "active",
            total: i64 = "total",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// A software or compatibility version.
    pub struct Version as "version" in "versions" {
        builder VersionBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            major: i64 = "major",
            minor: i64 = "minor",
            /// Build number; the element is named `build`.
            build_number: i64 = "build",
            revision: i64 = "revision",
            full_version: String = "full_version",
        }
        nested {}
        links {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovirt_core::XmlRead;

    const API: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<api>
  <link href="/ovirt-engine/api/clusters" rel="clusters"/>
  <link href="/ovirt-engine/api/vms" rel="vms"/>
  <product_info>
    <instance_id>1ba7e4b8-6a7b-11e9-b5b4-00163e7bd5ce</instance_id>
    <name>oVirt Engine</name>
    <vendor>ovirt.org</vendor>
    <version>
      <build>6</build>
      <full_version>4.4.10.6-1.el8</full_version>
      <major>4</major>
      <minor>4</minor>
      <revision>0</revision>
    </version>
  </product_info>
  <special_objects>
    <blank_template href="/ovirt-engine/api/templates/00000000-0000-0000-0000-000000000000" id="00000000-0000-0000-0000-000000000000"/>
    <root_tag href="/ovirt-engine/api/tags/00000000-0000-0000-0000-000000000000" id="00000000-0000-0000-0000-000000000000"/>
  </special_objects>
  <summary>
    <hosts><active>2</active><total>3</total></hosts>
    <storage_domains><active>4</active><total>5</total></storage_domains>
    <users><active>1</active><total>12</total></users>
    <vms><active>17</active><total>42</total></vms>
  </summary>
  <time>2022-03-14T10:22:08.123+01:00</time>
  <authenticated_user href="/ovirt-engine/api/users/0000-1" id="0000-1"/>
  <effective_user href="/ovirt-engine/api/users/0000-1" id="0000-1"/>
</api>"#;

    #[test]
    fn test_read_api_root() {
        let api = Api::from_xml(API).expect("Failed to read api");

        let info = api.product_info().unwrap();
        assert_eq!(info.name().map(String::as_str), Some("oVirt Engine"));
        let version = info.version().unwrap();
        assert_eq!(version.major(), Some(&4));
        assert_eq!(version.build_number(), Some(&6));
        assert_eq!(
            version.full_version().map(String::as_str),
            Some("4.4.10.6-1.el8")
        );

        let summary = api.summary().unwrap();
        assert_eq!(summary.vms().unwrap().total(), Some(&42));
        assert_eq!(summary.hosts().unwrap().active(), Some(&2));

        let special = api.special_objects().unwrap();
        assert_eq!(
            special.blank_template().unwrap().id().map(String::as_str),
            Some("00000000-0000-0000-0000-000000000000")
        );
        assert_eq!(
            api.authenticated_user().unwrap().href().map(String::as_str),
            Some("/ovirt-engine/api/users/0000-1")
        );
        assert_eq!(api.time().unwrap().timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_builder_matches_reader() {
        let built = Version::builder()
            .major(4)
            .minor(5)
            .build_number(2)
            .full_version("4.5.2")
            .build();
        let read = Version::from_xml(
            "<version><major>4</major><minor>5</minor><build>2</build>\
             <full_version>4.5.2</full_version></version>",
        )
        .unwrap();
        assert_eq!(built, read);
        assert_eq!(built.revision(), None);
    }
}
