//! Generators for realistic engine responses.

use std::fmt::Write;

/// Returns a fully populated `<vm>` element.
#[must_use]
pub fn vm(index: usize) -> String {
    format!(
        r#"<vm href="/ovirt-engine/api/vms/{index:08}" id="{index:08}">
  <actions>
    <link href="/ovirt-engine/api/vms/{index:08}/start" rel="start"/>
    <link href="/ovirt-engine/api/vms/{index:08}/shutdown" rel="shutdown"/>
  </actions>
  <name>vm-{index}</name>
  <description>Benchmark guest {index} &amp; friends</description>
  <comment/>
  <link href="/ovirt-engine/api/vms/{index:08}/nics" rel="nics"/>
  <link href="/ovirt-engine/api/vms/{index:08}/diskattachments" rel="diskattachments"/>
  <link href="/ovirt-engine/api/vms/{index:08}/permissions" rel="permissions"/>
  <link href="/ovirt-engine/api/vms/{index:08}/statistics" rel="statistics"/>
  <link href="/ovirt-engine/api/vms/{index:08}/tags" rel="tags"/>
  <bios><boot_menu><enabled>false</enabled></boot_menu><type>q35_ovmf</type></bios>
  <cpu>
    <architecture>x86_64</architecture>
    <topology><cores>2</cores><sockets>2</sockets><threads>1</threads></topology>
  </cpu>
  <cpu_shares>1024</cpu_shares>
  <creation_time>2024-01-15T08:30:00.000+01:00</creation_time>
  <delete_protected>false</delete_protected>
  <display>
    <address>10.0.0.{octet}</address>
    <allow_override>false</allow_override>
    <copy_paste_enabled>true</copy_paste_enabled>
    <monitors>1</monitors>
    <port>5900</port>
    <type>spice</type>
  </display>
  <high_availability><enabled>true</enabled><priority>50</priority></high_availability>
  <memory>8589934592</memory>
  <memory_policy>
    <ballooning>true</ballooning>
    <guaranteed>4294967296</guaranteed>
    <max>34359738368</max>
    <over_commit><percent>100</percent></over_commit>
  </memory_policy>
  <os>
    <boot><devices><device>hd</device><device>network</device></devices></boot>
    <type>rhel_9x64</type>
  </os>
  <placement_policy><affinity>migratable</affinity></placement_policy>
  <start_time>2024-03-01T10:00:00.000+01:00</start_time>
  <stateless>false</stateless>
  <status>up</status>
  <type>server</type>
  <cluster href="/ovirt-engine/api/clusters/c1" id="c1"/>
  <host href="/ovirt-engine/api/hosts/h{host}" id="h{host}"/>
  <template href="/ovirt-engine/api/templates/t0" id="t0"/>
</vm>"#,
        octet = index % 250 + 1,
        host = index % 8,
    )
}

/// Returns a single VM as a standalone document.
#[must_use]
pub fn vm_document() -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n{}",
        vm(1)
    )
}

/// Returns a `<vms>` collection with `count` entries.
#[must_use]
pub fn vm_collection(count: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<vms>\n");
    for index in 0..count {
        xml.push_str(&vm(index));
        xml.push('\n');
    }
    xml.push_str("</vms>");
    xml
}

/// Returns a `<hosts>` collection with `count` entries.
#[must_use]
pub fn host_collection(count: usize) -> String {
    let mut xml = String::from("<hosts>\n");
    for index in 0..count {
        let _ = write!(
            xml,
            r#"<host href="/ovirt-engine/api/hosts/h{index}" id="h{index}">
  <name>hv-{index:02}</name>
  <address>hv-{index:02}.example.com</address>
  <link href="/ovirt-engine/api/hosts/h{index}/nics" rel="nics"/>
  <link href="/ovirt-engine/api/hosts/h{index}/statistics" rel="statistics"/>
  <cpu>
    <name>Intel(R) Xeon(R) Gold 6230 CPU @ 2.10GHz</name>
    <speed>2100</speed>
    <topology><cores>20</cores><sockets>2</sockets><threads>2</threads></topology>
  </cpu>
  <hardware_information>
    <manufacturer>Dell Inc.</manufacturer>
    <product_name>PowerEdge R640</product_name>
  </hardware_information>
  <memory>405874245632</memory>
  <port>54321</port>
  <spm><priority>5</priority><status>none</status></spm>
  <status>up</status>
  <summary><active>12</active><migrating>0</migrating><total>14</total></summary>
  <type>rhel</type>
  <version><build>1</build><full_version>vdsm-4.50.3</full_version><major>4</major><minor>50</minor></version>
  <cluster href="/ovirt-engine/api/clusters/c1" id="c1"/>
</host>
"#
        );
    }
    xml.push_str("</hosts>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovirt_core::XmlRead;
    use ovirt_types::{Host, HostStatus, Vm, VmStatus};

    #[test]
    fn test_vm_document_reads() {
        let vm = Vm::from_xml(&vm_document()).expect("Failed to read vm");
        assert_eq!(vm.status(), Some(&VmStatus::Up));
        assert_eq!(vm.description().map(String::as_str), Some("Benchmark guest 1 & friends"));
        assert_eq!(vm.nics().and_then(|nics| nics.href()), Some("/ovirt-engine/api/vms/00000001/nics"));
    }

    #[test]
    fn test_collections_read() {
        let vms = Vm::list_from_xml(&vm_collection(10)).unwrap();
        assert_eq!(vms.len(), 10);
        assert_eq!(vms[9].host().unwrap().id().map(String::as_str), Some("h1"));

        let hosts = Host::list_from_xml(&host_collection(3)).unwrap();
        assert_eq!(hosts.len(), 3);
        assert!(hosts.iter().all(|host| host.status() == Some(&HostStatus::Up)));
    }
}
