//! Runtime statistics.

use crate::enums::{StatisticKind, StatisticUnit, ValueType};
use crate::host::Host;
use crate::network::Nic;
use crate::storage::Disk;
use crate::vm::Vm;
use ovirt_core::List;

xml_struct! {
    /// A named measurement of a VM, host, disk or NIC.
    pub struct Statistic as "statistic" in "statistics" {
        builder StatisticBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            name: String = "name",
            description: String = "description",
            comment: String = "comment",
            kind: StatisticKind = "kind",
            r#type: ValueType = "type",
            unit: StatisticUnit = "unit",
            values: List<Value> = "values",
        }
        nested {
            vm: Vm = "vm",
            host: Host = "host",
            disk: Disk = "disk",
            nic: Nic = "nic",
        }
        links {}
    }
}

xml_struct! {
    pub struct Value as "value" in "values" {
        builder ValueBuilder;
        attributes {}
        elements {
            datum: f64 = "datum",
            detail: String = "detail",
        }
        nested {}
        links {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovirt_core::XmlRead;

    #[test]
    fn test_read_statistics() {
        let xml = r#"<statistics>
  <statistic href="/ovirt-engine/api/vms/123/statistics/s1" id="s1">
    <name>memory.installed</name>
    <description>Total memory configured</description>
    <kind>gauge</kind>
    <type>integer</type>
    <unit>bytes</unit>
    <values><value><datum>4294967296</datum></value></values>
    <vm href="/ovirt-engine/api/vms/123" id="123"/>
  </statistic>
  <statistic href="/ovirt-engine/api/vms/123/statistics/s2" id="s2">
    <name>cpu.current.guest</name>
    <kind>gauge</kind>
    <type>decimal</type>
    <unit>percent</unit>
    <values><value><datum>12.5</datum></value></values>
  </statistic>
</statistics>"#;
        let statistics = Statistic::list_from_xml(xml).expect("Failed to read statistics");
        assert_eq!(statistics.len(), 2);
        assert_eq!(statistics[0].unit(), Some(&StatisticUnit::Bytes));
        assert_eq!(statistics[0].r#type(), Some(&ValueType::Integer));
        assert_eq!(statistics[0].values().unwrap()[0].datum(), Some(&4_294_967_296.0));
        assert_eq!(statistics[1].kind(), Some(&StatisticKind::Gauge));
        assert_eq!(statistics[1].values().unwrap()[0].datum(), Some(&12.5));
    }
}
