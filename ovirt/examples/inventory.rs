//! Example that reads a VM collection and prints an inventory.
//!
//! Run with: `cargo run --example inventory [vms.xml]`
//!
//! Without an argument, a built-in sample document is used. Set
//! `RUST_LOG=trace` to see the elements the readers skip.

use ovirt::prelude::*;
use ovirt::types::{Cpu, CpuTopology, OperatingSystem};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<vms>
  <vm href="/ovirt-engine/api/vms/a1" id="a1">
    <name>web-01</name>
    <link href="/ovirt-engine/api/vms/a1/nics" rel="nics"/>
    <link href="/ovirt-engine/api/vms/a1/diskattachments" rel="diskattachments"/>
    <cpu><topology><cores>2</cores><sockets>1</sockets><threads>1</threads></topology></cpu>
    <memory>4294967296</memory>
    <os><boot><devices><device>hd</device></devices></boot><type>rhel_8x64</type></os>
    <status>up</status>
    <host href="/ovirt-engine/api/hosts/h1" id="h1"/>
  </vm>
  <vm href="/ovirt-engine/api/vms/a2" id="a2">
    <name>db-01</name>
    <cpu><topology><cores>8</cores><sockets>2</sockets><threads>1</threads></topology></cpu>
    <memory>34359738368</memory>
    <status>down</status>
    <stop_reason>maintenance window</stop_reason>
  </vm>
</vms>"#;

/// Cores times sockets times threads, or `None` if the product overflows.
fn vcpu_count(topology: &CpuTopology) -> Option<i64> {
    topology
        .cores()
        .copied()
        .unwrap_or(1)
        .checked_mul(topology.sockets().copied().unwrap_or(1))?
        .checked_mul(topology.threads().copied().unwrap_or(1))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let xml = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let response = Response::new(200, "200 OK", xml);
    let vms: List<Vm> = read_list(&response, &[200])?;

    println!("{:<12} {:<8} {:>6} {:>10}  nics", "name", "status", "vcpus", "memory");
    for vm in &vms {
        let vcpus = vm
            .cpu()
            .and_then(Cpu::topology)
            .and_then(vcpu_count)
            .unwrap_or(0);
        let memory_gib = vm.memory().copied().unwrap_or(0) >> 30;
        let status = vm.status().map_or("?", |s| s.as_str());
        let nics = vm.nics().and_then(List::href).unwrap_or("-");
        println!(
            "{:<12} {:<8} {:>6} {:>8}Gi  {}",
            vm.name().map_or("?", String::as_str),
            status,
            vcpus,
            memory_gib,
            nics
        );
        if let Some(os) = vm.os().and_then(OperatingSystem::r#type) {
            println!("{:<12} os: {}", "", os);
        }
    }

    let running = vms
        .iter()
        .filter(|vm| vm.status() == Some(&VmStatus::Up))
        .count();
    println!("\n{running} of {} virtual machines running", vms.len());
    if let Some(first) = vms.first() {
        println!("{}", serde_json::to_string_pretty(first)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vcpu_count() {
        let topology = CpuTopology::builder().cores(4).sockets(2).build();
        assert_eq!(vcpu_count(&topology), Some(8));
    }

    #[test]
    fn test_vcpu_count_overflow() {
        let topology = CpuTopology::builder()
            .cores(i64::MAX)
            .sockets(2)
            .threads(1)
            .build();
        assert_eq!(vcpu_count(&topology), None);
    }
}
