//! Reader benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ovirt_bench::{benchmark_read, documents};
use ovirt_core::{ReaderConfig, XmlRead};
use ovirt_types::{Host, Vm};
use std::hint::black_box;

fn benchmark_single_vm(c: &mut Criterion) {
    let xml = documents::vm_document();
    let mut group = c.benchmark_group("vm");
    group.throughput(Throughput::Bytes(xml.len() as u64));

    group.bench_function("read_one", |b| {
        b.iter(|| Vm::from_xml(black_box(&xml)))
    });

    let lenient = ReaderConfig {
        lenient_values: true,
        ..ReaderConfig::default()
    };
    group.bench_function("read_one_lenient", |b| {
        b.iter(|| Vm::from_xml_with(black_box(&xml), lenient))
    });

    group.finish();
}

fn benchmark_vm_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("vms");

    for count in [10usize, 100] {
        let xml = documents::vm_collection(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("read_many", count), &xml, |b, xml| {
            b.iter(|| Vm::list_from_xml(black_box(xml)))
        });
    }

    let xml = documents::vm_collection(100);
    let lenient = ReaderConfig {
        lenient_values: true,
        ..ReaderConfig::default()
    };
    group.throughput(Throughput::Elements(100));
    group.bench_function("read_many_lenient", |b| {
        b.iter_custom(|iters| {
            benchmark_read(iters as usize, &xml, |xml| Vm::list_from_xml_with(xml, lenient))
        })
    });

    group.finish();
}

fn benchmark_host_collection(c: &mut Criterion) {
    let xml = documents::host_collection(32);
    let mut group = c.benchmark_group("hosts");
    group.throughput(Throughput::Elements(32));

    group.bench_function("read_many", |b| {
        b.iter(|| Host::list_from_xml(black_box(&xml)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_vm,
    benchmark_vm_collection,
    benchmark_host_collection
);
criterion_main!(benches);
