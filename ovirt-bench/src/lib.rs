//! # oVirt Bench
//!
//! Sample documents and timing helpers for benchmarking the readers.

pub mod documents;

use std::time::{Duration, Instant};

/// Runs `read_fn` over `xml` the given number of times and returns the
/// elapsed time.
pub fn benchmark_read<F, T>(iterations: usize, xml: &str, mut read_fn: F) -> Duration
where
    F: FnMut(&str) -> T,
{
    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(read_fn(xml));
    }
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovirt_core::XmlRead;
    use ovirt_types::Vm;

    #[test]
    fn test_benchmark_read_runs_reader() {
        let xml = documents::vm_collection(3);
        let mut reads = 0;
        benchmark_read(5, &xml, |xml| {
            reads += 1;
            Vm::list_from_xml(xml).map(|vms| vms.len())
        });
        assert_eq!(reads, 5);
    }
}
