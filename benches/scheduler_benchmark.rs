/*!
 * Scheduler Benchmarks
 *
 * Simulation throughput for growing workloads spread over all three levels
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mlq_scheduler::{simulate, ProcessRecord, QueueLevel, SchedulerConfig};

fn workload(count: usize) -> Vec<ProcessRecord> {
    (0..count)
        .map(|i| {
            let burst = (i % 7 + 1) as u64;
            let arrival = (i / 3) as u64;
            ProcessRecord::new(
                format!("P{}", i),
                burst,
                arrival,
                QueueLevel::ALL[i % 3],
                (i % 5) as i64,
            )
        })
        .collect()
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for count in [10usize, 100, 1_000] {
        let processes = workload(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &processes, |b, processes| {
            b.iter(|| simulate(black_box(processes.clone()), SchedulerConfig::default()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
