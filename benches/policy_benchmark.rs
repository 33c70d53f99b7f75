/*!
 * Scheduling Policy Benchmarks
 *
 * Compare FCFS, SRT, and Round-Robin over the same synthetic workloads
 */

use cpu_sched_sim::{ProcessDescriptor, ProcessStore, SchedulingPolicy, Simulator, TimeQuantum};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Staggered arrivals with bursts cycling through 1..=16
fn workload(count: u32) -> ProcessStore {
    let processes = (0..count)
        .map(|i| {
            let burst = u64::from(i % 16) + 1;
            ProcessDescriptor::new(i + 1, u64::from(i) * 3, burst, 0.25)
        })
        .collect();
    ProcessStore::new(processes).unwrap()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_run");
    let quantum = Some(TimeQuantum::new(4).unwrap());

    for count in [16u32, 256, 2048] {
        for policy in SchedulingPolicy::ALL {
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), count),
                &count,
                |b, &count| {
                    let mut sim = Simulator::new(workload(count));
                    b.iter(|| black_box(sim.run(policy, quantum).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_round_robin_quantum(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin_quantum");

    for ticks in [1i64, 4, 16] {
        let quantum = Some(TimeQuantum::new(ticks).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &quantum, |b, quantum| {
            let mut sim = Simulator::new(workload(512));
            b.iter(|| black_box(sim.run(SchedulingPolicy::RoundRobin, *quantum).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_policies, bench_round_robin_quantum);
criterion_main!(benches);
