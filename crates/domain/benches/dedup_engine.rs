use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use domain::alert::entity::{EnrichedAlert, RawAlert};
use domain::dedup::engine::DedupEngine;
use domain::dedup::similarity::{edit_distance, similarity};

fn make_alert(seq: usize, message: &str) -> EnrichedAlert {
    EnrichedAlert::from_raw(RawAlert::new(message), seq, "bench")
}

const MESSAGES: [&str; 5] = [
    "Failed SSH login from 10.0.0.1",
    "Failed SSH login from 10.0.0.2",
    "Malware signature detected on endpoint host-7",
    "SQL injection attempt blocked by firewall",
    "Unusual outbound traffic on port 4444",
];

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");
    for len in [16usize, 64, 256, 1024] {
        let a: String = MESSAGES[0].chars().cycle().take(len).collect();
        let b: String = MESSAGES[2].chars().cycle().take(len).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| edit_distance(black_box(&a), black_box(&b)));
        });
    }
    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let a = make_alert(0, MESSAGES[0]);
    let b = make_alert(1, MESSAGES[1]);
    c.bench_function("similarity_pair", |bench| {
        bench.iter(|| similarity(black_box(&a), black_box(&b)));
    });
}

fn bench_dedup(c: &mut Criterion) {
    let engine = DedupEngine::new(0.75);
    let mut group = c.benchmark_group("dedup_batch");
    for size in [10usize, 50, 200] {
        let batch: Vec<EnrichedAlert> = (0..size)
            .map(|i| make_alert(i, MESSAGES[i % MESSAGES.len()]))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |bench, batch| {
            bench.iter(|| engine.deduplicate(black_box(batch.clone())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_edit_distance, bench_similarity, bench_dedup);
criterion_main!(benches);
