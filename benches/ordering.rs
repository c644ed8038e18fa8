//! Ordering engine benchmarks.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use queueline::domain::models::{
    ClientId, LocationId, PriorityTier, QueueEntry, ServiceTypeId,
};
use queueline::services::QueueOrdering;

fn waiting_set(size: usize) -> Vec<QueueEntry> {
    let location = LocationId::new();
    let base = Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap();
    let tiers = [
        PriorityTier::Normal,
        PriorityTier::Bronze,
        PriorityTier::Silver,
        PriorityTier::Gold,
        PriorityTier::Vip,
    ];
    (0..size)
        .map(|i| {
            QueueEntry::new(
                location,
                ClientId::new(),
                ServiceTypeId::new(),
                tiers[i % tiers.len()],
                base + Duration::seconds((i % 7) as i64),
                i as u64 + 1,
            )
        })
        .collect()
}

fn bench_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("positions");
    for size in [10usize, 100, 500] {
        let waiting = waiting_set(size);
        let ordering = QueueOrdering::new();
        group.bench_with_input(BenchmarkId::from_parameter(size), &waiting, |b, waiting| {
            b.iter(|| ordering.positions(black_box(waiting), true));
        });
    }
    group.finish();
}

fn bench_closed_form_rank(c: &mut Criterion) {
    let waiting = waiting_set(100);
    let ordering = QueueOrdering::new();
    let target = &waiting[50];
    c.bench_function("rank_of", |b| {
        b.iter(|| ordering.rank_of(black_box(target), black_box(&waiting), true));
    });
}

criterion_group!(benches, bench_positions, bench_closed_form_rank);
criterion_main!(benches);
