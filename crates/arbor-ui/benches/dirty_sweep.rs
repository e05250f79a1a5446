//! Benchmarks for dirty tracking operations

use arbor_ui::UiSession;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn build_flat_session(count: usize) -> UiSession {
    let mut session = UiSession::new("root");
    let root = session.root();
    for i in 0..count {
        session.create_node(root, format!("item {}", i)).unwrap();
    }
    session.mark_all_clean();
    session
}

fn bench_full_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_sweep");

    for count in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut session = build_flat_session(count);
            b.iter(|| {
                session.mark_all_dirty();
                session.mark_all_clean();
                black_box(())
            });
        });
    }

    group.finish();
}

fn bench_change_notification(c: &mut Criterion) {
    let mut group = c.benchmark_group("change_notification");

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut session = build_flat_session(count);
            let nodes: Vec<_> = session.tree().iter().map(|(id, _)| id).collect();
            b.iter(|| {
                for &id in &nodes {
                    session.notify_change(id);
                }
                session.mark_all_clean();
                black_box(())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_sweep, bench_change_notification);
criterion_main!(benches);
