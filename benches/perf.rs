use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tipboard::fake_feed::{demo_matches, generate_transactions};
use tipboard::metrics::compute_dashboard_stats;
use tipboard::paging::page_window;
use tipboard::settlement::Recorded;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

fn bench_generate_feed(c: &mut Criterion) {
    c.bench_function("generate_transactions_300", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            let feed = generate_transactions(black_box(300), reference(), &mut rng);
            black_box(feed.len());
        })
    });
}

fn bench_dashboard_stats(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let transactions = generate_transactions(5_000, reference(), &mut rng);
    let matches = demo_matches(reference());

    c.bench_function("dashboard_stats_5k_tx", |b| {
        b.iter(|| {
            let stats = compute_dashboard_stats(
                black_box(&transactions),
                black_box(&matches),
                reference(),
                &mut Recorded,
            );
            black_box(stats.revenue);
        })
    });
}

fn bench_page_window(c: &mut Criterion) {
    c.bench_function("page_window_sweep_120", |b| {
        b.iter(|| {
            for current in 1..=120u32 {
                let strip = page_window(black_box(current), black_box(120)).unwrap();
                black_box(strip.len());
            }
        })
    });
}

criterion_group!(
    perf,
    bench_generate_feed,
    bench_dashboard_stats,
    bench_page_window
);
criterion_main!(perf);
