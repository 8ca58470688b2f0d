//! Benchmarks for the dashboard chart callbacks
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launchdash::chart::{payload_scatter, render_document, success_pie};
use launchdash::dataset::{Dataset, LaunchRecord, Outcome, PayloadRange, SiteSelection};

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                outcome,
                CATEGORIES[i % CATEGORIES.len()],
            )
            .flight_number(i as u32 + 1)
        })
        .collect();
    Dataset::from_records(records).unwrap()
}

fn bench_pie(c: &mut Criterion) {
    let mut group = c.benchmark_group("pie");

    for size in [56, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let site = SiteSelection::site("KSC LC-39A");

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| success_pie(black_box(&dataset), black_box(&SiteSelection::All)))
        });

        group.bench_function(format!("one_site_{}", size), |b| {
            b.iter(|| success_pie(black_box(&dataset), black_box(&site)))
        });
    }

    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter");

    for size in [56, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let range = PayloadRange::new(2000.0, 8000.0);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("filter_{}", size), |b| {
            b.iter(|| payload_scatter(black_box(&dataset), &SiteSelection::All, black_box(range)))
        });

        let spec = payload_scatter(&dataset, &SiteSelection::All, dataset.payload_bounds());
        group.bench_function(format!("render_{}", size), |b| {
            b.iter(|| render_document(black_box(&spec)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pie, bench_scatter);
criterion_main!(benches);
