// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};
use pagesift::{PageFilter, Query, filter_records};

// local imports
use super::{ND, samples};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}filter", super::GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let queries = [
        ("term", "hero", ""),
        ("and-or", "(hero OR villain) AND unit", "space"),
        ("phrase", r#""cost * power""#, ""),
        ("filename", "set3.pdf", "event"),
    ];

    for (name, include, _) in &queries {
        c.bench_with_input(BenchmarkId::new("parse", name), include, |b, include| {
            b.iter(|| Query::parse(black_box(include)))
        });
    }

    for n in [100, 1000] {
        let pages = samples::pages(n, 40);
        c.throughput(Throughput::Elements(n as u64));
        for (name, include, exclude) in &queries {
            let filter = PageFilter::new(include, exclude).unwrap();
            c.bench_with_input(BenchmarkId::new(*name, n), &pages, |b, pages| {
                b.iter(|| filter.filter(black_box(pages)).len())
            });
        }
        c.bench_with_input(BenchmarkId::new("parse-and-filter", n), &pages, |b, pages| {
            b.iter(|| filter_records(black_box(pages), "hero AND unit", "villain").map(|m| m.len()))
        });
    }
}
