// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};
use wildcard::{Pattern, fold_case};

// local imports
use super::ND;

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}pattern", super::GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let short = fold_case("Luke Skywalker Hero Unit cost 5 power 3 HP 6");
    let long = short.repeat(64);

    let variants = [
        ("literal", Pattern::literal("hero"), true),
        ("literal-miss", Pattern::literal("villain"), false),
        ("wildcard", Pattern::new("cost * power"), true),
        ("wildcard-miss", Pattern::new("cost * hp"), false),
        ("leading-wildcard", Pattern::new("*ower"), true),
    ];

    for (input_name, input) in [("short", &short), ("long", &long)] {
        c.throughput(Throughput::Bytes(input.len() as u64));
        for (name, pattern, expected) in &variants {
            assert_eq!(pattern.is_found_in(input), *expected);
            c.bench_with_input(BenchmarkId::new(*name, input_name), input, |b, input| {
                b.iter(|| black_box(pattern).is_found_in(black_box(input)))
            });
        }
    }

    c.bench_function("compile", |b| b.iter(|| Pattern::new(black_box("0 * 0 \\* hero"))));
}
