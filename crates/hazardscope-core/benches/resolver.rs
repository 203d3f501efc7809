use criterion::{criterion_group, criterion_main, Criterion};
use hazardscope_core::{CountryGazetteer, ReferencePoint};
use std::hint::black_box;

fn synthetic_reference(n: usize) -> Vec<ReferencePoint> {
    (0..n)
        .map(|i| ReferencePoint {
            name: format!("Cityname{i:05}"),
            state_name: Some(format!("Statename{:03}", i % 40)),
            latitude: Some(-60.0 + (i % 120) as f64),
            longitude: Some(-170.0 + (i % 340) as f64),
            country_name: "Benchland".to_string(),
        })
        .collect()
}

fn bench_resolver(c: &mut Criterion) {
    let points = synthetic_reference(5000);
    let gazetteer = CountryGazetteer::build(&points, "Benchland");

    c.bench_function("resolve_exact_hit", |b| {
        b.iter(|| gazetteer.resolve(black_box(Some("Near Cityname02500 District"))))
    });

    c.bench_function("resolve_fuzzy_hit", |b| {
        b.iter(|| gazetteer.resolve(black_box(Some("Citynqme02500"))))
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| gazetteer.resolve(black_box(Some("Completely Elsewhere"))))
    });

    c.bench_function("gazetteer_build_5k", |b| {
        b.iter(|| CountryGazetteer::build(black_box(&points), "Benchland"))
    });
}

criterion_group!(benches, bench_resolver);
criterion_main!(benches);
