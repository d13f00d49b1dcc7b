//! Benchmarks for jsend response construction and serialization

use criterion::{criterion_group, criterion_main, Criterion};
use jsend::Builder;
use serde_json::json;

fn response_benchmarks(c: &mut Criterion) {
    c.bench_function("build_default", |b| {
        b.iter(|| Builder::new().build().unwrap())
    });

    c.bench_function("build_full", |b| {
        b.iter(|| {
            Builder::new()
                .error()
                .data(json!({ "id": 42, "name": "widget" }))
                .errors(json!({ "name": "already taken" }))
                .message("conflict")
                .code(409)
                .build()
                .unwrap()
        })
    });

    let response = Builder::new()
        .error()
        .data(json!({ "id": 42, "name": "widget" }))
        .errors(json!({ "name": "already taken" }))
        .message("conflict")
        .code(409)
        .build()
        .unwrap();

    c.bench_function("to_json_full", |b| b.iter(|| response.to_json()));
}

criterion_group!(benches, response_benchmarks);
criterion_main!(benches);
