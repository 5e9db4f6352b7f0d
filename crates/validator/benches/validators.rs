//! Benchmarks for scope validators
//!
//! Tests performance of:
//! - Bound validators on the happy and rejecting paths
//! - Membership with inline and spilled candidate lists
//! - Multi chains and registry lookups

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use rqp_validator::prelude::*;

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");

    let limit = min_max(10, 100);
    let inside = Value::from(50);
    let outside = Value::from(101);
    group.bench_function("int_in_scope", |b| b.iter(|| limit.validate(black_box(&inside))));
    group.bench_function("int_out_of_scope", |b| b.iter(|| limit.validate(black_box(&outside))));

    let wrong_kind = Value::from("fifty");
    group.bench_function("int_wrong_kind", |b| b.iter(|| limit.validate(black_box(&wrong_kind))));

    let since = max_date(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or_default());
    let day = Value::from(NaiveDate::from_ymd_opt(2019, 1, 2).unwrap_or_default());
    group.bench_function("date_out_of_scope", |b| b.iter(|| since.validate(black_box(&day))));

    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");

    let small = is_in!["name", "created_at", "updated_at"];
    let hit = Value::from("updated_at");
    group.bench_function("inline_hit", |b| b.iter(|| small.validate(black_box(&hit))));

    let large = is_in(0..64);
    let miss = Value::from(64);
    group.bench_function("spilled_miss", |b| b.iter(|| large.validate(black_box(&miss))));

    group.finish();
}

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");

    let chain = multi![min(1), max(1000), is_in(0..1000)];
    let value = Value::from(999);
    group.bench_function("multi_three", |b| b.iter(|| chain.validate(black_box(&value))));

    let rules = Validations::new()
        .with("limit", multi![min(1), max(100)])
        .with("offset", min(0))
        .with("sort", is_in!["name", "created_at"])
        .with("q", not_empty());
    let limit = Value::from(20);
    group.bench_function("registry_lookup", |b| {
        b.iter(|| rules.validate(black_box("limit"), black_box(&limit)))
    });

    group.finish();
}

criterion_group!(benches, bench_bounds, bench_membership, bench_composition);
criterion_main!(benches);
