#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Benchmarks: uritext string edits vs a full parse with the url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::Url as UrlCrate;

const INPUT: &str =
    "https://www.example.com/path/to/resource?query=value&key=data&page=3&sort=name";

fn bench_add_parameter_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_parameter");

    group.bench_function("uritext", |b| {
        b.iter(|| uritext::add_parameter(Some(black_box(INPUT)), Some("page"), Some("4 of 5")));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = UrlCrate::parse(black_box(INPUT)).unwrap();
            let kept: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| !k.eq_ignore_ascii_case("page"))
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            url.query_pairs_mut()
                .clear()
                .extend_pairs(kept)
                .append_pair("page", "4 of 5");
            url
        });
    });

    group.finish();
}

fn bench_remove_parameter_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_parameter");

    group.bench_function("uritext_present", |b| {
        b.iter(|| uritext::remove_parameter(Some(black_box(INPUT)), Some("key")));
    });

    group.bench_function("uritext_absent", |b| {
        b.iter(|| uritext::remove_parameter(Some(black_box(INPUT)), Some("missing")));
    });

    group.finish();
}

fn bench_get_domain_name_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_domain_name");

    group.bench_function("uritext", |b| {
        b.iter(|| uritext::get_domain_name(Some(black_box(INPUT))));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let url = UrlCrate::parse(black_box(INPUT)).unwrap();
            url.host_str().map(str::to_owned)
        });
    });

    group.finish();
}

fn bench_parse_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_parameters");

    group.bench_function("int_in_range", |b| {
        b.iter(|| uritext::parse_int_parameter(Some(black_box("250")), 1, 999, 25));
    });

    group.bench_function("int_invalid", |b| {
        b.iter(|| uritext::parse_int_parameter(Some(black_box("2.5e2")), 1, 999, 25));
    });

    group.bench_function("combine", |b| {
        b.iter(|| uritext::combine(Some(black_box("https://example.com/api/")), Some("/users")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_parameter_all,
    bench_remove_parameter_all,
    bench_get_domain_name_all,
    bench_parse_parameters
);
criterion_main!(benches);
