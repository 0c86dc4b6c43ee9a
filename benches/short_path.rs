//! 短路径生成与校验基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use url_shortener::services::generate_short_path;
use url_shortener::utils::{validate_destination, validate_short_path};

// ============== generate_short_path 基准测试 ==============

fn bench_generate_short_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_path/generate");

    for len in [6usize, 8, 12, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| generate_short_path(black_box(len)));
        });
    }

    group.finish();
}

// ============== validate_short_path 基准测试 ==============

fn bench_validate_short_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_path/validate");

    group.bench_function("valid_simple", |b| {
        b.iter(|| {
            assert!(validate_short_path(black_box("abc123")).is_ok());
        });
    });

    group.bench_function("valid_with_dash", |b| {
        b.iter(|| {
            assert!(validate_short_path(black_box("my-custom-link")).is_ok());
        });
    });

    group.bench_function("reserved", |b| {
        b.iter(|| {
            assert!(validate_short_path(black_box("Swagger")).is_err());
        });
    });

    group.bench_function("invalid_chars", |b| {
        b.iter(|| {
            assert!(validate_short_path(black_box("'; DROP TABLE--")).is_err());
        });
    });

    let max_len = "a".repeat(255);
    group.bench_function("valid_max_length", |b| {
        b.iter(|| {
            assert!(validate_short_path(black_box(&max_len)).is_ok());
        });
    });

    group.finish();
}

// ============== validate_destination 基准测试 ==============

fn bench_validate_destination(c: &mut Criterion) {
    let mut group = c.benchmark_group("destination/validate");

    group.bench_function("https", |b| {
        b.iter(|| {
            assert!(validate_destination(black_box("https://example.com/path?q=1")).is_ok());
        });
    });

    group.bench_function("dangerous_scheme", |b| {
        b.iter(|| {
            assert!(validate_destination(black_box("javascript:alert(1)")).is_err());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_short_path,
    bench_validate_short_path,
    bench_validate_destination
);
criterion_main!(benches);
