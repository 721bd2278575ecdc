use criterion::{black_box, criterion_group, criterion_main, Criterion};

use redoxide::{assign_oxidations, oxidation_numbers, parse_formula};

fn bench_parse_simple(c: &mut Criterion) {
    c.bench_function("parse_fe2o3", |b| {
        b.iter(|| black_box(parse_formula("Fe2O3").unwrap()))
    });
}

fn bench_parse_nested(c: &mut Criterion) {
    c.bench_function("parse_nested_groups", |b| {
        b.iter(|| black_box(parse_formula("Al2(SO4)3").unwrap()))
    });
}

fn bench_solve_fixed(c: &mut Criterion) {
    let parsed = parse_formula("KMnO4").unwrap();
    c.bench_function("solve_kmno4", |b| {
        b.iter(|| black_box(assign_oxidations(&parsed, 0).unwrap()))
    });
}

fn bench_solve_two_floaters(c: &mut Criterion) {
    let parsed = parse_formula("(NH4)2SO4").unwrap();
    c.bench_function("solve_ammonium_sulfate", |b| {
        b.iter(|| black_box(assign_oxidations(&parsed, 0).unwrap()))
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    c.bench_function("oxidation_numbers_end_to_end", |b| {
        b.iter(|| black_box(oxidation_numbers("K2Cr2O7").unwrap()))
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_nested,
    bench_solve_fixed,
    bench_solve_two_floaters,
    bench_end_to_end
);
criterion_main!(benches);
