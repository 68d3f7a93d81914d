//! Benchmarks for Galois field arithmetic.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use listdecode::gf::GaloisField;

fn bench_gf_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF Multiplication");

    for order in [7u32, 16, 19, 64, 125, 256] {
        let gf = GaloisField::new(order).unwrap();

        group.bench_with_input(BenchmarkId::new("order", order), &gf, |b, gf| {
            let a = gf.element(3);
            let b_elem = gf.element(5);
            b.iter(|| {
                let mut result = a.clone();
                for _ in 0..100 {
                    result = result.mul(&b_elem);
                }
                result
            });
        });
    }

    group.finish();
}

fn bench_gf_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF Creation");

    for order in [7u32, 16, 19, 64, 125, 256] {
        group.bench_with_input(BenchmarkId::new("order", order), &order, |b, &order| {
            b.iter(|| GaloisField::new(order).unwrap());
        });
    }

    group.finish();
}

fn bench_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Evaluation");

    let gf = GaloisField::new(256).unwrap();
    for degree in [7usize, 31, 127] {
        let coeffs: Vec<u32> = (0..=degree as u32).map(|i| (i * 37 + 1) % 256).collect();
        let p = listdecode::poly::Polynomial::new(&gf, &coeffs).unwrap();
        let point = gf.element(113);

        group.bench_with_input(BenchmarkId::new("degree", degree), &p, |b, p| {
            b.iter(|| p.evaluate(&point));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gf_multiplication,
    bench_gf_creation,
    bench_polynomial_evaluation
);
criterion_main!(benches);
