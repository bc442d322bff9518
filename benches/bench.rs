use criterion::{Criterion, criterion_group, criterion_main};
use lineal::real::{BigIntegerMatrix, LongVector};
use num_bigint::BigInt;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let v = LongVector::try_from_elements((1..=1000).collect()).unwrap();
    let w = LongVector::try_from_elements((1..=1000).rev().collect()).unwrap();
    c.bench_function("Dot product (1000)", |b| {
        b.iter(|| black_box(&v).dot_product(black_box(&w)))
    });

    let dense = BigIntegerMatrix::try_from_rows(
        (1..=7)
            .map(|r| (1..=7).map(|col| BigInt::from(r * col + (r ^ col))).collect())
            .collect(),
    )
    .unwrap();
    c.bench_function("BigInt determinant (7x7)", |b| {
        b.iter(|| black_box(&dense).determinant())
    });
    c.bench_function("BigInt inverse (7x7)", |b| {
        b.iter(|| black_box(&dense).inverse())
    });

    c.bench_function("Builder backfill (1000)", |b| {
        b.iter(|| {
            LongVector::builder(black_box(1000))
                .and_then(|builder| {
                    builder
                        .computation_of_absent(|index| index as i64)
                        .put(500, -1)
                })
                .and_then(|builder| builder.build())
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
