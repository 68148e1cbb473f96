// ============================================================================
// Arithmetic Benchmarks
// Schoolbook add and multiply over growing operand widths
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decint::BigInt;

/// Deterministic operand text of the requested width, no leading zero.
fn digits(len: usize) -> String {
    let mut text = String::with_capacity(len);
    text.push('9');
    for i in 1..len {
        text.push(char::from(b'0' + (i * 7 % 10) as u8));
    }
    text
}

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for num_digits in [16, 256, 4096] {
        let a: BigInt = digits(num_digits).parse().unwrap();
        let b: BigInt = digits(num_digits / 2 + 1).parse().unwrap();

        group.bench_function(BenchmarkId::from_parameter(num_digits), |bench| {
            bench.iter(|| black_box(&a + &b));
        });
    }

    group.finish();
}

fn benchmark_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    for num_digits in [8, 64, 512] {
        let a: BigInt = digits(num_digits).parse().unwrap();
        let b: BigInt = digits(num_digits).parse().unwrap();

        group.bench_function(BenchmarkId::from_parameter(num_digits), |bench| {
            bench.iter(|| black_box(&a * &b));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_add, benchmark_mul);
criterion_main!(benches);
