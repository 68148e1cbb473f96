//! Randomized cross-check of the arithmetic against machine integers.
//!
//! Operand pairs are drawn from a bounded range, pushed through parse /
//! add / multiply / render, and compared with a fixed-width reference
//! computation. Any mismatch fails the run. The generator is seeded so a
//! failure reproduces.

use decint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 10_000;

fn big(n: i64) -> BigInt {
    n.to_string().parse().unwrap()
}

#[test]
fn add_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x00_5eed_0001);
    for _ in 0..ROUNDS {
        let x: i64 = rng.gen_range(-10_000..10_000);
        let y: i64 = rng.gen_range(-10_000..10_000);
        assert_eq!(
            (big(x) + big(y)).to_string(),
            (x + y).to_string(),
            "{} + {}",
            x,
            y
        );
    }
}

#[test]
fn sub_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x00_5eed_0002);
    for _ in 0..ROUNDS {
        let x: i64 = rng.gen_range(-10_000..10_000);
        let y: i64 = rng.gen_range(-10_000..10_000);
        assert_eq!(
            (big(x) - big(y)).to_string(),
            (x - y).to_string(),
            "{} - {}",
            x,
            y
        );
    }
}

#[test]
fn mul_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x00_5eed_0003);
    for _ in 0..ROUNDS {
        let x: i64 = rng.gen_range(-10_000..10_000);
        let y: i64 = rng.gen_range(-10_000..10_000);
        assert_eq!(
            (big(x) * big(y)).to_string(),
            (x * y).to_string(),
            "{} * {}",
            x,
            y
        );
    }
}

#[test]
fn wide_operands_match_i128_reference() {
    let mut rng = StdRng::seed_from_u64(0x00_5eed_0004);
    for _ in 0..ROUNDS {
        let x: i64 = rng.gen();
        let y: i64 = rng.gen();
        let (a, b) = (big(x), big(y));
        let (wx, wy) = (x as i128, y as i128);
        assert_eq!((&a + &b).to_string(), (wx + wy).to_string(), "{} + {}", x, y);
        assert_eq!((&a - &b).to_string(), (wx - wy).to_string(), "{} - {}", x, y);
        assert_eq!((&a * &b).to_string(), (wx * wy).to_string(), "{} * {}", x, y);
    }
}
