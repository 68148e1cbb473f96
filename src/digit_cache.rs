use lazy_static::*;

use crate::big_int::{BigInt, Sign, ZERO};

/// Largest magnitude kept in the small-value caches.
pub const MAX_CONSTANT: usize = 16;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        ZERO,
        BigInt::from_raw(vec![1], Sign::NonNegative),
        BigInt::from_raw(vec![2], Sign::NonNegative),
        BigInt::from_raw(vec![3], Sign::NonNegative),
        BigInt::from_raw(vec![4], Sign::NonNegative),
        BigInt::from_raw(vec![5], Sign::NonNegative),
        BigInt::from_raw(vec![6], Sign::NonNegative),
        BigInt::from_raw(vec![7], Sign::NonNegative),
        BigInt::from_raw(vec![8], Sign::NonNegative),
        BigInt::from_raw(vec![9], Sign::NonNegative),
        BigInt::from_raw(vec![0, 1], Sign::NonNegative),
        BigInt::from_raw(vec![1, 1], Sign::NonNegative),
        BigInt::from_raw(vec![2, 1], Sign::NonNegative),
        BigInt::from_raw(vec![3, 1], Sign::NonNegative),
        BigInt::from_raw(vec![4, 1], Sign::NonNegative),
        BigInt::from_raw(vec![5, 1], Sign::NonNegative),
        BigInt::from_raw(vec![6, 1], Sign::NonNegative),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        ZERO,
        BigInt::from_raw(vec![1], Sign::Negative),
        BigInt::from_raw(vec![2], Sign::Negative),
        BigInt::from_raw(vec![3], Sign::Negative),
        BigInt::from_raw(vec![4], Sign::Negative),
        BigInt::from_raw(vec![5], Sign::Negative),
        BigInt::from_raw(vec![6], Sign::Negative),
        BigInt::from_raw(vec![7], Sign::Negative),
        BigInt::from_raw(vec![8], Sign::Negative),
        BigInt::from_raw(vec![9], Sign::Negative),
        BigInt::from_raw(vec![0, 1], Sign::Negative),
        BigInt::from_raw(vec![1, 1], Sign::Negative),
        BigInt::from_raw(vec![2, 1], Sign::Negative),
        BigInt::from_raw(vec![3, 1], Sign::Negative),
        BigInt::from_raw(vec![4, 1], Sign::Negative),
        BigInt::from_raw(vec![5, 1], Sign::Negative),
        BigInt::from_raw(vec![6, 1], Sign::Negative),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_render_their_index() {
        for i in 0..=MAX_CONSTANT {
            assert_eq!(POS_CACHE[i].to_string(), i.to_string());
        }
        for i in 1..=MAX_CONSTANT {
            assert_eq!(NEG_CACHE[i].to_string(), format!("-{}", i));
        }
        assert_eq!(NEG_CACHE[0], ZERO);
    }
}
