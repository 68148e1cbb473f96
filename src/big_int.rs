//! # BigInt
//! Immutable arbitrary-precision signed integers, stored as a sequence of
//! decimal digits with the least significant digit first.
//! # Example
//! ```
//! use decint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! ```

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::digit_cache::*;
use crate::error::FormatError;

pub const ZERO: BigInt = BigInt { sign: Sign::NonNegative, digits: vec![] };

macro_rules! trim_insignificant_zeros {
    ($vec: expr) => {
        {
            let mut v = $vec;
            while let Some(&0) = v.last() {
                v.pop();
            }
            v
        }
    };
}

/// Sign of a [`BigInt`]. Zero always carries [`Sign::NonNegative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    NonNegative,
}

impl Sign {
    fn flipped(self) -> Sign {
        match self {
            Sign::Negative => Sign::NonNegative,
            Sign::NonNegative => Sign::Negative,
        }
    }
}

/// An integer of unbounded magnitude.
///
/// `digits` holds single decimal digits in `[0, 9]`, least significant
/// first, with no insignificant digit at the most significant end. Zero is
/// the empty sequence with a non-negative sign, so every value has exactly
/// one representation.
#[derive(Debug, Clone)]
pub struct BigInt {
    sign: Sign,
    digits: Vec<u8>,
}

// 杂项辅助函数
impl BigInt {
    /// Number of stored decimal digits. Zero stores none, even though it
    /// prints as the one-character literal `"0"`.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.sign == Sign::NonNegative
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }
}

// 实现构造
impl BigInt {
    /// `digits` must already be canonical: least significant first, no
    /// insignificant most-significant zero, empty only for zero.
    pub(crate) fn from_raw(digits: Vec<u8>, sign: Sign) -> Self {
        BigInt::new(digits, sign)
    }
    fn new(digits: Vec<u8>, sign: Sign) -> Self {
        BigInt { sign, digits }
    }
    fn value_of(val: u64, sign: Sign) -> BigInt {
        if val == 0 {
            return ZERO;
        }
        if val <= MAX_CONSTANT as u64 {
            return match sign {
                Sign::NonNegative => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            };
        }
        let mut digits = Vec::new();
        let mut rest = val;
        while rest != 0 {
            digits.push((rest % 10) as u8);
            rest /= 10;
        }
        BigInt::new(digits, sign)
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0");
        }
        let mut rendered = String::with_capacity(self.digits.len() + 1);
        if self.sign == Sign::Negative {
            rendered.push('-');
        }
        for &digit in self.digits.iter().rev() {
            rendered.push((b'0' + digit) as char);
        }
        f.write_str(&rendered)
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();

        let (sign, body) = match trimmed.chars().next() {
            None => return Err(FormatError::Empty),
            Some('-') => (Sign::Negative, &trimmed[1..]),
            Some('+') => (Sign::NonNegative, &trimmed[1..]),
            Some(c) if c.is_ascii_digit() => (Sign::NonNegative, trimmed),
            Some(c) => {
                return Err(FormatError::InvalidDigit {
                    input: trimmed.to_string(),
                    found: c,
                })
            },
        };

        if body.is_empty() {
            return Err(FormatError::MissingDigits {
                input: trimmed.to_string(),
            });
        }

        // drop leading zero digits, keeping at least one character
        let body = match body.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };

        if body == "0" {
            return Ok(ZERO);
        }

        let mut digits = Vec::with_capacity(body.len());
        for c in body.chars().rev() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(FormatError::InvalidDigit {
                        input: trimmed.to_string(),
                        found: c,
                    })
                },
            }
        }

        Ok(BigInt::new(digits, sign))
    }
}

impl From<&str> for BigInt {
    /// Converts a decimal literal.
    ///
    /// # Panics
    /// Panics when `val` is malformed. Use [`str::parse`] for input that is
    /// not known to be well formed.
    fn from(val: &str) -> Self {
        match val.parse() {
            Ok(n) => n,
            Err(e) => panic!("invalid decimal string {:?}: {}", val, e),
        }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, Sign::NonNegative)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                BigInt::value_of(val.unsigned_abs() as u64, Sign::Negative)
            } else {
                BigInt::value_of(val as u64, Sign::NonNegative)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 实现大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len < other_len {
            return Ordering::Less;
        }

        if self_len > other_len {
            return Ordering::Greater;
        }

        // equal digit counts: walk from the most significant position down
        // and settle on the first mismatch
        for pos in (0..self_len).rev() {
            let a = self.digits[pos];
            let b = other.digits[pos];
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }

    /// Appends zero digits past the most significant end until `digits`
    /// reaches `target` entries. Used to align the shorter subtraction
    /// operand; the padded form never escapes the operation.
    fn pad_to_length(digits: &mut Vec<u8>, target: usize) {
        if digits.len() < target {
            digits.resize(target, 0);
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.compare_mag(other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {},
            ord => return ord,
        }
        if self.sign == Sign::NonNegative {
            self.compare_mag(other)
        } else {
            self.compare_mag(other).reverse()
        }
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }
    fn abs_take(self) -> BigInt {
        let BigInt { digits, .. } = self;
        BigInt { sign: Sign::NonNegative, digits }
    }
}

// 实现加法
impl Add for BigInt {
    type Output = BigInt;

    fn add(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }

        if self.is_zero() {
            return val;
        }

        if val.sign == self.sign {
            let sign = self.sign;
            return BigInt::new(BigInt::add_mag(&self.digits, &val.digits), sign);
        }

        match self.compare_mag(&val) {
            Ordering::Less => {
                let sign = val.sign;
                let mag = BigInt::sub_mag(&val.digits, &self.digits);
                let mag = trim_insignificant_zeros!(mag);
                BigInt::new(mag, sign)
            },
            Ordering::Equal => ZERO,
            Ordering::Greater => {
                let sign = self.sign;
                let mag = BigInt::sub_mag(&self.digits, &val.digits);
                let mag = trim_insignificant_zeros!(mag);
                BigInt::new(mag, sign)
            },
        }
    }
}

impl BigInt {
    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (longer, shorter) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(longer.len() + 1);
        let mut carry = 0;
        for (pos, &d1) in longer.iter().enumerate() {
            let d2 = if pos < shorter.len() { shorter[pos] } else { 0 };
            let sum = carry + d1 + d2;
            result.push(sum % 10);
            carry = if sum >= 10 { 1 } else { 0 };
        }

        if carry != 0 {
            result.push(1);
        }

        result
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() + rhs.clone();
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        if self.digits.is_empty() {
            return self;
        }
        let BigInt { sign, digits } = self;
        BigInt { sign: sign.flipped(), digits }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现减法
impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }

        if self.is_zero() {
            return -val;
        }

        if val.sign != self.sign {
            let sign = self.sign;
            return BigInt::new(BigInt::add_mag(&self.digits, &val.digits), sign);
        }

        match self.compare_mag(&val) {
            Ordering::Less => {
                let sign = self.sign.flipped();
                let mag = BigInt::sub_mag(&val.digits, &self.digits);
                let mag = trim_insignificant_zeros!(mag);
                BigInt::new(mag, sign)
            },
            Ordering::Equal => ZERO,
            Ordering::Greater => {
                let sign = self.sign;
                let mag = BigInt::sub_mag(&self.digits, &val.digits);
                let mag = trim_insignificant_zeros!(mag);
                BigInt::new(mag, sign)
            },
        }
    }
}

impl BigInt {
    /// `larger` must compare greater than `smaller` in magnitude; equal
    /// magnitudes short-circuit to zero before this runs, so the borrow
    /// chain always terminates.
    fn sub_mag(larger: &[u8], smaller: &[u8]) -> Vec<u8> {
        let mut smaller = smaller.to_vec();
        BigInt::pad_to_length(&mut smaller, larger.len());

        let mut result = Vec::with_capacity(larger.len());
        let mut borrow = false;
        for (pos, &digit) in larger.iter().enumerate() {
            let mut d1 = digit as i8;
            if borrow {
                d1 -= 1;
                borrow = false;
            }
            let d2 = smaller[pos] as i8;

            let res = if d1 >= d2 {
                d1 - d2
            } else {
                borrow = true;
                10 + d1 - d2
            };
            result.push(res as u8);
        }

        result
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() - rhs.clone();
    }
}

// 实现乘法
impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, val: Self) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return ZERO;
        }

        let sign = if self.sign == val.sign {
            Sign::NonNegative
        } else {
            Sign::Negative
        };
        let mag = BigInt::mul_mag(&self.digits, &val.digits);
        let mag = trim_insignificant_zeros!(mag);
        BigInt::new(mag, sign)
    }
}

impl BigInt {
    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut total: Vec<u8> = Vec::new();

        for (shift, &d2) in y.iter().enumerate() {
            // partial product of x by one digit of y, moved up `shift`
            // positions by zero digits at the least significant end
            let mut partial = vec![0; shift];
            let mut carry = 0;
            for &d1 in x {
                let product = d1 * d2 + carry;
                partial.push(product % 10);
                carry = product / 10;
            }
            if carry != 0 {
                partial.push(carry);
            }

            total = BigInt::add_mag(&total, &partial);
        }

        total
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() * rhs.clone();
    }
}

#[test]
fn test_parse() {
    let n: BigInt = "1023".parse().unwrap();
    assert_eq!(n.to_string(), "1023");
    assert_eq!(n.digits, vec![3, 2, 0, 1]);

    let n: BigInt = "  +000123  ".parse().unwrap();
    assert_eq!(n, "123".parse().unwrap());

    let n: BigInt = "-001".parse().unwrap();
    assert_eq!(n.to_string(), "-1");

    let n: BigInt = "0012".parse().unwrap();
    assert_eq!(n.to_string(), "12");

    let n: BigInt = "-0".parse().unwrap();
    assert_eq!(n, ZERO);
    assert!(!n.is_negative());

    let n: BigInt = "+000".parse().unwrap();
    assert_eq!(n, ZERO);
    assert_eq!(n.digit_count(), 0);
}

#[test]
fn test_parse_rejects() {
    assert_eq!("".parse::<BigInt>(), Err(FormatError::Empty));
    assert_eq!("   ".parse::<BigInt>(), Err(FormatError::Empty));
    assert!(matches!(
        "12 34".parse::<BigInt>(),
        Err(FormatError::InvalidDigit { found: ' ', .. })
    ));
    assert!(matches!(
        "12a".parse::<BigInt>(),
        Err(FormatError::InvalidDigit { found: 'a', .. })
    ));
    assert!(matches!(
        "--5".parse::<BigInt>(),
        Err(FormatError::InvalidDigit { found: '-', .. })
    ));
    assert!(matches!(
        "a12".parse::<BigInt>(),
        Err(FormatError::InvalidDigit { found: 'a', .. })
    ));
    assert!(matches!("+".parse::<BigInt>(), Err(FormatError::MissingDigits { .. })));
    assert!(matches!("-".parse::<BigInt>(), Err(FormatError::MissingDigits { .. })));
}

#[test]
fn test_from() {
    let big: BigInt = 12_i8.into();
    assert_eq!(big.to_string(), "12");

    let big: BigInt = (-100_i16).into();
    assert_eq!(big.to_string(), "-100");

    let big: BigInt = 100_u32.into();
    assert_eq!(big.to_string(), "100");

    let big: BigInt = (-10000_isize).into();
    assert_eq!(big.to_string(), "-10000");

    let big: BigInt = (-113132_i64).into();
    assert_eq!(big.to_string(), "-113132");

    let big: BigInt = 0_u8.into();
    assert_eq!(big, ZERO);

    // cached small values come back canonical
    let big: BigInt = 16_u8.into();
    assert_eq!(big.to_string(), "16");
    let big: BigInt = (-16_i64).into();
    assert_eq!(big.to_string(), "-16");
}

#[test]
fn test_compare() {
    let a: BigInt = "123".into();
    let b: BigInt = "321".into();
    assert_eq!(a.compare_mag(&b), Ordering::Less);
    assert!(a < b);

    let c: BigInt = "-321".into();
    assert!(c < a);
    let d: BigInt = "-123".into();
    assert!(c < d);

    assert!(ZERO < a);
    assert!(c < ZERO);

    // longer always wins on magnitude
    let e: BigInt = "1000".into();
    assert_eq!(b.compare_mag(&e), Ordering::Less);

    // equal contents are genuine equality
    let f: BigInt = "123".into();
    assert_eq!(a.compare_mag(&f), Ordering::Equal);
    assert_eq!(a, f);
}

#[test]
fn test_add() {
    let a: BigInt = "999".into();
    let b: BigInt = "1".into();
    assert_eq!((a + b).to_string(), "1000");

    let a: BigInt = "-2244".into();
    let b: BigInt = "2186".into();
    assert_eq!((a + b).to_string(), "-58");

    let a: BigInt = "123".into();
    let b: BigInt = "-123".into();
    let sum = a + b;
    assert_eq!(sum, ZERO);
    assert_eq!(sum.to_string(), "0");

    let a: BigInt = "-57".into();
    let b: BigInt = "-43".into();
    assert_eq!((a + b).to_string(), "-100");

    // operand widths differing by many digits
    let a: BigInt = "1000000000000000000000000000".into();
    let b: BigInt = "-1".into();
    assert_eq!((a + b).to_string(), "999999999999999999999999999");
}

#[test]
fn test_add_commutes() {
    let a: BigInt = "90071992547409919007199254740991".into();
    let b: BigInt = "-4951760157141521099596496896".into();
    assert_eq!(&a + &b, &b + &a);
    assert_eq!((&a + &b).to_string(), "90067040787252777486099658244095");
}

#[test]
fn test_sub() {
    let a: BigInt = "10000000000000".into();
    let b: BigInt = "900000000000".into();
    assert_eq!((&a - &b).to_string(), "9100000000000");
    assert_eq!((b - a).to_string(), "-9100000000000");

    let a: BigInt = "100".into();
    assert_eq!(&a - &a, ZERO);

    let a: BigInt = "5".into();
    let b: BigInt = "-7".into();
    assert_eq!((a - b).to_string(), "12");

    let a: BigInt = "-5".into();
    let b: BigInt = "-7".into();
    assert_eq!((a - b).to_string(), "2");
}

#[test]
fn test_mul() {
    let a: BigInt = "95465".into();
    let b: BigInt = "20802".into();
    let product = a * b;
    assert_eq!(product.to_string(), "1985862930");
    assert_eq!(product.digit_count(), 10);
    assert!(product.is_positive());

    let a: BigInt = "-12".into();
    let b: BigInt = "12".into();
    assert_eq!((a * b).to_string(), "-144");

    let a: BigInt = "-40".into();
    let b: BigInt = "-25".into();
    assert_eq!((a * b).to_string(), "1000");

    let a: BigInt = "123456789123456789".into();
    assert_eq!(&a * &ZERO, ZERO);
    let one: BigInt = "1".into();
    assert_eq!(&a * &one, a);
}

#[test]
fn test_mul_large() {
    let a: BigInt = "123456789012345678901234567890".into();
    let b: BigInt = "987654321098765432109876543210".into();
    assert_eq!(
        (a * b).to_string(),
        "121932631137021795226185032733622923332237463801111263526900"
    );
}

#[test]
fn test_assign_ops() {
    let mut a: BigInt = "10".into();
    a += BigInt::from("5");
    assert_eq!(a.to_string(), "15");
    a -= BigInt::from("20");
    assert_eq!(a.to_string(), "-5");
    a *= BigInt::from("-6");
    assert_eq!(a.to_string(), "30");

    let b: BigInt = "4".into();
    a += &b;
    assert_eq!(a.to_string(), "34");
    a -= &b;
    assert_eq!(a.to_string(), "30");
    a *= &b;
    assert_eq!(a.to_string(), "120");
}

#[test]
fn test_neg_abs() {
    let a: BigInt = "42".into();
    assert_eq!((-&a).to_string(), "-42");
    assert_eq!(-ZERO, ZERO);
    assert!(!(-ZERO).is_negative());

    let b: BigInt = "-42".into();
    assert_eq!(b.abs().to_string(), "42");
    assert_eq!(a.abs(), a);
    assert_eq!(ZERO.abs(), ZERO);
}

#[test]
fn test_display_round_trip() {
    let cases = [
        "0",
        "7",
        "-7",
        "58",
        "1000",
        "-2244",
        "123456789012345678901234567890",
        "-999999999999999999999999999999999999999",
    ];
    for s in cases {
        let n: BigInt = s.parse().unwrap();
        assert_eq!(n.to_string(), s);
    }
}
