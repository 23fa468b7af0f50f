use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest number of decimal digits a [`BigInt`] can hold.
pub const MAX_DIGITS: usize = 1024;

/// A non-negative integer of at most `N` decimal digits, represented as a vector
/// of digits (least significant first).
///
/// Values are always normalized: there is no leading zero digit unless the value
/// is zero, which is stored as the single digit `0`. `N` must be at least 1.
///
/// # Example
///
/// ```
/// use bigint::BigInt;
///
/// let n: BigInt = "00120".parse().unwrap();
/// assert_eq!(n.num_digits(), 3);
/// assert_eq!(n.to_string(), "120");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalInt<const N: usize> {
    pub(crate) digits: Vec<u8>,
}

/// Decimal integer with the default capacity of [`MAX_DIGITS`] digits.
pub type BigInt = DecimalInt<MAX_DIGITS>;

impl<const N: usize> DecimalInt<N> {
    /// Create a value representing zero.
    pub fn zero() -> Self {
        DecimalInt { digits: vec![0] }
    }

    /// Create a value representing one.
    pub fn one() -> Self {
        DecimalInt { digits: vec![1] }
    }

    /// Maximum number of digits a value of this type can hold.
    pub const fn capacity() -> usize {
        N
    }

    /// Create a value from a u64.
    pub fn from_u64(n: u64) -> Result<Self> {
        Self::from_u128(u128::from(n))
    }

    /// Create a value from a u128.
    ///
    /// Fails with [`Error::CapacityExceeded`] when `n` has more than `N` digits.
    pub fn from_u128(mut n: u128) -> Result<Self> {
        if n == 0 {
            return Ok(Self::zero());
        }
        let mut digits = Vec::new();
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        Self::from_digits(digits)
    }

    /// Parse a string of decimal digits, most significant first.
    ///
    /// Leading zeros are accepted and dropped, but still count against the
    /// capacity: the text itself must fit in `N` digits.
    ///
    /// # Example
    ///
    /// ```
    /// use bigint::{BigInt, Error};
    ///
    /// assert_eq!(BigInt::from_digit_string("000").unwrap(), BigInt::zero());
    /// assert!(matches!(
    ///     BigInt::from_digit_string("12x"),
    ///     Err(Error::InvalidFormat { position: 2, .. })
    /// ));
    /// ```
    pub fn from_digit_string(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidFormat {
                position: 0,
                found: None,
            });
        }
        if let Some((position, c)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(Error::InvalidFormat {
                position,
                found: Some(c),
            });
        }
        if s.len() > N {
            return Err(Error::CapacityExceeded { max_digits: N });
        }
        let digits = s.bytes().rev().map(|b| b - b'0').collect();
        Self::from_digits(digits)
    }

    /// Build a normalized value from raw least-significant-first digits,
    /// rejecting it if its significant digits do not fit.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Result<Self> {
        let mut value = DecimalInt { digits };
        value.normalize();
        if value.digits.len() > N {
            return Err(Error::CapacityExceeded { max_digits: N });
        }
        Ok(value)
    }

    /// Drop non-significant leading zero digits.
    pub(crate) fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
    }

    /// Digits of the value, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of significant digits (1 for zero).
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Convert to u64, returning None if the value does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
    }

    /// Total order over values.
    ///
    /// More significant digits means greater; equal lengths are compared digit
    /// by digit from the most significant end. Only valid on normalized values,
    /// which every constructor and operation guarantees.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Decimal text, most significant digit first.
    pub fn to_digit_string(&self) -> String {
        self.to_string()
    }
}

impl<const N: usize> Default for DecimalInt<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Ord for DecimalInt<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<const N: usize> PartialOrd for DecimalInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> FromStr for DecimalInt<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_digit_string(s)
    }
}

impl<const N: usize> TryFrom<u64> for DecimalInt<N> {
    type Error = Error;

    fn try_from(n: u64) -> Result<Self> {
        Self::from_u64(n)
    }
}

impl<const N: usize> TryFrom<u128> for DecimalInt<N> {
    type Error = Error;

    fn try_from(n: u128) -> Result<Self> {
        Self::from_u128(n)
    }
}

impl<const N: usize> fmt::Display for DecimalInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for DecimalInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DecimalInt")
            .field(&format_args!("{}", self))
            .finish()
    }
}

#[cfg(test)]
impl<const N: usize> quickcheck::Arbitrary for DecimalInt<N> {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = <usize as quickcheck::Arbitrary>::arbitrary(g) % N.min(40) + 1;
        let digits = (0..len)
            .map(|_| <u8 as quickcheck::Arbitrary>::arbitrary(g) % 10)
            .collect();
        let mut value = DecimalInt { digits };
        value.normalize();
        value
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        if self.digits.len() <= 1 {
            return quickcheck::empty_shrinker();
        }
        // Dropping the lowest digit keeps the top digit, so the result stays normalized.
        quickcheck::single_shrinker(DecimalInt {
            digits: self.digits[1..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tiny = DecimalInt<4>;

    #[test]
    fn test_from_str() {
        let n: BigInt = "12345".parse().unwrap();
        assert_eq!(n.digits, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_display() {
        let n: BigInt = "12345".parse().unwrap();
        assert_eq!(format!("{}", n), "12345");
        assert_eq!(n.to_digit_string(), "12345");
        assert_eq!(format!("{:?}", n), "DecimalInt(12345)");
    }

    #[test]
    fn test_zero() {
        let from_int = BigInt::from_u64(0).unwrap();
        let from_str = BigInt::from_digit_string("0").unwrap();
        assert_eq!(from_int.digits, vec![0]);
        assert_eq!(from_str.digits, vec![0]);
        assert!(from_int.is_zero());
        assert_eq!(from_int, BigInt::default());
    }

    #[test]
    fn test_leading_zeros_are_dropped() {
        let n = BigInt::from_digit_string("000123").unwrap();
        assert_eq!(n.num_digits(), 3);
        assert_eq!(n.to_string(), "123");

        let zero = BigInt::from_digit_string("0000").unwrap();
        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero.num_digits(), 1);
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            BigInt::from_digit_string("12a4"),
            Err(Error::InvalidFormat {
                position: 2,
                found: Some('a')
            })
        );
        assert_eq!(
            BigInt::from_digit_string("-5"),
            Err(Error::InvalidFormat {
                position: 0,
                found: Some('-')
            })
        );
        assert_eq!(
            BigInt::from_digit_string(""),
            Err(Error::InvalidFormat {
                position: 0,
                found: None
            })
        );
        assert!(" 1".parse::<BigInt>().is_err());
    }

    #[test]
    fn test_string_capacity() {
        assert_eq!(Tiny::from_digit_string("9999").unwrap().to_string(), "9999");
        assert_eq!(
            Tiny::from_digit_string("12345"),
            Err(Error::CapacityExceeded { max_digits: 4 })
        );
        // The text has to fit, even when its extra digits are leading zeros.
        assert_eq!(
            Tiny::from_digit_string("00001"),
            Err(Error::CapacityExceeded { max_digits: 4 })
        );
        // Format errors win over capacity errors.
        assert!(matches!(
            Tiny::from_digit_string("123456x"),
            Err(Error::InvalidFormat { position: 6, .. })
        ));
    }

    #[test]
    fn test_from_u64() {
        let n = BigInt::from_u64(12345).unwrap();
        assert_eq!(format!("{}", n), "12345");
        let max = BigInt::from_u64(u64::MAX).unwrap();
        assert_eq!(max.to_string(), u64::MAX.to_string());
        let wide = BigInt::try_from(u128::MAX).unwrap();
        assert_eq!(wide.to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_from_u64_capacity() {
        assert_eq!(Tiny::from_u64(9999).unwrap().num_digits(), 4);
        assert_eq!(
            Tiny::from_u64(10000),
            Err(Error::CapacityExceeded { max_digits: 4 })
        );
        assert_eq!(Tiny::capacity(), 4);
        assert_eq!(BigInt::capacity(), MAX_DIGITS);
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(BigInt::from_u64(987654321).unwrap().to_u64(), Some(987654321));
        assert_eq!(BigInt::zero().to_u64(), Some(0));
        let too_big: BigInt = "18446744073709551616".parse().unwrap();
        assert_eq!(too_big.to_u64(), None);
    }

    #[test]
    fn test_compare() {
        let a: BigInt = "999".parse().unwrap();
        let b: BigInt = "1000".parse().unwrap();
        let c: BigInt = "1009".parse().unwrap();
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(b.compare(&c), Ordering::Less);
        assert_eq!(c.compare(&c.clone()), Ordering::Equal);
        assert!(c.equals(&"01009".parse().unwrap()));
        assert!(!a.equals(&b));
        assert!(a < b && b < c);
        assert_eq!([&c, &a, &b].iter().max(), Some(&&c));
    }

    #[test]
    fn test_copy_is_independent() {
        let original: BigInt = "42".parse().unwrap();
        let mut copy = original.clone();
        copy.digits[0] = 7;
        assert_eq!(original.to_string(), "42");
        assert_eq!(copy.to_string(), "47");
    }

    #[test]
    fn test_round_trip() {
        for s in ["0", "7", "10", "1234567890", "9".repeat(MAX_DIGITS).as_str()] {
            assert_eq!(BigInt::from_digit_string(s).unwrap().to_digit_string(), s);
        }
    }
}
