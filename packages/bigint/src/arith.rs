//! Digit-wise addition, subtraction, multiplication and increment.

use std::ops::{Add, Mul, Sub};

use crate::bigint::DecimalInt;
use crate::error::{Error, Result};

impl<const N: usize> DecimalInt<N> {
    /// Add two values, propagating the carry one digit at a time.
    ///
    /// # Example
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a: BigInt = "999".parse().unwrap();
    /// let b: BigInt = "1".parse().unwrap();
    /// assert_eq!(a.checked_add(&b).unwrap().to_string(), "1000");
    /// ```
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let max_len = self.digits.len().max(other.digits.len());
        let mut result = Vec::with_capacity(max_len + 1);
        let mut carry = 0u8;

        for i in 0..max_len {
            let a = self.digits.get(i).copied().unwrap_or(0);
            let b = other.digits.get(i).copied().unwrap_or(0);
            let sum = a + b + carry;
            result.push(sum % 10);
            carry = sum / 10;
        }

        if carry > 0 {
            result.push(carry);
        }

        Self::from_digits(result)
    }

    /// Subtract `other` from `self`, borrowing from the next digit of `self`.
    ///
    /// Fails with [`Error::NegativeResult`] when `self < other`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        if self < other {
            return Err(Error::NegativeResult);
        }

        let mut result = Vec::with_capacity(self.digits.len());
        let mut borrow = 0u8;

        for (i, &a) in self.digits.iter().enumerate() {
            let b = other.digits.get(i).copied().unwrap_or(0) + borrow;
            if a < b {
                result.push(a + 10 - b);
                borrow = 1;
            } else {
                result.push(a - b);
                borrow = 0;
            }
        }
        debug_assert_eq!(borrow, 0);

        Self::from_digits(result)
    }

    /// Schoolbook multiplication: one shifted partial product per digit of
    /// `other`, accumulated with [`checked_add`](Self::checked_add).
    ///
    /// Costs O(len(self) * len(other)) digit operations.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let mut total = Self::zero();

        for (shift, &d) in other.digits.iter().enumerate() {
            if d == 0 {
                continue;
            }
            let partial = self.shifted_digit_product(d, shift)?;
            total = total.checked_add(&partial)?;
        }

        Ok(total)
    }

    /// `self * digit * 10^shift`
    fn shifted_digit_product(&self, digit: u8, shift: usize) -> Result<Self> {
        let mut digits = vec![0u8; shift];
        digits.reserve(self.digits.len() + 1);
        let mut carry = 0u8;

        for &a in &self.digits {
            let product = a * digit + carry;
            digits.push(product % 10);
            carry = product / 10;
        }

        if carry > 0 {
            digits.push(carry);
        }

        Self::from_digits(digits)
    }

    /// Return `self + 1`.
    pub fn increment(&self) -> Result<Self> {
        let mut next = self.clone();
        next.increment_in_place()?;
        Ok(next)
    }

    /// Add one in place. On capacity overflow `self` is left untouched.
    pub(crate) fn increment_in_place(&mut self) -> Result<()> {
        if self.digits.len() == N && self.digits.iter().all(|&d| d == 9) {
            return Err(Error::CapacityExceeded { max_digits: N });
        }

        let mut carry = 1u8;
        for d in self.digits.iter_mut() {
            let sum = *d + carry;
            *d = sum % 10;
            carry = sum / 10;
            if carry == 0 {
                break;
            }
        }

        if carry > 0 {
            self.digits.push(carry);
        }

        Ok(())
    }
}

impl<const N: usize> Add for DecimalInt<N> {
    type Output = Result<DecimalInt<N>>;

    fn add(self, other: DecimalInt<N>) -> Self::Output {
        &self + &other
    }
}

impl<const N: usize> Add for &DecimalInt<N> {
    type Output = Result<DecimalInt<N>>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(other)
    }
}

impl<const N: usize> Sub for DecimalInt<N> {
    type Output = Result<DecimalInt<N>>;

    fn sub(self, other: DecimalInt<N>) -> Self::Output {
        &self - &other
    }
}

impl<const N: usize> Sub for &DecimalInt<N> {
    type Output = Result<DecimalInt<N>>;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(other)
    }
}

impl<const N: usize> Mul for DecimalInt<N> {
    type Output = Result<DecimalInt<N>>;

    fn mul(self, other: DecimalInt<N>) -> Self::Output {
        &self * &other
    }
}

impl<const N: usize> Mul for &DecimalInt<N> {
    type Output = Result<DecimalInt<N>>;

    fn mul(self, other: Self) -> Self::Output {
        self.checked_mul(other)
    }
}
