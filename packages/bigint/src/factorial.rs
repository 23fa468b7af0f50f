use crate::bigint::DecimalInt;
use crate::error::Result;

impl<const N: usize> DecimalInt<N> {
    /// Compute `self!`.
    ///
    /// A counter is stepped from 1 up to `self` with increments, multiplying the
    /// running product at each step, so the cost grows with the value of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let n = BigInt::from_u64(5).unwrap();
    /// assert_eq!(n.factorial().unwrap().to_string(), "120");
    /// ```
    pub fn factorial(&self) -> Result<Self> {
        let mut product = Self::one();
        let mut k = Self::zero();
        while k < *self {
            k.increment_in_place()?;
            product = product.checked_mul(&k)?;
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, DecimalInt, Error};

    fn factorial_of(n: u64) -> BigInt {
        BigInt::from_u64(n).unwrap().factorial().unwrap()
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial_of(0).to_string(), "1");
        assert_eq!(factorial_of(1).to_string(), "1");
        assert_eq!(factorial_of(5).to_string(), "120");
        assert_eq!(factorial_of(10).to_string(), "3628800");
        assert_eq!(factorial_of(20).to_u64(), Some(2432902008176640000));
    }

    #[test]
    fn test_hundred_factorial_digit_sum() {
        let n = factorial_of(100);
        assert_eq!(n.num_digits(), 158);
        let digit_sum: u32 = n.digits().iter().map(|&d| u32::from(d)).sum();
        assert_eq!(digit_sum, 648);
    }

    #[test]
    fn test_factorial_capacity() {
        // 7! = 5040 fits in four digits, 8! = 40320 does not.
        let seven = DecimalInt::<4>::from_u64(7).unwrap();
        assert_eq!(seven.factorial().unwrap().to_string(), "5040");
        let eight = DecimalInt::<4>::from_u64(8).unwrap();
        assert_eq!(eight.factorial(), Err(Error::CapacityExceeded { max_digits: 4 }));
    }
}
