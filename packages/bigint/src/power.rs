use crate::bigint::DecimalInt;
use crate::error::Result;

impl<const N: usize> DecimalInt<N> {
    /// Raise to a native exponent by repeated multiplication.
    ///
    /// `x.pow(0)` is one for every `x`, zero included. Costs `exponent - 1`
    /// multiplications.
    ///
    /// # Example
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let two = BigInt::from_u64(2).unwrap();
    /// assert_eq!(two.pow(10).unwrap().to_string(), "1024");
    /// ```
    pub fn pow(&self, exponent: u32) -> Result<Self> {
        if exponent == 0 {
            return Ok(Self::one());
        }

        let mut result = self.clone();
        for _ in 1..exponent {
            result = result.checked_mul(self)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, DecimalInt, Error};

    fn digit_sum(n: &BigInt) -> u32 {
        n.digits().iter().map(|&d| u32::from(d)).sum()
    }

    #[test]
    fn test_pow() {
        let two = BigInt::from_u64(2).unwrap();
        assert_eq!(two.pow(1).unwrap().to_string(), "2");
        assert_eq!(two.pow(10).unwrap().to_string(), "1024");
        assert_eq!(two.pow(64).unwrap().to_string(), "18446744073709551616");
        let ten = BigInt::from_u64(10).unwrap();
        assert_eq!(ten.pow(30).unwrap().to_string(), format!("1{}", "0".repeat(30)));
    }

    #[test]
    fn test_pow_zero_exponent() {
        assert_eq!(BigInt::from_u64(12345).unwrap().pow(0).unwrap(), BigInt::one());
        assert_eq!(BigInt::zero().pow(0).unwrap(), BigInt::one());
        assert_eq!(BigInt::zero().pow(5).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_two_to_the_thousand() {
        let n = BigInt::from_u64(2).unwrap().pow(1000).unwrap();
        assert_eq!(n.num_digits(), 302);
        assert_eq!(digit_sum(&n), 1366);
    }

    #[test]
    fn test_pow_capacity() {
        let ten = DecimalInt::<4>::from_u64(10).unwrap();
        assert_eq!(ten.pow(3).unwrap().to_string(), "1000");
        assert_eq!(ten.pow(4), Err(Error::CapacityExceeded { max_digits: 4 }));
    }
}
