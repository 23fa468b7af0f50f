use crate::bigint::DecimalInt;
use crate::error::{Error, Result};

impl<const N: usize> DecimalInt<N> {
    /// Quotient and remainder by repeated subtraction.
    ///
    /// The divisor is subtracted from a running remainder until the remainder
    /// drops below it, counting the subtractions. The cost is proportional to
    /// the value of the quotient, not to its number of digits.
    ///
    /// # Example
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a: BigInt = "17".parse().unwrap();
    /// let b: BigInt = "5".parse().unwrap();
    /// let (q, r) = a.div_rem(&b).unwrap();
    /// assert_eq!((q.to_string(), r.to_string()), ("3".to_string(), "2".to_string()));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }
        if self < divisor {
            return Ok((Self::zero(), self.clone()));
        }

        let mut quotient = Self::zero();
        let mut remainder = self.clone();
        while remainder >= *divisor {
            remainder = remainder.checked_sub(divisor)?;
            quotient.increment_in_place()?;
        }

        Ok((quotient, remainder))
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }
}
