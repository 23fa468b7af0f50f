use crate::bigint::DecimalInt;
use crate::error::{Error, Result};

impl<const N: usize> DecimalInt<N> {
    /// Floor of the square root, found by linear search.
    ///
    /// Candidates are stepped up from zero until the next one squares past
    /// `self`. The cost is proportional to the value of the root, times one
    /// squaring per step.
    ///
    /// # Example
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from_u64(99).unwrap().isqrt().unwrap().to_string(), "9");
    /// assert_eq!(BigInt::from_u64(100).unwrap().isqrt().unwrap().to_string(), "10");
    /// ```
    pub fn isqrt(&self) -> Result<Self> {
        let mut root = Self::zero();
        loop {
            let candidate = root.increment()?;
            match candidate.checked_mul(&candidate) {
                Ok(square) if square <= *self => root = candidate,
                // A square that does not fit is larger than any value that does.
                Ok(_) | Err(Error::CapacityExceeded { .. }) => return Ok(root),
                Err(e) => return Err(e),
            }
        }
    }
}
