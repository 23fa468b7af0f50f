//! Fixed-capacity, non-negative decimal integers.
//!
//! Values are stored one decimal digit per element and every operation works
//! directly on the digits. Results that need more digits than the type's
//! capacity are reported as [`Error::CapacityExceeded`], never truncated.
//!
//! Division, power, factorial and square root are built from increment,
//! subtraction and multiplication loops, so their cost grows with the
//! magnitude of the numbers involved rather than with their digit count.

mod arith;
pub mod bigint;
mod division;
pub mod error;
mod factorial;
mod power;
mod sqrt;

pub use bigint::{BigInt, DecimalInt, MAX_DIGITS};
pub use error::{Error, Result};
