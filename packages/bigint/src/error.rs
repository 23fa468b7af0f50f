use thiserror::Error;

/// Failures reported by the arithmetic operations.
///
/// Every operation checks its inputs and capacity before returning a value,
/// so an `Err` never comes with a partially built result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid digit string: {found:?} at position {position} is not a decimal digit")]
    InvalidFormat { position: usize, found: Option<char> },

    #[error("result needs more than {max_digits} decimal digits")]
    CapacityExceeded { max_digits: usize },

    #[error("subtraction would produce a negative result")]
    NegativeResult,

    #[error("division by zero")]
    DivideByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
