pub mod menu;

use std::str::FromStr;

use anyhow::{Context, Result};
use bigint::BigInt;
use tracing::debug;

/// A single request to the arithmetic engine, with parsed operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add(BigInt, BigInt),
    Sub(BigInt, BigInt),
    Mul(BigInt, BigInt),
    Div(BigInt, BigInt),
    Mod(BigInt, BigInt),
    Sqrt(BigInt),
    Pow(BigInt, u32),
    Convert(u64),
    Factorial(BigInt),
}

/// Parse a big integer operand given as decimal text.
pub fn parse_operand(text: &str) -> Result<BigInt> {
    text.parse::<BigInt>()
        .with_context(|| format!("invalid big integer operand {:?}", text))
}

/// Parse a native integer argument such as an exponent.
pub fn parse_native<T>(text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse::<T>()
        .with_context(|| format!("invalid integer {:?}", text))
}

/// Run an operation and render its result as text.
///
/// Division renders two lines, the quotient and then the remainder.
pub fn evaluate(operation: &Operation) -> bigint::Result<String> {
    debug!(?operation, "evaluating");
    let rendered = match operation {
        Operation::Add(a, b) => a.checked_add(b)?.to_string(),
        Operation::Sub(a, b) => a.checked_sub(b)?.to_string(),
        Operation::Mul(a, b) => a.checked_mul(b)?.to_string(),
        Operation::Div(a, b) => {
            let (quotient, remainder) = a.div_rem(b)?;
            format!("quotient: {}\nremainder: {}", quotient, remainder)
        }
        Operation::Mod(a, b) => a.checked_rem(b)?.to_string(),
        Operation::Sqrt(a) => a.isqrt()?.to_string(),
        Operation::Pow(a, exponent) => a.pow(*exponent)?.to_string(),
        Operation::Convert(n) => BigInt::from_u64(*n)?.to_string(),
        Operation::Factorial(a) => a.factorial()?.to_string(),
    };
    debug!(digits = rendered.len(), "evaluated");
    Ok(rendered)
}
