//! Exact decimal type for payment amounts.
//!
//! Uses `rust_decimal` internally, the same 96-bit scaled representation as
//! the decimal columns this data comes from, so sums are exact and
//! reproducible.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A payment amount with minimal display formatting.
///
/// Arithmetic keeps whatever scale the inputs carry; `Display` prints the
/// normalized value instead: trailing zeros trimmed, no forced decimal
/// point, no scientific notation, negative zero as `0`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use claims_triangle::Amount;
///
/// let amount = Amount::from_str("110.0").unwrap();
/// assert_eq!(amount.to_string(), "110");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value, the additive identity used for absent data cells.
    pub const ZERO: Self = Amount(Decimal::ZERO);
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
