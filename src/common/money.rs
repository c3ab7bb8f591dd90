use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::common::error::AppError;

#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A struct representing a monetary value as a whole number of currency units.
///
/// # Why Use Money? It is a Value Object.
/// Using `Money` as a wrapper around `i64` provides type safety and prevents
/// confusion with other numeric values. Balances and transfer amounts cannot
/// be accidentally mixed with counters or indices, and the ledger stays free
/// of floating-point rounding because there are no fractional amounts at all.
///
/// # Examples
/// ```
/// use teller::common::money::Money;
///
/// let amount = Money::new(1_500);
/// assert_eq!(amount.as_i64(), 1_500);
/// assert_eq!(amount.to_string(), "1,500");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Parses user input as a transaction amount.
    ///
    /// Amounts must be whole numbers strictly greater than zero; anything
    /// else (non-numeric text, zero, negatives) is `AppError::InvalidAmount`.
    pub fn parse_amount(input: &str) -> Result<Money, AppError> {
        match input.trim().parse::<i64>() {
            Ok(value) if value > 0 => Ok(Money(value)),
            _ => Err(AppError::InvalidAmount),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_thousands(self.0))
    }
}

// Renders 1234567 as "1,234,567".
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
