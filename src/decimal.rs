use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// Money type with 2 decimal places precision for cent-level accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);
    pub const CENT: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(2))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(2)))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (cents)
    pub fn from_minor(amount: i64) -> Self {
        let d = Decimal::from(amount) / Decimal::from(100);
        Money(d.round_dp(2))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(2))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(2);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(2))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp(2);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money((self.0 * other).round_dp(2))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money((self.0 / other).round_dp(2))
    }
}

/// rate type for percentages and ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.36 for 36%)
    pub const fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 36 for 36%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    /// ratio of two money amounts, None when the denominator is zero
    pub fn ratio(numerator: Money, denominator: Money) -> Option<Rate> {
        if denominator.is_zero() {
            return None;
        }
        Some(Rate(numerator.as_decimal() / denominator.as_decimal()))
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}
