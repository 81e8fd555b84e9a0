use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount of DA, stored in ten-thousandths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    pub const DECIMALS: usize = 4;
    pub const SCALE: i64 = 10_000;

    pub const fn from_whole(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    /// Parses a plain decimal string such as `200`, `-3.5` or `0.0125`
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = digits.split('.');

        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next();

        if parts.next().is_some() {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !fraction.map_or(true, all_digits) {
            Err(MoneyError::Parse("Unexpected character", string.to_string()))?
        }

        let fraction = fraction.unwrap_or_default();
        if fraction.len() > Self::DECIMALS {
            Err(MoneyError::Parse("Too many decimal places", string.to_string()))?
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse()? };
        let fraction: i64 = format!("{:0<width$}", fraction, width = Self::DECIMALS).parse()?;

        let value = whole
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Out of range", string.to_string()))?;

        Ok(Money(if negative { -value } else { value }))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds `other` in place. On overflow the value is left untouched.
    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or(MoneyError::Overflow("add", *self, *other))?;

        self.0 = sum;

        Ok(())
    }

    /// Subtracts `other` in place. On overflow the value is left untouched.
    pub fn sub(&mut self, other: &Self) -> Result {
        let difference = self
            .0
            .checked_sub(other.0)
            .ok_or(MoneyError::Overflow("sub", *self, *other))?;

        self.0 = difference;

        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;

        let fraction = format!("{:0width$}", abs % scale, width = Self::DECIMALS);
        let fraction = fraction.trim_end_matches('0');
        let fraction = if fraction.is_empty() { "0" } else { fraction };

        write!(f, "{sign}{}.{fraction}", abs / scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("200").unwrap(), Money(2_000_000));
        assert_eq!(Money::parse("150.5").unwrap(), Money(1_505_000));
        assert_eq!(Money::parse("0.0001").unwrap(), Money(1));
        assert_eq!(Money::parse(".25").unwrap(), Money(2_500));
        assert_eq!(Money::parse("-3.5").unwrap(), Money(-35_000));
        assert_eq!(Money::parse(" 7 ").unwrap(), Money::from_whole(7));
    }

    #[test]
    fn parse_rejects_malformed() {
        for input in ["", "-", ".", "1.2.3", "1.23456", "abc", "1e5", "12a"] {
            let err = Money::parse(input).unwrap_err();
            assert!(
                err.downcast_ref::<MoneyError>().is_some(),
                "expected MoneyError for {input:?}, got {err}"
            );
        }

        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Money::from_whole(500).to_string(), "500.0");
        assert_eq!(Money(1_505_000).to_string(), "150.5");
        assert_eq!(Money(1_502_500).to_string(), "150.25");
        assert_eq!(Money(1).to_string(), "0.0001");
        assert_eq!(Money::ZERO.to_string(), "0.0");
        assert_eq!(Money(-35_000).to_string(), "-3.5");
    }

    #[test]
    fn add_and_sub() {
        let mut money = Money::from_whole(10);

        money.add(&Money::from_whole(5)).unwrap();
        assert_eq!(money, Money::from_whole(15));

        money.sub(&Money::from_whole(20)).unwrap();
        assert_eq!(money, Money::from_whole(-5));
    }

    #[test]
    fn overflow_leaves_value_untouched() {
        let mut money = Money::MAX;

        assert!(money.add(&Money(1)).is_err());
        assert_eq!(money, Money::MAX);

        let mut money = Money(i64::MIN);
        assert!(money.sub(&Money(1)).is_err());
        assert_eq!(money, Money(i64::MIN));
    }
}
