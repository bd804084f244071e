//! Money type for representing bill amounts
//!
//! Wraps an exact `Decimal` so the value written in a bill file is the value
//! that gets validated and exported. Bill files carry amounts as plain
//! decimals ("100.00"), so that is both the parse and the display format.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Display scale for amounts that carry fewer than two decimal places
const MIN_DISPLAY_SCALE: u32 = 2;

/// Represents a monetary amount as an exact decimal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+3", "10", ".5", "0.001". Every
    /// digit is kept; nothing is rounded. Exponents, currency symbols and
    /// thousands separators are rejected.
    ///
    /// # Examples
    /// ```
    /// use bill_sync::models::Money;
    /// let amount = Money::parse("1.239").unwrap();
    /// assert_eq!(amount.to_string(), "1.239");
    /// assert_eq!(Money::parse("10.5").unwrap().to_string(), "10.50");
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, body) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (units, fraction) = match body.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (body, ""),
        };

        if units.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(units) || !all_digits(fraction) {
            return Err(invalid());
        }

        let units = if units.is_empty() { "0" } else { units };
        let normalized = if fraction.is_empty() {
            units.to_string()
        } else {
            format!("{}.{}", units, fraction)
        };

        let value = Decimal::from_str(&normalized).map_err(|_| invalid())?;
        Ok(Self(if negative { -value } else { value }))
    }

    /// Parse leniently, treating anything malformed as zero
    pub fn parse_or_zero(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.value()
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // At least two decimals, more only when the value needs them
        let mut value = self.0.normalize();
        if value.scale() < MIN_DISPLAY_SCALE {
            value.rescale(MIN_DISPLAY_SCALE);
        }
        write!(f, "{}", value)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(f64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Money::parse(&s).map_err(serde::de::Error::custom),
            // Shortest round-trip text of the float, so 12.3 stays 12.3
            Repr::Number(n) if n.is_finite() => {
                Money::parse(&n.to_string()).map_err(serde::de::Error::custom)
            }
            Repr::Number(n) => Err(serde::de::Error::custom(format!(
                "amount out of range: {}",
                n
            ))),
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(money("10.5").to_string(), "10.50");
        assert_eq!(money("0").to_string(), "0.00");
        assert_eq!(money("-10.50").to_string(), "-10.50");
        assert_eq!(money("0.05").to_string(), "0.05");
        assert_eq!(money("1.2300").to_string(), "1.23");
        assert_eq!(money("1.239").to_string(), "1.239");
        assert_eq!(money("-0").to_string(), "0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(money("10.50").value(), Decimal::new(1050, 2));
        assert_eq!(money("10"), money("10.00"));
        assert_eq!(money("-5").value(), Decimal::new(-5, 0));
        assert_eq!(money("+3").value(), Decimal::new(3, 0));
        assert_eq!(money(".5").value(), Decimal::new(5, 1));
        assert_eq!(money(" 2000.00 ").value(), Decimal::new(2000, 0));
    }

    #[test]
    fn test_parse_keeps_every_digit() {
        assert_eq!(money("1.239").value(), Decimal::new(1239, 3));
        assert_ne!(money("1.239"), money("1.23"));

        let tiny = money("0.001");
        assert!(tiny.is_positive());
        assert_eq!(tiny.value(), Decimal::new(1, 3));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1e3").is_err());
        assert!(Money::parse("1,000").is_err());
        assert!(Money::parse("1_000").is_err());
        assert!(Money::parse("99999999999999999999999999999999999999").is_err());
    }

    #[test]
    fn test_sign_checks() {
        assert!(money("0.00").is_zero());
        assert!(!money("0.00").is_positive());
        assert!(!money("-0.01").is_positive());
        assert!(money("0.01").is_positive());
    }

    #[test]
    fn test_parse_or_zero() {
        assert!(Money::parse_or_zero("not a number").is_zero());
        assert_eq!(Money::parse_or_zero("7.25"), money("7.25"));
    }

    #[test]
    fn test_serde_accepts_string_and_number() {
        let from_str: Money = serde_json::from_str("\"12.30\"").unwrap();
        let from_num: Money = serde_json::from_str("12.3").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(serde_json::to_string(&from_str).unwrap(), "\"12.30\"");

        let precise: Money = serde_json::from_str("\"0.001\"").unwrap();
        assert_eq!(serde_json::to_string(&precise).unwrap(), "\"0.001\"");
    }
}
