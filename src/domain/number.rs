//! Two-digit lottery numbers.
//!
//! A [`Number`] is one of the 100 values `00`..=`99`. It is always rendered
//! zero-padded, both in `Display` and on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Size of the number universe.
pub const UNIVERSE_SIZE: usize = 100;

/// A two-digit number in `00..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(u8);

/// Error returned when a token is not a two-digit number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a two-digit number between 00 and 99")]
pub struct ParseNumberError(pub String);

impl Number {
    /// Create a number from its integer value.
    ///
    /// Returns `None` if the value is above 99.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < 100 { Some(Self(value)) } else { None }
    }

    /// Build a number from a tens and a units digit.
    ///
    /// Returns `None` if either digit is above 9.
    #[must_use]
    pub const fn from_digits(tens: u8, units: u8) -> Option<Self> {
        if tens < 10 && units < 10 {
            Some(Self(tens * 10 + units))
        } else {
            None
        }
    }

    /// Integer value (0-99).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Tens digit ("dau").
    #[must_use]
    pub const fn tens(self) -> u8 {
        self.0 / 10
    }

    /// Units digit ("duoi").
    #[must_use]
    pub const fn units(self) -> u8 {
        self.0 % 10
    }

    /// Raw sum of both digits (0-18).
    #[must_use]
    pub const fn digit_sum(self) -> u8 {
        self.tens() + self.units()
    }

    /// Digit sum reduced mod 10, the value the sum filter matches on.
    #[must_use]
    pub const fn digit_sum_mod10(self) -> u8 {
        self.digit_sum() % 10
    }

    /// Whether both digits are equal (00, 11, ..., 99).
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.tens() == self.units()
    }

    /// Whether `digit` appears in either position.
    #[must_use]
    pub const fn touches(self, digit: u8) -> bool {
        self.tens() == digit || self.units() == digit
    }

    /// The number with its digits swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self(self.units() * 10 + self.tens())
    }

    /// Iterate over all 100 numbers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..100u8).map(Self)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ParseNumberError(s.to_string()));
        }
        Ok(Self((bytes[0] - b'0') * 10 + (bytes[1] - b'0')))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a single-digit token ("0".."9").
///
/// Used for touch and sum filters.
#[must_use]
pub fn parse_digit(token: &str) -> Option<u8> {
    match token.as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let n: Number = "07".parse().unwrap();
        assert_eq!(n.value(), 7);
        assert_eq!(n.to_string(), "07");

        assert!("7".parse::<Number>().is_err());
        assert!("007".parse::<Number>().is_err());
        assert!("a1".parse::<Number>().is_err());
        assert!("-1".parse::<Number>().is_err());
    }

    #[test]
    fn test_digit_attributes() {
        let n = Number::new(58).unwrap();
        assert_eq!(n.tens(), 5);
        assert_eq!(n.units(), 8);
        assert_eq!(n.digit_sum(), 13);
        assert_eq!(n.digit_sum_mod10(), 3);
        assert!(!n.is_double());
        assert!(n.touches(5));
        assert!(n.touches(8));
        assert!(!n.touches(3));
        assert_eq!(n.reversed(), Number::new(85).unwrap());
        assert!(Number::new(44).unwrap().is_double());
    }

    #[test]
    fn test_bounds() {
        assert!(Number::new(99).is_some());
        assert!(Number::new(100).is_none());
        assert!(Number::from_digits(10, 0).is_none());
        assert_eq!(Number::all().count(), UNIVERSE_SIZE);
    }

    #[test]
    fn test_serde_as_padded_string() {
        let n = Number::new(5).unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"05\"");
        let back: Number = serde_json::from_str("\"05\"").unwrap();
        assert_eq!(back, n);
        assert!(serde_json::from_str::<Number>("\"5\"").is_err());
    }

    #[test]
    fn test_parse_digit() {
        assert_eq!(parse_digit("0"), Some(0));
        assert_eq!(parse_digit("9"), Some(9));
        assert_eq!(parse_digit("10"), None);
        assert_eq!(parse_digit(""), None);
        assert_eq!(parse_digit("x"), None);
    }
}
