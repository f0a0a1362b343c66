//! Menu prices using decimal arithmetic.
//!
//! Prices carry no currency and no fixed minor unit: the backend and the
//! seeded menu both use bare JSON numbers such as `82` or `45.5`.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be positive, got {0}")]
    NotPositive(Decimal),
    /// The input could not be parsed as a number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A menu item price.
///
/// Serializes as a JSON number. Integral amounts are written as integers so
/// that `82` stays `82` rather than becoming `82.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if the amount is zero or negative.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if the amount is zero or negative.
    pub fn from_whole(amount: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::from(amount))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|e| PriceError::Invalid(e.to_string()))?;
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero()
            && let Some(whole) = self.0.to_i64()
        {
            return serializer.serialize_i64(whole);
        }

        let float = self
            .0
            .to_f64()
            .ok_or_else(|| <S::Error as serde::ser::Error>::custom("price out of range"))?;
        serializer.serialize_f64(float)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a numeric price")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Decimal::try_from(v).map(Price).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Decimal::from_str(v.trim()).map(Price).map_err(E::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            Price::from_whole(0),
            Err(PriceError::NotPositive(_))
        ));
        assert!(matches!(
            Price::from_whole(-5),
            Err(PriceError::NotPositive(_))
        ));
        assert!(Price::from_whole(82).is_ok());
    }

    #[test]
    fn test_whole_price_serializes_as_integer() {
        let price = Price::from_whole(82).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "82");
    }

    #[test]
    fn test_fractional_price_serializes_as_float() {
        let price: Price = "45.50".parse().unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "45.5");
    }

    #[test]
    fn test_deserialize_integer_float_and_string() {
        let a: Price = serde_json::from_str("105").unwrap();
        let b: Price = serde_json::from_str("105.0").unwrap();
        let c: Price = serde_json::from_str("\"105\"").unwrap();
        assert_eq!(a.amount(), Decimal::from(105));
        assert_eq!(b.amount().normalize(), Decimal::from(105));
        assert_eq!(c, a);
    }

    #[test]
    fn test_display_is_normalized() {
        let price: Price = "39.00".parse().unwrap();
        assert_eq!(price.to_string(), "39");
    }
}
