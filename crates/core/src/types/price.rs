//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing or converting a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be a positive amount")]
    NotPositive,
    /// The amount does not fit in a cents representation.
    #[error("price is too large to express in cents")]
    CentsOverflow,
}

/// A positive monetary amount in USD.
///
/// Amounts are stored in the currency's standard unit (dollars, not cents)
/// using decimal arithmetic, and map to `NUMERIC` columns in `PostgreSQL`.
/// Payment-processor calls use [`Price::to_cents`] for the smallest-unit
/// integer amount.
///
/// ## Examples
///
/// ```
/// use remedia_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(1550, 2)).unwrap(); // 15.50
/// assert_eq!(price.to_cents().unwrap(), 1550);
///
/// assert!(Price::new(Decimal::ZERO).is_err());
/// assert!(Price::new(Decimal::new(-100, 2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] when the amount is zero or
    /// negative.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// The decimal amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount in cents, rounded to the nearest cent.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::CentsOverflow`] when the amount does not fit
    /// in an `i64` cents value.
    pub fn to_cents(&self) -> Result<i64, PriceError> {
        (self.0 * Decimal::ONE_HUNDRED)
            .round()
            .to_i64()
            .ok_or(PriceError::CentsOverflow)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<'_, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_positive() {
        let price = Price::new(Decimal::new(1000, 2)).unwrap();
        assert_eq!(price.amount(), Decimal::new(1000, 2));
    }

    #[test]
    fn test_new_zero_rejected() {
        assert_eq!(Price::new(Decimal::ZERO), Err(PriceError::NotPositive));
    }

    #[test]
    fn test_new_negative_rejected() {
        assert_eq!(
            Price::new(Decimal::new(-500, 2)),
            Err(PriceError::NotPositive)
        );
    }

    #[test]
    fn test_to_cents() {
        let price = Price::new(Decimal::new(1999, 2)).unwrap(); // 19.99
        assert_eq!(price.to_cents().unwrap(), 1999);

        let whole = Price::new(Decimal::new(15, 0)).unwrap(); // 15
        assert_eq!(whole.to_cents().unwrap(), 1500);
    }

    #[test]
    fn test_to_cents_rounds_sub_cent_amounts() {
        let price = Price::new(Decimal::new(10005, 4)).unwrap(); // 1.0005
        assert_eq!(price.to_cents().unwrap(), 100);
    }

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::new(Decimal::new(5, 0)).unwrap();
        assert_eq!(price.to_string(), "5.00");
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let price: Price = serde_json::from_str("15").unwrap();
        assert_eq!(price.to_cents().unwrap(), 1500);

        let fractional: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(fractional.to_cents().unwrap(), 999);
    }

    #[test]
    fn test_deserialize_rejects_non_numeric() {
        assert!(serde_json::from_str::<Price>("\"abc\"").is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_positive() {
        assert!(serde_json::from_str::<Price>("0").is_err());
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }
}
