//! Conversion entity and the postback that produces it.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// A conversion attributed to a previously recorded click.
///
/// `click_ref` holds the click's surrogate id, not its external `click_id`.
/// Several conversions may reference the same click.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub id: i64,
    pub click_ref: i64,
    pub affiliate_id: String,
    pub amount: BigDecimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl Conversion {
    /// Creates a new Conversion instance.
    pub fn new(
        id: i64,
        click_ref: i64,
        affiliate_id: String,
        amount: BigDecimal,
        currency: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            click_ref,
            affiliate_id,
            amount,
            currency,
            created_at,
        }
    }
}

/// A conversion notification exactly as reported by the advertiser.
///
/// `amount` and `currency` are carried through untouched; the amount is only
/// parsed into a decimal once the postback has been attributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postback {
    pub affiliate_id: String,
    pub click_id: String,
    pub amount: String,
    pub currency: String,
}

impl Postback {
    pub fn new(
        affiliate_id: impl Into<String>,
        click_id: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            affiliate_id: affiliate_id.into(),
            click_id: click_id.into(),
            amount: amount.into(),
            currency: currency.into(),
        }
    }

    /// Returns true if every required field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.affiliate_id.is_empty()
            && !self.click_id.is_empty()
            && !self.amount.is_empty()
            && !self.currency.is_empty()
    }
}

/// Input data for persisting a conversion against a resolved click.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConversion {
    pub click_ref: i64,
    pub affiliate_id: String,
    pub amount: BigDecimal,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_conversion_creation() {
        let now = Utc::now();
        let amount = BigDecimal::from_str("99.50").unwrap();
        let conversion = Conversion::new(
            7,
            1,
            "A1".to_string(),
            amount.clone(),
            "USD".to_string(),
            now,
        );

        assert_eq!(conversion.click_ref, 1);
        assert_eq!(conversion.amount, amount);
        assert_eq!(conversion.amount.to_string(), "99.50");
        assert_eq!(conversion.currency, "USD");
    }

    #[test]
    fn test_postback_completeness() {
        assert!(Postback::new("A1", "X1", "99.50", "USD").is_complete());
        assert!(!Postback::new("A1", "X1", "", "USD").is_complete());
        assert!(!Postback::new("A1", "X1", "99.50", "").is_complete());
        assert!(!Postback::new("", "X1", "99.50", "USD").is_complete());
    }
}
