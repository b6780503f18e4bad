//! Fixed overhead cost model.
//!
//! This module defines the [`FixedCosts`] struct holding the annual overhead
//! categories of the company. All amounts are annual figures in a single
//! currency unit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed annual overhead costs of the company, by category.
///
/// The free-text `other_description` field labels the `other` amount for
/// display purposes and is excluded from every sum.
///
/// # Example
///
/// ```
/// use quote_engine::models::FixedCosts;
/// use rust_decimal::Decimal;
///
/// let costs = FixedCosts {
///     rent: Decimal::new(12000, 0),
///     ..FixedCosts::default()
/// };
/// assert_eq!(costs.utilities, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedCosts {
    /// Annual office rent.
    #[serde(default)]
    pub rent: Decimal,
    /// Annual utilities (electricity, heating, connectivity).
    #[serde(default)]
    pub utilities: Decimal,
    /// Annual software licenses and subscriptions.
    #[serde(default)]
    pub software: Decimal,
    /// Annual hardware purchases and amortization.
    #[serde(default)]
    pub hardware: Decimal,
    /// Annual marketing spend.
    #[serde(default)]
    pub marketing: Decimal,
    /// Annual administration and accounting fees.
    #[serde(default)]
    pub administration: Decimal,
    /// Annual insurance premiums.
    #[serde(default)]
    pub insurance: Decimal,
    /// Annual travel expenses.
    #[serde(default)]
    pub travel: Decimal,
    /// Annual training budget.
    #[serde(default)]
    pub training: Decimal,
    /// Any other annual cost, described by `other_description`.
    #[serde(default)]
    pub other: Decimal,
    /// Free-text label for the `other` category. Never summed.
    #[serde(default)]
    pub other_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_is_all_zero() {
        let costs = FixedCosts::default();
        assert_eq!(costs.rent, Decimal::ZERO);
        assert_eq!(costs.other, Decimal::ZERO);
        assert!(costs.other_description.is_empty());
    }

    #[test]
    fn test_deserialize_partial_fields() {
        let json = r#"{
            "rent": "12000",
            "software": "3600",
            "other": "500",
            "other_description": "coworking day passes"
        }"#;

        let costs: FixedCosts = serde_json::from_str(json).unwrap();
        assert_eq!(costs.rent, dec("12000"));
        assert_eq!(costs.software, dec("3600"));
        assert_eq!(costs.utilities, Decimal::ZERO);
        assert_eq!(costs.other_description, "coworking day passes");
    }

    #[test]
    fn test_serialize_round_trip() {
        let costs = FixedCosts {
            rent: dec("9600"),
            utilities: dec("1800"),
            insurance: dec("700.50"),
            other_description: "misc".to_string(),
            ..FixedCosts::default()
        };

        let json = serde_json::to_string(&costs).unwrap();
        let deserialized: FixedCosts = serde_json::from_str(&json).unwrap();
        assert_eq!(costs, deserialized);
    }
}
