use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{Currency, DateLabel};

/// Time series for a single currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    pub base: Currency,
    pub currency: Currency,
    /// Date -> rate, ascending by date
    pub rates: BTreeMap<DateLabel, f64>,
}

/// Time series for several currencies sharing one base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultiCurrencyRates {
    pub base: Currency,
    pub currencies: Vec<Currency>,
    /// Date -> (currency -> rate), ascending by date
    pub rates: BTreeMap<DateLabel, BTreeMap<Currency, f64>>,
}

/// The most recent rate available on or before a requested date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResult {
    pub base: Currency,
    pub currency: Currency,
    /// Date the rate was published for
    pub date: DateLabel,
    pub rate: f64,
    /// Set only when no rate was published on the requested date itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_date: Option<DateLabel>,
}

impl RateResult {
    /// True when the rate was published exactly on the requested date.
    pub fn is_exact(&self) -> bool {
        self.requested_date.is_none()
    }
}

/// An amount converted at a [`RateResult`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub base: Currency,
    pub currency: Currency,
    pub date: DateLabel,
    pub rate: f64,
    /// Amount in `base`, as given
    pub original_amount: f64,
    /// Amount in `currency`, rounded to the cent
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_date: Option<DateLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_date_omitted_when_exact() {
        let result = RateResult {
            base: "EUR".to_string(),
            currency: "USD".to_string(),
            date: "2024-01-05".to_string(),
            rate: 1.0921,
            requested_date: None,
        };
        assert!(result.is_exact());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("requestedDate").is_none());
    }

    #[test]
    fn test_requested_date_serialized_when_different() {
        let result = RateResult {
            base: "EUR".to_string(),
            currency: "USD".to_string(),
            date: "2024-01-05".to_string(),
            rate: 1.0921,
            requested_date: Some("2024-01-06".to_string()),
        };
        assert!(!result.is_exact());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["requestedDate"], "2024-01-06");
    }
}
