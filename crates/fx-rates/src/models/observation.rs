use serde::{Deserialize, Serialize};

use super::types::{Currency, DateLabel};

/// One currency/date rate point.
///
/// `1 base_currency = rate currency`, e.g. `1 EUR = 1.03 USD`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateObservation {
    /// Quoted currency (numerator)
    pub currency: Currency,

    /// Currency the rate is expressed against (denominator)
    pub base_currency: Currency,

    /// Observation date, `YYYY-MM-DD`
    pub date: DateLabel,

    /// Units of `currency` per one unit of `base_currency`
    pub rate: f64,
}

impl RateObservation {
    pub fn new(
        currency: impl Into<Currency>,
        base_currency: impl Into<Currency>,
        date: impl Into<DateLabel>,
        rate: f64,
    ) -> Self {
        Self {
            currency: currency.into(),
            base_currency: base_currency.into(),
            date: date.into(),
            rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let observation = RateObservation::new("USD", "EUR", "2024-01-02", 1.0956);
        let json = serde_json::to_value(&observation).unwrap();
        assert_eq!(json["baseCurrency"], "EUR");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["date"], "2024-01-02");
        assert_eq!(json["rate"], 1.0956);
    }
}
