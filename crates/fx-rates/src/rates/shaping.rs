//! Reshaping of flat observations into the public result types.
//!
//! All functions here are pure; grouping goes through `BTreeMap`, so the
//! output never depends on the order the decoder produced.

use std::collections::BTreeMap;

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    Conversion, CurrencyRates, DateLabel, MultiCurrencyRates, RateObservation, RateResult,
};

/// Base reported on a result.
///
/// The first observation's denominator wins; the resolved query base is
/// the fallback when there are no observations.
pub fn reported_base(observations: &[RateObservation], resolved_base: &str) -> String {
    observations
        .first()
        .map(|o| o.base_currency.clone())
        .unwrap_or_else(|| resolved_base.to_string())
}

/// Groups `currency`'s observations into `date -> rate`. A later
/// duplicate date wins.
pub fn single_currency(
    observations: &[RateObservation],
    currency: &str,
    resolved_base: &str,
) -> CurrencyRates {
    let rates = observations
        .iter()
        .filter(|o| o.currency == currency)
        .map(|o| (o.date.clone(), o.rate))
        .collect::<BTreeMap<_, _>>();

    CurrencyRates {
        base: reported_base(observations, resolved_base),
        currency: currency.to_string(),
        rates,
    }
}

/// Groups observations into `date -> (currency -> rate)`.
pub fn multi_currency(
    observations: &[RateObservation],
    currencies: &[String],
    resolved_base: &str,
) -> MultiCurrencyRates {
    let mut rates: BTreeMap<DateLabel, BTreeMap<String, f64>> = BTreeMap::new();
    for observation in observations {
        rates
            .entry(observation.date.clone())
            .or_default()
            .insert(observation.currency.clone(), observation.rate);
    }

    MultiCurrencyRates {
        base: reported_base(observations, resolved_base),
        currencies: currencies.to_vec(),
        rates,
    }
}

/// Picks the latest date of a series.
///
/// `YYYY-MM-DD` labels sort chronologically, so the greatest key is the
/// most recent. `requested_date` is kept only when it differs.
pub fn most_recent(series: &CurrencyRates, requested_date: &str) -> Option<RateResult> {
    let (date, rate) = series.rates.iter().next_back()?;
    Some(RateResult {
        base: series.base.clone(),
        currency: series.currency.clone(),
        date: date.clone(),
        rate: *rate,
        requested_date: (date != requested_date).then(|| requested_date.to_string()),
    })
}

/// Converts `amount` at `rate`.
pub fn convert(amount: f64, rate: &RateResult) -> Conversion {
    Conversion {
        base: rate.base.clone(),
        currency: rate.currency.clone(),
        date: rate.date.clone(),
        rate: rate.rate,
        original_amount: amount,
        amount: round_to_cents(amount * rate.rate),
        requested_date: rate.requested_date.clone(),
    }
}

/// `round(value * 100) / 100`, half away from zero.
///
/// The product is taken in `f64` and rounded on its exact binary value, so
/// `1.005` (stored just below the midpoint) rounds down to `1.0`.
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    Decimal::from_f64_retain(scaled)
        .map(|d| d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|cents| cents.to_f64())
        .map(|cents| cents / 100.0)
        .unwrap_or_else(|| scaled.round() / 100.0)
}
