//! Re-basing of native-currency observations onto another base.
//!
//! If 1 EUR = `r_c` units of C and 1 EUR = `r_b` units of B, then
//! 1 B = `r_c / r_b` units of C.

use std::collections::BTreeMap;

use log::debug;

use crate::models::{RateObservation, NATIVE_CURRENCY};

/// Recomputes EUR-based observations against `target_base`.
///
/// `observations` must include `target_base`'s own EUR rate for every date
/// that should survive; dates without it (or with a zero rate) are dropped.
/// The `target_base` rows themselves are never returned. When
/// `requested_currencies` contains EUR, a synthesized EUR row is appended
/// for every usable date, in date order.
pub fn adjust(
    observations: &[RateObservation],
    requested_currencies: &[String],
    target_base: &str,
) -> Vec<RateObservation> {
    let native_rates: BTreeMap<&str, f64> = observations
        .iter()
        .filter(|o| o.currency == target_base)
        .map(|o| (o.date.as_str(), o.rate))
        .collect();

    let mut adjusted: Vec<RateObservation> = observations
        .iter()
        .filter(|o| o.currency != target_base)
        .filter_map(|o| {
            let native = native_rates.get(o.date.as_str()).copied()?;
            if native == 0.0 {
                return None;
            }
            Some(RateObservation::new(
                o.currency.clone(),
                target_base,
                o.date.clone(),
                o.rate / native,
            ))
        })
        .collect();

    if requested_currencies.iter().any(|c| c == NATIVE_CURRENCY) {
        adjusted.extend(
            native_rates
                .iter()
                .filter(|(_, rate)| **rate != 0.0)
                .map(|(date, rate)| {
                    RateObservation::new(NATIVE_CURRENCY, target_base, *date, 1.0 / rate)
                }),
        );
    }

    debug!(
        "Adjusted {} observations to base {} ({} base-currency dates)",
        adjusted.len(),
        target_base,
        native_rates.len()
    );

    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur(currency: &str, date: &str, rate: f64) -> RateObservation {
        RateObservation::new(currency, "EUR", date, rate)
    }

    fn codes(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_cross_rate_and_synthesized_eur() {
        let observations = vec![eur("USD", "2024-03-01", 1.03), eur("GBP", "2024-03-01", 0.84)];

        let adjusted = adjust(&observations, &codes(&["GBP", "EUR"]), "USD");

        assert_eq!(
            adjusted,
            vec![
                RateObservation::new("GBP", "USD", "2024-03-01", 0.84 / 1.03),
                RateObservation::new("EUR", "USD", "2024-03-01", 1.0 / 1.03),
            ]
        );
    }

    #[test]
    fn test_eur_not_requested_is_not_synthesized() {
        let observations = vec![eur("USD", "2024-03-01", 1.03), eur("GBP", "2024-03-01", 0.84)];
        let adjusted = adjust(&observations, &codes(&["GBP"]), "USD");
        assert_eq!(adjusted.len(), 1);
        assert_eq!(adjusted[0].currency, "GBP");
        assert_eq!(adjusted[0].base_currency, "USD");
    }

    #[test]
    fn test_base_rows_are_never_emitted() {
        let observations = vec![eur("USD", "2024-03-01", 1.03)];
        let adjusted = adjust(&observations, &codes(&["JPY"]), "USD");
        assert!(adjusted.is_empty());
    }

    #[test]
    fn test_dates_without_base_rate_are_dropped() {
        let observations = vec![
            eur("USD", "2024-03-01", 1.03),
            eur("GBP", "2024-03-01", 0.84),
            eur("GBP", "2024-03-04", 0.85),
        ];
        let adjusted = adjust(&observations, &codes(&["GBP"]), "USD");
        assert_eq!(adjusted.len(), 1);
        assert_eq!(adjusted[0].date, "2024-03-01");
    }

    #[test]
    fn test_zero_base_rate_is_skipped() {
        let observations = vec![
            eur("USD", "2024-03-01", 0.0),
            eur("GBP", "2024-03-01", 0.84),
            eur("USD", "2024-03-04", 1.04),
            eur("GBP", "2024-03-04", 0.85),
        ];
        let adjusted = adjust(&observations, &codes(&["GBP", "EUR"]), "USD");

        assert!(adjusted.iter().all(|o| o.date == "2024-03-04"));
        assert!(adjusted.iter().all(|o| o.rate.is_finite()));
        assert_eq!(adjusted.len(), 2);
    }

    #[test]
    fn test_synthesized_rows_in_date_order() {
        let observations = vec![
            eur("CHF", "2024-03-05", 0.95),
            eur("CHF", "2024-03-04", 0.96),
        ];
        let adjusted = adjust(&observations, &codes(&["EUR"]), "CHF");
        let dates: Vec<&str> = adjusted.iter().map(|o| o.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-04", "2024-03-05"]);
        assert!(adjusted.iter().all(|o| o.currency == "EUR"));
    }

    #[test]
    fn test_round_trip_back_to_eur() {
        let original = vec![
            eur("USD", "2024-03-01", 1.0835),
            eur("JPY", "2024-03-01", 162.47),
            eur("GBP", "2024-03-01", 0.85715),
            eur("USD", "2024-03-04", 1.0854),
            eur("JPY", "2024-03-04", 162.69),
            eur("GBP", "2024-03-04", 0.85523),
        ];

        let to_jpy = adjust(&original, &codes(&["USD", "GBP", "EUR"]), "JPY");

        // The synthesized EUR series plays the native role on the way back
        let back = adjust(&to_jpy, &codes(&["USD", "GBP", "JPY"]), "EUR");

        for expected in original.iter().filter(|o| o.currency != "JPY") {
            let actual = back
                .iter()
                .find(|o| o.currency == expected.currency && o.date == expected.date)
                .unwrap();
            assert!((actual.rate - expected.rate).abs() < 1e-12);
        }
    }
}
