//! Request URL construction for the `EXR` dataflow.
//!
//! Series key layout: `FREQ.CURRENCY.CURRENCY_DENOM.EXR_TYPE.EXR_SUFFIX`,
//! with several currencies joined by `+`.

use urlencoding::encode;

use crate::models::{Frequency, RateQuery, NATIVE_CURRENCY};

pub const DEFAULT_BASE_URL: &str = "https://data-api.ecb.europa.eu/service";

const DATAFLOW: &str = "EXR";
/// Foreign exchange reference rate, spot
const EXR_TYPE: &str = "SP00";
/// Average or standardised measure
const EXR_SUFFIX: &str = "A";

/// Builds the request URL for a query.
#[derive(Clone, Debug, Default)]
pub struct UrlBuilder;

impl UrlBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, query: &RateQuery, base_url: &str) -> String {
        let frequency = query.frequency.unwrap_or_default();
        let currencies = query
            .currencies
            .iter()
            .map(|c| encode(c).into_owned())
            .collect::<Vec<_>>()
            .join("+");
        let base = query.base_currency.as_deref().unwrap_or(NATIVE_CURRENCY);

        let mut url = format!(
            "{}/data/{}/{}",
            base_url.trim_end_matches('/'),
            DATAFLOW,
            series_key(frequency, &currencies, &encode(base)),
        );

        url.push_str(&format!("?startPeriod={}", encode(&query.start_date)));
        if let Some(end_date) = &query.end_date {
            url.push_str(&format!("&endPeriod={}", encode(end_date)));
        }
        url.push_str("&format=jsondata");
        url
    }
}

fn series_key(frequency: Frequency, currencies: &str, base: &str) -> String {
    format!(
        "{}.{}.{}.{}.{}",
        frequency.code(),
        currencies,
        base,
        EXR_TYPE,
        EXR_SUFFIX
    )
}
