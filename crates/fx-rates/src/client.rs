//! Query orchestration.
//!
//! [`FxRatesClient`] ties the pipeline together: resolve the base, validate,
//! build the URL, fetch, decode, re-base when needed, then shape the result.
//! Every call performs at most one request and keeps no state between calls.

use std::sync::Arc;

use log::{debug, info};

use crate::config::ClientConfig;
use crate::errors::{FxRatesError, Result};
use crate::models::{
    Conversion, Currency, CurrencyRates, MultiCurrencyRates, RateObservation, RateQuery,
    RateResult, NATIVE_CURRENCY,
};
use crate::rates::{adjust, shaping};
use crate::request::{date_math, QueryValidator, UrlBuilder};
use crate::sdmx::decode_text;
use crate::transport::{Fetcher, HttpFetcher};

/// Client for the reference rate API.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
///
/// # Example
///
/// ```ignore
/// use sdmx_fx_rates::{ClientConfig, FxRatesClient, RateQuery};
///
/// let client = FxRatesClient::new(ClientConfig::from_env());
/// let query = RateQuery::new(["USD", "GBP"], "2024-01-02").end_date("2024-01-05");
/// let rates = client.get_rates(&query).await?;
/// ```
pub struct FxRatesClient {
    config: ClientConfig,
    fetcher: Arc<dyn Fetcher>,
    validator: QueryValidator,
    url_builder: UrlBuilder,
}

impl FxRatesClient {
    pub fn new(config: ClientConfig) -> Self {
        let fetcher = Arc::new(HttpFetcher::with_user_agent(
            config.timeout,
            &config.user_agent,
        ));
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: ClientConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            config,
            fetcher,
            validator: QueryValidator::new(),
            url_builder: UrlBuilder::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns a copy of `query` with its base currency filled in.
    ///
    /// Precedence: the query's own base, then the client default. The
    /// base reported on shaped results may still come from the response.
    pub fn resolve_query(&self, query: &RateQuery) -> RateQuery {
        RateQuery {
            base_currency: Some(self.resolve_base(query)),
            ..query.clone()
        }
    }

    fn resolve_base(&self, query: &RateQuery) -> Currency {
        query
            .base_currency
            .clone()
            .unwrap_or_else(|| self.config.base_currency.clone())
    }

    /// Validates, fetches and decodes a query into flat observations.
    ///
    /// A non-EUR base is served by fetching the base's own EUR series next
    /// to the requested ones and re-basing locally.
    pub async fn fetch_and_parse(&self, query: &RateQuery) -> Result<Vec<RateObservation>> {
        let base = self.resolve_base(query);
        let query = RateQuery {
            base_currency: Some(base.clone()),
            ..query.clone()
        };
        self.validator.validate(&query)?;

        let needs_cross_rate = base != NATIVE_CURRENCY;
        let url = if needs_cross_rate {
            self.url_builder
                .build(&cross_rate_query(&query, &base), &self.config.base_url)
        } else {
            self.url_builder.build(&query, &self.config.base_url)
        };

        debug!(
            "Fetching {} against {} from {}",
            query.currencies.join(","),
            base,
            url
        );
        let body = self.fetcher.get(&url, query.signal.as_ref()).await?;
        if body.trim().is_empty() {
            return Err(no_data(&query));
        }

        let mut observations = decode_text(&body)?;
        if needs_cross_rate {
            observations = adjust(&observations, &query.currencies, &base);
        }

        if observations.is_empty() {
            return Err(no_data(&query));
        }

        debug!("Decoded {} observations", observations.len());
        Ok(observations)
    }

    /// Rates of a single currency keyed by date.
    pub async fn get_currency_rates(&self, query: &RateQuery) -> Result<CurrencyRates> {
        let [currency] = query.currencies.as_slice() else {
            return Err(FxRatesError::validation(format!(
                "Expected exactly one currency, got {}",
                query.currencies.len()
            )));
        };

        let observations = self.fetch_and_parse(query).await?;
        Ok(shaping::single_currency(
            &observations,
            currency,
            &self.resolve_base(query),
        ))
    }

    /// Rates of several currencies keyed by date, then currency.
    pub async fn get_rates(&self, query: &RateQuery) -> Result<MultiCurrencyRates> {
        let observations = self.fetch_and_parse(query).await?;
        Ok(shaping::multi_currency(
            &observations,
            &query.currencies,
            &self.resolve_base(query),
        ))
    }

    /// Most recent rate on or before `date`.
    ///
    /// Searches back `lookback_days` calendar days, so weekends and holidays
    /// resolve to the previous publication. The result carries
    /// `requested_date` when the rate is from an earlier day.
    pub async fn get_rate(&self, currency: &str, date: &str, base: Option<&str>) -> Result<RateResult> {
        let start_date = date_math::subtract_days(date, self.config.lookback_days)?;
        let mut query = RateQuery::new([currency], start_date).end_date(date);
        if let Some(base) = base {
            query = query.base_currency(base);
        }

        let series = self.get_currency_rates(&query).await?;
        shaping::most_recent(&series, date).ok_or_else(|| no_data(&query))
    }

    /// Most recent rate as of today (UTC).
    pub async fn get_latest_rate(&self, currency: &str, base: Option<&str>) -> Result<RateResult> {
        self.get_rate(currency, &date_math::today_utc(), base).await
    }

    /// Converts `amount` of the base currency into `currency`, rounded to cents.
    pub async fn convert(
        &self,
        amount: f64,
        currency: &str,
        date: &str,
        base: Option<&str>,
    ) -> Result<Conversion> {
        if !amount.is_finite() {
            return Err(FxRatesError::validation(format!(
                "Amount must be a finite number, got {}",
                amount
            )));
        }

        let rate = self.get_rate(currency, date, base).await?;
        let conversion = shaping::convert(amount, &rate);
        info!(
            "Converted {} {} to {} {} at {} ({})",
            amount, conversion.base, conversion.amount, conversion.currency, conversion.rate, conversion.date
        );
        Ok(conversion)
    }
}

/// EUR-denominated query that also carries `base`'s own series.
///
/// EUR itself is never fetched; its rows are synthesized during re-basing.
fn cross_rate_query(query: &RateQuery, base: &str) -> RateQuery {
    let mut currencies: Vec<Currency> = Vec::with_capacity(query.currencies.len() + 1);
    for currency in &query.currencies {
        if currency != NATIVE_CURRENCY && !currencies.contains(currency) {
            currencies.push(currency.clone());
        }
    }
    if !currencies.iter().any(|c| c == base) {
        currencies.push(base.to_string());
    }

    RateQuery {
        currencies,
        base_currency: Some(NATIVE_CURRENCY.to_string()),
        ..query.clone()
    }
}

fn no_data(query: &RateQuery) -> FxRatesError {
    FxRatesError::no_data(
        &query.currencies,
        query.start_date.clone(),
        query.end_date.clone(),
    )
}
