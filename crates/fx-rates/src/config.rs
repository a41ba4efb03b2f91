use std::time::Duration;

use log::warn;

use crate::models::NATIVE_CURRENCY;
use crate::request::{validator::is_currency_code, DEFAULT_BASE_URL};
use crate::transport::DEFAULT_TIMEOUT;

/// Default trailing window, in calendar days, searched for the most recent rate.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 10;

const DEFAULT_USER_AGENT: &str = concat!("sdmx-fx-rates/", env!("CARGO_PKG_VERSION"));

/// Client settings.
///
/// `from_env` reads `FX_RATES_BASE_URL`, `FX_RATES_TIMEOUT_SECS`,
/// `FX_RATES_BASE_CURRENCY` and `FX_RATES_LOOKBACK_DAYS`. Unset variables
/// keep their defaults; unparseable ones are logged and ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Base applied to queries that do not name one.
    pub base_currency: String,
    pub lookback_days: u32,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            base_currency: NATIVE_CURRENCY.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base_url) = lookup("FX_RATES_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup("FX_RATES_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid FX_RATES_TIMEOUT_SECS={:?}", raw),
            }
        }

        if let Some(raw) = lookup("FX_RATES_BASE_CURRENCY") {
            let code = raw.trim().to_ascii_uppercase();
            if is_currency_code(&code) {
                config.base_currency = code;
            } else {
                warn!("Ignoring invalid FX_RATES_BASE_CURRENCY={:?}", raw);
            }
        }

        if let Some(raw) = lookup("FX_RATES_LOOKBACK_DAYS") {
            match raw.trim().parse::<u32>() {
                Ok(days) => config.lookback_days = days,
                Err(_) => warn!("Ignoring invalid FX_RATES_LOOKBACK_DAYS={:?}", raw),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_base_currency(mut self, base_currency: impl Into<String>) -> Self {
        self.base_currency = base_currency.into();
        self
    }

    pub fn with_lookback_days(mut self, lookback_days: u32) -> Self {
        self.lookback_days = lookback_days;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
