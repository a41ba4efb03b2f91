//! FX rates models
//!
//! This module contains the core data types:
//! - `types` - Type aliases and the native currency constant
//! - `observation` - Flat decoded rate point (RateObservation)
//! - `query` - Caller request (RateQuery, Frequency)
//! - `rates` - Result shapes (CurrencyRates, MultiCurrencyRates, RateResult, Conversion)

mod observation;
mod query;
mod rates;
mod types;

pub use observation::RateObservation;
pub use query::{Frequency, RateQuery};
pub use rates::{Conversion, CurrencyRates, MultiCurrencyRates, RateResult};
pub use types::{Currency, DateLabel, NATIVE_CURRENCY};
