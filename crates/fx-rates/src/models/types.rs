/// ISO 4217 currency code, e.g. "USD".
pub type Currency = String;

/// Calendar date label in `YYYY-MM-DD` form, as the API returns it.
pub type DateLabel = String;

/// The API's own denominator. Every raw rate is quoted against it.
pub const NATIVE_CURRENCY: &str = "EUR";
