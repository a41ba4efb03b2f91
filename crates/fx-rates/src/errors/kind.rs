/// Discriminant for [`FxRatesError`](super::FxRatesError).
///
/// Lets callers branch on the failure category without matching on
/// variant payloads.
///
/// # Behavior Summary
///
/// | Kind | Raised before network? | Caused by upstream? |
/// |------|------------------------|---------------------|
/// | `Validation` | Yes | No |
/// | `Api` | No | Yes (non-success HTTP status) |
/// | `Network` | No | Transport, timeout or cancellation |
/// | `Parse` | No | Yes (contract violation) |
/// | `NoData` | No | No (expected for weekends and holidays) |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The caller-supplied query was malformed.
    Validation,

    /// The upstream API answered with a non-success HTTP status.
    Api,

    /// The request never produced a response: transport failure,
    /// timeout, or explicit cancellation.
    Network,

    /// The body was not JSON, or was JSON that violates the SDMX
    /// structure this client depends on.
    Parse,

    /// The response was well-formed but held no usable observations.
    NoData,
}

impl ErrorKind {
    /// Stable lowercase name, suitable for log fields and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Api => "api",
            Self::Network => "network",
            Self::Parse => "parse",
            Self::NoData => "no_data",
        }
    }
}
