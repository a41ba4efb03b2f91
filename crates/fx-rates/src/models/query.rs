use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Currency, DateLabel};
use crate::transport::CancellationSignal;

/// Sampling frequency of the requested series.
///
/// Maps onto the `FREQ` dimension of the series key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    /// Single-letter SDMX code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Daily => "D",
            Self::Weekly => "W",
            Self::Monthly => "M",
            Self::Quarterly => "Q",
            Self::Annual => "A",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A request for reference rates.
///
/// Dates are kept as the caller wrote them; the validator checks their
/// syntax before anything is sent.
#[derive(Clone, Debug, Default)]
pub struct RateQuery {
    /// Currencies to fetch, in caller order
    pub currencies: Vec<Currency>,

    /// First day of the range, `YYYY-MM-DD`
    pub start_date: DateLabel,

    /// Last day of the range; open-ended when absent
    pub end_date: Option<DateLabel>,

    /// Denominator; the client default applies when absent
    pub base_currency: Option<Currency>,

    /// Series frequency; daily when absent
    pub frequency: Option<Frequency>,

    /// Aborts the in-flight request when fired
    pub signal: Option<CancellationSignal>,
}

impl RateQuery {
    pub fn new<I, S>(currencies: I, start_date: impl Into<DateLabel>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Currency>,
    {
        Self {
            currencies: currencies.into_iter().map(Into::into).collect(),
            start_date: start_date.into(),
            ..Self::default()
        }
    }

    pub fn end_date(mut self, end_date: impl Into<DateLabel>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn base_currency(mut self, base_currency: impl Into<Currency>) -> Self {
        self.base_currency = Some(base_currency.into());
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn signal(mut self, signal: CancellationSignal) -> Self {
        self.signal = Some(signal);
        self
    }
}
