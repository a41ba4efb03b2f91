//! SDMX-JSON decoding into flat rate observations.
//!
//! Structural defects (a missing dimension declaration or values list)
//! fail the whole decode. Per-datum anomalies (a short series key, an
//! out-of-range index, a null value) only drop that series or
//! observation: gaps for weekends and holidays are normal.

use std::collections::HashMap;

use log::debug;

use super::document::{Dimension, DimensionValue, SdmxDocument};
use super::series_key::SeriesKey;
use crate::errors::{FxRatesError, Result};
use crate::models::RateObservation;

pub const CURRENCY_DIMENSION: &str = "CURRENCY";
pub const DENOMINATOR_DIMENSION: &str = "CURRENCY_DENOM";
pub const TIME_DIMENSION: &str = "TIME_PERIOD";

/// A series dimension resolved to its key position and coded values.
struct SeriesAxis<'a> {
    position: usize,
    values: &'a [DimensionValue],
}

impl<'a> SeriesAxis<'a> {
    fn label(&self, key: &SeriesKey) -> Option<&'a str> {
        let index = key.index_at(self.position)?;
        self.values.get(index)?.id.as_deref()
    }
}

/// Parses raw response text into a document.
///
/// Pure deserialization, no semantic checks.
pub fn parse_text(raw: &str) -> Result<SdmxDocument> {
    serde_json::from_str(raw).map_err(|e| match e.classify() {
        serde_json::error::Category::Data => FxRatesError::Parse {
            message: format!("Unexpected SDMX document shape: {}", e),
            source: Some(e),
        },
        _ => FxRatesError::invalid_json(e),
    })
}

/// Parses and decodes in one step.
pub fn decode_text(raw: &str) -> Result<Vec<RateObservation>> {
    decode(&parse_text(raw)?)
}

/// Flattens a document into observations, in encounter order.
///
/// Returns an empty vector for a well-formed document without data sets.
pub fn decode(document: &SdmxDocument) -> Result<Vec<RateObservation>> {
    let dimensions = document
        .structure
        .as_ref()
        .and_then(|structure| structure.dimensions.as_ref());

    let (series_dimensions, observation_dimensions) = match dimensions {
        Some(d) => match (d.series.as_deref(), d.observation.as_deref()) {
            (Some(series), Some(observation)) => (series, observation),
            _ => {
                return Err(FxRatesError::parse(
                    "Missing structure.dimensions.series or structure.dimensions.observation",
                ))
            }
        },
        None => return Err(FxRatesError::parse("Missing structure.dimensions")),
    };

    let positions = dimension_positions(series_dimensions);
    let currency_axis = series_axis(series_dimensions, &positions, CURRENCY_DIMENSION)?;
    let denominator_axis = series_axis(series_dimensions, &positions, DENOMINATOR_DIMENSION)?;
    let time_periods = time_axis(observation_dimensions)?;

    let data_sets = match document.data_sets.as_deref() {
        Some(data_sets) if !data_sets.is_empty() => data_sets,
        _ => {
            debug!("SDMX document has no data sets");
            return Ok(Vec::new());
        }
    };

    let mut observations = Vec::new();
    let mut skipped_series = 0usize;
    let mut skipped_observations = 0usize;

    for data_set in data_sets {
        let Some(series_map) = data_set.series.as_ref() else {
            continue;
        };

        for (raw_key, series) in series_map.iter() {
            let key = SeriesKey::from(raw_key);
            let labels = currency_axis
                .label(&key)
                .zip(denominator_axis.label(&key));
            let Some((currency, denominator)) = labels else {
                debug!("Skipping series with unresolvable key {:?}", raw_key);
                skipped_series += 1;
                continue;
            };

            let Some(series_observations) = series.observations.as_ref() else {
                continue;
            };

            for (time_index, tuple) in series_observations.iter() {
                let date = time_index
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| time_periods.get(i))
                    .and_then(|value| value.id.as_deref());
                let rate = tuple.as_deref().and_then(observation_value);

                match (date, rate) {
                    (Some(date), Some(rate)) => {
                        observations.push(RateObservation::new(currency, denominator, date, rate))
                    }
                    _ => skipped_observations += 1,
                }
            }
        }
    }

    debug!(
        "Decoded {} observations (skipped {} series, {} observations)",
        observations.len(),
        skipped_series,
        skipped_observations
    );

    Ok(observations)
}

/// Dimension id -> position in the declaration list. First declaration wins.
fn dimension_positions(dimensions: &[Dimension]) -> HashMap<&str, usize> {
    let mut positions = HashMap::with_capacity(dimensions.len());
    for (position, dimension) in dimensions.iter().enumerate() {
        if let Some(id) = dimension.id.as_deref() {
            positions.entry(id).or_insert(position);
        }
    }
    positions
}

fn series_axis<'a>(
    dimensions: &'a [Dimension],
    positions: &HashMap<&str, usize>,
    id: &str,
) -> Result<SeriesAxis<'a>> {
    let position = *positions
        .get(id)
        .ok_or_else(|| FxRatesError::parse(format!("Missing {} dimension", id)))?;
    let values = dimensions[position].values.as_deref().ok_or_else(|| {
        FxRatesError::parse(format!("Missing dimension values for {}", id))
    })?;
    Ok(SeriesAxis { position, values })
}

fn time_axis(dimensions: &[Dimension]) -> Result<&[DimensionValue]> {
    let dimension = dimensions
        .iter()
        .find(|d| d.id.as_deref() == Some(TIME_DIMENSION))
        .ok_or_else(|| FxRatesError::parse(format!("Missing {} dimension", TIME_DIMENSION)))?;
    dimension.values.as_deref().ok_or_else(|| {
        FxRatesError::parse(format!("Missing dimension values for {}", TIME_DIMENSION))
    })
}

/// First tuple element as a usable rate.
///
/// Null, non-numeric, non-finite and non-positive values yield `None`.
fn observation_value(tuple: &[serde_json::Value]) -> Option<f64> {
    let value = match tuple.first()? {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (value.is_finite() && value > 0.0).then_some(value)
}
