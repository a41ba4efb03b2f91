//! SDMX-JSON response handling.
//!
//! This module contains:
//! - [`SdmxDocument`] and its nested types, a partially-optional model of the payload
//! - [`SeriesKey`], the parsed composite series key
//! - [`decode`] / [`parse_text`], which turn the payload into [`RateObservation`]s
//!
//! [`RateObservation`]: crate::models::RateObservation

mod decoder;
mod document;
mod ordered_map;
mod series_key;

pub use decoder::{
    decode, decode_text, parse_text, CURRENCY_DIMENSION, DENOMINATOR_DIMENSION, TIME_DIMENSION,
};
pub use document::{DataSet, Dimension, DimensionValue, Dimensions, SdmxDocument, Series, Structure};
pub use ordered_map::OrderedMap;
pub use series_key::SeriesKey;
