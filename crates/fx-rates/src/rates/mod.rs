//! Rate arithmetic and result shaping.
//!
//! - [`cross_rate`]: re-bases EUR-quoted observations onto another currency
//! - [`shaping`]: groups observations into the public result types

pub mod cross_rate;
pub mod shaping;

pub use cross_rate::adjust;
