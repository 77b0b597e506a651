//! High-level plot types.
//!
//! Provides ready-to-use visualization types with builder APIs.

mod sunburst;

pub use sunburst::{resting_fill, SunburstChart, DEFAULT_TITLE, MONTH_OPACITY};
