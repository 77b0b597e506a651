//! YAML chart configuration.
//!
//! Every field is optional; anything left out falls back to the reference
//! garden at 500×500.
//!
//! ```yaml
//! version: 1
//! title: Cottage Garden
//! width: 600
//! height: 600
//! seasons:
//!   - name: Wet
//!     color: "#3366cc"
//!     months: [November, December]
//! plants:
//!   November: [Salvia]
//!   December: [Camellia, Hellebore]
//! season_label_offsets:
//!   Wet: [0, -6]
//! ```

use crate::calendar::{BloomCalendar, Season};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::plots::{SunburstChart, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One season entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Season name.
    pub name: String,

    /// Hex color, e.g. `"#e49b0f"`.
    pub color: String,

    /// Months in ring order.
    pub months: Vec<String>,
}

/// Chart configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Title above the rings.
    #[serde(default = "default_title")]
    pub title: String,

    /// Chart width in pixels.
    #[serde(default = "default_size")]
    pub width: u32,

    /// Chart height in pixels, not counting the detail panel.
    #[serde(default = "default_size")]
    pub height: u32,

    /// Seasons in ring order.
    #[serde(default = "default_seasons")]
    pub seasons: Vec<SeasonConfig>,

    /// Plants blooming in each month.
    #[serde(default = "default_plants")]
    pub plants: BTreeMap<String, Vec<String>>,

    /// Per-season label nudges `[dx, dy]` in reference pixels.
    #[serde(default)]
    pub season_label_offsets: BTreeMap<String, [f32; 2]>,
}

fn default_version() -> u32 {
    1
}
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_size() -> u32 {
    500
}
fn default_seasons() -> Vec<SeasonConfig> {
    BloomCalendar::garden()
        .seasons()
        .iter()
        .map(|s| SeasonConfig {
            name: s.name().to_string(),
            color: s.color().to_hex(),
            months: s.months().to_vec(),
        })
        .collect()
}
fn default_plants() -> BTreeMap<String, Vec<String>> {
    BloomCalendar::garden().plant_table().clone()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            title: default_title(),
            width: default_size(),
            height: default_size(),
            seasons: default_seasons(),
            plants: default_plants(),
            season_label_offsets: BTreeMap::new(),
        }
    }
}

impl ChartConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading chart config");
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using default chart config");
            Self::default()
        })
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Validated season and plant tables.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad color or inconsistent tables.
    pub fn calendar(&self) -> Result<BloomCalendar> {
        let seasons = self
            .seasons
            .iter()
            .map(|s| -> Result<Season> {
                Ok(Season::new(&s.name, Rgba::from_hex(&s.color)?, &s.months))
            })
            .collect::<Result<Vec<_>>>()?;
        BloomCalendar::new(seasons, self.plants.clone())
    }

    /// Build the chart this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables, dimensions or label offsets are invalid.
    pub fn into_chart(self) -> Result<SunburstChart> {
        let mut chart = SunburstChart::new()
            .calendar(self.calendar()?)
            .dimensions(self.width, self.height)
            .title(self.title);
        for (season, [dx, dy]) in self.season_label_offsets {
            chart = chart.season_label_offset(season, dx, dy);
        }
        chart.build()
    }
}
