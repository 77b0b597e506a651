//! Error types for bloom-sunburst operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering a blooming calendar.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or chart.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A season lists no months.
    #[error("Season {0} has no months")]
    EmptySeason(String),

    /// The same month appears in more than one season (or twice in one).
    #[error("Month {0} appears more than once in the season table")]
    DuplicateMonth(String),

    /// A month in the season table has no entry in the plant table.
    #[error("Month {0} has no plants listed")]
    MissingPlants(String),

    /// A season referenced by name does not exist.
    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    /// Configuration parse error.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number of the error (0 if unknown).
        line: usize,
        /// Error message.
        message: String,
    },

    /// Rendering error.
    #[error("Rendering error: {0}")]
    Rendering(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_missing_plants_names_month() {
        let err = Error::MissingPlants("July".to_string());
        assert_eq!(err.to_string(), "Month July has no plants listed");
    }

    #[test]
    fn test_config_parse_includes_line() {
        let err = Error::ConfigParse {
            line: 7,
            message: "bad".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }
}
