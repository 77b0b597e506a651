//! # Bloom-Sunburst
//!
//! Two-ring sunburst chart of a plant blooming calendar.
//!
//! The outer ring shows the seasons, the inner ring the months of each
//! season. Hovering a month highlights its arc and lists what blooms in it,
//! as a short preview in the middle of the rings and as a full list in a
//! panel below the chart. Output is SVG (with text) or an RGBA raster
//! composited with [trueno](https://crates.io/crates/trueno) and encoded as
//! PNG.
//!
//! ## Quick Start
//!
//! ```rust
//! use bloom_sunburst::prelude::*;
//!
//! let mut chart = SunburstChart::new().dimensions(500, 500).build()?;
//!
//! // The host forwards pointer events
//! chart.pointer_enter(7);
//! assert_eq!(chart.selected_month(), Some("July"));
//!
//! let svg = chart.to_svg();
//! assert!(svg.contains("July Blooming Plants:"));
//! # Ok::<(), bloom_sunburst::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): YAML chart configuration
//! - `wasm`: WebAssembly bindings for browser hosts

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and hex parsing.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles, ring wedges).
pub mod geometry;

// ============================================================================
// Chart Modules
// ============================================================================

/// Seasons, months and plant tables.
pub mod calendar;

/// Size-derived chart geometry.
pub mod layout;

/// Hover state machine and hit testing.
pub mod interaction;

/// Center overlay and detail panel content.
pub mod detail;

/// Render-ready scene graph.
pub mod scene;

/// High-level plot types.
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization.
pub mod render;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML chart configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chart operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use bloom_sunburst::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::calendar::{BloomCalendar, Month, Season};
    pub use crate::color::Rgba;
    #[cfg(feature = "config")]
    pub use crate::config::ChartConfig;
    pub use crate::detail::{CenterOverlay, DetailPanel};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::interaction::{HoverState, PointerEvent};
    pub use crate::layout::ChartLayout;
    pub use crate::plots::SunburstChart;
    pub use crate::scene::Scene;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
