//! # led-raster
//!
//! Anti-aliased circle rasterization for simulated RGB LED matrices.
//!
//! Drawing goes through the [`Grid`](grid::Grid) capability: anything that can
//! read and write a cell color at an integer coordinate. [`LedMatrix`](matrix::LedMatrix)
//! is the in-memory implementation, sized by [`MatrixConfig`](config::MatrixConfig)
//! and exportable as a PNG snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use led_raster::prelude::*;
//!
//! let mut matrix = LedMatrix::new(128, 128)?;
//! fill_circle(&mut matrix, 64, 64, 5.0, Rgb::RED)?;
//!
//! assert_eq!(matrix.get(64, 64), Some(Rgb::RED));
//! # Ok::<(), led_raster::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://crates.io/crates/log) facade and
//! never installs a logger.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// LED cell colors and coverage blending.
pub mod color;

/// The cell accessor capability drawn into.
pub mod grid;

/// In-memory LED matrix.
pub mod matrix;

/// Matrix configuration.
pub mod config;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for led-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use led_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::config::MatrixConfig;
    pub use crate::error::{Error, Result};
    pub use crate::grid::Grid;
    pub use crate::matrix::{EdgePolicy, LedMatrix};
    pub use crate::output::PngEncoder;
    pub use crate::render::{fill_circle, Circle, Drawable};
}
