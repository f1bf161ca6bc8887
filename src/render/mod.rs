//! Rasterization into LED grids.
//!
//! # Algorithms
//!
//! - **Octant-symmetric filled circle**: scans one 45° wedge and mirrors each
//!   sample eight ways, with a one-cell anti-aliased rim blended by coverage.

mod circle;

pub use circle::{edge_coverage, fill_circle, wedge_distance, Circle, Coverage, Drawable};
