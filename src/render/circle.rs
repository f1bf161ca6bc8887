//! Anti-aliased filled circle rasterization.
//!
//! Only one eighth of the disc is scanned: the 45° wedge `0 <= j <= i < radius`.
//! Every wedge sample is written to its eight reflections around the center.
//! Samples at least one cell inside the radius are painted solid, samples in
//! the outer one-cell shell are blended into the existing cell color in
//! proportion to how far inside the radius they sit.

use crate::color::Rgb;
use crate::error::Result;
use crate::grid::Grid;

/// Classification of a wedge sample against the circle radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coverage {
    /// At least one cell inside the radius: painted with the fill color.
    Solid,
    /// In the boundary shell; carries the blend weight, strictly within `(0, 1)`.
    Edge(f64),
    /// On or beyond the radius: left untouched.
    Outside,
}

impl Coverage {
    /// Classify a sample at distance `dist` from the center.
    #[must_use]
    pub fn classify(dist: f64, radius: f64) -> Self {
        if dist <= radius - 1.0 {
            Self::Solid
        } else if dist < radius {
            Self::Edge(edge_coverage(dist, radius))
        } else {
            Self::Outside
        }
    }
}

/// Euclidean distance of wedge sample `(i, j)` from the wedge origin.
#[inline]
#[must_use]
pub fn wedge_distance(i: i64, j: i64) -> f64 {
    let (i, j) = (i as f64, j as f64);
    (i * i + j * j).sqrt()
}

/// Blend weight for a boundary sample: 1 at `radius - 1`, 0 at `radius`.
#[inline]
#[must_use]
pub fn edge_coverage(dist: f64, radius: f64) -> f64 {
    1.0 - (dist - radius + 1.0)
}

/// Draw an anti-aliased filled circle into a grid.
///
/// The wedge index `i` runs over every integer strictly below `radius` and
/// `j` over `0..=i`. A radius that is zero, negative or not finite draws
/// nothing.
///
/// Reflections are handed to the grid as `(center_y ± j, center_x ± i)` and
/// `(center_y ± i, center_x ± j)`: the grid's first coordinate is derived
/// from `center_y`. Cells on the axes and diagonals appear twice among the
/// eight reflections and are visited twice; a boundary cell there is blended
/// twice.
///
/// Coordinates are never checked here. Whatever the grid does with a
/// coordinate outside its bounds (clip, wrap, fail) is what happens; the
/// first grid error aborts the draw and is returned.
///
/// # Example
///
/// ```
/// use led_raster::prelude::*;
///
/// let mut matrix = LedMatrix::new(128, 128).unwrap();
/// fill_circle(&mut matrix, 64, 64, 5.0, Rgb::RED).unwrap();
///
/// assert_eq!(matrix.get(64, 64), Some(Rgb::RED));
/// assert_eq!(matrix.get(64, 68), Some(Rgb::RED));
/// assert_eq!(matrix.get(64, 69), Some(Rgb::BLACK));
/// ```
pub fn fill_circle<G: Grid + ?Sized>(
    grid: &mut G,
    center_x: u32,
    center_y: u32,
    radius: f64,
    color: Rgb,
) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        log::debug!("fill_circle: skipping degenerate radius {radius}");
        return Ok(());
    }

    let cx = i64::from(center_x);
    let cy = i64::from(center_y);

    // Smallest integer not below the radius: i < radius <=> i < extent.
    let extent = radius.ceil() as i64;

    let mut solid = 0usize;
    let mut blended = 0usize;

    for i in 0..extent {
        for j in 0..=i {
            match Coverage::classify(wedge_distance(i, j), radius) {
                Coverage::Solid => {
                    for (x, y) in solid_reflections(cx, cy, i, j) {
                        grid.set_cell(x, y, color)?;
                    }
                    solid += 8;
                }
                Coverage::Edge(coverage) => {
                    for (x, y) in edge_reflections(cx, cy, i, j) {
                        let current = grid.get_cell(x, y)?;
                        grid.set_cell(x, y, color.blend(current, coverage))?;
                    }
                    blended += 8;
                }
                Coverage::Outside => {}
            }
        }
    }

    log::trace!(
        "fill_circle: center=({center_x}, {center_y}) radius={radius} solid={solid} blended={blended}"
    );

    Ok(())
}

#[inline]
fn solid_reflections(cx: i64, cy: i64, i: i64, j: i64) -> [(i64, i64); 8] {
    [
        (cy - j, cx + i),
        (cy + j, cx + i),
        (cy + j, cx - i),
        (cy - j, cx - i),
        (cy - i, cx - j),
        (cy - i, cx + j),
        (cy + i, cx + j),
        (cy + i, cx - j),
    ]
}

#[inline]
fn edge_reflections(cx: i64, cy: i64, i: i64, j: i64) -> [(i64, i64); 8] {
    [
        (cy - j, cx + i),
        (cy + j, cx + i),
        (cy + j, cx - i),
        (cy - j, cx - i),
        (cy - i, cx + j),
        (cy + i, cx + j),
        (cy + i, cx - j),
        (cy - i, cx - j),
    ]
}

/// A filled circle to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center x coordinate.
    pub center_x: u32,
    /// Center y coordinate.
    pub center_y: u32,
    /// Radius in cells.
    pub radius: f64,
    /// Fill color.
    pub color: Rgb,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center_x: u32, center_y: u32, radius: f64, color: Rgb) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            color,
        }
    }
}

/// Trait for shapes that can be drawn into a [`Grid`].
pub trait Drawable {
    /// Draw this shape into the grid.
    fn draw<G: Grid + ?Sized>(&self, grid: &mut G) -> Result<()>;
}

impl Drawable for Circle {
    fn draw<G: Grid + ?Sized>(&self, grid: &mut G) -> Result<()> {
        fill_circle(grid, self.center_x, self.center_y, self.radius, self.color)
    }
}

// ============================================================================
// Tests
// ============================================================================
