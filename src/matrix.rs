//! In-memory LED matrix.
//!
//! Stores one RGB triple per LED in row-major order and implements [`Grid`]
//! so it can be drawn into directly. Uses trueno for SIMD-accelerated
//! reductions where applicable.

use crate::color::Rgb;
use crate::config::MatrixConfig;
use crate::error::{Error, Result};
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use trueno::Vector;

/// Bytes per LED cell.
const CELL_BYTES: usize = 3;

/// How a [`LedMatrix`] treats [`Grid`] coordinates outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Writes are dropped and reads return black.
    #[default]
    Clip,
    /// Coordinates wrap around to the opposite edge.
    Wrap,
    /// Accesses fail with [`Error::OutOfBounds`].
    Strict,
}

/// Fixed-size matrix of RGB LED cells.
///
/// # Example
///
/// ```
/// use led_raster::color::Rgb;
/// use led_raster::matrix::LedMatrix;
///
/// let mut matrix = LedMatrix::new(128, 128).unwrap();
/// matrix.set(3, 4, Rgb::RED);
/// assert_eq!(matrix.get(3, 4), Some(Rgb::RED));
/// assert_eq!(matrix.get(128, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedMatrix {
    /// Width in cells.
    width: u32,
    /// Height in cells.
    height: u32,
    /// RGB cells in row-major order, 3 bytes each.
    cells: Vec<u8>,
    /// Out-of-range behavior for [`Grid`] access.
    edge_policy: EdgePolicy,
}

impl LedMatrix {
    /// Create a new all-black matrix with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero, or if the cell buffer
    /// size does not fit in `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = (width as usize)
            .checked_mul(height as usize)
            .and_then(|cells| cells.checked_mul(CELL_BYTES))
            .filter(|&size| size > 0)
            .ok_or(Error::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![0; size],
            edge_policy: EdgePolicy::default(),
        })
    }

    /// Create a matrix sized and configured from a [`MatrixConfig`].
    pub fn from_config(config: &MatrixConfig) -> Result<Self> {
        Ok(Self::new(config.width, config.height)?.with_edge_policy(config.edge_policy))
    }

    /// Set the out-of-range policy used by the [`Grid`] implementation.
    #[must_use]
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Get the out-of-range policy.
    #[must_use]
    pub const fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Get the width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw cell data (`[R, G, B]` per cell, row-major).
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Get one row of cells as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let row_bytes = (self.width as usize) * CELL_BYTES;
        let start = (y as usize) * row_bytes;
        Some(&self.cells[start..start + row_bytes])
    }

    /// Set every cell to a solid color.
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_array();
        for chunk in self.cells.chunks_exact_mut(CELL_BYTES) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Get the color at a cell.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.cell_index(x, y);
        Some(Rgb::new(
            self.cells[idx],
            self.cells[idx + 1],
            self.cells[idx + 2],
        ))
    }

    /// Set the color at a cell.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.cell_index(x, y);
        self.cells[idx..idx + CELL_BYTES].copy_from_slice(&color.to_array());
    }

    /// Count cells that are not black.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells
            .chunks_exact(CELL_BYTES)
            .filter(|c| c.iter().any(|&v| v != 0))
            .count()
    }

    /// Get luminance statistics using SIMD-accelerated reduction.
    ///
    /// Returns (min_luminance, max_luminance, avg_luminance) on the 0-255
    /// scale, weighting channels by ITU-R BT.709.
    #[must_use]
    pub fn luminance_stats(&self) -> (f32, f32, f32) {
        let luminances: Vec<f32> = self
            .cells
            .chunks_exact(CELL_BYTES)
            .map(|c| {
                0.2126 * f32::from(c[0]) + 0.7152 * f32::from(c[1]) + 0.0722 * f32::from(c[2])
            })
            .collect();

        let vec = Vector::from_vec(luminances);

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(0.0);
        let mean = vec.mean().unwrap_or(0.0);

        (min, max, mean)
    }

    /// Expand the matrix to tightly packed RGBA pixels, each cell drawn as a
    /// `zoom × zoom` opaque square.
    ///
    /// A zoom of 0 is treated as 1.
    #[must_use]
    pub fn to_rgba_pixels(&self, zoom: u32) -> Vec<u8> {
        let zoom = zoom.max(1) as usize;
        let width = self.width as usize;
        let out_row_bytes = width * zoom * 4;

        let mut pixels = Vec::with_capacity(out_row_bytes * (self.height as usize) * zoom);
        let mut scanline = Vec::with_capacity(out_row_bytes);

        for y in 0..self.height {
            scanline.clear();
            if let Some(row) = self.row(y) {
                for cell in row.chunks_exact(CELL_BYTES) {
                    for _ in 0..zoom {
                        scanline.extend_from_slice(&[cell[0], cell[1], cell[2], 255]);
                    }
                }
            }
            for _ in 0..zoom {
                pixels.extend_from_slice(&scanline);
            }
        }

        pixels
    }

    /// Map a signed coordinate onto the matrix according to the edge policy.
    ///
    /// `Ok(None)` means the access should be ignored.
    fn resolve(&self, x: i64, y: i64) -> Result<Option<(u32, u32)>> {
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let in_bounds = (0..w).contains(&x) && (0..h).contains(&y);

        match self.edge_policy {
            _ if in_bounds => Ok(Some((x as u32, y as u32))),
            EdgePolicy::Clip => Ok(None),
            EdgePolicy::Wrap => Ok(Some((x.rem_euclid(w) as u32, y.rem_euclid(h) as u32))),
            EdgePolicy::Strict => Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Calculate the byte index for a cell coordinate.
    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * CELL_BYTES
    }
}

impl Grid for LedMatrix {
    fn get_cell(&self, x: i64, y: i64) -> Result<Rgb> {
        Ok(self
            .resolve(x, y)?
            .and_then(|(x, y)| self.get(x, y))
            .unwrap_or(Rgb::BLACK))
    }

    fn set_cell(&mut self, x: i64, y: i64, color: Rgb) -> Result<()> {
        if let Some((x, y)) = self.resolve(x, y)? {
            self.set(x, y, color);
        }
        Ok(())
    }
}
