//! The cell accessor capability consumed by the rasterizer.
//!
//! Anything that can read and write a color at an integer coordinate can be
//! drawn into. Coordinates are signed so reflections computed around a center
//! near the origin reach the grid unchanged; what happens to a coordinate
//! outside the grid is decided by the implementation, never by the caller.

use crate::color::Rgb;
use crate::error::Result;

/// A 2D array of colored cells addressed by integer coordinates.
///
/// Implementations own their bounds policy: an out-of-range access may be
/// clipped, wrapped, or reported as an error.
pub trait Grid {
    /// Read the current color of the cell at `(x, y)`.
    fn get_cell(&self, x: i64, y: i64) -> Result<Rgb>;

    /// Write `color` to the cell at `(x, y)`.
    fn set_cell(&mut self, x: i64, y: i64, color: Rgb) -> Result<()>;
}

impl<G: Grid + ?Sized> Grid for &mut G {
    #[inline]
    fn get_cell(&self, x: i64, y: i64) -> Result<Rgb> {
        (**self).get_cell(x, y)
    }

    #[inline]
    fn set_cell(&mut self, x: i64, y: i64, color: Rgb) -> Result<()> {
        (**self).set_cell(x, y, color)
    }
}

impl<G: Grid + ?Sized> Grid for Box<G> {
    #[inline]
    fn get_cell(&self, x: i64, y: i64) -> Result<Rgb> {
        (**self).get_cell(x, y)
    }

    #[inline]
    fn set_cell(&mut self, x: i64, y: i64, color: Rgb) -> Result<()> {
        (**self).set_cell(x, y, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Sparse grid with no bounds at all.
    #[derive(Default)]
    struct SparseGrid {
        cells: HashMap<(i64, i64), Rgb>,
    }

    impl Grid for SparseGrid {
        fn get_cell(&self, x: i64, y: i64) -> Result<Rgb> {
            Ok(self.cells.get(&(x, y)).copied().unwrap_or_default())
        }

        fn set_cell(&mut self, x: i64, y: i64, color: Rgb) -> Result<()> {
            self.cells.insert((x, y), color);
            Ok(())
        }
    }

    fn paint<G: Grid>(mut grid: G) -> Result<()> {
        grid.set_cell(-3, 7, Rgb::GREEN)
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut grid = SparseGrid::default();
        paint(&mut grid).unwrap();
        assert_eq!(grid.get_cell(-3, 7).unwrap(), Rgb::GREEN);
    }

    #[test]
    fn test_boxed_dyn_grid() {
        let mut grid: Box<dyn Grid> = Box::new(SparseGrid::default());
        grid.set_cell(1, 2, Rgb::BLUE).unwrap();
        assert_eq!(grid.get_cell(1, 2).unwrap(), Rgb::BLUE);
        assert_eq!(grid.get_cell(2, 1).unwrap(), Rgb::BLACK);
    }
}
