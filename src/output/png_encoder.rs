//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Each LED cell becomes a
//! `zoom × zoom` square, the way the simulator window shows the matrix.

use crate::error::{Error, Result};
use crate::matrix::LedMatrix;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Largest image edge, in pixels, the encoder will produce.
pub const MAX_IMAGE_EDGE: u32 = 16_384;

/// PNG encoder for LED matrix snapshots.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a matrix snapshot to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(matrix: &LedMatrix, zoom: u32, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(matrix, zoom, BufWriter::new(file))
    }

    /// Encode a matrix snapshot to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the zoomed image would exceed [`MAX_IMAGE_EDGE`]
    /// on either side, or if PNG encoding fails.
    pub fn to_bytes(matrix: &LedMatrix, zoom: u32) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(matrix, zoom, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(matrix: &LedMatrix, zoom: u32, writer: W) -> Result<()> {
        let zoom = zoom.max(1);
        let scaled = |edge: u32| edge.checked_mul(zoom).filter(|&e| e <= MAX_IMAGE_EDGE);

        let (Some(width), Some(height)) = (scaled(matrix.width()), scaled(matrix.height())) else {
            return Err(Error::InvalidDimensions {
                width: matrix.width().saturating_mul(zoom),
                height: matrix.height().saturating_mul(zoom),
            });
        };

        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&matrix.to_rgba_pixels(zoom))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    fn ihdr_size(bytes: &[u8]) -> (u32, u32) {
        // Signature (8) + chunk length (4) + "IHDR" (4)
        let w = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let h = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (w, h)
    }

    #[test]
    fn test_png_to_bytes() {
        let mut m = LedMatrix::new(10, 10).unwrap();
        m.clear(Rgb::RED);

        let bytes = PngEncoder::to_bytes(&m, 1).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
        assert_eq!(ihdr_size(&bytes), (10, 10));
    }

    #[test]
    fn test_png_zoom_scales_image() {
        let m = LedMatrix::new(16, 8).unwrap();
        let bytes = PngEncoder::to_bytes(&m, 6).unwrap();
        assert_eq!(ihdr_size(&bytes), (96, 48));
    }

    #[test]
    fn test_png_zero_zoom_is_one() {
        let m = LedMatrix::new(4, 4).unwrap();
        let bytes = PngEncoder::to_bytes(&m, 0).unwrap();
        assert_eq!(ihdr_size(&bytes), (4, 4));
    }

    #[test]
    fn test_png_rejects_overflowing_zoom() {
        let m = LedMatrix::new(128, 128).unwrap();
        let err = PngEncoder::to_bytes(&m, 40_000_000).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));

        let err = PngEncoder::to_bytes(&m, u32::MAX).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions {
                width: u32::MAX,
                height: u32::MAX
            }
        ));
    }

    #[test]
    fn test_png_largest_config_zoom_encodes() {
        let m = LedMatrix::new(16, 8).unwrap();
        let bytes = PngEncoder::to_bytes(&m, crate::config::MAX_ZOOM).unwrap();
        assert_eq!(ihdr_size(&bytes), (16 * 64, 8 * 64));
    }

    #[test]
    fn test_png_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.png");

        let m = LedMatrix::new(8, 8).unwrap();
        PngEncoder::write_to_file(&m, 2, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }
}
