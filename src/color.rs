//! LED cell colors.
//!
//! An LED cell carries no alpha channel: translucency is expressed by blending
//! a color into whatever the cell already shows, weighted by coverage.

/// RGB color with 8-bit components, as held by one LED cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// LED off.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Full white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Full red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Full green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Full blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Returns true if every channel is zero (the LED is dark).
    #[must_use]
    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Blend this color over `current` with the given coverage.
    ///
    /// Each channel becomes `coverage * self + (1 - coverage) * current`.
    /// The sum is formed in `f64`, rounded to the nearest level and clamped to
    /// `[0, 255]` before narrowing, so floating-point error can neither wrap a
    /// channel nor shave a level off it. Coverage is clamped to `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use led_raster::color::Rgb;
    ///
    /// let half = Rgb::RED.blend(Rgb::BLACK, 0.5);
    /// assert_eq!(half, Rgb::new(128, 0, 0));
    /// ```
    #[must_use]
    pub fn blend(self, current: Self, coverage: f64) -> Self {
        let coverage = coverage.clamp(0.0, 1.0);

        Self::new(
            blend_channel(self.r, current.r, coverage),
            blend_channel(self.g, current.g, coverage),
            blend_channel(self.b, current.b, coverage),
        )
    }
}

#[inline]
fn blend_channel(fill: u8, current: u8, coverage: f64) -> u8 {
    let mixed = coverage * f64::from(fill) + (1.0 - coverage) * f64::from(current);
    mixed.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
