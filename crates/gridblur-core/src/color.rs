//! The RGB sample type stored in every grid cell.

/// A single 8-bit RGB color. Two samples are equal iff all three channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSample {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl ColorSample {
    /// White, (255, 255, 255).
    pub const WHITE: ColorSample = ColorSample::new(255, 255, 255);
    /// Black, (0, 0, 0).
    pub const BLACK: ColorSample = ColorSample::new(0, 0, 0);
    /// Red, (255, 0, 0).
    pub const RED: ColorSample = ColorSample::new(255, 0, 0);
    /// Green, (0, 255, 0).
    pub const GREEN: ColorSample = ColorSample::new(0, 255, 0);
    /// Blue, (0, 0, 255).
    pub const BLUE: ColorSample = ColorSample::new(0, 0, 255);

    /// Create a sample from its three channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridblur_core::ColorSample;
    /// let gray = ColorSample::new(63, 63, 63);
    /// assert_eq!(gray.channels(), [63, 63, 63]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSample { r, g, b }
    }

    /// The channels as `[r, g, b]`.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for ColorSample {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        ColorSample { r, g, b }
    }
}

impl From<(u8, u8, u8)> for ColorSample {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSample { r, g, b }
    }
}

impl From<ColorSample> for [u8; 3] {
    #[inline]
    fn from(color: ColorSample) -> Self {
        color.channels()
    }
}
