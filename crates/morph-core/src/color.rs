//! 8-bit RGB color value type.
//!
//! [`Rgb8`] is an immutable value type: three bounded channels with
//! structural equality. The two color-level operations the pipeline
//! needs live here:
//!
//! - [`Rgb8::luminance`] - BT.601 weighted gray conversion
//! - [`Rgb8::blend`] - alpha-weighted linear combination of two colors
//!
//! # Truncation semantics
//!
//! Both operations truncate the weighted sum toward zero rather than
//! rounding. For non-negative values this is `floor`, and it is the
//! contract the rest of the pipeline (grayscale, blend, morph frames)
//! is tested against.
//!
//! # Example
//!
//! ```
//! use morph_core::Rgb8;
//!
//! let red = Rgb8::new(255, 0, 0);
//! assert_eq!(red.luminance(), Rgb8::new(76, 76, 76)); // floor(0.299 * 255)
//!
//! let blue = Rgb8::new(0, 0, 255);
//! assert_eq!(Rgb8::blend(red, blue, 1.0), red);
//! assert_eq!(Rgb8::blend(red, blue, 0.0), blue);
//! ```

use std::fmt;

/// BT.601 luma coefficient for the red channel.
///
/// Used in the classic luminance formula:
/// `Y = 0.299*R + 0.587*G + 0.114*B`
pub const BT601_LUMA_R: f64 = 0.299;

/// BT.601 luma coefficient for the green channel.
pub const BT601_LUMA_G: f64 = 0.587;

/// BT.601 luma coefficient for the blue channel.
pub const BT601_LUMA_B: f64 = 0.114;

/// BT.601 luma coefficients as an array `[R, G, B]`.
pub const BT601_LUMA: [f64; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// An 8-bit RGB color.
///
/// Plain value type with structural equality; channels are each in
/// `[0, 255]` by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque black (0, 0, 0).
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    /// Opaque white (255, 255, 255).
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    /// Creates a color from three channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as an `[r, g, b]` array.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns the BT.601 gray version of this color.
    ///
    /// Computes `gray = trunc(0.299*r + 0.587*g + 0.114*b)` and
    /// returns a color with all three channels set to `gray`. The
    /// weighted sum is truncated, not rounded.
    ///
    /// # Example
    ///
    /// ```
    /// use morph_core::Rgb8;
    ///
    /// let gray = Rgb8::new(0, 255, 0).luminance();
    /// assert_eq!(gray, Rgb8::new(149, 149, 149)); // floor(0.587 * 255)
    /// ```
    #[inline]
    pub fn luminance(self) -> Rgb8 {
        let y = BT601_LUMA_R * self.r as f64
            + BT601_LUMA_G * self.g as f64
            + BT601_LUMA_B * self.b as f64;
        let gray = y as u8;
        Rgb8::new(gray, gray, gray)
    }

    /// Returns `true` if all three channels are equal.
    #[inline]
    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Linearly combines two colors.
    ///
    /// Each channel is `trunc(alpha*a + (1 - alpha)*b)`, so
    /// `alpha = 1.0` yields `a` exactly and `alpha = 0.0` yields `b`
    /// exactly.
    ///
    /// Alpha outside `[0, 1]` is accepted as an extrapolation: the
    /// weighted sum can then leave `[0, 255]` and is clamped to that
    /// range before the cast, since a channel is 8-bit unsigned.
    #[inline]
    pub fn blend(a: Rgb8, b: Rgb8, alpha: f64) -> Rgb8 {
        let mix = |ca: u8, cb: u8| -> u8 {
            let v = alpha * ca as f64 + (1.0 - alpha) * cb as f64;
            v.clamp(0.0, 255.0) as u8
        };
        Rgb8::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

impl From<[u8; 3]> for Rgb8 {
    #[inline]
    fn from(c: [u8; 3]) -> Self {
        Rgb8::new(c[0], c[1], c[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    #[inline]
    fn from(c: Rgb8) -> Self {
        c.channels()
    }
}

impl fmt::Debug for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb8({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_luma_coefficients_sum_to_one() {
        assert_relative_eq!(BT601_LUMA.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_luminance_primaries() {
        // floor of each BT.601 weight * 255
        assert_eq!(Rgb8::new(255, 0, 0).luminance(), Rgb8::new(76, 76, 76));
        assert_eq!(Rgb8::new(0, 255, 0).luminance(), Rgb8::new(149, 149, 149));
        assert_eq!(Rgb8::new(0, 0, 255).luminance(), Rgb8::new(29, 29, 29));
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(Rgb8::BLACK.luminance(), Rgb8::BLACK);
        assert_eq!(Rgb8::WHITE.luminance(), Rgb8::WHITE);
    }

    #[test]
    fn test_luminance_is_gray() {
        let c = Rgb8::new(12, 200, 97).luminance();
        assert!(c.is_gray());
    }

    #[test]
    fn test_blend_endpoints_exact() {
        let a = Rgb8::new(10, 20, 30);
        let b = Rgb8::new(200, 150, 100);
        assert_eq!(Rgb8::blend(a, b, 1.0), a);
        assert_eq!(Rgb8::blend(a, b, 0.0), b);
    }

    #[test]
    fn test_blend_self_is_noop() {
        let c = Rgb8::new(77, 13, 240);
        for alpha in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(Rgb8::blend(c, c, alpha), c);
        }
    }

    #[test]
    fn test_blend_truncates() {
        // 0.5 * 1 + 0.5 * 0 = 0.5 -> truncates to 0
        let a = Rgb8::new(1, 1, 1);
        let b = Rgb8::BLACK;
        assert_eq!(Rgb8::blend(a, b, 0.5), Rgb8::BLACK);
    }

    #[test]
    fn test_blend_out_of_range_alpha_clamps() {
        let a = Rgb8::new(200, 200, 200);
        let b = Rgb8::new(10, 10, 10);
        // alpha = 2.0 -> 2*200 - 10 = 390 -> clamped to 255
        assert_eq!(Rgb8::blend(a, b, 2.0), Rgb8::WHITE);
        // alpha = -1.0 -> -200 + 2*10 = -180 -> clamped to 0
        assert_eq!(Rgb8::blend(a, b, -1.0), Rgb8::BLACK);
    }

    #[test]
    fn test_array_conversions() {
        let c = Rgb8::new(1, 2, 3);
        let arr: [u8; 3] = c.into();
        assert_eq!(arr, [1, 2, 3]);
        assert_eq!(Rgb8::from(arr), c);
    }
}
