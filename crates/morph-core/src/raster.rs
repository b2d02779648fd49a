//! Raster image buffer.
//!
//! A [`Raster`] is a rectangular grid of [`Rgb8`] pixels, indexed by
//! `(x, y)` with row 0 at the top and pixels stored in row-major
//! order.
//!
//! # Invariants
//!
//! - `width >= 1` and `height >= 1`
//! - the pixel buffer holds exactly `width * height` pixels
//!
//! Constructors validate both invariants, so every `Raster` in
//! circulation is fully populated.
//!
//! # Immutability
//!
//! A raster never changes after construction. Pipeline transforms
//! build a fresh pixel buffer and return a new raster. The buffer
//! lives behind an `Arc`, so `clone()` is cheap and shares pixel data.
//!
//! # Example
//!
//! ```
//! use morph_core::{Raster, Rgb8};
//!
//! let img = Raster::filled(4, 3, Rgb8::new(255, 0, 0));
//! assert_eq!(img.dimensions(), (4, 3));
//! assert_eq!(img.pixel(3, 2), Rgb8::new(255, 0, 0));
//! ```

use crate::color::Rgb8;
use crate::error::{CoreError, CoreResult};
use std::sync::Arc;

/// Rectangular grid of [`Rgb8`] pixels.
///
/// See the [module docs](self) for invariants and layout.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    /// Pixel data, row-major, row 0 = top (Arc for cheap cloning).
    data: Arc<Vec<Rgb8>>,
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
}

impl Raster {
    /// Creates a raster from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if `width` or `height`
    /// is zero, or if `pixels.len() != width * height`.
    ///
    /// # Example
    ///
    /// ```
    /// use morph_core::{Raster, Rgb8};
    ///
    /// let img = Raster::from_pixels(2, 1, vec![Rgb8::BLACK, Rgb8::WHITE]).unwrap();
    /// assert_eq!(img.pixel(1, 0), Rgb8::WHITE);
    /// ```
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb8>) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::invalid_dimensions(
                width,
                height,
                "width and height must be >= 1",
            ));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CoreError::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(pixels),
            width,
            height,
        })
    }

    /// Creates a raster filled with a single color.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Self {
        assert!(width >= 1 && height >= 1, "raster must be at least 1x1");
        let pixels = vec![color; width as usize * height as usize];
        Self {
            data: Arc::new(pixels),
            width,
            height,
        }
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns a reference to the raw row-major pixel buffer.
    #[inline]
    pub fn pixels_raw(&self) -> &[Rgb8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[self.offset(x, y)]
    }

    /// Returns the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x < self.width && y < self.height {
            Some(self.data[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Returns row `y` as a pixel slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb8]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Iterates over all pixels with their coordinates, row-major.
    ///
    /// # Example
    ///
    /// ```
    /// use morph_core::{Raster, Rgb8};
    ///
    /// let img = Raster::filled(2, 2, Rgb8::new(9, 9, 9));
    /// for (x, y, px) in img.pixels() {
    ///     assert!(x < 2 && y < 2);
    ///     assert_eq!(px, Rgb8::new(9, 9, 9));
    /// }
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb8)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Returns a new raster with `f` applied to every pixel.
    ///
    /// The result has the same dimensions as `self`.
    pub fn map<F>(&self, f: F) -> Raster
    where
        F: Fn(Rgb8) -> Rgb8,
    {
        let pixels = self.data.iter().map(|&px| f(px)).collect();
        Raster {
            data: Arc::new(pixels),
            width: self.width,
            height: self.height,
        }
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Raster {
        Raster::from_pixels(
            2,
            2,
            vec![Rgb8::BLACK, Rgb8::WHITE, Rgb8::WHITE, Rgb8::BLACK],
        )
        .unwrap()
    }

    #[test]
    fn test_from_pixels_valid() {
        let img = checkerboard();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.pixel_count(), 4);
        assert_eq!(img.pixel(0, 0), Rgb8::BLACK);
        assert_eq!(img.pixel(1, 0), Rgb8::WHITE);
    }

    #[test]
    fn test_from_pixels_zero_dimension() {
        let result = Raster::from_pixels(0, 2, vec![]);
        assert!(matches!(
            result,
            Err(CoreError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_from_pixels_wrong_length() {
        let result = Raster::from_pixels(2, 2, vec![Rgb8::BLACK; 3]);
        assert!(matches!(result, Err(CoreError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_filled() {
        let img = Raster::filled(3, 4, Rgb8::new(1, 2, 3));
        assert_eq!(img.dimensions(), (3, 4));
        for (_, _, px) in img.pixels() {
            assert_eq!(px, Rgb8::new(1, 2, 3));
        }
    }

    #[test]
    fn test_get_pixel_bounds() {
        let img = checkerboard();
        assert_eq!(img.get_pixel(1, 1), Some(Rgb8::BLACK));
        assert_eq!(img.get_pixel(2, 0), None);
        assert_eq!(img.get_pixel(0, 2), None);
    }

    #[test]
    fn test_row_access() {
        let img = checkerboard();
        assert_eq!(img.row(0), &[Rgb8::BLACK, Rgb8::WHITE]);
        assert_eq!(img.row(1), &[Rgb8::WHITE, Rgb8::BLACK]);
        assert_eq!(img.rows().count(), 2);
    }

    #[test]
    fn test_map_preserves_dimensions() {
        let img = checkerboard();
        let inverted = img.map(|px| Rgb8::new(255 - px.r, 255 - px.g, 255 - px.b));
        assert_eq!(inverted.dimensions(), img.dimensions());
        assert_eq!(inverted.pixel(0, 0), Rgb8::WHITE);
        assert_eq!(inverted.pixel(1, 0), Rgb8::BLACK);
    }

    #[test]
    fn test_clone_shares_data() {
        let img = checkerboard();
        let copy = img.clone();
        assert_eq!(img, copy);
        assert!(std::ptr::eq(img.pixels_raw(), copy.pixels_raw()));
    }

    #[test]
    fn test_structural_equality() {
        let a = checkerboard();
        let b = checkerboard();
        assert_eq!(a, b);
        let c = Raster::filled(2, 2, Rgb8::BLACK);
        assert_ne!(a, c);
    }
}
