//! Geometric transformations.
//!
//! Both flips are involutions: applying the same flip twice returns a
//! raster equal to the original.
//!
//! # Example
//!
//! ```
//! use morph_core::{Raster, Rgb8};
//! use morph_ops::transform::{flip_h, flip_v};
//!
//! let img = Raster::from_pixels(2, 1, vec![Rgb8::BLACK, Rgb8::WHITE]).unwrap();
//! let mirrored = flip_h(&img);
//! assert_eq!(mirrored.pixel(0, 0), Rgb8::WHITE);
//! assert_eq!(flip_h(&mirrored), img);
//! ```

use morph_core::{Raster, Rgb8};

/// Flips a raster horizontally (left-right mirror).
///
/// `result[y][x] = image[y][width - 1 - x]`; output dimensions equal
/// input dimensions.
pub fn flip_h(image: &Raster) -> Raster {
    let (width, height) = image.dimensions();
    let mut pixels = Vec::with_capacity(image.pixel_count());

    for y in 0..height {
        for x in 0..width {
            pixels.push(image.pixel(width - 1 - x, y));
        }
    }

    raster_same_size(width, height, pixels)
}

/// Flips a raster vertically (top-bottom mirror).
///
/// `result[y][x] = image[height - 1 - y][x]`; output dimensions equal
/// input dimensions. Rows are copied whole.
pub fn flip_v(image: &Raster) -> Raster {
    let (width, height) = image.dimensions();
    let mut pixels = Vec::with_capacity(image.pixel_count());

    for y in (0..height).rev() {
        pixels.extend_from_slice(image.row(y));
    }

    raster_same_size(width, height, pixels)
}

/// Builds a raster the same size as a validated source raster.
fn raster_same_size(width: u32, height: u32, pixels: Vec<Rgb8>) -> Raster {
    // The source raster already satisfies the dimension invariants.
    Raster::from_pixels(width, height, pixels).expect("flip preserves valid dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Raster {
        // 2x2: [[Red, Green], [Blue, White]]
        Raster::from_pixels(
            2,
            2,
            vec![
                Rgb8::new(255, 0, 0),
                Rgb8::new(0, 255, 0),
                Rgb8::new(0, 0, 255),
                Rgb8::WHITE,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_flip_h_mapping() {
        let flipped = flip_h(&sample());
        // [[Green, Red], [White, Blue]]
        assert_eq!(flipped.pixel(0, 0), Rgb8::new(0, 255, 0));
        assert_eq!(flipped.pixel(1, 0), Rgb8::new(255, 0, 0));
        assert_eq!(flipped.pixel(0, 1), Rgb8::WHITE);
        assert_eq!(flipped.pixel(1, 1), Rgb8::new(0, 0, 255));
    }

    #[test]
    fn test_flip_v_mapping() {
        let flipped = flip_v(&sample());
        // [[Blue, White], [Red, Green]]
        assert_eq!(flipped.pixel(0, 0), Rgb8::new(0, 0, 255));
        assert_eq!(flipped.pixel(1, 0), Rgb8::WHITE);
        assert_eq!(flipped.pixel(0, 1), Rgb8::new(255, 0, 0));
        assert_eq!(flipped.pixel(1, 1), Rgb8::new(0, 255, 0));
    }

    #[test]
    fn test_flip_h_involution() {
        let img = sample();
        assert_eq!(flip_h(&flip_h(&img)), img);
    }

    #[test]
    fn test_flip_v_involution() {
        let img = sample();
        assert_eq!(flip_v(&flip_v(&img)), img);
    }

    #[test]
    fn test_flip_preserves_dimensions_non_square() {
        let img = Raster::filled(5, 3, Rgb8::new(1, 2, 3));
        assert_eq!(flip_h(&img).dimensions(), (5, 3));
        assert_eq!(flip_v(&img).dimensions(), (5, 3));
    }

    #[test]
    fn test_flip_single_pixel() {
        let img = Raster::filled(1, 1, Rgb8::new(9, 9, 9));
        assert_eq!(flip_h(&img), img);
        assert_eq!(flip_v(&img), img);
    }
}
