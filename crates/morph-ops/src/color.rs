//! Per-pixel color operations.

use morph_core::Raster;

/// Converts a raster to grayscale.
///
/// Applies [`morph_core::Rgb8::luminance`] to every pixel
/// independently. Output dimensions equal input dimensions and every
/// output pixel has equal red, green and blue channels.
///
/// # Example
///
/// ```
/// use morph_core::{Raster, Rgb8};
/// use morph_ops::color::grayscale;
///
/// let img = Raster::filled(2, 2, Rgb8::new(255, 0, 0));
/// let gray = grayscale(&img);
/// assert_eq!(gray.pixel(0, 0), Rgb8::new(76, 76, 76));
/// ```
pub fn grayscale(image: &Raster) -> Raster {
    image.map(|px| px.luminance())
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_core::Rgb8;

    #[test]
    fn test_grayscale_all_channels_equal() {
        let img = Raster::from_pixels(
            2,
            2,
            vec![
                Rgb8::new(255, 0, 0),
                Rgb8::new(12, 34, 56),
                Rgb8::new(200, 100, 50),
                Rgb8::new(0, 0, 1),
            ],
        )
        .unwrap();

        let gray = grayscale(&img);
        assert_eq!(gray.dimensions(), img.dimensions());
        for (_, _, px) in gray.pixels() {
            assert!(px.is_gray());
        }
    }

    #[test]
    fn test_grayscale_idempotent() {
        let img = Raster::filled(3, 3, Rgb8::new(100, 100, 100));
        assert_eq!(grayscale(&img), img);
    }
}
