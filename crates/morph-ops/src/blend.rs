//! Raster-level alpha blending.
//!
//! Combines two equally-sized rasters into one by per-pixel linear
//! interpolation with weight `alpha` on the first input.

use crate::{OpsError, OpsResult};
use morph_core::{Raster, Rgb8};
use tracing::debug;

/// Blends two rasters of identical dimensions.
///
/// Each output pixel is `Rgb8::blend(a_px, b_px, alpha)`:
/// `alpha = 1.0` reproduces `a` exactly, `alpha = 0.0` reproduces
/// `b` exactly. Alpha outside `[0, 1]` extrapolates with channel
/// clamping, see [`Rgb8::blend`].
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the two rasters differ in
/// width or height.
///
/// # Example
///
/// ```
/// use morph_core::{Raster, Rgb8};
/// use morph_ops::blend::blend;
///
/// let a = Raster::filled(2, 2, Rgb8::new(100, 0, 0));
/// let b = Raster::filled(2, 2, Rgb8::new(0, 100, 0));
/// let mid = blend(&a, &b, 0.5).unwrap();
/// assert_eq!(mid.pixel(0, 0), Rgb8::new(50, 50, 0));
/// ```
pub fn blend(a: &Raster, b: &Raster, alpha: f64) -> OpsResult<Raster> {
    if a.dimensions() != b.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "{}x{} vs {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }

    let (width, height) = a.dimensions();
    debug!(width, height, alpha, "blend");

    let pixels = a
        .pixels_raw()
        .iter()
        .zip(b.pixels_raw())
        .map(|(&pa, &pb)| Rgb8::blend(pa, pb, alpha))
        .collect();

    Raster::from_pixels(width, height, pixels)
        .map_err(|e| OpsError::InvalidDimensions(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rasters() -> (Raster, Raster) {
        let a = Raster::from_pixels(
            2,
            1,
            vec![Rgb8::new(200, 100, 0), Rgb8::new(40, 40, 40)],
        )
        .unwrap();
        let b = Raster::from_pixels(
            2,
            1,
            vec![Rgb8::new(0, 100, 200), Rgb8::new(80, 80, 80)],
        )
        .unwrap();
        (a, b)
    }

    #[test]
    fn test_blend_endpoints() {
        let (a, b) = two_rasters();
        assert_eq!(blend(&a, &b, 1.0).unwrap(), a);
        assert_eq!(blend(&a, &b, 0.0).unwrap(), b);
    }

    #[test]
    fn test_blend_midpoint() {
        let (a, b) = two_rasters();
        let mid = blend(&a, &b, 0.5).unwrap();
        assert_eq!(mid.pixel(0, 0), Rgb8::new(100, 100, 100));
        assert_eq!(mid.pixel(1, 0), Rgb8::new(60, 60, 60));
    }

    #[test]
    fn test_blend_size_mismatch() {
        let a = Raster::filled(2, 2, Rgb8::BLACK);
        let b = Raster::filled(3, 2, Rgb8::BLACK);
        match blend(&a, &b, 0.5) {
            Err(OpsError::SizeMismatch(msg)) => {
                assert!(msg.contains("2x2"));
                assert!(msg.contains("3x2"));
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_blend_with_self_is_noop() {
        let (a, _) = two_rasters();
        for alpha in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(blend(&a, &a, alpha).unwrap(), a);
        }
    }

    #[test]
    fn test_blend_preserves_dimensions() {
        let a = Raster::filled(7, 5, Rgb8::new(10, 20, 30));
        let b = Raster::filled(7, 5, Rgb8::new(30, 20, 10));
        assert_eq!(blend(&a, &b, 0.25).unwrap().dimensions(), (7, 5));
    }
}
