//! Nearest-neighbor rescaling.
//!
//! Sampling only, no interpolation: each target pixel takes the value
//! of the closest source pixel, so upscaling shows block artifacts by
//! design. Smooth filters are a non-goal of this pipeline.

use crate::{OpsError, OpsResult};
use morph_core::Raster;
use tracing::debug;

/// Rescales a raster to `new_width` x `new_height` by
/// nearest-neighbor sampling.
///
/// The source-to-target ratio per axis is computed once as a real
/// number; target pixel `(x, y)` samples source pixel
/// `(floor(x * w_ratio), floor(y * h_ratio))`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if `new_width` or
/// `new_height` is zero.
///
/// # Example
///
/// ```
/// use morph_core::{Raster, Rgb8};
/// use morph_ops::resize::rescale;
///
/// let img = Raster::filled(4, 4, Rgb8::new(8, 8, 8));
/// let small = rescale(&img, 2, 3).unwrap();
/// assert_eq!(small.dimensions(), (2, 3));
/// ```
pub fn rescale(image: &Raster, new_width: u32, new_height: u32) -> OpsResult<Raster> {
    if new_width == 0 || new_height == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "target size must be >= 1x1, got {new_width}x{new_height}"
        )));
    }

    let (src_w, src_h) = image.dimensions();
    debug!(src_w, src_h, new_width, new_height, "rescale");

    // Ratios are derived once per call from the real-valued quotient,
    // then multiplied by the target index and floored.
    let w_ratio = src_w as f64 / new_width as f64;
    let h_ratio = src_h as f64 / new_height as f64;

    let mut pixels = Vec::with_capacity(new_width as usize * new_height as usize);
    for y in 0..new_height {
        let src_y = (y as f64 * h_ratio) as u32;
        for x in 0..new_width {
            let src_x = (x as f64 * w_ratio) as u32;
            pixels.push(image.pixel(src_x, src_y));
        }
    }

    Raster::from_pixels(new_width, new_height, pixels)
        .map_err(|e| OpsError::InvalidDimensions(e.to_string()))
}
