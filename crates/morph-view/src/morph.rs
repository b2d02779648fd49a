//! The morph engine.
//!
//! Produces a smooth `steps`-step transition from a source raster to
//! a target raster and hands every intermediate frame to a
//! [`Renderer`]. The target is first rescaled to the source's
//! dimensions (the source is authoritative), so the two inputs may
//! have any relative sizes.
//!
//! Frame `i` blends source and scaled target at
//! `alpha = (steps - i) / steps`: frame 0 is the pure source, frame
//! `steps` the pure scaled target. After the loop the final frame is
//! re-emitted [`FINAL_HOLD_FRAMES`] times so it stays visible on
//! double-buffered surfaces.

use crate::error::{ViewError, ViewResult};
use crate::render::{Renderer, display};
use morph_core::Raster;
use morph_ops::{blend, resize};
use std::time::Duration;
use tracing::debug;

/// Number of times the final frame is re-emitted after the morph
/// loop. Presentation polish, not part of the mathematical morph.
pub const FINAL_HOLD_FRAMES: u32 = 4;

/// Morphs `source` into `target` in `steps` steps.
///
/// Emits `steps + 1` blended frames, pausing `frame_delay` after each
/// one, then re-emits the pure scaled target [`FINAL_HOLD_FRAMES`]
/// times without pausing. Emission is synchronous: each frame is
/// fully displayed before the next is computed.
///
/// # Errors
///
/// - [`ViewError::InvalidParameter`] if `steps` is zero (the alpha
///   ramp divides by `steps`)
/// - any error the renderer or the delegated rescale/blend raise
///
/// # Example
///
/// ```
/// use morph_core::{Raster, Rgb8};
/// use morph_view::{FrameRecorder, Renderer, morph};
/// use std::time::Duration;
///
/// let source = Raster::filled(2, 2, Rgb8::BLACK);
/// let target = Raster::filled(4, 4, Rgb8::WHITE);
///
/// let mut recorder = FrameRecorder::new();
/// recorder.configure(2, 2, "morph").unwrap();
/// morph(&source, &target, 2, &mut recorder, Duration::ZERO).unwrap();
///
/// // 3 blended frames + 4 holds
/// assert_eq!(recorder.frames().len(), 7);
/// assert_eq!(recorder.frames()[0], source);
/// ```
pub fn morph<R: Renderer + ?Sized>(
    source: &Raster,
    target: &Raster,
    steps: u32,
    renderer: &mut R,
    frame_delay: Duration,
) -> ViewResult<()> {
    if steps == 0 {
        return Err(ViewError::invalid_parameter("step count must be >= 1"));
    }

    let (width, height) = source.dimensions();
    let scaled_target = resize::rescale(target, width, height)?;

    for i in 0..=steps {
        let alpha = (steps - i) as f64 / steps as f64;
        debug!(step = i, alpha, "morph frame");
        let frame = blend::blend(source, &scaled_target, alpha)?;
        display(&frame, renderer)?;
        renderer.pause(frame_delay)?;
    }

    for _ in 0..FINAL_HOLD_FRAMES {
        display(&scaled_target, renderer)?;
    }

    Ok(())
}
