//! Renderer capability and raster display.
//!
//! A [`Renderer`] is the drawing surface the morph engine emits
//! frames to. The coordinate system has its origin at the bottom-left
//! and one unit per pixel: the pixel at raster position `(x, y)`
//! (row 0 = top) is drawn as a filled unit square centered at
//! `(x + 0.5, height - y - 0.5)`.
//!
//! All operations are fallible so I/O-backed renderers can propagate
//! write errors.

use crate::error::ViewResult;
use morph_core::{Raster, Rgb8};
use std::time::Duration;

/// Drawing capability consumed by [`display`] and the morph engine.
///
/// Call sequence per frame: any number of `set_pen_color` /
/// `fill_square` pairs, then one `flush`. `configure` is called once
/// before the first frame; `pause` between frames is a pacing
/// contract, not a correctness one.
pub trait Renderer {
    /// Sets up the canvas for a `width` x `height` pixel image.
    fn configure(&mut self, width: u32, height: u32, title: &str) -> ViewResult<()>;

    /// Sets the pen color used by subsequent draws.
    fn set_pen_color(&mut self, color: Rgb8) -> ViewResult<()>;

    /// Draws a filled unit square centered at `(center_x, center_y)`
    /// in bottom-left-origin canvas coordinates.
    fn fill_square(&mut self, center_x: f64, center_y: f64) -> ViewResult<()>;

    /// Presents the frame drawn since the last flush.
    fn flush(&mut self) -> ViewResult<()>;

    /// Blocks for `duration` between frames.
    fn pause(&mut self, duration: Duration) -> ViewResult<()>;
}

/// Draws one raster through a renderer as a single frame.
///
/// For every pixel: set the pen color, then draw its unit square;
/// afterwards flush once. No pause is issued here; frame pacing
/// belongs to the caller.
pub fn display<R: Renderer + ?Sized>(image: &Raster, renderer: &mut R) -> ViewResult<()> {
    let height = image.height() as f64;
    for (x, y, px) in image.pixels() {
        renderer.set_pen_color(px)?;
        renderer.fill_square(x as f64 + 0.5, height - y as f64 - 0.5)?;
    }
    renderer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::FrameRecorder;

    #[test]
    fn test_display_round_trips_through_coordinates() {
        // A non-symmetric image catches x/y mapping mistakes.
        let img = Raster::from_pixels(
            3,
            2,
            vec![
                Rgb8::new(255, 0, 0),
                Rgb8::new(0, 255, 0),
                Rgb8::new(0, 0, 255),
                Rgb8::new(10, 10, 10),
                Rgb8::new(20, 20, 20),
                Rgb8::new(30, 30, 30),
            ],
        )
        .unwrap();

        let mut recorder = FrameRecorder::new();
        recorder.configure(3, 2, "test").unwrap();
        display(&img, &mut recorder).unwrap();

        assert_eq!(recorder.frames().len(), 1);
        assert_eq!(recorder.frames()[0], img);
    }

    #[test]
    fn test_display_one_flush_per_frame() {
        let img = Raster::filled(2, 2, Rgb8::BLACK);
        let mut recorder = FrameRecorder::new();
        recorder.configure(2, 2, "test").unwrap();
        display(&img, &mut recorder).unwrap();
        display(&img, &mut recorder).unwrap();
        assert_eq!(recorder.frames().len(), 2);
    }
}
