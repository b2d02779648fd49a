//! Recording renderer for tests.
//!
//! [`FrameRecorder`] implements [`Renderer`] by reconstructing each
//! frame from the draw calls it receives and storing every flushed
//! frame as a [`Raster`]. It exercises the same coordinate contract
//! as a real surface: a square centered at
//! `(x + 0.5, height - y - 0.5)` lands on raster pixel `(x, y)`.

use crate::error::{ViewError, ViewResult};
use crate::render::Renderer;
use morph_core::{Raster, Rgb8};
use std::time::Duration;

/// Renderer that captures emitted frames instead of drawing them.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    width: u32,
    height: u32,
    title: String,
    pen: Rgb8,
    canvas: Vec<Rgb8>,
    frames: Vec<Raster>,
    pauses: Vec<Duration>,
}

impl FrameRecorder {
    /// Creates an unconfigured recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames flushed so far, in emission order.
    pub fn frames(&self) -> &[Raster] {
        &self.frames
    }

    /// Pauses requested so far, in emission order.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Title passed to the last `configure` call.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Configured canvas dimensions as `(width, height)`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel_index(&self, center_x: f64, center_y: f64) -> ViewResult<usize> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewError::renderer("draw before configure"));
        }
        let x = (center_x - 0.5).round();
        let y = (self.height as f64 - center_y - 0.5).round();
        if x < 0.0 || y < 0.0 || x >= self.width as f64 || y >= self.height as f64 {
            return Err(ViewError::renderer(format!(
                "square at ({center_x}, {center_y}) is outside the {}x{} canvas",
                self.width, self.height
            )));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl Renderer for FrameRecorder {
    fn configure(&mut self, width: u32, height: u32, title: &str) -> ViewResult<()> {
        if width == 0 || height == 0 {
            return Err(ViewError::renderer("canvas must be at least 1x1"));
        }
        self.width = width;
        self.height = height;
        self.title = title.to_string();
        self.canvas = vec![Rgb8::BLACK; width as usize * height as usize];
        Ok(())
    }

    fn set_pen_color(&mut self, color: Rgb8) -> ViewResult<()> {
        self.pen = color;
        Ok(())
    }

    fn fill_square(&mut self, center_x: f64, center_y: f64) -> ViewResult<()> {
        let idx = self.pixel_index(center_x, center_y)?;
        self.canvas[idx] = self.pen;
        Ok(())
    }

    fn flush(&mut self) -> ViewResult<()> {
        let frame = Raster::from_pixels(self.width, self.height, self.canvas.clone())
            .map_err(|e| ViewError::renderer(e.to_string()))?;
        self.frames.push(frame);
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> ViewResult<()> {
        self.pauses.push(duration);
        Ok(())
    }
}
