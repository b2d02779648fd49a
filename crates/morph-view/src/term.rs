//! Truecolor terminal renderer.
//!
//! Draws frames with Unicode half blocks: each character cell carries
//! two vertically stacked pixels, the upper one as the foreground
//! color of `▀` and the lower one as the background color. Frames
//! overwrite each other in place by homing the cursor, which is what
//! makes the morph animation visible in a plain terminal.

use crate::error::{ViewError, ViewResult};
use crate::render::Renderer;
use morph_core::Rgb8;
use std::io::{self, Write};
use std::time::Duration;

const UPPER_HALF_BLOCK: char = '▀';

/// Renderer that writes ANSI truecolor frames to any writer.
pub struct TermRenderer<W: Write> {
    out: W,
    width: u32,
    height: u32,
    pen: Rgb8,
    canvas: Vec<Rgb8>,
}

impl TermRenderer<io::Stdout> {
    /// Creates a renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TermRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: 0,
            height: 0,
            pen: Rgb8::BLACK,
            canvas: Vec::new(),
        }
    }

    /// Consumes the renderer and returns the underlying writer.
    pub fn into_inner(self) -> W {
        let mut this = std::mem::ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so each field is moved or
        // dropped exactly once here.
        unsafe {
            std::ptr::drop_in_place(&mut this.canvas);
            std::ptr::read(&this.out)
        }
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

impl<W: Write> Renderer for TermRenderer<W> {
    fn configure(&mut self, width: u32, height: u32, title: &str) -> ViewResult<()> {
        if width == 0 || height == 0 {
            return Err(ViewError::renderer("canvas must be at least 1x1"));
        }
        self.width = width;
        self.height = height;
        self.canvas = vec![Rgb8::BLACK; width as usize * height as usize];
        // Set window title, clear the screen, hide the cursor.
        write!(self.out, "\x1b]0;{title}\x07\x1b[2J\x1b[?25l")?;
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
        let width = self.width as usize;
        let mut frame = String::from("\x1b[H");
        for pair in self.canvas.chunks(width * 2) {
            let (top, bottom) = pair.split_at(width.min(pair.len()));
            for (x, upper) in top.iter().enumerate() {
                frame.push_str(&format!("\x1b[38;2;{};{};{}m", upper.r, upper.g, upper.b));
                match bottom.get(x) {
                    Some(lower) => frame
                        .push_str(&format!("\x1b[48;2;{};{};{}m", lower.r, lower.g, lower.b)),
                    // Odd height: last cell row keeps the default background.
                    None => frame.push_str("\x1b[49m"),
                }
                frame.push(UPPER_HALF_BLOCK);
            }
            frame.push_str("\x1b[0m\r\n");
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> ViewResult<()> {
        std::thread::sleep(duration);
        Ok(())
    }
}

impl<W: Write> Drop for TermRenderer<W> {
    fn drop(&mut self) {
        // Restore cursor and attributes; errors on teardown are moot.
        let _ = write!(self.out, "\x1b[0m\x1b[?25h");
        let _ = self.out.flush();
    }
}
