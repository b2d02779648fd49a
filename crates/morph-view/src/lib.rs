//! # morph-view
//!
//! Frame emission for the morph pipeline.
//!
//! This crate owns the boundary between the pure transforms in
//! `morph-ops` and whatever surface the frames end up on:
//!
//! - [`Renderer`] - the injected drawing capability (configure a
//!   canvas, set a pen color, draw unit squares, flush a frame,
//!   pause between frames)
//! - [`display`] - draws one raster through a renderer
//! - [`morph`] - the morph engine: rescale + stepwise alpha blend,
//!   one rendered frame per step
//! - [`TermRenderer`] - truecolor half-block terminal output
//! - [`FrameRecorder`] - test renderer that captures emitted frames
//!   as rasters instead of drawing them
//!
//! The morph engine has no hidden global state; everything it draws
//! goes through the renderer passed to it, so tests substitute a
//! [`FrameRecorder`] and assert on the captured frames.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod morph;
pub mod recorder;
pub mod render;
pub mod term;

pub use error::{ViewError, ViewResult};
pub use morph::{FINAL_HOLD_FRAMES, morph};
pub use recorder::FrameRecorder;
pub use render::{Renderer, display};
pub use term::TermRenderer;
