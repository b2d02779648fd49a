//! # morph-core
//!
//! Core types for the morph image pipeline.
//!
//! This crate provides the foundational types used throughout the
//! morph-rs workspace:
//!
//! - [`Rgb8`] - Immutable 8-bit RGB color value with luminance and
//!   alpha-blend operations
//! - [`Raster`] - Rectangular grid of [`Rgb8`] pixels with cheap
//!   (shared-buffer) cloning
//! - [`CoreError`], [`CoreResult`] - Error type for raster
//!   construction
//!
//! ## Design
//!
//! A [`Raster`] is immutable once constructed: every transform in
//! `morph-ops` allocates and returns a fresh raster instead of
//! mutating its input. The pixel buffer lives behind an `Arc`, so
//! cloning a raster never copies pixel data.
//!
//! ## Crate Structure
//!
//! `morph-core` has no internal dependencies. All other morph-rs
//! crates depend on it:
//!
//! ```text
//! morph-core (this crate)
//!    ^
//!    |
//!    +-- morph-io   (plain-text PPM decode/encode)
//!    +-- morph-ops  (flip, grayscale, rescale, blend)
//!    +-- morph-view (renderer + morph engine)
//!    +-- morph-cli  (command-line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod raster;

pub use color::{BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R, Rgb8};
pub use error::{CoreError, CoreResult};
pub use raster::Raster;
