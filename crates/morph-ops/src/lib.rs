//! # morph-ops
//!
//! Pure raster transforms for the morph pipeline.
//!
//! Every operation takes rasters by reference, never mutates its
//! inputs, and returns a freshly allocated [`morph_core::Raster`]
//! that upholds the uniform-width / no-holes invariant.
//!
//! # Modules
//!
//! - [`transform`] - Geometric flips
//! - [`color`] - Grayscale conversion
//! - [`resize`] - Nearest-neighbor rescaling
//! - [`blend`] - Per-pixel linear interpolation of two rasters
//!
//! # Example
//!
//! ```
//! use morph_core::{Raster, Rgb8};
//! use morph_ops::{blend, transform};
//!
//! let img = Raster::filled(4, 4, Rgb8::new(200, 40, 10));
//! let flipped = transform::flip_h(&img);
//! let mixed = blend::blend(&img, &flipped, 0.5).unwrap();
//! assert_eq!(mixed.dimensions(), (4, 4));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blend;
pub mod color;
pub mod resize;
pub mod transform;

pub use error::{OpsError, OpsResult};
