//! # morph-io
//!
//! Plain-text pixel-map I/O for the morph pipeline.
//!
//! The single supported format is the textual PPM variant ("P3"): a
//! whitespace-delimited header (format tag, width, height, maximum
//! channel value) followed by `width * height * 3` integer tokens,
//! row-major, red/green/blue per pixel.
//!
//! # Example
//!
//! ```
//! use morph_io::pnm;
//!
//! let text = "P3\n2 1\n255\n255 0 0  0 0 255\n";
//! let img = pnm::parse(text).unwrap();
//! assert_eq!(img.dimensions(), (2, 1));
//! ```
//!
//! Binary PPM (P6) and every other image format are out of scope.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pnm;

pub use error::{PnmError, PnmResult};
pub use pnm::{read, write};
