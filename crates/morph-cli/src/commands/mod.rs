//! CLI command implementations

pub mod info;
pub mod morph;
pub mod resize;
pub mod transform;

use anyhow::{Context, Result};
use morph_core::Raster;
use std::path::Path;
use tracing::debug;

/// Load a plain-text pixel map from a path
pub fn load_image(path: &Path) -> Result<Raster> {
    debug!(path = %path.display(), "loading pixel map");
    morph_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a raster as a plain-text pixel map
pub fn save_image(path: &Path, image: &Raster) -> Result<()> {
    morph_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
