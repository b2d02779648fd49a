//! Morph command: cross-fade an image into its grayscale version.
//!
//! Mirrors the canonical pipeline: load the source, grayscale it,
//! configure the canvas from the source's dimensions, then hand both
//! images to the morph engine.

use crate::MorphArgs;
use anyhow::Result;
use morph_ops::color::grayscale;
use morph_view::{Renderer, TermRenderer, morph};
use std::time::Duration;

pub fn run(args: MorphArgs, verbose: bool) -> Result<()> {
    let source = super::load_image(&args.input)?;
    let gray = grayscale(&source);

    if verbose {
        let (w, h) = source.dimensions();
        println!(
            "Morphing {} ({}x{}) to grayscale in {} steps",
            args.input.display(),
            w,
            h,
            args.steps
        );
    }

    let title = format!(
        "morph - {}",
        args.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.input.display().to_string())
    );

    let mut renderer = TermRenderer::stdout();
    renderer.configure(source.width(), source.height(), &title)?;
    morph(
        &source,
        &gray,
        args.steps,
        &mut renderer,
        Duration::from_millis(args.delay_ms),
    )?;

    Ok(())
}
