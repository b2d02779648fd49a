//! Resize command (nearest-neighbor rescale)

use crate::ResizeArgs;
use anyhow::Result;
use morph_ops::resize::rescale;

pub fn run(args: ResizeArgs, verbose: bool) -> Result<()> {
    let image = super::load_image(&args.input)?;

    if verbose {
        let (w, h) = image.dimensions();
        println!(
            "Rescaling {} from {}x{} to {}x{}",
            args.input.display(),
            w,
            h,
            args.width,
            args.height
        );
    }

    let scaled = rescale(&image, args.width, args.height)?;
    super::save_image(&args.output, &scaled)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
