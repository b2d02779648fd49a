//! Info command (image dimensions and pixel count)

use crate::InfoArgs;
use anyhow::Result;

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let image = super::load_image(path)?;
        let (width, height) = image.dimensions();
        println!(
            "{}: {} x {}, {} pixels",
            path.display(),
            width,
            height,
            image.pixel_count()
        );
        if verbose {
            let top_left = image.pixel(0, 0);
            println!(
                "  top-left pixel: ({}, {}, {})",
                top_left.r, top_left.g, top_left.b
            );
        }
    }
    Ok(())
}
