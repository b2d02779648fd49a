//! Transform command (flip, grayscale)

use crate::TransformArgs;
use anyhow::Result;
use morph_ops::color::grayscale;
use morph_ops::transform::{flip_h, flip_v};

pub fn run(args: TransformArgs, verbose: bool) -> Result<()> {
    let mut image = super::load_image(&args.input)?;

    if verbose {
        println!("Transforming {}", args.input.display());
    }

    // Apply transformations in order
    if args.flip_h {
        if verbose {
            println!("  Flip horizontal");
        }
        image = flip_h(&image);
    }

    if args.flip_v {
        if verbose {
            println!("  Flip vertical");
        }
        image = flip_v(&image);
    }

    if args.grayscale {
        if verbose {
            println!("  Grayscale");
        }
        image = grayscale(&image);
    }

    super::save_image(&args.output, &image)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
