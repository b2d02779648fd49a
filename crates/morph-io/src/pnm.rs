//! Plain-text PPM ("P3") reading and writing.
//!
//! The reader treats the input as a flat stream of whitespace-
//! delimited tokens. `#` starts a comment running to end of line, as
//! in the Netpbm family. The header's format tag and maximum-value
//! field must be present but their values are otherwise ignored; only
//! width and height govern the raster shape.

use crate::error::{PnmError, PnmResult};
use morph_core::{Raster, Rgb8};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Format tag emitted by the writer.
const PLAIN_MAGIC: &str = "P3";

/// Maximum channel value emitted by the writer.
const MAX_VALUE: u8 = 255;

/// Reads a plain-text pixel map from a file.
///
/// # Errors
///
/// Returns [`PnmError::Io`] if the file cannot be opened or read, and
/// the [`parse`] errors for malformed content.
pub fn read<P: AsRef<Path>>(path: P) -> PnmResult<Raster> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Reads a plain-text pixel map from any buffered reader.
pub fn decode<R: BufRead>(mut reader: R) -> PnmResult<Raster> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

/// Parses a plain-text pixel map.
///
/// # Errors
///
/// - [`PnmError::InvalidHeader`] if a header field is missing,
///   width/height is not a positive integer, or the declared pixel
///   count overflows the address space
/// - [`PnmError::Malformed`] if a channel token is not an integer in
///   `[0, 255]`
/// - [`PnmError::Truncated`] if the token stream ends before
///   `width * height * 3` channel values were read
///
/// # Example
///
/// ```
/// use morph_io::pnm;
/// use morph_core::Rgb8;
///
/// let img = pnm::parse("P3 2 2 255  255 0 0  0 255 0  0 0 255  255 255 255").unwrap();
/// assert_eq!(img.pixel(0, 0), Rgb8::new(255, 0, 0));
/// assert_eq!(img.pixel(1, 1), Rgb8::WHITE);
/// ```
pub fn parse(text: &str) -> PnmResult<Raster> {
    let mut tokens = tokens(text);

    // Tag is required to be present so the stream lines up, but its
    // value is not interpreted.
    tokens
        .next()
        .ok_or_else(|| PnmError::invalid_header("missing format tag"))?;

    let width = read_dimension(&mut tokens, "width")?;
    let height = read_dimension(&mut tokens, "height")?;

    tokens
        .next()
        .ok_or_else(|| PnmError::invalid_header("missing maximum channel value"))?;

    // Header dimensions are untrusted: the product can overflow and
    // even a valid product can dwarf the actual token stream, so the
    // up-front reservation is capped and the vector grows as tokens
    // actually arrive.
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(3))
        .ok_or_else(|| {
            PnmError::invalid_header(format!("pixel count overflows for {width}x{height}"))
        })?;
    let mut channels = Vec::with_capacity(expected.min(1 << 20));
    for token in tokens.by_ref().take(expected) {
        let value: u8 = token.parse().map_err(|_| {
            PnmError::malformed(format!("channel value '{token}' is not in [0, 255]"))
        })?;
        channels.push(value);
    }
    if channels.len() < expected {
        return Err(PnmError::Truncated {
            expected,
            got: channels.len(),
        });
    }

    let pixels = channels
        .chunks_exact(3)
        .map(|c| Rgb8::new(c[0], c[1], c[2]))
        .collect();
    // Dimensions are validated above, so this cannot fail.
    Raster::from_pixels(width, height, pixels)
        .map_err(|e| PnmError::invalid_header(e.to_string()))
}

/// Writes a raster as a plain-text pixel map file.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> PnmResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Writes a raster as plain-text PPM to any writer.
///
/// Output layout: `P3`, then `width height`, then the maximum channel
/// value, then one text line per pixel row.
pub fn encode<W: Write>(writer: &mut W, image: &Raster) -> PnmResult<()> {
    writeln!(writer, "{PLAIN_MAGIC}")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "{MAX_VALUE}")?;
    for row in image.rows() {
        let mut line = String::with_capacity(row.len() * 12);
        for (i, px) in row.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{} {} {}", px.r, px.g, px.b));
        }
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Tokenizes pixel-map text: whitespace-delimited, `#` comments run
/// to end of line.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        })
        .flat_map(|line| line.split_ascii_whitespace())
}

fn read_dimension<'a, I>(tokens: &mut I, field: &str) -> PnmResult<u32>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| PnmError::invalid_header(format!("missing {field}")))?;
    let value: i64 = token
        .parse()
        .map_err(|_| PnmError::invalid_header(format!("{field} '{token}' is not an integer")))?;
    if value < 1 || value > u32::MAX as i64 {
        return Err(PnmError::invalid_header(format!(
            "{field} must be a positive integer, got {value}"
        )));
    }
    Ok(value as u32)
}
