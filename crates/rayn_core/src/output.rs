//! Raster encoders for finished framebuffers.
//!
//! Two formats are supported:
//!
//! - **PPM** (ASCII "P3"): header then one `r g b` line per pixel, top row first.
//! - **BMP** (24-bit BGR): 54-byte header then rows bottom first, each padded
//!   to a multiple of four bytes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::{Color, ConfigError, Framebuffer, RowOrder};

/// Errors that can occur while reading or writing images.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed PPM: {0}")]
    MalformedPpm(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Ppm,
    Bmp,
}

impl ImageFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Bmp => "bmp",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ppm" => Ok(ImageFormat::Ppm),
            "bmp" => Ok(ImageFormat::Bmp),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Size of the BMP file header plus BITMAPINFOHEADER.
const BMP_HEADER_SIZE: u32 = 54;

/// Bytes of zero padding after each BMP row of `width` pixels.
pub fn bmp_row_padding(width: u32) -> u32 {
    (4 - (width * 3) % 4) % 4
}

/// Write a framebuffer as ASCII PPM.
pub fn write_ppm<W: Write>(fb: &Framebuffer, out: &mut W) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", fb.width(), fb.height())?;
    writeln!(out, "255")?;

    for (_, row) in fb.rows(RowOrder::TopDown) {
        for c in row {
            writeln!(out, "{} {} {}", c.r, c.g, c.b)?;
        }
    }
    Ok(())
}

/// Write a framebuffer as a 24-bit uncompressed BMP.
pub fn write_bmp<W: Write>(fb: &Framebuffer, out: &mut W) -> io::Result<()> {
    let padding = bmp_row_padding(fb.width());
    let image_size = (3 * fb.width() + padding) * fb.height();
    let file_size = BMP_HEADER_SIZE + image_size;

    // File header
    out.write_all(b"BM")?;
    out.write_all(&file_size.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?; // reserved
    out.write_all(&BMP_HEADER_SIZE.to_le_bytes())?; // pixel data offset

    // BITMAPINFOHEADER
    out.write_all(&40u32.to_le_bytes())?;
    out.write_all(&fb.width().to_le_bytes())?;
    out.write_all(&fb.height().to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?; // planes
    out.write_all(&24u16.to_le_bytes())?; // bits per pixel
    out.write_all(&[0u8; 24])?; // no compression, default resolution and palette

    let pad = [0u8; 3];
    for (_, row) in fb.rows(RowOrder::BottomUp) {
        for c in row {
            out.write_all(&c.bgr())?;
        }
        out.write_all(&pad[..padding as usize])?;
    }
    Ok(())
}

/// Encode a framebuffer and write it to `path`.
pub fn save(fb: &Framebuffer, format: ImageFormat, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);

    match format {
        ImageFormat::Ppm => write_ppm(fb, &mut out)?,
        ImageFormat::Bmp => write_bmp(fb, &mut out)?,
    }
    out.flush()?;

    log::debug!(
        "Wrote {}x{} {} to {}",
        fb.width(),
        fb.height(),
        format.extension(),
        path.display()
    );
    Ok(())
}

/// Parse an ASCII "P3" image with a maximum channel value of 255.
///
/// Rows in the file are top first; the returned framebuffer uses the usual
/// bottom-first layout.
pub fn parse_ppm(text: &str) -> OutputResult<Framebuffer> {
    let malformed = |what: &str| OutputError::MalformedPpm(what.to_string());

    let mut tokens = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace);

    if tokens.next() != Some("P3") {
        return Err(malformed("missing P3 magic"));
    }

    let mut number = |what: &str| -> OutputResult<u32> {
        tokens
            .next()
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or_else(|| malformed(what))
    };

    let width = number("width")?;
    let height = number("height")?;
    if number("max value")? != 255 {
        return Err(malformed("max value must be 255"));
    }

    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| malformed("image dimensions overflow"))?;
    // Sized by the pixel data actually read, never by the header
    let mut top_down = Vec::new();
    for _ in 0..count {
        let r = number("red channel")?;
        let g = number("green channel")?;
        let b = number("blue channel")?;
        if r > 255 || g > 255 || b > 255 {
            return Err(malformed("channel out of range"));
        }
        top_down.push(Color::new(r as u8, g as u8, b as u8));
    }

    let pixels = if width == 0 {
        Vec::new()
    } else {
        top_down
            .chunks(width as usize)
            .rev()
            .flatten()
            .copied()
            .collect()
    };

    Framebuffer::from_pixels(width, height, pixels).ok_or_else(|| malformed("pixel count"))
}
