//! Binary PPM (P6) output
//!
//! Serializes a row-major RGB byte buffer as a P6 image: the ASCII header
//! `P6\n<width> <height>\n255\n` followed by the raw bytes

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `pixels` (3 bytes per pixel, row-major) to `path` as binary PPM
pub fn write_ppm(path: &Path, width: usize, height: usize, pixels: &[u8]) -> io::Result<()> {
    assert!(
        pixels.len() == 3 * width * height,
        "pixel buffer is {} bytes, expected {}",
        pixels.len(),
        3 * width * height
    );

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    write!(out, "P6\n{} {}\n255\n", width, height)?;
    out.write_all(pixels)?;
    out.flush()
}
