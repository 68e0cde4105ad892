//! Plain-text PPM image output.
//!
//! PPM is the color member of the venerable NetPBM family of image
//! formats. This module emits the P3 sub-format: a textual header
//! followed by one `R G B` triple per pixel, written as decimal values
//! in the 0–255 range. It is the only externally persisted artifact in
//! the whole system.

use alloc::{format, string::String};

#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::util::canvas::Canvas;

/// Longest line the encoder will emit, a limit some PPM readers impose.
const MAX_LINE: usize = 70;

/// Encodes `canvas` as a plain-text (P3) PPM image.
///
/// The header is `P3`, the canvas dimensions, and the maximum channel
/// value 255, each on its own line. Each canvas row is then written as
/// space-separated quantized `R G B` triples, soft-wrapped at space
/// boundaries so that no line exceeds 70 characters. The output always
/// ends with a newline.
pub fn ppm_string(canvas: &Canvas) -> String {
    let mut out =
        format!("P3\n{} {}\n255\n", canvas.width(), canvas.height());

    for row in canvas.rows() {
        let mut len = 0;
        for ch in row.iter().flat_map(|px| px.to_bytes()) {
            let num = format!("{ch}");
            if len == 0 {
                // First value on the line
            } else if len + 1 + num.len() > MAX_LINE {
                out.push('\n');
                len = 0;
            } else {
                out.push(' ');
                len += 1;
            }
            out.push_str(&num);
            len += num.len();
        }
        out.push('\n');
    }
    out
}

/// Writes `canvas` to `out` in PPM format, P3 sub-format.
///
/// # Errors
/// Returns [`std::io::Error`] if an error occurs while writing.
#[cfg(feature = "std")]
pub fn write_ppm(mut out: impl Write, canvas: &Canvas) -> io::Result<()> {
    out.write_all(ppm_string(canvas).as_bytes())?;
    out.flush()
}

/// Writes `canvas` to a file in PPM format, P3 sub-format.
///
/// Caution: This function overwrites the file if it already exists.
///
/// # Errors
/// Returns [`std::io::Error`] if an error occurs while writing.
#[cfg(feature = "std")]
pub fn save_ppm(path: impl AsRef<Path>, canvas: &Canvas) -> io::Result<()> {
    let out = BufWriter::new(File::create(path)?);
    write_ppm(out, canvas)
}
