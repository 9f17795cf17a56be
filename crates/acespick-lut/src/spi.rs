//! Sony Pictures Imageworks LUT formats (SPI1D, SPI3D).
//!
//! These are the flat-text formats OpenColorIO ships its official ACES
//! transforms in.
//!
//! # SPI3D Format
//!
//! ```text
//! SPILUT 1.0
//! 3 3
//! 32 32 32
//! 0 0 0 0.000000 0.000000 0.000000
//! 1 0 0 0.033333 0.000000 0.000000
//! ...
//! ```
//!
//! Each data line carries grid coordinates followed by the output
//! triple, so lines may appear in any order.
//!
//! # SPI1D Format
//!
//! ```text
//! Version 1
//! From 0.0 1.0
//! Length 1024
//! Components 1
//! {
//!   0.000000
//!   0.001000
//!   ...
//! }
//! ```

use crate::{Lut1D, Lut3D, LutError, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads an SPI3D file from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the header is
/// malformed.
pub fn read_spi3d(path: &Path) -> LutResult<Lut3D> {
    let file = File::open(path)?;
    parse_spi3d(BufReader::new(file))
}

/// Parses SPI3D text from a reader.
///
/// The header must be exactly `SPILUT 1.0`, then `3 3`, then three
/// equal positive grid sizes. Data lines with fewer than six tokens are
/// skipped; the three leading integers are grid coordinates, not a
/// stream position, so the value lands at its derived index regardless
/// of line order. Duplicate coordinates overwrite silently;
/// out-of-range coordinates are dropped.
///
/// If fewer than `size^3` entries are present at end of input the table
/// is still returned with the missing nodes zero-filled, and a warning
/// is logged. That is a recoverable condition, not a parse failure.
pub fn parse_spi3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    let mut header_line = 0usize;
    let mut size = 0usize;
    let mut total = 0usize;
    let mut data: Vec<f32> = Vec::new();
    let mut entries_read = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // Blank lines and comments are ignored anywhere
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if header_line < 3 {
            match header_line {
                0 => {
                    if line != "SPILUT 1.0" {
                        return Err(LutError::Format(format!(
                            "invalid spi3d magic line: {line:?}"
                        )));
                    }
                }
                1 => {
                    if line != "3 3" {
                        return Err(LutError::Format(format!(
                            "unexpected spi3d dimension line: {line:?}"
                        )));
                    }
                }
                _ => {
                    let sizes: Vec<usize> = line
                        .split_whitespace()
                        .map(str::parse)
                        .collect::<Result<_, _>>()
                        .map_err(|_| {
                            LutError::Format(format!("invalid spi3d size line: {line:?}"))
                        })?;
                    if sizes.len() != 3 || sizes[0] != sizes[1] || sizes[1] != sizes[2] {
                        return Err(LutError::Format(
                            "non-uniform LUT size is not supported".into(),
                        ));
                    }
                    if sizes[0] < 2 {
                        return Err(LutError::Format(format!(
                            "spi3d grid size must be >= 2, got {}",
                            sizes[0]
                        )));
                    }
                    size = sizes[0];
                    total = size * size * size;
                    data = vec![0.0f32; total * 3];
                }
            }
            header_line += 1;
            continue;
        }

        if entries_read == total {
            break;
        }

        // Data line: "r g b R G B"
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 6 {
            continue;
        }

        let (Ok(ri), Ok(gi), Ok(bi)) = (
            parts[0].parse::<usize>(),
            parts[1].parse::<usize>(),
            parts[2].parse::<usize>(),
        ) else {
            continue;
        };
        if ri >= size || gi >= size || bi >= size {
            continue;
        }

        let idx = (bi * size * size + gi * size + ri) * 3;
        data[idx] = parts[3].parse().unwrap_or(0.0);
        data[idx + 1] = parts[4].parse().unwrap_or(0.0);
        data[idx + 2] = parts[5].parse().unwrap_or(0.0);
        entries_read += 1;
    }

    if header_line < 3 {
        return Err(LutError::Format("truncated spi3d header".into()));
    }
    if entries_read < total {
        tracing::warn!(
            expected = total,
            read = entries_read,
            "spi3d data incomplete, missing nodes are zero-filled"
        );
    }

    Lut3D::from_data(data, size)
}

/// Reads an SPI1D file from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or no data block is
/// found.
pub fn read_spi1d(path: &Path) -> LutResult<Lut1D> {
    let file = File::open(path)?;
    parse_spi1d(BufReader::new(file))
}

/// Parser position within an SPI1D file.
enum Section {
    Header,
    Data,
    Done,
}

/// Parses SPI1D text from a reader.
///
/// Header keywords (`Version`, `From`, `Length`, `Components`) may
/// appear in any order before the opening brace; unrecognized lines are
/// ignored. The data block fills exactly `Length * Components` values;
/// extras beyond that count are ignored, a shortfall leaves the
/// remainder zero.
///
/// # Errors
///
/// Fails with [`LutError::Format`] if no data block is found or the
/// block contains no values.
pub fn parse_spi1d<R: BufRead>(reader: R) -> LutResult<Lut1D> {
    let mut domain_min = 0.0f32;
    let mut domain_max = 1.0f32;
    let mut length = 0usize;
    let mut components = 1usize;

    let mut section = Section::Header;
    let mut data: Vec<f32> = Vec::new();
    let mut filled = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match section {
            Section::Header => {
                if line == "{" {
                    data = vec![0.0f32; length * components];
                    section = Section::Data;
                    continue;
                }

                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts[0].to_lowercase().as_str() {
                    "version" => {}
                    "from" if parts.len() >= 3 => {
                        domain_min = parts[1].parse().unwrap_or(0.0);
                        domain_max = parts[2].parse().unwrap_or(1.0);
                    }
                    "length" if parts.len() >= 2 => {
                        length = parts[1].parse().unwrap_or(0);
                    }
                    "components" if parts.len() >= 2 => {
                        components = parts[1].parse().unwrap_or(1);
                    }
                    _ => {} // unrecognized header lines are ignored
                }
            }
            Section::Data => {
                if line == "}" {
                    section = Section::Done;
                    continue;
                }
                for token in line.split_whitespace() {
                    if filled == data.len() {
                        break;
                    }
                    if let Ok(v) = token.parse::<f32>() {
                        data[filled] = v;
                        filled += 1;
                    }
                }
            }
            Section::Done => break,
        }
    }

    if matches!(section, Section::Header) {
        return Err(LutError::Format("no spi1d data block found".into()));
    }
    if filled == 0 {
        return Err(LutError::Format("spi1d data block is empty".into()));
    }

    Lut1D::from_parts(data, length, components, domain_min, domain_max)
}
