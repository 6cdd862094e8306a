//! Curve serialization.
//!
//! Two text formats:
//!
//! - `.cube` - 1D LUT with 256 normalized entries, readable by Resolve,
//!   Adobe applications and most grading tools
//! - CSV - `index,value` pairs with the raw 8-bit table values
//!
//! # Example
//!
//! ```rust,ignore
//! use histmatch_curve::{export, Curve};
//!
//! let curve = Curve::identity();
//! export::save_cube(&curve, "curve.cube")?;
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::curve::Curve;
use crate::error::CurveResult;

/// Writes the curve as a 1D `.cube` LUT.
///
/// Table values are normalized to `[0, 1]` and repeated across the three
/// color columns, since the curve describes a single channel.
pub fn write_cube<W: Write>(curve: &Curve, mut writer: W) -> CurveResult<()> {
    writeln!(writer, "TITLE \"histmatch curve\"")?;
    writeln!(writer, "LUT_1D_SIZE {}", Curve::SIZE)?;
    for &v in curve.values() {
        let n = v as f32 / 255.0;
        writeln!(writer, "{n:.6} {n:.6} {n:.6}")?;
    }
    Ok(())
}

/// Writes the curve as CSV `index,value` lines with a header row.
pub fn write_csv<W: Write>(curve: &Curve, mut writer: W) -> CurveResult<()> {
    writeln!(writer, "input,output")?;
    for (i, &v) in curve.values().iter().enumerate() {
        writeln!(writer, "{i},{v}")?;
    }
    Ok(())
}

/// Writes the curve as a 1D `.cube` LUT file.
pub fn save_cube<P: AsRef<Path>>(curve: &Curve, path: P) -> CurveResult<()> {
    let file = File::create(path.as_ref())?;
    write_cube(curve, BufWriter::new(file))
}

/// Writes the curve as a CSV file.
pub fn save_csv<P: AsRef<Path>>(curve: &Curve, path: P) -> CurveResult<()> {
    let file = File::create(path.as_ref())?;
    write_csv(curve, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_header_and_entry_count() {
        let mut out = Vec::new();
        write_cube(&Curve::identity(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("TITLE \"histmatch curve\""));
        assert_eq!(lines.next(), Some("LUT_1D_SIZE 256"));
        assert_eq!(lines.count(), 256);
        assert!(text.lines().last().unwrap().starts_with("1.000000"));
    }

    #[test]
    fn test_csv_rows() {
        let mut out = Vec::new();
        write_csv(&Curve::constant(65), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().next(), Some("input,output"));
        assert_eq!(text.lines().nth(1), Some("0,65"));
        assert_eq!(text.lines().last(), Some("255,65"));
        assert_eq!(text.lines().count(), 257);
    }
}
