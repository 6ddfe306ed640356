//! CLI command implementations

pub mod batch;
pub mod file;
pub mod remap;
pub mod tables;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;
use vat_math::{
    swizzle_quaternion_slice, swizzle_vector3_slice, swizzle_vector4_slice, Vec3, Vec4,
};

/// What each line of a vector file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// x,y,z positions or directions
    Vec3,
    /// x,y,z,w packed vectors
    Vec4,
    /// x,y,z,w quaternions
    Quat,
}

impl Kind {
    /// Number of components per line.
    pub fn arity(self) -> usize {
        match self {
            Self::Vec3 => 3,
            Self::Vec4 | Self::Quat => 4,
        }
    }
}

/// Parses exactly `N` floats separated by commas and/or whitespace.
pub fn parse_components<const N: usize>(text: &str) -> Result<[f32; N]> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    if parts.len() != N {
        bail!("Expected {} components, got {} in '{}'", N, parts.len(), text.trim());
    }

    let mut out = [0.0f32; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("Invalid number '{}'", part))?;
    }
    Ok(out)
}

/// Parses a finite 3-vector.
pub fn parse_vec3(text: &str) -> Result<Vec3> {
    let v = Vec3::from_array(parse_components::<3>(text)?);
    if !v.is_finite() {
        bail!("Non-finite component in '{}'", text.trim());
    }
    Ok(v)
}

/// Parses a finite 4-vector or quaternion.
pub fn parse_vec4(text: &str) -> Result<Vec4> {
    let v = Vec4::from_array(parse_components::<4>(text)?);
    if !v.is_finite() {
        bail!("Non-finite component in '{}'", text.trim());
    }
    Ok(v)
}

/// Formats components as a comma-separated line.
///
/// Negative zero prints as `0`; a flipped zero is still zero.
pub fn format_components(values: &[f32]) -> String {
    values
        .iter()
        .map(|&v| if v == 0.0 { 0.0f32 } else { v })
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Remaps every vector in `text`, one per line.
///
/// Blank lines and lines starting with `#` are skipped and do not appear
/// in the output.
pub fn remap_text(text: &str, kind: Kind, swizzle: i32, flip: i32) -> Result<String> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .collect();

    debug!(lines = lines.len(), ?kind, swizzle, flip, "remap_text");

    let rows: Vec<Vec<f32>> = match kind {
        Kind::Vec3 => {
            let mut coords = lines
                .iter()
                .map(|(n, l)| parse_vec3(l).with_context(|| format!("Line {}", n)))
                .collect::<Result<Vec<_>>>()?;
            swizzle_vector3_slice(&mut coords, swizzle, flip)?;
            coords.iter().map(|v| v.to_array().to_vec()).collect()
        }
        Kind::Vec4 | Kind::Quat => {
            let mut coords = lines
                .iter()
                .map(|(n, l)| parse_vec4(l).with_context(|| format!("Line {}", n)))
                .collect::<Result<Vec<_>>>()?;
            if kind == Kind::Quat {
                swizzle_quaternion_slice(&mut coords, flip)?;
            } else {
                swizzle_vector4_slice(&mut coords, swizzle, flip)?;
            }
            coords.iter().map(|v| v.to_array().to_vec()).collect()
        }
    };

    let mut out = String::new();
    for row in &rows {
        out.push_str(&format_components(row));
        out.push('\n');
    }
    Ok(out)
}

/// Reads all of `reader` as UTF-8 text.
fn read_text(mut reader: impl Read, what: &str) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read {}", what))?;
    Ok(text)
}

/// Writes `text` to `writer` and flushes it.
fn write_text(mut writer: impl Write, text: &str, what: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write {}", what))
}

/// Reads a text file, or stdin for `-`.
pub fn load_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return read_text(std::io::stdin().lock(), "stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Writes a text file, or stdout for `-`.
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        return write_text(std::io::stdout().lock(), text, "stdout");
    }
    std::fs::write(path, text).with_context(|| format!("Failed to save: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components_separators() {
        assert_eq!(parse_components::<3>("1,2,3").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(parse_components::<3>(" 1, -2.5  3 ").unwrap(), [1.0, -2.5, 3.0]);
        assert_eq!(parse_components::<4>("0\t0\t0\t1").unwrap(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_parse_components_errors() {
        assert!(parse_components::<3>("1,2").is_err());
        assert!(parse_components::<3>("1,2,3,4").is_err());
        assert!(parse_components::<3>("1,two,3").is_err());
    }

    #[test]
    fn test_parse_vec_rejects_non_finite() {
        assert!(parse_vec3("1,NaN,3").is_err());
        assert!(parse_vec3("inf,0,0").is_err());
        assert!(parse_vec4("0,0,0,-inf").is_err());
        assert_eq!(parse_vec4("0,0,0,1").unwrap(), Vec4::IDENTITY_QUAT);
    }

    #[test]
    fn test_format_components() {
        assert_eq!(format_components(&[-2.0, 3.0, 1.5]), "-2,3,1.5");
    }

    #[test]
    fn test_format_components_negative_zero() {
        assert_eq!(format_components(&[-0.0, 0.0, -1.0]), "0,0,-1");
    }

    #[test]
    fn test_remap_text_vec3() {
        let text = "# positions\n1,2,3\n\n4 5 6\n";
        let out = remap_text(text, Kind::Vec3, 3, 1).unwrap();
        assert_eq!(out, "-2,3,1\n-5,6,4\n");
    }

    #[test]
    fn test_remap_text_flipped_zero() {
        let out = remap_text("0,0,1\n", Kind::Vec3, 0, 1).unwrap();
        assert_eq!(out, "0,0,1\n");
    }

    #[test]
    fn test_remap_text_vec4_and_quat() {
        let out = remap_text("1,2,3,4\n", Kind::Vec4, 5, 6).unwrap();
        assert_eq!(out, "-3,-2,3,4\n");

        let out = remap_text("1,2,3,4\n", Kind::Quat, 0, 12).unwrap();
        assert_eq!(out, "1,2,-3,-4\n");
    }

    #[test]
    fn test_remap_text_reports_line() {
        let err = remap_text("1,2,3\n1,2\n", Kind::Vec3, 0, 0).unwrap_err();
        assert!(format!("{:#}", err).contains("Line 2"));

        let err = remap_text("1,2,3\n\nnan,2,3\n", Kind::Vec3, 0, 0).unwrap_err();
        assert!(format!("{:#}", err).contains("Line 3"));
    }

    #[test]
    fn test_remap_text_bad_code() {
        let err = remap_text("1,2,3\n", Kind::Vec3, 0, 8).unwrap_err();
        assert!(err.to_string().contains("axis flip code"));
    }

    #[test]
    fn test_stream_roundtrip() {
        let input = std::io::Cursor::new("1,2,3\n0,0,1\n");
        let text = read_text(input, "stdin").unwrap();
        let out = remap_text(&text, Kind::Vec3, 0, 1).unwrap();

        let mut sink = Vec::new();
        write_text(&mut sink, &out, "stdout").unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "-1,2,3\n0,0,1\n");
    }

    #[test]
    fn test_load_save_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.txt");
        save_text(&path, "1,2,3\n").unwrap();
        assert_eq!(load_text(&path).unwrap(), "1,2,3\n");
        assert!(load_text(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_kind_arity() {
        assert_eq!(Kind::Vec3.arity(), 3);
        assert_eq!(Kind::Quat.arity(), 4);
    }
}
