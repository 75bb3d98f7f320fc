//! .hmap text heightmap loader.
//!
//! Layout:
//!
//! ```text
//! HMAP 1
//! cells 32 border 8
//! <side rows of side whitespace-separated samples>
//! ```
//!
//! where `side = cells + 1 + 2 * border`. Blank lines and lines starting
//! with `#` are ignored.

use std::path::Path;

use thiserror::Error;

use crate::grid::TerrainGrid;

/// .hmap magic word.
const HMAP_MAGIC: &str = "HMAP";

/// Current format version.
const HMAP_VERSION: u32 = 1;

/// The island shipped with the game.
const BUNDLED_ISLAND: &str = include_str!("../assets/island.hmap");

#[derive(Debug, Error)]
pub enum HeightmapError {
    #[error("failed to read heightmap: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing .hmap header")]
    MissingHeader,
    #[error("invalid .hmap magic: {0:?}")]
    BadMagic(String),
    #[error("unsupported .hmap version: {0}")]
    UnsupportedVersion(String),
    #[error("malformed dimensions line: {0:?}")]
    BadDimensions(String),
    #[error("line {line}: invalid sample {token:?}")]
    InvalidSample { line: usize, token: String },
    #[error("expected {expected} samples, found {found}")]
    SampleCount { expected: usize, found: usize },
}

/// Load a TerrainGrid from a .hmap file.
pub fn load_hmap(path: &Path) -> Result<TerrainGrid, HeightmapError> {
    let text = std::fs::read_to_string(path)?;
    let grid = parse_hmap(&text)?;
    log::info!(
        "Loaded heightmap {} ({} cells, border {})",
        path.display(),
        grid.cells(),
        grid.border()
    );
    Ok(grid)
}

/// The built-in island.
pub fn bundled_island() -> Result<TerrainGrid, HeightmapError> {
    parse_hmap(BUNDLED_ISLAND)
}

/// Parse a .hmap from text.
pub fn parse_hmap(text: &str) -> Result<TerrainGrid, HeightmapError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(n, l)| (n + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    // Header
    let (_, header) = lines.next().ok_or(HeightmapError::MissingHeader)?;
    let mut words = header.split_whitespace();
    let magic = words.next().unwrap_or_default();
    if magic != HMAP_MAGIC {
        return Err(HeightmapError::BadMagic(magic.to_string()));
    }
    let version = words.next().unwrap_or_default();
    if version.parse::<u32>().ok() != Some(HMAP_VERSION) {
        return Err(HeightmapError::UnsupportedVersion(version.to_string()));
    }

    let (_, dims) = lines.next().ok_or(HeightmapError::MissingHeader)?;
    let (cells, border) =
        parse_dimensions(dims).ok_or_else(|| HeightmapError::BadDimensions(dims.to_string()))?;

    // Samples
    let side = TerrainGrid::side_for(cells, border) as usize;
    let expected = side * side;
    let mut samples = Vec::with_capacity(expected);
    for (line, row) in lines {
        for token in row.split_whitespace() {
            let value = token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| HeightmapError::InvalidSample {
                    line,
                    token: token.to_string(),
                })?;
            samples.push(value);
        }
    }

    if samples.len() != expected {
        return Err(HeightmapError::SampleCount {
            expected,
            found: samples.len(),
        });
    }

    Ok(TerrainGrid::from_parts(cells, border, samples))
}

/// `cells <n> border <m>` with `n` even and non-zero.
fn parse_dimensions(line: &str) -> Option<(u32, u32)> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["cells", cells, "border", border] => {
            let cells: u32 = cells.parse().ok()?;
            let border: u32 = border.parse().ok()?;
            (cells > 0 && cells % 2 == 0).then_some((cells, border))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_hmap() -> String {
        let mut text = String::from("HMAP 1\n# two cells, one ring\ncells 2 border 1\n");
        for row in 0..5 {
            let values: Vec<String> = (0..5).map(|col| format!("{}", row * 5 + col)).collect();
            text.push_str(&values.join(" "));
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_parse_round_trip_values() {
        let grid = parse_hmap(&tiny_hmap()).unwrap();
        assert_eq!(grid.cells(), 2);
        assert_eq!(grid.border(), 1);
        assert_eq!(grid.side(), 5);
        // Visible (0, 0) is stored at row 1, col 1.
        assert_eq!(grid.sample(0, 0), 6.0);
        assert_eq!(grid.sample(-1, -1), 0.0);
        assert_eq!(grid.sample(3, 3), 24.0);
    }

    #[test]
    fn test_invalid_magic() {
        let err = parse_hmap("DTRN 1\ncells 2 border 1\n").unwrap_err();
        assert!(matches!(err, HeightmapError::BadMagic(ref m) if m == "DTRN"));
    }

    #[test]
    fn test_unsupported_version() {
        let err = parse_hmap("HMAP 9\ncells 2 border 1\n").unwrap_err();
        assert!(matches!(err, HeightmapError::UnsupportedVersion(_)));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_hmap(""), Err(HeightmapError::MissingHeader)));
        assert!(matches!(
            parse_hmap("HMAP 1\n"),
            Err(HeightmapError::MissingHeader)
        ));
    }

    #[test]
    fn test_bad_dimensions() {
        let err = parse_hmap("HMAP 1\ncells 3 border 1\n").unwrap_err();
        assert!(matches!(err, HeightmapError::BadDimensions(_)));
        let err = parse_hmap("HMAP 1\nwidth 4\n").unwrap_err();
        assert!(matches!(err, HeightmapError::BadDimensions(_)));
    }

    #[test]
    fn test_truncated_samples() {
        let text = "HMAP 1\ncells 2 border 1\n0 0 0 0 0\n";
        let err = parse_hmap(text).unwrap_err();
        assert!(matches!(
            err,
            HeightmapError::SampleCount {
                expected: 25,
                found: 5
            }
        ));
    }

    #[test]
    fn test_invalid_sample_reports_line() {
        let mut text = tiny_hmap();
        text.push_str("oops\n");
        let err = parse_hmap(&text).unwrap_err();
        assert!(matches!(err, HeightmapError::InvalidSample { line: 9, .. }), "got {err}");
    }

    #[test]
    fn test_bundled_island() {
        let grid = bundled_island().unwrap();
        assert_eq!(grid.cells(), 32);
        assert_eq!(grid.border(), 8);
        assert_eq!(grid.side(), 49);
        assert_eq!(grid.max_elevation(), 5.0);
        assert_eq!(grid.min_elevation(), 0.0);
        // The fort sits on the summit.
        assert_eq!(grid.sample(16, 16), 5.0);
        // The island is surrounded by sea-level samples.
        assert_eq!(grid.sample(0, 0), 0.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_hmap(Path::new("/definitely/not/here.hmap")).unwrap_err();
        assert!(matches!(err, HeightmapError::Io(_)));
    }
}
