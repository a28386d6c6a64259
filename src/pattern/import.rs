//! Parsers for the two pattern dialects and placement onto the grid

use super::{Offset, PatternFormat};
use crate::engine::{Grid, Topology};
use crate::error::LifeError;
use anyhow::{Context, Result};
use std::path::Path;

/// Import a pattern source into the grid, returning the number of cells
/// placed
///
/// The dialect is detected from the header line. Every live cell's file
/// coordinate is shifted by `offset` and folded through `topology`; under
/// the flat boundary a coordinate outside the grid aborts the import with
/// `OutOfBounds`.
pub fn import_pattern(
    text: &str,
    topology: Topology,
    offset: Offset,
    grid: &mut Grid,
) -> Result<usize, LifeError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(LifeError::UnknownFormat)?;
    match PatternFormat::detect(header)? {
        PatternFormat::Life105 => import_life_105(lines, topology, offset, grid),
        PatternFormat::Life106 => import_life_106(lines, topology, offset, grid),
    }
}

/// Read a pattern file and import it
pub fn import_pattern_file<P: AsRef<Path>>(
    path: P,
    topology: Topology,
    offset: Offset,
    grid: &mut Grid,
) -> Result<usize> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;
    import_pattern(&text, topology, offset, grid)
        .with_context(|| format!("Failed to import pattern from {}", path.display()))
}

/// Life 1.06: one `x y` coordinate pair per body line
fn import_life_106<'a>(
    lines: impl Iterator<Item = &'a str>,
    topology: Topology,
    offset: Offset,
    grid: &mut Grid,
) -> Result<usize, LifeError> {
    let mut placed = 0;
    for (index, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (x, y) = parse_pair(trimmed).ok_or_else(|| LifeError::MalformedPattern {
            // the header occupies line 1
            line: index + 2,
            content: line.to_string(),
        })?;
        place_cell(grid, topology, x + offset.x, y + offset.y)?;
        placed += 1;
    }
    Ok(placed)
}

/// Life 1.05: `#P x y` block markers and `.`/`*` glyph rows
///
/// An in-file `#P` marker re-anchors the block origin only when the caller
/// offset is exactly (0,0); the local row counter resets on every marker
/// regardless. A glyph row is scanned up to a terminating carriage return,
/// `*` places a live cell, every other glyph is dead.
fn import_life_105<'a>(
    lines: impl Iterator<Item = &'a str>,
    topology: Topology,
    offset: Offset,
    grid: &mut Grid,
) -> Result<usize, LifeError> {
    let mut anchor = offset;
    let mut local_row: i64 = 0;
    let mut placed = 0;

    for line in lines {
        if line.starts_with("#P") {
            if offset.is_zero() {
                if let Some((x, y)) = parse_pair(line[2..].trim()) {
                    anchor = Offset::new(x, y);
                }
            }
            local_row = 0;
        } else if line.starts_with('.') || line.starts_with('*') {
            for (col, glyph) in line.chars().take_while(|&g| g != '\r').enumerate() {
                if glyph == '*' {
                    place_cell(grid, topology, col as i64 + anchor.x, local_row + anchor.y)?;
                    placed += 1;
                }
            }
            local_row += 1;
        }
        // anything else (#D descriptions, blank lines) carries no cells
    }
    Ok(placed)
}

/// Parse exactly two whitespace-separated signed integers
fn parse_pair(s: &str) -> Option<(i64, i64)> {
    let mut parts = s.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Fold an absolute pattern coordinate through the topology and set the cell
fn place_cell(grid: &mut Grid, topology: Topology, x: i64, y: i64) -> Result<(), LifeError> {
    let (col, row) = topology.fold_coordinate(x, y, grid.rows(), grid.cols())?;
    grid.set(row, col, true)
}

/// Seed the fallback starting state used when no pattern source is supplied:
/// three cells in a row near the top-left corner
pub fn seed_default(grid: &mut Grid) -> Result<(), LifeError> {
    for col in 0..3 {
        grid.set(1, col, true)?;
    }
    Ok(())
}

/// Write example pattern files in both dialects, for scaffolding and tests
pub fn create_example_patterns<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let glider_106 = "#Life 1.06\n1 0\n2 1\n0 2\n1 2\n2 2\n";
    std::fs::write(dir.join("glider_106.lif"), glider_106)
        .context("Failed to write glider_106.lif")?;

    let glider_105 = "#Life 1.05\r\n#D Glider\r\n#P 0 0\r\n.*.\r\n..*\r\n***\r\n";
    std::fs::write(dir.join("glider_105.lif"), glider_105)
        .context("Failed to write glider_105.lif")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dead_grid(rows: usize, cols: usize) -> Grid {
        Grid::new(rows, cols).unwrap()
    }

    #[test]
    fn test_life_106_import_with_offset() {
        let mut grid = dead_grid(10, 10);
        let text = "#Life 1.06\n0 0\n1 0\n2 0\n";
        let placed =
            import_pattern(text, Topology::Flat, Offset::new(5, 5), &mut grid).unwrap();
        assert_eq!(placed, 3);
        // (x, y) file coordinates land on (row y, col x)
        assert_eq!(grid.live_cells(), vec![(5, 5), (5, 6), (5, 7)]);
    }

    #[test]
    fn test_life_106_header_only_leaves_grid_dead() {
        let mut grid = dead_grid(8, 8);
        let placed =
            import_pattern("#Life 1.06\n", Topology::Flat, Offset::default(), &mut grid).unwrap();
        assert_eq!(placed, 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_life_106_negative_coordinates_fold_on_torus() {
        let mut grid = dead_grid(4, 6);
        let text = "#Life 1.06\n-1 -1\n";
        import_pattern(text, Topology::Torus, Offset::default(), &mut grid).unwrap();
        assert_eq!(grid.live_cells(), vec![(3, 5)]);
    }

    #[test]
    fn test_life_106_klein_placement_reflects_row() {
        let mut grid = dead_grid(4, 6);
        let text = "#Life 1.06\n6 1\n";
        import_pattern(text, Topology::Klein, Offset::default(), &mut grid).unwrap();
        assert_eq!(grid.live_cells(), vec![(2, 0)]);
    }

    #[test]
    fn test_life_106_out_of_bounds_is_fatal_on_flat() {
        let mut grid = dead_grid(5, 5);
        let text = "#Life 1.06\n4 4\n9 9\n";
        let result = import_pattern(text, Topology::Flat, Offset::default(), &mut grid);
        assert!(matches!(result, Err(LifeError::OutOfBounds { x: 9, y: 9 })));
    }

    #[test]
    fn test_life_106_malformed_line_reports_position() {
        let mut grid = dead_grid(5, 5);
        let text = "#Life 1.06\n1 1\nnot a pair\n";
        let result = import_pattern(text, Topology::Flat, Offset::default(), &mut grid);
        match result {
            Err(LifeError::MalformedPattern { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "not a pair");
            }
            other => panic!("expected MalformedPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_imports_nothing() {
        let mut grid = dead_grid(5, 5);
        for text in ["#Life 1.07\n1 1\n", "#Life\n", ""] {
            let result = import_pattern(text, Topology::Flat, Offset::default(), &mut grid);
            assert!(matches!(result, Err(LifeError::UnknownFormat)));
            assert!(grid.is_empty());
        }
    }

    #[test]
    fn test_life_105_glyph_rows() {
        let mut grid = dead_grid(8, 8);
        let text = "#Life 1.05\n#D Glider\n.*.\n..*\n***\n";
        let placed =
            import_pattern(text, Topology::Flat, Offset::new(2, 3), &mut grid).unwrap();
        assert_eq!(placed, 5);
        assert_eq!(
            grid.live_cells(),
            vec![(3, 3), (4, 4), (5, 2), (5, 3), (5, 4)]
        );
    }

    #[test]
    fn test_life_105_marker_honored_only_at_zero_offset() {
        // Zero caller offset: the #P marker anchors the block
        let mut grid = dead_grid(10, 10);
        let text = "#Life 1.05\n#P 4 5\n*\n";
        import_pattern(text, Topology::Flat, Offset::default(), &mut grid).unwrap();
        assert_eq!(grid.live_cells(), vec![(5, 4)]);

        // Nonzero caller offset: the marker is ignored
        let mut grid = dead_grid(10, 10);
        import_pattern(text, Topology::Flat, Offset::new(1, 1), &mut grid).unwrap();
        assert_eq!(grid.live_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_life_105_marker_resets_local_row() {
        let mut grid = dead_grid(12, 12);
        let text = "#Life 1.05\n#P 0 0\n*\n*\n#P 5 5\n*\n";
        import_pattern(text, Topology::Flat, Offset::default(), &mut grid).unwrap();
        // Two rows of the first block, then the second block's row 0
        assert_eq!(grid.live_cells(), vec![(0, 0), (1, 0), (5, 5)]);
    }

    #[test]
    fn test_life_105_carriage_return_terminates_row() {
        let mut grid = dead_grid(8, 8);
        // A stray carriage return ends the glyph scan before the trailing
        // asterisks
        let text = "#Life 1.05\n***\r**\n";
        let placed =
            import_pattern(text, Topology::Flat, Offset::default(), &mut grid).unwrap();
        assert_eq!(placed, 3);
        assert_eq!(grid.live_cells(), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn test_life_105_wraps_on_torus() {
        let mut grid = dead_grid(4, 6);
        let text = "#Life 1.05\n*\n";
        import_pattern(text, Topology::Torus, Offset::new(-1, -1), &mut grid).unwrap();
        assert_eq!(grid.live_cells(), vec![(3, 5)]);
    }

    #[test]
    fn test_seed_default() {
        let mut grid = dead_grid(5, 5);
        seed_default(&mut grid).unwrap();
        assert_eq!(grid.live_cells(), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_import_pattern_file() {
        let dir = tempdir().unwrap();
        create_example_patterns(dir.path()).unwrap();

        let mut grid = dead_grid(10, 10);
        let placed = import_pattern_file(
            dir.path().join("glider_106.lif"),
            Topology::Flat,
            Offset::new(3, 3),
            &mut grid,
        )
        .unwrap();
        assert_eq!(placed, 5);
        assert_eq!(grid.population(), 5);

        let mut grid = dead_grid(10, 10);
        let placed = import_pattern_file(
            dir.path().join("glider_105.lif"),
            Topology::Flat,
            Offset::new(3, 3),
            &mut grid,
        )
        .unwrap();
        assert_eq!(placed, 5);
        // Both dialects describe the same glider
        assert_eq!(
            grid.live_cells(),
            vec![(3, 4), (4, 5), (5, 3), (5, 4), (5, 5)]
        );
    }

    #[test]
    fn test_missing_pattern_file() {
        let mut grid = dead_grid(5, 5);
        let result = import_pattern_file(
            "no/such/pattern.lif",
            Topology::Flat,
            Offset::default(),
            &mut grid,
        );
        assert!(result.is_err());
    }
}
