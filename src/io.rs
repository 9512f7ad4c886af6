// Grid input/output: JSON arrays of rows in, space-separated text out.

use std::fmt;
use std::path::Path;

use anyhow::Context;

use crate::core::GridError;
use crate::grid::Grid;

pub fn load_grid(path: impl AsRef<Path>) -> anyhow::Result<Grid<u8>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading grid file {}", path.display()))?;
    parse_grid(&content).with_context(|| format!("parsing grid file {}", path.display()))
}

/// Parse `[[1,0,1],[0,1,0]]`-style JSON. Ragged input is rejected here so
/// callers never hold a grid that traversal would refuse.
pub fn parse_grid(json: &str) -> anyhow::Result<Grid<u8>> {
    let grid: Grid<u8> = serde_json::from_str(json)?;
    if !grid.is_valid() {
        tracing::warn!(rows = grid.row_count(), "rejecting ragged grid");
        return Err(GridError::InvalidGrid.into());
    }
    Ok(grid)
}

pub fn grid_to_string<T: fmt::Display>(grid: &Grid<T>) -> String {
    grid.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn parses_rectangular_json() {
        let grid = parse_grid("[[1,0,1],[0,1,0]]").unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.get(Position::new(1, 1)), Ok(&1));
    }

    #[test]
    fn empty_array_is_empty_grid() {
        let grid = parse_grid("[]").unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.shape(), (0, 0));
    }

    #[test]
    fn ragged_json_rejected() {
        let err = parse_grid("[[1,0,1],[0,1]]").unwrap_err();
        assert_eq!(err.downcast_ref::<GridError>(), Some(&GridError::InvalidGrid));
    }

    #[test]
    fn out_of_range_cell_rejected() {
        assert!(parse_grid("[[256]]").is_err());
        assert!(parse_grid("[[-1]]").is_err());
        assert!(parse_grid("{\"rows\": []}").is_err());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("floodgrid-load-{}.json", std::process::id()));
        std::fs::write(&path, "[[2,2],[2,3]]").unwrap();
        let grid = load_grid(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(grid_to_string(&grid), "2 2\n2 3");
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_grid("/nonexistent/floodgrid.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/floodgrid.json"));
    }
}
