//! Connected-region search and flood fill over generic 2D grids.
//!
//! ```
//! use floodgrid::{flood_fill, Grid, Position, RegionFinder};
//!
//! let mut grid = Grid::new(vec![
//!     vec![1, 1, 0],
//!     vec![0, 1, 0],
//!     vec![0, 1, 1],
//! ]);
//! let region = RegionFinder::new().find_region(&grid, Position::new(0, 0)).unwrap();
//! assert_eq!(region.len(), 5);
//!
//! flood_fill(&mut grid, Position::new(0, 0), 7).unwrap();
//! assert_eq!(grid.get(Position::new(2, 2)), Ok(&7));
//! ```

pub mod collections;
pub mod core;
pub mod grid;
pub mod io;

pub use crate::core::{GridError, Position, Result};
pub use crate::grid::{flood_fill, Grid, Region, RegionFinder};
