// Rectangular cell storage with bounds-checked access.
//
// A grid is built from rows as given; rectangularity is checked on demand by
// `is_valid`, and traversal refuses to run on a grid that fails it.

pub mod fill;
pub mod region;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GridError, Position, Result};

pub use fill::flood_fill;
pub use region::{Region, RegionFinder};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid<T> {
    cells: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        Self { cells: rows }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if every row is as long as the first one. An empty grid is valid.
    pub fn is_valid(&self) -> bool {
        match self.cells.split_first() {
            None => true,
            Some((first, rest)) => rest.iter().all(|row| row.len() == first.len()),
        }
    }

    /// `(row_count, col_count)`, `(0, 0)` for an empty grid. Columns are
    /// counted on the first row.
    pub fn shape(&self) -> (usize, usize) {
        match self.cells.first() {
            None => (0, 0),
            Some(first) => (self.cells.len(), first.len()),
        }
    }

    pub fn row_count(&self) -> usize {
        self.shape().0
    }

    pub fn col_count(&self) -> usize {
        self.shape().1
    }

    pub fn is_position_valid(&self, pos: Position) -> bool {
        let (rows, cols) = self.shape();
        pos.row < rows
            && pos.col < cols
            // ragged rows: never index past the row actually stored
            && pos.col < self.cells[pos.row].len()
    }

    pub fn get(&self, pos: Position) -> Result<&T> {
        if !self.is_position_valid(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(&self.cells[pos.row][pos.col])
    }

    /// Overwrite one cell, returning what was there.
    pub fn set(&mut self, pos: Position, value: T) -> Result<T> {
        if !self.is_position_valid(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(std::mem::replace(&mut self.cells[pos.row][pos.col], value))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            (0..row.len()).map(move |c| Position::new(r, c))
        })
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.cells
    }

    fn out_of_bounds(&self, pos: Position) -> GridError {
        GridError::OutOfBounds { pos, shape: self.shape() }
    }
}

impl<T: PartialEq> Grid<T> {
    /// In-bounds orthogonal neighbors holding the same value as `pos`, in
    /// up, down, left, right order.
    pub fn neighbors_with_equal_value(&self, pos: Position) -> Result<Vec<Position>> {
        let value = self.get(pos)?;
        let mut out = Vec::with_capacity(4);
        for nb in pos.orthogonal().into_iter().flatten() {
            if let Ok(other) = self.get(nb) {
                if other == value {
                    out.push(nb);
                }
            }
        }
        Ok(out)
    }
}

impl<T> From<Vec<Vec<T>>> for Grid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::new(rows)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn demo_grid() -> Grid<u8> {
    Grid::new(vec![
        vec![1, 0, 1, 1, 0],
        vec![0, 1, 0, 1, 0],
        vec![1, 1, 1, 1, 1],
        vec![0, 0, 1, 0, 1],
        vec![1, 0, 0, 0, 0],
    ])
}
