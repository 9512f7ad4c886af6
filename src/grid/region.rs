// Connected-region search over the implicit grid graph.
//
// Two cells are adjacent when they are orthogonal neighbors holding equal
// values. The search keeps an explicit worklist instead of recursing, so
// region size is bounded by memory rather than stack depth. The worklist is
// a stack: expansion is depth-first, the most recently discovered neighbor
// is visited next. Duplicates may sit in the worklist; they are dropped when
// popped if already seen.

use rustc_hash::FxHashSet;

use super::Grid;
use crate::core::{GridError, Position, Result};

/// Positions reachable from a start cell through equal-valued neighbors.
///
/// Iteration yields positions in visitation order, starting with the start
/// cell. Two regions compare equal when they hold the same positions,
/// whatever the order.
#[derive(Debug, Clone)]
pub struct Region {
    order: Vec<Position>,
    members: FxHashSet<Position>,
}

impl Region {
    fn seeded(start: Position) -> Self {
        let mut members = FxHashSet::default();
        members.insert(start);
        Self { order: vec![start], members }
    }

    /// Returns false if `pos` was already a member.
    fn insert(&mut self, pos: Position) -> bool {
        if self.members.insert(pos) {
            self.order.push(pos);
            true
        } else {
            false
        }
    }

    pub fn start(&self) -> Position {
        self.order[0]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.members.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    // A region always holds its start cell.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.order.iter().copied()
    }

    pub fn positions(&self) -> &[Position] {
        &self.order
    }

    /// Members in row-major order.
    pub fn sorted(&self) -> Vec<Position> {
        let mut out = self.order.clone();
        out.sort_unstable();
        out
    }

    pub fn into_set(self) -> FxHashSet<Position> {
        self.members
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for Region {}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegionFinder;

impl RegionFinder {
    pub fn new() -> Self {
        Self
    }

    /// Find every cell connected to `start` through equal values.
    ///
    /// Fails with `InvalidGrid` if the grid is not rectangular and with
    /// `InvalidStartPosition` if `start` lies outside it. Each cell is
    /// expanded at most once, so the search is linear in the grid size.
    pub fn find_region<T: PartialEq>(&self, grid: &Grid<T>, start: Position) -> Result<Region> {
        if !grid.is_valid() {
            return Err(GridError::InvalidGrid);
        }
        if !grid.is_position_valid(start) {
            return Err(GridError::InvalidStartPosition(start));
        }

        let mut region = Region::seeded(start);
        let mut frontier = grid.neighbors_with_equal_value(start)?;

        while let Some(candidate) = frontier.pop() {
            if !region.insert(candidate) {
                continue;
            }
            let next = grid.neighbors_with_equal_value(candidate)?;
            tracing::trace!(%candidate, discovered = next.len(), "expand");
            frontier.extend(next);
        }

        tracing::debug!(%start, size = region.len(), "region found");
        Ok(region)
    }

    /// Visitation order of `find_region`.
    pub fn trace<T: PartialEq>(&self, grid: &Grid<T>, start: Position) -> Result<Vec<Position>> {
        self.find_region(grid, start).map(|region| region.order)
    }
}
