use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate, `(row, col)`, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn up(self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self::new(row, self.col))
    }

    pub fn down(self) -> Option<Self> {
        self.row.checked_add(1).map(|row| Self::new(row, self.col))
    }

    pub fn left(self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self::new(self.row, col))
    }

    pub fn right(self) -> Option<Self> {
        self.col.checked_add(1).map(|col| Self::new(self.row, col))
    }

    /// Orthogonal neighbors in up, down, left, right order. Coordinates that
    /// would fall below zero are `None`; the upper bound is the grid's concern.
    pub fn orthogonal(self) -> [Option<Self>; 4] {
        [self.up(), self.down(), self.left(), self.right()]
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_order_is_up_down_left_right() {
        let p = Position::new(2, 3);
        assert_eq!(p.orthogonal(), [
            Some(Position::new(1, 3)),
            Some(Position::new(3, 3)),
            Some(Position::new(2, 2)),
            Some(Position::new(2, 4)),
        ]);
    }

    #[test]
    fn origin_has_no_up_or_left() {
        let p = Position::new(0, 0);
        assert_eq!(p.up(), None);
        assert_eq!(p.left(), None);
        assert_eq!(p.down(), Some(Position::new(1, 0)));
        assert_eq!(p.right(), Some(Position::new(0, 1)));
    }

    #[test]
    fn max_coordinate_does_not_overflow() {
        let p = Position::new(usize::MAX, usize::MAX);
        assert_eq!(p.down(), None);
        assert_eq!(p.right(), None);
    }

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&Position::new(4, 1)).unwrap();
        assert_eq!(json, "[4,1]");
        let back: Position = serde_json::from_str("[0,7]").unwrap();
        assert_eq!(back, Position::new(0, 7));
    }

    #[test]
    fn display_format() {
        assert_eq!(Position::from((2, 2)).to_string(), "(2, 2)");
    }
}
