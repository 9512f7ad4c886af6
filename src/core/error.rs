use std::fmt;

use super::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { pos: Position, shape: (usize, usize) },
    InvalidGrid,
    InvalidStartPosition(Position),
    EmptyStructure(&'static str),
    UnknownVertex(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, shape } => {
                write!(f, "position {} out of bounds for grid of shape {:?}", pos, shape)
            }
            Self::InvalidGrid => write!(f, "grid is not rectangular"),
            Self::InvalidStartPosition(pos) => write!(f, "invalid start position {}", pos),
            Self::EmptyStructure(op) => write!(f, "can't call '{}' on an empty structure", op),
            Self::UnknownVertex(v) => write!(f, "unknown vertex: {}", v),
        }
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;
