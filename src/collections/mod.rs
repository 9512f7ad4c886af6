pub mod adjacency;
pub mod linked_list;

pub use adjacency::{AdjacencyGraph, VertexId};
pub use linked_list::LinkedList;
