// Undirected graph over vertices `0..n`, stored as adjacency lists.
//
// Unlike `Grid`, edges here are explicit: they exist only once added.

use std::fmt;

use crate::core::{GridError, Result};

pub type VertexId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Connect `u` and `v` in both directions. A self-loop lists the vertex
    /// twice in its own neighbors.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edge_count += 1;
        Ok(())
    }

    pub fn neighbors(&self, u: VertexId) -> Result<&[VertexId]> {
        self.check(u)?;
        Ok(&self.adjacency[u])
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn display(&self) {
        println!("{}", self);
    }

    fn check(&self, v: VertexId) -> Result<()> {
        if v < self.adjacency.len() {
            Ok(())
        } else {
            Err(GridError::UnknownVertex(v))
        }
    }
}

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, nbs) in self.adjacency.iter().enumerate() {
            if v > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {:?}", v, nbs)?;
        }
        Ok(())
    }
}
