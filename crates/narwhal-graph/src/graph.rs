//! Index-addressed directed graph capabilities.
//!
//! Nodes are the dense indices `0..node_count()`; there are no node objects. The algorithms in
//! `narwhal` are written once against [`DirectedGraph`], so every representation in this module
//! (and any caller-provided one) gets them without a class hierarchy.

mod adjacency_list;
mod adjacency_matrix;
mod weighted;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::{AdjacencyMatrix, MatrixSuccessors};
pub use weighted::{WeightedEdge, WeightedGraph, WeightedSuccessors};

use crate::error::{Error, Result};

/// Read access to a directed graph over `0..node_count()`.
pub trait DirectedGraph {
    type Successors<'a>: Iterator<Item = usize> + 'a
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Out-neighbors of `v`, in the representation's stable order.
    ///
    /// Panics if `v` is out of range.
    fn successors(&self, v: usize) -> Self::Successors<'_>;

    fn has_edge(&self, v: usize, w: usize) -> bool;

    fn out_degree(&self, v: usize) -> usize {
        self.successors(v).count()
    }

    fn check_node(&self, v: usize) -> Result<()> {
        let node_count = self.node_count();
        if v < node_count {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node: v,
                node_count,
            })
        }
    }
}

/// Structural edits on an unweighted directed graph.
pub trait MutableGraph: DirectedGraph {
    fn add_edge(&mut self, v: usize, w: usize) -> Result<()>;

    fn remove_edge(&mut self, v: usize, w: usize) -> bool;

    /// Removes every out-edge of `v`.
    fn clear_edges(&mut self, v: usize);

    /// Adds `v -> w` unless it is already present; returns whether an edge was added.
    fn add_edge_if_missing(&mut self, v: usize, w: usize) -> Result<bool> {
        self.check_node(v)?;
        self.check_node(w)?;
        if self.has_edge(v, w) {
            return Ok(false);
        }
        self.add_edge(v, w)?;
        Ok(true)
    }

    /// Removes every edge, keeping the nodes.
    fn clear(&mut self) {
        for v in 0..self.node_count() {
            self.clear_edges(v);
        }
    }
}
