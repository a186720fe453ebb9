//! Sparse adjacency-list representation.

use super::{DirectedGraph, MutableGraph};
use crate::error::{Error, Result};

/// Out-neighbor lists per node. Parallel edges are kept; insertion order is the successor order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    out: Vec<Vec<usize>>,
    edge_count: usize,
}

impl AdjacencyList {
    pub fn new(node_count: usize) -> Self {
        Self {
            out: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from one row of out-neighbors per node.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        let node_count = rows.len();
        for row in &rows {
            if let Some(&node) = row.iter().find(|&&w| w >= node_count) {
                return Err(Error::NodeOutOfRange { node, node_count });
            }
        }
        let edge_count = rows.iter().map(Vec::len).sum();
        Ok(Self {
            out: rows,
            edge_count,
        })
    }

    pub fn edges(&self, v: usize) -> &[usize] {
        &self.out[v]
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.out
    }
}

impl DirectedGraph for AdjacencyList {
    type Successors<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn node_count(&self) -> usize {
        self.out.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn successors(&self, v: usize) -> Self::Successors<'_> {
        self.out[v].iter().copied()
    }

    fn has_edge(&self, v: usize, w: usize) -> bool {
        self.out.get(v).is_some_and(|row| row.contains(&w))
    }

    fn out_degree(&self, v: usize) -> usize {
        self.out[v].len()
    }
}

impl MutableGraph for AdjacencyList {
    fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.check_node(v)?;
        self.check_node(w)?;
        self.out[v].push(w);
        self.edge_count += 1;
        Ok(())
    }

    fn remove_edge(&mut self, v: usize, w: usize) -> bool {
        let Some(row) = self.out.get_mut(v) else {
            return false;
        };
        let Some(pos) = row.iter().position(|&x| x == w) else {
            return false;
        };
        row.remove(pos);
        self.edge_count -= 1;
        true
    }

    fn clear_edges(&mut self, v: usize) {
        if let Some(row) = self.out.get_mut(v) {
            self.edge_count -= row.len();
            row.clear();
        }
    }

    fn clear(&mut self) {
        for row in &mut self.out {
            row.clear();
        }
        self.edge_count = 0;
    }
}
