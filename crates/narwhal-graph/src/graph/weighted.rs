//! Sparse adjacency lists with nonnegative edge weights.

use super::DirectedGraph;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub target: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    out: Vec<Vec<WeightedEdge>>,
    edge_count: usize,
}

impl WeightedGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            out: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from one row of `(target, weight)` pairs per node.
    pub fn from_rows(rows: Vec<Vec<(usize, f64)>>) -> Result<Self> {
        let mut g = Self::new(rows.len());
        for (v, row) in rows.into_iter().enumerate() {
            for (w, weight) in row {
                g.add_edge(v, w, weight)?;
            }
        }
        Ok(g)
    }

    /// Adds `v -> w`. Weights must be finite and nonnegative.
    pub fn add_edge(&mut self, v: usize, w: usize, weight: f64) -> Result<()> {
        self.check_node(v)?;
        self.check_node(w)?;
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(Error::InvalidWeight {
                from: v,
                to: w,
                weight,
            });
        }
        self.out[v].push(WeightedEdge { target: w, weight });
        self.edge_count += 1;
        Ok(())
    }

    pub fn edges(&self, v: usize) -> &[WeightedEdge] {
        &self.out[v]
    }

    /// Weight of the first `v -> w` edge, if any.
    pub fn weight(&self, v: usize, w: usize) -> Option<f64> {
        self.out
            .get(v)?
            .iter()
            .find(|e| e.target == w)
            .map(|e| e.weight)
    }
}

pub struct WeightedSuccessors<'a> {
    edges: std::slice::Iter<'a, WeightedEdge>,
}

impl Iterator for WeightedSuccessors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.edges.next().map(|e| e.target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl DirectedGraph for WeightedGraph {
    type Successors<'a> = WeightedSuccessors<'a>;

    fn node_count(&self) -> usize {
        self.out.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn successors(&self, v: usize) -> Self::Successors<'_> {
        WeightedSuccessors {
            edges: self.out[v].iter(),
        }
    }

    fn has_edge(&self, v: usize, w: usize) -> bool {
        self.weight(v, w).is_some()
    }

    fn out_degree(&self, v: usize) -> usize {
        self.out[v].len()
    }
}
