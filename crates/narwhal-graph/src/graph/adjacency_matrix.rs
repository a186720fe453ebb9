//! Dense boolean adjacency matrix.

use super::{DirectedGraph, MutableGraph};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    node_count: usize,
    /// Row-major `node_count * node_count` cells.
    cells: Vec<bool>,
    edge_count: usize,
}

impl AdjacencyMatrix {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            cells: vec![false; node_count * node_count],
            edge_count: 0,
        }
    }

    /// Builds a matrix from square rows; any row whose length differs from the row count is
    /// rejected.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let node_count = rows.len();
        let mut cells = Vec::with_capacity(node_count * node_count);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != node_count {
                return Err(Error::DimensionMismatch {
                    row,
                    len: cols.len(),
                    expected: node_count,
                });
            }
            cells.extend(cols);
        }
        let edge_count = cells.iter().filter(|&&c| c).count();
        Ok(Self {
            node_count,
            cells,
            edge_count,
        })
    }

    fn row(&self, v: usize) -> &[bool] {
        let start = v * self.node_count;
        &self.cells[start..start + self.node_count]
    }
}

pub struct MatrixSuccessors<'a> {
    row: &'a [bool],
    next: usize,
}

impl Iterator for MatrixSuccessors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.row.len() {
            let w = self.next;
            self.next += 1;
            if self.row[w] {
                return Some(w);
            }
        }
        None
    }
}

impl DirectedGraph for AdjacencyMatrix {
    type Successors<'a> = MatrixSuccessors<'a>;

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn successors(&self, v: usize) -> Self::Successors<'_> {
        assert!(v < self.node_count, "node {v} out of range");
        MatrixSuccessors {
            row: self.row(v),
            next: 0,
        }
    }

    fn has_edge(&self, v: usize, w: usize) -> bool {
        v < self.node_count && w < self.node_count && self.cells[v * self.node_count + w]
    }
}

impl MutableGraph for AdjacencyMatrix {
    /// Sets the `v -> w` cell; adding an existing edge is a no-op.
    fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.check_node(v)?;
        self.check_node(w)?;
        let cell = &mut self.cells[v * self.node_count + w];
        if !*cell {
            *cell = true;
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, v: usize, w: usize) -> bool {
        if !self.has_edge(v, w) {
            return false;
        }
        self.cells[v * self.node_count + w] = false;
        self.edge_count -= 1;
        true
    }

    fn clear_edges(&mut self, v: usize) {
        if v >= self.node_count {
            return;
        }
        let start = v * self.node_count;
        for cell in &mut self.cells[start..start + self.node_count] {
            if *cell {
                *cell = false;
                self.edge_count -= 1;
            }
        }
    }

    fn clear(&mut self) {
        self.cells.fill(false);
        self.edge_count = 0;
    }
}
