//! Depth-first (Tremaux) visitation ordinals.
//!
//! The search starts from the lowest-index unvisited node and restarts from the next one until
//! every node is visited, so disconnected graphs get one global numbering `0..n`. Successors are
//! explored in the graph's successor order, which makes the result deterministic.

use crate::error::{Error, Result};
use crate::graph::DirectedGraph;
use crate::timing;

const UNVISITED: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tremaux {
    ordinals: Vec<usize>,
    /// Edge count of the graph the ordinals were computed on.
    edge_count: usize,
}

impl Tremaux {
    pub fn compute<G: DirectedGraph>(g: &G) -> Self {
        let _timer = timing::Timer::start("tremaux");
        let n = g.node_count();
        let mut ordinals = vec![UNVISITED; n];
        let mut next = 0;
        let mut stack: Vec<G::Successors<'_>> = Vec::new();

        for root in 0..n {
            if ordinals[root] != UNVISITED {
                continue;
            }
            ordinals[root] = next;
            next += 1;
            stack.push(g.successors(root));

            while let Some(successors) = stack.last_mut() {
                match successors.find(|&w| ordinals[w] == UNVISITED) {
                    Some(w) => {
                        ordinals[w] = next;
                        next += 1;
                        stack.push(g.successors(w));
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }
        debug_assert_eq!(next, n);

        Self {
            ordinals,
            edge_count: g.edge_count(),
        }
    }

    pub fn ordinal(&self, v: usize) -> usize {
        self.ordinals[v]
    }

    pub fn ordinals(&self) -> &[usize] {
        &self.ordinals
    }

    pub fn node_count(&self) -> usize {
        self.ordinals.len()
    }

    /// Nodes in visitation order.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = vec![0; self.ordinals.len()];
        for (v, &t) in self.ordinals.iter().enumerate() {
            order[t] = v;
        }
        order
    }

    /// Fails when `g` does not have the shape these ordinals were computed for.
    pub fn check<G: DirectedGraph>(&self, g: &G) -> Result<()> {
        if self.ordinals.len() == g.node_count() && self.edge_count == g.edge_count() {
            return Ok(());
        }
        Err(Error::StaleTremaux {
            ordinal_nodes: self.ordinals.len(),
            ordinal_edges: self.edge_count,
            node_count: g.node_count(),
            edge_count: g.edge_count(),
        })
    }
}
