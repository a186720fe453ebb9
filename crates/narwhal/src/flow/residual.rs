//! Residual graph and augmenting paths.
//!
//! The residual graph has an arc `i -> j` when the edge `i -> j` can still carry more flow
//! (`plus`) or when the edge `j -> i` carries more than its lower bound (`minus`). It is rebuilt
//! from the flow values, in edge insertion order, whenever the flow changes.

use std::collections::VecDeque;

use super::FlowNetwork;
use crate::error::{Error, Result};
use crate::graph::{AdjacencyList, DirectedGraph};

impl FlowNetwork {
    pub fn update_residual_graph(&mut self) {
        let mut rows = vec![Vec::new(); self.node_count()];
        for edge in &self.edges {
            if edge.forward_slack() > 0 {
                rows[edge.from].push(edge.to);
            }
            if edge.backward_slack() > 0 {
                rows[edge.to].push(edge.from);
            }
        }
        let Ok(residual) = AdjacencyList::from_rows(rows) else {
            debug_assert!(false, "flow edges reference nodes outside the network");
            return;
        };
        self.residual = residual;
    }

    /// The residual graph as of the last [`Self::update_residual_graph`].
    pub fn residual_graph(&self) -> &AdjacencyList {
        &self.residual
    }

    /// Whether `i -> j` is a residual arc because the edge `i -> j` is below its capacity.
    pub fn plus(&self, i: usize, j: usize) -> bool {
        self.edge(i, j).is_some_and(|e| e.forward_slack() > 0)
    }

    /// Whether `i -> j` is a residual arc because the edge `j -> i` is above its lower bound.
    pub fn minus(&self, i: usize, j: usize) -> bool {
        self.edge(j, i).is_some_and(|e| e.backward_slack() > 0)
    }

    /// Shortest residual path `[source, ..., sink]`.
    ///
    /// The path ends with `sink` itself; drop the last node to get only the nodes leading to it.
    ///
    /// The arc `source -> sink` is only followed when it is a `plus` arc: a `minus` arc there
    /// would just cancel flow on the return edge `sink -> source`.
    pub fn augmenting_path(&self, source: usize, sink: usize) -> Result<Option<Vec<usize>>> {
        self.check_node(source)?;
        self.check_node(sink)?;
        Ok(self.residual_path(source, sink, true))
    }

    /// Pushes the bottleneck amount along a residual path and rebuilds the residual graph.
    /// Returns the amount pushed.
    pub fn augment(&mut self, path: &[usize]) -> Result<i64> {
        for &v in path {
            self.check_node(v)?;
        }
        if path.len() < 2 {
            return Ok(0);
        }
        let amount = self.bottleneck(path)?;
        self.push_along(path, amount)?;
        self.update_residual_graph();
        Ok(amount)
    }

    pub(super) fn residual_path(
        &self,
        source: usize,
        sink: usize,
        skip_return_arc: bool,
    ) -> Option<Vec<usize>> {
        let n = self.node_count();
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut seen = vec![false; n];
        let mut queue = VecDeque::new();
        seen[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for w in self.residual.successors(u) {
                if skip_return_arc && u == source && w == sink && !self.plus(source, sink) {
                    continue;
                }
                if w == sink {
                    let mut path = vec![sink, u];
                    let mut v = u;
                    while let Some(p) = parent[v] {
                        path.push(p);
                        v = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                if !seen[w] {
                    seen[w] = true;
                    parent[w] = Some(u);
                    queue.push_back(w);
                }
            }
        }
        None
    }

    /// Smallest slack along `path`.
    pub(super) fn bottleneck(&self, path: &[usize]) -> Result<i64> {
        path.windows(2).try_fold(i64::MAX, |amount, arc| {
            let (i, j) = (arc[0], arc[1]);
            let slack = if self.plus(i, j) {
                self.edge(i, j).map_or(0, |e| e.forward_slack())
            } else if self.minus(i, j) {
                self.edge(j, i).map_or(0, |e| e.backward_slack())
            } else {
                return Err(Error::NotResidualPath { from: i, to: j });
            };
            Ok(amount.min(slack))
        })
    }

    /// Raises forward edges and lowers backward edges of `path` by `amount`.
    pub(super) fn push_along(&mut self, path: &[usize], amount: i64) -> Result<()> {
        // Classify every arc before changing any flow.
        let mut changes = Vec::with_capacity(path.len().saturating_sub(1));
        for arc in path.windows(2) {
            let (i, j) = (arc[0], arc[1]);
            if self.plus(i, j) {
                changes.push((self.edge_id(i, j)?, amount));
            } else if self.minus(i, j) {
                changes.push((self.edge_id(j, i)?, -amount));
            } else {
                return Err(Error::NotResidualPath { from: i, to: j });
            }
        }
        for (e, delta) in changes {
            self.edges[e].flow += delta;
        }
        Ok(())
    }
}
