//! Flow networks with lower and upper bounds on every edge.
//!
//! A [`FlowNetwork`] holds at most one edge per ordered node pair, each with bounds
//! `0 <= low <= cap` and an integral flow. Max-flow is computed on a circulation: the value of a
//! source→sink flow is carried back by a return edge sink→source, and augmenting paths are
//! closed through it.

mod residual;

use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};
use crate::graph::{AdjacencyList, DirectedGraph};
use crate::timing;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub low: i64,
    pub cap: i64,
    pub flow: i64,
}

impl FlowEdge {
    /// Room left before reaching `cap`.
    pub fn forward_slack(&self) -> i64 {
        self.cap.saturating_sub(self.flow)
    }

    /// Room left before reaching `low`.
    pub fn backward_slack(&self) -> i64 {
        self.flow.saturating_sub(self.low)
    }

    pub fn within_bounds(&self) -> bool {
        self.low <= self.flow && self.flow <= self.cap
    }
}

#[derive(Debug, Clone)]
pub struct FlowNetwork {
    edges: Vec<FlowEdge>,
    index: HashMap<(usize, usize), usize>,
    out: Vec<Vec<usize>>,
    residual: AdjacencyList,
}

impl FlowNetwork {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            index: HashMap::default(),
            out: vec![Vec::new(); node_count],
            residual: AdjacencyList::new(node_count),
        }
    }

    /// Declares `u -> v` with flow bounds `[low, cap]` and zero flow.
    pub fn add_edge(&mut self, u: usize, v: usize, low: i64, cap: i64) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if low < 0 || low > cap {
            return Err(Error::InvalidBounds {
                from: u,
                to: v,
                low,
                cap,
            });
        }
        if self.index.contains_key(&(u, v)) {
            return Err(Error::DuplicateEdge { from: u, to: v });
        }
        self.index.insert((u, v), self.edges.len());
        self.out[u].push(self.edges.len());
        self.edges.push(FlowEdge {
            from: u,
            to: v,
            low,
            cap,
            flow: 0,
        });
        Ok(())
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn edge(&self, u: usize, v: usize) -> Option<&FlowEdge> {
        self.index.get(&(u, v)).map(|&e| &self.edges[e])
    }

    /// Current flow on `u -> v`; `0` when there is no such edge.
    pub fn flow(&self, u: usize, v: usize) -> i64 {
        self.edge(u, v).map_or(0, |e| e.flow)
    }

    /// `(low, cap)` of `u -> v`.
    pub fn bounds(&self, u: usize, v: usize) -> Option<(i64, i64)> {
        self.edge(u, v).map(|e| (e.low, e.cap))
    }

    /// Overwrites the flow on `u -> v`. The value is not checked against the bounds, so an
    /// infeasible flow can be loaded and then repaired with [`Self::repair_flow`]. The residual
    /// graph is left as it was.
    pub fn set_flow(&mut self, u: usize, v: usize, value: i64) -> Result<()> {
        let e = self.edge_id(u, v)?;
        self.edges[e].flow = value;
        Ok(())
    }

    /// Sets every flow to zero.
    pub fn reset_flow(&mut self) {
        for edge in &mut self.edges {
            edge.flow = 0;
        }
    }

    fn edge_id(&self, u: usize, v: usize) -> Result<usize> {
        self.index
            .get(&(u, v))
            .copied()
            .ok_or(Error::MissingEdge { from: u, to: v })
    }

    /// Inflow minus outflow at every node.
    pub fn excess(&self) -> Vec<i64> {
        let mut excess = vec![0i64; self.node_count()];
        for edge in &self.edges {
            excess[edge.from] = excess[edge.from].saturating_sub(edge.flow);
            excess[edge.to] = excess[edge.to].saturating_add(edge.flow);
        }
        excess
    }

    /// Whether the flow is conserved at every node and within bounds on every edge.
    pub fn feasible_flow(&self) -> bool {
        self.edges.iter().all(FlowEdge::within_bounds) && self.excess().iter().all(|&x| x == 0)
    }

    /// Brings every edge within its bounds while keeping the flow conserved.
    ///
    /// An edge below `low` is raised and the extra units are routed from its head back to its
    /// tail through the residual graph; an edge above `cap` is lowered and the units are routed
    /// from its tail to its head. Returns `Ok(false)` when some edge cannot be repaired, leaving
    /// the partial repair in place. The residual graph is rebuilt on return.
    pub fn repair_flow(&mut self) -> Result<bool> {
        if let Some((node, &excess)) = self.excess().iter().enumerate().find(|(_, x)| **x != 0) {
            return Err(Error::Unbalanced { node, excess });
        }
        let _timer = timing::Timer::start("repair_flow");

        let mut repaired = true;
        'edges: for e in 0..self.edges.len() {
            loop {
                let edge = self.edges[e];
                let (deficit, tail, head) = if edge.flow < edge.low {
                    (edge.low.saturating_sub(edge.flow), edge.to, edge.from)
                } else if edge.flow > edge.cap {
                    (edge.flow.saturating_sub(edge.cap), edge.from, edge.to)
                } else {
                    break;
                };

                self.update_residual_graph();
                let Some(path) = self.residual_path(tail, head, false) else {
                    tracing::debug!(from = edge.from, to = edge.to, "flow cannot be repaired");
                    repaired = false;
                    break 'edges;
                };
                let amount = deficit.min(self.bottleneck(&path)?);
                if edge.flow < edge.low {
                    self.edges[e].flow += amount;
                } else {
                    self.edges[e].flow -= amount;
                }
                self.push_along(&path, amount)?;
                tracing::trace!(from = edge.from, to = edge.to, amount, "repaired edge");
            }
        }

        self.update_residual_graph();
        Ok(repaired && self.feasible_flow())
    }

    /// Maximizes the flow from `source` to `sink` and returns its value.
    ///
    /// The network must contain the return edge `sink -> source`, and the current flow must be
    /// feasible. The value is the flow on the return edge once no augmenting path remains or the
    /// return edge is saturated.
    pub fn maximal_flow(&mut self, source: usize, sink: usize) -> Result<i64> {
        self.check_node(source)?;
        self.check_node(sink)?;
        let ret = self.edge_id(sink, source)?;
        if !self.feasible_flow() {
            return Err(Error::InfeasibleFlow);
        }
        let _timer = timing::Timer::start("maximal_flow");

        self.update_residual_graph();
        let mut augmentations = 0usize;
        while let Some(path) = self.residual_path(source, sink, true) {
            let slack = self.edges[ret].forward_slack();
            if slack == 0 {
                break;
            }
            let amount = self.bottleneck(&path)?.min(slack);
            self.push_along(&path, amount)?;
            self.edges[ret].flow += amount;
            self.update_residual_graph();
            augmentations += 1;
            tracing::trace!(?path, amount, "augmented");
        }

        let value = self.edges[ret].flow;
        tracing::debug!(source, sink, value, augmentations, "maximal flow");
        Ok(value)
    }
}

pub struct FlowSuccessors<'a> {
    edges: &'a [FlowEdge],
    ids: std::slice::Iter<'a, usize>,
}

impl Iterator for FlowSuccessors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.ids.next().map(|&e| self.edges[e].to)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DirectedGraph for FlowNetwork {
    type Successors<'a> = FlowSuccessors<'a>;

    fn node_count(&self) -> usize {
        self.out.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn successors(&self, v: usize) -> Self::Successors<'_> {
        FlowSuccessors {
            edges: &self.edges,
            ids: self.out[v].iter(),
        }
    }

    fn has_edge(&self, v: usize, w: usize) -> bool {
        self.index.contains_key(&(v, w))
    }

    fn out_degree(&self, v: usize) -> usize {
        self.out[v].len()
    }
}
