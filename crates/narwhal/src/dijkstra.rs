//! Single-pair shortest paths over nonnegative weights (Dijkstra).

use crate::error::Result;
use crate::graph::{DirectedGraph, HeapOrder, IndexedHeap, WeightedGraph};
use crate::timing;

/// Orders node indices by tentative distance.
#[derive(Debug, Clone, Default)]
struct ByDistance(Vec<f64>);

impl HeapOrder<usize> for ByDistance {
    fn is_less(&self, a: &usize, b: &usize) -> bool {
        self.0[*a] < self.0[*b]
    }
}

/// Shortest-path state for one weighted graph.
///
/// The distance and predecessor tables are reset by every [`Self::compute_optimal_paths`] call.
/// The search stops once the destination is settled, so entries of nodes that were still queued
/// at that point are upper bounds rather than final distances.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g WeightedGraph,
    distance: Vec<f64>,
    predecessor: Vec<Option<usize>>,
    endpoints: Option<(usize, usize)>,
}

impl<'g> ShortestPaths<'g> {
    pub fn new(graph: &'g WeightedGraph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            distance: vec![f64::INFINITY; n],
            predecessor: vec![None; n],
            endpoints: None,
        }
    }

    pub fn compute_optimal_paths(&mut self, source: usize, destination: usize) -> Result<()> {
        let graph = self.graph;
        graph.check_node(source)?;
        graph.check_node(destination)?;
        let _timer = timing::Timer::start("dijkstra");

        let n = graph.node_count();
        let mut distance = std::mem::take(&mut self.distance);
        distance.clear();
        distance.resize(n, f64::INFINITY);
        distance[source] = 0.0;
        self.predecessor.clear();
        self.predecessor.resize(n, None);

        let mut heap = IndexedHeap::with_capacity(n, ByDistance(distance));
        heap.extend(0..n)?;

        let mut checked = 0usize;
        while let Some(u) = heap.pop_min() {
            let du = heap.order().0[u];
            if du == f64::INFINITY {
                break;
            }
            checked += 1;
            if u == destination {
                break;
            }
            for edge in graph.edges(u) {
                let v = edge.target;
                let candidate = du + edge.weight;
                if candidate < heap.order().0[v] {
                    heap.order_mut().0[v] = candidate;
                    self.predecessor[v] = Some(u);
                    heap.sift_up(v);
                }
            }
        }

        self.distance = heap.into_order().0;
        self.endpoints = Some((source, destination));
        tracing::debug!(
            source,
            destination,
            nodes_checked = checked,
            cost = self.distance[destination],
            "dijkstra"
        );
        Ok(())
    }

    /// Distance from the source to the destination of the last run; `+∞` when the destination is
    /// unreachable or nothing has been computed yet.
    pub fn optimal_cost(&self) -> f64 {
        match self.endpoints {
            Some((_, destination)) => self.distance[destination],
            None => f64::INFINITY,
        }
    }

    /// Nodes of a shortest path `source ..= destination` from the last run.
    pub fn optimal_path(&self) -> Option<Vec<usize>> {
        let (source, destination) = self.endpoints?;
        if !self.distance[destination].is_finite() {
            return None;
        }
        let mut path = vec![destination];
        let mut v = destination;
        while v != source {
            v = self.predecessor[v]?;
            path.push(v);
        }
        path.reverse();
        Some(path)
    }

    pub fn distance(&self, v: usize) -> f64 {
        self.distance.get(v).copied().unwrap_or(f64::INFINITY)
    }

    pub fn graph(&self) -> &'g WeightedGraph {
        self.graph
    }
}
