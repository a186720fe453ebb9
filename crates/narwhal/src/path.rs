//! Breadth-first path search from a set of start nodes to one goal.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::DirectedGraph;

/// Reusable buffers for multi-source BFS.
///
/// The buffers are sized to the node count given at construction and grown on demand, so one
/// instance can serve repeated searches over the same graph.
#[derive(Debug, Clone, Default)]
pub struct PathSearch {
    reachable: Vec<bool>,
    source: Vec<bool>,
    parent: Vec<Option<usize>>,
    queue: VecDeque<usize>,
}

impl PathSearch {
    pub fn new(node_count: usize) -> Self {
        Self {
            reachable: vec![false; node_count],
            source: vec![false; node_count],
            parent: vec![None; node_count],
            queue: VecDeque::with_capacity(node_count),
        }
    }

    /// Whether `goal` is reachable through at least one edge from some node of `frontier`.
    ///
    /// Nodes are visited at most once, so a goal that is itself in `frontier` is never found.
    ///
    /// On success the parent pointers describe a shortest such path; see [`Self::path_to`].
    pub fn has_path<G, I>(&mut self, g: &G, frontier: I, goal: usize) -> Result<bool>
    where
        G: DirectedGraph,
        I: IntoIterator<Item = usize>,
    {
        let n = g.node_count();
        g.check_node(goal)?;
        self.reset(n);

        for v in frontier {
            g.check_node(v)?;
            if !self.reachable[v] {
                self.reachable[v] = true;
                self.source[v] = true;
                self.queue.push_back(v);
            }
        }

        while let Some(u) = self.queue.pop_front() {
            for w in g.successors(u) {
                if self.reachable[w] {
                    continue;
                }
                self.parent[w] = Some(u);
                if w == goal {
                    self.queue.clear();
                    return Ok(true);
                }
                self.reachable[w] = true;
                self.queue.push_back(w);
            }
        }
        Ok(false)
    }

    /// Nodes from just after the frontier up to `goal`, following the parents recorded by the
    /// last successful [`Self::has_path`].
    pub fn path_to(&self, goal: usize) -> Vec<usize> {
        let mut path = vec![goal];
        let mut cursor = self.parent.get(goal).copied().flatten();
        while let Some(u) = cursor {
            if self.source[u] {
                break;
            }
            path.push(u);
            cursor = self.parent[u];
        }
        path.reverse();
        path
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.reachable.get(v).copied().unwrap_or(false)
    }

    fn reset(&mut self, n: usize) {
        self.reachable.clear();
        self.reachable.resize(n, false);
        self.source.clear();
        self.source.resize(n, false);
        self.parent.clear();
        self.parent.resize(n, None);
        self.queue.clear();
    }
}

/// Shortest path from `frontier` to `goal`, excluding the frontier node and ending at `goal`.
pub fn compute_path<G, I>(g: &G, frontier: I, goal: usize) -> Result<Option<Vec<usize>>>
where
    G: DirectedGraph,
    I: IntoIterator<Item = usize>,
{
    let mut search = PathSearch::new(g.node_count());
    if !search.has_path(g, frontier, goal)? {
        return Ok(None);
    }
    Ok(Some(search.path_to(goal)))
}
