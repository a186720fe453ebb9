//! Strongly connected components over precomputed Tremaux ordinals.
//!
//! This is Tarjan's low-link scheme with the low-link values stored per ordinal. A node whose
//! ordinal equals its low-link closes a component; the members are then collected by walking
//! ordinal-increasing edges through nodes that have no component yet. Both walks use explicit
//! stacks, so deep graphs do not exhaust the call stack.

use crate::error::Result;
use crate::graph::DirectedGraph;
use crate::timing;
use crate::tremaux::Tremaux;

const UNVISITED: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    component: Vec<usize>,
    count: usize,
}

struct Frame<I> {
    node: usize,
    successors: I,
    /// Child whose search was in progress when this frame was suspended.
    child: Option<usize>,
}

impl Components {
    /// Fails with [`crate::Error::StaleTremaux`] when `tremaux` was computed on a graph of a
    /// different shape.
    pub fn compute<G: DirectedGraph>(g: &G, tremaux: &Tremaux) -> Result<Self> {
        tremaux.check(g)?;
        Ok(Self::compute_with_ordinals(g, tremaux.ordinals()))
    }

    fn compute_with_ordinals<G: DirectedGraph>(g: &G, t: &[usize]) -> Self {
        let _timer = timing::Timer::start("scc");
        let n = g.node_count();
        let mut low = vec![UNVISITED; n];
        let mut component: Vec<Option<usize>> = vec![None; n];
        let mut count = 0;
        let mut stack: Vec<Frame<G::Successors<'_>>> = Vec::new();
        let mut pending = Vec::new();

        for root in 0..n {
            if component[root].is_some() || low[t[root]] != UNVISITED {
                continue;
            }
            low[t[root]] = t[root];
            stack.push(Frame {
                node: root,
                successors: g.successors(root),
                child: None,
            });

            while let Some(frame) = stack.last_mut() {
                let tu = t[frame.node];
                if let Some(child) = frame.child.take() {
                    low[tu] = low[tu].min(low[t[child]]);
                }

                let mut descend = None;
                for v in frame.successors.by_ref() {
                    let tv = t[v];
                    if low[tv] == UNVISITED {
                        descend = Some(v);
                        break;
                    }
                    if component[v].is_none() && low[tv] < low[tu] {
                        low[tu] = low[tv];
                    }
                }

                if let Some(v) = descend {
                    frame.child = Some(v);
                    low[t[v]] = t[v];
                    stack.push(Frame {
                        node: v,
                        successors: g.successors(v),
                        child: None,
                    });
                    continue;
                }

                let u = frame.node;
                stack.pop();
                if low[tu] == tu {
                    mark(g, t, u, count, &mut component, &mut pending);
                    count += 1;
                }
            }
        }

        tracing::debug!(nodes = n, components = count, "scc");
        Self {
            component: component.into_iter().map(|c| c.unwrap_or(0)).collect(),
            count,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Component id of `v`, in `0..count()`.
    pub fn component(&self, v: usize) -> usize {
        self.component[v]
    }

    pub fn same_component(&self, v: usize, w: usize) -> bool {
        self.component[v] == self.component[w]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.component
    }

    /// Members of each component, indexed by component id, each in ascending node order.
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.count];
        for (v, &c) in self.component.iter().enumerate() {
            members[c].push(v);
        }
        members
    }
}

fn mark<G: DirectedGraph>(
    g: &G,
    t: &[usize],
    root: usize,
    id: usize,
    component: &mut [Option<usize>],
    pending: &mut Vec<usize>,
) {
    component[root] = Some(id);
    pending.push(root);
    while let Some(u) = pending.pop() {
        for v in g.successors(u) {
            if t[v] > t[u] && component[v].is_none() {
                component[v] = Some(id);
                pending.push(v);
            }
        }
    }
}

/// Computes fresh Tremaux ordinals and the components of `g` in one call.
pub fn strongly_connected_components<G: DirectedGraph>(g: &G) -> Components {
    let tremaux = Tremaux::compute(g);
    Components::compute_with_ordinals(g, tremaux.ordinals())
}
