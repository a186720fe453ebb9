//! Maximum bipartite matching (Hopcroft–Karp).
//!
//! Nodes `0..first_end` are start nodes and `first_end..n` are end nodes; every edge must run from
//! a start node to an end node. A [`Matching`] maps matched end nodes to their start node.

use crate::error::{Error, Result};
use crate::graph::DirectedGraph;
use crate::timing;

/// A set of disjoint start→end pairs, keyed by end node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    first_end: usize,
    start_by_end: Vec<Option<usize>>,
    len: usize,
}

impl Matching {
    /// An empty matching over `node_count` nodes partitioned at `first_end`.
    pub fn new(first_end: usize, node_count: usize) -> Self {
        Self {
            first_end,
            start_by_end: vec![None; node_count.saturating_sub(first_end)],
            len: 0,
        }
    }

    pub fn first_end(&self) -> usize {
        self.first_end
    }

    pub fn node_count(&self) -> usize {
        self.first_end + self.start_by_end.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start node matched to `end`, if any.
    pub fn get(&self, end: usize) -> Option<usize> {
        let slot = end.checked_sub(self.first_end)?;
        self.start_by_end.get(slot).copied().flatten()
    }

    pub fn contains_end(&self, end: usize) -> bool {
        self.get(end).is_some()
    }

    /// Matches `end` to `start`, returning the start node it was matched to before.
    ///
    /// Panics if `end` is not an end node of this matching.
    pub fn insert(&mut self, end: usize, start: usize) -> Option<usize> {
        let previous = self.start_by_end[end - self.first_end].replace(start);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn remove(&mut self, end: usize) -> Option<usize> {
        let slot = end.checked_sub(self.first_end)?;
        let previous = self.start_by_end.get_mut(slot)?.take();
        if previous.is_some() {
            self.len -= 1;
        }
        previous
    }

    /// `(end, start)` pairs in ascending end order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.start_by_end
            .iter()
            .enumerate()
            .filter_map(|(slot, start)| start.map(|s| (self.first_end + slot, s)))
    }

    /// Whether no start node is matched to two end nodes.
    pub fn is_injective(&self) -> bool {
        let mut seen = vec![false; self.first_end];
        self.iter().all(|(_, start)| {
            let Some(flag) = seen.get_mut(start) else {
                return false;
            };
            !std::mem::replace(flag, true)
        })
    }
}

/// Where a start node was reached from while layering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Predecessor {
    /// The start node is unmatched and sits in the first layer.
    Unmatched,
    /// The start node is matched to this end node of the previous layer.
    End(usize),
}

fn check_partition<G: DirectedGraph>(g: &G, first_end: usize) -> Result<()> {
    let node_count = g.node_count();
    if first_end > node_count {
        return Err(Error::InvalidPartition {
            first_end,
            node_count,
        });
    }
    for u in 0..node_count {
        for v in g.successors(u) {
            if u >= first_end || v < first_end {
                return Err(Error::NotBipartite { start: u, end: v });
            }
        }
    }
    Ok(())
}

/// Every pair must be an edge of `g` from a start node, and no start node may be used twice.
fn check_matching<G: DirectedGraph>(g: &G, matching: &Matching) -> Result<()> {
    let mut used = vec![false; matching.first_end()];
    for (end, start) in matching.iter() {
        let fresh = used.get_mut(start).map(|flag| !std::mem::replace(flag, true));
        if fresh != Some(true) || !g.has_edge(start, end) {
            return Err(Error::InvalidMatching { start, end });
        }
    }
    Ok(())
}

/// Matches each start node, in index order, to its first adjacent end node that is still free.
pub fn greedy_matching<G: DirectedGraph>(g: &G, first_end: usize) -> Result<Matching> {
    check_partition(g, first_end)?;
    Ok(greedy(g, first_end))
}

fn greedy<G: DirectedGraph>(g: &G, first_end: usize) -> Matching {
    let mut matching = Matching::new(first_end, g.node_count());
    for u in 0..first_end {
        if let Some(v) = g.successors(u).find(|&v| !matching.contains_end(v)) {
            matching.insert(v, u);
        }
    }
    matching
}

/// Maximum matching, warm-started from [`greedy_matching`].
pub fn maximum_matching<G: DirectedGraph>(g: &G, first_end: usize) -> Result<Matching> {
    check_partition(g, first_end)?;
    let initial = greedy(g, first_end);
    Ok(hopcroft_karp(g, first_end, initial))
}

/// Maximum matching grown from `initial`, which must be a matching of `g` over the same
/// partition (else [`Error::InvalidPartition`] or [`Error::InvalidMatching`]).
pub fn maximum_matching_from<G: DirectedGraph>(
    g: &G,
    first_end: usize,
    initial: Matching,
) -> Result<Matching> {
    check_partition(g, first_end)?;
    if initial.first_end() != first_end || initial.node_count() != g.node_count() {
        return Err(Error::InvalidPartition {
            first_end: initial.first_end(),
            node_count: g.node_count(),
        });
    }
    check_matching(g, &initial)?;
    Ok(hopcroft_karp(g, first_end, initial))
}

fn hopcroft_karp<G: DirectedGraph>(g: &G, first_end: usize, mut matching: Matching) -> Matching {
    let _timer = timing::Timer::start("hopcroft_karp");
    let end_count = g.node_count() - first_end;

    // pred[u]: the previous-layer node of start node u.
    let mut pred: Vec<Option<Predecessor>> = vec![None; first_end];
    // preds[v - first_end]: previous-layer start nodes of end node v.
    let mut preds: Vec<Option<Vec<usize>>> = vec![None; end_count];
    let mut new_layer: Vec<Option<Vec<usize>>> = vec![None; end_count];
    let mut discovered = Vec::new();
    let mut layer = Vec::new();
    let mut unmatched = Vec::new();
    let mut stack = Vec::new();
    let mut round = 0usize;

    loop {
        round += 1;
        pred.fill(Some(Predecessor::Unmatched));
        for (_, u) in matching.iter() {
            pred[u] = None;
        }
        preds.fill(None);
        unmatched.clear();
        layer.clear();
        layer.extend((0..first_end).filter(|&u| pred[u].is_some()));

        while !layer.is_empty() && unmatched.is_empty() {
            for &u in &layer {
                for v in g.successors(u) {
                    let slot = v - first_end;
                    if preds[slot].is_some() {
                        continue;
                    }
                    let entry = &mut new_layer[slot];
                    if entry.is_none() {
                        discovered.push(v);
                    }
                    entry.get_or_insert_with(Vec::new).push(u);
                }
            }
            layer.clear();
            for v in discovered.drain(..) {
                let slot = v - first_end;
                preds[slot] = new_layer[slot].take();
                match matching.get(v) {
                    Some(m) => {
                        layer.push(m);
                        pred[m] = Some(Predecessor::End(v));
                    }
                    None => unmatched.push(v),
                }
            }
        }

        if unmatched.is_empty() {
            tracing::debug!(rounds = round, size = matching.len(), "maximum matching");
            return matching;
        }

        let mut augmented = 0usize;
        for &v in &unmatched {
            if augment_from(v, first_end, &mut pred, &mut preds, &mut matching, &mut stack) {
                augmented += 1;
            }
        }
        tracing::trace!(round, augmented, size = matching.len(), "hopcroft-karp round");
    }
}

struct Frame {
    end: usize,
    candidates: Vec<usize>,
    next: usize,
    /// Start node whose predecessor is being searched from the frame above.
    via: Option<usize>,
}

enum Step {
    Descend(usize, Vec<usize>),
    Done(bool),
}

/// Searches backward from the unmatched end node `root` through the layers for an alternating
/// path ending at an unmatched start node, flipping it on success. Layers consumed by the search
/// are removed, so the paths found within one round are vertex-disjoint.
fn augment_from(
    root: usize,
    first_end: usize,
    pred: &mut [Option<Predecessor>],
    preds: &mut [Option<Vec<usize>>],
    matching: &mut Matching,
    stack: &mut Vec<Frame>,
) -> bool {
    let Some(candidates) = preds[root - first_end].take() else {
        return false;
    };
    stack.clear();
    stack.push(Frame {
        end: root,
        candidates,
        next: 0,
        via: None,
    });

    let mut returned = None;
    while let Some(frame) = stack.last_mut() {
        if let Some(found) = returned.take() {
            let Some(u) = frame.via.take() else {
                debug_assert!(false, "resumed a frame without a pending start node");
                return false;
            };
            if found {
                matching.insert(frame.end, u);
                stack.pop();
                returned = Some(true);
                continue;
            }
        }

        let step = loop {
            let Some(&u) = frame.candidates.get(frame.next) else {
                break Step::Done(false);
            };
            frame.next += 1;
            match pred[u].take() {
                None => {}
                Some(Predecessor::Unmatched) => {
                    matching.insert(frame.end, u);
                    break Step::Done(true);
                }
                Some(Predecessor::End(w)) => {
                    if let Some(next) = preds[w - first_end].take() {
                        frame.via = Some(u);
                        break Step::Descend(w, next);
                    }
                }
            }
        };

        match step {
            Step::Descend(end, candidates) => stack.push(Frame {
                end,
                candidates,
                next: 0,
                via: None,
            }),
            Step::Done(found) => {
                stack.pop();
                returned = Some(found);
            }
        }
    }
    returned.unwrap_or(false)
}
