#![forbid(unsafe_code)]

//! Graph algorithms over dense, index-addressed graphs.
//!
//! The containers live in [`narwhal_graph`] (re-exported as [`graph`]). This crate adds:
//!
//! - [`Tremaux`] depth-first ordinals and strongly connected [`Components`],
//! - breadth-first path search ([`PathSearch`], [`compute_path`]),
//! - maximum bipartite matching ([`maximum_matching`]),
//! - shortest paths with nonnegative weights ([`ShortestPaths`]),
//! - flows with lower bounds ([`FlowNetwork`]).
//!
//! Set `NARWHAL_TIMING=1` to log per-algorithm wall time through `tracing` at debug level.

pub use narwhal_graph as graph;

pub mod dijkstra;
pub mod error;
pub mod flow;
pub mod matching;
pub mod path;
pub mod scc;
mod timing;
pub mod tremaux;

pub use dijkstra::ShortestPaths;
pub use error::{Error, Result};
pub use flow::{FlowEdge, FlowNetwork};
pub use matching::{Matching, greedy_matching, maximum_matching, maximum_matching_from};
pub use path::{PathSearch, compute_path};
pub use scc::{Components, strongly_connected_components};
pub use tremaux::Tremaux;

/// Whether `NARWHAL_TIMING` is set.
pub fn timing_enabled() -> bool {
    timing::enabled()
}
