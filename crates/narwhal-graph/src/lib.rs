#![forbid(unsafe_code)]

//! Graph containers used by `narwhal`.
//!
//! Nodes are dense indices `0..n`. The crate provides the [`DirectedGraph`] capability that the
//! algorithms are written against, a few concrete representations, and the [`IndexedHeap`]
//! priority queue backing Dijkstra.

pub mod error;
pub mod graph;
pub mod heap;

pub use error::{Error, Result};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, DirectedGraph, MutableGraph, WeightedEdge, WeightedGraph,
};
pub use heap::{HeapOrder, Indexed, IndexedHeap};
