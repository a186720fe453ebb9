pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("row {row} has {len} entries, expected {expected}")]
    DimensionMismatch {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    #[error("heap is full (capacity {capacity})")]
    HeapFull { capacity: usize },

    #[error("element {index} is outside the heap index range 0..{capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("element {index} is already queued")]
    AlreadyQueued { index: usize },
}
