pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] narwhal_graph::Error),

    #[error(
        "Tremaux ordinals cover {ordinal_nodes} nodes and {ordinal_edges} edges, but the graph has {node_count} nodes and {edge_count} edges"
    )]
    StaleTremaux {
        ordinal_nodes: usize,
        ordinal_edges: usize,
        node_count: usize,
        edge_count: usize,
    },

    #[error("first end index {first_end} exceeds the node count {node_count}")]
    InvalidPartition { first_end: usize, node_count: usize },

    #[error("edge {start} -> {end} does not run from a start node to an end node")]
    NotBipartite { start: usize, end: usize },

    #[error("pair {start} -> {end} is not a valid matching pair for this graph")]
    InvalidMatching { start: usize, end: usize },

    #[error("edge {from} -> {to} has invalid bounds [{low}, {cap}]")]
    InvalidBounds {
        from: usize,
        to: usize,
        low: i64,
        cap: i64,
    },

    #[error("edge {from} -> {to} is already declared")]
    DuplicateEdge { from: usize, to: usize },

    #[error("no edge {from} -> {to}")]
    MissingEdge { from: usize, to: usize },

    #[error("the current flow is not feasible")]
    InfeasibleFlow,

    #[error("flow is unbalanced at node {node} (inflow - outflow = {excess})")]
    Unbalanced { node: usize, excess: i64 },

    #[error("{from} -> {to} is not an arc of the residual graph")]
    NotResidualPath { from: usize, to: usize },
}
