//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` and `AgentGraph::new` when the declared
//! topology references unknown nodes or is otherwise invalid. Configuration
//! errors fail fast at assembly time; nothing is retried.

use thiserror::Error;

/// Error when compiling a state graph.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in an edge was not registered (and is not START/END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// The configured entry point does not name a known agent.
    #[error("entry point not found: {0}")]
    EntryPointNotFound(String),

    /// No edge has from_id == START, or more than one such edge.
    #[error("graph must have exactly one edge from START")]
    MissingStart,

    /// The graph has no path to END.
    #[error("graph must have an edge or conditional branch to END")]
    MissingEnd,

    /// A node has both an outgoing edge and conditional edges.
    #[error("node has both edge and conditional edges: {0}")]
    NodeHasBothEdgeAndConditional(String),

    /// A node has more than one unconditional outgoing edge.
    #[error("node has multiple outgoing edges: {0}")]
    DuplicateEdge(String),

    /// A value in a conditional path_map is not a valid node id or END.
    #[error("conditional path_map invalid target: {0}")]
    InvalidConditionalPathMap(String),

    /// The agent list was empty.
    #[error("graph requires at least one agent")]
    NoAgents,
}
