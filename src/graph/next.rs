//! Next-step result from a graph node: continue, jump to a node, or end.
//!
//! The run loop uses this to decide the next node, unless the current node
//! has conditional edges (then the router decides instead).

/// Next step after running a node.
///
/// - **Continue**: follow the node's outgoing edge.
/// - **Node(id)**: jump to the given node.
/// - **End**: stop; the current state is the final result.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the outgoing edge; if none exists, equivalent to End.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}
