//! Graph node trait: one step in a `StateGraph`.
//!
//! Receives state `S`, returns updated `S` and `Next` (continue, jump, or
//! end). The node adapter for agents and the tool node both implement this.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// The run loop uses the returned `Next` to choose the next node unless the
/// node has conditional edges, in which case the router's decision wins.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. an agent name, or `"tool_node"`). Unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}
