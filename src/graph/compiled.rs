//! Compiled state graph: immutable, bounded-step interpreter.
//!
//! Built by `StateGraph::compile`. Runs one node at a time, single-threaded
//! and cooperative; after each node the conditional router (when present) or
//! the node's returned `Next` chooses the next node. Every run is bounded by
//! the recursion limit; reaching it is a recoverable condition, not an error.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::channels::BoxedStateUpdater;
use crate::error::AgentError;

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state, log_recursion_limit,
};
use super::state_graph::END;
use super::{Next, NextEntry, Node};

/// The state update produced by one node execution.
#[derive(Debug, Clone)]
pub struct StepEvent<S> {
    /// Id of the node that ran.
    pub node_id: String,
    /// The node's returned state update, after merging.
    pub state: S,
}

/// Outcome of one graph run: the step events in execution order, the final
/// state, and whether the run stopped at the recursion limit.
#[derive(Debug, Clone)]
pub struct GraphRun<S> {
    /// One event per executed node, in order.
    pub events: Vec<StepEvent<S>>,
    /// State after the last executed node.
    pub state: S,
    /// True when the run stopped because the step ceiling was reached.
    pub limit_reached: bool,
}

/// Compiled graph: immutable structure, supports invoke only.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// First node to run (from START).
    pub(super) first_node_id: String,
    /// Map from node id to how the next node is chosen.
    pub(super) next_map: HashMap<String, NextEntry<S>>,
    /// How node outputs are merged into the running state.
    pub(super) state_updater: BoxedStateUpdater<S>,
    /// Maximum node executions per run.
    pub(super) recursion_limit: usize,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Runs the graph from the entry node with the given state.
    ///
    /// Each node execution appends one [`StepEvent`]. The run ends when a
    /// routing decision reaches `END`, a node returns `Next::End`, or the
    /// recursion limit is hit (`limit_reached` set, partial events returned).
    /// A failed node or tool call propagates to the caller; no retry.
    pub async fn invoke(&self, state: S) -> Result<GraphRun<S>, AgentError> {
        log_graph_start();

        let mut state = state;
        let mut current_id = self.first_node_id.clone();
        let mut events: Vec<StepEvent<S>> = Vec::new();

        loop {
            if events.len() >= self.recursion_limit {
                log_recursion_limit(self.recursion_limit);
                return Ok(GraphRun {
                    events,
                    state,
                    limit_reached: true,
                });
            }

            let node = self.nodes.get(&current_id).cloned().ok_or_else(|| {
                AgentError::ExecutionFailed(format!("node not found at runtime: {}", current_id))
            })?;

            log_node_start(&current_id);
            log_node_state(&current_id, &state);

            let (new_state, next) = match node.run(state.clone()).await {
                Ok(output) => output,
                Err(e) => {
                    log_graph_error(&e);
                    return Err(e);
                }
            };

            log_node_complete(&current_id, &next);

            self.state_updater.apply_update(&mut state, &new_state);
            events.push(StepEvent {
                node_id: current_id.clone(),
                state: new_state,
            });

            let next_id: Option<String> =
                if let Some(NextEntry::Conditional(router)) = self.next_map.get(&current_id) {
                    let target = router.resolve_next(&state);
                    tracing::debug!(from = %current_id, to = %target, "conditional routing");
                    Some(target)
                } else {
                    match next {
                        Next::End => None,
                        Next::Node(id) => Some(id),
                        Next::Continue => {
                            self.next_map.get(&current_id).and_then(|e| match e {
                                NextEntry::Unconditional(id) => Some(id.clone()),
                                NextEntry::Conditional(_) => None,
                            })
                        }
                    }
                };

            match next_id {
                None => break,
                Some(id) if id == END => break,
                Some(id) => current_id = id,
            }
        }

        log_graph_complete(events.len());
        Ok(GraphRun {
            events,
            state,
            limit_reached: false,
        })
    }
}
