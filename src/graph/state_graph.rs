//! State graph builder: nodes plus explicit and conditional edges.
//!
//! Add nodes with `add_node`, wire them with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, and `add_conditional_edges` for
//! state-based routing. `compile` validates the topology and returns a
//! `CompiledStateGraph`.
//!
//! # Conditional edges
//!
//! From a source node, a routing function `(state) -> key` is called; the key
//! is used as the next node id, or looked up in an optional path map. A node
//! must have either one outgoing `add_edge` or `add_conditional_edges`, not
//! both. Cycles are allowed only through conditional edges; every run is
//! bounded by the recursion limit.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use crate::channels::{BoxedStateUpdater, ReplaceUpdater};

use super::compile_error::CompilationError;
use super::compiled::CompiledStateGraph;
use super::conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
use super::node::Node;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// Default ceiling on steps per run.
pub const DEFAULT_RECURSION_LIMIT: usize = 150;

/// State graph: nodes plus explicit edges and optional conditional edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge`, then
/// `compile()` to obtain an executable graph.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges (from_id, to_id). A node may have one outgoing edge or conditional edges, not both.
    edges: Vec<(String, String)>,
    /// Conditional edges: source node id -> router. Next node is resolved from state at runtime.
    conditional_edges: HashMap<String, ConditionalRouter<S>>,
    /// How node outputs are merged into state. Default replaces the state.
    state_updater: Option<BoxedStateUpdater<S>>,
    /// Maximum steps per run; reaching it ends the run without error.
    recursion_limit: usize,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Creates an empty graph with the default recursion limit.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            conditional_edges: HashMap::new(),
            state_updater: None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Attaches a custom state updater controlling how node outputs are
    /// merged into the running state (default: full replacement).
    pub fn with_state_updater(mut self, updater: BoxedStateUpdater<S>) -> Self {
        self.state_updater = Some(updater);
        self
    }

    /// Sets the maximum number of node executions per run.
    ///
    /// Reaching the limit is not an error: the run stops and the step events
    /// produced so far are returned.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Adds a node; id must be unique. Replaces if same id.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Use `START` for graph entry and `END` for graph exit. Both ids (except
    /// START/END) must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Adds conditional edges from `source`: after the source node runs,
    /// `path` is called with the updated state; its return value is the next
    /// node id, or a key looked up in `path_map` when provided.
    pub fn add_conditional_edges(
        &mut self,
        source: impl Into<String>,
        path: ConditionalRouterFn<S>,
        path_map: Option<HashMap<String, String>>,
    ) -> &mut Self {
        self.conditional_edges
            .insert(source.into(), ConditionalRouter::new(path, path_map));
        self
    }

    /// Builds the executable graph.
    ///
    /// Validates that every edge endpoint names a registered node, exactly
    /// one edge leaves START, some path reaches END, and no node mixes an
    /// unconditional edge with conditional edges. Returns `CompilationError`
    /// on the first violation; on success the graph is immutable and ready
    /// for `invoke`.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }
        for (source, router) in &self.conditional_edges {
            if !self.nodes.contains_key(source) {
                return Err(CompilationError::NodeNotFound(source.clone()));
            }
            if let Some(ref path_map) = router.path_map {
                for target in path_map.values() {
                    if target != END && !self.nodes.contains_key(target) {
                        return Err(CompilationError::InvalidConditionalPathMap(target.clone()));
                    }
                }
            }
        }

        let start_edges: Vec<_> = self
            .edges
            .iter()
            .filter(|(f, _)| f == START)
            .map(|(_, t)| t.clone())
            .collect();
        let first = match start_edges.len() {
            1 => start_edges.into_iter().next().ok_or(CompilationError::MissingStart)?,
            _ => return Err(CompilationError::MissingStart),
        };

        let has_end = self.edges.iter().any(|(_, t)| t == END)
            || self.conditional_edges.values().any(|r| {
                r.path_map
                    .as_ref()
                    .map_or(true, |m| m.values().any(|v| v == END))
            });
        if !has_end {
            return Err(CompilationError::MissingEnd);
        }

        let mut edge_froms = HashSet::new();
        for (from, _) in self.edges.iter().filter(|(f, _)| f.as_str() != START) {
            if !edge_froms.insert(from.clone()) {
                return Err(CompilationError::DuplicateEdge(from.clone()));
            }
        }
        for source in self.conditional_edges.keys() {
            if edge_froms.contains(source) {
                return Err(CompilationError::NodeHasBothEdgeAndConditional(
                    source.clone(),
                ));
            }
        }

        let mut next_map: HashMap<String, NextEntry<S>> = self
            .edges
            .iter()
            .filter(|(f, _)| f.as_str() != START)
            .map(|(f, t)| (f.clone(), NextEntry::Unconditional(t.clone())))
            .collect();
        for (source, router) in &self.conditional_edges {
            next_map.insert(source.clone(), NextEntry::Conditional(router.clone()));
        }

        let state_updater = self
            .state_updater
            .unwrap_or_else(|| Arc::new(ReplaceUpdater));

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            first_node_id: first,
            next_map,
            state_updater,
            recursion_limit: self.recursion_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::error::AgentError;
    use crate::graph::Next;

    #[derive(Clone, Debug)]
    struct DummyState(i32);

    #[derive(Clone)]
    struct DummyNode(&'static str);

    #[async_trait]
    impl Node<DummyState> for DummyNode {
        fn id(&self) -> &str {
            self.0
        }
        async fn run(&self, state: DummyState) -> Result<(DummyState, Next), AgentError> {
            Ok((state, Next::Continue))
        }
    }

    /// **Scenario**: compile fails when an edge references an unregistered node.
    #[test]
    fn compile_fails_on_unknown_edge_endpoint() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_edge(START, "a");
        graph.add_edge("a", "ghost");
        match graph.compile() {
            Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "ghost"),
            other => panic!("expected NodeNotFound(ghost), got {:?}", other.err()),
        }
    }

    /// **Scenario**: compile fails when no edge leaves START.
    #[test]
    fn compile_fails_without_start_edge() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_edge("a", END);
        assert!(matches!(
            graph.compile(),
            Err(CompilationError::MissingStart)
        ));
    }

    /// **Scenario**: compile fails when nothing reaches END.
    #[test]
    fn compile_fails_without_end() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_node("b", Arc::new(DummyNode("b")));
        graph.add_edge(START, "a");
        graph.add_edge("a", "b");
        assert!(matches!(graph.compile(), Err(CompilationError::MissingEnd)));
    }

    /// **Scenario**: compile fails when a node has both an edge and conditional edges.
    #[test]
    fn compile_fails_when_node_has_both_edge_and_conditional() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_node("b", Arc::new(DummyNode("b")));
        graph.add_edge(START, "a");
        graph.add_edge("a", "b");
        graph.add_edge("b", END);
        graph.add_conditional_edges(
            "a",
            Arc::new(|_| "b".to_string()),
            Some([("b".to_string(), "b".to_string())].into_iter().collect()),
        );
        match graph.compile() {
            Err(CompilationError::NodeHasBothEdgeAndConditional(id)) => assert_eq!(id, "a"),
            other => panic!("expected NodeHasBothEdgeAndConditional(a), got {:?}", other.err()),
        }
    }

    /// **Scenario**: compile fails when a conditional path_map targets a non-existent node.
    #[test]
    fn compile_fails_on_invalid_path_map_target() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_edge(START, "a");
        graph.add_conditional_edges(
            "a",
            Arc::new(|_| "x".to_string()),
            Some(
                [("x".to_string(), "nonexistent".to_string())]
                    .into_iter()
                    .collect(),
            ),
        );
        match graph.compile() {
            Err(CompilationError::InvalidConditionalPathMap(id)) => assert_eq!(id, "nonexistent"),
            other => panic!(
                "expected InvalidConditionalPathMap(nonexistent), got {:?}",
                other.err()
            ),
        }
    }
}
