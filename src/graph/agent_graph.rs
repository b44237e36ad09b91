//! Multi-agent collaboration graph: declarative assembly over the state machine.
//!
//! Translates a declarative agent/edge list into `StateGraph` calls: one node
//! per agent, one shared tool node, router-driven conditional branches, and
//! unconditional hand-offs. The compiled machine is a bounded-step
//! interpreter over the shared conversation state.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::AgentError;
use crate::router::{Router, CALL_TOOL, CONTINUE};
use crate::state::AgentState;
use crate::tool::Tool;
use crate::traits::Agent;

use super::agent_node::{AgentNode, ToolNode, TOOL_NODE};
use super::compile_error::CompilationError;
use super::compiled::{CompiledStateGraph, GraphRun};
use super::state_graph::{StateGraph, DEFAULT_RECURSION_LIMIT, END, START};

/// One declared hand-off between agents.
///
/// When `conditional` is true, the router decides at runtime between
/// advancing to `to`, calling the tool node, or ending the run; otherwise
/// the hand-off is unconditional.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub conditional: bool,
}

/// Declarative configuration of an agent graph.
///
/// All defaults are resolved here, at the call site; there is no
/// process-wide registry.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Declared hand-offs between agents.
    pub edges: Vec<EdgeSpec>,
    /// Agent that receives the initial human message.
    pub entry_point: String,
    /// Agents with an unconditional edge to termination.
    pub ends: Vec<String>,
    /// Sentinel end-words; any agent saying one ends the run.
    pub end_words: Vec<String>,
    /// Maximum number of node executions per run.
    pub recursion_limit: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            entry_point: String::new(),
            ends: Vec::new(),
            end_words: vec![crate::router::DEFAULT_END_WORD.to_string()],
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Executable multi-agent graph.
///
/// Built once from agents, tools, and a [`GraphConfig`]; configuration
/// errors (unknown entry point or edge endpoint) surface at construction,
/// before any invocation. An agent listed in `ends` must not also be the
/// source of a conditional edge; it has exactly one outgoing transition.
pub struct AgentGraph {
    compiled: CompiledStateGraph<AgentState>,
}

impl AgentGraph {
    /// Assembles and compiles the graph.
    pub fn new(
        agents: Vec<Arc<dyn Agent>>,
        tools: Vec<Arc<dyn Tool>>,
        config: GraphConfig,
    ) -> Result<Self, CompilationError> {
        if agents.is_empty() {
            return Err(CompilationError::NoAgents);
        }
        let names: HashSet<String> = agents.iter().map(|a| a.name().to_string()).collect();
        if !names.contains(&config.entry_point) {
            return Err(CompilationError::EntryPointNotFound(
                config.entry_point.clone(),
            ));
        }
        for edge in &config.edges {
            if !names.contains(&edge.from) {
                return Err(CompilationError::NodeNotFound(edge.from.clone()));
            }
            if !names.contains(&edge.to) {
                return Err(CompilationError::NodeNotFound(edge.to.clone()));
            }
        }
        for end in &config.ends {
            if !names.contains(end) {
                return Err(CompilationError::NodeNotFound(end.clone()));
            }
        }

        let router = Router::new(config.end_words.clone());
        let mut graph =
            StateGraph::<AgentState>::new().with_recursion_limit(config.recursion_limit);

        for agent in &agents {
            graph.add_node(agent.name(), Arc::new(AgentNode::new(agent.clone())));
        }
        graph.add_node(TOOL_NODE, Arc::new(ToolNode::new(tools)));

        graph.add_edge(START, config.entry_point.clone());
        for end in &config.ends {
            graph.add_edge(end.clone(), END);
        }

        for edge in &config.edges {
            if edge.conditional {
                let router = router.clone();
                let path_map: HashMap<String, String> = [
                    (CONTINUE.to_string(), edge.to.clone()),
                    (CALL_TOOL.to_string(), TOOL_NODE.to_string()),
                    (END.to_string(), END.to_string()),
                ]
                .into_iter()
                .collect();
                graph.add_conditional_edges(
                    edge.from.clone(),
                    Arc::new(move |state: &AgentState| {
                        router.route(state).as_key().to_string()
                    }),
                    Some(path_map),
                );
            } else {
                graph.add_edge(edge.from.clone(), edge.to.clone());
            }
        }

        // The tool node does not update `sender`, so routing on it returns
        // control to the agent that invoked the tool.
        let sender_map: HashMap<String, String> =
            names.iter().map(|n| (n.clone(), n.clone())).collect();
        graph.add_conditional_edges(
            TOOL_NODE,
            Arc::new(|state: &AgentState| state.sender.clone()),
            Some(sender_map),
        );

        Ok(Self {
            compiled: graph.compile()?,
        })
    }

    /// Runs the graph from a single human message.
    ///
    /// Returns one step event per executed node; a run that hits the
    /// recursion limit returns the partial event sequence with
    /// `limit_reached` set.
    pub async fn invoke(&self, message: &str) -> Result<GraphRun<AgentState>, AgentError> {
        self.compiled
            .invoke(AgentState::from_human_message(message))
            .await
    }

    /// Runs the graph from an already-seeded state.
    pub async fn invoke_state(
        &self,
        state: AgentState,
    ) -> Result<GraphRun<AgentState>, AgentError> {
        self.compiled.invoke(state).await
    }
}
