//! State graph: nodes, edges, conditional routing, bounded execution.
//!
//! `StateGraph` builds the machine; `CompiledStateGraph` runs it;
//! `AgentGraph` assembles one from a declarative agent/edge list.

mod agent_graph;
mod agent_node;
mod compile_error;
mod compiled;
mod conditional;
mod logging;
mod next;
mod node;
mod state_graph;

pub use agent_graph::{AgentGraph, EdgeSpec, GraphConfig};
pub use agent_node::{AgentNode, ToolNode, TOOL_NODE};
pub use compile_error::CompilationError;
pub use compiled::{CompiledStateGraph, GraphRun, StepEvent};
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state, log_recursion_limit,
};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, DEFAULT_RECURSION_LIMIT, END, START};
