//! # dhti-base
//!
//! Base building blocks for LLM pipelines: single-turn chains, tool-using
//! agents, and multi-agent collaboration graphs, designed to be composed by
//! downstream packages. One shared conversation state flows through every
//! node: an append-only message log plus a last-sender marker.
//!
//! ## Design principles
//!
//! - **Append-only state**: nodes carry the input forward and append their
//!   output; `messages` is never truncated.
//! - **Explicit configuration**: agents, chains, and graphs take plain
//!   config structs at construction; there is no process-wide registry.
//! - **Bounded execution**: every graph run is capped by a recursion limit;
//!   reaching it returns the partial step sequence, it does not crash.
//! - **Fail fast on topology**: unknown entry points or edge endpoints are
//!   configuration errors at assembly time, never runtime surprises.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`AgentGraph`],
//!   [`Node`], [`Next`] — build and run agent state machines.
//! - [`traits`]: [`Agent`] trait and the [`AgentReply`] result union.
//! - [`router`]: [`Router`] / [`Route`] — sentinel end-words and tool routing.
//! - [`state`] / [`message`]: [`AgentState`], [`Message`], [`ToolCall`].
//! - [`agent`]: [`LlmAgent`] — prefix/suffix prompt + tools over an LLM.
//! - [`chain`]: [`Chain`], [`PromptTemplate`], [`ChainLlms`].
//! - [`llm`]: [`LlmClient`] trait, [`MockLlm`], [`ChatOpenAI`].
//! - [`embedding`]: [`EmbeddingClient`] for OpenAI-style `/embeddings`.
//! - [`tool`]: [`Tool`] trait and [`ToolSpec`].
//! - [`channels`]: [`StateUpdater`] merge strategies.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use dhti_base::{Agent, AgentError, AgentGraph, AgentReply, AgentState, EdgeSpec, GraphConfig};
//!
//! struct EchoAgent;
//!
//! #[async_trait]
//! impl Agent for EchoAgent {
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//!
//!     async fn invoke(&self, state: &AgentState) -> Result<AgentReply, AgentError> {
//!         let text = state
//!             .last_message()
//!             .and_then(|m| m.content())
//!             .unwrap_or_default();
//!         Ok(AgentReply::text(format!("FINAL ANSWER: {}", text)))
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = AgentGraph::new(
//!     vec![Arc::new(EchoAgent)],
//!     vec![],
//!     GraphConfig {
//!         entry_point: "echo".into(),
//!         ends: vec!["echo".into()],
//!         ..GraphConfig::default()
//!     },
//! )?;
//! let run = graph.invoke("hello").await?;
//! println!("{} steps", run.events.len());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod chain;
pub mod channels;
pub mod embedding;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod router;
pub mod state;
pub mod tool;
pub mod traits;

pub use agent::{AgentConfig, LlmAgent};
pub use chain::{Chain, ChainInput, ChainLlms, PromptTemplate};
pub use channels::{BoxedStateUpdater, FieldBasedUpdater, ReplaceUpdater, StateUpdater};
pub use embedding::{EmbeddingClient, EmbeddingConfig, EmbeddingError};
pub use error::AgentError;
pub use graph::{
    AgentGraph, AgentNode, CompilationError, CompiledStateGraph, EdgeSpec, GraphConfig, GraphRun,
    Next, Node, StateGraph, StepEvent, ToolNode, DEFAULT_RECURSION_LIMIT, END, START, TOOL_NODE,
};
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, LlmUsage, MockLlm};
pub use message::{Message, ToolCall};
pub use router::{Route, Router, DEFAULT_END_WORD};
pub use state::AgentState;
pub use tool::{Tool, ToolSpec};
pub use traits::{Agent, AgentReply};
