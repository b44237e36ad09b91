//! Agent execution error types.
//!
//! Used by `Agent::invoke`, graph nodes, and the compiled graph run loop.

use thiserror::Error;

/// Agent execution error.
///
/// Returned when an agent, tool, or LLM step fails. Failures propagate to the
/// top-level caller of `invoke`; there is no automatic retry.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, tool error).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// An agent reply did not match any known shape.
    ///
    /// Raised by the node adapter when a raw envelope carries neither a
    /// `content` nor an `output` field, so no message can be extracted.
    #[error("malformed agent reply: {0}")]
    MalformedReply(String),
}
