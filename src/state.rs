//! Shared conversation state threaded through the graph.
//!
//! One state value is created per top-level invocation, passed to every node,
//! and dropped when the run ends. `messages` is append-only: nodes carry the
//! input forward and push their own output, never truncate.

use crate::message::Message;

/// Conversation state: append-only message log plus last-sender marker.
///
/// `sender` names the agent that produced the last message; the tool node
/// leaves it unchanged so routing returns control to the invoking agent.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AgentState {
    /// Ordered message log, merged by concatenation across steps.
    pub messages: Vec<Message>,
    /// Name of the agent that produced the last message.
    pub sender: String,
}

impl AgentState {
    /// Seeds a fresh state with one human message and an empty sender.
    pub fn from_human_message(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::human(content)],
            sender: String::new(),
        }
    }

    /// The most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
