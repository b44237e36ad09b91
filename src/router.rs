//! Router: pure predicate over the last message choosing the next branch.
//!
//! Three outcomes per decision point: the previous agent requested a tool
//! (`CallTool`), an agent declared the work done with a sentinel end-word
//! (`End`), or the hand-off continues along the edge (`Continue`). The router
//! consults nothing but the last message and never fails on missing fields.

use crate::state::AgentState;

/// Default sentinel: any agent saying this ends the run.
pub const DEFAULT_END_WORD: &str = "FINAL ANSWER";

/// Routing key for the tool-execution node.
pub const CALL_TOOL: &str = "call_tool";

/// Routing key for advancing along the declared edge.
pub const CONTINUE: &str = "continue";

/// Routing decision for a conditional edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The previous agent is invoking a tool; hand off to the tool node.
    CallTool,
    /// Advance to the edge's declared target.
    Continue,
    /// An agent decided the work is done; transition to termination.
    End,
}

impl Route {
    /// Routing key used in conditional path maps.
    pub fn as_key(&self) -> &'static str {
        match self {
            Route::CallTool => CALL_TOOL,
            Route::Continue => CONTINUE,
            Route::End => crate::graph::END,
        }
    }
}

/// Router over the last message: sentinel end-words and pending tool calls.
///
/// End-word matching is case-insensitive substring search over the message
/// content, falling back to a raw envelope's `output` field when content is
/// not accessible. No other state is consulted.
#[derive(Debug, Clone)]
pub struct Router {
    end_words: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(vec![DEFAULT_END_WORD.to_string()])
    }
}

impl Router {
    /// Builds a router with the given sentinel end-words.
    ///
    /// An empty list means no sentinel can end the run; only the recursion
    /// limit stops it.
    pub fn new(end_words: Vec<String>) -> Self {
        let end_words = end_words
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { end_words }
    }

    /// Decides the next branch from the last message in `state`.
    ///
    /// Empty state routes `Continue` (nothing to inspect yet).
    pub fn route(&self, state: &AgentState) -> Route {
        let Some(last) = state.last_message() else {
            return Route::Continue;
        };
        if !last.tool_calls().is_empty() {
            return Route::CallTool;
        }
        let text = last.content().or_else(|| last.output());
        if let Some(text) = text {
            let lower = text.to_lowercase();
            if self.end_words.iter().any(|w| lower.contains(w)) {
                return Route::End;
            }
        }
        Route::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Message, ToolCall};
    use serde_json::json;

    fn state_with(msg: Message) -> AgentState {
        AgentState {
            messages: vec![msg],
            sender: "agent1".to_string(),
        }
    }

    /// **Scenario**: content containing a configured end-word routes End, case-insensitively.
    #[test]
    fn end_word_in_content_routes_end() {
        let router = Router::default();
        for content in ["FINAL ANSWER: 42", "final answer: 42", "the Final Answer is 42"] {
            let state = state_with(Message::ai(content, Some("agent1".into())));
            assert_eq!(router.route(&state), Route::End, "content: {}", content);
        }
    }

    /// **Scenario**: content without an end-word routes Continue.
    #[test]
    fn plain_content_routes_continue() {
        let router = Router::default();
        let state = state_with(Message::ai("still working", Some("agent1".into())));
        assert_eq!(router.route(&state), Route::Continue);
    }

    /// **Scenario**: pending tool calls route CallTool before any end-word check.
    #[test]
    fn pending_tool_calls_route_call_tool() {
        let router = Router::default();
        let state = state_with(Message::Ai {
            content: "FINAL ANSWER soon".into(),
            name: Some("agent1".into()),
            tool_calls: vec![ToolCall {
                id: Some("call-1".into()),
                name: "get_time".into(),
                arguments: "{}".into(),
            }],
        });
        assert_eq!(router.route(&state), Route::CallTool);
    }

    /// **Scenario**: raw envelope without content falls back to the output field.
    #[test]
    fn raw_envelope_output_fallback() {
        let router = Router::default();
        let state = state_with(Message::Raw(json!({"output": "final answer reached"})));
        assert_eq!(router.route(&state), Route::End);
    }

    /// **Scenario**: raw envelope with neither field routes Continue, without panicking.
    #[test]
    fn raw_envelope_missing_fields_routes_continue() {
        let router = Router::default();
        let state = state_with(Message::Raw(json!({"unrelated": true})));
        assert_eq!(router.route(&state), Route::Continue);
    }

    /// **Scenario**: empty message log routes Continue.
    #[test]
    fn empty_state_routes_continue() {
        let router = Router::default();
        assert_eq!(router.route(&AgentState::default()), Route::Continue);
    }

    /// **Scenario**: custom end-words are honored; the default is not.
    #[test]
    fn custom_end_words() {
        let router = Router::new(vec!["DONE".to_string(), "TERMINATE".to_string()]);
        let done = state_with(Message::ai("we are done", Some("a".into())));
        assert_eq!(router.route(&done), Route::End);
        let default_word = state_with(Message::ai("FINAL ANSWER", Some("a".into())));
        assert_eq!(router.route(&default_word), Route::Continue);
    }
}
