//! OpenAI Chat Completions client implementing `LlmClient` (ChatOpenAI).
//!
//! Uses the OpenAI Chat Completions API via `async_openai`. Requires
//! `OPENAI_API_KEY` (or explicit config, e.g. for a compatible proxy).
//! Optional tools can be set for function/tool calling; when present, the API
//! may return `tool_calls` in the response.

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse, LlmUsage};
use crate::message::{Message, ToolCall};
use crate::tool::ToolSpec;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionMessageToolCalls, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessage, ChatCompletionRequestUserMessage, ChatCompletionTool,
        ChatCompletionToolChoiceOption, ChatCompletionTools, CreateChatCompletionRequestArgs,
        FunctionObject, ToolChoiceOptions,
    },
    Client,
};

/// OpenAI Chat Completions client (aligns with LangChain's ChatOpenAI).
///
/// Uses `OPENAI_API_KEY` from the environment by default; or provide config
/// via [`ChatOpenAI::with_config`]. Set tools to enable tool_calls in the
/// response; the agent graph's tool node executes them.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    tools: Option<Vec<ToolSpec>>,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build client with default config (API key from `OPENAI_API_KEY` env).
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            tools: None,
            temperature: None,
        }
    }

    /// Build client with custom config (e.g. custom API key or base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            tools: None,
            temperature: None,
        }
    }

    /// Set tools for this completion (enables tool_calls in the response).
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Convert our `Message` list to OpenAI request messages.
    ///
    /// Tool results and raw envelopes are rendered as user-role text: the
    /// request carries plain system/user/assistant turns only.
    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::Human(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
                Message::Ai { content, .. } => {
                    ChatCompletionRequestMessage::Assistant((content.as_str()).into())
                }
                Message::Tool { content, name, .. } => {
                    let rendered = match name {
                        Some(name) => format!("[tool {} result] {}", name, content),
                        None => format!("[tool result] {}", content),
                    };
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                        rendered.as_str(),
                    ))
                }
                Message::Raw(value) => {
                    let rendered = value
                        .get("content")
                        .or_else(|| value.get("output"))
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| value.to_string());
                    ChatCompletionRequestMessage::Assistant((rendered.as_str()).into())
                }
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let openai_messages = Self::messages_to_request(messages);
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(openai_messages);

        if let Some(ref tools) = self.tools {
            let chat_tools: Vec<ChatCompletionTools> = tools
                .iter()
                .map(|t| {
                    ChatCompletionTools::Function(ChatCompletionTool {
                        function: FunctionObject {
                            name: t.name.clone(),
                            description: t.description.clone(),
                            parameters: Some(t.input_schema.clone()),
                            ..Default::default()
                        },
                    })
                })
                .collect();
            args.tools(chat_tools);
            args.tool_choice(ChatCompletionToolChoiceOption::Mode(ToolChoiceOptions::Auto));
        }

        if let Some(t) = self.temperature {
            args.temperature(t);
        }

        let request = args.build().map_err(|e| {
            AgentError::ExecutionFailed(format!("OpenAI request build failed: {}", e))
        })?;

        debug!(
            model = %self.model,
            message_count = messages.len(),
            tools_count = self.tools.as_ref().map(|t| t.len()).unwrap_or(0),
            temperature = ?self.temperature,
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&request) {
            trace!(request = %js, "OpenAI request body");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("OpenAI API error: {}", e)))?;

        let choice =
            response.choices.into_iter().next().ok_or_else(|| {
                AgentError::ExecutionFailed("OpenAI returned no choices".to_string())
            })?;

        let msg = choice.message;
        let content = msg.content.unwrap_or_default();
        let tool_calls: Vec<ToolCall> = msg
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .filter_map(|tc| {
                if let ChatCompletionMessageToolCalls::Function(f) = tc {
                    Some(ToolCall {
                        name: f.function.name,
                        arguments: f.function.arguments,
                        id: Some(f.id),
                    })
                } else {
                    None
                }
            })
            .collect();

        let usage = response.usage.map(|u| LlmUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        Ok(LlmResponse {
            content,
            tool_calls,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// **Scenario**: every message variant maps to a request message without panicking.
    #[test]
    fn messages_to_request_covers_all_variants() {
        let messages = vec![
            Message::system("sys"),
            Message::human("hi"),
            Message::ai("working", Some("agent1".into())),
            Message::tool("3 pm", Some("call-1".into()), Some("get_time".into())),
            Message::Raw(json!({"output": "done"})),
        ];
        let request = ChatOpenAI::messages_to_request(&messages);
        assert_eq!(request.len(), messages.len());
    }
}
