//! Single-turn chain: prompt template, LLM call, plain-text output.
//!
//! The base chain downstream packages subclassed: a question flows through a
//! prompt template into the main LLM, and the assistant text comes back. The
//! clinical and grounding LLM handles are carried for subclass-style chains
//! that route parts of the prompt to specialized models.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

/// Prompt template with `{placeholder}` substitution.
///
/// Unknown placeholders are left verbatim so a partially-bound template still
/// renders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Builds a template from a format string with `{name}` placeholders.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitutes the given variables into the template.
    pub fn format(&self, vars: &HashMap<&str, String>) -> String {
        let mut out = self.template.clone();
        for (key, value) in vars {
            out = out.replace(&format!("{{{}}}", key), value);
        }
        out
    }
}

/// Explicit per-role LLM configuration for a chain.
///
/// Replaces registry lookups: the caller resolves defaults and passes the
/// handles at construction.
#[derive(Clone)]
pub struct ChainLlms {
    /// LLM answering the user-facing question.
    pub main: Arc<dyn LlmClient>,
    /// LLM for clinical-content sub-prompts.
    pub clinical: Arc<dyn LlmClient>,
    /// LLM for grounding/citation sub-prompts.
    pub grounding: Arc<dyn LlmClient>,
}

impl ChainLlms {
    /// Uses one client for all three roles.
    pub fn uniform(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            main: llm.clone(),
            clinical: llm.clone(),
            grounding: llm,
        }
    }
}

/// Input to a chain invocation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChainInput {
    pub question: String,
}

/// Single-turn chain: prompt | main LLM | string output.
pub struct Chain {
    name: String,
    description: String,
    prompt: PromptTemplate,
    llms: ChainLlms,
}

impl Chain {
    /// Builds a chain with an explicit prompt and LLM configuration.
    pub fn new(name: impl Into<String>, prompt: PromptTemplate, llms: ChainLlms) -> Self {
        let name = name.into();
        let description = name.clone();
        Self {
            name,
            description,
            prompt,
            llms,
        }
    }

    /// Overrides the default description (which equals the name).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Clinical LLM handle for subclass-style chains.
    pub fn clinical_llm(&self) -> &Arc<dyn LlmClient> {
        &self.llms.clinical
    }

    /// Grounding LLM handle for subclass-style chains.
    pub fn grounding_llm(&self) -> &Arc<dyn LlmClient> {
        &self.llms.grounding
    }

    /// One invocation: format the prompt with the question, call the main
    /// LLM, return the assistant text.
    pub async fn invoke(&self, input: &ChainInput) -> Result<String, AgentError> {
        let mut vars = HashMap::new();
        vars.insert("question", input.question.clone());
        let rendered = self.prompt.format(&vars);
        let response = self
            .llms
            .main
            .invoke(&[Message::human(rendered)])
            .await?;
        Ok(response.content)
    }
}
