//! Generative person identification.
//!
//! Every operation returns plain text and never an error: failures are
//! rendered as strings containing `"Error"` so they can be told apart
//! downstream without a separate error channel.

use tracing::{debug, warn};

use notable_core::config::LlmConfig;

use crate::provider::{LlmError, LlmProvider, Message};

/// Sampling settings applied to every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentifierSettings {
    pub temperature: f32,
    /// Token cap for `identify` and the condensed summary.
    pub identify_max_tokens: u32,
    /// Default token cap for free-form prompts.
    pub freeform_max_tokens: u32,
}

impl Default for IdentifierSettings {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            identify_max_tokens: 150,
            freeform_max_tokens: 300,
        }
    }
}

impl From<&LlmConfig> for IdentifierSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            identify_max_tokens: config.identify_max_tokens,
            freeform_max_tokens: config.freeform_max_tokens,
        }
    }
}

pub struct GenerativeIdentifier {
    provider: Box<dyn LlmProvider>,
    settings: IdentifierSettings,
}

impl GenerativeIdentifier {
    pub fn new(provider: Box<dyn LlmProvider>, settings: IdentifierSettings) -> Self {
        Self { provider, settings }
    }

    /// Build from config, creating the chat-completions provider.
    pub fn from_config(llm_config: &LlmConfig) -> Result<Self, LlmError> {
        let provider = crate::providers::create_provider(llm_config)?;
        Ok(Self::new(provider, IdentifierSettings::from(llm_config)))
    }

    pub fn settings(&self) -> IdentifierSettings {
        self.settings
    }

    pub fn model_info(&self) -> String {
        format!("Using model: {}", self.provider.model())
    }

    /// Identify a person from model knowledge alone.
    pub async fn identify(&self, first: &str, last: &str) -> String {
        let prompt = identify_prompt(first, last);
        match self.ask(prompt, self.settings.identify_max_tokens).await {
            Ok(text) => text,
            Err(e) => {
                warn!(first, last, error = %e, "identify failed");
                match e {
                    LlmError::ApiError { status, .. } => {
                        format!("Error identifying person: Error code: {status}")
                    }
                    other => format!("Error identifying person: {other}"),
                }
            }
        }
    }

    /// Condense authoritative source text into 1-2 sentences without adding facts.
    pub async fn summarize(&self, name: &str, source_text: &str, max_tokens: u32) -> String {
        self.freeform(&summarize_prompt(name, source_text), max_tokens)
            .await
    }

    /// Send an arbitrary prompt.
    pub async fn freeform(&self, prompt: &str, max_tokens: u32) -> String {
        match self.ask(prompt.to_string(), max_tokens).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "completion failed");
                match e {
                    LlmError::ApiError { status, .. } => {
                        format!("Error: API returned status {status}")
                    }
                    other => format!("Error: {other}"),
                }
            }
        }
    }

    /// Describe the most notable work of someone already identified.
    pub async fn research_best_work(&self, name: &str, info: &str) -> String {
        self.freeform(
            &best_work_prompt(name, info),
            self.settings.freeform_max_tokens,
        )
        .await
    }

    async fn ask(&self, prompt: String, max_tokens: u32) -> Result<String, LlmError> {
        debug!(max_tokens, "sending prompt");
        let text = self
            .provider
            .complete(vec![Message::user(prompt)], self.settings.temperature, max_tokens)
            .await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::ParseError("empty completion".into()));
        }
        Ok(text.to_string())
    }
}

fn identify_prompt(first: &str, last: &str) -> String {
    format!(
        "Briefly identify who {first} {last} is.\n\n\
         If this is a famous person, provide their profession/notability in 1-2 sentences.\n\
         If this is a fictional character, identify them as such.\n\
         If you don't recognize this name, respond with \"Unknown person\".\n\n\
         Keep the response concise (max 3 sentences)."
    )
}

fn summarize_prompt(name: &str, source_text: &str) -> String {
    format!(
        "Based only on this Wikipedia information about {name}:\n\n\
         {source_text}\n\n\
         Provide a concise 1-2 sentence summary of who they are and what they're known for.\n\
         Include their profession/field and main achievement.\n\
         Use only facts stated in the text above; do not add anything else."
    )
}

fn best_work_prompt(name: &str, info: &str) -> String {
    format!(
        "Based on this information about {name}:\n{info}\n\n\
         Provide a detailed description (3-5 sentences) of their most notable work or achievement.\n\
         Focus on:\n\
         1. What they are most famous for\n\
         2. The impact or significance of this work\n\
         3. Any awards or recognition received\n\n\
         If they have multiple notable works, focus on the most significant one."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Replies with a fixed result and records every prompt it receives.
    struct MockProvider {
        reply: Result<String, u16>,
        prompts: Arc<Mutex<Vec<(String, u32)>>>,
    }

    impl MockProvider {
        fn replying(text: &str) -> (Self, Arc<Mutex<Vec<(String, u32)>>>) {
            let prompts = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    reply: Ok(text.to_string()),
                    prompts: prompts.clone(),
                },
                prompts,
            )
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn complete(
            &self,
            messages: Vec<Message>,
            _temperature: f32,
            max_tokens: u32,
        ) -> Result<String, LlmError> {
            let prompt = messages
                .into_iter()
                .map(|m| m.content)
                .collect::<Vec<_>>()
                .join("\n");
            self.prompts.lock().unwrap().push((prompt, max_tokens));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::ApiError {
                    status: *status,
                    body: "upstream failure".into(),
                }),
            }
        }

        fn model(&self) -> &str {
            "mock/model"
        }
    }

    fn identifier(provider: MockProvider) -> GenerativeIdentifier {
        GenerativeIdentifier::new(Box::new(provider), IdentifierSettings::default())
    }

    #[tokio::test]
    async fn identify_prompt_asks_for_unknown_person() {
        let (provider, prompts) = MockProvider::replying("  Unknown person  ");
        let id = identifier(provider);

        assert_eq!(id.identify("Zyx", "Qwv").await, "Unknown person");

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let (prompt, max_tokens) = &prompts[0];
        assert!(prompt.contains("Zyx Qwv"));
        assert!(prompt.contains("\"Unknown person\""));
        assert!(prompt.contains("fictional character"));
        assert_eq!(*max_tokens, 150);
    }

    #[tokio::test]
    async fn identify_status_error_contains_error() {
        let id = identifier(MockProvider::failing(429));
        let text = id.identify("Isaac", "Newton").await;
        assert_eq!(text, "Error identifying person: Error code: 429");
    }

    #[tokio::test]
    async fn freeform_status_error_contains_error() {
        let id = identifier(MockProvider::failing(500));
        assert_eq!(
            id.freeform("anything", 50).await,
            "Error: API returned status 500"
        );
    }

    #[tokio::test]
    async fn empty_completion_is_an_error() {
        let (provider, _) = MockProvider::replying("   ");
        let id = identifier(provider);
        let text = id.identify("Isaac", "Newton").await;
        assert!(text.contains("Error"));
        assert!(text.contains("empty completion"));
    }

    #[tokio::test]
    async fn summarize_quotes_source_and_forbids_new_facts() {
        let (provider, prompts) = MockProvider::replying("An English mathematician.");
        let id = identifier(provider);

        let text = id
            .summarize("Isaac Newton", "Isaac Newton was an English mathematician.", 150)
            .await;
        assert_eq!(text, "An English mathematician.");

        let prompts = prompts.lock().unwrap();
        let (prompt, max_tokens) = &prompts[0];
        assert!(prompt.contains("Isaac Newton was an English mathematician."));
        assert!(prompt.contains("Use only facts stated in the text above"));
        assert_eq!(*max_tokens, 150);
    }

    #[tokio::test]
    async fn research_best_work_uses_freeform_budget() {
        let (provider, prompts) = MockProvider::replying("Principia Mathematica.");
        let id = identifier(provider);

        id.research_best_work("Isaac Newton", "A physicist.").await;

        let prompts = prompts.lock().unwrap();
        let (prompt, max_tokens) = &prompts[0];
        assert!(prompt.contains("most notable work"));
        assert!(prompt.contains("A physicist."));
        assert_eq!(*max_tokens, 300);
    }

    #[test]
    fn model_info_names_model() {
        let (provider, _) = MockProvider::replying("x");
        assert_eq!(identifier(provider).model_info(), "Using model: mock/model");
    }
}
