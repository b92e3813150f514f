pub mod openai;

use notable_core::config::LlmConfig;

use crate::provider::{LlmError, LlmProvider};

/// Create the chat-completions provider described by config.
pub fn create_provider(llm_config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    let api_key = llm_config
        .api_key
        .as_ref()
        .ok_or_else(|| LlmError::NotConfigured("OPENROUTER_API_KEY not set".into()))?;

    let provider = openai::OpenAiProvider::new(
        api_key.clone(),
        llm_config.model.clone(),
        llm_config.completions_url(),
        llm_config.timeout_secs,
    )?;
    Ok(Box::new(provider))
}
