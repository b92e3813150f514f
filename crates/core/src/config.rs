use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub llm: LlmConfig,
    pub wikipedia: WikipediaConfig,
    pub random_user: RandomUserConfig,
    pub batch: BatchConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `NOTABLE_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("NOTABLE_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            llm: LlmConfig::from_env_profiled(p),
            wikipedia: WikipediaConfig::from_env_profiled(p),
            random_user: RandomUserConfig::from_env_profiled(p),
            batch: BatchConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  llm:         base_url={}, model={}, configured={}",
            self.llm.base_url,
            self.llm.model,
            self.llm.is_configured()
        );
        tracing::info!("  wikipedia:   api_url={}", self.wikipedia.api_url);
        tracing::info!("  random_user: url={}", self.random_user.url);
        tracing::info!("  batch:       concurrency={}", self.batch.concurrency);
    }
}

// ── Generative text (OpenRouter / OpenAI-compatible) ──────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    /// Base URL without the `/chat/completions` suffix.
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Token cap for `identify` and `summarize` calls.
    pub identify_max_tokens: u32,
    /// Default token cap for free-form prompts.
    pub freeform_max_tokens: u32,
    pub timeout_secs: u64,
}

impl LlmConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            api_key: profiled_env_opt(p, "OPENROUTER_API_KEY"),
            base_url: profiled_env_or(p, "OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
            model: profiled_env_or(p, "OPENROUTER_MODEL", "openai/gpt-4o-mini"),
            temperature: profiled_env_or(p, "LLM_TEMPERATURE", "0.2")
                .parse()
                .unwrap_or(0.2),
            identify_max_tokens: profiled_env_u32(p, "LLM_IDENTIFY_MAX_TOKENS", 150),
            freeform_max_tokens: profiled_env_u32(p, "LLM_FREEFORM_MAX_TOKENS", 300),
            timeout_secs: profiled_env_u64(p, "LLM_TIMEOUT_SECS", 30),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "openai/gpt-4o-mini".to_string(),
            temperature: 0.2,
            identify_max_tokens: 150,
            freeform_max_tokens: 300,
            timeout_secs: 30,
        }
    }
}

// ── Wikipedia ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaConfig {
    /// MediaWiki action API (OpenSearch).
    pub api_url: String,
    /// REST page summary endpoint; the article title is appended as a path segment.
    pub summary_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl WikipediaConfig {
    fn from_env_profiled(p: &str) -> Self {
        let defaults = Self::default();
        Self {
            api_url: profiled_env_or(p, "WIKIPEDIA_API_URL", &defaults.api_url),
            summary_url: profiled_env_or(p, "WIKIPEDIA_SUMMARY_URL", &defaults.summary_url),
            user_agent: profiled_env_or(p, "WIKIPEDIA_USER_AGENT", &defaults.user_agent),
            timeout_secs: profiled_env_u64(p, "WIKIPEDIA_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            summary_url: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            user_agent: "notable/0.1 (person identification pipeline)".to_string(),
            timeout_secs: 10,
        }
    }
}

// ── Random user source ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl RandomUserConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            url: profiled_env_or(p, "RANDOM_USER_URL", "https://randomuser.me/api"),
            timeout_secs: profiled_env_u64(p, "RANDOM_USER_TIMEOUT_SECS", 10),
        }
    }
}

// ── Batch ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum people identified at once. 1 keeps the batch strictly sequential.
    pub concurrency: usize,
}

impl BatchConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            concurrency: profiled_env_u32(p, "BATCH_CONCURRENCY", 1).max(1) as usize,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}
