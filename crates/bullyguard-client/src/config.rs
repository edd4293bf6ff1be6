//! Provider configuration

use bullyguard_core::{prompt, Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the model identifier
pub const MODEL_ENV: &str = "BULLYGUARD_MODEL";

/// Configuration for the hosted classification provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key for the provider. Usually supplied via `GROQ_API_KEY`
    #[serde(default)]
    pub api_key: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible chat-completions API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// System instruction sent with every classification call
    #[serde(default = "default_instruction")]
    pub instruction: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Overlay the credential and model choice from the environment.
    /// Existing file-supplied values are kept when the variables are unset.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.api_key = key;
            }
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.is_empty() {
                self.model = model;
            }
        }
    }

    /// Validate that the provider can be called. Fatal at startup: the
    /// service must not serve classify requests without a usable credential
    /// and model identifier.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "provider API key is not set (expected {API_KEY_ENV})"
            )));
        }
        if self.model.trim().is_empty() {
            return Err(Error::config("provider model identifier is empty"));
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            instruction: default_instruction(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gemma2-9b-it".to_string()
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_instruction() -> String {
    prompt::DEFAULT_INSTRUCTION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
