//! BullyGuard Client
//!
//! Provider-facing classification client. Wraps a single chat-completions
//! call against a Groq-hosted model behind the [`MessageClassifier`] trait,
//! so request handlers depend on a capability rather than a vendor.

pub mod classifier;
pub mod config;
pub mod groq;

pub use classifier::MessageClassifier;
pub use config::ProviderConfig;
pub use groq::GroqClient;
