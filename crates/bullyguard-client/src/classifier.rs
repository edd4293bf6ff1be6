//! Classification capability trait

use async_trait::async_trait;
use bullyguard_core::Result;

/// Capability interface for the external classification provider
///
/// Implementations return the provider's raw reply text; turning that into
/// structured fields is `bullyguard_core::reply`'s job. Every call may be
/// slow or failing — there is no caller-side compensation beyond the
/// configured request timeout.
#[async_trait]
pub trait MessageClassifier: Send + Sync {
    /// Classify a single message, returning the raw reply
    async fn classify(&self, message: &str) -> Result<String>;

    /// Model identifier used by this classifier
    fn model(&self) -> &str;
}
