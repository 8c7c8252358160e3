use async_trait::async_trait;

use crate::types::AppResult;

/// Text-in/text-out interface to a hosted generative model. The adapter is
/// constructed once at startup and shared across requests behind an Arc.
#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> AppResult<String>;
}
