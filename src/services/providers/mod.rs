//! Chat-completion provider abstraction.
//!
//! A trait seam over the external completion service so handlers can be
//! exercised against a mock in tests and the real client in production.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Sampling parameters for a single completion call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A role-tagged prompt pair: the persona instruction and the user content.
#[derive(Debug, Clone)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Trait for chat-completion providers.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Dispatch one completion call and return the generated text as the
    /// service produced it (untrimmed).
    async fn complete(
        &self,
        prompt: &ChatPrompt,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;
}
