//! Mock provider implementation for testing.

use super::{ChatPrompt, ChatProvider, GenerationParams, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// One call observed by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: ChatPrompt,
    pub params: GenerationParams,
}

enum Outcome {
    Text(String),
    Failure(String),
}

/// Mock chat provider returning a canned outcome and recording every call
/// it receives.
pub struct MockChatProvider {
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockChatProvider {
    /// A provider whose every call succeeds with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Text(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A provider whose every call fails with the given API error message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Failure(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        prompt: &ChatPrompt,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall {
                prompt: prompt.clone(),
                params: *params,
            });

        match &self.outcome {
            Outcome::Text(text) => Ok(text.clone()),
            Outcome::Failure(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
