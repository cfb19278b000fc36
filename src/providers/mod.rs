//! Chat-completion provider integration

pub mod openai_compat;

use async_trait::async_trait;
use thiserror::Error;

use crate::conversation::Message;

pub use openai_compat::{OpenAICompatConfig, OpenAICompatProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// The outbound side of a submission: one request, one complete response.
#[async_trait]
pub trait ChatProvider {
    /// Send the messages and return the assistant's reply text.
    async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError>;
}
