//! The interaction controller
//!
//! A `Session` owns the request/response cycle:
//! 1. Validates the submitted prompt (whitespace-only is a no-op)
//! 2. Sends one system + user message pair to the provider
//! 3. Prepends the resulting record to the history
//! 4. Persists the full list
//!
//! Provider failures leave the history untouched so the user can retry;
//! persistence failures surface through the same error channel instead of
//! being swallowed.

use tracing::debug;

use crate::conversation::Message;
use crate::providers::{ChatProvider, ProviderError};

use super::history::{History, HistoryRecord, IdMatch};
use super::store::{HistoryStore, StoreError};

/// Errors from the session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// The interaction controller: one provider, one history, one store.
pub struct Session<P> {
    provider: P,
    store: HistoryStore,
    history: History,
    system_prompt: String,
}

impl<P: ChatProvider> Session<P> {
    pub fn new(provider: P, store: HistoryStore, history: History, system_prompt: String) -> Self {
        Self {
            provider,
            store,
            history,
            system_prompt,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Case-insensitive substring search over prompts and responses.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a HistoryRecord> {
        self.history.filter(query)
    }

    /// Resolve an id or unique id prefix against the history.
    pub fn resolve_id(&self, prefix: &str) -> IdMatch {
        self.history.resolve_id(prefix)
    }

    /// Submit a prompt. A whitespace-only prompt is ignored: no request, no
    /// mutation, no error. On success the new record sits at the front of
    /// the history and the full list has been persisted.
    pub async fn submit(&mut self, prompt: &str) -> Result<Option<HistoryRecord>, SessionError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Ok(None);
        }

        let messages = [
            Message::system(self.system_prompt.clone()),
            Message::user(prompt),
        ];

        debug!(chars = prompt.len(), "sending chat completion request");
        let response = self.provider.complete(&messages).await?;
        debug!(chars = response.len(), "received completion");

        let record = HistoryRecord::new(prompt, response);
        self.history.prepend(record.clone());
        self.store.persist(&self.history).await?;

        Ok(Some(record))
    }

    /// Delete the record with the given id and persist. Returns whether a
    /// record was removed.
    pub async fn delete(&mut self, id: uuid::Uuid) -> Result<bool, SessionError> {
        if !self.history.remove(id) {
            return Ok(false);
        }
        self.store.persist(&self.history).await?;
        Ok(true)
    }

    /// Empty the history and persist the empty list. Idempotent.
    pub async fn clear(&mut self) -> Result<(), SessionError> {
        self.history.clear();
        self.store.persist(&self.history).await?;
        Ok(())
    }
}
