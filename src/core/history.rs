//! The prompt/response history list
//!
//! An ordered, newest-first sequence of records. Records are immutable once
//! created and carry a stable id assigned at creation, so deletion is always
//! by id, never by display position (a positional delete would target the
//! wrong record whenever a search filter is active).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One prompt/response pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub prompt: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            response: response.into(),
            created_at: Utc::now(),
        }
    }

    /// True when the query appears case-insensitively in the prompt or the
    /// response.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.prompt.to_lowercase().contains(&query)
            || self.response.to_lowercase().contains(&query)
    }
}

/// The ordered collection of all records for the session, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// Add a record to the front of the list.
    pub fn prepend(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
    }

    /// Remove the record with the given id. Returns whether anything was
    /// removed; other records keep their content, only positions shift.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Lazy view of records matching the query; an empty query yields the
    /// full list in order. Pure: never mutates the underlying list.
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a HistoryRecord> {
        self.records.iter().filter(move |r| r.matches(query))
    }

    /// Resolve an id or unique id prefix to a full record id.
    pub fn resolve_id(&self, prefix: &str) -> IdMatch {
        let prefix = prefix.to_lowercase();
        let mut matches = self
            .records
            .iter()
            .filter(|r| r.id.to_string().starts_with(&prefix));

        match (matches.next(), matches.next()) {
            (None, _) => IdMatch::None,
            (Some(record), None) => IdMatch::One(record.id),
            (Some(_), Some(_)) => IdMatch::Ambiguous,
        }
    }
}

/// Result of resolving an id prefix against the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMatch {
    One(Uuid),
    None,
    Ambiguous,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> History {
        let mut history = History::new();
        // Prepended in this order, so "dog" ends up first.
        history.prepend(HistoryRecord::new("cat", "meow"));
        history.prepend(HistoryRecord::new("dog", "woof"));
        history
    }

    #[test]
    fn test_prepend_is_newest_first() {
        let history = sample();
        let prompts: Vec<_> = history.iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["dog", "cat"]);
    }

    #[test]
    fn test_filter_matches_response_text() {
        let history = sample();
        let hits: Vec<_> = history.filter("woof").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].prompt, "dog");
        assert_eq!(hits[0].response, "woof");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let history = sample();
        assert_eq!(history.filter("MEOW").count(), 1);
        assert_eq!(history.filter("Cat").count(), 1);
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let history = sample();
        let all: Vec<_> = history.filter("").collect();
        let direct: Vec<_> = history.iter().collect();
        assert_eq!(all, direct);
    }

    #[test]
    fn test_filter_is_restartable() {
        let history = sample();
        assert_eq!(history.filter("o").count(), history.filter("o").count());
    }

    #[test]
    fn test_remove_by_id_shifts_only_positions() {
        let mut history = sample();
        let dog_id = history.iter().next().unwrap().id;

        assert!(history.remove(dog_id));
        assert_eq!(history.len(), 1);
        assert_eq!(history.iter().next().unwrap().prompt, "cat");

        // Removing again is a no-op.
        assert!(!history.remove(dog_id));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut history = sample();
        history.clear();
        assert!(history.is_empty());
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_resolve_id_prefix() {
        let history = sample();
        let id = history.iter().next().unwrap().id;
        let prefix = &id.to_string()[..8];

        assert_eq!(history.resolve_id(&id.to_string()), IdMatch::One(id));
        assert_eq!(history.resolve_id(prefix), IdMatch::One(id));
        assert_eq!(history.resolve_id("zzzzzzzz"), IdMatch::None);
        // The empty prefix matches every record.
        assert_eq!(history.resolve_id(""), IdMatch::Ambiguous);
    }

    #[test]
    fn test_delete_is_unaffected_by_active_filter() {
        let mut history = sample();
        // The user is looking at the filtered view ["dog"] but deletes by id,
        // so the record under the cursor is the one that goes away.
        let shown: Vec<_> = history.filter("woof").map(|r| r.id).collect();
        assert!(history.remove(shown[0]));
        assert_eq!(history.iter().next().unwrap().prompt, "cat");
    }
}
