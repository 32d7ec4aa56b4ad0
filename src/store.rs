// src/store.rs

use crate::attachment::Attachment;
use crate::models::ModelId;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Immutable once created; the store only ever appends
/// whole messages or clears a whole history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub attachment: Option<Attachment>,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn user(content: impl Into<String>, attachment: Option<Attachment>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            attachment,
            timestamp: Local::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            attachment: None,
            timestamp: Local::now(),
        }
    }
}

/// Source of truth for per-model chat history. A plain value handed to whoever
/// needs it, so tests can build isolated stores.
#[derive(Debug, Default)]
pub struct ChatStore {
    histories: HashMap<ModelId, Vec<Message>>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the model's history, creating it if absent. Always succeeds.
    pub fn add_message(&mut self, model: ModelId, message: Message) {
        self.histories.entry(model).or_default().push(message);
    }

    /// The model's history in insertion order, empty if nothing was ever added.
    pub fn messages(&self, model: ModelId) -> &[Message] {
        self.histories
            .get(&model)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replaces the model's history with an empty one. Idempotent.
    pub fn clear_messages(&mut self, model: ModelId) {
        self.histories.insert(model, Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_empty_for_fresh_store() {
        let store = ChatStore::new();
        assert!(store.messages(ModelId::Llama).is_empty());
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = ChatStore::new();
        store.add_message(ModelId::Qwen, Message::user("pertama", None));
        store.add_message(ModelId::Qwen, Message::assistant("kedua"));

        let messages = store.messages(ModelId::Qwen);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "pertama");
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].content, "kedua");
        assert_eq!(messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_histories_are_isolated_per_model() {
        let mut store = ChatStore::new();
        store.add_message(ModelId::Llama, Message::user("untuk llama", None));
        store.add_message(ModelId::Gemma, Message::user("untuk gemma", None));

        assert_eq!(store.messages(ModelId::Llama).len(), 1);
        assert_eq!(store.messages(ModelId::Gemma).len(), 1);
        assert!(store.messages(ModelId::Qwen).is_empty());
    }

    #[test]
    fn test_clear_empties_only_that_model() {
        let mut store = ChatStore::new();
        store.add_message(ModelId::Llama, Message::user("tetap", None));
        store.add_message(ModelId::Gemma, Message::user("hilang", None));

        store.clear_messages(ModelId::Gemma);
        assert!(store.messages(ModelId::Gemma).is_empty());
        assert_eq!(store.messages(ModelId::Llama).len(), 1);

        // clearing twice is a no-op
        store.clear_messages(ModelId::Gemma);
        assert!(store.messages(ModelId::Gemma).is_empty());
    }

    #[test]
    fn test_unique_ids() {
        let first = Message::user("a", None);
        let second = Message::user("a", None);
        assert_ne!(first.id, second.id);
    }
}
