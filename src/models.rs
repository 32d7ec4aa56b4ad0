// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of selectable pseudo-models. The identifier is only a lookup
/// key into the canned response tables; nothing is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    Llama,
    Gemma,
    Qwen,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [ModelId::Llama, ModelId::Gemma, ModelId::Qwen];

    /// The stable key used for table lookups and config round-trips.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Llama => "llama",
            ModelId::Gemma => "gemma",
            ModelId::Qwen => "qwen",
        }
    }

    /// Human-readable name shown in the header and sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            ModelId::Llama => "Llama 3.2",
            ModelId::Gemma => "Gemma 3",
            ModelId::Qwen => "Qwen/Qwen3-4B-Thinking-2507",
        }
    }

    pub fn from_key(key: &str) -> Option<ModelId> {
        match key {
            "llama" => Some(ModelId::Llama),
            "gemma" => Some(ModelId::Gemma),
            "qwen" => Some(ModelId::Qwen),
            _ => None,
        }
    }

    /// Only Qwen plays a simulated reasoning trace before its reply.
    pub fn supports_thinking(&self) -> bool {
        matches!(self, ModelId::Qwen)
    }

    /// Switching to Gemma or Qwen starts that model from an empty history.
    pub fn clears_history_on_select(&self) -> bool {
        matches!(self, ModelId::Gemma | ModelId::Qwen)
    }

    /// Next model in selector order, wrapping around.
    pub fn next(&self) -> ModelId {
        match self {
            ModelId::Llama => ModelId::Gemma,
            ModelId::Gemma => ModelId::Qwen,
            ModelId::Qwen => ModelId::Llama,
        }
    }

    /// Previous model in selector order, wrapping around.
    pub fn prev(&self) -> ModelId {
        match self {
            ModelId::Llama => ModelId::Qwen,
            ModelId::Gemma => ModelId::Llama,
            ModelId::Qwen => ModelId::Gemma,
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for model in ModelId::ALL {
            assert_eq!(ModelId::from_key(model.as_str()), Some(model));
        }
        assert_eq!(ModelId::from_key("gpt-4"), None);
    }

    #[test]
    fn test_only_qwen_thinks() {
        assert!(ModelId::Qwen.supports_thinking());
        assert!(!ModelId::Llama.supports_thinking());
        assert!(!ModelId::Gemma.supports_thinking());
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut seen = vec![ModelId::Llama];
        let mut current = ModelId::Llama;
        for _ in 0..2 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen, ModelId::ALL.to_vec());
        assert_eq!(current.next(), ModelId::Llama);
    }

    #[test]
    fn test_prev_inverts_next() {
        for model in ModelId::ALL {
            assert_eq!(model.next().prev(), model);
        }
    }
}
