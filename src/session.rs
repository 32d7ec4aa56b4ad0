// src/session.rs
//
// The submission flow: Idle -> user message committed -> (thinking?) ->
// typing -> Idle. One session owns one store; one playback runs at a time.

use crate::attachment::Attachment;
use crate::config::Config;
use crate::models::ModelId;
use crate::playback::{PlaybackEvent, PlaybackPlan};
use crate::responses;
use crate::store::{ChatStore, Message};
use rand::prelude::IndexedRandom;
use std::time::Duration;

/// Result of a submission attempt.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// User message committed; the caller should run the returned plan.
    Started(PlaybackPlan),
    /// Empty or whitespace-only input. Nothing changed.
    Rejected,
    /// A playback is already in flight. Nothing changed.
    Busy,
}

pub struct ChatSession {
    store: ChatStore,
    selected: ModelId,
    pending_attachment: Option<Attachment>,
    active_plan: Option<PlaybackPlan>,
    reply_pause: Duration,

    thinking_text: String,
    thinking_active: bool,
    typing_text: String,
    typing_active: bool,
    completed_thinking: Option<String>,
}

impl ChatSession {
    pub fn new(selected: ModelId, config: &Config) -> Self {
        Self {
            store: ChatStore::new(),
            selected,
            pending_attachment: None,
            active_plan: None,
            reply_pause: Duration::from_millis(config.reply_pause_ms),
            thinking_text: String::new(),
            thinking_active: false,
            typing_text: String::new(),
            typing_active: false,
            completed_thinking: None,
        }
    }

    pub fn selected(&self) -> ModelId {
        self.selected
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages(self.selected)
    }

    pub fn is_busy(&self) -> bool {
        self.active_plan.is_some()
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking_active
    }

    pub fn is_typing(&self) -> bool {
        self.typing_active
    }

    pub fn thinking_text(&self) -> &str {
        &self.thinking_text
    }

    pub fn typing_text(&self) -> &str {
        &self.typing_text
    }

    pub fn completed_thinking(&self) -> Option<&str> {
        self.completed_thinking.as_deref()
    }

    pub fn pending_attachment(&self) -> Option<&Attachment> {
        self.pending_attachment.as_ref()
    }

    /// Accepts a PDF path as the pending attachment. Non-PDF paths are
    /// silently ignored; returns whether anything was attached.
    pub fn attach(&mut self, path: &str) -> bool {
        match Attachment::accept(path) {
            Some(attachment) => {
                self.pending_attachment = Some(attachment);
                true
            }
            None => false,
        }
    }

    pub fn clear_attachment(&mut self) {
        self.pending_attachment = None;
    }

    /// Switches the visible model. Gemma and Qwen start from a clean history
    /// on every switch; Llama keeps whatever it had. An in-flight playback is
    /// not disturbed, its plan already pinned the target model.
    pub fn select_model(&mut self, model: ModelId) {
        if model.clears_history_on_select() {
            self.store.clear_messages(model);
        }
        self.selected = model;
    }

    /// Commits the user message and hands back the playback plan for the
    /// currently selected model. Empty input and double submission are
    /// rejected without any state change.
    pub fn submit(&mut self, raw_input: &str) -> SubmitOutcome {
        let input = raw_input.trim();
        if input.is_empty() {
            return SubmitOutcome::Rejected;
        }
        if self.is_busy() {
            return SubmitOutcome::Busy;
        }

        let attachment = self.pending_attachment.take();
        self.store
            .add_message(self.selected, Message::user(input, attachment));

        let plan = self.plan_for(input);
        self.active_plan = Some(plan.clone());
        self.thinking_text.clear();
        self.thinking_active = false;
        self.typing_text.clear();
        self.typing_active = false;

        SubmitOutcome::Started(plan)
    }

    fn plan_for(&self, input: &str) -> PlaybackPlan {
        // The two trigger phrases swap the long Qwen reply for a random
        // section label, skipping the thinking trace.
        if self.selected.supports_thinking() && responses::is_classification_phrase(input) {
            let label = responses::CLASSIFICATION_LABELS
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(responses::CLASSIFICATION_LABELS[0]);
            return PlaybackPlan {
                model: self.selected,
                thinking: None,
                reply: label.to_string(),
                reply_pause: self.reply_pause,
            };
        }

        PlaybackPlan {
            model: self.selected,
            thinking: responses::thinking_for(self.selected),
            reply: responses::reply_for(self.selected).to_string(),
            reply_pause: self.reply_pause,
        }
    }

    /// Folds one playback event into the transient reveal state. The final
    /// event commits the assistant message to the plan's model and returns
    /// the session to Idle.
    pub fn apply(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::ThinkingChunk(text) => {
                self.thinking_active = true;
                self.thinking_text = text;
            }
            PlaybackEvent::ThinkingDone => {
                if let Some(plan) = &self.active_plan {
                    self.completed_thinking = plan.thinking.map(str::to_string);
                }
                self.thinking_active = false;
                self.thinking_text.clear();
            }
            PlaybackEvent::TypingChunk(text) => {
                self.typing_active = true;
                self.typing_text = text;
            }
            PlaybackEvent::TypingDone => {
                self.typing_active = false;
                self.typing_text.clear();
                if let Some(plan) = self.active_plan.take() {
                    self.store
                        .add_message(plan.model, Message::assistant(plan.reply));
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &ChatStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::{run_playback, FixedDelay};
    use crate::store::Role;
    use tokio::sync::mpsc;

    fn fast_config() -> Config {
        Config {
            reply_pause_ms: 0,
            ..Config::default()
        }
    }

    /// Runs a submitted plan to completion with zero delays, feeding every
    /// event back into the session the way the event loop does.
    async fn drive(session: &mut ChatSession, plan: PlaybackPlan) -> Vec<PlaybackEvent> {
        let (tx, mut rx) = mpsc::channel(64);
        let handle = tokio::spawn(run_playback(
            plan,
            FixedDelay(std::time::Duration::ZERO),
            tx,
        ));
        let mut seen = Vec::new();
        while let Some(event) = rx.recv().await {
            seen.push(event.clone());
            session.apply(event);
        }
        handle.await.unwrap();
        seen
    }

    #[test]
    fn test_empty_submission_rejected() {
        let mut session = ChatSession::new(ModelId::Llama, &fast_config());
        assert!(matches!(session.submit("   \t  "), SubmitOutcome::Rejected));
        assert!(session.messages().is_empty());
        assert!(!session.is_busy());
    }

    #[test]
    fn test_second_submission_rejected_while_busy() {
        let mut session = ChatSession::new(ModelId::Llama, &fast_config());
        assert!(matches!(session.submit("halo"), SubmitOutcome::Started(_)));
        assert!(matches!(session.submit("lagi"), SubmitOutcome::Busy));
        // Only the first user message landed.
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_llama_round_trip_without_thinking() {
        let mut session = ChatSession::new(ModelId::Llama, &fast_config());
        let plan = match session.submit("ringkas dokumen ini") {
            SubmitOutcome::Started(plan) => plan,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert!(plan.thinking.is_none());

        let events = drive(&mut session, plan).await;
        assert!(events
            .iter()
            .all(|e| !matches!(e, PlaybackEvent::ThinkingChunk(_) | PlaybackEvent::ThinkingDone)));

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "ringkas dokumen ini");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, responses::LLAMA_REPLY);
        assert!(session.completed_thinking().is_none());
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_qwen_round_trip_with_thinking() {
        let mut session = ChatSession::new(ModelId::Qwen, &fast_config());
        let plan = match session.submit("Ekstrak penahanan") {
            SubmitOutcome::Started(plan) => plan,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(plan.thinking, Some(responses::QWEN_THINKING));

        drive(&mut session, plan).await;

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "Ekstrak penahanan");
        assert_eq!(messages[1].content, responses::QWEN_REPLY);
        assert_eq!(session.completed_thinking(), Some(responses::QWEN_THINKING));
        assert!(session.thinking_text().is_empty());
        assert!(session.typing_text().is_empty());
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_reveal_is_monotonic_during_playback() {
        let mut session = ChatSession::new(ModelId::Gemma, &fast_config());
        let plan = match session.submit("daftar terdakwa") {
            SubmitOutcome::Started(plan) => plan,
            other => panic!("unexpected outcome: {:?}", other),
        };

        let events = drive(&mut session, plan).await;
        let chunks: Vec<&String> = events
            .iter()
            .filter_map(|e| match e {
                PlaybackEvent::TypingChunk(text) => Some(text),
                _ => None,
            })
            .collect();
        assert!(!chunks.is_empty());
        for pair in chunks.windows(2) {
            assert!(pair[1].starts_with(pair[0].as_str()));
        }
    }

    #[tokio::test]
    async fn test_classification_phrase_yields_label() {
        let mut session = ChatSession::new(ModelId::Qwen, &fast_config());
        let plan = match session.submit("Klasifikasi bagian ini") {
            SubmitOutcome::Started(plan) => plan,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert!(plan.thinking.is_none());
        assert!(responses::CLASSIFICATION_LABELS.contains(&plan.reply.as_str()));

        drive(&mut session, plan).await;
        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert!(responses::CLASSIFICATION_LABELS.contains(&messages[1].content.as_str()));
    }

    #[test]
    fn test_classification_phrase_on_llama_gets_normal_reply() {
        let mut session = ChatSession::new(ModelId::Llama, &fast_config());
        let plan = match session.submit("klasifikasi bagian ini") {
            SubmitOutcome::Started(plan) => plan,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(plan.reply, responses::LLAMA_REPLY);
    }

    #[test]
    fn test_model_switch_clear_policy() {
        let mut session = ChatSession::new(ModelId::Gemma, &fast_config());
        session.submit("untuk gemma");
        session.apply(PlaybackEvent::TypingDone);

        let mut session2 = ChatSession::new(ModelId::Llama, &fast_config());
        session2.submit("untuk llama");
        session2.apply(PlaybackEvent::TypingDone);

        // Switching to gemma wipes gemma, llama history survives a round trip.
        session2.select_model(ModelId::Gemma);
        assert!(session2.messages().is_empty());
        session2.select_model(ModelId::Llama);
        assert_eq!(session2.messages().len(), 2);

        // Switching within the same session also clears.
        session.select_model(ModelId::Llama);
        session.select_model(ModelId::Gemma);
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_attachment_travels_with_user_message() {
        let mut session = ChatSession::new(ModelId::Qwen, &fast_config());
        assert!(session.attach("putusan_123.pdf"));
        assert!(session.pending_attachment().is_some());

        session.submit("Ekstrak penahanan");
        let attachment = session.messages()[0].attachment.as_ref().unwrap();
        assert_eq!(attachment.name, "putusan_123.pdf");
        // Pending slot cleared on send.
        assert!(session.pending_attachment().is_none());
    }

    #[test]
    fn test_non_pdf_attachment_silently_ignored() {
        let mut session = ChatSession::new(ModelId::Qwen, &fast_config());
        assert!(!session.attach("catatan.docx"));
        assert!(session.pending_attachment().is_none());
    }

    #[tokio::test]
    async fn test_reply_commits_to_plan_model_after_switch() {
        let mut session = ChatSession::new(ModelId::Llama, &fast_config());
        let plan = match session.submit("halo") {
            SubmitOutcome::Started(plan) => plan,
            other => panic!("unexpected outcome: {:?}", other),
        };

        // User flips the selector mid-playback; the reply still lands on llama.
        session.select_model(ModelId::Gemma);
        drive(&mut session, plan).await;

        assert!(session.messages().is_empty());
        assert_eq!(session.store().messages(ModelId::Llama).len(), 2);
    }
}
