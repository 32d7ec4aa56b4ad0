// src/playback.rs
//
// Simulates a model producing output live. The full reply is known up front;
// a task reveals it one word at a time with a randomized delay and reports
// each step over a channel. For the thinking-capable model a separate, faster
// reveal of the reasoning narrative runs first.

use crate::config::Config;
use crate::models::ModelId;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Thinking,
    Typing,
}

/// Where the per-word pauses come from. Production draws random delays; tests
/// plug in a fixed (usually zero) source to stay fast and deterministic.
pub trait DelaySource: Send + 'static {
    fn next_delay(&mut self, phase: Phase) -> Duration;
}

/// Uniform random delays per phase, the ranges coming from config.
pub struct UniformDelays {
    rng: SmallRng,
    typing_ms: (u64, u64),
    thinking_ms: (u64, u64),
}

impl UniformDelays {
    pub fn from_config(config: &Config) -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            typing_ms: config.typing_delay_ms,
            thinking_ms: config.thinking_delay_ms,
        }
    }
}

impl DelaySource for UniformDelays {
    fn next_delay(&mut self, phase: Phase) -> Duration {
        let (min, max) = match phase {
            Phase::Thinking => self.thinking_ms,
            Phase::Typing => self.typing_ms,
        };
        Duration::from_millis(self.rng.random_range(min..max))
    }
}

/// Same delay for every step. `FixedDelay(Duration::ZERO)` drives tests.
pub struct FixedDelay(pub Duration);

impl DelaySource for FixedDelay {
    fn next_delay(&mut self, _phase: Phase) -> Duration {
        self.0
    }
}

/// Cumulative word-prefix reveal of `text`: step `k` holds the first `k`
/// whitespace-delimited tokens re-joined by single spaces. Original spacing
/// beyond that is not preserved.
pub fn reveal_steps(text: &str) -> Vec<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    (1..=tokens.len()).map(|k| tokens[..k].join(" ")).collect()
}

/// What a playback run emits, in order: zero or more `ThinkingChunk`s closed
/// by `ThinkingDone` (only when the plan has a narrative), then one
/// `TypingChunk` per word closed by `TypingDone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    ThinkingChunk(String),
    ThinkingDone,
    TypingChunk(String),
    TypingDone,
}

/// Everything a playback run needs, captured at submission time so a later
/// model switch cannot redirect the reply.
#[derive(Debug, Clone)]
pub struct PlaybackPlan {
    pub model: ModelId,
    pub thinking: Option<&'static str>,
    pub reply: String,
    pub reply_pause: Duration,
}

pub fn spawn_playback(
    plan: PlaybackPlan,
    delays: impl DelaySource,
    tx: mpsc::Sender<PlaybackEvent>,
) -> JoinHandle<()> {
    tokio::spawn(run_playback(plan, delays, tx))
}

/// Runs one playback to completion. Steps are strictly sequential; there is
/// no cancellation, the run ends when the last word is out or the receiver
/// goes away.
pub async fn run_playback(
    plan: PlaybackPlan,
    mut delays: impl DelaySource,
    tx: mpsc::Sender<PlaybackEvent>,
) {
    sleep(plan.reply_pause).await;

    if let Some(narrative) = plan.thinking {
        for step in reveal_steps(narrative) {
            if tx.send(PlaybackEvent::ThinkingChunk(step)).await.is_err() {
                return;
            }
            sleep(delays.next_delay(Phase::Thinking)).await;
        }
        if tx.send(PlaybackEvent::ThinkingDone).await.is_err() {
            return;
        }
        sleep(plan.reply_pause).await;
    }

    for step in reveal_steps(&plan.reply) {
        if tx.send(PlaybackEvent::TypingChunk(step)).await.is_err() {
            return;
        }
        sleep(delays.next_delay(Phase::Typing)).await;
    }
    let _ = tx.send(PlaybackEvent::TypingDone).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(model: ModelId, thinking: Option<&'static str>, reply: &str) -> PlaybackPlan {
        PlaybackPlan {
            model,
            thinking,
            reply: reply.to_string(),
            reply_pause: Duration::ZERO,
        }
    }

    async fn collect(plan: PlaybackPlan) -> Vec<PlaybackEvent> {
        let (tx, mut rx) = mpsc::channel(64);
        let handle = spawn_playback(plan, FixedDelay(Duration::ZERO), tx);
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        handle.await.unwrap();
        events
    }

    #[test]
    fn test_reveal_steps_counts_tokens() {
        let steps = reveal_steps("satu dua tiga");
        assert_eq!(
            steps,
            vec!["satu".to_string(), "satu dua".to_string(), "satu dua tiga".to_string()]
        );
    }

    #[test]
    fn test_reveal_steps_normalizes_whitespace() {
        let steps = reveal_steps("  a \n b\t\tc ");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.last().unwrap(), "a b c");
    }

    #[test]
    fn test_reveal_steps_monotonic_prefixes() {
        let steps = reveal_steps("empat kata di sini");
        for pair in steps.windows(2) {
            assert!(pair[1].starts_with(pair[0].as_str()));
            assert!(pair[1].len() > pair[0].len());
        }
    }

    #[test]
    fn test_reveal_steps_empty_input() {
        assert!(reveal_steps("").is_empty());
        assert!(reveal_steps("   \n ").is_empty());
    }

    #[tokio::test]
    async fn test_typing_only_run() {
        let events = collect(plan(ModelId::Llama, None, "halo dunia")).await;
        assert_eq!(
            events,
            vec![
                PlaybackEvent::TypingChunk("halo".into()),
                PlaybackEvent::TypingChunk("halo dunia".into()),
                PlaybackEvent::TypingDone,
            ]
        );
    }

    #[tokio::test]
    async fn test_thinking_precedes_typing() {
        let events = collect(plan(ModelId::Qwen, Some("periksa dokumen"), "selesai")).await;
        assert_eq!(
            events,
            vec![
                PlaybackEvent::ThinkingChunk("periksa".into()),
                PlaybackEvent::ThinkingChunk("periksa dokumen".into()),
                PlaybackEvent::ThinkingDone,
                PlaybackEvent::TypingChunk("selesai".into()),
                PlaybackEvent::TypingDone,
            ]
        );
    }

    #[tokio::test]
    async fn test_run_terminates_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        // Must return instead of looping on a closed channel.
        run_playback(
            plan(ModelId::Gemma, None, "a b c"),
            FixedDelay(Duration::ZERO),
            tx,
        )
        .await;
    }
}
