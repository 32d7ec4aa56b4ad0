// src/status_indicator.rs

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the assistant is doing right now. Mirrors the playback phases, with
/// `Waiting` covering the pause before the first chunk arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Waiting,
    Thinking,
    Typing,
}

impl Activity {
    pub fn is_busy(&self) -> bool {
        *self != Activity::Idle
    }

    fn label(&self) -> &'static str {
        match self {
            Activity::Idle => "",
            Activity::Waiting => "Menyiapkan jawaban...",
            Activity::Thinking => "Menalar...",
            Activity::Typing => "Mengetik...",
        }
    }

    fn color(&self) -> Color {
        match self {
            Activity::Idle | Activity::Waiting => Color::DarkGray,
            Activity::Thinking => Color::Blue,
            Activity::Typing => Color::Green,
        }
    }
}

/// Spinner plus a one-line activity label under the message list.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    activity: Activity,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_activity(&mut self, activity: Activity) {
        self.activity = activity;
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let spinner = if self.activity.is_busy() {
            spinner_frames[self.spinner_idx % spinner_frames.len()]
        } else {
            " "
        };

        let status = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(
                self.activity.label(),
                Style::default().fg(self.activity.color()),
            ),
        ]);

        frame.render_widget(
            Paragraph::new(status).alignment(ratatui::layout::Alignment::Left),
            Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: 1,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_not_busy() {
        assert!(!Activity::Idle.is_busy());
        assert!(Activity::Waiting.is_busy());
        assert!(Activity::Thinking.is_busy());
        assert!(Activity::Typing.is_busy());
    }

    #[test]
    fn test_every_busy_activity_has_a_label() {
        for activity in [Activity::Waiting, Activity::Thinking, Activity::Typing] {
            assert!(!activity.label().is_empty());
        }
        assert!(Activity::Idle.label().is_empty());
    }

    #[test]
    fn test_spinner_wraps() {
        let mut indicator = StatusIndicator::new();
        indicator.spinner_idx = usize::MAX;
        indicator.update_spinner();
        assert_eq!(indicator.spinner_idx, 0);
    }
}
