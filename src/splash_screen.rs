// src/splash_screen.rs
//
// Launch screen: the user picks which model the chat opens with before the
// chat screen takes over the terminal.

use crate::models::ModelId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug)]
pub struct SplashScreen {
    selected: ModelId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashScreenAction {
    StartChat(ModelId),
    Quit,
}

impl SplashScreen {
    pub fn new() -> Self {
        // Qwen is the default because it is the only model with a visible
        // thinking trace, which is the centerpiece of the demo.
        Self {
            selected: ModelId::Qwen,
        }
    }

    pub fn selected(&self) -> ModelId {
        self.selected
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let banner = r#"
▀▄▀ █ █ █▀█ █ █▀
 █  █▄█ █▀▄ █ ▄█
Asisten Dokumen Hukum Indonesia (demo)
    "#;

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Length(ModelId::ALL.len() as u16),
                Constraint::Min(1),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            vertical[1],
        );
        f.render_widget(
            Paragraph::new("Pilih model:")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            vertical[2],
        );

        let mut rows = Vec::new();
        for model in ModelId::ALL {
            let current = model == self.selected;
            let style = if current {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![Span::styled(
                format!("{} {}", if current { "▶" } else { " " }, model.label()),
                style,
            )];
            if model.supports_thinking() {
                spans.push(Span::styled(
                    "  (menampilkan proses berpikir)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            rows.push(Line::from(spans));
        }
        f.render_widget(
            Paragraph::new(rows).alignment(Alignment::Center),
            vertical[3],
        );
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SplashScreenAction> {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Down | KeyCode::Tab) => {
                self.selected = self.selected.next();
                None
            }
            (KeyModifiers::NONE, KeyCode::Up) => {
                self.selected = self.selected.prev();
                None
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                Some(SplashScreenAction::StartChat(self.selected))
            }
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(SplashScreenAction::Quit),
            _ => None,
        }
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_starts_with_default_model() {
        let mut splash = SplashScreen::new();
        assert_eq!(
            splash.handle_input(press(KeyCode::Enter)),
            Some(SplashScreenAction::StartChat(ModelId::Qwen))
        );
    }

    #[test]
    fn test_arrows_cycle_models() {
        let mut splash = SplashScreen::new();
        splash.handle_input(press(KeyCode::Down));
        assert_eq!(splash.selected(), ModelId::Llama);
        splash.handle_input(press(KeyCode::Up));
        splash.handle_input(press(KeyCode::Up));
        assert_eq!(splash.selected(), ModelId::Gemma);
        assert_eq!(
            splash.handle_input(press(KeyCode::Enter)),
            Some(SplashScreenAction::StartChat(ModelId::Gemma))
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut splash = SplashScreen::new();
        assert_eq!(
            splash.handle_input(press(KeyCode::Char('q'))),
            Some(SplashScreenAction::Quit)
        );
        assert_eq!(
            splash.handle_input(press(KeyCode::Esc)),
            Some(SplashScreenAction::Quit)
        );
    }
}
