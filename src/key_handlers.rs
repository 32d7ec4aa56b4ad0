use crate::app::{App, AppScreen};
use crate::attachment::parse_attach_command;
use crate::config::get_config;
use crate::playback::{spawn_playback, UniformDelays};
use crate::session::SubmitOutcome;
use crate::status_indicator::Activity;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.screen = AppScreen::QuitConfirm;
        }
        KeyCode::Enter => {
            let input = app.input.clone();
            if submit_input(app, &input) {
                app.input.clear();
            }
        }
        KeyCode::Tab => {
            let next = app.session.selected().next();
            app.session.select_model(next);
            app.logs.add(format!("Switched model to {}", next.label()));
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => app.logs_scroll_up(),
        KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => app.logs_scroll_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.screen = AppScreen::QuitConfirm,
                    't' => app.thinking_expanded = !app.thinking_expanded,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

/// Routes a submitted line. Returns whether the input box should be cleared.
fn submit_input(app: &mut App, input: &str) -> bool {
    // `/attach <path>` manages the pending attachment instead of sending.
    if let Some(path) = parse_attach_command(input) {
        if path.is_empty() {
            app.session.clear_attachment();
            app.logs.add("Attachment cleared");
        } else if app.session.attach(path) {
            app.logs.add(format!("Attached {}", path));
        }
        // Non-PDF paths fall through silently.
        return true;
    }

    match app.session.submit(input) {
        SubmitOutcome::Started(plan) => {
            app.logs.add(format!("Submitted to {}", plan.model.label()));
            let config = get_config();
            spawn_playback(
                plan,
                UniformDelays::from_config(&config),
                app.playback_tx.clone(),
            );
            app.status_indicator.set_activity(Activity::Waiting);
            true
        }
        SubmitOutcome::Busy => {
            app.logs.add("Reply already in progress");
            false
        }
        SubmitOutcome::Rejected => false,
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Chat;
        }
        _ => {}
    }
}
