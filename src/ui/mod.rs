pub mod chat;
pub mod footer;
pub mod header;
pub mod quit_confirm;
pub mod sidebar;

use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Top-level draw dispatch, one arm per screen.
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    match app.screen {
        AppScreen::Splash => app.splash_screen.draw(f, area),
        AppScreen::QuitConfirm => quit_confirm::draw_quit_confirm(f, area),
        AppScreen::Chat | AppScreen::Quit => draw_chat_screen(f, app),
    }
}

fn draw_chat_screen(f: &mut Frame, app: &mut App) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::draw_header(f, vertical[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),
            Constraint::Min(40),
            Constraint::Length(34),
        ])
        .split(vertical[1]);

    sidebar::draw_sidebar(f, body[0], app);
    chat::draw_chat(f, app, body[1]);
    chat::draw_logs(f, app, body[2]);

    footer::draw_footer(f, vertical[2], app);
}
