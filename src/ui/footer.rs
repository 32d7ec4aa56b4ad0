use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = match app.screen {
        AppScreen::Chat => {
            "Enter: send · Tab: switch model · Ctrl+T: thinking trace · Ctrl+↑/↓: logs · /attach <file.pdf> · Esc: quit"
        }
        AppScreen::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        _ => "Up/Down: choose model · Enter: start · q: quit",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
