use crate::app::App;
use crate::responses;
use crate::store::{Message, Role};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(area);

    draw_messages(f, app, chunks[0]);
    draw_attachment_chip(f, app, chunks[1]);

    app.status_indicator.update_spinner();
    app.status_indicator.render(f, chunks[2]);

    draw_input(f, app, chunks[3]);
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    let wrap_width = (area.width as usize).saturating_sub(4).max(8);
    let mut lines: Vec<Line<'static>> = Vec::new();

    if app.session.messages().is_empty() && !app.session.is_busy() {
        draw_welcome(f, area);
        return;
    }

    for message in app.session.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        if message.role == Role::Assistant {
            push_thinking_disclosure(&mut lines, app, wrap_width);
        }
        push_message(&mut lines, message, wrap_width);
        if message.role == Role::Assistant {
            push_disclaimer(&mut lines, wrap_width);
        }
    }

    if app.session.is_thinking() {
        lines.push(Line::from(""));
        push_live_block(
            &mut lines,
            "Thinking...",
            app.session.thinking_text(),
            wrap_width,
            Color::Blue,
        );
    }

    if app.session.is_typing() {
        lines.push(Line::from(""));
        push_live_block(
            &mut lines,
            "Yuris",
            app.session.typing_text(),
            wrap_width,
            Color::Green,
        );
    }

    let total_lines = lines.len() as u16;
    let available_height = area.height;
    let max_scroll = total_lines.saturating_sub(available_height);
    // Follow the newest output unless the user scrolled away.
    let chat_scroll = app.chat_scroll.min(max_scroll);

    let msgs_para = Paragraph::new(lines)
        .style(Style::default())
        .block(Block::default())
        .wrap(Wrap { trim: false });
    f.render_widget(msgs_para.scroll((max_scroll.saturating_sub(chat_scroll), 0)), area);
}

fn draw_welcome(f: &mut Frame, area: Rect) {
    let welcome = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Selamat datang di Yuris",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Asisten dokumen hukum untuk kasus perdagangan orang."),
        Line::from(""),
        Line::from(Span::styled(
            "Ketik pertanyaan Anda, atau /attach <berkas.pdf> untuk melampirkan putusan.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(welcome, area);
}

fn push_message(lines: &mut Vec<Line<'static>>, message: &Message, wrap_width: usize) {
    let (name, style) = match message.role {
        Role::User => ("You", Style::default().fg(Color::Rgb(255, 223, 128))),
        Role::Assistant => ("Yuris", Style::default().fg(Color::Rgb(144, 238, 144))),
    };

    if let Some(attachment) = &message.attachment {
        lines.push(Line::from(vec![
            Span::styled("📄 ", Style::default().fg(Color::Red)),
            Span::styled(
                attachment.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let timestamp = message.timestamp.format("%H:%M").to_string();
    lines.push(Line::from(vec![
        Span::styled("┌─".to_string(), style),
        Span::styled(name.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".to_string(), style),
        Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
    ]));

    for content_line in message.content.lines() {
        if content_line.is_empty() {
            lines.push(Line::from(Span::styled("│".to_string(), style)));
            continue;
        }
        for wrapped in wrap(content_line, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped.to_string(), style),
            ]));
        }
    }

    lines.push(Line::from(Span::styled("╰─".to_string(), style)));
}

/// Collapsible "Thinking process" row above Qwen replies, once a trace exists.
fn push_thinking_disclosure(lines: &mut Vec<Line<'static>>, app: &App, wrap_width: usize) {
    if !app.session.selected().supports_thinking() {
        return;
    }
    let Some(completed) = app.session.completed_thinking() else {
        return;
    };

    let arrow = if app.thinking_expanded { "▼" } else { "▶" };
    lines.push(Line::from(Span::styled(
        format!("{} Thinking process (Ctrl+T)", arrow),
        Style::default().fg(Color::DarkGray),
    )));

    if app.thinking_expanded {
        for content_line in completed.lines() {
            for wrapped in wrap(content_line, wrap_width) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", wrapped),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                )));
            }
        }
    }
}

fn push_disclaimer(lines: &mut Vec<Line<'static>>, wrap_width: usize) {
    for wrapped in wrap(responses::ASSISTANT_DISCLAIMER, wrap_width) {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", wrapped),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )));
    }
}

/// In-progress reveal bubble with a trailing cursor glyph.
fn push_live_block(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    text: &str,
    wrap_width: usize,
    color: Color,
) {
    let style = Style::default().fg(color);
    lines.push(Line::from(Span::styled(
        format!("┌─{}", title),
        style.add_modifier(Modifier::BOLD),
    )));
    let with_cursor = format!("{}▌", text);
    for content_line in with_cursor.lines() {
        for wrapped in wrap(content_line, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped.to_string(), style),
            ]));
        }
    }
    lines.push(Line::from(Span::styled("╰─".to_string(), style)));
}

fn draw_attachment_chip(f: &mut Frame, app: &App, area: Rect) {
    let Some(attachment) = app.session.pending_attachment() else {
        return;
    };
    let chip = Line::from(vec![
        Span::styled("📎 ", Style::default().fg(Color::Red)),
        Span::styled(
            attachment.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  (/attach untuk menghapus)",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(chip), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.input.clone(), Style::default().fg(Color::White)),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: 1,
        },
    );

    let cursor_x = area.x + 2 + text_width.saturating_sub(scroll_offset);
    f.set_cursor_position((cursor_x, area.y + 1));
}

pub fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(ratatui::widgets::Borders::LEFT)
        .style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let log_lines: Vec<Line> = app
        .logs
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();

    let total_log_lines = log_lines.len() as u16;
    let max_log_scroll = total_log_lines.saturating_sub(inner.height);
    let logs_scroll = app.logs_scroll.min(max_log_scroll);

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(
        logs_para.scroll((max_log_scroll.saturating_sub(logs_scroll), 0)),
        inner,
    );
}
