use crate::app::App;
use crate::models::ModelId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

const FEATURES: [&str; 3] = ["PDF Analysis", "Legal Document Review", "Case Analysis"];

pub fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    items.push(group_label("Chat Models"));
    for model in ModelId::ALL {
        let selected = model == app.session.selected();
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        items.push(ListItem::new(format!("{}{}", marker, model.label())).style(style));
    }

    items.push(ListItem::new(""));
    items.push(group_label("Features"));
    for feature in FEATURES {
        items.push(ListItem::new(format!("  {}", feature)).style(Style::default().fg(Color::Gray)));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(list, area);
}

fn group_label(label: &str) -> ListItem<'static> {
    ListItem::new(label.to_string()).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
}
