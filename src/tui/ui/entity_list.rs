//! Entity sidebar rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::super::app::{App, Pane};
use super::super::theme::Theme;

/// Render the entity sidebar
pub fn render_entity_list(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    app.last_entity_area = Some((area.x, area.y, area.width, area.height));

    let border_color = if app.focus == Pane::Entities {
        theme.blue
    } else {
        theme.surface1
    };

    if !app.entities_loaded {
        let paragraph = Paragraph::new("Loading entities...")
            .style(Style::default().fg(theme.subtext0))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(Span::styled(" Entities ", Style::default().fg(theme.text))),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    if app.entities.is_empty() {
        let paragraph = Paragraph::new("No entities on the gateway")
            .style(Style::default().fg(theme.subtext0))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(Span::styled(" Entities ", Style::default().fg(theme.text))),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .entities
        .items
        .iter()
        .enumerate()
        .map(|(i, entity)| {
            let kind = entity.kind.as_deref().unwrap_or("entity");
            let mut spans = vec![
                Span::styled(entity.name.clone(), Style::default().fg(theme.text)),
                Span::styled(format!(" ({kind})"), Style::default().fg(theme.mauve)),
            ];
            if entity.event_count > 0 {
                spans.push(Span::styled(
                    format!(" [{}]", entity.event_count),
                    Style::default().fg(theme.subtext0),
                ));
            }
            let style = if i == app.entities.selected {
                Style::default().bg(theme.surface0)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = format!(" Entities [{}] ", app.entities.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(title, Style::default().fg(theme.text))),
        )
        .highlight_style(
            Style::default()
                .bg(theme.surface0)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.entities.selected));

    let visible_height = area.height.saturating_sub(2) as usize;
    if visible_height > 0 {
        let offset = app.entities.selected.saturating_sub(visible_height / 2);
        *state.offset_mut() = offset;
        app.entity_list_offset = offset;
    }

    frame.render_stateful_widget(list, area, &mut state);
}
