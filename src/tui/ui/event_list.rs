//! Event list rendering
//!
//! The windowed path materializes only the rows covered by the engine's
//! window and paints each one at its virtual position inside the viewport;
//! everything else is represented by the scrollbar range alone. The
//! paginated path renders the current page with the selection kept
//! centered, the way the sidebar does.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
};

use super::super::app::{App, Pane};
use super::super::theme::Theme;
use super::helpers::{format_friendly_datetime, format_score};
use crate::list::{ListSession, RenderMode};
use crate::models::CameraEvent;

/// Render the event list pane
pub fn render_event_list(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    app.last_event_area = Some((area.x, area.y, area.width, area.height));

    let border_color = if app.focus == Pane::Events {
        theme.blue
    } else {
        theme.surface1
    };

    let frame_no = app.frame;
    let entity_name = app.current_entity.as_ref().map(|e| e.name.clone());
    let filter_summary = (!app.filters.is_empty()).then(|| app.filters.summary());
    let loading = app.loading_progress;

    let Some(session) = app.events.as_mut() else {
        let message = if app.open_failed {
            "Failed to load events - press r to retry"
        } else if entity_name.is_some() {
            "Loading events..."
        } else {
            "Select an entity and press Enter"
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(theme.subtext0))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(Span::styled(" Events ", Style::default().fg(theme.text))),
            );
        frame.render_widget(paragraph, area);
        return;
    };

    // Measure before deriving anything; restoration applies here too.
    session.set_viewport_height(u32::from(area.height.saturating_sub(2)));
    session.begin_frame();

    let mut title = match &entity_name {
        Some(name) => format!(
            " {} — events [{}] {} ",
            name,
            session.total(),
            session.mode().label()
        ),
        None => format!(" Events [{}] ", session.total()),
    };
    if let Some(filters) = &filter_summary {
        title.push_str(&format!("({filters}) "));
    }
    match session.mode() {
        RenderMode::Windowed => {
            if let Some(range) = session.visible_range(frame_no) {
                title.push_str(&format!("· {} ", range.label()));
            }
            if let Some(progress) = loading {
                title.push_str(&format!("· loading {}/{} ", progress.loaded, progress.total));
            }
        }
        RenderMode::Paginated => {
            title.push_str(&format!(
                "· page {}/{} ",
                session.pager().page() + 1,
                session.pager().total_pages()
            ));
        }
    }

    if session.is_empty() {
        // Zero events is an explicit empty state, not an error.
        let paragraph = Paragraph::new("No events linked to this entity")
            .style(Style::default().fg(theme.subtext0))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(Span::styled(title, Style::default().fg(theme.text))),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    match session.mode() {
        RenderMode::Windowed => render_windowed(frame, session, title, border_color, theme, area),
        RenderMode::Paginated => render_paginated(frame, session, title, border_color, theme, area),
    }
}

/// Paint the materialized window at its virtual position.
fn render_windowed(
    frame: &mut Frame,
    session: &mut ListSession<CameraEvent>,
    title: String,
    border_color: ratatui::style::Color,
    theme: &Theme,
    area: Rect,
) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let viewport = session.viewport();
    let row_height = session.knobs().row_height.max(1) as usize;
    let selected = session.selected_index();

    let mut lines: Vec<Line> = vec![Line::default(); inner_height];
    if let Some(window) = session.window() {
        for i in window.start_index..=window.end_index {
            let Some(event) = session.items().get(i) else {
                break;
            };
            let row_top = i as i64 * row_height as i64 - viewport.scroll_offset as i64;
            for (k, line) in build_event_row(event, i == selected, row_height, theme)
                .into_iter()
                .enumerate()
            {
                let y = row_top + k as i64;
                if y >= 0 && (y as usize) < lines.len() {
                    lines[y as usize] = line;
                }
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(title, Style::default().fg(theme.text))),
    );
    frame.render_widget(paragraph, area);

    // The scrollbar spans the full virtual height, so its geometry stays
    // accurate no matter how few rows are materialized.
    if session.virtual_height() > inner_height as u64 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        let mut scrollbar_state = ScrollbarState::new(session.virtual_height() as usize)
            .position(viewport.scroll_offset as usize)
            .viewport_content_length(inner_height);
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// Render the current page with Prev/Next controls.
fn render_paginated(
    frame: &mut Frame,
    session: &mut ListSession<CameraEvent>,
    title: String,
    border_color: ratatui::style::Color,
    theme: &Theme,
    area: Rect,
) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let row_height = session.knobs().row_height.max(1) as usize;
    let visible_rows = (inner_height / row_height).max(1);
    let selected = session.selected_index();
    let first_row = selected
        .saturating_sub(visible_rows / 2)
        .min(session.len().saturating_sub(visible_rows.min(session.len())));

    let mut lines: Vec<Line> = Vec::with_capacity(inner_height);
    for (i, event) in session
        .items()
        .iter()
        .enumerate()
        .skip(first_row)
        .take(visible_rows)
    {
        lines.extend(build_event_row(event, i == selected, row_height, theme));
    }

    let pager = session.pager();
    let enabled = Style::default().fg(theme.text);
    let disabled = Style::default().fg(theme.surface1);
    let controls = Line::from(vec![
        Span::styled(
            " ◀ p Prev ",
            if pager.has_prev() { enabled } else { disabled },
        ),
        Span::styled(pager.range_label(), Style::default().fg(theme.teal)),
        Span::styled(
            " Next n ▶ ",
            if pager.has_next() { enabled } else { disabled },
        ),
    ])
    .centered();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(title, Style::default().fg(theme.text)))
            .title_bottom(controls),
    );
    frame.render_widget(paragraph, area);
}

/// Build the lines for one event row
fn build_event_row(
    event: &CameraEvent,
    selected: bool,
    row_height: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let row_style = if selected {
        Style::default().bg(theme.surface0)
    } else {
        Style::default()
    };
    let marker = if selected { "▸ " } else { "  " };

    let mut first = vec![
        Span::styled(marker.to_string(), Style::default().fg(theme.blue)),
        Span::styled(
            format_friendly_datetime(&event.timestamp),
            Style::default().fg(theme.text),
        ),
        Span::styled(format!("  {}", event.camera), Style::default().fg(theme.peach)),
        Span::styled(format!("  {}", event.label), Style::default().fg(theme.mauve)),
    ];
    if let Some(score) = event.score {
        first.push(Span::styled(
            format!("  {}", format_score(score)),
            Style::default().fg(theme.teal),
        ));
    }

    let mut lines = vec![Line::from(first).style(row_style)];
    if row_height >= 2 {
        let mut second = vec![Span::styled(
            format!("    {}", event.snippet),
            Style::default().fg(theme.subtext0),
        )];
        if event.thumbnail.is_some() {
            second.push(Span::styled(
                " [img]".to_string(),
                Style::default().fg(theme.green),
            ));
        }
        lines.push(Line::from(second).style(row_style));
    }
    while lines.len() < row_height {
        lines.push(Line::default());
    }
    lines.truncate(row_height);
    lines
}
