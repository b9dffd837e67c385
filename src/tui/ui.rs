//! UI rendering for the TUI

pub mod entity_list;
pub mod event_list;
pub mod helpers;
pub mod overlays;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, ChildView, InputMode};
use super::theme::Theme;
use entity_list::render_entity_list;
use event_list::render_event_list;
use overlays::{
    render_confirmation_dialog, render_detail_overlay, render_help_overlay, render_meta_overlay,
};

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme_variant.theme();
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.base)), area);

    // Main layout: header, body, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, app, &theme, chunks[0]);
    render_body(frame, app, &theme, chunks[1]);
    render_footer(frame, app, &theme, chunks[2]);

    // Render overlays (in stacking order)
    for child in &app.children {
        match child {
            ChildView::EventDetail { event, scroll } => {
                render_detail_overlay(frame, event, *scroll, &theme, area);
            }
            ChildView::EventMeta { event } => {
                render_meta_overlay(frame, event, &theme, area);
            }
        }
    }

    if app.show_help {
        render_help_overlay(frame, &theme, area);
    }

    // Confirmation dialog takes highest priority
    if app.has_pending_action() {
        render_confirmation_dialog(frame, app, &theme, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" lookout ", Style::default().fg(theme.mauve).bold()),
        Span::styled("· ", Style::default().fg(theme.surface1)),
        Span::styled(
            app.gateway.base_url().to_string(),
            Style::default().fg(theme.subtext0),
        ),
        Span::styled(" · ", Style::default().fg(theme.surface1)),
        Span::styled(
            app.theme_variant.display_name(),
            Style::default().fg(theme.subtext0),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface1)),
    );
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    // Responsive layout: side-by-side for wide terminals, single pane for
    // narrow ones
    let min_width_for_split = 80;

    if area.width >= min_width_for_split {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
            .split(area);

        render_entity_list(frame, app, theme, chunks[0]);
        render_event_list(frame, app, theme, chunks[1]);
    } else if app.events.is_some() || app.current_entity.is_some() {
        app.last_entity_area = None;
        render_event_list(frame, app, theme, area);
    } else {
        app.last_event_area = None;
        render_entity_list(frame, app, theme, area);
    }
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = if app.input_mode == InputMode::Filter {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(theme.yellow).bold()),
            Span::styled(app.filter_input.clone(), Style::default().fg(theme.text)),
            Span::styled("▏", Style::default().fg(theme.yellow)),
            Span::styled(
                "  camera=<name> label=<name> · Enter apply · Esc cancel",
                Style::default().fg(theme.subtext0),
            ),
        ])
    } else if let Some(status) = &app.status_message {
        let color = if status.is_error {
            theme.red
        } else {
            theme.green
        };
        Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color),
        ))
    } else {
        let mut spans = Vec::new();
        if app.has_fetch_op() {
            spans.push(Span::styled(" ⟳", Style::default().fg(theme.yellow)));
        }
        spans.push(Span::styled(
            " Enter open · / filter · D unlink · r refresh · t theme · ? help · q quit",
            Style::default().fg(theme.subtext0),
        ));
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}
