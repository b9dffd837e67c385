//! Overlay rendering
//!
//! This module handles rendering of the nested detail views, the removal
//! confirmation dialog, and the help overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::app::App;
use super::super::theme::Theme;
use super::helpers::{centered_rect, format_friendly_datetime, format_score};
use crate::models::CameraEvent;

/// Render the event detail overlay
pub fn render_detail_overlay(
    frame: &mut Frame,
    event: &CameraEvent,
    scroll: u16,
    theme: &Theme,
    area: Rect,
) {
    let popup_area = centered_rect(70, 70, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("When: ", Style::default().fg(theme.subtext0)),
            Span::styled(
                format_friendly_datetime(&event.timestamp),
                Style::default().fg(theme.text).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Camera: ", Style::default().fg(theme.subtext0)),
            Span::styled(event.camera.clone(), Style::default().fg(theme.peach)),
        ]),
        Line::from(vec![
            Span::styled("Label: ", Style::default().fg(theme.subtext0)),
            Span::styled(event.label.clone(), Style::default().fg(theme.mauve)),
        ]),
    ];

    if let Some(score) = event.score {
        lines.push(Line::from(vec![
            Span::styled("Confidence: ", Style::default().fg(theme.subtext0)),
            Span::styled(format_score(score), Style::default().fg(theme.green)),
        ]));
    }

    lines.push(Line::from(""));
    if event.snippet.is_empty() {
        lines.push(Line::from(Span::styled(
            "No summary available",
            Style::default().fg(theme.subtext0),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            event.snippet.clone(),
            Style::default().fg(theme.text),
        )));
    }

    if let Some(thumbnail) = &event.thumbnail {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Thumbnail: ", Style::default().fg(theme.subtext0)),
            Span::styled(thumbnail.clone(), Style::default().fg(theme.blue)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter/m metadata · j/k scroll · Esc back",
        Style::default().fg(theme.subtext0),
    )));

    let detail = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.blue))
                .title(Span::styled(
                    " Event Detail ",
                    Style::default().fg(theme.blue).bold(),
                ))
                .style(Style::default().bg(theme.base)),
        )
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(detail, popup_area);
}

/// Render the nested metadata overlay on top of the detail view
pub fn render_meta_overlay(frame: &mut Frame, event: &CameraEvent, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(50, 40, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Event id: ", Style::default().fg(theme.subtext0)),
            Span::styled(event.id.clone(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("Timestamp: ", Style::default().fg(theme.subtext0)),
            Span::styled(
                event.timestamp.to_rfc3339(),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Thumbnail ref: ", Style::default().fg(theme.subtext0)),
            Span::styled(
                event.thumbnail.clone().unwrap_or_else(|| "none".to_string()),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Raw score: ", Style::default().fg(theme.subtext0)),
            Span::styled(
                event
                    .score
                    .map(|s| format!("{s:.4}"))
                    .unwrap_or_else(|| "none".to_string()),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc back",
            Style::default().fg(theme.subtext0),
        )),
    ];

    let meta = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.mauve))
                .title(Span::styled(
                    " Metadata ",
                    Style::default().fg(theme.mauve).bold(),
                ))
                .style(Style::default().bg(theme.base)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(meta, popup_area);
}

/// Render the removal confirmation dialog
pub fn render_confirmation_dialog(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let Some(removal) = &app.pending_removal else {
        return;
    };
    let popup_area = centered_rect(50, 20, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            removal.description(),
            Style::default().fg(theme.text).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.green).bold()),
            Span::styled(" confirm   ", Style::default().fg(theme.text)),
            Span::styled("n", Style::default().fg(theme.red).bold()),
            Span::styled(" cancel", Style::default().fg(theme.text)),
        ]),
    ];

    let dialog = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.red))
                .title(Span::styled(
                    " Unlink Event ",
                    Style::default().fg(theme.red).bold(),
                ))
                .style(Style::default().bg(theme.base)),
        );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(dialog, popup_area);
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<9}"), Style::default().fg(theme.yellow)),
            Span::styled(desc, Style::default().fg(theme.text)),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(theme.mauve).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation",
            Style::default().fg(theme.blue).bold(),
        )),
        key("j/↓", "Move down"),
        key("k/↑", "Move up"),
        key("g", "Go to top"),
        key("G", "Go to bottom"),
        key("Ctrl+d", "Jump down"),
        key("Ctrl+u", "Jump up"),
        key("PgUp/PgDn", "Scroll a viewport / change page"),
        key("n/p", "Next/prev page (paged lists)"),
        key("Tab", "Switch pane"),
        Line::from(""),
        Line::from(Span::styled(
            "Views",
            Style::default().fg(theme.blue).bold(),
        )),
        key("Enter", "Open entity / event detail / metadata"),
        key("Esc", "Close view, clear filter, close list"),
        Line::from(""),
        Line::from(Span::styled(
            "Actions",
            Style::default().fg(theme.blue).bold(),
        )),
        key("D or x", "Unlink selected event"),
        key("r", "Refresh / retry fetch"),
        key("/", "Filter events (camera=.. label=..)"),
        key("t", "Cycle theme"),
        Line::from(""),
        Line::from(Span::styled(
            "Mouse",
            Style::default().fg(theme.blue).bold(),
        )),
        key("Click", "Select row"),
        key("Scroll", "Scroll list / overlay"),
        Line::from(""),
        key("?", "Toggle help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(theme.subtext0),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.mauve))
                .title(Span::styled(
                    " Help ",
                    Style::default().fg(theme.mauve).bold(),
                ))
                .style(Style::default().bg(theme.base)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}
