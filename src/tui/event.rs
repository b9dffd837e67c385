//! Event handling for the TUI

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use std::time::Duration;

use super::app::{App, InputMode, Pane, SelectableList};
use crate::list::RenderMode;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Cells scrolled per mouse wheel tick over a windowed list
const WHEEL_SCROLL_CELLS: i64 = 3;

/// Handle all pending input events
///
/// Drains the queue each tick: scroll events only mutate the offset, and
/// the window math runs once per drawn frame, so a burst of wheel input
/// coalesces to the latest offset instead of a render per tick.
pub fn handle_events(app: &mut App) -> Result<()> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(());
    }
    loop {
        match event::read()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {} // Terminal will redraw automatically
            _ => {}
        }
        if !event::poll(Duration::ZERO)? {
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Handle pending action confirmation first
    if app.has_pending_action() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_action(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_action(),
            _ => {} // Ignore other keys during confirmation
        }
        return;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    // Clear status message on any key press
    app.clear_status();

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Filter => handle_filter_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => {
            if !app.close_child() {
                app.quit();
            }
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Back out: child view, then filters, then the event list itself
        KeyCode::Esc => {
            if app.close_child() {
                return;
            }
            if app.focus == Pane::Events {
                if !app.filters.is_empty() {
                    app.clear_filters();
                } else {
                    app.close_event_list();
                }
            }
        }

        // Pane focus
        KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') if app.children.is_empty() => {
            app.focus = match app.focus {
                Pane::Entities if app.events.is_some() => Pane::Events,
                Pane::Entities => Pane::Entities,
                Pane::Events => Pane::Entities,
            };
        }

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => {
            if !app.children.is_empty() {
                app.scroll_child(1);
            } else {
                with_focused_list(app, |list| list.select_next());
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if !app.children.is_empty() {
                app.scroll_child(-1);
            } else {
                with_focused_list(app, |list| list.select_prev());
            }
        }
        KeyCode::Char('g') => with_focused_list(app, |list| list.select_first()),
        KeyCode::Char('G') => with_focused_list(app, |list| list.select_last()),

        // Page navigation
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..10 {
                with_focused_list(app, |list| list.select_next());
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..10 {
                with_focused_list(app, |list| list.select_prev());
            }
        }
        KeyCode::PageDown => page_scroll(app, 1),
        KeyCode::PageUp => page_scroll(app, -1),

        // Paginated mode: explicit page controls
        KeyCode::Char('n') | KeyCode::Right => change_page(app, 1),
        KeyCode::Char('p') | KeyCode::Left => change_page(app, -1),

        // Open: entity -> event list, event -> detail, detail -> metadata
        KeyCode::Enter => match app.focus {
            Pane::Entities if app.children.is_empty() => app.open_selected_entity(),
            _ => app.open_child(),
        },
        KeyCode::Char('m') if !app.children.is_empty() => app.open_child(),

        // Unlink the selected event (confirmation follows)
        KeyCode::Char('D') | KeyCode::Char('x')
            if app.focus == Pane::Events && app.children.is_empty() =>
        {
            app.request_remove();
        }

        // Refresh
        KeyCode::Char('r') => match app.focus {
            Pane::Entities => app.reload_entities(),
            Pane::Events => app.refetch_events(),
        },

        // Filter events
        KeyCode::Char('/') => app.enter_filter(),

        // Theme cycling
        KeyCode::Char('t') => app.cycle_theme(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

fn handle_filter_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_filter(),
        KeyCode::Enter => app.apply_filter(),
        KeyCode::Backspace => app.filter_pop(),
        KeyCode::Char(c) => app.filter_push(c),
        _ => {}
    }
}

/// Apply a navigation closure to whichever list has focus.
fn with_focused_list(app: &mut App, f: impl Fn(&mut dyn SelectableList)) {
    match app.focus {
        Pane::Entities => f(&mut app.entities),
        Pane::Events => {
            if let Some(session) = &mut app.events {
                f(session);
            }
        }
    }
}

/// PageUp/PageDown: viewport-sized scroll in windowed mode, page change in
/// paginated mode, coarse selection jump in the sidebar.
fn page_scroll(app: &mut App, direction: i64) {
    match app.focus {
        Pane::Entities => {
            for _ in 0..10 {
                if direction > 0 {
                    app.entities.select_next();
                } else {
                    app.entities.select_prev();
                }
            }
        }
        Pane::Events => {
            let Some(mode) = app.events.as_ref().map(|s| s.mode()) else {
                return;
            };
            match mode {
                RenderMode::Windowed => {
                    if let Some(session) = &mut app.events {
                        let step = i64::from(session.viewport().height.max(1));
                        session.scroll_by(direction * step);
                    }
                }
                RenderMode::Paginated => change_page(app, direction),
            }
        }
    }
}

/// Prev/Next page in paginated mode; disabled edges are no-ops.
fn change_page(app: &mut App, direction: i64) {
    if app.focus != Pane::Events || !app.children.is_empty() {
        return;
    }
    let Some(session) = &mut app.events else { return };
    let request = if direction > 0 {
        session.next_page()
    } else {
        session.prev_page()
    };
    if let Some(request) = request {
        app.schedule_session_fetch(request);
    }
}

fn handle_mouse_event(app: &mut App, mouse: crossterm::event::MouseEvent) {
    // Don't handle mouse during overlays or special modes
    if app.show_help || app.has_pending_action() || app.input_mode != InputMode::Normal {
        return;
    }

    // Wheel over an open detail scrolls the overlay content
    if !app.children.is_empty() {
        match mouse.kind {
            MouseEventKind::ScrollUp => app.scroll_child(-1),
            MouseEventKind::ScrollDown => app.scroll_child(1),
            _ => {}
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => wheel(app, mouse.column, mouse.row, -1),
        MouseEventKind::ScrollDown => wheel(app, mouse.column, mouse.row, 1),
        MouseEventKind::Down(MouseButton::Left) => {
            let (x, y) = (mouse.column, mouse.row);
            if app.is_in_entity_area(x, y) {
                if let Some(row) = app.entity_row_at(x, y) {
                    app.focus = Pane::Entities;
                    app.entities.select(row);
                }
            } else if app.is_in_event_area(x, y) {
                if let Some(row) = app.event_row_at(x, y) {
                    app.focus = Pane::Events;
                    if let Some(session) = &mut app.events {
                        session.set_selected_index(row);
                    }
                }
            }
        }
        _ => {}
    }
}

/// Wheel input: moves the viewport in windowed mode, the selection
/// elsewhere.
fn wheel(app: &mut App, x: u16, y: u16, direction: i64) {
    if app.is_in_event_area(x, y) {
        let Some(session) = &mut app.events else { return };
        match session.mode() {
            RenderMode::Windowed => session.scroll_by(direction * WHEEL_SCROLL_CELLS),
            RenderMode::Paginated => {
                if direction > 0 {
                    session.select_next();
                } else {
                    session.select_prev();
                }
            }
        }
    } else if app.is_in_entity_area(x, y) {
        if direction > 0 {
            app.entities.select_next();
        } else {
            app.entities.select_prev();
        }
    }
}
