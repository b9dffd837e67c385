//! Application state for the TUI

use std::thread::JoinHandle;

use log::debug;

use super::theme::ThemeVariant;
use crate::api::Gateway;
use crate::config::LookoutConfig;
use crate::list::{FetchRequest, ListKnobs, ListSession, NavStack, RenderMode};
use crate::models::{CameraEvent, Entity, EventFilters, EventPage};

pub mod actions;
pub mod list_state;
pub mod traits;

#[cfg(test)]
mod tests;

pub use list_state::EntityState;
pub use traits::SelectableList;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Entities,
    Events,
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter, // Editing the event filter with '/'
}

/// A nested view opened above the event list
///
/// Detail views stack: the event list opens a detail, the detail can open a
/// metadata view on top. Only the list itself has windowed scroll state; the
/// overlays carry a plain paragraph scroll.
#[derive(Debug, Clone)]
pub enum ChildView {
    EventDetail { event: CameraEvent, scroll: u16 },
    EventMeta { event: CameraEvent },
}

/// Pending action requiring confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub event_id: String,
    pub summary: String,
}

impl PendingRemoval {
    pub fn description(&self) -> String {
        format!("Unlink event {}?", self.summary)
    }
}

/// Status message to display temporarily
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Progress of a windowed list filling up in the background
#[derive(Debug, Clone, Copy)]
pub struct LoadingProgress {
    pub loaded: usize,
    pub total: usize,
}

/// What an in-flight gateway request is for
#[derive(Debug, Clone)]
pub enum FetchKind {
    /// First page of a freshly opened event list
    Open,
    /// Fill/page/refetch for the current session
    Page { request: FetchRequest },
    /// Row removal mutation
    Remove { event_id: String },
    /// Entity listing (re)load
    Entities,
}

/// Result payload of a finished gateway request
pub enum FetchOutcome {
    Page(EventPage),
    Removed,
    Entities(Vec<Entity>),
}

/// One in-flight gateway request, polled from the main loop
///
/// A single slot: scheduling a new request drops the old handle, so a
/// superseded response is never observed, let alone applied.
pub struct FetchOp {
    pub kind: FetchKind,
    pub epoch: u64,
    handle: JoinHandle<Result<FetchOutcome, String>>,
}

/// Main application state
pub struct App {
    pub running: bool,
    pub gateway: Gateway,
    pub knobs: ListKnobs,
    pub focus: Pane,
    pub input_mode: InputMode,

    // Entity sidebar
    pub entities: EntityState,
    pub entities_loaded: bool,

    // Event list (one session per opened collection)
    pub events: Option<ListSession<CameraEvent>>,
    pub current_entity: Option<Entity>,
    pub filters: EventFilters,
    pub filter_input: String,
    pub loading_progress: Option<LoadingProgress>,
    pub open_failed: bool,

    // Nested views + scroll restoration
    pub nav: NavStack,
    pub children: Vec<ChildView>,

    // Actions
    pub pending_removal: Option<PendingRemoval>,
    pub status_message: Option<StatusMessage>,

    // UI state
    pub show_help: bool,
    pub theme_variant: ThemeVariant,
    pub frame: u64,

    // Mouse interaction state
    pub last_entity_area: Option<(u16, u16, u16, u16)>, // (x, y, width, height)
    pub last_event_area: Option<(u16, u16, u16, u16)>,
    /// Scroll offset the sidebar list was drawn with (for click mapping)
    pub entity_list_offset: usize,

    // In-flight gateway request
    fetch_op: Option<FetchOp>,
    /// Bumped whenever the event list session is replaced; responses from a
    /// previous session lose their epoch and are discarded on arrival
    session_epoch: u64,
}

impl App {
    pub fn new(gateway: Gateway, config: &LookoutConfig) -> Self {
        let mut app = Self {
            running: true,
            gateway,
            knobs: config.list.knobs(),
            focus: Pane::Entities,
            input_mode: InputMode::Normal,
            entities: EntityState::default(),
            entities_loaded: false,
            events: None,
            current_entity: None,
            filters: EventFilters::default(),
            filter_input: String::new(),
            loading_progress: None,
            open_failed: false,
            nav: NavStack::new(),
            children: Vec::new(),
            pending_removal: None,
            status_message: None,
            show_help: false,
            theme_variant: ThemeVariant::from_config_theme(config.tui.theme),
            frame: 0,
            last_entity_area: None,
            last_event_area: None,
            entity_list_offset: 0,
            fetch_op: None,
            session_epoch: 0,
        };
        app.reload_entities();
        app
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Cycle to the next theme
    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        self.set_status(
            format!("Theme: {}", self.theme_variant.display_name()),
            false,
        );
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Bump the draw-frame counter; scroll-derived state is recomputed at
    /// most once per returned value.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    // ==================== Status Messages ====================

    /// Set a status message
    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ==================== Gateway Requests ====================

    /// Whether a gateway request is in flight
    pub fn has_fetch_op(&self) -> bool {
        self.fetch_op.is_some()
    }

    /// Reload the entity sidebar from the gateway.
    pub fn reload_entities(&mut self) {
        let gateway = self.gateway.clone();
        self.spawn_fetch(FetchKind::Entities, move || {
            gateway.entities().map(FetchOutcome::Entities)
        });
    }

    /// Open the event list for the entity under the cursor.
    pub fn open_selected_entity(&mut self) {
        let Some(entity) = self.entities.selected_entity().cloned() else {
            return;
        };
        let filters = self.filters.clone();
        self.open_entity_events(entity, filters);
    }

    /// Open a fresh list session for `entity` with `filters`.
    ///
    /// Replaces any current session: its nav frames are forgotten so a
    /// restoration can never target the dead list, and any in-flight fetch
    /// it issued loses its epoch.
    pub fn open_entity_events(&mut self, entity: Entity, filters: EventFilters) {
        self.close_event_list();
        self.session_epoch += 1;
        self.current_entity = Some(entity.clone());
        self.filters = filters.clone();
        self.open_failed = false;

        let gateway = self.gateway.clone();
        let limit = self.knobs.page_size;
        self.spawn_fetch(FetchKind::Open, move || {
            gateway
                .entity_events(&entity.id, 0, limit, &filters)
                .map(FetchOutcome::Page)
        });
    }

    /// Drop the current event list session, if any.
    pub fn close_event_list(&mut self) {
        if let Some(session) = self.events.take() {
            self.nav.forget(session.list_id());
        }
        self.children.clear();
        self.current_entity = None;
        self.loading_progress = None;
        self.focus = Pane::Entities;
    }

    /// Run a session fetch (fill, page change, refetch) against the gateway.
    pub fn schedule_session_fetch(&mut self, request: FetchRequest) {
        let Some(entity) = self.current_entity.clone() else {
            return;
        };
        let gateway = self.gateway.clone();
        let filters = self.filters.clone();
        self.spawn_fetch(FetchKind::Page { request }, move || {
            gateway
                .entity_events(&entity.id, request.offset, request.limit, &filters)
                .map(FetchOutcome::Page)
        });
    }

    /// Kick off the next fill fetch for a windowed session, if one is due
    /// and the request slot is free.
    pub fn maybe_schedule_fill(&mut self) {
        if self.fetch_op.is_some() {
            return;
        }
        if let Some(request) = self.events.as_ref().and_then(|s| s.fill_request()) {
            self.schedule_session_fetch(request);
        }
    }

    /// Refetch the visible region of the event list ('r').
    pub fn refetch_events(&mut self) {
        if let Some(request) = self.events.as_mut().map(|s| s.refetch_request()) {
            self.schedule_session_fetch(request);
        } else if let Some(entity) = self.current_entity.clone() {
            // Initial open failed; retry it.
            let filters = self.filters.clone();
            self.open_entity_events(entity, filters);
        }
    }

    fn spawn_fetch<F>(&mut self, kind: FetchKind, request: F)
    where
        F: FnOnce() -> Result<FetchOutcome, crate::api::ApiError> + Send + 'static,
    {
        let handle = std::thread::spawn(move || request().map_err(|e| e.to_string()));
        self.fetch_op = Some(FetchOp {
            kind,
            epoch: self.session_epoch,
            handle,
        });
    }

    /// Poll the in-flight request; apply its result if it finished.
    ///
    /// Called once per main-loop tick. Responses carrying a stale session
    /// epoch (the list they were issued for is gone) are dropped here;
    /// responses with a stale generation are dropped by the session itself.
    pub fn poll_fetch(&mut self) {
        let Some(op) = self.fetch_op.take_if(|op| op.handle.is_finished()) else {
            return;
        };
        let result = match op.handle.join() {
            Ok(result) => result,
            Err(_) => Err("gateway request thread panicked".to_string()),
        };
        match op.kind {
            FetchKind::Entities => self.apply_entities(result),
            FetchKind::Open => self.apply_open(op.epoch, result),
            FetchKind::Page { request } => self.apply_page(op.epoch, request, result),
            FetchKind::Remove { event_id } => self.apply_removal(op.epoch, &event_id, result),
        }
    }

    fn apply_entities(&mut self, result: Result<FetchOutcome, String>) {
        match result {
            Ok(FetchOutcome::Entities(entities)) => {
                let count = entities.len();
                self.entities.replace(entities);
                self.entities_loaded = true;
                self.set_status(format!("{count} entities"), false);
            }
            Ok(_) => {}
            Err(e) => {
                self.entities_loaded = true;
                self.set_status(format!("Failed to load entities: {e}"), true);
            }
        }
    }

    fn apply_open(&mut self, epoch: u64, result: Result<FetchOutcome, String>) {
        if epoch != self.session_epoch {
            debug!("discarding open response for stale session epoch {epoch}");
            return;
        }
        match result {
            Ok(FetchOutcome::Page(page)) => {
                let entity_id = self
                    .current_entity
                    .as_ref()
                    .map(|e| e.id.as_str())
                    .unwrap_or("?");
                debug!(
                    "opened events for {entity_id}: {} of {} (has_more: {})",
                    page.events.len(),
                    page.total,
                    page.has_more
                );
                let list_id = format!("events:{entity_id}#{epoch}");
                let session = ListSession::open(list_id, page.events, page.total, self.knobs);
                let windowed = session.mode() == RenderMode::Windowed;
                self.loading_progress = windowed.then_some(LoadingProgress {
                    loaded: session.len(),
                    total: session.total(),
                });
                self.events = Some(session);
                self.focus = Pane::Events;
                self.maybe_schedule_fill();
            }
            Ok(_) => {}
            Err(e) => {
                self.open_failed = true;
                self.set_status(format!("Failed to load events: {e}"), true);
            }
        }
    }

    fn apply_page(&mut self, epoch: u64, request: FetchRequest, result: Result<FetchOutcome, String>) {
        if epoch != self.session_epoch {
            debug!("discarding page response for stale session epoch {epoch}");
            return;
        }
        let Some(session) = &mut self.events else {
            debug!("discarding page response: event list closed");
            return;
        };
        match result {
            Ok(FetchOutcome::Page(page)) => {
                session.apply_fetch(request.generation, request.offset, page.events, page.total);
                if self.loading_progress.is_some() {
                    let (loaded, total) = (session.len(), session.total());
                    self.loading_progress = (loaded < total)
                        .then_some(LoadingProgress { loaded, total });
                }
                self.maybe_schedule_fill();
            }
            Ok(_) => {}
            Err(e) => {
                session.fetch_failed(request.generation);
                self.set_status(format!("Fetch failed: {e} (press r to retry)"), true);
            }
        }
    }

    // ==================== Nested Views ====================

    /// Open the next child view: event detail from the list, metadata from
    /// the detail.
    pub fn open_child(&mut self) {
        match self.children.last() {
            None => {
                let Some(session) = &self.events else { return };
                let Some(event) = session.selected_item().cloned() else {
                    return;
                };
                // Capture before the child shows so closing lands back here.
                self.nav
                    .push(session.list_id(), session.viewport().scroll_offset);
                self.children.push(ChildView::EventDetail { event, scroll: 0 });
            }
            Some(ChildView::EventDetail { event, .. }) => {
                let event = event.clone();
                self.children.push(ChildView::EventMeta { event });
            }
            Some(ChildView::EventMeta { .. }) => {}
        }
    }

    /// Close the topmost child view; returns false if none was open.
    pub fn close_child(&mut self) -> bool {
        let Some(closed) = self.children.pop() else {
            return false;
        };
        if matches!(closed, ChildView::EventDetail { .. }) {
            // Back at the event list: re-apply its captured offset on the
            // next draw, after the overlay is gone.
            match &mut self.events {
                Some(session) => {
                    if let Some(offset) = self.nav.pop(session.list_id()) {
                        session.schedule_restore(offset);
                    } else {
                        debug!("no nav frame for {}", session.list_id());
                    }
                }
                None => {
                    debug!("scroll restoration miss: event list already closed");
                }
            }
        }
        true
    }

    /// Scroll the topmost detail overlay by `delta` lines.
    pub fn scroll_child(&mut self, delta: i32) {
        if let Some(ChildView::EventDetail { scroll, .. }) = self.children.last_mut() {
            *scroll = scroll.saturating_add_signed(delta as i16);
        }
    }

    // ==================== Event Filter ====================

    pub fn enter_filter(&mut self) {
        self.input_mode = InputMode::Filter;
        self.filter_input = self.filters.summary();
    }

    pub fn exit_filter(&mut self) {
        self.input_mode = InputMode::Normal;
        self.filter_input.clear();
    }

    pub fn filter_push(&mut self, c: char) {
        self.filter_input.push(c);
    }

    pub fn filter_pop(&mut self) {
        self.filter_input.pop();
    }

    /// Apply the edited filter: reopens the current list session, which
    /// re-decides the render mode against the filtered total.
    pub fn apply_filter(&mut self) {
        let filters = parse_filters(&self.filter_input);
        self.input_mode = InputMode::Normal;
        self.filter_input.clear();
        if filters == self.filters {
            return;
        }
        if let Some(entity) = self.current_entity.clone() {
            self.open_entity_events(entity, filters);
        } else {
            self.filters = filters;
        }
    }

    /// Drop all filters (Esc in the events pane with no child open).
    pub fn clear_filters(&mut self) {
        if self.filters.is_empty() {
            return;
        }
        if let Some(entity) = self.current_entity.clone() {
            self.open_entity_events(entity, EventFilters::default());
        } else {
            self.filters = EventFilters::default();
        }
    }

    // ==================== Mouse Hit Testing ====================

    pub fn is_in_entity_area(&self, x: u16, y: u16) -> bool {
        in_area(self.last_entity_area, x, y)
    }

    pub fn is_in_event_area(&self, x: u16, y: u16) -> bool {
        in_area(self.last_event_area, x, y)
    }

    /// Map a click inside the event list to a row index.
    pub fn event_row_at(&self, _x: u16, y: u16) -> Option<usize> {
        let (_, area_y, _, height) = self.last_event_area?;
        let session = self.events.as_ref()?;
        // Inside the borders
        let inner_y = y.checked_sub(area_y + 1)?;
        if inner_y >= height.saturating_sub(2) {
            return None;
        }
        let row_height = u64::from(session.knobs().row_height.max(1));
        let cell = session.viewport().scroll_offset + u64::from(inner_y);
        let index = (cell / row_height) as usize;
        (index < session.len()).then_some(index)
    }

    /// Map a click inside the entity sidebar to an entity index.
    pub fn entity_row_at(&self, _x: u16, y: u16) -> Option<usize> {
        let (_, area_y, _, height) = self.last_entity_area?;
        let inner_y = y.checked_sub(area_y + 1)? as usize;
        if inner_y >= height.saturating_sub(2) as usize {
            return None;
        }
        let index = inner_y + self.entity_list_offset;
        (index < self.entities.len()).then_some(index)
    }
}

/// Parse a filter line: `camera=<name>` and `label=<name>` tokens, anything
/// else is shorthand for a label.
pub fn parse_filters(input: &str) -> EventFilters {
    let mut filters = EventFilters::default();
    for token in input.split_whitespace() {
        if let Some(camera) = token.strip_prefix("camera=") {
            filters.camera = non_empty(camera);
        } else if let Some(label) = token.strip_prefix("label=") {
            filters.label = non_empty(label);
        } else {
            filters.label = non_empty(token);
        }
    }
    filters
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn in_area(area: Option<(u16, u16, u16, u16)>, x: u16, y: u16) -> bool {
    let Some((ax, ay, w, h)) = area else {
        return false;
    };
    x >= ax && x < ax + w && y >= ay && y < ay + h
}
