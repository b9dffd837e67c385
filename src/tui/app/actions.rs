//! Row actions for the event list
//!
//! Removals are destructive, so they go through a pending-action
//! confirmation first, then a gateway mutation, and only a confirmed
//! success touches list state. The scroll offset is never reset by a
//! removal; the window just re-derives against the shrunk collection.

use log::debug;

use super::{App, FetchKind, FetchOutcome, PendingRemoval};

impl App {
    /// Ask for confirmation before unlinking the selected event.
    pub fn request_remove(&mut self) {
        let Some(session) = &self.events else { return };
        let Some(event) = session.selected_item() else {
            return;
        };
        self.pending_removal = Some(PendingRemoval {
            event_id: event.id.clone(),
            summary: format!("{} / {}", event.camera, event.label),
        });
    }

    /// Check if there's a pending action
    pub fn has_pending_action(&self) -> bool {
        self.pending_removal.is_some()
    }

    /// Confirm the pending removal and issue the mutation
    pub fn confirm_action(&mut self) {
        if let Some(removal) = self.pending_removal.take() {
            self.execute_removal(removal);
        }
    }

    /// Cancel the pending action
    pub fn cancel_action(&mut self) {
        self.pending_removal = None;
    }

    fn execute_removal(&mut self, removal: PendingRemoval) {
        let Some(entity) = self.current_entity.clone() else {
            return;
        };
        let gateway = self.gateway.clone();
        let event_id = removal.event_id.clone();
        self.spawn_fetch(
            FetchKind::Remove {
                event_id: removal.event_id,
            },
            move || {
                gateway
                    .remove_entity_event(&entity.id, &event_id)
                    .map(|_| FetchOutcome::Removed)
            },
        );
    }

    /// Apply a finished removal mutation.
    pub(super) fn apply_removal(
        &mut self,
        epoch: u64,
        event_id: &str,
        result: Result<FetchOutcome, String>,
    ) {
        if let Err(e) = result {
            // List state deliberately unchanged on a rejected mutation.
            self.set_status(format!("Removal failed: {e}"), true);
            return;
        }
        if epoch != self.session_epoch {
            debug!("removal applied to a list that has since closed");
            return;
        }
        let Some(session) = &mut self.events else {
            return;
        };
        let Some(row) = session.items().iter().position(|e| e.id == event_id) else {
            debug!("removed event {event_id} no longer in the list");
            return;
        };
        session.remove_row(row);
        // Reconcile the on-screen region against the server.
        let request = session.refetch_request();
        if let Some(entity) = &mut self.current_entity {
            entity.event_count = entity.event_count.saturating_sub(1);
        }
        self.set_status("Event unlinked", false);
        self.schedule_session_fetch(request);
    }
}
