//! Wire models for the gateway API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked entity (person, vehicle, plate, ...) with linked camera events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    /// Entity kind reported by the gateway ("person", "vehicle", ...)
    #[serde(default)]
    pub kind: Option<String>,
    /// Number of events currently linked to this entity
    #[serde(default)]
    pub event_count: usize,
}

/// A single camera event
///
/// The `id` is stable for the lifetime of the event even when its payload is
/// edited elsewhere; events order newest-first by `timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraEvent {
    pub id: String,
    pub camera: String,
    /// Detection label ("person", "car", ...)
    pub label: String,
    /// Event start time, RFC 3339 on the wire
    pub timestamp: DateTime<Utc>,
    /// Short human-readable summary for list rows
    #[serde(default)]
    pub snippet: String,
    /// Thumbnail reference, served separately by the gateway
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Detection confidence, 0.0-1.0
    #[serde(default)]
    pub score: Option<f64>,
}

/// One page of events plus the authoritative collection size
#[derive(Debug, Clone, Deserialize)]
pub struct EventPage {
    pub events: Vec<CameraEvent>,
    pub total: usize,
    pub has_more: bool,
}

/// Filters applied to event fetches
///
/// Identical filters guarantee stable ordering across fetches, so a filter
/// change always opens a fresh list session instead of mutating the current
/// one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub camera: Option<String>,
    pub label: Option<String>,
}

impl EventFilters {
    pub fn is_empty(&self) -> bool {
        self.camera.is_none() && self.label.is_none()
    }

    /// Short display form for the list title, e.g. "camera=porch label=person"
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(camera) = &self.camera {
            parts.push(format!("camera={camera}"));
        }
        if let Some(label) = &self.label {
            parts.push(format!("label={label}"));
        }
        parts.join(" ")
    }
}
