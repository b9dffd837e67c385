//! Gateway API client
//!
//! Thin, stateless wrapper over the NVR gateway's REST endpoints. No retry
//! logic lives here: callers decide whether a failed fetch gets a retry
//! affordance, since blindly re-issuing requests against non-idempotent
//! filter combinations would risk duplicate side effects.

use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;
use urlencoding::encode;

use crate::http::HTTP_AGENT;
use crate::models::{Entity, EventFilters, EventPage};

/// Errors from gateway requests
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("gateway request failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("gateway returned HTTP {status} for {path}")]
    Status { status: u16, path: String },
    #[error("invalid fetch range: offset={offset} limit={limit}")]
    InvalidRange { offset: usize, limit: usize },
}

/// Client for one gateway instance
#[derive(Debug, Clone)]
pub struct Gateway {
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all tracked entities.
    pub fn entities(&self) -> Result<Vec<Entity>, ApiError> {
        self.get_json("/api/entities")
    }

    /// Fetch one page of an entity's linked events, newest first.
    ///
    /// Read-only; also returns the authoritative collection total so the
    /// caller can (re)derive its collection descriptor on every response.
    pub fn entity_events(
        &self,
        entity_id: &str,
        offset: usize,
        limit: usize,
        filters: &EventFilters,
    ) -> Result<EventPage, ApiError> {
        if limit == 0 {
            return Err(ApiError::InvalidRange { offset, limit });
        }
        let mut path = format!(
            "/api/entities/{}/events?offset={}&limit={}",
            encode(entity_id),
            offset,
            limit
        );
        if let Some(camera) = &filters.camera {
            path.push_str(&format!("&camera={}", encode(camera)));
        }
        if let Some(label) = &filters.label {
            path.push_str(&format!("&label={}", encode(label)));
        }
        self.get_json(&path)
    }

    /// Unlink an event from an entity.
    pub fn remove_entity_event(&self, entity_id: &str, event_id: &str) -> Result<(), ApiError> {
        let path = format!(
            "/api/entities/{}/events/{}",
            encode(entity_id),
            encode(event_id)
        );
        let url = format!("{}{}", self.base_url, path);
        debug!("DELETE {url}");
        HTTP_AGENT
            .delete(&url)
            .call()
            .map_err(|e| Self::map_error(e, &path))?;
        Ok(())
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let response = HTTP_AGENT
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| Self::map_error(e, path))?;
        Ok(response.into_body().read_json::<T>()?)
    }

    fn map_error(error: ureq::Error, path: &str) -> ApiError {
        match error {
            ureq::Error::StatusCode(status) => ApiError::Status {
                status,
                path: path.to_string(),
            },
            other => ApiError::Transport(other),
        }
    }
}
