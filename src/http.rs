//! Shared HTTP agent for gateway requests

use std::sync::LazyLock;
use std::time::Duration;

use ureq::Agent;

/// Global agent with connection reuse and a bounded overall timeout.
///
/// The engine imposes no timeout of its own; everything network-facing
/// inherits this transport deadline.
pub static HTTP_AGENT: LazyLock<Agent> = LazyLock::new(|| {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(10)))
        .build()
        .new_agent()
});
