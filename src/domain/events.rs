//! Session events.
//!
//! These events are broadcast by the session handle so a renderer can react to
//! catalog replacement, failed generations and view changes without polling.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::navigation::ViewState;

/// Events sent to subscribers of a [`SessionHandle`](crate::services::SessionHandle).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum SessionEvent {
    RefreshStarted {
        ticket: u64,
    },
    CatalogReplaced {
        ticket: u64,
        books: usize,
        authors: usize,
        comments: usize,
        loaded_at: DateTime<Utc>,
    },
    GenerationFailed {
        ticket: u64,
        message: String,
    },
    /// A generation finished after a newer one was issued and was discarded.
    RefreshSuperseded {
        ticket: u64,
        latest: u64,
    },
    ViewChanged {
        view: ViewState,
    },
}
