use serde::{Deserialize, Serialize};

use crate::domain::TrailerId;

/// A discussion entry under a trailer. Comments carry no identity of their
/// own; their position in the catalog is their order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub trailer_id: TrailerId,
    pub username: String,
    pub timestamp: String,
    pub text: String,
    pub likes: u64,
}
