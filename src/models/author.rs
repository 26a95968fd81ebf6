use serde::{Deserialize, Serialize};

use crate::domain::{AuthorId, BookId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub photo: String,
    pub bio: String,
    pub follower_count: u64,
    pub total_trailer_views: u64,
    /// Informational only. Use `CatalogIndex::books_by_author` for the
    /// books actually attributed to this author.
    pub books_written: Vec<BookId>,
}
