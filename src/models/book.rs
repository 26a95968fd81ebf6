use serde::{Deserialize, Serialize};

use crate::domain::{AuthorId, BookId, TrailerId};

/// Promotional video embedded in a [`Book`].
///
/// `duration` and `upload_date` are display strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    pub id: TrailerId,
    pub video_url: String,
    pub thumbnail: String,
    pub duration: String,
    pub views: u64,
    pub comments_count: u64,
    pub upload_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub cover_image: String,
    pub summary: String,
    pub genre: String,
    /// Expected in 0..=5 but shown exactly as generated.
    pub rating: f64,
    pub review_count: u64,
    /// May reference an author that is not in the catalog.
    pub author_id: AuthorId,
    pub trailer: Trailer,
}
