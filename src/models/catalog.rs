//! The generated catalog aggregate.
//!
//! A [`Catalog`] is produced in one piece by a generation gateway and is never
//! merged into; a newer catalog replaces the previous one entirely.

use serde::{Deserialize, Serialize};

use super::{Author, Book, Comment};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
    pub comments: Vec<Comment>,
}

impl Catalog {
    /// Parses a catalog from the JSON payload of a generation service.
    ///
    /// All three collections must be present. Field values are taken as-is.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.authors.is_empty() && self.comments.is_empty()
    }

    /// The book shown in the dashboard hero slot.
    #[must_use]
    pub fn featured_book(&self) -> Option<&Book> {
        self.books.first()
    }

    /// Every book after the featured one, in catalog order.
    #[must_use]
    pub fn trending_books(&self) -> &[Book] {
        self.books.get(1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{author, book};

    #[test]
    fn featured_and_trending_split() {
        let catalog = Catalog {
            books: vec![book("b1", "a1", "t1"), book("b2", "a1", "t2"), book("b3", "a2", "t3")],
            authors: vec![author("a1")],
            comments: vec![],
        };

        assert_eq!(catalog.featured_book().unwrap().id, "b1");
        let trending: Vec<_> = catalog.trending_books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(trending, vec!["b2", "b3"]);
    }

    #[test]
    fn empty_catalog_has_no_featured_book() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.featured_book().is_none());
        assert!(catalog.trending_books().is_empty());
    }

    #[test]
    fn single_book_catalog_has_no_trending() {
        let catalog = Catalog {
            books: vec![book("b1", "a1", "t1")],
            ..Catalog::default()
        };
        assert!(catalog.trending_books().is_empty());
    }

    #[test]
    fn from_json_parses_generated_payload() {
        let payload = r#"{
            "books": [{
                "id": "b1",
                "title": "The Glass Orchard",
                "cover_image": "https://picsum.photos/seed/b1/400/600",
                "summary": "A botanist inherits a greenhouse that grows memories.",
                "genre": "Magical Realism",
                "rating": 4.6,
                "review_count": 1284,
                "author_id": "a1",
                "trailer": {
                    "id": "t1",
                    "video_url": "https://example.com/t1.mp4",
                    "thumbnail": "https://picsum.photos/seed/t1/1280/720",
                    "duration": "1:42",
                    "views": 48210,
                    "comments_count": 2,
                    "upload_date": "2 days ago"
                }
            }],
            "authors": [{
                "id": "a1",
                "name": "Mira Castellan",
                "photo": "https://picsum.photos/seed/a1/200/200",
                "bio": "Writes about gardens.",
                "follower_count": 15300,
                "total_trailer_views": 48210,
                "books_written": ["b1"]
            }],
            "comments": [{
                "trailer_id": "t1",
                "username": "inkwell",
                "timestamp": "3h ago",
                "text": "Need this now.",
                "likes": 12
            }]
        }"#;

        let catalog = Catalog::from_json(payload).unwrap();
        assert_eq!(catalog.books.len(), 1);
        assert_eq!(catalog.books[0].trailer.id, "t1");
        assert!((catalog.books[0].rating - 4.6).abs() < f64::EPSILON);
        assert_eq!(catalog.authors[0].books_written[0], "b1");
        assert_eq!(catalog.comments[0].likes, 12);
    }

    #[test]
    fn from_json_rejects_missing_collections() {
        let err = Catalog::from_json(r#"{"books": [], "authors": []}"#).unwrap_err();
        assert!(err.to_string().contains("comments"));
    }

    #[test]
    fn from_json_keeps_out_of_range_rating() {
        let mut catalog = Catalog {
            books: vec![book("b1", "a1", "t1")],
            ..Catalog::default()
        };
        catalog.books[0].rating = 7.5;
        let json = serde_json::to_string(&catalog).unwrap();

        let parsed = Catalog::from_json(&json).unwrap();
        assert!((parsed.books[0].rating - 7.5).abs() < f64::EPSILON);
    }
}
