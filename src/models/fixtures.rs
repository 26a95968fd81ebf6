//! Builders for catalog entities used across unit tests.

use super::{Author, Book, Catalog, Comment, Trailer};

pub fn trailer(id: &str) -> Trailer {
    Trailer {
        id: id.into(),
        video_url: format!("https://example.com/{id}.mp4"),
        thumbnail: format!("https://picsum.photos/seed/{id}/1280/720"),
        duration: "1:30".to_string(),
        views: 1200,
        comments_count: 0,
        upload_date: "1 day ago".to_string(),
    }
}

pub fn book(id: &str, author_id: &str, trailer_id: &str) -> Book {
    Book {
        id: id.into(),
        title: format!("Title {id}"),
        cover_image: format!("https://picsum.photos/seed/{id}/400/600"),
        summary: format!("Summary of {id}"),
        genre: "Fantasy".to_string(),
        rating: 4.2,
        review_count: 87,
        author_id: author_id.into(),
        trailer: trailer(trailer_id),
    }
}

pub fn author(id: &str) -> Author {
    Author {
        id: id.into(),
        name: format!("Author {id}"),
        photo: format!("https://picsum.photos/seed/{id}/200/200"),
        bio: format!("Bio of {id}"),
        follower_count: 5400,
        total_trailer_views: 91000,
        books_written: Vec::new(),
    }
}

pub fn comment(trailer_id: &str, username: &str, text: &str) -> Comment {
    Comment {
        trailer_id: trailer_id.into(),
        username: username.to_string(),
        timestamp: "now".to_string(),
        text: text.to_string(),
        likes: 0,
    }
}

/// Two authors, three books (two by `a1`, one by `a2`) and comments on two trailers.
pub fn sample_catalog() -> Catalog {
    Catalog {
        books: vec![
            book("b1", "a1", "t1"),
            book("b2", "a2", "t2"),
            book("b3", "a1", "t3"),
        ],
        authors: vec![author("a1"), author("a2")],
        comments: vec![
            comment("t1", "reader1", "first"),
            comment("t2", "reader2", "other book"),
            comment("t1", "reader3", "second"),
        ],
    }
}
