//! Lookups and derived relations over a [`Catalog`].
//!
//! Catalogs are small and replaced wholesale, so every query is a linear scan
//! over the borrowed collections. Nothing is cached between calls.
//!
//! Dangling references are normal here: a book whose `author_id` matches no
//! author simply has no author, and a comment whose `trailer_id` matches no
//! trailer is never returned for any book.

use crate::models::{Author, Book, Catalog, Comment};

/// Read-only query view over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogIndex<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogIndex<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Exact-match lookup. Returns `None` for any id not in the catalog,
    /// including the empty string.
    #[must_use]
    pub fn find_book(&self, book_id: &str) -> Option<&'a Book> {
        self.catalog.books.iter().find(|b| b.id == book_id)
    }

    #[must_use]
    pub fn find_author(&self, author_id: &str) -> Option<&'a Author> {
        self.catalog.authors.iter().find(|a| a.id == author_id)
    }

    /// Books whose `author_id` equals `author_id`, in catalog order.
    ///
    /// This is the authoritative author-to-books relation; `Author::books_written`
    /// is not consulted.
    #[must_use]
    pub fn books_by_author(&self, author_id: &str) -> Vec<&'a Book> {
        self.catalog
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .collect()
    }

    /// Comments whose `trailer_id` equals `trailer_id`, in catalog order.
    #[must_use]
    pub fn comments_for_trailer(&self, trailer_id: &str) -> Vec<&'a Comment> {
        self.catalog
            .comments
            .iter()
            .filter(|c| c.trailer_id == trailer_id)
            .collect()
    }

    #[must_use]
    pub fn author_of(&self, book: &Book) -> Option<&'a Author> {
        self.find_author(book.author_id.as_str())
    }

    /// Discussion shown under a book.
    ///
    /// Comments are keyed by the embedded trailer's id, never by the book id.
    #[must_use]
    pub fn comments_for_book(&self, book: &Book) -> Vec<&'a Comment> {
        self.comments_for_trailer(book.trailer.id.as_str())
    }
}

impl<'a> From<&'a Catalog> for CatalogIndex<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Self::new(catalog)
    }
}
