//! View navigation.
//!
//! [`ViewState`] is the small state machine behind the browser: the dashboard,
//! a book detail page or an author profile. Transitions never consult the
//! catalog. Ids are resolved later by [`resolve`], which turns a view into
//! something renderable and reports unknown ids as [`ResolvedView::NotFound`]
//! instead of failing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AuthorId, BookId, EntityKind};
use crate::models::{Author, Book, Comment};
use crate::services::catalog_index::CatalogIndex;

/// The active view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Home,
    BookDetail {
        book_id: BookId,
    },
    AuthorProfile {
        author_id: AuthorId,
    },
}

/// User-initiated or system-initiated navigation triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Back or home.
    Home,
    SelectBook(BookId),
    SelectAuthor(AuthorId),
    /// A new catalog was applied; ids from the old one may be gone.
    CatalogReplaced,
}

impl ViewState {
    /// Returns the view that follows `action`.
    ///
    /// Selections are accepted from every view and are not checked against
    /// the catalog.
    #[must_use]
    pub fn apply(&self, action: NavigationAction) -> Self {
        let next = match action {
            NavigationAction::Home | NavigationAction::CatalogReplaced => Self::Home,
            NavigationAction::SelectBook(book_id) => Self::BookDetail { book_id },
            NavigationAction::SelectAuthor(author_id) => Self::AuthorProfile { author_id },
        };
        debug!(from = ?self, to = ?next, "view transition");
        next
    }
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    pub featured: Option<&'a Book>,
    pub trending: &'a [Book],
    pub authors: &'a [Author],
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookDetailView<'a> {
    pub book: &'a Book,
    /// `None` when the book's `author_id` dangles; render a placeholder.
    pub author: Option<&'a Author>,
    pub comments: Vec<&'a Comment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorProfileView<'a> {
    pub author: &'a Author,
    pub books: Vec<&'a Book>,
}

/// A view target that is missing from the current catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub kind: EntityKind,
    pub id: String,
}

/// A [`ViewState`] with its entities looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedView<'a> {
    Home(Dashboard<'a>),
    BookDetail(BookDetailView<'a>),
    AuthorProfile(AuthorProfileView<'a>),
    NotFound(NotFound),
}

/// Resolves `view` against the catalog behind `index`.
#[must_use]
pub fn resolve<'a>(view: &ViewState, index: CatalogIndex<'a>) -> ResolvedView<'a> {
    match view {
        ViewState::Home => {
            let catalog = index.catalog();
            ResolvedView::Home(Dashboard {
                featured: catalog.featured_book(),
                trending: catalog.trending_books(),
                authors: &catalog.authors,
            })
        }
        ViewState::BookDetail { book_id } => match index.find_book(book_id.as_str()) {
            Some(book) => ResolvedView::BookDetail(BookDetailView {
                book,
                author: index.author_of(book),
                comments: index.comments_for_book(book),
            }),
            None => {
                debug!(%book_id, "book not found in current catalog");
                ResolvedView::NotFound(NotFound {
                    kind: EntityKind::Book,
                    id: book_id.to_string(),
                })
            }
        },
        ViewState::AuthorProfile { author_id } => match index.find_author(author_id.as_str()) {
            Some(author) => ResolvedView::AuthorProfile(AuthorProfileView {
                author,
                books: index.books_by_author(author.id.as_str()),
            }),
            None => {
                debug!(%author_id, "author not found in current catalog");
                ResolvedView::NotFound(NotFound {
                    kind: EntityKind::Author,
                    id: author_id.to_string(),
                })
            }
        },
    }
}
