//! Session controller.
//!
//! [`Session`] is the single owner of the current catalog and the current
//! view. Renderers read through it and trigger transitions through its
//! methods; nothing else mutates either.
//!
//! Refreshes are sequenced with [`RefreshTicket`]s. Only the result of the
//! most recently issued ticket is applied, so a slow request that finishes
//! after a newer one cannot overwrite the newer catalog.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::clients::{GenerationError, GenerationGateway};
use crate::domain::{AuthorId, BookId};
use crate::models::{Author, Book, Catalog, Comment};
use crate::services::catalog_index::CatalogIndex;
use crate::services::navigation::{NavigationAction, ResolvedView, ViewState, resolve};

/// Message shown when a failed generation carries no text of its own.
pub const DEFAULT_GENERATION_ERROR: &str = "Failed to generate content.";

/// Sequence number of a refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RefreshTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened to a completed refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The new catalog replaced the old one and the view went home.
    Applied,
    /// Generation failed; catalog and view are unchanged.
    Failed(String),
    /// A newer refresh was issued before this one completed; result dropped.
    Superseded { latest: RefreshTicket },
}

/// What the renderer should draw right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    /// A generation is in flight.
    Loading,
    /// No catalog yet. Carries the message of the last failed generation.
    Landing { error: Option<&'a str> },
    View(ResolvedView<'a>),
}

#[derive(Debug, Default)]
pub struct Session {
    catalog: Option<Catalog>,
    view: ViewState,
    last_error: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
    issued: u64,
    loading: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Message of the most recent failed generation, cleared when a new
    /// refresh starts.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// When the current catalog was applied.
    #[must_use]
    pub const fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    #[must_use]
    pub fn index(&self) -> Option<CatalogIndex<'_>> {
        self.catalog.as_ref().map(CatalogIndex::new)
    }

    #[must_use]
    pub fn find_book(&self, book_id: &str) -> Option<&Book> {
        self.index().and_then(|index| index.find_book(book_id))
    }

    #[must_use]
    pub fn find_author(&self, author_id: &str) -> Option<&Author> {
        self.index().and_then(|index| index.find_author(author_id))
    }

    #[must_use]
    pub fn books_by_author(&self, author_id: &str) -> Vec<&Book> {
        self.index()
            .map(|index| index.books_by_author(author_id))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn comments_for_trailer(&self, trailer_id: &str) -> Vec<&Comment> {
        self.index()
            .map(|index| index.comments_for_trailer(trailer_id))
            .unwrap_or_default()
    }

    pub fn go_home(&mut self) -> &ViewState {
        self.navigate(NavigationAction::Home)
    }

    pub fn go_to_book(&mut self, book_id: impl Into<BookId>) -> &ViewState {
        self.navigate(NavigationAction::SelectBook(book_id.into()))
    }

    pub fn go_to_author(&mut self, author_id: impl Into<AuthorId>) -> &ViewState {
        self.navigate(NavigationAction::SelectAuthor(author_id.into()))
    }

    /// Follows the author link of the book currently shown.
    ///
    /// Returns `None` and leaves the view alone when the current view is not a
    /// book detail or the book is not in the catalog. A dangling `author_id`
    /// still navigates; the profile then resolves to not-found.
    pub fn open_book_author(&mut self) -> Option<&ViewState> {
        let ViewState::BookDetail { book_id } = &self.view else {
            return None;
        };
        let author_id = self.find_book(book_id.as_str())?.author_id.clone();
        Some(self.navigate(NavigationAction::SelectAuthor(author_id)))
    }

    fn navigate(&mut self, action: NavigationAction) -> &ViewState {
        self.view = self.view.apply(action);
        &self.view
    }

    /// Registers a new refresh and returns its ticket.
    ///
    /// Sets the loading flag and clears the previous error. Earlier tickets
    /// that are still outstanding become stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.loading = true;
        self.last_error = None;
        let ticket = RefreshTicket(self.issued);
        debug!(%ticket, "refresh started");
        ticket
    }

    /// Applies the result of the refresh identified by `ticket`.
    ///
    /// Results for anything but the latest ticket are discarded without
    /// touching the session.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Catalog, GenerationError>,
    ) -> RefreshOutcome {
        let latest = RefreshTicket(self.issued);
        if ticket != latest {
            warn!(%ticket, %latest, "discarding result of superseded refresh");
            return RefreshOutcome::Superseded { latest };
        }

        self.loading = false;
        match result {
            Ok(catalog) => {
                info!(
                    %ticket,
                    books = catalog.books.len(),
                    authors = catalog.authors.len(),
                    comments = catalog.comments.len(),
                    "catalog replaced"
                );
                self.catalog = Some(catalog);
                self.loaded_at = Some(Utc::now());
                self.last_error = None;
                self.navigate(NavigationAction::CatalogReplaced);
                RefreshOutcome::Applied
            }
            Err(err) => {
                let mut message = err.message();
                if message.trim().is_empty() {
                    message = DEFAULT_GENERATION_ERROR.to_string();
                }
                warn!(%ticket, error = %message, "generation failed");
                self.last_error = Some(message.clone());
                RefreshOutcome::Failed(message)
            }
        }
    }

    /// Gives up on a refresh whose result will never arrive.
    ///
    /// Clears the loading flag when `ticket` is still the latest one. Returns
    /// `false` and changes nothing for a superseded ticket.
    pub fn abandon_refresh(&mut self, ticket: RefreshTicket) -> bool {
        if ticket.value() != self.issued || !self.loading {
            return false;
        }
        warn!(%ticket, "refresh abandoned before completion");
        self.loading = false;
        true
    }

    /// Runs a full refresh against `gateway`.
    ///
    /// This holds `&mut self` across the gateway call. Use
    /// [`SessionHandle`](crate::services::SessionHandle) when refreshes may
    /// overlap.
    pub async fn refresh(&mut self, gateway: &dyn GenerationGateway) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        let result = gateway.generate().await;
        self.complete_refresh(ticket, result)
    }

    /// Resolves the current state into what should be drawn.
    #[must_use]
    pub fn screen(&self) -> Screen<'_> {
        if self.loading {
            return Screen::Loading;
        }

        match self.index() {
            Some(index) => Screen::View(resolve(&self.view, index)),
            None => Screen::Landing {
                error: self.last_error(),
            },
        }
    }
}
