//! Shared, async-friendly access to a [`Session`].
//!
//! The handle lets several tasks trigger refreshes and navigation against one
//! session. The lock is never held across the gateway call, so a second
//! refresh can be issued while the first is still in flight; ticket
//! sequencing in [`Session`] decides which result is kept.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, broadcast};
use tracing::debug;

use crate::clients::GenerationGateway;
use crate::domain::events::SessionEvent;
use crate::domain::{AuthorId, BookId};
use crate::services::navigation::ViewState;
use crate::services::session::{RefreshOutcome, RefreshTicket, Session};

/// Clears the loading flag if a refresh future is dropped mid-flight.
struct PendingRefresh {
    session: Arc<RwLock<Session>>,
    ticket: Option<RefreshTicket>,
}

impl PendingRefresh {
    fn disarm(&mut self) {
        self.ticket = None;
    }
}

impl Drop for PendingRefresh {
    fn drop(&mut self) {
        let Some(ticket) = self.ticket.take() else {
            return;
        };

        if let Ok(mut session) = self.session.try_write() {
            session.abandon_refresh(ticket);
        } else if let Ok(runtime) = tokio::runtime::Handle::try_current() {
            let session = Arc::clone(&self.session);
            runtime.spawn(async move {
                session.write().await.abandon_refresh(ticket);
            });
        }
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    session: Arc<RwLock<Session>>,
    gateway: Arc<dyn GenerationGateway>,
    event_bus: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    #[must_use]
    pub fn new(gateway: Arc<dyn GenerationGateway>, event_buffer: usize) -> Self {
        let (event_bus, _) = broadcast::channel(event_buffer.max(1));
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            gateway,
            event_bus,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe()
    }

    /// Read access for rendering and queries.
    pub async fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().await
    }

    pub async fn view(&self) -> ViewState {
        self.session.read().await.view().clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.session.read().await.is_loading()
    }

    /// Generates a new catalog and applies it if no newer refresh was issued
    /// in the meantime.
    ///
    /// Dropping the returned future before it completes abandons the refresh
    /// and clears the loading flag.
    pub async fn refresh(&self) -> RefreshOutcome {
        let ticket = self.session.write().await.begin_refresh();
        let mut pending = PendingRefresh {
            session: Arc::clone(&self.session),
            ticket: Some(ticket),
        };
        self.emit(SessionEvent::RefreshStarted {
            ticket: ticket.value(),
        });

        let result = self.gateway.generate().await;

        let (outcome, event) = {
            let mut session = self.session.write().await;
            let outcome = session.complete_refresh(ticket, result);
            pending.disarm();
            let event = match &outcome {
                RefreshOutcome::Applied => {
                    let (books, authors, comments) = session.catalog().map_or((0, 0, 0), |c| {
                        (c.books.len(), c.authors.len(), c.comments.len())
                    });
                    SessionEvent::CatalogReplaced {
                        ticket: ticket.value(),
                        books,
                        authors,
                        comments,
                        loaded_at: session.loaded_at().unwrap_or_default(),
                    }
                }
                RefreshOutcome::Failed(message) => SessionEvent::GenerationFailed {
                    ticket: ticket.value(),
                    message: message.clone(),
                },
                RefreshOutcome::Superseded { latest } => SessionEvent::RefreshSuperseded {
                    ticket: ticket.value(),
                    latest: latest.value(),
                },
            };
            (outcome, event)
        };

        self.emit(event);
        outcome
    }

    pub async fn go_home(&self) -> ViewState {
        let view = self.session.write().await.go_home().clone();
        self.view_changed(view)
    }

    pub async fn go_to_book(&self, book_id: impl Into<BookId>) -> ViewState {
        let view = self.session.write().await.go_to_book(book_id).clone();
        self.view_changed(view)
    }

    pub async fn go_to_author(&self, author_id: impl Into<AuthorId>) -> ViewState {
        let view = self.session.write().await.go_to_author(author_id).clone();
        self.view_changed(view)
    }

    /// See [`Session::open_book_author`].
    pub async fn open_book_author(&self) -> Option<ViewState> {
        let view = self.session.write().await.open_book_author().cloned()?;
        Some(self.view_changed(view))
    }

    fn view_changed(&self, view: ViewState) -> ViewState {
        self.emit(SessionEvent::ViewChanged { view: view.clone() });
        view
    }

    fn emit(&self, event: SessionEvent) {
        debug!(?event, "session event");
        let _ = self.event_bus.send(event);
    }
}
