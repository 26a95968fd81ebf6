pub mod catalog_index;
pub use catalog_index::CatalogIndex;

pub mod navigation;
pub use navigation::{
    AuthorProfileView, BookDetailView, Dashboard, NavigationAction, NotFound, ResolvedView,
    ViewState, resolve,
};

pub mod session;
pub use session::{RefreshOutcome, RefreshTicket, Screen, Session};

pub mod session_handle;
pub use session_handle::SessionHandle;
