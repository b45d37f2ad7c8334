//! Errors surfaced at the place-page construction and update boundary.

use thiserror::Error;

use crate::BookmarkStoreError;

/// Errors returned by [`PlacePageData`](crate::PlacePageData) operations.
///
/// Async resolution failures never appear here: absent content is the error
/// signal, and download failures travel through the status channel as
/// [`MapNodeStatus::Failed`](crate::MapNodeStatus::Failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacePageError {
    /// The selection descriptor resolves to nothing the map core knows.
    #[error("selection does not resolve to a known place")]
    InvalidSelection,
    /// The bookmark store itself is unusable.
    #[error(transparent)]
    Store(#[from] BookmarkStoreError),
}
