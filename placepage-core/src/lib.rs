//! Core domain types for the place-page aggregation engine.
//!
//! A place page is the panel a map application shows for the user's current
//! selection: a point of interest, a bare coordinate, a saved bookmark, or a
//! downloadable map region. This crate assembles, from the application's
//! independent subsystems, one consistent read model per selection —
//! [`PlacePageData`] — plus its mutation entry points and callback channels.
//!
//! The subsystems stay behind narrow traits ([`PlaceSource`],
//! [`BookmarkStore`], [`DownloadManager`], [`ContentProvider`],
//! [`OpeningHoursLocalization`]); this crate owns no persistence, network
//! client, or rendering. Constructors validate their input and return
//! `Result` to surface invalid selections early.

#![forbid(unsafe_code)]

mod bookmark;
mod buttons;
mod content;
mod downloader;
mod elevation;
mod hours;
mod info;
mod observer;
mod place_page;
mod preview;
mod road;
mod selection;
mod source;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bookmark::{
    BookmarkChange, BookmarkColor, BookmarkData, BookmarkEvent, BookmarkStore, BookmarkStoreError,
};
pub use buttons::{ButtonsData, PlaceAction};
pub use content::{
    ContentKind, ContentPayload, ContentProvider, ContentRequest, ContentUpdate, PageToken,
};
pub use downloader::{
    DownloadEvent, DownloadManager, DownloadProgress, MapNodeAttributes, MapNodeStatus,
};
pub use elevation::{ElevationPoint, ElevationProfileData, ElevationProfileError};
pub use hours::OpeningHoursLocalization;
pub use info::InfoData;
pub use observer::Slot;
pub use place_page::{PlacePageData, PlacePageEnv, PlacePageError, has_active_page};
pub use preview::{DetailTier, PreviewData};
pub use road::RoadType;
pub use selection::{BookmarkId, PlaceId, RegionId, Selection, SelectionKind};
pub use source::{PlaceMetadata, PlaceSource, ResolvedPlace};
