//! Facade crate for the place-page aggregation engine.
//!
//! Re-exports the core domain types, trait seams, and the per-selection
//! aggregate so applications depend on one crate.

#![forbid(unsafe_code)]

pub use placepage_core::{
    BookmarkChange, BookmarkColor, BookmarkData, BookmarkEvent, BookmarkId, BookmarkStore,
    BookmarkStoreError, ButtonsData, ContentKind, ContentPayload, ContentProvider, ContentRequest,
    ContentUpdate, DetailTier, DownloadEvent, DownloadManager, DownloadProgress, ElevationPoint,
    ElevationProfileData, ElevationProfileError, InfoData, MapNodeAttributes, MapNodeStatus,
    OpeningHoursLocalization, PageToken, PlaceAction, PlaceId, PlaceMetadata, PlacePageData,
    PlacePageEnv, PlacePageError, PlaceSource, PreviewData, RegionId, ResolvedPlace, RoadType,
    Selection, SelectionKind, Slot, has_active_page,
};

#[cfg(feature = "test-support")]
pub use placepage_core::test_support;
