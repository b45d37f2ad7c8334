//! Test-only, in-memory collaborator implementations used by unit and
//! integration tests.
//!
//! All implementations are single-threaded and use interior mutability so
//! tests can mutate the external world while the model holds `&dyn`
//! borrows.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::{
    BookmarkData, BookmarkStore, BookmarkStoreError, ContentProvider, ContentRequest,
    DownloadManager, MapNodeAttributes, MapNodeStatus, OpeningHoursLocalization, PlaceSource,
    RegionId, ResolvedPlace, Selection,
};

/// In-memory `PlaceSource` backed by a selection → place list.
///
/// Performs a linear scan; intended only for the handful of places a test
/// cares about.
#[derive(Default, Debug)]
pub struct MemoryPlaceSource {
    places: Vec<(Selection, ResolvedPlace)>,
}

impl MemoryPlaceSource {
    /// A source resolving a single selection.
    pub fn with_place(selection: Selection, place: ResolvedPlace) -> Self {
        Self {
            places: vec![(selection, place)],
        }
    }

    /// A source resolving each given selection.
    pub fn with_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = (Selection, ResolvedPlace)>,
    {
        Self {
            places: places.into_iter().collect(),
        }
    }
}

impl PlaceSource for MemoryPlaceSource {
    fn resolve(&self, selection: &Selection) -> Option<ResolvedPlace> {
        self.places
            .iter()
            .find(|(known, _)| known == selection)
            .map(|(_, place)| place.clone())
    }
}

/// Mutable in-memory `BookmarkStore`.
///
/// Can be poisoned to simulate an unusable store handle.
#[derive(Default, Debug)]
pub struct MemoryBookmarkStore {
    entries: RefCell<Vec<(Selection, BookmarkData)>>,
    poisoned: RefCell<Option<String>>,
}

impl MemoryBookmarkStore {
    /// Save `bookmark` for `selection`, replacing any previous entry.
    pub fn insert(&self, selection: Selection, bookmark: BookmarkData) {
        let mut entries = self.entries.borrow_mut();
        entries.retain(|(known, _)| known != &selection);
        entries.push((selection, bookmark));
    }

    /// Remove the bookmark saved for `selection`, if any.
    pub fn remove(&self, selection: &Selection) {
        self.entries
            .borrow_mut()
            .retain(|(known, _)| known != selection);
    }

    /// Make every subsequent query fail with the given reason.
    pub fn poison(&self, reason: impl Into<String>) {
        *self.poisoned.borrow_mut() = Some(reason.into());
    }
}

impl BookmarkStore for MemoryBookmarkStore {
    fn find(&self, selection: &Selection) -> Result<Option<BookmarkData>, BookmarkStoreError> {
        if let Some(reason) = self.poisoned.borrow().clone() {
            return Err(BookmarkStoreError { reason });
        }
        Ok(self
            .entries
            .borrow()
            .iter()
            .find(|(known, _)| known == selection)
            .map(|(_, bookmark)| bookmark.clone()))
    }
}

/// `DownloadManager` serving a fixed region table with settable status.
#[derive(Default, Debug)]
pub struct StaticDownloadManager {
    regions: RefCell<HashMap<RegionId, MapNodeAttributes>>,
}

impl StaticDownloadManager {
    /// Register a region.
    pub fn insert(&self, attributes: MapNodeAttributes) {
        self.regions
            .borrow_mut()
            .insert(attributes.region.clone(), attributes);
    }

    /// Change a registered region's lifecycle state.
    pub fn set_status(&self, region: &RegionId, status: MapNodeStatus) {
        if let Some(attributes) = self.regions.borrow_mut().get_mut(region) {
            attributes.status = status;
        }
    }
}

impl DownloadManager for StaticDownloadManager {
    fn attributes(&self, region: &RegionId) -> Option<MapNodeAttributes> {
        self.regions.borrow().get(region).cloned()
    }

    fn status(&self, region: &RegionId) -> MapNodeStatus {
        self.regions
            .borrow()
            .get(region)
            .map_or(MapNodeStatus::NotDownloaded, |attributes| attributes.status)
    }
}

/// `ContentProvider` that records requests instead of resolving them.
#[derive(Default, Debug)]
pub struct RecordingContentProvider {
    requests: RefCell<Vec<ContentRequest>>,
}

impl RecordingContentProvider {
    /// The requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<ContentRequest> {
        self.requests.borrow().clone()
    }
}

impl ContentProvider for RecordingContentProvider {
    fn request(&self, request: ContentRequest) {
        self.requests.borrow_mut().push(request);
    }
}

/// Localization that tags its input, so tests can observe the capability
/// was applied.
#[derive(Default, Debug, Copy, Clone)]
pub struct PlainHoursLocalization;

impl OpeningHoursLocalization for PlainHoursLocalization {
    fn localize(&self, raw_hours: &str) -> String {
        format!("localized: {raw_hours}")
    }
}
