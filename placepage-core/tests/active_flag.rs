//! Lifecycle of the process-wide "a place page is active" flag.
//!
//! Kept in its own test binary: the flag is process-wide state, and the
//! other integration suites construct pages concurrently.

use geo::Coord;

use placepage_core::test_support::{
    MemoryBookmarkStore, MemoryPlaceSource, PlainHoursLocalization, RecordingContentProvider,
    StaticDownloadManager,
};
use placepage_core::{
    PlaceId, PlacePageData, PlacePageEnv, ResolvedPlace, Selection, has_active_page,
};

#[test]
fn flag_tracks_instance_lifetime() {
    let selection = Selection::feature(PlaceId(1));
    let source = MemoryPlaceSource::with_place(
        selection.clone(),
        ResolvedPlace::bare("Cafe", Coord { x: 13.4, y: 52.5 }),
    );
    let bookmarks = MemoryBookmarkStore::default();
    let downloads = StaticDownloadManager::default();
    let content = RecordingContentProvider::default();
    let env = PlacePageEnv {
        places: &source,
        bookmarks: &bookmarks,
        downloads: &downloads,
        content: &content,
        opening_hours: &PlainHoursLocalization,
    };

    assert!(!has_active_page());
    {
        let _page = PlacePageData::new(selection, &env).expect("selection resolves");
        assert!(has_active_page());
    }
    assert!(!has_active_page());
}
