//! Property tests for the progress channel: whatever the manager emits,
//! observers only ever see clamped, monotonically non-decreasing progress.

use std::cell::RefCell;
use std::rc::Rc;

use geo::Coord;
use proptest::prelude::*;

use placepage_core::test_support::{
    MemoryBookmarkStore, MemoryPlaceSource, PlainHoursLocalization, RecordingContentProvider,
    StaticDownloadManager,
};
use placepage_core::{
    DownloadEvent, DownloadProgress, MapNodeAttributes, MapNodeStatus, PlacePageData,
    PlacePageEnv, RegionId, ResolvedPlace, Selection,
};

fn downloading_page(
    region: &RegionId,
    source: &MemoryPlaceSource,
    bookmarks: &MemoryBookmarkStore,
    downloads: &StaticDownloadManager,
    content: &RecordingContentProvider,
) -> PlacePageData {
    downloads.insert(MapNodeAttributes {
        region: region.clone(),
        name: "Iceland".to_owned(),
        total_size_bytes: 1_000,
        status: MapNodeStatus::Downloading,
    });
    let env = PlacePageEnv {
        places: source,
        bookmarks,
        downloads,
        content,
        opening_hours: &PlainHoursLocalization,
    };
    PlacePageData::new(Selection::region(region.clone()), &env)
        .expect("registered region resolves")
}

proptest! {
    #[test]
    fn observed_progress_is_monotonic_and_bounded(
        events in prop::collection::vec((0u64..2_000, 1u64..1_500), 0..64),
    ) {
        let region = RegionId::new("Iceland");
        let source = MemoryPlaceSource::with_place(
            Selection::region(region.clone()),
            ResolvedPlace {
                region: Some(region.clone()),
                ..ResolvedPlace::bare("Iceland", Coord { x: -19.0, y: 64.9 })
            },
        );
        let bookmarks = MemoryBookmarkStore::default();
        let downloads = StaticDownloadManager::default();
        let content = RecordingContentProvider::default();
        let mut page = downloading_page(&region, &source, &bookmarks, &downloads, &content);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        page.on_map_node_progress_update
            .set(move |progress: DownloadProgress| sink.borrow_mut().push(progress));

        for (downloaded_bytes, total_bytes) in events {
            page.handle_download_event(&DownloadEvent::Progress {
                region: region.clone(),
                progress: DownloadProgress {
                    downloaded_bytes,
                    total_bytes,
                },
            });
        }

        let observed = seen.borrow();
        prop_assert!(observed.iter().all(|p| p.downloaded_bytes <= p.total_bytes));
        prop_assert!(
            observed
                .windows(2)
                .all(|pair| pair[0].downloaded_bytes <= pair[1].downloaded_bytes)
        );
    }
}
