//! The place-page aggregate: one consistent read model per selection.
//!
//! [`PlacePageData`] is built once per user selection from the synchronous
//! collaborators in [`PlacePageEnv`], then updated only through its explicit
//! entry points: the bookmark refresh, the event handlers fed from the
//! bookmark and download notification streams, and async content
//! completions. The owner keeps the instance on a single execution context;
//! callbacks fire synchronously on that context and never concurrently with
//! each other.

use std::sync::atomic::{AtomicUsize, Ordering};

use geo::Coord;
use log::{debug, warn};
use url::Url;

use crate::{
    BookmarkData, BookmarkEvent, BookmarkStore, BookmarkStoreError, ButtonsData, ContentKind,
    ContentPayload, ContentProvider, ContentRequest, ContentUpdate, DetailTier, DownloadEvent,
    DownloadManager, DownloadProgress, ElevationProfileData, InfoData, MapNodeAttributes,
    MapNodeStatus, OpeningHoursLocalization, PageToken, PlaceAction, PlaceMetadata, PlaceSource,
    PreviewData, RoadType, Selection, Slot,
};

mod error;

pub use error::PlacePageError;

static ACTIVE_PAGES: AtomicUsize = AtomicUsize::new(0);

/// True while at least one [`PlacePageData`] instance is alive.
///
/// The flag is set on successful construction and cleared when the instance
/// drops, so the application can ask "is any place page active" without
/// holding a reference to the current one.
pub fn has_active_page() -> bool {
    ACTIVE_PAGES.load(Ordering::Relaxed) > 0
}

/// Collaborators required to build a place page.
///
/// All fields are borrowed trait objects and all are required; in
/// particular, opening-hours localization cannot be defaulted, so a model
/// cannot be constructed without it.
pub struct PlacePageEnv<'a> {
    /// Synchronous feature/routing metadata resolver.
    pub places: &'a dyn PlaceSource,
    /// Bookmark subsystem, read side.
    pub bookmarks: &'a dyn BookmarkStore,
    /// Offline-map download manager, read side.
    pub downloads: &'a dyn DownloadManager,
    /// Async wiki/booking content resolver.
    pub content: &'a dyn ContentProvider,
    /// Opening-hours display formatting.
    pub opening_hours: &'a dyn OpeningHoursLocalization,
}

/// Aggregated read model for one selection.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placepage_core::{
///     BookmarkData, BookmarkStore, BookmarkStoreError, ContentProvider, ContentRequest,
///     DetailTier, DownloadManager, MapNodeAttributes, MapNodeStatus,
///     OpeningHoursLocalization, PlaceId, PlacePageData, PlacePageEnv, PlaceSource,
///     RegionId, ResolvedPlace, Selection,
/// };
///
/// struct OnePlace(Selection, ResolvedPlace);
///
/// impl PlaceSource for OnePlace {
///     fn resolve(&self, selection: &Selection) -> Option<ResolvedPlace> {
///         (selection == &self.0).then(|| self.1.clone())
///     }
/// }
///
/// struct NoBookmarks;
///
/// impl BookmarkStore for NoBookmarks {
///     fn find(
///         &self,
///         _selection: &Selection,
///     ) -> Result<Option<BookmarkData>, BookmarkStoreError> {
///         Ok(None)
///     }
/// }
///
/// struct NoRegions;
///
/// impl DownloadManager for NoRegions {
///     fn attributes(&self, _region: &RegionId) -> Option<MapNodeAttributes> {
///         None
///     }
///
///     fn status(&self, _region: &RegionId) -> MapNodeStatus {
///         MapNodeStatus::NotDownloaded
///     }
/// }
///
/// struct DropContent;
///
/// impl ContentProvider for DropContent {
///     fn request(&self, _request: ContentRequest) {}
/// }
///
/// struct RawHours;
///
/// impl OpeningHoursLocalization for RawHours {
///     fn localize(&self, raw_hours: &str) -> String {
///         raw_hours.to_owned()
///     }
/// }
///
/// let selection = Selection::feature(PlaceId(1));
/// let source = OnePlace(
///     selection.clone(),
///     ResolvedPlace::bare("Cafe", Coord { x: 13.4, y: 52.5 }),
/// );
/// let env = PlacePageEnv {
///     places: &source,
///     bookmarks: &NoBookmarks,
///     downloads: &NoRegions,
///     content: &DropContent,
///     opening_hours: &RawHours,
/// };
///
/// let page = PlacePageData::new(selection, &env)?;
/// assert_eq!(page.preview().title, "Cafe");
/// assert_eq!(page.detail_tier(), DetailTier::Preview);
/// assert!(!page.is_map_downloaded(&NoRegions));
/// # Ok::<(), placepage_core::PlacePageError>(())
/// ```
pub struct PlacePageData {
    selection: Selection,
    token: PageToken,
    preview: PreviewData,
    buttons: Option<ButtonsData>,
    info: Option<InfoData>,
    bookmark: Option<BookmarkData>,
    elevation_profile: Option<ElevationProfileData>,
    map_node: Option<MapNodeAttributes>,
    road_type: RoadType,
    wiki_description_html: Option<String>,
    booking_search_url: Option<Url>,
    is_preview_plus: bool,
    location: Coord<f64>,
    last_progress: Option<DownloadProgress>,
    /// Fired after each bookmark-status refresh.
    pub on_bookmark_status_update: Slot,
    /// Fired when the download manager reports a state transition for this
    /// selection's region.
    pub on_map_node_status_update: Slot,
    /// Fired for each surviving progress event of an active download.
    pub on_map_node_progress_update: Slot<DownloadProgress>,
}

impl PlacePageData {
    /// Build the model for `selection`.
    ///
    /// Resolution is synchronous and populates every construction-time
    /// field; wiki and booking content are requested fire-and-forget and
    /// arrive later through [`Self::apply_content_update`].
    ///
    /// # Errors
    /// [`PlacePageError::InvalidSelection`] when the selection resolves to
    /// nothing; [`PlacePageError::Store`] when the bookmark store is
    /// unusable.
    pub fn new(selection: Selection, env: &PlacePageEnv<'_>) -> Result<Self, PlacePageError> {
        let resolved = env
            .places
            .resolve(&selection)
            .ok_or(PlacePageError::InvalidSelection)?;
        let token = PageToken::next();

        let (info, is_preview_plus) = classify(&resolved.metadata, env.opening_hours);
        let preview = PreviewData {
            title: resolved.title,
            subtitle: resolved.subtitle,
            rating: resolved.metadata.rating,
            short_description: resolved.metadata.short_description.clone(),
        };
        let buttons = ButtonsData::from_actions(resolved.actions);
        let bookmark = env.bookmarks.find(&selection)?;
        let map_node = resolved
            .region
            .as_ref()
            .and_then(|region| env.downloads.attributes(region));

        if resolved.metadata.wikipedia.is_some() {
            env.content.request(ContentRequest {
                token,
                selection: selection.clone(),
                kind: ContentKind::WikiDescription,
            });
        }
        if buttons
            .as_ref()
            .is_some_and(|b| b.supports(PlaceAction::Book))
        {
            env.content.request(ContentRequest {
                token,
                selection: selection.clone(),
                kind: ContentKind::BookingSearchUrl,
            });
        }

        ACTIVE_PAGES.fetch_add(1, Ordering::Relaxed);
        Ok(Self {
            selection,
            token,
            preview,
            buttons,
            info,
            bookmark,
            elevation_profile: resolved.elevation,
            map_node,
            road_type: resolved.road_type,
            wiki_description_html: None,
            booking_search_url: None,
            is_preview_plus,
            location: resolved.location,
            last_progress: None,
            on_bookmark_status_update: Slot::default(),
            on_map_node_status_update: Slot::default(),
            on_map_node_progress_update: Slot::default(),
        })
    }

    /// The selection this page was built for.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Identity of this instance, carried by its async content requests.
    pub fn token(&self) -> PageToken {
        self.token
    }

    /// The always-present preview facet.
    pub fn preview(&self) -> &PreviewData {
        &self.preview
    }

    /// Action affordances; `None` when the place supports no action.
    pub fn buttons(&self) -> Option<&ButtonsData> {
        self.buttons.as_ref()
    }

    /// Detailed metadata; `None` below [`DetailTier::FullInfo`].
    pub fn info(&self) -> Option<&InfoData> {
        self.info.as_ref()
    }

    /// Bookmark facet; `None` while the place is not saved.
    pub fn bookmark(&self) -> Option<&BookmarkData> {
        self.bookmark.as_ref()
    }

    /// Elevation profile, for track and route selections.
    pub fn elevation_profile(&self) -> Option<&ElevationProfileData> {
        self.elevation_profile.as_ref()
    }

    /// Downloadable-region attributes, when the selection maps to one.
    pub fn map_node_attributes(&self) -> Option<&MapNodeAttributes> {
        self.map_node.as_ref()
    }

    /// Road classification; [`RoadType::None`] for non-road selections.
    pub fn road_type(&self) -> RoadType {
        self.road_type
    }

    /// Wiki description markup, once resolved; absent when offline or
    /// unavailable.
    pub fn wiki_description_html(&self) -> Option<&str> {
        self.wiki_description_html.as_deref()
    }

    /// Booking search URL, once resolved.
    pub fn booking_search_url(&self) -> Option<&Url> {
        self.booking_search_url.as_ref()
    }

    /// True when the selection is the device's current location.
    pub fn is_my_position(&self) -> bool {
        self.selection.is_my_position
    }

    /// True for the intermediate detail tier; see [`Self::detail_tier`].
    pub fn is_preview_plus(&self) -> bool {
        self.is_preview_plus
    }

    /// True when the selection was added as a routing waypoint.
    pub fn is_route_point(&self) -> bool {
        self.selection.is_route_point
    }

    /// Position of the place; WGS84, `x = longitude`, `y = latitude`.
    pub fn location(&self) -> Coord<f64> {
        self.location
    }

    /// The derived detail tier. Exactly one tier applies at any time.
    pub fn detail_tier(&self) -> DetailTier {
        if self.info.is_some() {
            DetailTier::FullInfo
        } else if self.is_preview_plus {
            DetailTier::PreviewPlus
        } else {
            DetailTier::Preview
        }
    }

    /// Re-query the bookmark store and refresh the bookmark facet.
    ///
    /// Idempotent: with no underlying change the facet is unchanged. Fires
    /// `on_bookmark_status_update` exactly once per successful call,
    /// synchronously.
    ///
    /// # Errors
    /// Propagates [`BookmarkStoreError`] when the store is unusable; a
    /// missing bookmark is not an error and clears the facet.
    pub fn update_bookmark_status(
        &mut self,
        store: &dyn BookmarkStore,
    ) -> Result<(), BookmarkStoreError> {
        self.bookmark = store.find(&self.selection)?;
        self.on_bookmark_status_update.emit(());
        Ok(())
    }

    /// True when the selection's region is fully downloaded.
    ///
    /// Pure query against the download manager; `false` when the selection
    /// has no associated region. Never errors.
    pub fn is_map_downloaded(&self, downloads: &dyn DownloadManager) -> bool {
        self.map_node
            .as_ref()
            .is_some_and(|node| downloads.status(&node.region) == MapNodeStatus::Downloaded)
    }

    /// Feed one element of the bookmark store's change stream.
    ///
    /// Events for other selections are ignored; a matching event triggers
    /// [`Self::update_bookmark_status`].
    ///
    /// # Errors
    /// Propagates [`BookmarkStoreError`] from the refresh.
    pub fn handle_bookmark_event(
        &mut self,
        event: &BookmarkEvent,
        store: &dyn BookmarkStore,
    ) -> Result<(), BookmarkStoreError> {
        if event.selection != self.selection {
            return Ok(());
        }
        self.update_bookmark_status(store)
    }

    /// Feed one element of the download manager's notification stream.
    ///
    /// Events for foreign regions are ignored. Status transitions update
    /// the cached node state and fire `on_map_node_status_update`; a
    /// transition into `Queued` or `Downloading` starts a new attempt and
    /// resets the progress watermark. Progress events are clamped to
    /// `downloaded <= total`; values that regress within one attempt are
    /// dropped. Surviving progress fires `on_map_node_progress_update`.
    pub fn handle_download_event(&mut self, event: &DownloadEvent) {
        match event {
            DownloadEvent::Status { region, status } => {
                let Some(node) = self.map_node.as_mut() else {
                    return;
                };
                if *region != node.region {
                    debug!("ignoring status for foreign region {region}");
                    return;
                }
                node.status = *status;
                if matches!(status, MapNodeStatus::Queued | MapNodeStatus::Downloading) {
                    self.last_progress = None;
                }
                self.on_map_node_status_update.emit(());
            }
            DownloadEvent::Progress { region, progress } => {
                let Some(node) = self.map_node.as_ref() else {
                    return;
                };
                if *region != node.region {
                    debug!("ignoring progress for foreign region {region}");
                    return;
                }
                let clamped = DownloadProgress {
                    downloaded_bytes: progress.downloaded_bytes.min(progress.total_bytes),
                    total_bytes: progress.total_bytes,
                };
                if let Some(last) = self.last_progress {
                    if clamped.downloaded_bytes < last.downloaded_bytes {
                        warn!(
                            "dropping regressive progress for {region}: {} < {}",
                            clamped.downloaded_bytes, last.downloaded_bytes
                        );
                        return;
                    }
                }
                self.last_progress = Some(clamped);
                self.on_map_node_progress_update.emit(clamped);
            }
        }
    }

    /// Apply a completed async content resolution.
    ///
    /// Completions carrying a token other than [`Self::token`] belong to a
    /// discarded selection and are dropped silently.
    pub fn apply_content_update(&mut self, update: ContentUpdate) {
        if update.token != self.token {
            debug!("discarding stale content update");
            return;
        }
        match update.payload {
            ContentPayload::WikiDescription(html) => self.wiki_description_html = Some(html),
            ContentPayload::BookingSearchUrl(url) => self.booking_search_url = Some(url),
        }
    }
}

impl Drop for PlacePageData {
    fn drop(&mut self) {
        ACTIVE_PAGES.fetch_sub(1, Ordering::Relaxed);
    }
}

// Callback slots hold opaque closures; report occupancy instead.
impl std::fmt::Debug for PlacePageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacePageData")
            .field("selection", &self.selection)
            .field("token", &self.token)
            .field("preview", &self.preview)
            .field("detail_tier", &self.detail_tier())
            .field("buttons", &self.buttons)
            .field("bookmark", &self.bookmark)
            .field("map_node", &self.map_node)
            .field("road_type", &self.road_type)
            .field("wiki_description_present", &self.wiki_description_html.is_some())
            .field("booking_search_url", &self.booking_search_url)
            .field("on_bookmark_status_update", &self.on_bookmark_status_update)
            .field("on_map_node_status_update", &self.on_map_node_status_update)
            .field(
                "on_map_node_progress_update",
                &self.on_map_node_progress_update,
            )
            .finish_non_exhaustive()
    }
}

/// Fixed-precedence detail classification.
///
/// Detailed metadata wins and builds [`InfoData`]; otherwise highlight
/// metadata alone yields the preview-plus tier; otherwise plain preview.
fn classify(
    metadata: &PlaceMetadata,
    hours: &dyn OpeningHoursLocalization,
) -> (Option<InfoData>, bool) {
    if metadata.has_details() {
        let info = InfoData {
            address: metadata.address.clone(),
            phone: metadata.phone.clone(),
            website: metadata.website.clone(),
            email: metadata.email.clone(),
            opening_hours: metadata
                .raw_opening_hours
                .as_deref()
                .map(|raw| hours.localize(raw)),
            wikipedia: metadata.wikipedia.clone(),
        };
        (Some(info), false)
    } else if metadata.has_highlights() {
        (None, true)
    } else {
        (None, false)
    }
}
