//! Offline-map download facet and the download-manager seam.
//!
//! The manager owns tile storage and transfer; this module only describes
//! the queries and notification stream the place page consumes.

use crate::RegionId;

/// Download lifecycle state of an offline-map region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapNodeStatus {
    /// The region has never been downloaded.
    NotDownloaded,
    /// The region is waiting in the download queue.
    Queued,
    /// A download attempt is in flight.
    Downloading,
    /// The region is fully present on disk.
    Downloaded,
    /// The last download attempt failed.
    Failed,
}

/// Static attributes of the downloadable region behind a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapNodeAttributes {
    /// Region identifier.
    pub region: RegionId,
    /// Human-readable region name.
    pub name: String,
    /// Total download size, in bytes.
    pub total_size_bytes: u64,
    /// Lifecycle state observed when the attributes were read.
    pub status: MapNodeStatus,
}

/// Progress of one download attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DownloadProgress {
    /// Bytes received so far.
    pub downloaded_bytes: u64,
    /// Total bytes expected for the attempt.
    pub total_bytes: u64,
}

/// One element of the download manager's notification stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DownloadEvent {
    /// The region's lifecycle state changed.
    Status {
        /// Region the transition applies to.
        region: RegionId,
        /// The new state.
        status: MapNodeStatus,
    },
    /// Bytes arrived for an in-flight attempt.
    Progress {
        /// Region being downloaded.
        region: RegionId,
        /// Attempt progress.
        progress: DownloadProgress,
    },
}

/// Queries against the external map-download manager.
///
/// Both methods are pure reads; neither triggers a download.
///
/// # Examples
/// ```
/// use placepage_core::{DownloadManager, MapNodeAttributes, MapNodeStatus, RegionId};
///
/// struct NothingDownloaded;
///
/// impl DownloadManager for NothingDownloaded {
///     fn attributes(&self, _region: &RegionId) -> Option<MapNodeAttributes> {
///         None
///     }
///
///     fn status(&self, _region: &RegionId) -> MapNodeStatus {
///         MapNodeStatus::NotDownloaded
///     }
/// }
///
/// let manager = NothingDownloaded;
/// assert_eq!(
///     manager.status(&RegionId::new("Iceland")),
///     MapNodeStatus::NotDownloaded,
/// );
/// ```
pub trait DownloadManager {
    /// Return the region's attributes, or `None` for an unknown region.
    fn attributes(&self, region: &RegionId) -> Option<MapNodeAttributes>;

    /// Return the region's current lifecycle state.
    ///
    /// Unknown regions report [`MapNodeStatus::NotDownloaded`].
    fn status(&self, region: &RegionId) -> MapNodeStatus;
}
