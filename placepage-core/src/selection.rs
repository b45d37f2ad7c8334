//! Selection descriptors: what the user tapped on the map.
//!
//! A [`Selection`] identifies a map entity (raw coordinate, feature,
//! bookmark, or downloadable region) together with the tap-time flags the
//! presentation layer already knows: whether the tap hit the device's own
//! position and whether the entity was added as a routing waypoint.

use geo::Coord;
use std::fmt;

/// Identifier of a map feature (point of interest, road segment, track).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceId(
    /// Raw numeric feature identifier.
    pub u64,
);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a saved bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookmarkId(
    /// Raw numeric bookmark identifier.
    pub u64,
);

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a downloadable offline-map region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(String);

impl RegionId {
    /// Wrap a region identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The map entity a selection points at.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionKind {
    /// A bare point on the map with no underlying feature.
    Coordinate(Coord<f64>),
    /// A map feature such as a POI, road segment, or track.
    Feature(PlaceId),
    /// A saved bookmark.
    Bookmark(BookmarkId),
    /// A downloadable offline-map region.
    Region(RegionId),
}

/// A user selection: the tapped entity plus tap-time flags.
///
/// # Examples
/// ```
/// use placepage_core::{PlaceId, Selection};
///
/// let selection = Selection::feature(PlaceId(7)).as_route_point();
/// assert!(selection.is_route_point);
/// assert!(!selection.is_my_position);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// The tapped entity.
    pub kind: SelectionKind,
    /// True when the tap hit the device's current location.
    pub is_my_position: bool,
    /// True when the entity was added as a routing waypoint.
    pub is_route_point: bool,
}

impl Selection {
    fn with_kind(kind: SelectionKind) -> Self {
        Self {
            kind,
            is_my_position: false,
            is_route_point: false,
        }
    }

    /// Select a bare coordinate.
    pub fn coordinate(location: Coord<f64>) -> Self {
        Self::with_kind(SelectionKind::Coordinate(location))
    }

    /// Select a map feature.
    pub fn feature(id: PlaceId) -> Self {
        Self::with_kind(SelectionKind::Feature(id))
    }

    /// Select a saved bookmark.
    pub fn bookmark(id: BookmarkId) -> Self {
        Self::with_kind(SelectionKind::Bookmark(id))
    }

    /// Select a downloadable region.
    pub fn region(id: RegionId) -> Self {
        Self::with_kind(SelectionKind::Region(id))
    }

    /// Mark the selection as the device's current location, returning `self`
    /// for chaining.
    pub fn at_my_position(mut self) -> Self {
        self.is_my_position = true;
        self
    }

    /// Mark the selection as a routing waypoint, returning `self` for
    /// chaining.
    pub fn as_route_point(mut self) -> Self {
        self.is_route_point = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constructors_clear_flags() {
        let selection = Selection::bookmark(BookmarkId(3));
        assert!(!selection.is_my_position);
        assert!(!selection.is_route_point);
    }

    #[rstest]
    fn chaining_sets_flags() {
        let selection = Selection::coordinate(Coord { x: 1.0, y: 2.0 })
            .at_my_position()
            .as_route_point();
        assert!(selection.is_my_position);
        assert!(selection.is_route_point);
    }

    #[rstest]
    fn region_id_round_trips() {
        let id = RegionId::new("Germany_Berlin");
        assert_eq!(id.as_str(), "Germany_Berlin");
        assert_eq!(id.to_string(), "Germany_Berlin");
    }
}
