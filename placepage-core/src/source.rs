//! Routing/feature metadata seam: resolving a selection into place data.
//!
//! The `PlaceSource` trait fronts the map core's feature, routing, and
//! elevation lookups. Resolution is synchronous and happens once, at model
//! construction; everything network-bound goes through
//! [`ContentProvider`](crate::ContentProvider) instead.

use geo::Coord;

use crate::{ElevationProfileData, PlaceAction, RegionId, RoadType, Selection};

/// Raw metadata of a resolved place, before tier classification.
///
/// All fields are optional; which ones are present decides the page's
/// [`DetailTier`](crate::DetailTier).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceMetadata {
    /// Postal address.
    pub address: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Website URL string.
    pub website: Option<String>,
    /// Contact e-mail address.
    pub email: Option<String>,
    /// Raw `opening_hours` tag value, not yet localized.
    pub raw_opening_hours: Option<String>,
    /// Wikipedia article identifier.
    pub wikipedia: Option<String>,
    /// Aggregate rating.
    pub rating: Option<f32>,
    /// One-paragraph description.
    pub short_description: Option<String>,
}

impl PlaceMetadata {
    /// True when detailed metadata exists: any contact, address, or hours
    /// field carries a value.
    pub fn has_details(&self) -> bool {
        self.address.is_some()
            || self.phone.is_some()
            || self.website.is_some()
            || self.email.is_some()
            || self.raw_opening_hours.is_some()
    }

    /// True when a reduced but non-trivial set of metadata exists.
    pub fn has_highlights(&self) -> bool {
        self.rating.is_some() || self.short_description.is_some()
    }
}

/// Everything the map core knows synchronously about a selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedPlace {
    /// Position of the place; WGS84, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Display name.
    pub title: String,
    /// Secondary line, e.g. the feature category.
    pub subtitle: Option<String>,
    /// Raw metadata used for tier classification.
    pub metadata: PlaceMetadata,
    /// Actions the place supports, in presentation order.
    pub actions: Vec<PlaceAction>,
    /// Road classification; `None` for anything that is not a road.
    pub road_type: RoadType,
    /// Elevation profile, for track and route selections.
    pub elevation: Option<ElevationProfileData>,
    /// Downloadable region containing the place, when known.
    pub region: Option<RegionId>,
}

impl ResolvedPlace {
    /// A place with a title and location and nothing else.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use placepage_core::ResolvedPlace;
    ///
    /// let place = ResolvedPlace::bare("Unnamed point", Coord { x: 13.4, y: 52.5 });
    /// assert!(place.actions.is_empty());
    /// ```
    pub fn bare(title: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            location,
            title: title.into(),
            subtitle: None,
            metadata: PlaceMetadata::default(),
            actions: Vec::new(),
            road_type: RoadType::None,
            elevation: None,
            region: None,
        }
    }
}

/// Synchronous resolver from selection descriptors to place data.
///
/// Returning `None` means the descriptor points at nothing the map core
/// knows — a stale feature reference, an unknown bookmark id — and model
/// construction fails with
/// [`PlacePageError::InvalidSelection`](crate::PlacePageError::InvalidSelection).
pub trait PlaceSource {
    /// Resolve `selection`, or `None` when it refers to nothing.
    fn resolve(&self, selection: &Selection) -> Option<ResolvedPlace>;
}
