//! Road-type classification of routable segments.
//!
//! # Examples
//! ```
//! use placepage_core::RoadType;
//!
//! assert_eq!(RoadType::Toll.as_str(), "toll");
//! assert_eq!(RoadType::default(), RoadType::None);
//! ```

/// Classification of a routable road segment.
///
/// `None` is the default and the only valid value for selections that are
/// not roads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadType {
    /// Toll road.
    Toll,
    /// Ferry crossing.
    Ferry,
    /// Unpaved or dirt road.
    Dirty,
    /// Not a road, or an ordinary road with no special classification.
    #[default]
    None,
}

impl RoadType {
    /// Return the road type as a lowercase `&str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toll => "toll",
            Self::Ferry => "ferry",
            Self::Dirty => "dirty",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for RoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoadType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toll" => Ok(Self::Toll),
            "ferry" => Ok(Self::Ferry),
            "dirty" => Ok(Self::Dirty),
            "none" => Ok(Self::None),
            _ => Err(format!("unknown road type '{s}'")),
        }
    }
}
