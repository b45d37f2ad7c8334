//! Elevation profiles for track and route selections.
//!
//! Constructors validate their input so downstream consumers can rely on a
//! non-empty, distance-ordered sample list.

use thiserror::Error;

/// One elevation sample along a track.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevationPoint {
    /// Distance from the track start, in metres.
    pub distance_m: f64,
    /// Altitude above sea level, in metres.
    pub altitude_m: f64,
}

/// Errors returned by [`ElevationProfileData::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElevationProfileError {
    /// No samples were supplied.
    #[error("elevation profile must contain at least one sample")]
    Empty,
    /// Samples were not ordered by distance.
    #[error("elevation samples must have non-decreasing distance")]
    NonMonotonicDistance,
}

/// Elevation profile of a track or route selection.
///
/// # Examples
/// ```
/// use placepage_core::{ElevationPoint, ElevationProfileData};
///
/// let profile = ElevationProfileData::new(vec![
///     ElevationPoint { distance_m: 0.0, altitude_m: 100.0 },
///     ElevationPoint { distance_m: 500.0, altitude_m: 140.0 },
///     ElevationPoint { distance_m: 900.0, altitude_m: 120.0 },
/// ])?;
/// assert_eq!(profile.ascent_m(), 40.0);
/// assert_eq!(profile.descent_m(), 20.0);
/// # Ok::<(), placepage_core::ElevationProfileError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevationProfileData {
    points: Vec<ElevationPoint>,
}

impl ElevationProfileData {
    /// Validate and construct a profile.
    pub fn new(points: Vec<ElevationPoint>) -> Result<Self, ElevationProfileError> {
        if points.is_empty() {
            return Err(ElevationProfileError::Empty);
        }
        let ordered = points
            .windows(2)
            .all(|pair| pair[0].distance_m <= pair[1].distance_m);
        if !ordered {
            return Err(ElevationProfileError::NonMonotonicDistance);
        }
        Ok(Self { points })
    }

    /// The samples, ordered by distance from the start.
    pub fn points(&self) -> &[ElevationPoint] {
        &self.points
    }

    /// Total climb along the track, in metres.
    pub fn ascent_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1].altitude_m - pair[0].altitude_m).max(0.0))
            .sum()
    }

    /// Total descent along the track, in metres.
    pub fn descent_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[0].altitude_m - pair[1].altitude_m).max(0.0))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point(distance_m: f64, altitude_m: f64) -> ElevationPoint {
        ElevationPoint {
            distance_m,
            altitude_m,
        }
    }

    #[rstest]
    fn rejects_empty_samples() {
        let result = ElevationProfileData::new(Vec::new());
        assert_eq!(result, Err(ElevationProfileError::Empty));
    }

    #[rstest]
    fn rejects_unordered_samples() {
        let result = ElevationProfileData::new(vec![point(10.0, 0.0), point(5.0, 0.0)]);
        assert_eq!(result, Err(ElevationProfileError::NonMonotonicDistance));
    }

    #[rstest]
    fn single_sample_has_flat_profile() {
        let profile =
            ElevationProfileData::new(vec![point(0.0, 50.0)]).expect("one sample is valid");
        assert_eq!(profile.ascent_m(), 0.0);
        assert_eq!(profile.descent_m(), 0.0);
    }

    #[rstest]
    fn ascent_and_descent_split_deltas() {
        let profile = ElevationProfileData::new(vec![
            point(0.0, 100.0),
            point(100.0, 150.0),
            point(200.0, 130.0),
            point(300.0, 160.0),
        ])
        .expect("ordered samples");
        assert_eq!(profile.ascent_m(), 80.0);
        assert_eq!(profile.descent_m(), 20.0);
    }
}
