//! Detailed place metadata shown in the expanded page.

/// Detailed metadata for a place: contacts, address, opening hours.
///
/// Present only when the selection carries enough detail; see
/// [`DetailTier::FullInfo`](crate::DetailTier::FullInfo). The
/// `opening_hours` field holds the display string produced by the injected
/// opening-hours localization capability, never the raw tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoData {
    /// Postal address.
    pub address: Option<String>,
    /// Phone number in the feature's native formatting.
    pub phone: Option<String>,
    /// Website URL string.
    pub website: Option<String>,
    /// Contact e-mail address.
    pub email: Option<String>,
    /// Localized opening-hours display string.
    pub opening_hours: Option<String>,
    /// Wikipedia article identifier, when the place has one.
    pub wikipedia: Option<String>,
}

impl InfoData {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.phone.is_none()
            && self.website.is_none()
            && self.email.is_none()
            && self.opening_hours.is_none()
            && self.wikipedia.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_info_reports_empty() {
        let info = InfoData {
            address: None,
            phone: None,
            website: None,
            email: None,
            opening_hours: None,
            wikipedia: None,
        };
        assert!(info.is_empty());
    }

    #[test]
    fn single_field_is_not_empty() {
        let info = InfoData {
            address: Some("Bodestraße 1".to_owned()),
            phone: None,
            website: None,
            email: None,
            opening_hours: None,
            wikipedia: None,
        };
        assert!(!info.is_empty());
    }
}
