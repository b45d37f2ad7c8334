//! Opening-hours localization seam.
//!
//! Formatting raw `opening_hours` tag values into display text is owned by
//! the application's localization layer. The place page only consumes the
//! capability, and requires it at construction:
//! [`PlacePageEnv`](crate::PlacePageEnv) has no default for this field, so a
//! model cannot be built without it.

/// Turn a raw opening-hours tag value into a localized display string.
pub trait OpeningHoursLocalization {
    /// Localize `raw_hours` for display.
    fn localize(&self, raw_hours: &str) -> String;
}
