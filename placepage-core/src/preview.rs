//! Preview data: the minimal facet every place page carries.

/// How much detail the page can show for a selection.
///
/// Derived at construction with fixed precedence; exactly one tier applies
/// to any model instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetailTier {
    /// Detailed metadata is available and `InfoData` was built.
    FullInfo,
    /// A reduced but non-trivial set of metadata exists; no `InfoData`.
    PreviewPlus,
    /// Title and position only.
    Preview,
}

/// Always-present summary of the selected place.
///
/// # Examples
/// ```
/// use placepage_core::PreviewData;
///
/// let preview = PreviewData {
///     title: "Museum Island".to_owned(),
///     subtitle: Some("Tourism".to_owned()),
///     rating: None,
///     short_description: None,
/// };
/// assert_eq!(preview.title, "Museum Island");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewData {
    /// Display name of the place.
    pub title: String,
    /// Secondary line, e.g. the feature category.
    pub subtitle: Option<String>,
    /// Aggregate rating, when the place has one.
    pub rating: Option<f32>,
    /// One-paragraph description, when available.
    pub short_description: Option<String>,
}
