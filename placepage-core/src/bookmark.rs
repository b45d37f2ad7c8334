//! Bookmark facet and the bookmark-store seam.
//!
//! The `BookmarkStore` trait is the read side of the application's bookmark
//! subsystem. The store also publishes a change stream; its element type is
//! [`BookmarkEvent`], which the owner forwards to the model via
//! [`PlacePageData::handle_bookmark_event`](crate::PlacePageData::handle_bookmark_event).

use thiserror::Error;

use crate::{BookmarkId, Selection};

/// Display color of a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BookmarkColor {
    /// Red pin.
    Red,
    /// Orange pin.
    Orange,
    /// Yellow pin.
    Yellow,
    /// Green pin.
    Green,
    /// Teal pin.
    Teal,
    /// Blue pin.
    Blue,
    /// Purple pin.
    Purple,
    /// Brown pin.
    Brown,
}

impl BookmarkColor {
    /// Return the color as a lowercase `&str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Brown => "brown",
        }
    }
}

impl std::fmt::Display for BookmarkColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookmarkColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "orange" => Ok(Self::Orange),
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "teal" => Ok(Self::Teal),
            "blue" => Ok(Self::Blue),
            "purple" => Ok(Self::Purple),
            "brown" => Ok(Self::Brown),
            _ => Err(format!("unknown bookmark color '{s}'")),
        }
    }
}

/// The bookmark facet of a place page; present iff the selection is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookmarkData {
    /// Identifier of the saved bookmark.
    pub id: BookmarkId,
    /// Name of the list the bookmark belongs to.
    pub list_name: String,
    /// Pin color.
    pub color: BookmarkColor,
    /// Free-form user notes.
    pub notes: Option<String>,
}

/// The bookmark store is unusable, e.g. an invalid store handle.
///
/// Data-not-found is never an error; stores report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bookmark store unavailable: {reason}")]
pub struct BookmarkStoreError {
    /// Human-readable description of the fault.
    pub reason: String,
}

/// Read access to the application's bookmark subsystem.
///
/// # Examples
/// ```
/// use placepage_core::{
///     BookmarkData, BookmarkStore, BookmarkStoreError, PlaceId, Selection,
/// };
///
/// struct EmptyStore;
///
/// impl BookmarkStore for EmptyStore {
///     fn find(
///         &self,
///         _selection: &Selection,
///     ) -> Result<Option<BookmarkData>, BookmarkStoreError> {
///         Ok(None)
///     }
/// }
///
/// let found = EmptyStore.find(&Selection::feature(PlaceId(1)))?;
/// assert!(found.is_none());
/// # Ok::<(), BookmarkStoreError>(())
/// ```
pub trait BookmarkStore {
    /// Return the bookmark saved for `selection`, if any.
    ///
    /// Implementations must reserve `Err` for store-unusable conditions;
    /// an unknown selection is `Ok(None)`.
    fn find(&self, selection: &Selection) -> Result<Option<BookmarkData>, BookmarkStoreError>;
}

/// Kind of change reported by the bookmark store's change stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BookmarkChange {
    /// A bookmark was created for the selection.
    Added,
    /// An existing bookmark was edited.
    Edited,
    /// The bookmark was removed.
    Removed,
}

/// One element of the bookmark store's change-notification stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookmarkEvent {
    /// The selection whose bookmark changed.
    pub selection: Selection,
    /// What happened to it.
    pub change: BookmarkChange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn color_display_matches_as_str() {
        assert_eq!(
            BookmarkColor::Teal.to_string(),
            BookmarkColor::Teal.as_str()
        );
    }

    #[test]
    fn color_parsing_rejects_unknown() {
        let err = BookmarkColor::from_str("magenta").unwrap_err();
        assert!(err.contains("unknown bookmark color"));
    }

    #[test]
    fn store_error_mentions_reason() {
        let err = BookmarkStoreError {
            reason: "handle closed".to_owned(),
        };
        assert!(err.to_string().contains("handle closed"));
    }
}
