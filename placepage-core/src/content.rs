//! Asynchronous content resolution: wiki descriptions and booking URLs.
//!
//! Requests are fire-and-forget. The provider performs its network work on
//! its own schedule and the owner marshals completions back onto the owning
//! context as [`ContentUpdate`] values, which it feeds to
//! [`PlacePageData::apply_content_update`](crate::PlacePageData::apply_content_update).
//! Completions carry the [`PageToken`] of the instance that asked; a token
//! that no longer matches identifies a stale completion for a discarded
//! selection and is dropped silently.

use std::sync::atomic::{AtomicU64, Ordering};

use url::Url;

use crate::Selection;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identity of one place-page instance, used to key async completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageToken(u64);

impl PageToken {
    /// Allocate a fresh, process-unique token.
    pub(crate) fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// What the model wants resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentKind {
    /// Wiki description markup for the place.
    WikiDescription,
    /// Search URL for the booking integration.
    BookingSearchUrl,
}

/// A fire-and-forget resolution request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentRequest {
    /// Token of the requesting instance.
    pub token: PageToken,
    /// Selection the content is for.
    pub selection: Selection,
    /// Which content to resolve.
    pub kind: ContentKind,
}

/// Payload of a completed resolution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentPayload {
    /// Wiki description markup.
    WikiDescription(String),
    /// Booking search URL.
    BookingSearchUrl(Url),
}

/// A completed resolution, delivered back on the owning context.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentUpdate {
    /// Token copied from the originating [`ContentRequest`].
    pub token: PageToken,
    /// The resolved content.
    pub payload: ContentPayload,
}

/// External provider of wiki descriptions and booking URLs.
///
/// Failures are never reported back; the corresponding model field simply
/// stays absent.
pub trait ContentProvider {
    /// Ask for `request` to be resolved eventually.
    fn request(&self, request: ContentRequest);
}
