//! Page and media descriptors.

use crate::error::{ModelError, Result};

/// The kind of media a page holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    /// Images load through normal document flow and have no readiness signal.
    Image,
    /// Videos decode on demand and report readiness asynchronously.
    Video,
}

impl MediaKind {
    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

/// Lazy-load lifecycle of a single page.
///
/// Transitions are monotonic: `NotRequested -> Requested -> Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadState {
    #[default]
    NotRequested,
    Requested,
    Ready,
}

impl LoadState {
    /// True once the page has left `NotRequested`.
    pub fn is_requested(self) -> bool {
        !matches!(self, LoadState::NotRequested)
    }

    pub fn is_ready(self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

/// Static description of one page, read from the host document at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSpec {
    /// `None` for a page without any media element.
    pub media: Option<MediaKind>,
    /// Whether clicking the media opens the fullscreen overlay.
    pub fullscreen: bool,
    /// Whether the media is scaled down to fit its box.
    pub scale_to_fit: bool,
}

impl PageSpec {
    pub const fn image() -> Self {
        Self {
            media: Some(MediaKind::Image),
            fullscreen: true,
            scale_to_fit: true,
        }
    }

    pub const fn video() -> Self {
        Self {
            media: Some(MediaKind::Video),
            fullscreen: true,
            scale_to_fit: true,
        }
    }

    /// A page with no media at all. Loading it is a no-op.
    pub const fn empty() -> Self {
        Self {
            media: None,
            fullscreen: false,
            scale_to_fit: false,
        }
    }

    pub const fn without_fullscreen(mut self) -> Self {
        self.fullscreen = false;
        self
    }

    pub const fn without_scaling(mut self) -> Self {
        self.scale_to_fit = false;
        self
    }

    pub fn is_video(&self) -> bool {
        self.media.is_some_and(MediaKind::is_video)
    }

    /// Check that the flags are consistent with the media kind.
    pub fn validate(&self) -> Result<()> {
        if self.media.is_none() && self.fullscreen {
            return Err(ModelError::InvalidPage(
                "a page without media cannot open fullscreen".to_string(),
            ));
        }
        Ok(())
    }
}
