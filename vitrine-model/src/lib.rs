//! Core data model definitions shared across Vitrine crates.
#![allow(missing_docs)]

pub mod error;
pub mod geometry;
pub mod ids;
pub mod input;
pub mod media;
pub mod overlay;

pub use error::{ModelError, Result as ModelResult};
pub use geometry::{Rect, ViewportSize};
pub use ids::SectionId;
pub use input::{GestureEvent, GestureKind, Key, SwipeDirection, WheelDelta};
pub use media::{LoadState, MediaKind, PageSpec};
pub use overlay::OverlayPhase;
