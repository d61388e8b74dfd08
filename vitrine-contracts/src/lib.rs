//! Trait surfaces the host implements so the engine can drive it.
//!
//! The engine never touches a document tree directly. Media elements and
//! the visual surfaces of pagers and the fullscreen overlay are reached only
//! through these traits, which keeps the carousel state machine testable
//! with plain in-memory fakes.

pub mod media;
pub mod surface;

/// Frequently used trait imports for host bindings.
pub mod prelude {
    pub use super::media::MediaElement;
    pub use super::surface::{OverlaySurface, PagerSurface};
}
