//! Paged media carousel engine.
//!
//! `vitrine-core` holds the state of every carousel on a showcase page and
//! decides what happens in response to host input:
//!
//! * [`carousel::scroll`] owns each carousel's scroll offset and derives the
//!   current page from it.
//! * [`carousel::gesture`] arbitrates pan, swipe, wheel and click input.
//! * [`lazy_load`] defers media decode until a section has been seen and a
//!   page is near the current one.
//! * [`overlay`] runs the fullscreen lightbox lifecycle.
//! * [`showcase`] composes all of the above and routes host events.
//!
//! The engine is single-threaded and never blocks. Deferred work is kept in
//! a [`scheduler::Scheduler`]; the host arms one timer for
//! [`showcase::Showcase::next_deadline`] and calls
//! [`showcase::Showcase::advance`] when it fires, and after each dispatched
//! event.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod lazy_load;
pub mod media_fit;
pub mod overlay;
pub mod scheduler;
pub mod showcase;

pub use carousel::{Carousel, Edge};
pub use config::{ConfigError, PagerConfig};
pub use error::ShowcaseError;
pub use layout::PagerLayout;
pub use overlay::{FullscreenOverlay, OverlayTicket};
pub use showcase::{Showcase, ShowcaseBuilder};
