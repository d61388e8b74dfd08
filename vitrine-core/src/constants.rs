//! Compiled defaults for every tunable of the engine.
//!
//! Tuning should happen here so all carousels update consistently;
//! [`crate::config::PagerConfig`] overrides individual values at runtime.

/// Relayout constants, in CSS pixels.
pub mod layout {
    /// Screens narrower than this use the narrow page peek.
    pub const NARROW_SCREEN_BREAKPOINT: f32 = 480.0;
    /// Visible sliver of the neighbouring pages on narrow screens.
    pub const NARROW_PAGE_PEEK: f32 = 16.0;
    /// Visible sliver of the neighbouring pages on wide screens.
    pub const WIDE_PAGE_PEEK: f32 = 32.0;
    /// Gap between two pages.
    pub const PAGE_SPACING: f32 = 16.0;
    /// Lower bound for the derived page width so the current-page
    /// derivation never divides by zero on degenerate containers.
    pub const MIN_PAGE_WIDTH: f32 = 1.0;
}

/// Wheel navigation.
pub mod wheel {
    /// Horizontal deltas at or below this magnitude are treated as noise.
    pub const NOISE_THRESHOLD: f32 = 30.0;
    /// Wheel input is ignored for this long after a wheel-triggered jump.
    pub const COOLDOWN_MS: u64 = 100;
}

/// Pan/swipe resolution.
pub mod gesture {
    /// Delay before the panning flag clears after a release. Zero defers the
    /// clear to the next turn of the host event loop, which still covers the
    /// native click that follows a release.
    pub const PANNING_CLEAR_DELAY_MS: u64 = 0;
}

/// Fullscreen overlay.
pub mod overlay {
    /// Gap between mounting the clone and engaging the reveal transition.
    pub const REVEAL_DELAY_MS: u64 = 10;
}

/// Lazy loading.
pub mod prefetch {
    /// Pages on each side of the current page that are requested eagerly.
    pub const RADIUS: usize = 1;
}
