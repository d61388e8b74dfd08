//! Presentation hooks for pagers and the overlay.
//!
//! Every method is a fire-and-forget cosmetic update; none of them can fail
//! and none of them feed state back into the engine.

/// Visual surface of one carousel.
pub trait PagerSurface {
    /// Translate the page strip to `-offset_x`. `animated` toggles the
    /// scroll transition.
    fn apply_offset(&mut self, offset_x: f32, animated: bool);

    /// Create the interactive chrome (edge click zones and one dot per
    /// page). Only called for carousels with more than one page.
    fn install_controls(&mut self, page_count: usize);

    /// Set the active highlight of one page dot.
    fn set_dot_active(&mut self, index: usize, active: bool);

    /// Toggle the panning presentation state (disables hover effects and
    /// marks clicks as drag releases).
    fn set_panning(&mut self, panning: bool);

    /// Remove the loading spinner of a page and mark its media loaded.
    fn reveal_page(&mut self, index: usize);

    /// Apply relayout metrics: width of the edge click zones.
    fn set_edge_width(&mut self, _width: f32) {}
}

/// Visual surface of the fullscreen overlay.
pub trait OverlaySurface<M> {
    /// Replace the overlay content with `content`, optionally accompanied by
    /// a copy of the page's loading spinner.
    fn mount(&mut self, content: &M, with_spinner: bool);

    /// Toggle the `visible` state which drives the reveal transition.
    fn set_visible(&mut self, visible: bool);

    /// Toggle the `loaded` state which hides the spinner.
    fn set_loaded(&mut self, loaded: bool);
}
