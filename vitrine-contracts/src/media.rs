use vitrine_model::MediaKind;

/// A media element owned by one page (or a clone owned by the overlay).
///
/// Readiness is asynchronous: the host observes the element's own events
/// and reports them back to the engine (`can-play` for pages, `playing`
/// for overlay clones). The element never blocks.
pub trait MediaElement {
    /// The kind of media this element renders.
    fn kind(&self) -> MediaKind;

    /// Begin decoding. Called at most once per page by the load gate.
    fn start_load(&mut self);

    /// Whether the element already reports itself as decoded.
    ///
    /// A page whose video is already loaded is revealed directly instead of
    /// being asked to decode again.
    fn is_loaded(&self) -> bool {
        false
    }

    /// Start or resume playback. Images ignore it.
    fn play(&mut self) {
        log::trace!("play ignored for {:?} element", self.kind());
    }

    /// Pause playback. Images ignore it.
    fn pause(&mut self) {
        log::trace!("pause ignored for {:?} element", self.kind());
    }

    /// Reset the playback position to zero. Images ignore it.
    fn rewind(&mut self) {
        log::trace!("rewind ignored for {:?} element", self.kind());
    }

    /// Produce an independent copy with no event bindings, used to populate
    /// the fullscreen overlay.
    fn detached_clone(&self) -> Self
    where
        Self: Sized;
}
