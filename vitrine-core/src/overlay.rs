//! Fullscreen lightbox.
//!
//! The overlay shows a detached clone of a page's media. Each call to
//! [`FullscreenOverlay::open`] issues a new [`OverlayTicket`]; readiness
//! signals are only honoured for the current ticket, so signals from a
//! replaced clone are dropped.

use std::time::{Duration, Instant};

use vitrine_contracts::{media::MediaElement, surface::OverlaySurface};
use vitrine_model::{Key, OverlayPhase};

use crate::scheduler::{Scheduler, TaskHandle};

/// Identifies the clone mounted by one `open` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayTask {
    Reveal,
}

#[derive(Debug)]
pub struct FullscreenOverlay<M, O> {
    surface: O,
    phase: OverlayPhase,
    visible: bool,
    content: Option<M>,
    generation: u64,
    pending_reveal: Option<TaskHandle>,
    scheduler: Scheduler<OverlayTask>,
    reveal_delay: Duration,
}

impl<M: MediaElement, O: OverlaySurface<M>> FullscreenOverlay<M, O> {
    pub fn new(surface: O, reveal_delay: Duration) -> Self {
        Self {
            surface,
            phase: OverlayPhase::Closed,
            visible: false,
            content: None,
            generation: 0,
            pending_reveal: None,
            scheduler: Scheduler::new(),
            reveal_delay,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&M> {
        self.content.as_ref()
    }

    pub fn surface(&self) -> &O {
        &self.surface
    }

    /// Ticket of the clone currently mounted, if any.
    pub fn current_ticket(&self) -> Option<OverlayTicket> {
        self.content.as_ref().map(|_| OverlayTicket(self.generation))
    }

    /// Mount `clone` and schedule the reveal. Any previous clone is dropped
    /// together with its pending signals.
    pub fn open(&mut self, mut clone: M, with_spinner: bool, now: Instant) -> OverlayTicket {
        if let Some(handle) = self.pending_reveal.take() {
            self.scheduler.cancel(handle);
        }
        self.generation += 1;

        self.surface.set_loaded(false);
        self.surface.mount(&clone, with_spinner);
        if clone.kind().is_video() {
            clone.play();
        }
        self.content = Some(clone);
        self.phase = OverlayPhase::Opening;

        self.pending_reveal =
            Some(self.scheduler.schedule(now, self.reveal_delay, OverlayTask::Reveal));

        log::debug!("overlay opening (ticket {})", self.generation);
        OverlayTicket(self.generation)
    }

    /// The clone identified by `ticket` started playing. Returns true if the
    /// overlay transitioned to `Loaded`.
    pub fn on_playing(&mut self, ticket: OverlayTicket) -> bool {
        if Some(ticket) != self.current_ticket() || self.phase != OverlayPhase::Opening {
            log::trace!("stale overlay playing signal {ticket:?}");
            return false;
        }
        self.mark_loaded();
        true
    }

    /// Hide the overlay. The underlying page is untouched.
    pub fn close(&mut self) {
        if let Some(handle) = self.pending_reveal.take() {
            self.scheduler.cancel(handle);
        }
        if self.phase == OverlayPhase::Closed {
            return;
        }
        self.phase = OverlayPhase::Closed;
        self.visible = false;
        self.surface.set_visible(false);
        log::debug!("overlay closed");
    }

    /// Clicks anywhere on the overlay close it.
    pub fn on_click(&mut self) {
        self.close();
    }

    pub fn on_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.close();
        }
    }

    pub fn advance(&mut self, now: Instant) {
        for (handle, OverlayTask::Reveal) in self.scheduler.take_due(now) {
            if self.pending_reveal != Some(handle) {
                continue;
            }
            self.pending_reveal = None;
            self.visible = true;
            self.surface.set_visible(true);

            // images have no playing signal; revealing them completes the load
            let is_video = self.content.as_ref().is_some_and(|c| c.kind().is_video());
            if !is_video && self.phase == OverlayPhase::Opening {
                self.mark_loaded();
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    fn mark_loaded(&mut self) {
        self.phase = OverlayPhase::Loaded;
        self.surface.set_loaded(true);
        log::debug!("overlay loaded (ticket {})", self.generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::MediaKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Clip {
        kind: MediaKind,
        name: &'static str,
        playing: bool,
    }

    impl MediaElement for Clip {
        fn kind(&self) -> MediaKind {
            self.kind
        }

        fn start_load(&mut self) {}

        fn play(&mut self) {
            self.playing = true;
        }

        fn detached_clone(&self) -> Self {
            self.clone()
        }
    }

    #[derive(Debug, Default)]
    struct Screen {
        mounted: Vec<&'static str>,
        visible: bool,
        loaded: bool,
    }

    impl OverlaySurface<Clip> for Screen {
        fn mount(&mut self, content: &Clip, _with_spinner: bool) {
            self.mounted.push(content.name);
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn set_loaded(&mut self, loaded: bool) {
            self.loaded = loaded;
        }
    }

    fn clip(kind: MediaKind, name: &'static str) -> Clip {
        Clip {
            kind,
            name,
            playing: false,
        }
    }

    fn overlay() -> FullscreenOverlay<Clip, Screen> {
        FullscreenOverlay::new(Screen::default(), Duration::from_millis(10))
    }

    #[test]
    fn video_loads_on_playing_signal() {
        let t0 = Instant::now();
        let mut overlay = overlay();
        let ticket = overlay.open(clip(MediaKind::Video, "a"), true, t0);
        assert_eq!(overlay.phase(), OverlayPhase::Opening);
        assert!(overlay.content().unwrap().playing);

        overlay.advance(t0 + Duration::from_millis(5));
        assert!(!overlay.is_visible());
        overlay.advance(t0 + Duration::from_millis(10));
        assert!(overlay.is_visible());
        assert_eq!(overlay.phase(), OverlayPhase::Opening);

        assert!(overlay.on_playing(ticket));
        assert_eq!(overlay.phase(), OverlayPhase::Loaded);
        assert!(overlay.surface().loaded);
    }

    #[test]
    fn replacing_the_clone_drops_its_signals() {
        let t0 = Instant::now();
        let mut overlay = overlay();
        let first = overlay.open(clip(MediaKind::Video, "a"), true, t0);
        let second = overlay.open(clip(MediaKind::Video, "b"), true, t0);

        assert!(!overlay.on_playing(first));
        assert_eq!(overlay.phase(), OverlayPhase::Opening);
        assert!(overlay.on_playing(second));
        assert_eq!(overlay.surface().mounted, vec!["a", "b"]);
    }

    #[test]
    fn image_is_loaded_once_revealed() {
        let t0 = Instant::now();
        let mut overlay = overlay();
        overlay.open(clip(MediaKind::Image, "still"), false, t0);
        overlay.advance(t0 + Duration::from_millis(10));
        assert_eq!(overlay.phase(), OverlayPhase::Loaded);
    }

    #[test]
    fn escape_closes_and_cancels_pending_reveal() {
        let t0 = Instant::now();
        let mut overlay = overlay();
        overlay.open(clip(MediaKind::Image, "still"), false, t0);
        overlay.on_key(Key::Other);
        assert!(overlay.phase().is_open());

        overlay.on_key(Key::Escape);
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        overlay.advance(t0 + Duration::from_millis(50));
        assert!(!overlay.is_visible());
        assert_eq!(overlay.next_deadline(), None);
    }
}
