//! Showcase: every carousel on the page, the sticky visibility tracker and
//! the single fullscreen overlay.
//!
//! The host forwards its events here addressed by [`SectionId`]. Events for
//! unknown sections or pages are dropped with a warning; the fallible
//! accessors ([`Showcase::carousel`]) are for host code that needs to know.

use std::{collections::HashMap, time::Instant};

use vitrine_contracts::{
    media::MediaElement,
    surface::{OverlaySurface, PagerSurface},
};
use vitrine_model::{
    GestureEvent, Key, PageSpec, Rect, SectionId, ViewportSize, WheelDelta,
};

use crate::{
    carousel::{Carousel, Edge},
    config::PagerConfig,
    error::{Result, ShowcaseError},
    layout::PagerLayout,
    lazy_load::SectionVisibility,
    overlay::{FullscreenOverlay, OverlayTicket},
};

/// Pages of one section as read from the host document.
pub type SectionPages<M> = Vec<(PageSpec, Option<M>)>;

/// Collects sections before the showcase is assembled.
#[derive(Debug)]
pub struct ShowcaseBuilder<M, S> {
    config: PagerConfig,
    screen_width: f32,
    pager_width: f32,
    sections: Vec<(SectionId, SectionPages<M>, S)>,
}

impl<M: MediaElement, S: PagerSurface> ShowcaseBuilder<M, S> {
    pub fn new(config: PagerConfig) -> Self {
        Self {
            config,
            screen_width: 0.0,
            pager_width: 0.0,
            sections: Vec::new(),
        }
    }

    /// Initial screen and pager container widths.
    pub fn viewport(mut self, screen_width: f32, pager_width: f32) -> Self {
        self.screen_width = screen_width;
        self.pager_width = pager_width;
        self
    }

    pub fn section(mut self, id: SectionId, pages: SectionPages<M>, surface: S) -> Self {
        self.sections.push((id, pages, surface));
        self
    }

    pub fn build<O: OverlaySurface<M>>(
        self,
        overlay_surface: O,
    ) -> Result<Showcase<M, S, O>> {
        self.config.validate()?;
        let layout =
            PagerLayout::compute(self.screen_width, self.pager_width, &self.config);

        let mut index = HashMap::with_capacity(self.sections.len());
        let mut carousels = Vec::with_capacity(self.sections.len());
        for (id, pages, surface) in self.sections {
            if index.insert(id, carousels.len()).is_some() {
                return Err(ShowcaseError::DuplicateSection(id));
            }
            carousels.push(Carousel::new(id, pages, &layout, &self.config, surface)?);
        }

        let overlay =
            FullscreenOverlay::new(overlay_surface, self.config.overlay_reveal_delay());

        Ok(Showcase {
            config: self.config,
            layout,
            index,
            carousels,
            visibility: SectionVisibility::new(),
            overlay,
        })
    }
}

#[derive(Debug)]
pub struct Showcase<M, S, O> {
    config: PagerConfig,
    layout: PagerLayout,
    index: HashMap<SectionId, usize>,
    carousels: Vec<Carousel<M, S>>,
    visibility: SectionVisibility,
    overlay: FullscreenOverlay<M, O>,
}

impl<M, S, O> Showcase<M, S, O>
where
    M: MediaElement,
    S: PagerSurface,
    O: OverlaySurface<M>,
{
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn layout(&self) -> &PagerLayout {
        &self.layout
    }

    pub fn overlay(&self) -> &FullscreenOverlay<M, O> {
        &self.overlay
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.carousels.iter().map(Carousel::section)
    }

    pub fn carousel(&self, id: SectionId) -> Result<&Carousel<M, S>> {
        self.index
            .get(&id)
            .map(|&i| &self.carousels[i])
            .ok_or(ShowcaseError::UnknownSection(id))
    }

    pub fn carousel_mut(&mut self, id: SectionId) -> Result<&mut Carousel<M, S>> {
        match self.index.get(&id) {
            Some(&i) => Ok(&mut self.carousels[i]),
            None => Err(ShowcaseError::UnknownSection(id)),
        }
    }

    pub fn was_visible(&self, id: SectionId) -> bool {
        self.visibility.was_visible(id)
    }

    /// Check every never-visible section against the viewport; the first
    /// page of each section that just became visible is requested. Returns
    /// the sections that became visible during this call.
    pub fn poll_visibility<F>(&mut self, viewport: ViewportSize, mut bounds_of: F) -> Vec<SectionId>
    where
        F: FnMut(SectionId) -> Option<Rect>,
    {
        let mut newly_visible = Vec::new();
        for carousel in &mut self.carousels {
            let id = carousel.section();
            if self.visibility.was_visible(id) {
                continue;
            }
            let Some(bounds) = bounds_of(id) else {
                continue;
            };
            if self.visibility.observe(id, bounds, viewport) {
                carousel.request_page(0);
                newly_visible.push(id);
            }
        }
        newly_visible
    }

    /// Recompute the shared layout after a resize and apply it everywhere.
    pub fn relayout(&mut self, screen_width: f32, pager_width: f32) {
        self.layout = PagerLayout::compute(screen_width, pager_width, &self.config);
        log::debug!(
            "relayout: page width {:.1}, peek {:.1}",
            self.layout.page_width,
            self.layout.page_peek
        );
        let layout = self.layout;
        for carousel in &mut self.carousels {
            carousel.relayout(&layout);
        }
    }

    pub fn on_gesture(&mut self, id: SectionId, event: GestureEvent, now: Instant) {
        if let Some(carousel) = self.route(id) {
            carousel.on_gesture(event, now);
        }
    }

    /// Returns true when the host should prevent the native scroll.
    pub fn on_wheel(&mut self, id: SectionId, delta: WheelDelta, now: Instant) -> bool {
        self.route(id)
            .is_some_and(|carousel| carousel.on_wheel(delta, now))
    }

    /// Returns true if the click must be swallowed (it ends a drag).
    pub fn on_click(&mut self, id: SectionId) -> bool {
        self.route(id)
            .is_some_and(|carousel| carousel.intercept_click())
    }

    pub fn on_dot_click(&mut self, id: SectionId, page: usize) {
        if let Some(carousel) = self.route(id) {
            carousel.jump_to_page(page);
        }
    }

    pub fn on_edge_click(&mut self, id: SectionId, edge: Edge) {
        if let Some(carousel) = self.route(id) {
            carousel.step(edge);
        }
    }

    /// The video of a page reported `can-play`.
    pub fn on_media_ready(&mut self, id: SectionId, page: usize) {
        if let Some(carousel) = self.route(id) {
            carousel.on_media_ready(page);
        }
    }

    pub fn on_pointer_enter(&mut self, id: SectionId, page: usize) {
        if let Some(carousel) = self.route(id) {
            carousel.pointer_enter(page);
        }
    }

    pub fn on_pointer_leave(&mut self, id: SectionId, page: usize) {
        if let Some(carousel) = self.route(id) {
            carousel.pointer_leave(page);
        }
    }

    /// Click on a page's media: rewinds videos and opens the overlay unless
    /// the page opted out. A click that is the tail of a drag does neither.
    /// Returns the overlay ticket when it opened.
    pub fn on_media_click(
        &mut self,
        id: SectionId,
        page: usize,
        now: Instant,
    ) -> Option<OverlayTicket> {
        let carousel = self.route(id)?;
        if carousel.is_panning() {
            return None;
        }
        carousel.media_click(page);

        let page = carousel.page(page)?;
        if !page.spec().fullscreen {
            return None;
        }
        let clone = page.media()?.detached_clone();
        let with_spinner = page.spinner_visible();
        Some(self.overlay.open(clone, with_spinner, now))
    }

    /// The overlay clone identified by `ticket` started playing.
    pub fn on_overlay_playing(&mut self, ticket: OverlayTicket) {
        self.overlay.on_playing(ticket);
    }

    pub fn on_overlay_click(&mut self) {
        self.overlay.on_click();
    }

    pub fn on_key(&mut self, key: Key) {
        self.overlay.on_key(key);
    }

    /// Run every deferred task due at `now`.
    pub fn advance(&mut self, now: Instant) {
        for carousel in &mut self.carousels {
            carousel.advance(now);
        }
        self.overlay.advance(now);
    }

    /// Earliest instant at which [`Self::advance`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.carousels
            .iter()
            .filter_map(Carousel::next_deadline)
            .chain(self.overlay.next_deadline())
            .min()
    }

    fn route(&mut self, id: SectionId) -> Option<&mut Carousel<M, S>> {
        match self.carousel_mut(id) {
            Ok(carousel) => Some(carousel),
            Err(err) => {
                log::warn!("dropping event: {err}");
                None
            }
        }
    }
}
