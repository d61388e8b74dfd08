//! Carousel: one horizontally paged strip of media.
//!
//! A [`Carousel`] composes the three per-instance components and is the only
//! place their results meet the host surface:
//!
//! * [`scroll::ScrollPositionModel`] owns the offset and current page.
//! * [`gesture::GestureArbiter`] turns input into scroll requests.
//! * [`crate::lazy_load::LazyLoadGate`] owns page load state.
//!
//! Every position change, whatever its source, goes through
//! [`Carousel::set_position`], which is where dots are refreshed and the
//! prefetch policy runs.

pub mod gesture;
pub mod scroll;

use std::time::Instant;

use vitrine_contracts::{media::MediaElement, surface::PagerSurface};
use vitrine_model::{GestureEvent, LoadState, PageSpec, SectionId, WheelDelta};

use crate::{
    config::PagerConfig,
    error::{Result, ShowcaseError},
    layout::PagerLayout,
    lazy_load::{LazyLoadGate, LoadOutcome, Page},
    scheduler::Scheduler,
};
use gesture::{GestureArbiter, PagerTask, ScrollRequest};
use scroll::{PositionUpdate, ScrollPositionModel};

/// Direction of an edge click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Previous,
    Next,
}

impl Edge {
    fn step(self) -> isize {
        match self {
            Edge::Previous => -1,
            Edge::Next => 1,
        }
    }
}

/// State of one carousel and the surface it drives.
#[derive(Debug)]
pub struct Carousel<M, S> {
    section: SectionId,
    surface: S,
    model: ScrollPositionModel,
    arbiter: GestureArbiter,
    gate: LazyLoadGate<M>,
    scheduler: Scheduler<PagerTask>,
}

impl<M: MediaElement, S: PagerSurface> Carousel<M, S> {
    /// Build a carousel from its page descriptions and media elements.
    ///
    /// Carousels with more than one page install their controls and start
    /// at page 0 without requesting any media; single-page carousels stay
    /// inert apart from loading and hover playback.
    pub fn new(
        section: SectionId,
        pages: Vec<(PageSpec, Option<M>)>,
        layout: &PagerLayout,
        config: &PagerConfig,
        surface: S,
    ) -> Result<Self> {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(index, (spec, media))| {
                spec.validate()?;
                if spec.media != media.as_ref().map(MediaElement::kind) {
                    return Err(ShowcaseError::MediaMismatch { section, index });
                }
                Ok(Page::new(index, spec, media))
            })
            .collect::<Result<Vec<_>>>()?;

        let page_count = pages.len();
        let interactive = page_count > 1;

        let mut carousel = Self {
            section,
            surface,
            model: ScrollPositionModel::new(
                page_count,
                layout.page_width,
                layout.page_spacing,
            ),
            arbiter: GestureArbiter::new(interactive, config),
            gate: LazyLoadGate::new(pages, config.prefetch_radius()),
            scheduler: Scheduler::new(),
        };

        if interactive {
            carousel.surface.install_controls(page_count);
            carousel.surface.set_edge_width(layout.edge_width());
            let update = carousel.model.set_position(0.0, false, false);
            carousel.apply(update);
            carousel.refresh_dots();
        }

        log::debug!(
            "{section}: carousel with {page_count} pages (interactive: {interactive})"
        );
        Ok(carousel)
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn page_count(&self) -> usize {
        self.model.page_count()
    }

    pub fn is_interactive(&self) -> bool {
        self.arbiter.is_enabled()
    }

    pub fn scroll_x(&self) -> f32 {
        self.model.scroll_x()
    }

    pub fn current_page(&self) -> usize {
        self.model.current_page()
    }

    pub fn max_scroll(&self) -> f32 {
        self.model.max_scroll()
    }

    pub fn is_panning(&self) -> bool {
        self.arbiter.is_panning()
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        self.is_interactive() && self.model.is_dot_active(index)
    }

    pub fn load_state(&self, index: usize) -> Option<LoadState> {
        self.gate.load_state(index)
    }

    pub fn page(&self, index: usize) -> Option<&Page<M>> {
        self.gate.page(index)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Move to `x` (clamped). Dots and, when `trigger_loads` is set, the
    /// prefetch window follow only if the current page changed.
    pub fn set_position(&mut self, x: f32, animated: bool, trigger_loads: bool) {
        let update = self.model.set_position(x, animated, trigger_loads);
        self.apply(update);
    }

    /// Animated move to page `index`; out-of-range indices saturate.
    pub fn snap_to_page(&mut self, index: isize) {
        let update = self.model.snap_to_page(index);
        self.apply(update);
    }

    pub fn on_gesture(&mut self, event: GestureEvent, now: Instant) {
        let was_panning = self.arbiter.is_panning();
        let request =
            self.arbiter
                .on_gesture(event, &self.model, &mut self.scheduler, now);
        if self.arbiter.is_panning() != was_panning {
            self.surface.set_panning(self.arbiter.is_panning());
        }
        self.execute(request);
    }

    /// Returns true when the host should prevent the native scroll.
    pub fn on_wheel(&mut self, delta: WheelDelta, now: Instant) -> bool {
        let outcome =
            self.arbiter
                .on_wheel(delta, &self.model, &mut self.scheduler, now);
        self.execute(outcome.request);
        outcome.consumed
    }

    /// Page-dot click.
    pub fn jump_to_page(&mut self, index: usize) {
        let request = self.arbiter.jump_to(index as isize);
        self.execute(request);
    }

    /// Edge-zone click.
    pub fn step(&mut self, edge: Edge) {
        let request = self.arbiter.jump_by(&self.model, edge.step());
        self.execute(request);
    }

    /// Returns true if a click on the carousel must not propagate because
    /// it ends a drag.
    pub fn intercept_click(&self) -> bool {
        self.arbiter.suppresses_click()
    }

    /// Request one page outside the prefetch policy (used to bootstrap the
    /// first page when the section scrolls into view).
    pub fn request_page(&mut self, index: usize) {
        if let Some(outcome) = self.gate.request(index) {
            self.reveal_if_needed(index, outcome);
        }
    }

    /// The page's video reported it can play.
    pub fn on_media_ready(&mut self, index: usize) {
        if self.gate.mark_ready(index) {
            self.surface.reveal_page(index);
        }
    }

    pub fn pointer_enter(&mut self, index: usize) {
        if let Some(video) = self.video_mut(index) {
            video.play();
        }
    }

    pub fn pointer_leave(&mut self, index: usize) {
        if let Some(video) = self.video_mut(index) {
            video.pause();
        }
    }

    /// Click on a page's media: videos restart from the beginning.
    pub fn media_click(&mut self, index: usize) {
        if let Some(video) = self.video_mut(index) {
            video.rewind();
        }
    }

    /// Apply new layout metrics and re-clamp the position without loading.
    pub fn relayout(&mut self, layout: &PagerLayout) {
        self.model.set_metrics(layout.page_width, layout.page_spacing);
        if self.is_interactive() {
            self.surface.set_edge_width(layout.edge_width());
            self.set_position(self.model.scroll_x(), false, false);
        }
    }

    /// Run every deferred task due at `now`.
    pub fn advance(&mut self, now: Instant) {
        for (handle, task) in self.scheduler.take_due(now) {
            if self.arbiter.on_task(handle, task) {
                self.surface.set_panning(self.arbiter.is_panning());
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    fn execute(&mut self, request: Option<ScrollRequest>) {
        match request {
            Some(ScrollRequest::Live { x }) => self.set_position(x, false, true),
            Some(ScrollRequest::Snap { index }) => self.snap_to_page(index),
            None => {}
        }
    }

    fn apply(&mut self, update: PositionUpdate) {
        self.surface.apply_offset(update.offset_x, update.animated);

        let Some(change) = update.page_change else {
            return;
        };
        log::debug!(
            "{}: page {} -> {}",
            self.section,
            change.previous,
            change.current
        );
        self.refresh_dots();

        if update.trigger_loads {
            for (index, outcome) in self.gate.prefetch(change.current) {
                self.reveal_if_needed(index, outcome);
            }
        }
    }

    fn refresh_dots(&mut self) {
        for index in 0..self.model.page_count() {
            self.surface
                .set_dot_active(index, self.model.is_dot_active(index));
        }
    }

    fn reveal_if_needed(&mut self, index: usize, outcome: LoadOutcome) {
        if outcome == LoadOutcome::Revealed {
            self.surface.reveal_page(index);
        }
    }

    fn video_mut(&mut self, index: usize) -> Option<&mut M> {
        let page = self.gate.page_mut(index)?;
        if !page.spec().is_video() {
            return None;
        }
        page.media_mut()
    }
}
