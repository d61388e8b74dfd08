//! Lazy loading of page media.
//!
//! Two gates decide when media may start decoding:
//!
//! * [`SectionVisibility`] keeps a sticky record of which showcase sections
//!   have ever intersected the viewport. The first time a section shows up
//!   its first page is requested, which bootstraps carousels below the fold.
//! * [`LazyLoadGate`] owns the per-page [`LoadState`] of one carousel and
//!   applies the prefetch window around the current page.
//!
//! Both only ever move forward: a section never becomes invisible again and
//! a page is requested at most once.

use std::collections::HashSet;

use vitrine_contracts::media::MediaElement;
use vitrine_model::{LoadState, PageSpec, Rect, SectionId, ViewportSize};

/// One page of a carousel and its media element.
#[derive(Debug)]
pub struct Page<M> {
    index: usize,
    spec: PageSpec,
    media: Option<M>,
    state: LoadState,
    revealed: bool,
}

impl<M> Page<M> {
    pub fn new(index: usize, spec: PageSpec, media: Option<M>) -> Self {
        Self {
            index,
            spec,
            media,
            state: LoadState::NotRequested,
            revealed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn spec(&self) -> &PageSpec {
        &self.spec
    }

    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    pub fn media_mut(&mut self) -> Option<&mut M> {
        self.media.as_mut()
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Whether the loading spinner is still shown for this page.
    pub fn spinner_visible(&self) -> bool {
        !self.revealed
    }
}

/// What a load request did to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was already requested earlier; nothing happened.
    AlreadyRequested,
    /// Video decode was started; the spinner stays until readiness.
    Decoding,
    /// The page needs no decode step; the spinner can go now.
    Revealed,
}

/// Per-carousel load state machine.
#[derive(Debug)]
pub struct LazyLoadGate<M> {
    pages: Vec<Page<M>>,
    prefetch_radius: usize,
}

impl<M: MediaElement> LazyLoadGate<M> {
    pub fn new(pages: Vec<Page<M>>, prefetch_radius: usize) -> Self {
        Self {
            pages,
            prefetch_radius,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&Page<M>> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page<M>> {
        self.pages.get_mut(index)
    }

    pub fn load_state(&self, index: usize) -> Option<LoadState> {
        self.pages.get(index).map(Page::load_state)
    }

    /// Indices of every page that has left `NotRequested`.
    pub fn requested_pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.pages
            .iter()
            .filter(|p| p.state.is_requested())
            .map(Page::index)
    }

    /// Move page `index` from `NotRequested` to `Requested`, starting its
    /// decode if it holds an unready video. Returns `None` for indices
    /// outside the carousel.
    pub fn request(&mut self, index: usize) -> Option<LoadOutcome> {
        let page = self.pages.get_mut(index)?;
        if page.state.is_requested() {
            return Some(LoadOutcome::AlreadyRequested);
        }
        page.state = LoadState::Requested;

        let is_video = page.spec.is_video();
        let outcome = match page.media.as_mut() {
            Some(media) if is_video && !media.is_loaded() => {
                media.start_load();
                LoadOutcome::Decoding
            }
            Some(_) if is_video => {
                // decoded before the gate got to it
                page.state = LoadState::Ready;
                page.revealed = true;
                LoadOutcome::Revealed
            }
            _ => {
                page.revealed = true;
                LoadOutcome::Revealed
            }
        };

        log::debug!("page {index} requested: {outcome:?}");
        Some(outcome)
    }

    /// Request the prefetch window around `current`. Returns the pages that
    /// transitioned during this call, in window order.
    pub fn prefetch(&mut self, current: usize) -> Vec<(usize, LoadOutcome)> {
        let start = current.saturating_sub(self.prefetch_radius);
        let end = current.saturating_add(self.prefetch_radius);

        (start..=end)
            .filter_map(|index| match self.request(index)? {
                LoadOutcome::AlreadyRequested => None,
                outcome => Some((index, outcome)),
            })
            .collect()
    }

    /// Record the `can-play` signal of a page's video. Returns true if the
    /// page transitioned to `Ready`.
    pub fn mark_ready(&mut self, index: usize) -> bool {
        let Some(page) = self.pages.get_mut(index) else {
            return false;
        };
        if page.state != LoadState::Requested || !page.spec.is_video() {
            return false;
        }
        page.state = LoadState::Ready;
        page.revealed = true;
        log::debug!("page {index} ready");
        true
    }
}

/// Sticky record of sections that have been on screen at least once.
#[derive(Debug, Default, Clone)]
pub struct SectionVisibility {
    was_visible: HashSet<SectionId>,
}

impl SectionVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_visible(&self, section: SectionId) -> bool {
        self.was_visible.contains(&section)
    }

    /// Feed the current bounding box of a section. Returns true exactly
    /// once: the first time the section intersects the viewport.
    pub fn observe(
        &mut self,
        section: SectionId,
        bounds: Rect,
        viewport: ViewportSize,
    ) -> bool {
        if self.was_visible(section) || !bounds.intersects_viewport(viewport) {
            return false;
        }
        log::debug!("{section} became visible");
        self.was_visible.insert(section)
    }

    pub fn visible_count(&self) -> usize {
        self.was_visible.len()
    }
}
