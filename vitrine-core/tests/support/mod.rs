//! Recording fakes for the host contracts.
#![allow(dead_code)]

use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use vitrine_contracts::prelude::*;
use vitrine_core::{
    PagerConfig, PagerLayout, Showcase, ShowcaseBuilder, showcase::SectionPages,
};
use vitrine_model::{MediaKind, PageSpec, SectionId};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Layout with round numbers: 300px pages, 16px spacing.
pub fn layout() -> PagerLayout {
    PagerLayout {
        page_peek: 32.0,
        page_spacing: 16.0,
        pager_width: 396.0,
        page_width: 300.0,
    }
}

#[derive(Debug, Default)]
pub struct MediaLog {
    pub loads: usize,
    pub plays: usize,
    pub pauses: usize,
    pub rewinds: usize,
    pub clones: usize,
}

#[derive(Debug, Clone)]
pub struct FakeMedia {
    kind: MediaKind,
    log: Rc<RefCell<MediaLog>>,
}

impl FakeMedia {
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            log: Rc::default(),
        }
    }

    pub fn log(&self) -> Rc<RefCell<MediaLog>> {
        Rc::clone(&self.log)
    }
}

impl MediaElement for FakeMedia {
    fn kind(&self) -> MediaKind {
        self.kind
    }

    fn start_load(&mut self) {
        self.log.borrow_mut().loads += 1;
    }

    fn play(&mut self) {
        self.log.borrow_mut().plays += 1;
    }

    fn pause(&mut self) {
        self.log.borrow_mut().pauses += 1;
    }

    fn rewind(&mut self) {
        self.log.borrow_mut().rewinds += 1;
    }

    fn detached_clone(&self) -> Self {
        self.log.borrow_mut().clones += 1;
        Self::new(self.kind)
    }
}

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub offsets: Vec<(f32, bool)>,
    pub installed: Option<usize>,
    pub dots: Vec<bool>,
    pub panning: bool,
    pub panning_toggles: usize,
    pub revealed: Vec<usize>,
    pub edge_width: Option<f32>,
}

impl SurfaceLog {
    pub fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter_map(|(i, &active)| active.then_some(i))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn log(&self) -> Rc<RefCell<SurfaceLog>> {
        Rc::clone(&self.log)
    }
}

impl PagerSurface for RecordingSurface {
    fn apply_offset(&mut self, offset_x: f32, animated: bool) {
        self.log.borrow_mut().offsets.push((offset_x, animated));
    }

    fn install_controls(&mut self, page_count: usize) {
        let mut log = self.log.borrow_mut();
        log.installed = Some(page_count);
        log.dots = vec![false; page_count];
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.log.borrow_mut().dots.get_mut(index) {
            *dot = active;
        }
    }

    fn set_panning(&mut self, panning: bool) {
        let mut log = self.log.borrow_mut();
        log.panning = panning;
        log.panning_toggles += 1;
    }

    fn reveal_page(&mut self, index: usize) {
        self.log.borrow_mut().revealed.push(index);
    }

    fn set_edge_width(&mut self, width: f32) {
        self.log.borrow_mut().edge_width = Some(width);
    }
}

#[derive(Debug, Default)]
pub struct OverlayLog {
    pub mounts: usize,
    pub last_spinner: Option<bool>,
    pub visible: bool,
    pub loaded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingOverlay {
    log: Rc<RefCell<OverlayLog>>,
}

impl RecordingOverlay {
    pub fn log(&self) -> Rc<RefCell<OverlayLog>> {
        Rc::clone(&self.log)
    }
}

impl OverlaySurface<FakeMedia> for RecordingOverlay {
    fn mount(&mut self, _content: &FakeMedia, with_spinner: bool) {
        let mut log = self.log.borrow_mut();
        log.mounts += 1;
        log.last_spinner = Some(with_spinner);
    }

    fn set_visible(&mut self, visible: bool) {
        self.log.borrow_mut().visible = visible;
    }

    fn set_loaded(&mut self, loaded: bool) {
        self.log.borrow_mut().loaded = loaded;
    }
}

/// Pages for one section plus handles on each media log.
pub fn pages(specs: &[PageSpec]) -> (SectionPages<FakeMedia>, Vec<Rc<RefCell<MediaLog>>>) {
    let mut logs = Vec::new();
    let pages = specs
        .iter()
        .map(|spec| {
            let media = spec.media.map(FakeMedia::new);
            if let Some(m) = &media {
                logs.push(m.log());
            } else {
                logs.push(Rc::default());
            }
            (*spec, media)
        })
        .collect();
    (pages, logs)
}

pub fn videos(count: usize) -> Vec<PageSpec> {
    vec![PageSpec::video(); count]
}

pub fn load_counts(logs: &[Rc<RefCell<MediaLog>>]) -> Vec<usize> {
    logs.iter().map(|l| l.borrow().loads).collect()
}

/// A handle on one section of a test showcase.
pub struct SectionProbe {
    pub id: SectionId,
    pub media: Vec<Rc<RefCell<MediaLog>>>,
    pub surface: Rc<RefCell<SurfaceLog>>,
}

pub type TestShowcase = Showcase<FakeMedia, RecordingSurface, RecordingOverlay>;

/// Build a showcase on a 1280px screen with a 1000px pager (904px pages).
pub fn showcase(
    sections: &[Vec<PageSpec>],
) -> (TestShowcase, Vec<SectionProbe>, Rc<RefCell<OverlayLog>>) {
    init_logging();
    let mut builder = ShowcaseBuilder::new(PagerConfig::default()).viewport(1280.0, 1000.0);
    let mut probes = Vec::new();
    for (i, specs) in sections.iter().enumerate() {
        let id = SectionId(i as u32);
        let (pages, media) = pages(specs);
        let surface = RecordingSurface::default();
        probes.push(SectionProbe {
            id,
            media,
            surface: surface.log(),
        });
        builder = builder.section(id, pages, surface);
    }
    let overlay = RecordingOverlay::default();
    let overlay_log = overlay.log();
    let showcase = builder.build(overlay).expect("valid showcase");
    (showcase, probes, overlay_log)
}

pub fn start() -> Instant {
    Instant::now()
}
