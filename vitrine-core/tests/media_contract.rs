//! The engine's calls into `MediaElement`, checked against a mock.

mod support;

use mockall::{Sequence, mock};
use vitrine_contracts::prelude::*;
use vitrine_core::{Carousel, PagerConfig};
use vitrine_model::{MediaKind, PageSpec, SectionId};

use support::{RecordingSurface, layout};

mock! {
    Clip {}

    impl MediaElement for Clip {
        fn kind(&self) -> MediaKind;
        fn start_load(&mut self);
        fn is_loaded(&self) -> bool;
        fn play(&mut self);
        fn pause(&mut self);
        fn rewind(&mut self);
        fn detached_clone(&self) -> Self;
    }
}

fn video_clip() -> MockClip {
    let mut clip = MockClip::new();
    clip.expect_kind().return_const(MediaKind::Video);
    clip.expect_is_loaded().return_const(false);
    clip
}

fn carousel(clips: Vec<MockClip>) -> Carousel<MockClip, RecordingSurface> {
    support::init_logging();
    let pages = clips
        .into_iter()
        .map(|clip| (PageSpec::video(), Some(clip)))
        .collect();
    Carousel::new(
        SectionId(3),
        pages,
        &layout(),
        &PagerConfig::default(),
        RecordingSurface::default(),
    )
    .expect("valid carousel")
}

#[test]
fn each_page_starts_loading_exactly_once() {
    let clips = (0..4)
        .map(|i| {
            let mut clip = video_clip();
            clip.expect_start_load().times(usize::from(i < 3)).return_const(());
            clip
        })
        .collect();
    let mut carousel = carousel(clips);

    carousel.jump_to_page(1);
    carousel.jump_to_page(0);
    carousel.jump_to_page(1);
    carousel.request_page(1);
    // mock expectations are verified on drop
}

#[test]
fn hover_and_click_drive_playback_in_order() {
    let mut seq = Sequence::new();
    let mut clip = video_clip();
    clip.expect_play().times(1).in_sequence(&mut seq).return_const(());
    clip.expect_rewind().times(1).in_sequence(&mut seq).return_const(());
    clip.expect_pause().times(1).in_sequence(&mut seq).return_const(());
    clip.expect_start_load().never();

    let mut carousel = carousel(vec![clip]);

    carousel.pointer_enter(0);
    carousel.media_click(0);
    carousel.pointer_leave(0);
}

#[test]
fn already_decoded_video_is_revealed_without_loading() {
    let mut clip = MockClip::new();
    clip.expect_kind().return_const(MediaKind::Video);
    clip.expect_is_loaded().return_const(true);
    clip.expect_start_load().never();
    let mut other = video_clip();
    other.expect_start_load().times(1).return_const(());

    let mut carousel = carousel(vec![clip, other]);
    carousel.request_page(0);

    assert_eq!(
        carousel.load_state(0),
        Some(vitrine_model::LoadState::Ready)
    );
    assert_eq!(carousel.surface().log().borrow().revealed, vec![0]);
    carousel.jump_to_page(1);
}
