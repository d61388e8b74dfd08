//! GestureArbiter: turns pan, swipe, wheel and click input into scroll
//! requests while keeping the input channels from fighting each other.
//!
//! The arbiter never writes the position itself. It reads the
//! [`ScrollPositionModel`] and returns a [`ScrollRequest`] that the carousel
//! applies through the model, so every position change goes through one
//! owner and is applied in event-delivery order.

use std::time::{Duration, Instant};

use vitrine_model::{GestureEvent, GestureKind, WheelDelta};

use super::scroll::ScrollPositionModel;
use crate::{
    config::PagerConfig,
    scheduler::{Scheduler, TaskHandle},
};

/// What the carousel should do with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    /// Follow the pointer: unanimated move to `x`.
    Live { x: f32 },
    /// Animated snap to page `index` (clamped by the model).
    Snap { index: isize },
}

/// Deferred work owned by a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerTask {
    /// End the click-suppression window after a pan resolved.
    ClearPanning,
    /// Re-enable wheel navigation after a wheel jump.
    RestoreWheel,
}

/// Outcome of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelOutcome {
    /// The host should prevent the browser's native horizontal scroll.
    pub consumed: bool,
    pub request: Option<ScrollRequest>,
}

#[derive(Debug, Clone)]
pub struct GestureArbiter {
    /// False for carousels with fewer than two pages.
    enabled: bool,

    // Pan/swipe
    panning: bool,
    swiped: bool,
    last_pan_delta_x: f32,
    page_at_pan_start: Option<usize>,
    pending_clear: Option<TaskHandle>,
    clear_delay: Duration,

    // Wheel
    /// `None` until the first wheel event; a first event never rises.
    last_wheel_magnitude: Option<f32>,
    wheel_cooldown: Option<TaskHandle>,
    wheel_threshold: f32,
    wheel_cooldown_duration: Duration,
}

impl GestureArbiter {
    pub fn new(enabled: bool, config: &PagerConfig) -> Self {
        Self {
            enabled,
            panning: false,
            swiped: false,
            last_pan_delta_x: 0.0,
            page_at_pan_start: None,
            pending_clear: None,
            clear_delay: config.panning_clear_delay(),
            last_wheel_magnitude: None,
            wheel_cooldown: None,
            wheel_threshold: config.wheel_threshold(),
            wheel_cooldown_duration: config.wheel_cooldown(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn is_wheel_cooling_down(&self) -> bool {
        self.wheel_cooldown.is_some()
    }

    /// Handle one normalized gesture event.
    pub fn on_gesture(
        &mut self,
        event: GestureEvent,
        model: &ScrollPositionModel,
        scheduler: &mut Scheduler<PagerTask>,
        now: Instant,
    ) -> Option<ScrollRequest> {
        if !self.enabled {
            return None;
        }

        match event.kind {
            GestureKind::Pan => {
                if self.swiped {
                    return None;
                }
                // A new drag supersedes the release of the previous one
                if let Some(handle) = self.pending_clear.take() {
                    scheduler.cancel(handle);
                    self.page_at_pan_start = None;
                }

                let delta_x = event.delta_x - self.last_pan_delta_x;
                self.last_pan_delta_x = event.delta_x;
                self.panning = true;
                self.page_at_pan_start.get_or_insert(model.current_page());

                log::trace!(
                    "pan delta {delta_x:+.1} from offset {:.1}",
                    model.scroll_x()
                );
                Some(ScrollRequest::Live {
                    x: model.scroll_x() - delta_x,
                })
            }

            GestureKind::Swipe => {
                self.swiped = true;
                self.last_pan_delta_x = 0.0;
                let origin = self.page_at_pan_start.unwrap_or(model.current_page());
                let index = origin as isize + event.direction.page_step();
                self.schedule_clear(scheduler, now);

                log::debug!("swipe {:?} from page {origin} to {index}", event.direction);
                Some(ScrollRequest::Snap { index })
            }

            GestureKind::PanEnd => {
                let request = if self.swiped {
                    None
                } else {
                    self.last_pan_delta_x = 0.0;
                    self.schedule_clear(scheduler, now);
                    Some(ScrollRequest::Snap {
                        index: model.current_page() as isize,
                    })
                };
                self.swiped = false;
                request
            }
        }
    }

    /// Handle a wheel event. At most one page jump per cooldown window, and
    /// only on a rising edge of horizontal intent.
    pub fn on_wheel(
        &mut self,
        delta: WheelDelta,
        model: &ScrollPositionModel,
        scheduler: &mut Scheduler<PagerTask>,
        now: Instant,
    ) -> WheelOutcome {
        let magnitude = delta.delta_x.abs();
        let mut outcome = WheelOutcome {
            consumed: magnitude > 0.0,
            request: None,
        };
        if !self.enabled {
            return outcome;
        }

        let rising = self
            .last_wheel_magnitude
            .is_some_and(|previous| magnitude > previous);
        self.last_wheel_magnitude = Some(magnitude);

        if self.wheel_cooldown.is_some() {
            log::trace!("wheel delta {:.1} ignored during cooldown", delta.delta_x);
            return outcome;
        }

        if delta.is_horizontal() && magnitude > self.wheel_threshold && rising {
            let step = if delta.delta_x > 0.0 { 1 } else { -1 };
            let index = model.current_page() as isize + step;
            self.wheel_cooldown = Some(scheduler.schedule(
                now,
                self.wheel_cooldown_duration,
                PagerTask::RestoreWheel,
            ));
            log::debug!("wheel jump to page {index}");
            outcome.request = Some(ScrollRequest::Snap { index });
        }

        outcome
    }

    /// Dot click: go to an absolute page.
    pub fn jump_to(&self, index: isize) -> Option<ScrollRequest> {
        self.enabled.then_some(ScrollRequest::Snap { index })
    }

    /// Edge click: step relative to the current page.
    pub fn jump_by(&self, model: &ScrollPositionModel, step: isize) -> Option<ScrollRequest> {
        self.jump_to(model.current_page() as isize + step)
    }

    /// Whether a click on the carousel must be swallowed because it is the
    /// tail of a drag.
    pub fn suppresses_click(&self) -> bool {
        self.panning
    }

    /// Apply a due task. Returns true when the panning state changed.
    pub fn on_task(&mut self, handle: TaskHandle, task: PagerTask) -> bool {
        match task {
            PagerTask::ClearPanning => {
                if self.pending_clear != Some(handle) {
                    return false;
                }
                self.pending_clear = None;
                self.page_at_pan_start = None;
                std::mem::replace(&mut self.panning, false)
            }
            PagerTask::RestoreWheel => {
                if self.wheel_cooldown == Some(handle) {
                    self.wheel_cooldown = None;
                }
                false
            }
        }
    }

    fn schedule_clear(&mut self, scheduler: &mut Scheduler<PagerTask>, now: Instant) {
        if let Some(handle) = self.pending_clear.take() {
            scheduler.cancel(handle);
        }
        self.pending_clear =
            Some(scheduler.schedule(now, self.clear_delay, PagerTask::ClearPanning));
    }
}
