//! ScrollPositionModel: the single owner of a carousel's scroll offset.

/// Current page transition reported by [`ScrollPositionModel::set_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub previous: usize,
    pub current: usize,
}

/// Result of one position update, consumed by the carousel to drive the
/// surface, the page dots and the prefetch policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionUpdate {
    /// Clamped offset now in effect.
    pub offset_x: f32,
    pub animated: bool,
    /// Set only when the derived page index actually changed.
    pub page_change: Option<PageChange>,
    /// Whether the page change should feed the prefetch policy.
    pub trigger_loads: bool,
}

/// Authoritative horizontal position of one carousel.
///
/// `scroll_x` is always within `[0, max_scroll]` and `current_page` is
/// always `round(scroll_x / page_width)` limited to the last page.
#[derive(Debug, Clone)]
pub struct ScrollPositionModel {
    page_count: usize,
    page_width: f32,
    page_spacing: f32,
    scroll_x: f32,
    current_page: usize,
}

impl ScrollPositionModel {
    pub fn new(page_count: usize, page_width: f32, page_spacing: f32) -> Self {
        Self {
            page_count,
            page_width,
            page_spacing,
            scroll_x: 0.0,
            current_page: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn page_spacing(&self) -> f32 {
        self.page_spacing
    }

    #[inline]
    pub fn stride(&self) -> f32 {
        self.page_width + self.page_spacing
    }

    #[inline]
    pub fn max_scroll(&self) -> f32 {
        self.stride() * self.page_count.saturating_sub(1) as f32
    }

    /// Page dots are a pure function of the current page.
    pub fn is_dot_active(&self, index: usize) -> bool {
        index == self.current_page
    }

    /// Replace the layout metrics. The offset is left untouched; callers
    /// re-apply it through [`Self::set_position`] to re-clamp.
    pub fn set_metrics(&mut self, page_width: f32, page_spacing: f32) {
        self.page_width = page_width;
        self.page_spacing = page_spacing;
    }

    /// Clamp `x` into bounds, store it and re-derive the current page.
    pub fn set_position(
        &mut self,
        x: f32,
        animated: bool,
        trigger_loads: bool,
    ) -> PositionUpdate {
        // NaN collapses to 0 through `max`
        self.scroll_x = x.max(0.0).min(self.max_scroll());

        let new_page = self.page_at(self.scroll_x);
        let page_change = (new_page != self.current_page).then(|| {
            let change = PageChange {
                previous: self.current_page,
                current: new_page,
            };
            self.current_page = new_page;
            change
        });

        PositionUpdate {
            offset_x: self.scroll_x,
            animated,
            page_change,
            trigger_loads,
        }
    }

    /// Offset of the left edge of page `index`, unclamped.
    pub fn snap_target(&self, index: isize) -> f32 {
        index as f32 * self.stride()
    }

    /// Animated move to page `index`. Out-of-range indices saturate.
    pub fn snap_to_page(&mut self, index: isize) -> PositionUpdate {
        self.set_position(self.snap_target(index), true, true)
    }

    fn page_at(&self, x: f32) -> usize {
        if self.page_count == 0 || self.page_width <= 0.0 {
            return 0;
        }
        let page = (x / self.page_width).round() as usize;
        page.min(self.page_count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ScrollPositionModel {
        ScrollPositionModel::new(5, 300.0, 16.0)
    }

    #[test]
    fn position_is_clamped_to_bounds() {
        let mut m = model();
        for x in [-500.0, -0.1, 0.0, 100.0, 1264.0, 5000.0, f32::NAN, f32::INFINITY] {
            let update = m.set_position(x, false, true);
            assert!(m.scroll_x() >= 0.0 && m.scroll_x() <= m.max_scroll());
            assert_eq!(update.offset_x, m.scroll_x());
        }
        assert_eq!(m.max_scroll(), 1264.0);
    }

    #[test]
    fn current_page_tracks_rounded_offset() {
        let mut m = model();
        for x in [0.0, 149.0, 151.0, 449.0, 451.0, 632.0, 1000.0, 1264.0] {
            m.set_position(x, false, true);
            assert_eq!(m.current_page(), (m.scroll_x() / 300.0).round() as usize);
        }
    }

    #[test]
    fn page_change_is_reported_only_on_index_change() {
        let mut m = model();
        assert!(m.set_position(10.0, false, true).page_change.is_none());
        assert!(m.set_position(140.0, false, true).page_change.is_none());

        let update = m.set_position(160.0, false, true);
        assert_eq!(
            update.page_change,
            Some(PageChange {
                previous: 0,
                current: 1
            })
        );
        assert!(m.set_position(170.0, false, true).page_change.is_none());
    }

    #[test]
    fn snap_saturates_out_of_range_indices() {
        let mut m = model();
        m.snap_to_page(9);
        assert_eq!(m.current_page(), 4);
        assert_eq!(m.scroll_x(), 1264.0);

        let update = m.snap_to_page(-3);
        assert!(update.animated);
        assert_eq!(m.current_page(), 0);
        assert_eq!(m.scroll_x(), 0.0);
    }

    #[test]
    fn repeated_snap_is_idempotent() {
        let mut m = model();
        let first = m.snap_to_page(2);
        assert_eq!(first.offset_x, 632.0);
        assert!(first.page_change.is_some());

        let second = m.snap_to_page(2);
        assert_eq!(second.offset_x, 632.0);
        assert!(second.page_change.is_none());
        assert_eq!(m.current_page(), 2);
    }

    #[test]
    fn dots_follow_current_page() {
        let mut m = model();
        m.snap_to_page(3);
        let active: Vec<usize> = (0..5).filter(|&i| m.is_dot_active(i)).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn single_page_has_no_scroll_range() {
        let mut m = ScrollPositionModel::new(1, 300.0, 16.0);
        m.set_position(200.0, false, true);
        assert_eq!(m.scroll_x(), 0.0);
        assert_eq!(m.current_page(), 0);
    }
}
