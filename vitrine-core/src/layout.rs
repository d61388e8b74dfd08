//! Relayout metrics for pagers.
//!
//! Every pager on the page shares the same metrics; they are recomputed from
//! the screen width and the pager container width whenever the window
//! resizes.

use crate::{config::PagerConfig, constants::layout::MIN_PAGE_WIDTH};

/// Pixel metrics shared by all pagers after a relayout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerLayout {
    /// Visible sliver of the previous/next page on each side.
    pub page_peek: f32,
    /// Gap between pages.
    pub page_spacing: f32,
    /// Width of the pager container.
    pub pager_width: f32,
    /// Width of one page.
    pub page_width: f32,
}

impl PagerLayout {
    /// Derive the metrics for a pager container `pager_width` wide on a
    /// screen `screen_width` wide.
    pub fn compute(screen_width: f32, pager_width: f32, config: &PagerConfig) -> Self {
        let page_peek = if screen_width < config.narrow_breakpoint() {
            config.narrow_page_peek()
        } else {
            config.wide_page_peek()
        };
        let page_spacing = config.page_spacing();
        let page_width =
            (pager_width - (page_peek + page_spacing) * 2.0).max(MIN_PAGE_WIDTH);

        Self {
            page_peek,
            page_spacing,
            pager_width,
            page_width,
        }
    }

    /// Distance between the left edges of two adjacent pages.
    pub fn page_stride(&self) -> f32 {
        self.page_width + self.page_spacing
    }

    /// Left margin of the first page, which centers it with a peek of the
    /// next page visible on the right.
    pub fn first_page_margin_left(&self) -> f32 {
        self.page_spacing + self.page_peek
    }

    /// Right margin of page `index` out of `page_count`.
    pub fn page_margin_right(&self, index: usize, page_count: usize) -> f32 {
        if index + 1 == page_count {
            self.page_peek
        } else {
            self.page_spacing
        }
    }

    /// Width of the previous/next click zones at the pager edges.
    pub fn edge_width(&self) -> f32 {
        self.page_peek
    }
}
