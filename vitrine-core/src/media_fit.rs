//! Fit-to-box scaling for page media.

use vitrine_model::PageSpec;

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Uniform scale that fits `content` inside `container`, preserving aspect
/// ratio and never enlarging. Returns `None` when either extent is empty.
pub fn fit_scale(container: Extent, content: Extent) -> Option<f32> {
    if container.is_empty() || content.is_empty() {
        return None;
    }

    let scale = if content.width / content.height
        > container.width / container.height
    {
        // wider than the box: width is the binding constraint
        container.width / content.width
    } else {
        container.height / content.height
    };

    Some(scale.min(1.0))
}

/// [`fit_scale`] for a page, honouring its opt-out flag.
pub fn page_fit_scale(
    page: &PageSpec,
    container: Extent,
    content: Extent,
) -> Option<f32> {
    if !page.scale_to_fit || page.media.is_none() {
        return None;
    }
    fit_scale(container, content)
}
