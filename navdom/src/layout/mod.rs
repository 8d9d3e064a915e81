mod flow;
mod rect;

use std::collections::HashMap;

pub use flow::layout;
pub use rect::Rect;

/// Per-element geometry computed by a layout pass.
///
/// For scroll containers the child rects are in content space, anchored at
/// the container's inner origin as if the scroll offset were zero; the
/// container's inner rect and total content size are recorded alongside so
/// scroll offsets can be clamped and targets centered.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    viewports: HashMap<String, Rect>,
    content_sizes: HashMap<String, (u16, u16)>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    /// The inner (viewport) rect of a scroll container.
    pub fn viewport(&self, id: &str) -> Option<Rect> {
        self.viewports.get(id).copied()
    }

    /// The inner (viewport) size of a scroll container.
    pub fn viewport_size(&self, id: &str) -> Option<(u16, u16)> {
        self.viewports.get(id).map(|r| (r.width, r.height))
    }

    /// The total size of a scroll container's laid-out content.
    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.content_sizes.get(id).copied()
    }

    pub(crate) fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub(crate) fn set_scroll_metrics(&mut self, id: &str, viewport: Rect, content: (u16, u16)) {
        self.viewports.insert(id.to_string(), viewport);
        self.content_sizes.insert(id.to_string(), content);
    }
}
