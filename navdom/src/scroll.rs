use std::collections::HashMap;

use crate::element::{visible_children, Element};
use crate::event::Event;
use crate::layout::{LayoutResult, Rect};
use crate::types::Overflow;

/// Scroll offset for a scrollable element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Tracks scroll offsets for scrollable elements. User-managed state that
/// persists across frames; the element tree is rebuilt with these offsets.
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, ScrollOffset>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scroll offset for an element.
    pub fn get(&self, id: &str) -> ScrollOffset {
        self.offsets.get(id).copied().unwrap_or_default()
    }

    /// Set the scroll offset for an element.
    pub fn set(&mut self, id: &str, x: u16, y: u16) {
        self.offsets.insert(id.to_string(), ScrollOffset::new(x, y));
    }

    /// Scroll an element by a delta amount.
    /// Returns true if the scroll offset changed.
    pub fn scroll_by(&mut self, id: &str, dx: i16, dy: i16) -> bool {
        let current = self.get(id);
        let new_x = (current.x as i32 + dx as i32).max(0) as u16;
        let new_y = (current.y as i32 + dy as i32).max(0) as u16;

        if new_x != current.x || new_y != current.y {
            self.offsets
                .insert(id.to_string(), ScrollOffset::new(new_x, new_y));
            true
        } else {
            false
        }
    }

    /// Clamp an element's offset to the valid range for the given viewport
    /// and content sizes. Call after layout.
    pub fn clamp(&mut self, id: &str, viewport: (u16, u16), content: (u16, u16)) {
        let max_x = content.0.saturating_sub(viewport.0);
        let max_y = content.1.saturating_sub(viewport.1);

        if let Some(offset) = self.offsets.get_mut(id) {
            offset.x = offset.x.min(max_x);
            offset.y = offset.y.min(max_y);
        }
    }

    /// Center the target rect (content-space, as produced by layout) in the
    /// element's viewport on both axes. The offset is applied on the next
    /// frame; there is no animated transition.
    pub fn center_on(&mut self, id: &str, target: Rect, viewport: Rect, content: (u16, u16)) {
        let max_x = content.0.saturating_sub(viewport.width) as i32;
        let max_y = content.1.saturating_sub(viewport.height) as i32;

        let (cx, cy) = target.center();
        let rel_x = cx.saturating_sub(viewport.x) as i32;
        let rel_y = cy.saturating_sub(viewport.y) as i32;

        let x = (rel_x - viewport.width as i32 / 2).clamp(0, max_x) as u16;
        let y = (rel_y - viewport.height as i32 / 2).clamp(0, max_y) as u16;

        log::debug!("[scroll] centering {id} on ({cx}, {cy}) -> offset ({x}, {y})");
        self.offsets.insert(id.to_string(), ScrollOffset::new(x, y));
    }

    /// Process events and update scroll offsets.
    /// Returns events that were consumed (scroll events on scrollable elements).
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut consumed = Vec::new();

        for event in events {
            if let Event::Scroll {
                target,
                delta_x,
                delta_y,
                x,
                y,
            } = event
            {
                let Some(scrollable_id) = target
                    .clone()
                    .or_else(|| find_scrollable_at(root, layout, *x, *y))
                else {
                    continue;
                };

                let Some((content_width, content_height)) = layout.content_size(&scrollable_id)
                else {
                    continue;
                };
                let Some((inner_width, inner_height)) = layout.viewport_size(&scrollable_id) else {
                    continue;
                };

                // Check if content actually overflows
                let can_scroll_vertical = content_height > inner_height;
                let can_scroll_horizontal = content_width > inner_width;

                let current = self.get(&scrollable_id);
                let mut new_x = current.x;
                let mut new_y = current.y;

                if *delta_y != 0 && can_scroll_vertical {
                    let max_scroll_y = content_height.saturating_sub(inner_height);
                    new_y =
                        (current.y as i32 + *delta_y as i32).clamp(0, max_scroll_y as i32) as u16;
                }

                if *delta_x != 0 && can_scroll_horizontal {
                    let max_scroll_x = content_width.saturating_sub(inner_width);
                    new_x =
                        (current.x as i32 + *delta_x as i32).clamp(0, max_scroll_x as i32) as u16;
                }

                if new_x != current.x || new_y != current.y {
                    log::debug!("[scroll] {scrollable_id} -> ({new_x}, {new_y})");
                    self.offsets
                        .insert(scrollable_id, ScrollOffset::new(new_x, new_y));
                    consumed.push(event.clone());
                }
            }
        }

        consumed
    }
}

/// Find the innermost scrollable element at the given coordinates.
fn find_scrollable_at(root: &Element, layout: &LayoutResult, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children first (innermost takes priority)
    for child in visible_children(root).iter().rev() {
        if let Some(id) = find_scrollable_at(child, layout, x, y) {
            return Some(id);
        }
    }

    if root.overflow_x == Overflow::Scroll || root.overflow_y == Overflow::Scroll {
        return Some(root.id.clone());
    }

    None
}
