use crate::element::{visible_children, Element};
use crate::layout::{LayoutResult, Rect};
use crate::types::Overflow;

/// Find the deepest clickable element at the given screen coordinates.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_node(layout, root, x as u32, y as u32, &|el| el.clickable)
}

/// Find the deepest element (clickable or not) at the given coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_node(layout, root, x as u32, y as u32, &|_| true)
}

/// Find the deepest scroll container at the given coordinates.
pub fn hit_test_scrollable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_node(layout, root, x as u32, y as u32, &|el| {
        el.overflow_x == Overflow::Scroll || el.overflow_y == Overflow::Scroll
    })
}

/// Recursive hit test. Descending into a scroll container converts the probe
/// point into the container's content space (layout keeps child rects there).
fn hit_node(
    layout: &LayoutResult,
    element: &Element,
    x: u32,
    y: u32,
    pred: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !contains(rect, x, y) {
        return None;
    }

    let cx = if element.overflow_x == Overflow::Scroll {
        x + element.scroll_offset.0 as u32
    } else {
        x
    };
    let cy = if element.overflow_y == Overflow::Scroll {
        y + element.scroll_offset.1 as u32
    } else {
        y
    };

    // Check children in reverse order (last rendered = on top)
    for child in visible_children(element).iter().rev() {
        if let Some(id) = hit_node(layout, child, cx, cy, pred) {
            return Some(id);
        }
    }

    if pred(element) {
        Some(element.id.clone())
    } else {
        None
    }
}

fn contains(rect: &Rect, x: u32, y: u32) -> bool {
    x >= rect.x as u32 && x < rect.right() as u32 && y >= rect.y as u32 && y < rect.bottom() as u32
}
