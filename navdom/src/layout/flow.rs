use super::{LayoutResult, Rect};
use crate::element::{visible_children, Content, Element};
use crate::text::display_width;
use crate::types::{Border, Direction, Overflow, Size};

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let children = visible_children(element);

    let border = border_size(element);
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let scrolls_x = element.overflow_x == Overflow::Scroll;
    let scrolls_y = element.overflow_y == Overflow::Scroll;

    if children.is_empty() {
        if scrolls_x || scrolls_y {
            result.set_scroll_metrics(&element.id, inner, (0, 0));
        }
        return;
    }

    let is_row = element.direction == Direction::Row;
    let main_avail = if is_row { inner.width } else { inner.height };
    let cross_avail = if is_row { inner.height } else { inner.width };
    // On a scrolling axis children keep their natural extent; the overflow
    // is recorded as content size instead of being clamped away.
    let scrolls_main = if is_row { scrolls_x } else { scrolls_y };
    let scrolls_cross = if is_row { scrolls_y } else { scrolls_x };

    // First pass: fixed sizes and fill count.
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;

    for child in children {
        let main_size = if is_row { child.width } else { child.height };
        match main_size {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => {
                fixed_total = fixed_total.saturating_add(estimate_size(child, is_row));
            }
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_avail.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Second pass: place children along the main axis in input order.
    let mut offset = 0u16;
    let mut cross_extent = 0u16;

    for child in children {
        let main_size = if is_row { child.width } else { child.height };
        let mut main = match main_size {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
        };
        if !scrolls_main {
            main = main.min(main_avail.saturating_sub(offset));
        }

        let cross_size = if is_row { child.height } else { child.width };
        let mut cross = match cross_size {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, !is_row),
            Size::Fill => cross_avail,
        };
        if !scrolls_cross {
            cross = cross.min(cross_avail);
        }

        let child_rect = if is_row {
            Rect::new(inner.x.saturating_add(offset), inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y.saturating_add(offset), cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
        cross_extent = cross_extent.max(cross);
    }

    if scrolls_x || scrolls_y {
        let main_extent = offset.saturating_sub(element.gap);
        let content = if is_row {
            (main_extent, cross_extent)
        } else {
            (cross_extent, main_extent)
        };
        result.set_scroll_metrics(&element.id, inner, content);
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

/// Declared size if fixed, intrinsic estimate otherwise.
fn declared_or_estimate(element: &Element, is_width: bool) -> u16 {
    let size = if is_width {
        element.width
    } else {
        element.height
    };
    match size {
        Size::Fixed(n) => n,
        _ => estimate_size(element, is_width),
    }
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => text_extent(text, is_width),
        Content::Link { label, .. } => text_extent(label, is_width),
        Content::Children(_) => {
            let children = visible_children(element);
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along main axis
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| declared_or_estimate(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                // Max along cross axis
                children
                    .iter()
                    .map(|c| declared_or_estimate(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size + padding + border
}

fn text_extent(text: &str, is_width: bool) -> u16 {
    if is_width {
        display_width(text) as u16
    } else {
        text.lines().count().max(1) as u16
    }
}

fn border_size(element: &Element) -> u16 {
    if element.style.border == Border::None {
        0
    } else {
        1
    }
}
