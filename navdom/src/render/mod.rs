use crate::buffer::Buffer;
use crate::element::{visible_children, Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Overflow, Rgb, TextStyle};

/// Render the element tree into the buffer.
///
/// Positions come from `layout`. Descendants of scroll containers are laid
/// out in content space, so rendering threads a screen offset (accumulated
/// scroll offsets, negated) and a clip rect down the tree.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let clip = Rect::from_size(buf.width(), buf.height());
    render_element(root, layout, buf, (0, 0), clip);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    offset: (i32, i32),
    clip: Rect,
) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if clip.is_empty() {
        return;
    }

    if let Some(bg) = &element.style.background {
        fill_rect(buf, *rect, offset, clip, bg.to_rgb());
    }

    render_border(element, *rect, buf, offset, clip);

    if element.collapsible && !visible_children(element).is_empty() {
        render_marker(element, *rect, buf, offset, clip);
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element, *rect, buf, offset, clip);
        }
        Content::Link { label, .. } => {
            render_text(label, element, *rect, buf, offset, clip);
        }
        Content::Children(_) => {
            let border = border_size(element);
            let inner = rect.shrink(
                element.padding.top + border,
                element.padding.right + border,
                element.padding.bottom + border,
                element.padding.left + border,
            );

            // Clipping element: children are confined to the inner rect.
            let child_clip =
                if element.overflow_x != Overflow::Visible || element.overflow_y != Overflow::Visible {
                    clip.intersect(translate_clamp(inner, offset))
                } else {
                    clip
                };

            let child_offset = (
                offset.0
                    - if element.overflow_x == Overflow::Scroll {
                        element.scroll_offset.0 as i32
                    } else {
                        0
                    },
                offset.1
                    - if element.overflow_y == Overflow::Scroll {
                        element.scroll_offset.1 as i32
                    } else {
                        0
                    },
            );

            for child in visible_children(element) {
                render_element(child, layout, buf, child_offset, child_clip);
            }
        }
    }
}

/// Translate a content-space rect into screen space, clamping at the origin.
fn translate_clamp(rect: Rect, offset: (i32, i32)) -> Rect {
    let x1 = rect.x as i32 + offset.0;
    let y1 = rect.y as i32 + offset.1;
    let x2 = rect.right() as i32 + offset.0;
    let y2 = rect.bottom() as i32 + offset.1;

    let cx = x1.max(0);
    let cy = y1.max(0);
    let width = (x2 - cx).max(0).min(u16::MAX as i32) as u16;
    let height = (y2 - cy).max(0).min(u16::MAX as i32) as u16;
    Rect::new(cx.min(u16::MAX as i32) as u16, cy.min(u16::MAX as i32) as u16, width, height)
}

fn put(buf: &mut Buffer, clip: Rect, x: i32, y: i32, f: impl FnOnce(&mut crate::buffer::Cell)) {
    if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
        return;
    }
    let (x, y) = (x as u16, y as u16);
    if !clip.contains(x, y) {
        return;
    }
    if let Some(cell) = buf.get_mut(x, y) {
        f(cell);
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, offset: (i32, i32), clip: Rect, bg: Rgb) {
    let screen = clip.intersect(translate_clamp(rect, offset));
    for y in screen.y..screen.bottom() {
        for x in screen.x..screen.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    rect: Rect,
    buf: &mut Buffer,
    offset: (i32, i32),
    clip: Rect,
) {
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = element.style.background.as_ref().map(|c| c.to_rgb());
    let text_style = element.style.text_style;

    let border = border_size(element);
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    let first_line = text.lines().next().unwrap_or("");
    let line = truncate_to_width(first_line, inner.width as usize);

    let mut x = inner.x as i32 + offset.0;
    let y = inner.y as i32 + offset.1;

    for ch in line.chars() {
        let width = char_width(ch);
        if width == 0 {
            continue;
        }

        draw_cell(buf, clip, x, y, ch, fg, explicit_bg, text_style, false);
        if width == 2 {
            draw_cell(buf, clip, x + 1, y, ' ', fg, explicit_bg, text_style, true);
        }
        x += width as i32;
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_cell(
    buf: &mut Buffer,
    clip: Rect,
    x: i32,
    y: i32,
    ch: char,
    fg: Rgb,
    explicit_bg: Option<Rgb>,
    style: TextStyle,
    wide_continuation: bool,
) {
    put(buf, clip, x, y, |cell| {
        cell.char = ch;
        cell.fg = fg;
        if let Some(bg) = explicit_bg {
            cell.bg = bg;
        }
        cell.style = style;
        cell.wide_continuation = wide_continuation;
    });
}

fn render_marker(element: &Element, rect: Rect, buf: &mut Buffer, offset: (i32, i32), clip: Rect) {
    let marker = if element.open { '▾' } else { '▸' };
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    let border = border_size(element);
    let x = rect.x as i32 + border as i32 + offset.0;
    let y = rect.y as i32 + border as i32 + element.padding.top as i32 + offset.1;
    put(buf, clip, x, y, |cell| {
        cell.char = marker;
        cell.fg = fg;
    });
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer, offset: (i32, i32), clip: Rect) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let (dx, dy) = offset;
    let set = |buf: &mut Buffer, x: i32, y: i32, ch: char| {
        put(buf, clip, x, y, |cell| {
            cell.char = ch;
            cell.fg = fg;
            // Preserve existing background
        });
    };

    let left = rect.x as i32 + dx;
    let right = rect.right() as i32 - 1 + dx;
    let top = rect.y as i32 + dy;
    let bottom = rect.bottom() as i32 - 1 + dy;

    // Corners
    set(buf, left, top, tl);
    set(buf, right, top, tr);
    set(buf, left, bottom, bl);
    set(buf, right, bottom, br);

    // Horizontal lines
    for x in (left + 1)..right {
        set(buf, x, top, h);
        set(buf, x, bottom, h);
    }

    // Vertical lines
    for y in (top + 1)..bottom {
        set(buf, left, y, v);
        set(buf, right, y, v);
    }
}

fn border_size(element: &Element) -> u16 {
    if element.style.border == Border::None {
        0
    } else {
        1
    }
}
