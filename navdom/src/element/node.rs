use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Edges, Overflow, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub padding: Edges,

    // Flex container
    pub direction: Direction,
    pub gap: u16,

    // Overflow (separate X/Y for independent control)
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub scroll_offset: (u16, u16),

    // Disclosure state. A collapsible element lays out and renders only its
    // first child (the summary line) while closed.
    pub collapsible: bool,
    pub open: bool,

    // Interaction
    pub clickable: bool,

    // Visual
    pub style: Style,

    // Custom data storage (class markers, handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            scroll_offset: (0, 0),
            collapsible: false,
            open: false,
            clickable: false,
            style: Style::default(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: generate_id("link"),
            content: Content::Link {
                label: label.into(),
                href: href.into(),
            },
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// A collapsible section: first child is the summary line, the rest is
    /// the body. The left padding leaves a gutter for the disclosure marker.
    pub fn details() -> Self {
        Self {
            id: generate_id("details"),
            direction: Direction::Column,
            padding: Edges::left(2),
            collapsible: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    // Overflow
    /// Set both horizontal and vertical overflow behavior.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self.overflow_y = overflow;
        self
    }

    /// Set horizontal overflow behavior.
    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self
    }

    /// Set vertical overflow behavior.
    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }

    pub fn scroll_offset(mut self, x: u16, y: u16) -> Self {
        self.scroll_offset = (x, y);
        self
    }

    // Disclosure
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Append a child in place. This is the mutating counterpart of
    /// [`child`](Self::child) for callers that hold a live container.
    pub fn append(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
    }
}
