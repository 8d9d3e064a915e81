//! The sidebar builder: recursive construction of the navigation widget
//! tree, plus the post-build scroll that brings the current page into view.

use navdom::{Edges, Element, LayoutResult, ScrollState, Style};

use crate::address::{same_page, strip_fragment, Resolver};
use crate::nav::NavItem;

/// Data key carrying the visual-state markers, the element-tree analog of a
/// CSS class.
pub const CLASS_KEY: &str = "class";
/// Marker for the widget whose address matches the current page.
pub const CLASS_CURRENT: &str = "current";
/// Marker for sections on the path down to the current page.
pub const CLASS_CURRENT_PATH: &str = "current-path";

/// State owned by a single render pass: the resolver, the page being looked
/// for, and the marker for the one widget that matched it.
pub struct RenderPass<'a> {
    resolver: &'a Resolver,
    current_page: String,
    current_id: Option<String>,
    path: Vec<usize>,
}

impl<'a> RenderPass<'a> {
    pub fn new(resolver: &'a Resolver, current_address: &str) -> Self {
        Self {
            resolver,
            current_page: strip_fragment(current_address).to_string(),
            current_id: None,
            path: Vec::new(),
        }
    }

    /// Id of the widget marked as the current page, if one matched.
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Stable id for the widget at the current tree position, so repeated
    /// passes over the same forest produce identical trees.
    fn widget_id(&self, part: &str) -> String {
        let mut id = String::from("nav");
        for index in &self.path {
            id.push('-');
            id.push_str(&index.to_string());
        }
        if !part.is_empty() {
            id.push('-');
            id.push_str(part);
        }
        id
    }
}

/// Build the sidebar into `container`, returning the current widget's id.
///
/// Top-level entries render in order against the same container, with one
/// marker threaded through the whole pass; the first match wins.
pub fn build_sidebar(
    container: &mut Element,
    forest: &[NavItem],
    resolver: &Resolver,
    current_address: &str,
) -> Option<String> {
    let mut pass = RenderPass::new(resolver, current_address);

    for (index, item) in forest.iter().enumerate() {
        pass.path.push(index);
        render_node(container, item, &mut pass);
        pass.path.pop();
    }

    match &pass.current_id {
        Some(id) => log::debug!("[sidebar] current page entry: {id}"),
        None => log::debug!("[sidebar] current page not in navigation"),
    }
    pass.current_id
}

/// Render one navigation entry into `container`.
///
/// Returns whether this subtree contains the current page, so the caller
/// can mark itself open. All structure goes into `container`; the boolean
/// is the only other output.
pub fn render_node(container: &mut Element, node: &NavItem, pass: &mut RenderPass) -> bool {
    // Entry line: a link for addressable entries, a plain label otherwise.
    let (entry, is_current) = match node.link() {
        Some(href) => {
            let resolved = pass.resolver.resolve(href);
            let id = pass.widget_id("link");
            let is_current = same_page(&resolved, &pass.current_page) && pass.current_id.is_none();

            let mut link = Element::link(&node.title, resolved).id(&id);
            if is_current {
                link = link
                    .data(CLASS_KEY, CLASS_CURRENT)
                    .style(Style::new().bold().underline());
                pass.current_id = Some(id);
            }
            (link, is_current)
        }
        None => (
            Element::text(&node.title)
                .id(pass.widget_id("label"))
                .style(Style::new().dim()),
            false,
        ),
    };

    let mut contains_current = is_current;

    // Childless entries are leaves, addressable or not.
    if node.children.is_empty() {
        container.append(entry);
        return contains_current;
    }

    // Entries with children become a collapsible section: a summary line
    // holding the entry, plus an indented body with the child widgets.
    let mut summary = Element::row()
        .id(pass.widget_id("summary"))
        .clickable(true)
        .child(entry);
    if is_current {
        summary = summary.data(CLASS_KEY, CLASS_CURRENT);
    }

    let mut body = Element::col()
        .id(pass.widget_id("body"))
        .padding(Edges::left(2));
    for (index, child) in node.children.iter().enumerate() {
        pass.path.push(index);
        if render_node(&mut body, child, pass) {
            contains_current = true;
        }
        pass.path.pop();
    }

    let mut section = Element::details()
        .id(pass.widget_id(""))
        .child(summary)
        .child(body);
    if contains_current {
        section = section.open(true).data(CLASS_KEY, CLASS_CURRENT_PATH);
    }

    container.append(section);
    contains_current
}

/// Center the current-page widget in the sidebar viewport on both axes,
/// with no animated transition. A no-op when nothing matched or the
/// geometry is missing. Must run after the whole tree has been laid out,
/// so the target's position is final.
pub fn scroll_to_current(
    scroll: &mut ScrollState,
    layout: &LayoutResult,
    sidebar_id: &str,
    current_id: Option<&str>,
) {
    let Some(current_id) = current_id else {
        return;
    };
    let Some(target) = layout.get(current_id) else {
        return;
    };
    let Some(viewport) = layout.viewport(sidebar_id) else {
        return;
    };
    let Some(content) = layout.content_size(sidebar_id) else {
        return;
    };

    scroll.center_on(sidebar_id, *target, viewport, content);
}
