//! Minimal docs-browser host: a navigation sidebar next to a placeholder
//! page pane, driven by a JSON navigation forest.
//!
//! Click a section's summary line to toggle it, scroll with the mouse
//! wheel, quit with `q` or Escape.

use std::collections::HashSet;
use std::fs::File;

use docnav::{build_sidebar, load_nav, scroll_to_current, Resolver};
use navdom::{
    convert_events, find_element, find_element_mut, Border, Color, Edges, Element, Event, Key,
    Overflow, ScrollState, Size, Style, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const SIDEBAR_ID: &str = "sidebar";

const NAV_JSON: &str = r#"[
    {"title": "Overview", "href": "index.html"},
    {"title": "Guide", "href": "guide/index.html", "children": [
        {"title": "Introduction", "href": "guide/intro.html"},
        {"title": "Setup", "href": "guide/setup.html", "children": [
            {"title": "Requirements", "href": "guide/setup/requirements.html"},
            {"title": "Installation", "href": "guide/setup/install.html"},
            {"title": "Configuration", "href": "guide/setup/config.html"}
        ]},
        {"title": "First Steps", "href": "guide/first-steps.html"}
    ]},
    {"title": "Reference", "children": [
        {"title": "Command Line", "href": "reference/cli.html"},
        {"title": "File Formats", "href": "reference/formats.html"},
        {"title": "Environment", "href": "reference/environment.html"}
    ]},
    {"title": "API", "href": "api/index.html", "children": [
        {"title": "Core", "href": "api/core.html"},
        {"title": "Widgets", "href": "api/widgets.html"},
        {"title": "Events", "href": "api/events.html"},
        {"title": "Layout", "href": "api/layout.html"}
    ]},
    {"title": "FAQ", "href": "faq.html"},
    {"title": "Changelog", "href": "changelog.html"}
]"#;

fn main() -> std::io::Result<()> {
    let log_file = File::create("docs_browser.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let forest = load_nav(NAV_JSON).expect("navigation data");
    let resolver = Resolver::new("/docs/");
    let current_address = "/docs/guide/setup/install.html#download";

    let mut term = Terminal::new()?;
    let mut scroll = ScrollState::new();
    // Sections the user has toggled away from the state the builder chose.
    let mut toggled: HashSet<String> = HashSet::new();
    let mut centered = false;

    loop {
        let offset = scroll.get(SIDEBAR_ID);
        let mut sidebar = Element::col()
            .id(SIDEBAR_ID)
            .width(Size::Fixed(34))
            .height(Size::Fill)
            .padding(Edges::all(1))
            .overflow_y(Overflow::Scroll)
            .scroll_offset(offset.x, offset.y)
            .style(
                Style::new()
                    .border(Border::Single)
                    .foreground(Color::rgb(190, 190, 190)),
            );

        let current_id = build_sidebar(&mut sidebar, &forest, &resolver, current_address);

        for id in &toggled {
            if let Some(section) = find_element_mut(&mut sidebar, id) {
                section.open = !section.open;
            }
        }

        let page = Element::col()
            .id("page")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::all(2))
            .gap(1)
            .child(Element::text("Installation").style(Style::new().bold()))
            .child(Element::text("Page content is rendered by another component."));

        let root = Element::row()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .child(sidebar)
            .child(page);

        term.render(&root)?;

        // One-shot: geometry is only stable once the whole tree has been
        // laid out, so the centering runs after the first full render.
        if !centered {
            centered = true;
            scroll_to_current(&mut scroll, term.layout(), SIDEBAR_ID, current_id.as_deref());
            continue;
        }

        let raw = term.poll(None)?;
        let events = convert_events(&raw, &root, term.layout());
        scroll.process_events(&events, &root, term.layout());

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => {
                    return Ok(());
                }

                Event::Click {
                    target: Some(id), ..
                } => {
                    // Summary clicks toggle their section, the native
                    // expand/collapse affordance.
                    if let Some(section_id) = id.strip_suffix("-summary") {
                        if find_element(&root, section_id).is_some()
                            && !toggled.remove(section_id)
                        {
                            toggled.insert(section_id.to_string());
                        }
                    }
                }

                _ => {}
            }
        }
    }
}
