use docnav::sidebar::{CLASS_CURRENT, CLASS_CURRENT_PATH, CLASS_KEY};
use docnav::{build_sidebar, load_nav, scroll_to_current, NavItem, Resolver};
use navdom::{Content, Element, Overflow, Rect, ScrollState, Size};

fn build(forest: &[NavItem], current: &str) -> (Element, Option<String>) {
    let resolver = Resolver::new("");
    let mut container = Element::col().id("sidebar").overflow_y(Overflow::Scroll);
    let current_id = build_sidebar(&mut container, forest, &resolver, current);
    (container, current_id)
}

fn guide_forest() -> Vec<NavItem> {
    load_nav(
        r#"[
            {"title": "Guide", "children": [
                {"title": "Intro", "href": "/guide/intro"},
                {"title": "Setup", "href": "/guide/setup"}
            ]},
            {"title": "API", "href": "/api"}
        ]"#,
    )
    .unwrap()
}

fn children_of(element: &Element) -> &[Element] {
    match &element.content {
        Content::Children(children) => children,
        _ => &[],
    }
}

fn collect_class<'a>(element: &'a Element, class: &str, out: &mut Vec<&'a Element>) {
    if element.get_data(CLASS_KEY).map(String::as_str) == Some(class) {
        out.push(element);
    }
    for child in children_of(element) {
        collect_class(child, class, out);
    }
}

fn marked<'a>(element: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect_class(element, class, &mut out);
    out
}

fn collect_sections<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    if element.collapsible {
        out.push(element);
    }
    for child in children_of(element) {
        collect_sections(child, out);
    }
}

/// Leaf widgets: links or labels appended directly to a container or a
/// section body, in render order.
fn collect_leaves<'a>(container: &'a Element, out: &mut Vec<&'a Element>) {
    for child in children_of(container) {
        if child.collapsible {
            if let Some(body) = children_of(child).get(1) {
                collect_leaves(body, out);
            }
        } else if matches!(child.content, Content::Link { .. } | Content::Text(_)) {
            out.push(child);
        }
    }
}

fn label_of(element: &Element) -> &str {
    element.content.label().unwrap_or("")
}

// ============================================================================
// Structure Tests
// ============================================================================

#[test]
fn test_leaf_entries_preserve_count_and_order() {
    let forest = guide_forest();
    let (sidebar, _) = build(&forest, "/guide/setup");

    let mut leaves = Vec::new();
    collect_leaves(&sidebar, &mut leaves);

    let labels: Vec<&str> = leaves.iter().map(|el| label_of(el)).collect();
    assert_eq!(labels, vec!["Intro", "Setup", "API"]);
}

#[test]
fn test_grouping_entry_renders_label_not_link() {
    let forest = guide_forest();
    let (sidebar, _) = build(&forest, "/guide/setup");

    let label = navdom::find_element(&sidebar, "nav-0-label").unwrap();
    assert_eq!(label.content, Content::Text("Guide".to_string()));
    assert!(!label.clickable, "grouping entries are not links");

    let summary = navdom::find_element(&sidebar, "nav-0-summary").unwrap();
    assert!(summary.clickable, "the summary line still toggles the section");
}

#[test]
fn test_entry_without_anything_degrades_to_empty_label() {
    let forest = load_nav("[{}]").unwrap();
    let (sidebar, current_id) = build(&forest, "/anywhere");

    let children = children_of(&sidebar);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].content, Content::Text(String::new()));
    assert_eq!(current_id, None);
}

// ============================================================================
// Current-Page Tests
// ============================================================================

#[test]
fn test_current_inside_section() {
    let forest = guide_forest();
    let (sidebar, current_id) = build(&forest, "/guide/setup");

    assert_eq!(current_id.as_deref(), Some("nav-0-1-link"));

    let current = marked(&sidebar, CLASS_CURRENT);
    assert_eq!(current.len(), 1, "exactly one widget carries the marker");
    assert_eq!(label_of(current[0]), "Setup");

    let guide = navdom::find_element(&sidebar, "nav-0").unwrap();
    assert!(guide.open, "the section holding the current page is open");
    assert_eq!(
        guide.get_data(CLASS_KEY).map(String::as_str),
        Some(CLASS_CURRENT_PATH)
    );

    let intro = navdom::find_element(&sidebar, "nav-0-0-link").unwrap();
    assert_eq!(intro.get_data(CLASS_KEY), None);
    let api = navdom::find_element(&sidebar, "nav-1-link").unwrap();
    assert_eq!(api.get_data(CLASS_KEY), None);
}

#[test]
fn test_unknown_page_marks_nothing() {
    let forest = guide_forest();
    let (sidebar, current_id) = build(&forest, "/unknown");

    assert_eq!(current_id, None);
    assert!(marked(&sidebar, CLASS_CURRENT).is_empty());

    let mut sections = Vec::new();
    collect_sections(&sidebar, &mut sections);
    assert!(!sections.is_empty());
    for section in sections {
        assert!(!section.open, "{} defaults to closed", section.id);
    }
}

#[test]
fn test_ancestors_open_others_closed() {
    let forest = load_nav(
        r#"[
            {"title": "A", "children": [
                {"title": "B", "children": [{"title": "Deep", "href": "/a/b/deep"}]},
                {"title": "C", "children": [{"title": "Other", "href": "/a/c/other"}]}
            ]},
            {"title": "D", "children": [{"title": "E", "href": "/d/e"}]}
        ]"#,
    )
    .unwrap();

    let (sidebar, current_id) = build(&forest, "/a/b/deep");
    assert_eq!(current_id.as_deref(), Some("nav-0-0-0-link"));

    let mut sections = Vec::new();
    collect_sections(&sidebar, &mut sections);

    for section in &sections {
        let on_path = section.id == "nav-0" || section.id == "nav-0-0";
        assert_eq!(
            section.open, on_path,
            "{} open only when it is an ancestor of the current page",
            section.id
        );
        let tagged = section.get_data(CLASS_KEY).map(String::as_str)
            == Some(CLASS_CURRENT_PATH);
        assert_eq!(tagged, on_path);
    }
}

#[test]
fn test_section_with_own_page_marks_summary() {
    let forest = load_nav(
        r#"[
            {"title": "Guide", "href": "/guide/", "children": [
                {"title": "Intro", "href": "/guide/intro"}
            ]}
        ]"#,
    )
    .unwrap();

    let (sidebar, current_id) = build(&forest, "/guide/");
    assert_eq!(current_id.as_deref(), Some("nav-0-link"));

    let section = navdom::find_element(&sidebar, "nav-0").unwrap();
    assert!(section.open);

    let summary = navdom::find_element(&sidebar, "nav-0-summary").unwrap();
    assert_eq!(
        summary.get_data(CLASS_KEY).map(String::as_str),
        Some(CLASS_CURRENT)
    );

    let intro = navdom::find_element(&sidebar, "nav-0-0-link").unwrap();
    assert_eq!(intro.get_data(CLASS_KEY), None);
}

#[test]
fn test_idempotent_rebuild() {
    let forest = guide_forest();

    let (first, first_id) = build(&forest, "/guide/setup");
    let (second, second_id) = build(&forest, "/guide/setup");

    assert_eq!(first_id, second_id);
    assert_eq!(first, second, "identical inputs produce identical trees");
}

// ============================================================================
// Address Comparison Tests
// ============================================================================

#[test]
fn test_current_address_fragment_is_ignored() {
    let forest = load_nav(r#"[{"title": "Page", "href": "https://x/y"}]"#).unwrap();
    let (sidebar, current_id) = build(&forest, "https://x/y#frag1");

    assert_eq!(current_id.as_deref(), Some("nav-0-link"));
    assert_eq!(marked(&sidebar, CLASS_CURRENT).len(), 1);
}

#[test]
fn test_entry_address_fragments_are_ignored_first_match_wins() {
    let forest = load_nav(
        r#"[
            {"title": "P1", "href": "https://x/y#frag1"},
            {"title": "P2", "href": "https://x/y#frag2"}
        ]"#,
    )
    .unwrap();

    let (sidebar, current_id) = build(&forest, "https://x/y");

    assert_eq!(current_id.as_deref(), Some("nav-0-link"));
    let current = marked(&sidebar, CLASS_CURRENT);
    assert_eq!(current.len(), 1);
    assert_eq!(label_of(current[0]), "P1");
}

#[test]
fn test_resolver_prefix_applies_to_entries() {
    let forest = load_nav(r#"[{"title": "Intro", "href": "guide/intro.html"}]"#).unwrap();
    let resolver = Resolver::new("/docs/");

    let mut sidebar = Element::col().id("sidebar");
    let current_id = build_sidebar(
        &mut sidebar,
        &forest,
        &resolver,
        "/docs/guide/intro.html",
    );

    assert_eq!(current_id.as_deref(), Some("nav-0-link"));
}

#[test]
fn test_resolver_with_absolute_base_url() {
    let resolver = Resolver::new("https://docs.example.com/v1/");
    assert_eq!(
        resolver.resolve("guide/intro.html"),
        "https://docs.example.com/v1/guide/intro.html"
    );
}

#[test]
fn test_strip_fragment() {
    assert_eq!(docnav::strip_fragment("/guide/setup#install"), "/guide/setup");
    assert_eq!(docnav::strip_fragment("/guide/setup"), "/guide/setup");
    assert!(docnav::same_page("https://x/y#f1", "https://x/y#f2"));
}

// ============================================================================
// Scroll-Into-View Tests
// ============================================================================

fn tall_forest() -> Vec<NavItem> {
    (0..20)
        .map(|i| NavItem::page(format!("p{i}"), format!("/p{i}")))
        .collect()
}

fn tall_sidebar(current: &str) -> (Element, Option<String>) {
    let resolver = Resolver::new("");
    let mut container = Element::col()
        .id("sidebar")
        .width(Size::Fixed(12))
        .height(Size::Fixed(8))
        .overflow_y(Overflow::Scroll);
    let current_id = build_sidebar(&mut container, &tall_forest(), &resolver, current);
    (container, current_id)
}

#[test]
fn test_scroll_centers_current_entry() {
    let (sidebar, current_id) = tall_sidebar("/p12");
    assert_eq!(current_id.as_deref(), Some("nav-12-link"));

    let layout = navdom::layout::layout(&sidebar, Rect::from_size(12, 8));
    let mut scroll = ScrollState::new();
    scroll_to_current(&mut scroll, &layout, "sidebar", current_id.as_deref());

    let offset = scroll.get("sidebar");
    assert_eq!(offset.y, 8, "entry 12 sits at the middle of an 8-row viewport");
    assert_eq!(offset.x, 0);
}

#[test]
fn test_no_scroll_when_current_absent() {
    let (sidebar, current_id) = tall_sidebar("/nowhere");
    assert_eq!(current_id, None);

    let layout = navdom::layout::layout(&sidebar, Rect::from_size(12, 8));
    let mut scroll = ScrollState::new();
    scroll_to_current(&mut scroll, &layout, "sidebar", current_id.as_deref());

    let offset = scroll.get("sidebar");
    assert_eq!((offset.x, offset.y), (0, 0));
}
