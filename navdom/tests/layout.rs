use navdom::{Edges, Element, Overflow, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> navdom::LayoutResult {
    navdom::layout::layout(root, Rect::from_size(width, height))
}

// ============================================================================
// Flow Tests
// ============================================================================

#[test]
fn test_column_stacks_children_with_gap() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .gap(1)
        .child(
            Element::box_()
                .id("a")
                .width(Size::Fill)
                .height(Size::Fixed(2)),
        )
        .child(
            Element::box_()
                .id("b")
                .width(Size::Fill)
                .height(Size::Fixed(3)),
        );

    let layout = layout_root(&root, 40, 40);

    let a = layout.get("a").unwrap();
    assert_eq!((a.x, a.y, a.width, a.height), (0, 0, 20, 2));

    let b = layout.get("b").unwrap();
    assert_eq!(b.y, 3, "b starts after a plus gap");
    assert_eq!(b.height, 3);
}

#[test]
fn test_padding_offsets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .padding(Edges::all(2))
        .child(
            Element::box_()
                .id("child")
                .width(Size::Fill)
                .height(Size::Fixed(1)),
        );

    let layout = layout_root(&root, 40, 40);
    let child = layout.get("child").unwrap();

    assert_eq!(child.x, 2);
    assert_eq!(child.y, 2);
    assert_eq!(child.width, 16, "padding shrinks available width");
}

#[test]
fn test_auto_sizes_from_text() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(5))
        .child(Element::text("hello").id("text"));

    let layout = layout_root(&root, 40, 40);
    let text = layout.get("text").unwrap();

    assert_eq!(text.width, 5);
    assert_eq!(text.height, 1);
}

#[test]
fn test_fill_splits_remaining_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(Element::box_().id("a").height(Size::Fill))
        .child(Element::box_().id("b").height(Size::Fixed(4)))
        .child(Element::box_().id("c").height(Size::Fill));

    let layout = layout_root(&root, 40, 40);

    assert_eq!(layout.get("a").unwrap().height, 3);
    assert_eq!(layout.get("b").unwrap().height, 4);
    assert_eq!(layout.get("c").unwrap().height, 3);
    assert_eq!(layout.get("c").unwrap().y, 7);
}

#[test]
fn test_row_places_children_left_to_right() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(3))
        .gap(2)
        .child(Element::text("ab").id("a"))
        .child(Element::text("cde").id("b"));

    let layout = layout_root(&root, 40, 40);

    let a = layout.get("a").unwrap();
    assert_eq!((a.x, a.width, a.height), (0, 2, 1));

    let b = layout.get("b").unwrap();
    assert_eq!(b.x, 4, "b starts after a plus gap");
    assert_eq!(b.width, 3);
}

// ============================================================================
// Collapsible (details) Tests
// ============================================================================

fn section(open: bool) -> Element {
    Element::details()
        .id("section")
        .open(open)
        .child(
            Element::row()
                .id("summary")
                .child(Element::text("Guide").id("title")),
        )
        .child(
            Element::col()
                .id("body")
                .padding(Edges::left(2))
                .child(Element::text("Intro").id("intro")),
        )
}

#[test]
fn test_closed_section_lays_out_summary_only() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .child(section(false));

    let layout = layout_root(&root, 40, 40);

    let rect = layout.get("section").unwrap();
    assert_eq!(rect.height, 1, "closed section is one summary line tall");

    assert!(layout.get("summary").is_some());
    assert!(layout.get("body").is_none(), "closed body is not laid out");
    assert!(layout.get("intro").is_none());
}

#[test]
fn test_open_section_lays_out_body_indented() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .child(section(true));

    let layout = layout_root(&root, 40, 40);

    let rect = layout.get("section").unwrap();
    assert_eq!(rect.height, 2, "summary plus one body line");

    let summary = layout.get("summary").unwrap();
    assert_eq!(summary.x, 2, "summary sits right of the marker gutter");
    assert_eq!(summary.y, 0);

    let intro = layout.get("intro").unwrap();
    assert_eq!(intro.x, 4, "body entries indent past the summary");
    assert_eq!(intro.y, 1);
}

// ============================================================================
// Scroll Container Tests
// ============================================================================

#[test]
fn test_scroll_container_measures_content() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .overflow_y(Overflow::Scroll)
        .children((0..10).map(|i| Element::text(format!("item {i}")).id(format!("item-{i}"))));

    let layout = layout_root(&root, 20, 20);

    assert_eq!(layout.viewport_size("root"), Some((10, 4)));
    assert_eq!(layout.content_size("root"), Some((6, 10)));

    // Children keep their content-space positions past the viewport.
    let seventh = layout.get("item-7").unwrap();
    assert_eq!(seventh.y, 7);
    assert_eq!(seventh.height, 1);
}

#[test]
fn test_non_scroll_container_clamps_overflow() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .children((0..5).map(|i| Element::text(format!("i{i}")).id(format!("i-{i}"))));

    let layout = layout_root(&root, 20, 20);

    let last = layout.get("i-4").unwrap();
    assert_eq!(last.height, 0, "children past the container get no space");
    assert_eq!(layout.content_size("root"), None);
}
