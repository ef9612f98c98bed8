use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

fn measured(scroll_offset: u64, client_height: u32) -> Measurements {
    Measurements {
        scroll_offset,
        client_height,
        ..Measurements::default()
    }
}

#[test]
fn scrolled_to_top_renders_first_rows() {
    let opts = WindowOptions::new(10_000, 100);
    let s = compute_state(&measured(0, 800), &opts).unwrap();
    assert_eq!(s.start, 0);
    assert_eq!(s.end, 8);
    assert_eq!(s.top_offset, 0);
    assert_eq!(s.content_height, 1_000_000);
}

#[test]
fn mid_row_scroll_includes_partial_rows() {
    let opts = WindowOptions::new(10_000, 100);
    let s = compute_state(&measured(5050, 800), &opts).unwrap();
    assert_eq!(s.start, 50);
    // 5850 / 100 rounds up: row 58 is partially visible at the bottom.
    assert_eq!(s.end, 59);
    assert_eq!(s.top_offset, 5000);
}

#[test]
fn buffer_is_clamped_at_the_start() {
    let opts = WindowOptions::new(10_000, 100).with_buffer_size(2);
    let s = compute_state(&measured(0, 800), &opts).unwrap();
    assert_eq!(s.range(), 0..10);
    assert_eq!(s.top_offset, 0);
}

#[test]
fn buffer_extends_both_sides() {
    let opts = WindowOptions::new(10_000, 100).with_buffer_size(2);
    let s = compute_state(&measured(5000, 800), &opts).unwrap();
    assert_eq!(s.range(), 48..60);
    assert_eq!(s.top_offset, 4800);
}

#[test]
fn buffer_is_clamped_at_the_end() {
    let opts = WindowOptions::new(100, 10).with_buffer_size(3);
    let s = compute_state(&measured(950, 50), &opts).unwrap();
    assert_eq!(s.range(), 92..100);
}

#[test]
fn empty_list_renders_nothing() {
    let opts = WindowOptions::new(0, 100).with_buffer_size(5);
    for offset in [0u64, 100, 10_000] {
        let s = compute_state(&measured(offset, 800), &opts).unwrap();
        assert_eq!(s.range(), 0..0);
        assert_eq!(s.content_height, 0);
        assert_eq!(s.top_offset, 0);
        assert!(s.is_empty());
    }
}

#[test]
fn viewport_shorter_than_a_row_still_renders_one() {
    let opts = WindowOptions::new(1000, 100);
    let s = compute_state(&measured(120, 30), &opts).unwrap();
    assert_eq!(s.range(), 1..2);

    let opts = opts.with_buffer_size(1);
    let s = compute_state(&measured(120, 30), &opts).unwrap();
    assert_eq!(s.range(), 0..3);
}

#[test]
fn content_below_the_view_is_not_rendered() {
    // The list starts 2000px below the viewport's top; the view only covers 800px.
    let opts = WindowOptions::new(50, 100);
    let m = Measurements {
        client_height: 800,
        content_offset: 2000,
        ..Measurements::default()
    };
    let s = compute_state(&m, &opts).unwrap();
    assert_eq!(s.range(), 0..0);
    assert_eq!(s.content_height, 5000);
}

#[test]
fn content_above_the_view_collapses_to_the_end() {
    let opts = WindowOptions::new(50, 100);
    let m = measured(9000, 800);
    let s = compute_state(&m, &opts).unwrap();
    assert_eq!(s.range(), 50..50);
    assert_eq!(s.top_offset, 5000);
}

#[test]
fn content_offset_shifts_the_window() {
    // A 300px header sits above the list inside the scrolling viewport.
    let opts = WindowOptions::new(1000, 50);
    let m = Measurements {
        scroll_offset: 500,
        client_height: 200,
        viewport_offset: 100,
        content_offset: 400,
        ..Measurements::default()
    };
    let s = compute_state(&m, &opts).unwrap();
    assert_eq!(s.range(), 4..8);
    assert_eq!(s.top_offset, 200);
}

#[test]
fn partially_scrolled_header_starts_at_zero() {
    let opts = WindowOptions::new(1000, 50);
    let m = Measurements {
        scroll_offset: 100,
        client_height: 200,
        content_offset: 300,
        ..Measurements::default()
    };
    // View 100..300 vs content at 300: nothing of the list is visible yet.
    assert_eq!(compute_state(&m, &opts).unwrap().range(), 0..0);

    let m = Measurements {
        scroll_offset: 150,
        ..m
    };
    assert_eq!(compute_state(&m, &opts).unwrap().range(), 0..1);
}

#[test]
fn zero_item_height_is_rejected() {
    let opts = WindowOptions::new(10, 0);
    assert_eq!(opts.validate(), Err(Error::ZeroItemHeight));
    assert!(compute_state(&measured(0, 100), &opts).is_none());
    assert!(WindowOptions::new(10, 1).validate().is_ok());
}

#[test]
fn compute_state_is_idempotent() {
    let opts = WindowOptions::new(777, 13).with_buffer_size(4);
    let m = measured(4321, 333);
    let a = compute_state(&m, &opts);
    let b = compute_state(&m, &opts);
    assert_eq!(a, b);
}

#[test]
fn visual_box_is_clamped_to_content() {
    let content = Extent::new(100, 1000);

    let v = visual_box(Extent::new(0, 50), content);
    assert_eq!(v, VisualBox { top: 0, bottom: 0 });

    let v = visual_box(Extent::new(0, 300), content);
    assert_eq!(v, VisualBox { top: 0, bottom: 200 });

    let v = visual_box(Extent::new(1000, 500), content);
    assert_eq!(
        v,
        VisualBox {
            top: 900,
            bottom: 1000
        }
    );
    assert_eq!(v.height(), 100);

    let v = visual_box(Extent::new(5000, 500), content);
    assert_eq!(
        v,
        VisualBox {
            top: 1000,
            bottom: 1000
        }
    );
}

#[test]
fn boxes_follow_measurements() {
    let view = view_box(250, 400);
    assert_eq!(view.top, 250);
    assert_eq!(view.height, 400);
    assert_eq!(view.bottom(), 650);

    let content = content_box(700, 200, 30, 20);
    assert_eq!(content.top, 500);
    assert_eq!(content.height, 600);
    assert_eq!(content.bottom(), 1100);
}

#[test]
fn huge_lists_saturate_instead_of_overflowing() {
    let opts = WindowOptions::new(usize::MAX, u32::MAX);
    let s = compute_state(&measured(u64::MAX, u32::MAX), &opts).unwrap();
    assert!(s.start <= s.end);
    assert_eq!(s.content_height, u64::MAX);
}

#[test]
fn slice_clamps_to_items() {
    let items: Vec<u32> = (0..10).collect();
    let s = WindowState {
        content_height: 100,
        top_offset: 30,
        start: 3,
        end: 6,
    };
    assert_eq!(s.slice(&items), &[3, 4, 5]);
    assert_eq!(s.len(), 3);

    let stale = WindowState {
        start: 8,
        end: 20,
        ..s
    };
    assert_eq!(stale.slice(&items), &[8, 9]);
    assert!(stale.slice(&items[..4]).is_empty());
}

#[derive(Clone)]
struct Node(Rc<NodeData>);

struct NodeData {
    offset_top: i64,
    parent: Option<Node>,
    scroll_top: Cell<u64>,
    client_height: Cell<Option<u32>>,
}

impl Node {
    fn new(offset_top: i64, parent: Option<&Node>) -> Self {
        Self(Rc::new(NodeData {
            offset_top,
            parent: parent.cloned(),
            scroll_top: Cell::new(0),
            client_height: Cell::new(Some(0)),
        }))
    }
}

impl OffsetNode for Node {
    fn offset_top(&self) -> i64 {
        self.0.offset_top
    }

    fn offset_parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }
}

impl ScrollNode for Node {
    fn scroll_top(&self) -> Option<u64> {
        Some(self.0.scroll_top.get())
    }

    fn client_height(&self) -> Option<u32> {
        self.0.client_height.get()
    }
}

struct Window {
    scroll_y: Cell<u64>,
    inner_height: u32,
}

impl RootWindow for &Window {
    fn scroll_y(&self) -> Option<u64> {
        Some(self.scroll_y.get())
    }

    fn inner_height(&self) -> Option<u32> {
        Some(self.inner_height)
    }
}

#[test]
fn offset_from_root_walks_the_parent_chain() {
    let body = Node::new(8, None);
    let section = Node::new(100, Some(&body));
    let list = Node::new(42, Some(&section));
    assert_eq!(offset_from_root(Some(&list)), 150);
    assert_eq!(offset_from_root(Some(&body)), 8);
    assert_eq!(offset_from_root::<Node>(None), 0);
}

#[test]
fn tree_measure_reads_an_element_viewport() {
    let body = Node::new(0, None);
    let scroller = Node::new(200, Some(&body));
    let content = Node::new(0, Some(&scroller));
    scroller.0.client_height.set(Some(300));
    scroller.0.scroll_top.set(1000);

    let m: TreeMeasure<&Window, Node> =
        TreeMeasure::new(Target::Element(scroller.clone()), content);
    assert_eq!(m.viewport_kind(), ViewportKind::Element);
    assert_eq!(m.viewport_offset_from_root(), Some(200));
    assert_eq!(m.content_offset_from_root(), Some(200));

    let s = compute_state(&m, &WindowOptions::new(1000, 100)).unwrap();
    assert_eq!(s.range(), 10..13);

    scroller.0.client_height.set(None);
    assert!(compute_state(&m, &WindowOptions::new(1000, 100)).is_none());
    assert!(Measurements::capture(&m).is_none());
}

#[test]
fn tree_measure_reads_a_window_viewport() {
    let window = Window {
        scroll_y: Cell::new(0),
        inner_height: 600,
    };
    let body = Node::new(0, None);
    let content = Node::new(400, Some(&body));
    let m = TreeMeasure::new(Target::Window(&window), content);
    assert_eq!(m.viewport_kind(), ViewportKind::Window);

    let opts = WindowOptions::new(100, 50);
    assert_eq!(compute_state(&m, &opts).unwrap().range(), 0..4);

    window.scroll_y.set(1400);
    let s = compute_state(&m, &opts).unwrap();
    assert_eq!(s.range(), 20..32);

    let snapshot = Measurements::capture(&m).unwrap();
    assert_eq!(snapshot.scroll_offset, 1400);
    assert_eq!(snapshot.content_offset, 400);
    assert_eq!(compute_state(&snapshot, &opts), Some(s));
}
