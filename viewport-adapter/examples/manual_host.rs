// Example: drive a binder from a hand-pumped event loop.
use std::cell::Cell;
use std::rc::Rc;

use viewport::{Measure, WindowOptions};
use viewport_adapter::{BinderConfig, Controller, EventKind, EventTarget, ManualHost};

#[derive(Clone, Default)]
struct Pane {
    scroll: Rc<Cell<u64>>,
}

impl Measure for Pane {
    fn scroll_offset(&self) -> Option<u64> {
        Some(self.scroll.get())
    }

    fn client_height(&self) -> Option<u32> {
        Some(40)
    }

    fn viewport_offset_from_root(&self) -> Option<i64> {
        Some(0)
    }

    fn content_offset_from_root(&self) -> Option<i64> {
        Some(0)
    }
}

fn main() {
    let host = ManualHost::new();
    let pane = Pane::default();
    let config = BinderConfig::new(WindowOptions::new(10_000, 1).with_buffer_size(2), |s| {
        println!("render rows {:?} at y={}", s.range(), s.top_offset);
    });
    let Ok(mut controller) = Controller::new(host.clone(), pane.clone(), config) else {
        return;
    };

    for step in 1..=5u64 {
        pane.scroll.set(step * 7);
        host.dispatch(EventTarget::Window, EventKind::Scroll);
    }
    host.run_frames();

    if controller.set_total(30).is_ok() {
        println!("options={:?}", controller.options());
    }
    controller.dispose();
}
