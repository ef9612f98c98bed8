use alloc::rc::Rc;
use core::cell::Cell;
use core::time::Duration;

use viewport::{ViewportKind, ViewportSize};

use crate::{EventKind, EventTarget, Host, Listener, ListenerOptions};

/// Default period of the element-resize poll.
pub const DEFAULT_RESIZE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Remembers the last seen viewport fingerprint.
#[derive(Debug)]
pub(crate) struct ResizeProbe {
    last: Cell<Option<ViewportSize>>,
}

impl ResizeProbe {
    pub(crate) fn new(initial: Option<ViewportSize>) -> Self {
        Self {
            last: Cell::new(initial),
        }
    }

    /// Records `now` and reports whether it differs from the previous fingerprint.
    ///
    /// An unavailable measurement is never a change.
    pub(crate) fn changed(&self, now: Option<ViewportSize>) -> bool {
        let Some(now) = now else {
            return false;
        };
        if self.last.get() == Some(now) {
            return false;
        }
        self.last.set(Some(now));
        true
    }
}

/// Resize notifications for a viewport.
///
/// Window resizes arrive as native events. A boxed element emits no resize event, so for
/// [`ViewportKind::Element`] the watch also polls the element's size and treats a change
/// like a resize.
pub(crate) struct ResizeWatch<H: Host> {
    window: H::ListenerId,
    poll: Option<H::TimerId>,
}

impl<H: Host> ResizeWatch<H> {
    pub(crate) fn start(
        host: &H,
        viewport: ViewportKind,
        poll_interval: Duration,
        fingerprint: impl Fn() -> Option<ViewportSize> + 'static,
        on_resize: Listener,
    ) -> Self {
        let window = host.add_listener(
            EventTarget::Window,
            EventKind::Resize,
            ListenerOptions::default(),
            Rc::clone(&on_resize),
        );

        let poll = match viewport {
            ViewportKind::Window => None,
            ViewportKind::Element => {
                let probe = ResizeProbe::new(fingerprint());
                let tick: Listener = Rc::new(move || {
                    if probe.changed(fingerprint()) {
                        vtrace!("element resize detected by poll");
                        on_resize();
                    }
                });
                Some(host.set_interval(poll_interval, tick))
            }
        };

        Self { window, poll }
    }

    pub(crate) fn stop(self, host: &H) {
        host.remove_listener(self.window);
        if let Some(id) = self.poll {
            host.clear_interval(id);
        }
    }
}
