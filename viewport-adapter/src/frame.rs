use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;

use crate::{Host, Task};

/// Delay used to emulate an animation frame on hosts without one (roughly 60 Hz).
pub const FRAME_FALLBACK_DELAY: Duration = Duration::from_millis(15);

enum PendingFrame<H: Host> {
    Animation(H::FrameId),
    Timeout(H::TimerId),
}

struct Inner<H: Host> {
    host: H,
    callback: Box<dyn Fn()>,
    pending: RefCell<Option<PendingFrame<H>>>,
}

impl<H: Host> Inner<H> {
    fn run(&self) {
        // A frame that is no longer tracked was cancelled after the host queued it.
        let pending = self.pending.borrow_mut().take();
        if pending.is_none() {
            return;
        }
        (self.callback)();
    }

    fn cancel(&self) -> bool {
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(PendingFrame::Animation(id)) => self.host.cancel_animation_frame(id),
            Some(PendingFrame::Timeout(id)) => self.host.clear_timeout(id),
            None => return false,
        }
        true
    }
}

/// Coalesces requests into at most one callback per animation frame.
///
/// - `request` schedules a frame unless one is already pending.
/// - When the frame fires, the pending flag is cleared *before* the callback runs, so the
///   callback may request the next frame.
/// - `cancel` is safe with nothing pending; dropping the debounce cancels as well.
pub struct FrameDebounce<H: Host> {
    inner: Rc<Inner<H>>,
}

impl<H: Host + 'static> FrameDebounce<H> {
    pub fn new(host: H, callback: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                callback: Box::new(callback),
                pending: RefCell::new(None),
            }),
        }
    }

    /// Schedules the callback for the next frame.
    ///
    /// Returns `false` (and does nothing) if a frame is already pending.
    pub fn request(&self) -> bool {
        if self.is_pending() {
            return false;
        }

        let weak: Weak<Inner<H>> = Rc::downgrade(&self.inner);
        let task: Task = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.run();
            }
        });

        let host = &self.inner.host;
        let pending = if host.has_animation_frames() {
            PendingFrame::Animation(host.request_animation_frame(task))
        } else {
            PendingFrame::Timeout(host.set_timeout(FRAME_FALLBACK_DELAY, task))
        };
        *self.inner.pending.borrow_mut() = Some(pending);
        true
    }
}

impl<H: Host> FrameDebounce<H> {
    /// Cancels the pending frame, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        self.inner.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

impl<H: Host> Drop for FrameDebounce<H> {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

impl<H: Host> fmt::Debug for FrameDebounce<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameDebounce")
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}
