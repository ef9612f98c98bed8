use alloc::boxed::Box;
use alloc::rc::Rc;
use core::time::Duration;

/// A callback that may fire any number of times (event listeners, intervals).
pub type Listener = Rc<dyn Fn()>;

/// A callback that fires at most once (animation frames, timeouts).
pub type Task = Box<dyn FnOnce()>;

/// Where a listener is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventTarget {
    /// The document root.
    Window,
    /// The scrollable element the host was set up for.
    Viewport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Scroll,
    Resize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// The listener never cancels the event, so the host may scroll without waiting for it.
    pub passive: bool,
}

/// The environment a [`crate::Binder`] runs in.
///
/// A host delivers events, schedules animation frames and runs timers, all on one thread.
/// Callbacks must never run synchronously from inside the call that registered them; they are
/// delivered later, from the host's own event loop.
///
/// Ids are returned by value and handed back exactly once to the matching `remove`/`cancel`/
/// `clear` method.
pub trait Host {
    type ListenerId;
    type FrameId;
    type TimerId;

    fn add_listener(
        &self,
        target: EventTarget,
        kind: EventKind,
        options: ListenerOptions,
        listener: Listener,
    ) -> Self::ListenerId;

    fn remove_listener(&self, id: Self::ListenerId);

    /// Whether [`Host::request_animation_frame`] is available.
    ///
    /// When it is not, frames are emulated with [`Host::set_timeout`] and
    /// [`crate::FRAME_FALLBACK_DELAY`].
    fn has_animation_frames(&self) -> bool {
        true
    }

    /// Runs `task` right before the next display refresh.
    fn request_animation_frame(&self, task: Task) -> Self::FrameId;

    fn cancel_animation_frame(&self, id: Self::FrameId);

    fn set_timeout(&self, delay: Duration, task: Task) -> Self::TimerId;

    fn clear_timeout(&self, id: Self::TimerId);

    fn set_interval(&self, period: Duration, listener: Listener) -> Self::TimerId;

    fn clear_interval(&self, id: Self::TimerId);
}
