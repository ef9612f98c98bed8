use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::fmt;
use core::time::Duration;

use viewport::{Measure, ViewportKind, WindowOptions, WindowState, compute_state};

use crate::resize::ResizeWatch;
use crate::{
    BindError, DEFAULT_RESIZE_POLL_INTERVAL, EventKind, EventTarget, FrameDebounce, Host,
    Listener, ListenerOptions,
};

/// Receives every pushed [`WindowState`].
pub type UpdateCallback = Rc<dyn Fn(WindowState)>;

/// Configuration for a [`Binder`].
///
/// A binder never changes its configuration. To apply new options, dispose it and bind a new
/// one (or let [`crate::Controller`] do that).
#[derive(Clone)]
pub struct BinderConfig {
    pub viewport: ViewportKind,
    pub options: WindowOptions,
    /// Period of the element-size poll (only used for [`ViewportKind::Element`]).
    pub resize_poll_interval: Duration,
    pub update: UpdateCallback,
}

impl BinderConfig {
    pub fn new(options: WindowOptions, update: impl Fn(WindowState) + 'static) -> Self {
        Self {
            viewport: ViewportKind::Window,
            options,
            resize_poll_interval: DEFAULT_RESIZE_POLL_INTERVAL,
            update: Rc::new(update),
        }
    }

    pub fn with_viewport(mut self, viewport: ViewportKind) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_options(mut self, options: WindowOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_resize_poll_interval(mut self, interval: Duration) -> Self {
        self.resize_poll_interval = interval;
        self
    }

    pub fn with_update(mut self, update: impl Fn(WindowState) + 'static) -> Self {
        self.update = Rc::new(update);
        self
    }

    pub fn validate(&self) -> Result<(), BindError> {
        self.options.validate()?;
        if self.resize_poll_interval.is_zero() {
            return Err(BindError::ZeroPollInterval);
        }
        Ok(())
    }
}

impl fmt::Debug for BinderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinderConfig")
            .field("viewport", &self.viewport)
            .field("options", &self.options)
            .field("resize_poll_interval", &self.resize_poll_interval)
            .finish_non_exhaustive()
    }
}

/// Lifecycle of a [`Binder`]. `Disposed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Constructed,
    Active,
    Disposed,
}

struct Shared<H: Host, M> {
    host: H,
    measure: M,
    viewport: ViewportKind,
    options: WindowOptions,
    update: UpdateCallback,
    phase: Cell<Phase>,
    frame: FrameDebounce<H>,
    scroll: RefCell<Option<H::ListenerId>>,
    resize: RefCell<Option<ResizeWatch<H>>>,
    last: Cell<Option<WindowState>>,
}

impl<H: Host + 'static, M: Measure> Shared<H, M> {
    fn request(&self) -> bool {
        if self.phase.get() != Phase::Active {
            return false;
        }
        self.frame.request()
    }

    fn push(&self) {
        if self.phase.get() != Phase::Active {
            vtrace!(phase = ?self.phase.get(), "push skipped: binder is not active");
            return;
        }
        let Some(state) = compute_state(&self.measure, &self.options) else {
            vtrace!("push skipped: measurement unavailable");
            return;
        };
        self.last.set(Some(state));
        (self.update)(state);
    }
}

/// Binds the windowing computation to a host's scroll and resize events.
///
/// On creation the binder attaches its listeners and pushes the initial state synchronously.
/// Afterwards every scroll/resize event requests a frame; bursts of events collapse into one
/// recomputation per frame, measured when the frame fires. After [`Binder::dispose`] (or drop)
/// no further update is pushed.
pub struct Binder<H: Host, M> {
    shared: Rc<Shared<H, M>>,
}

impl<H: Host + Clone + 'static, M: Measure + 'static> Binder<H, M> {
    pub fn new(host: H, measure: M, config: BinderConfig) -> Result<Self, BindError> {
        config.validate()?;
        let BinderConfig {
            viewport,
            options,
            resize_poll_interval,
            update,
        } = config;

        let shared = Rc::new_cyclic(|weak: &Weak<Shared<H, M>>| {
            let weak = weak.clone();
            let frame = FrameDebounce::new(host.clone(), move || {
                if let Some(shared) = weak.upgrade() {
                    vtrace!("frame fired");
                    shared.push();
                }
            });
            Shared {
                host,
                measure,
                viewport,
                options,
                update,
                phase: Cell::new(Phase::Constructed),
                frame,
                scroll: RefCell::new(None),
                resize: RefCell::new(None),
                last: Cell::new(None),
            }
        });

        let on_event: Listener = {
            let weak = Rc::downgrade(&shared);
            Rc::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.request();
                }
            })
        };

        let scroll_target = match viewport {
            ViewportKind::Window => EventTarget::Window,
            ViewportKind::Element => EventTarget::Viewport,
        };
        let scroll = shared.host.add_listener(
            scroll_target,
            EventKind::Scroll,
            ListenerOptions { passive: true },
            Rc::clone(&on_event),
        );
        *shared.scroll.borrow_mut() = Some(scroll);

        let fingerprint = {
            let weak = Rc::downgrade(&shared);
            move || weak.upgrade().and_then(|s| s.measure.viewport_size())
        };
        let watch = ResizeWatch::start(
            &shared.host,
            viewport,
            resize_poll_interval,
            fingerprint,
            on_event,
        );
        *shared.resize.borrow_mut() = Some(watch);

        shared.phase.set(Phase::Active);
        vdebug!(
            total = options.total,
            item_height = options.item_height,
            buffer_size = options.buffer_size,
            viewport = ?viewport,
            "Binder::new"
        );

        shared.push();
        Ok(Self { shared })
    }

    /// Requests a recomputation on the next frame, as a scroll or resize event would.
    ///
    /// Returns `false` if a frame was already pending or the binder is disposed.
    pub fn request_update(&self) -> bool {
        self.shared.request()
    }

    /// Recomputes the state from current measurements without pushing it.
    pub fn state(&self) -> Option<WindowState> {
        compute_state(&self.shared.measure, &self.shared.options)
    }
}

impl<H: Host, M> Binder<H, M> {
    /// The last state pushed to the update callback.
    pub fn last_state(&self) -> Option<WindowState> {
        self.shared.last.get()
    }

    pub fn phase(&self) -> Phase {
        self.shared.phase.get()
    }

    pub fn is_disposed(&self) -> bool {
        self.phase() == Phase::Disposed
    }

    pub fn is_frame_pending(&self) -> bool {
        self.shared.frame.is_pending()
    }

    pub fn options(&self) -> &WindowOptions {
        &self.shared.options
    }

    pub fn viewport(&self) -> ViewportKind {
        self.shared.viewport
    }

    pub fn measure(&self) -> &M {
        &self.shared.measure
    }

    /// Detaches every listener, stops the resize poll and cancels a pending frame.
    ///
    /// Calling it again is a no-op.
    pub fn dispose(&self) {
        let shared = &self.shared;
        if shared.phase.get() == Phase::Disposed {
            return;
        }
        shared.phase.set(Phase::Disposed);
        vdebug!("Binder::dispose");

        let scroll = shared.scroll.borrow_mut().take();
        if let Some(id) = scroll {
            shared.host.remove_listener(id);
        }
        let watch = shared.resize.borrow_mut().take();
        if let Some(watch) = watch {
            watch.stop(&shared.host);
        }
        shared.frame.cancel();
    }
}

impl<H: Host, M> Drop for Binder<H, M> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<H: Host, M> fmt::Debug for Binder<H, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("phase", &self.phase())
            .field("viewport", &self.shared.viewport)
            .field("options", &self.shared.options)
            .field("last_state", &self.shared.last.get())
            .finish_non_exhaustive()
    }
}
