use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;
use core::time::Duration;

use viewport::{Measure, ViewportKind, WindowOptions, WindowState};

use crate::{BindError, Binder, BinderConfig, Host, UpdateCallback};

/// A framework-neutral owner of one [`Binder`] at a time.
///
/// This is what a UI component typically needs:
/// - option changes (new item count, row height, buffer) dispose the current binder and bind a
///   fresh one
/// - `on_change` only fires when the window actually changed, so a scroll that stays within
///   the same rows does not re-render
///
/// The first state after every (re)bind is always delivered.
pub struct Controller<H: Host, M> {
    host: H,
    measure: M,
    viewport: ViewportKind,
    resize_poll_interval: Duration,
    options: WindowOptions,
    on_change: UpdateCallback,
    last: Rc<Cell<Option<WindowState>>>,
    binder: Option<Binder<H, M>>,
}

impl<H: Host + Clone + 'static, M: Measure + Clone + 'static> Controller<H, M> {
    pub fn new(host: H, measure: M, config: BinderConfig) -> Result<Self, BindError> {
        config.validate()?;
        let mut c = Self {
            host,
            measure,
            viewport: config.viewport,
            resize_poll_interval: config.resize_poll_interval,
            options: config.options,
            on_change: config.update,
            last: Rc::new(Cell::new(None)),
            binder: None,
        };
        c.bind(c.options)?;
        Ok(c)
    }

    fn config(&self, options: WindowOptions) -> BinderConfig {
        let last = Rc::clone(&self.last);
        let on_change = Rc::clone(&self.on_change);
        BinderConfig {
            viewport: self.viewport,
            options,
            resize_poll_interval: self.resize_poll_interval,
            update: Rc::new(move |state| {
                if last.get() == Some(state) {
                    return;
                }
                last.set(Some(state));
                on_change(state);
            }),
        }
    }

    fn bind(&mut self, options: WindowOptions) -> Result<(), BindError> {
        let config = self.config(options);
        config.validate()?;

        if let Some(prev) = self.binder.take() {
            prev.dispose();
        }
        self.last.set(None);
        self.options = options;
        self.binder = Some(Binder::new(
            self.host.clone(),
            self.measure.clone(),
            config,
        )?);
        Ok(())
    }

    /// Replaces the options and binds again.
    ///
    /// Invalid options are rejected before the current binder is touched.
    pub fn set_options(&mut self, options: WindowOptions) -> Result<(), BindError> {
        self.bind(options)
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut WindowOptions),
    ) -> Result<(), BindError> {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_total(&mut self, total: usize) -> Result<(), BindError> {
        self.update_options(|o| o.total = total)
    }

    pub fn set_item_height(&mut self, item_height: u32) -> Result<(), BindError> {
        self.update_options(|o| o.item_height = item_height)
    }

    pub fn set_buffer_size(&mut self, buffer_size: usize) -> Result<(), BindError> {
        self.update_options(|o| o.buffer_size = buffer_size)
    }

    /// Requests a recomputation on the next frame. Returns `false` when nothing was scheduled.
    pub fn request_update(&self) -> bool {
        self.binder.as_ref().is_some_and(Binder::request_update)
    }
}

impl<H: Host, M> Controller<H, M> {
    /// The last state delivered to `on_change`.
    pub fn state(&self) -> Option<WindowState> {
        self.last.get()
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn binder(&self) -> Option<&Binder<H, M>> {
        self.binder.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.binder.is_some()
    }

    /// Disposes the current binder. A later option change binds again.
    pub fn dispose(&mut self) {
        if let Some(binder) = self.binder.take() {
            binder.dispose();
        }
    }
}

impl<H: Host, M> fmt::Debug for Controller<H, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("viewport", &self.viewport)
            .field("options", &self.options)
            .field("state", &self.last.get())
            .field("bound", &self.binder.is_some())
            .finish_non_exhaustive()
    }
}
