use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;

use crate::{EventKind, EventTarget, Host, Listener, ListenerOptions, Task};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

struct Registration {
    id: ListenerId,
    target: EventTarget,
    kind: EventKind,
    options: ListenerOptions,
    listener: Listener,
}

enum TimerKind {
    Once(Task),
    Repeat { period: Duration, listener: Listener },
}

struct Timer {
    id: TimerId,
    due: Duration,
    kind: TimerKind,
}

#[derive(Default)]
struct State {
    next_id: u64,
    now: Duration,
    no_animation_frames: bool,
    listeners: Vec<Registration>,
    frames: Vec<(FrameId, Task)>,
    timers: Vec<Timer>,
}

impl State {
    fn next_id(&mut self) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.next_id
    }
}

/// A deterministic [`Host`] pumped by the caller.
///
/// Nothing happens on its own: the owner of the event loop (a TUI, a game loop, a test)
/// delivers events with [`ManualHost::dispatch`], fires animation frames with
/// [`ManualHost::run_frames`] and moves the clock with [`ManualHost::advance`].
///
/// Clones share the same state.
#[derive(Clone, Default)]
pub struct ManualHost {
    state: Rc<RefCell<State>>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host without animation frames, so frames fall back to timeouts.
    pub fn without_animation_frames() -> Self {
        let host = Self::default();
        host.state.borrow_mut().no_animation_frames = true;
        host
    }

    /// Delivers an event to every listener registered for `target`/`kind`.
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self, target: EventTarget, kind: EventKind) -> usize {
        let listeners: Vec<Listener> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.target == target && r.kind == kind)
            .map(|r| Rc::clone(&r.listener))
            .collect();
        for listener in &listeners {
            listener();
        }
        listeners.len()
    }

    /// Fires the animation frames requested so far.
    ///
    /// Frames requested while this batch runs are left for the next call; a frame cancelled
    /// by an earlier callback in the same batch does not run. Returns the number of frames run.
    pub fn run_frames(&self) -> usize {
        let batch: Vec<FrameId> = self
            .state
            .borrow()
            .frames
            .iter()
            .map(|(id, _)| *id)
            .collect();

        let mut ran = 0usize;
        for id in batch {
            let task = {
                let mut state = self.state.borrow_mut();
                let pos = state.frames.iter().position(|(f, _)| *f == id);
                pos.map(|i| state.frames.remove(i).1)
            };
            if let Some(task) = task {
                task();
                ran += 1;
            }
        }
        ran
    }

    /// Moves the clock forward by `by`, running every timer that comes due, in order.
    pub fn advance(&self, by: Duration) {
        let target = self.now().saturating_add(by);
        loop {
            let fire = {
                let mut state = self.state.borrow_mut();
                let Some(i) = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i)
                else {
                    break;
                };
                let timer = state.timers.remove(i);
                state.now = timer.due;
                match timer.kind {
                    TimerKind::Once(task) => Fire::Once(task),
                    TimerKind::Repeat { period, listener } => {
                        state.timers.push(Timer {
                            id: timer.id,
                            due: timer.due.saturating_add(period),
                            kind: TimerKind::Repeat {
                                period,
                                listener: Rc::clone(&listener),
                            },
                        });
                        Fire::Repeat(listener)
                    }
                }
            };
            match fire {
                Fire::Once(task) => task(),
                Fire::Repeat(listener) => listener(),
            }
        }
        self.state.borrow_mut().now = target;
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Registered listeners as `(target, kind, options)`, in registration order.
    pub fn listeners(&self) -> Vec<(EventTarget, EventKind, ListenerOptions)> {
        self.state
            .borrow()
            .listeners
            .iter()
            .map(|r| (r.target, r.kind, r.options))
            .collect()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Number of live timeouts and intervals.
    pub fn timer_count(&self) -> usize {
        self.state.borrow().timers.len()
    }

    // Removed callbacks are dropped after the borrow ends: dropping one may release
    // state that calls back into the host.
    fn remove_timer(&self, id: TimerId) {
        let removed = {
            let mut state = self.state.borrow_mut();
            let pos = state.timers.iter().position(|t| t.id == id);
            pos.map(|i| state.timers.remove(i))
        };
        drop(removed);
    }
}

enum Fire {
    Once(Task),
    Repeat(Listener),
}

impl Host for ManualHost {
    type ListenerId = ListenerId;
    type FrameId = FrameId;
    type TimerId = TimerId;

    fn add_listener(
        &self,
        target: EventTarget,
        kind: EventKind,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_id());
        state.listeners.push(Registration {
            id,
            target,
            kind,
            options,
            listener,
        });
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        let removed = {
            let mut state = self.state.borrow_mut();
            let pos = state.listeners.iter().position(|r| r.id == id);
            pos.map(|i| state.listeners.remove(i))
        };
        drop(removed);
    }

    fn has_animation_frames(&self) -> bool {
        !self.state.borrow().no_animation_frames
    }

    fn request_animation_frame(&self, task: Task) -> FrameId {
        let mut state = self.state.borrow_mut();
        let id = FrameId(state.next_id());
        state.frames.push((id, task));
        id
    }

    fn cancel_animation_frame(&self, id: FrameId) {
        let removed = {
            let mut state = self.state.borrow_mut();
            let pos = state.frames.iter().position(|(f, _)| *f == id);
            pos.map(|i| state.frames.remove(i))
        };
        drop(removed);
    }

    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId(state.next_id());
        let due = state.now.saturating_add(delay);
        state.timers.push(Timer {
            id,
            due,
            kind: TimerKind::Once(task),
        });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.remove_timer(id);
    }

    fn set_interval(&self, period: Duration, listener: Listener) -> TimerId {
        // Zero periods would spin `advance` forever.
        let period = period.max(Duration::from_millis(1));
        let mut state = self.state.borrow_mut();
        let id = TimerId(state.next_id());
        let due = state.now.saturating_add(period);
        state.timers.push(Timer {
            id,
            due,
            kind: TimerKind::Repeat { period, listener },
        });
        id
    }

    fn clear_interval(&self, id: TimerId) {
        self.remove_timer(id);
    }
}

impl fmt::Debug for ManualHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualHost")
            .field("now", &state.now)
            .field("listeners", &state.listeners.len())
            .field("frames", &state.frames.len())
            .field("timers", &state.timers.len())
            .finish()
    }
}
