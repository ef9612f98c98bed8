//! Event binding and frame coalescing for the `viewport` crate.
//!
//! The `viewport` crate is a pure function of measurements. This crate keeps its output in
//! sync with a live scroll container:
//!
//! - [`Binder`] listens for scroll and resize events, coalesces them into at most one
//!   recomputation per animation frame and pushes each new [`viewport::WindowState`] to a
//!   callback
//! - [`Controller`] re-binds when list options change and drops updates that change nothing
//! - [`FrameDebounce`] is the frame-coalescing primitive on its own
//! - [`ManualHost`] is a deterministic, caller-pumped [`Host`] for loops without a browser
//!   (TUIs, games, tests)
//!
//! The environment itself (DOM, windowing toolkit) is reached only through the [`Host`] and
//! [`viewport::Measure`] traits; this crate has no platform bindings.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binder;
mod controller;
mod error;
mod frame;
mod host;
mod manual;
mod resize;


pub use binder::{Binder, BinderConfig, Phase, UpdateCallback};
pub use controller::Controller;
pub use error::BindError;
pub use frame::{FRAME_FALLBACK_DELAY, FrameDebounce};
pub use host::{EventKind, EventTarget, Host, Listener, ListenerOptions, Task};
pub use manual::{FrameId, ListenerId, ManualHost, TimerId};
pub use resize::DEFAULT_RESIZE_POLL_INTERVAL;
