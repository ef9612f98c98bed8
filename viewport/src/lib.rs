//! A headless windowing engine for long lists of fixed-height rows.
//!
//! Rendering thousands of rows is expensive; rendering the twenty that are on screen (plus a
//! small buffer) is not. This crate computes which rows those are.
//!
//! It is UI-agnostic. The host provides measurements through the [`Measure`] trait:
//! - the viewport's scroll offset and client height
//! - the document offsets of the viewport and of the content element
//!
//! and [`compute_state`] turns them into a [`WindowState`]: the row range `start..end`, the
//! padding above it, and the full content height.
//!
//! For event binding and frame coalescing, see the `viewport-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod measure;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use geometry::{
    compute_state, content_box, state_for, view_box, visual_box, window_range,
};
pub use measure::{
    Measure, OffsetNode, RootWindow, ScrollNode, Target, TreeMeasure, offset_from_root,
};
pub use options::WindowOptions;
pub use state::Measurements;
pub use types::{Extent, ViewportKind, ViewportSize, VisualBox, WindowState};
