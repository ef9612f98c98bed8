use core::cmp;
use core::ops::Range;

use crate::{Extent, Measure, VisualBox, WindowOptions, WindowState};

/// The visible region of the viewport: `top` is the scroll offset.
pub fn view_box(scroll_offset: u64, client_height: u32) -> Extent {
    let top = i64::try_from(scroll_offset).unwrap_or(i64::MAX);
    Extent::new(top, client_height as u64)
}

/// The full virtual list, positioned relative to the viewport's own document offset.
pub fn content_box(
    content_offset: i64,
    viewport_offset: i64,
    total: usize,
    item_height: u32,
) -> Extent {
    let top = content_offset.saturating_sub(viewport_offset);
    let height = (total as u64).saturating_mul(item_height as u64);
    Extent::new(top, height)
}

/// Projects the view box into content coordinates.
///
/// Both ends are clamped into `[0, content.height]`: a view scrolled above the content
/// collapses toward `0`, a view scrolled past it collapses toward the full height.
pub fn visual_box(view: Extent, content: Extent) -> VisualBox {
    let top = clamp_to_content(view.top.saturating_sub(content.top), content.height);
    let bottom = clamp_to_content(view.bottom().saturating_sub(content.top), content.height);
    VisualBox { top, bottom }
}

fn clamp_to_content(offset: i64, height: u64) -> u64 {
    if offset <= 0 {
        return 0;
    }
    cmp::min(offset as u64, height)
}

/// Maps a visual box to the buffered row range `start..end`.
///
/// `item_height` must be non-zero.
pub fn window_range(
    visual: VisualBox,
    total: usize,
    item_height: u32,
    buffer_size: usize,
) -> Range<usize> {
    let ih = item_height as u64;
    debug_assert!(ih > 0, "window_range: item_height must be non-zero");
    let ih = ih.max(1);

    // Both quotients are bounded by `total` because the visual box never exceeds the
    // content height.
    let first = usize::try_from(visual.top / ih).unwrap_or(usize::MAX);
    let last = usize::try_from(visual.bottom.div_ceil(ih)).unwrap_or(usize::MAX);

    let end = cmp::min(total, last.saturating_add(buffer_size));
    let start = cmp::min(first.saturating_sub(buffer_size), end);
    start..end
}

/// The measurement-free core of [`compute_state`].
pub fn state_for(view: Extent, content: Extent, options: &WindowOptions) -> WindowState {
    let visual = visual_box(view, content);
    let range = window_range(
        visual,
        options.total,
        options.item_height,
        options.buffer_size,
    );
    WindowState {
        content_height: content.height,
        top_offset: (range.start as u64).saturating_mul(options.item_height as u64),
        start: range.start,
        end: range.end,
    }
}

/// Computes the current [`WindowState`] from live measurements.
///
/// Returns `None` when a measurement is unavailable or `options.item_height` is zero; callers
/// are expected to skip the update and retry on the next event.
pub fn compute_state<M: Measure + ?Sized>(
    measure: &M,
    options: &WindowOptions,
) -> Option<WindowState> {
    if options.item_height == 0 {
        vwarn!("compute_state: item_height is zero");
        return None;
    }

    let view = view_box(measure.scroll_offset()?, measure.client_height()?);
    let content = content_box(
        measure.content_offset_from_root()?,
        measure.viewport_offset_from_root()?,
        options.total,
        options.item_height,
    );
    let state = state_for(view, content, options);
    vtrace!(
        start = state.start,
        end = state.end,
        top_offset = state.top_offset,
        "compute_state"
    );
    Some(state)
}
