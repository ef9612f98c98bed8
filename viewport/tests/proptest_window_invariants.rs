//! Property-based invariant tests for the windowing computation.
//!
//! These hold for any valid options and any measurements:
//!
//! 1. `0 <= start <= end <= total`.
//! 2. `top_offset == start * item_height`.
//! 3. `content_height == total * item_height`, independent of scrolling.
//! 4. The window size is bounded by the viewport, not by `total`.
//! 5. Identical measurements yield identical states.
//! 6. Every row intersecting the view is inside the window.

use proptest::prelude::*;
use viewport::{Measurements, WindowOptions, compute_state};

fn options() -> impl Strategy<Value = WindowOptions> {
    (0usize..50_000, 1u32..500, 0usize..20).prop_map(|(total, item_height, buffer)| {
        WindowOptions::new(total, item_height).with_buffer_size(buffer)
    })
}

fn measurements() -> impl Strategy<Value = Measurements> {
    (
        0u64..30_000_000,
        0u32..5_000,
        -10_000i64..10_000,
        -10_000i64..10_000,
    )
        .prop_map(
            |(scroll_offset, client_height, viewport_offset, content_offset)| Measurements {
                scroll_offset,
                client_height,
                client_width: 0,
                viewport_offset,
                content_offset,
            },
        )
}

proptest! {
    #[test]
    fn range_stays_within_bounds(opts in options(), m in measurements()) {
        let s = compute_state(&m, &opts).unwrap();
        prop_assert!(s.start <= s.end, "start {} > end {}", s.start, s.end);
        prop_assert!(s.end <= opts.total, "end {} > total {}", s.end, opts.total);
    }

    #[test]
    fn top_offset_matches_start(opts in options(), m in measurements()) {
        let s = compute_state(&m, &opts).unwrap();
        prop_assert_eq!(s.top_offset, s.start as u64 * opts.item_height as u64);
    }

    #[test]
    fn content_height_ignores_scrolling(opts in options(), a in measurements(), b in measurements()) {
        let expected = opts.total as u64 * opts.item_height as u64;
        prop_assert_eq!(compute_state(&a, &opts).unwrap().content_height, expected);
        prop_assert_eq!(compute_state(&b, &opts).unwrap().content_height, expected);
    }

    #[test]
    fn window_size_is_bounded_by_the_viewport(opts in options(), m in measurements()) {
        let s = compute_state(&m, &opts).unwrap();
        let visible = (m.client_height as u64).div_ceil(opts.item_height as u64) as usize;
        // One extra row when the view straddles row boundaries at both edges.
        let bound = visible + 1 + 2 * opts.buffer_size;
        prop_assert!(s.len() <= bound, "len {} > bound {}", s.len(), bound);
    }

    #[test]
    fn identical_measurements_are_idempotent(opts in options(), m in measurements()) {
        prop_assert_eq!(compute_state(&m, &opts), compute_state(&m, &opts));
    }

    #[test]
    fn visible_rows_are_covered(opts in options(), m in measurements()) {
        let s = compute_state(&m, &opts).unwrap();
        let ih = opts.item_height as i64;
        let content_top = m.content_offset - m.viewport_offset;
        let view_top = m.scroll_offset as i64;
        let view_bottom = view_top + m.client_height as i64;
        for row in [s.start.saturating_sub(1), s.end] {
            if row >= opts.total {
                continue;
            }
            let row_top = content_top + row as i64 * ih;
            let row_bottom = row_top + ih;
            let intersects = row_top < view_bottom && row_bottom > view_top;
            if intersects {
                prop_assert!(
                    s.range().contains(&row),
                    "row {} intersects the view but window is {:?}",
                    row,
                    s.range()
                );
            }
        }
    }
}
