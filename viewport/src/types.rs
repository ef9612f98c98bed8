use core::ops::Range;

/// A one-dimensional extent along the scroll axis.
///
/// Used for both the *view box* (the visible region, `top` = scroll offset) and the *content
/// box* (the full virtual list, `top` relative to the viewport's own document offset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub top: i64,
    pub height: u64,
}

impl Extent {
    pub fn new(top: i64, height: u64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> i64 {
        self.top.saturating_add_unsigned(self.height)
    }
}

/// The view box in content-relative coordinates, clamped to `[0, content.height]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualBox {
    pub top: u64,
    pub bottom: u64,
}

impl VisualBox {
    pub fn height(&self) -> u64 {
        self.bottom.saturating_sub(self.top)
    }
}

/// The output of the engine: which rows to render and how to pad them.
///
/// A renderer is expected to give its content container a height of `content_height`, pad
/// its top by `top_offset`, and render only the rows in `start..end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub content_height: u64,
    pub top_offset: u64,
    pub start: usize,
    pub end: usize, // exclusive
}

impl WindowState {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the rendered rows of `items`.
    ///
    /// The range is clamped to `items.len()`, so a stale state applied to a shorter slice
    /// yields fewer rows instead of panicking.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

/// Whether the viewport is the document root (window) or a boxed, scrollable element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportKind {
    #[default]
    Window,
    Element,
}

/// A cheap fingerprint of the viewport's box, used to detect element resizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}
