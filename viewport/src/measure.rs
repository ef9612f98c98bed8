use alloc::rc::Rc;

use crate::{ViewportKind, ViewportSize};

/// The measurement capability the engine reads from.
///
/// Implementations wrap whatever the host environment offers (a DOM, a retained UI tree, a
/// terminal layout). Every accessor returns `None` while the underlying element cannot be
/// measured (e.g. it is detached mid-unmount); the engine treats that as "skip this update".
pub trait Measure {
    /// Scroll offset of the viewport along the scroll axis.
    fn scroll_offset(&self) -> Option<u64>;

    /// Visible (client) height of the viewport.
    fn client_height(&self) -> Option<u32>;

    /// Visible (client) width of the viewport. Only used to fingerprint element resizes.
    fn client_width(&self) -> Option<u32> {
        None
    }

    /// Offset of the viewport from the document root. The root itself is at `0`.
    fn viewport_offset_from_root(&self) -> Option<i64>;

    /// Offset of the content element from the document root.
    fn content_offset_from_root(&self) -> Option<i64>;

    fn viewport_size(&self) -> Option<ViewportSize> {
        let height = self.client_height()?;
        Some(ViewportSize {
            width: self.client_width().unwrap_or(0),
            height,
        })
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn scroll_offset(&self) -> Option<u64> {
        (**self).scroll_offset()
    }

    fn client_height(&self) -> Option<u32> {
        (**self).client_height()
    }

    fn client_width(&self) -> Option<u32> {
        (**self).client_width()
    }

    fn viewport_offset_from_root(&self) -> Option<i64> {
        (**self).viewport_offset_from_root()
    }

    fn content_offset_from_root(&self) -> Option<i64> {
        (**self).content_offset_from_root()
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        (**self).viewport_size()
    }
}

impl<M: Measure + ?Sized> Measure for Rc<M> {
    fn scroll_offset(&self) -> Option<u64> {
        (**self).scroll_offset()
    }

    fn client_height(&self) -> Option<u32> {
        (**self).client_height()
    }

    fn client_width(&self) -> Option<u32> {
        (**self).client_width()
    }

    fn viewport_offset_from_root(&self) -> Option<i64> {
        (**self).viewport_offset_from_root()
    }

    fn content_offset_from_root(&self) -> Option<i64> {
        (**self).content_offset_from_root()
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        (**self).viewport_size()
    }
}

/// A node in a layout tree that knows its offset within its offset parent.
pub trait OffsetNode: Sized {
    fn offset_top(&self) -> i64;
    fn offset_parent(&self) -> Option<Self>;
}

/// Sums `offset_top` up the offset-parent chain.
///
/// `None` stands for the document root and contributes `0`.
pub fn offset_from_root<N: OffsetNode>(node: Option<&N>) -> i64 {
    let Some(node) = node else {
        return 0;
    };
    let mut y = node.offset_top();
    let mut parent = node.offset_parent();
    while let Some(p) = parent {
        y = y.saturating_add(p.offset_top());
        parent = p.offset_parent();
    }
    y
}

/// A boxed element that can act as a scrolling viewport.
pub trait ScrollNode {
    fn scroll_top(&self) -> Option<u64>;
    fn client_height(&self) -> Option<u32>;
    fn client_width(&self) -> Option<u32> {
        None
    }
}

/// The document root when it is the scrolling viewport.
pub trait RootWindow {
    fn scroll_y(&self) -> Option<u64>;
    fn inner_height(&self) -> Option<u32>;
    fn inner_width(&self) -> Option<u32> {
        None
    }
}

/// Which object scrolls: the root window or a boxed element.
#[derive(Clone, Debug)]
pub enum Target<W, N> {
    Window(W),
    Element(N),
}

impl<W, N> Target<W, N> {
    pub fn kind(&self) -> ViewportKind {
        match self {
            Self::Window(_) => ViewportKind::Window,
            Self::Element(_) => ViewportKind::Element,
        }
    }
}

/// A [`Measure`] over a layout tree.
///
/// The viewport's scroll offset and height come from the window when it is the root, and
/// from the element otherwise; document offsets walk the offset-parent chain.
#[derive(Clone, Debug)]
pub struct TreeMeasure<W, N> {
    pub viewport: Target<W, N>,
    pub content: N,
}

impl<W, N> TreeMeasure<W, N> {
    pub fn new(viewport: Target<W, N>, content: N) -> Self {
        Self { viewport, content }
    }

    pub fn viewport_kind(&self) -> ViewportKind {
        self.viewport.kind()
    }
}

impl<W: RootWindow, N: OffsetNode + ScrollNode> Measure for TreeMeasure<W, N> {
    fn scroll_offset(&self) -> Option<u64> {
        match &self.viewport {
            Target::Window(w) => w.scroll_y(),
            Target::Element(e) => e.scroll_top(),
        }
    }

    fn client_height(&self) -> Option<u32> {
        match &self.viewport {
            Target::Window(w) => w.inner_height(),
            Target::Element(e) => ScrollNode::client_height(e),
        }
    }

    fn client_width(&self) -> Option<u32> {
        match &self.viewport {
            Target::Window(w) => w.inner_width(),
            Target::Element(e) => ScrollNode::client_width(e),
        }
    }

    fn viewport_offset_from_root(&self) -> Option<i64> {
        match &self.viewport {
            Target::Window(_) => Some(0),
            Target::Element(e) => Some(offset_from_root(Some(e))),
        }
    }

    fn content_offset_from_root(&self) -> Option<i64> {
        Some(offset_from_root(Some(&self.content)))
    }
}
