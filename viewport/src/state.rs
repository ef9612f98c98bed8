use crate::Measure;

/// A captured snapshot of every measurement the engine reads.
///
/// It implements [`Measure`] itself, so a host can capture once per frame (or record and
/// replay a session) and feed the snapshot to [`crate::compute_state`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    pub scroll_offset: u64,
    pub client_height: u32,
    pub client_width: u32,
    pub viewport_offset: i64,
    pub content_offset: i64,
}

impl Measurements {
    /// Reads every accessor of `source` at once.
    ///
    /// Returns `None` if any required measurement is unavailable. A missing width is
    /// recorded as `0`.
    pub fn capture<M: Measure + ?Sized>(source: &M) -> Option<Self> {
        Some(Self {
            scroll_offset: source.scroll_offset()?,
            client_height: source.client_height()?,
            client_width: source.client_width().unwrap_or(0),
            viewport_offset: source.viewport_offset_from_root()?,
            content_offset: source.content_offset_from_root()?,
        })
    }
}

impl Measure for Measurements {
    fn scroll_offset(&self) -> Option<u64> {
        Some(self.scroll_offset)
    }

    fn client_height(&self) -> Option<u32> {
        Some(self.client_height)
    }

    fn client_width(&self) -> Option<u32> {
        Some(self.client_width)
    }

    fn viewport_offset_from_root(&self) -> Option<i64> {
        Some(self.viewport_offset)
    }

    fn content_offset_from_root(&self) -> Option<i64> {
        Some(self.content_offset)
    }
}
