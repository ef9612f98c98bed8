use crate::Error;

/// Configuration for the windowing computation.
///
/// Mirrors the builder style of the rest of the crate: start from [`WindowOptions::new`] and
/// chain `with_*` calls. Options are plain data; [`WindowOptions::validate`] reports values the
/// engine cannot work with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Number of rows in the list.
    pub total: usize,
    /// Height of every row in the scroll axis. Must be non-zero.
    pub item_height: u32,
    /// Extra rows rendered on each side of the visible ones.
    pub buffer_size: usize,
}

impl WindowOptions {
    pub fn new(total: usize, item_height: u32) -> Self {
        Self {
            total,
            item_height,
            buffer_size: 0,
        }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.item_height == 0 {
            return Err(Error::ZeroItemHeight);
        }
        Ok(())
    }

    /// Height of the full virtual list (`total * item_height`, saturating).
    pub fn content_height(&self) -> u64 {
        (self.total as u64).saturating_mul(self.item_height as u64)
    }
}
