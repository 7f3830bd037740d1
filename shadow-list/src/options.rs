use alloc::sync::Arc;

use crate::ShadowList;

/// A callback fired after a [`ShadowList`] mutation has been applied.
pub type OnChangeCallback = Arc<dyn Fn(&ShadowList) + Send + Sync>;

/// Configuration for [`crate::ShadowList`].
///
/// Options are plain data; the change callback is installed separately with
/// [`crate::ShadowList::set_on_change`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowListOptions {
    pub item_count: usize,
    /// Uniform height applied to every item.
    pub item_height: u32,
    /// Size of the observing window in the scroll axis.
    pub viewport_height: u32,
    /// Overscan applied symmetrically before and after the viewport when searching for the
    /// visible range.
    pub viewport_padding: u32,
    /// Scroll offset the first window is computed at (clamped to the content).
    pub initial_scroll_offset: u64,
}

impl ShadowListOptions {
    pub fn new(item_count: usize, item_height: u32, viewport_height: u32) -> Self {
        Self {
            item_count,
            item_height,
            viewport_height,
            viewport_padding: 0,
            initial_scroll_offset: 0,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_viewport_padding(mut self, viewport_padding: u32) -> Self {
        self.viewport_padding = viewport_padding;
        self
    }

    pub fn with_initial_scroll_offset(mut self, initial_scroll_offset: u64) -> Self {
        self.initial_scroll_offset = initial_scroll_offset;
        self
    }
}
