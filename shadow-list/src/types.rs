/// One slot of the list: where it starts and how tall it is.
///
/// Items handed out by [`crate::ShadowList`] are value copies, so holding one never aliases
/// engine state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowItem {
    /// Position in the list; always equals the item's position in [`crate::ShadowList::items`].
    pub index: usize,
    /// Distance from the start of the list to the item's leading edge.
    pub offset: u64,
    /// Extent in the scroll axis.
    pub height: u32,
}

impl ShadowItem {
    pub fn new(index: usize, offset: u64, height: u32) -> Self {
        Self {
            index,
            offset,
            height,
        }
    }

    /// Trailing edge (`offset + height`).
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.height as u64)
    }

    /// Closed span test: both edges belong to the item.
    pub fn contains(&self, coord: u64) -> bool {
        coord >= self.offset && coord <= self.end()
    }
}

/// A contiguous index range into the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}
