use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::offsets;
use crate::{OnChangeCallback, ShadowItem, ShadowListOptions, ViewportState, VisibleRange};

/// A headless windowing engine for fixed-height lists.
///
/// The list keeps a "shadow" copy of the real list's geometry: one [`ShadowItem`] per row with
/// its cumulative offset, the total content height, and the window of items that overlaps the
/// padded viewport at the current scroll offset.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport geometry and scroll offsets.
/// - Every mutator recomputes the visible window before returning, so reads never observe a
///   stale window.
///
/// For scroll tracking and the render contract, see the `shadow-list-adapter` crate.
#[derive(Clone)]
pub struct ShadowList {
    items: Vec<ShadowItem>,
    item_height: u32,
    total_height: u64,
    viewport_height: u32,
    viewport_padding: u32,
    scroll_offset: u64,
    visible: Vec<ShadowItem>,
    on_change: Option<OnChangeCallback>,
}

impl ShadowList {
    /// Creates a list of `options.item_count` items and computes the first window at
    /// `options.initial_scroll_offset`.
    pub fn new(options: ShadowListOptions) -> Self {
        ldebug!(
            item_count = options.item_count,
            item_height = options.item_height,
            viewport_height = options.viewport_height,
            viewport_padding = options.viewport_padding,
            "ShadowList::new"
        );
        let height = options.item_height;
        let mut items = Vec::with_capacity(options.item_count);
        items.extend((0..options.item_count).map(|index| ShadowItem::new(index, 0, height)));
        offsets::chain_offsets(&mut items, 0);

        let mut list = Self {
            total_height: offsets::content_height(&items),
            items,
            item_height: height,
            viewport_height: options.viewport_height,
            viewport_padding: options.viewport_padding,
            scroll_offset: 0,
            visible: Vec::new(),
            on_change: None,
        };
        list.update_window(options.initial_scroll_offset);
        list
    }

    /// Returns the current configuration, with the current scroll offset as
    /// `initial_scroll_offset`.
    pub fn options(&self) -> ShadowListOptions {
        ShadowListOptions {
            item_count: self.items.len(),
            item_height: self.item_height,
            viewport_height: self.viewport_height,
            viewport_padding: self.viewport_padding,
            initial_scroll_offset: self.scroll_offset,
        }
    }

    /// Installs (or clears) a callback fired after every mutation that changed state.
    ///
    /// The callback runs synchronously, once per mutator call, after the visible window has been
    /// rebuilt.
    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ShadowList) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ShadowItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<ShadowItem> {
        self.items.get(index).copied()
    }

    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    /// Sum of all item heights; `0` for an empty list.
    pub fn total_height(&self) -> u64 {
        self.total_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn viewport_padding(&self) -> u32 {
        self.viewport_padding
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// The furthest the viewport can travel: `total_height - viewport_height`, saturating at 0.
    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height.saturating_sub(self.viewport_height as u64)
    }

    /// Items overlapping the padded viewport, in index order.
    pub fn visible_items(&self) -> &[ShadowItem] {
        &self.visible
    }

    pub fn visible_range(&self) -> VisibleRange {
        match (self.visible.first(), self.visible.last()) {
            (Some(first), Some(last)) => VisibleRange {
                start_index: first.index,
                end_index: last.index + 1,
            },
            _ => VisibleRange::default(),
        }
    }

    pub fn for_each_visible_item(&self, mut f: impl FnMut(ShadowItem)) {
        for item in &self.visible {
            f(*item);
        }
    }

    /// Collects the visible items into `out` (clears `out` first).
    ///
    /// Adapters that render every frame can reuse `out` as a scratch buffer.
    pub fn collect_visible_items(&self, out: &mut Vec<ShadowItem>) {
        out.clear();
        out.extend_from_slice(&self.visible);
    }

    /// Returns a lightweight snapshot of the viewport geometry and scroll position.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            height: self.viewport_height,
            padding: self.viewport_padding,
            scroll_offset: self.scroll_offset,
        }
    }

    /// Restores viewport geometry and scroll position from a previously captured snapshot.
    ///
    /// The scroll offset is applied as-is (clamped), not re-anchored, and `on_change` fires once.
    pub fn restore_viewport_state(&mut self, state: ViewportState) {
        self.viewport_height = state.height;
        self.viewport_padding = state.padding;
        self.update_window(state.scroll_offset);
        self.notify();
    }

    /// Resizes the list, keeping the geometry of every surviving item.
    ///
    /// Growing chains offsets for the appended items only; shrinking truncates without touching
    /// earlier offsets.
    pub fn set_item_count(&mut self, item_count: usize) {
        let len = self.items.len();
        if item_count == len {
            return;
        }
        ldebug!(from = len, to = item_count, "set_item_count");

        if item_count > len {
            let height = self.item_height;
            self.items.reserve_exact(item_count - len);
            self.items
                .extend((len..item_count).map(|index| ShadowItem::new(index, 0, height)));
            offsets::chain_offsets(&mut self.items, len);
        } else {
            self.items.truncate(item_count);
        }

        self.total_height = offsets::content_height(&self.items);
        self.reanchor();
        self.notify();
    }

    /// Applies a new uniform height to every item and rechains all offsets.
    pub fn set_item_height(&mut self, item_height: u32) {
        if self.item_height == item_height {
            return;
        }
        ldebug!(from = self.item_height, to = item_height, "set_item_height");
        self.item_height = item_height;
        for item in &mut self.items {
            item.height = item_height;
        }
        offsets::chain_offsets(&mut self.items, 0);

        self.total_height = offsets::content_height(&self.items);
        self.reanchor();
        self.notify();
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        if self.viewport_height == viewport_height {
            return;
        }
        ltrace!(viewport_height, "set_viewport_height");
        self.viewport_height = viewport_height;
        self.reanchor();
        self.notify();
    }

    pub fn set_viewport_padding(&mut self, viewport_padding: u32) {
        if self.viewport_padding == viewport_padding {
            return;
        }
        ltrace!(viewport_padding, "set_viewport_padding");
        self.viewport_padding = viewport_padding;
        self.reanchor();
        self.notify();
    }

    /// Moves the viewport to `offset` and rebuilds the visible window.
    ///
    /// Negative offsets clamp to 0 and offsets past the end clamp to
    /// [`Self::max_scroll_offset`]. Repeating the same call yields the same window.
    pub fn move_scroll_offset(&mut self, offset: i64) {
        ltrace!(offset, "move_scroll_offset");
        self.update_window(clamp_signed(offset));
        self.notify();
    }

    /// Returns the index of the item whose closed span `[offset, offset + height]` contains
    /// `offset` (clamped into `[0, total_height]`).
    ///
    /// A coordinate on the edge shared by two items resolves to whichever of the two the binary
    /// search probes first. Returns `None` for an empty list.
    pub fn find_item_at(&self, offset: i64) -> Option<usize> {
        self.search(clamp_signed(offset))
    }

    fn search(&self, coord: u64) -> Option<usize> {
        offsets::bisect(&self.items, coord.min(self.total_height))
    }

    fn locate(&self, coord: u64, fallback: usize) -> usize {
        let found = self.search(coord);
        if found.is_none() {
            lwarn!(
                coord,
                len = self.items.len(),
                total_height = self.total_height,
                "find_item_at: no item contains a clamped offset"
            );
        }
        debug_assert!(
            found.is_some(),
            "find_item_at: offsets are not contiguous (coord={coord}, total={})",
            self.total_height
        );
        found.unwrap_or(fallback)
    }

    /// Re-runs the window at the leading edge of the first visible item.
    ///
    /// The item is re-queried against the current geometry, so it is always in bounds even after
    /// a truncation.
    fn reanchor(&mut self) {
        let top = self.scroll_offset.min(self.max_scroll_offset());
        let anchor = offsets::leading_item_at(&self.items, top)
            .map_or(0, |index| self.items[index].offset);
        self.update_window(anchor);
    }

    fn update_window(&mut self, offset: u64) {
        let offset = offset.min(self.max_scroll_offset());
        self.scroll_offset = offset;
        self.visible.clear();
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };

        let padding = self.viewport_padding as u64;
        let top = offset.saturating_sub(padding);
        let bottom = offset
            .saturating_add(self.viewport_height as u64)
            .saturating_add(padding);

        let start = self.locate(top, 0);
        let end = self.locate(bottom, last).max(start);
        self.visible.extend_from_slice(&self.items[start..=end]);
    }
}

fn clamp_signed(offset: i64) -> u64 {
    u64::try_from(offset).unwrap_or(0)
}

impl core::fmt::Debug for ShadowList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShadowList")
            .field("len", &self.items.len())
            .field("item_height", &self.item_height)
            .field("total_height", &self.total_height)
            .field("viewport_height", &self.viewport_height)
            .field("viewport_padding", &self.viewport_padding)
            .field("scroll_offset", &self.scroll_offset)
            .field("visible", &self.visible_range())
            .finish_non_exhaustive()
    }
}
