use alloc::vec::Vec;

use shadow_list::{ShadowList, ShadowListOptions};

use crate::{ItemPlacement, ItemRenderer, ScrollDirection, ScrollTracker};

/// A framework-neutral controller that wraps a [`ShadowList`] and keeps it in sync with a real
/// scroll container.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_height` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (for `is_scrolling` debouncing)
/// - `render` (or `placements`) when it is time to draw
///
/// When the list does not own its scroll container (for example a list embedded in a scrolled
/// page), set the list origin: the distance from the container's scroll origin to the list's
/// leading edge. Raw `scroll_top` values are translated before reaching the engine.
#[derive(Clone, Debug)]
pub struct Controller {
    list: ShadowList,
    scroll: ScrollTracker,
    list_origin: u64,
}

impl Controller {
    pub fn new(options: ShadowListOptions) -> Self {
        Self::from_list(ShadowList::new(options))
    }

    pub fn from_list(list: ShadowList) -> Self {
        Self {
            list,
            scroll: ScrollTracker::new(),
            list_origin: 0,
        }
    }

    pub fn with_scroll_tracker(mut self, scroll: ScrollTracker) -> Self {
        self.scroll = scroll;
        self.sync_scroll();
        self
    }

    pub fn list(&self) -> &ShadowList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ShadowList {
        &mut self.list
    }

    pub fn into_list(self) -> ShadowList {
        self.list
    }

    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_scrolling()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll.direction()
    }

    pub fn list_origin(&self) -> u64 {
        self.list_origin
    }

    pub fn set_list_origin(&mut self, list_origin: u64) {
        if self.list_origin == list_origin {
            return;
        }
        adebug!(list_origin, "set_list_origin");
        self.list_origin = list_origin;
        self.sync_scroll();
    }

    /// Call this when the scroll container was resized.
    pub fn on_viewport_height(&mut self, viewport_height: u32) {
        self.list.set_viewport_height(viewport_height);
        self.sync_scroll();
    }

    /// Call this when the UI reports a scroll position change (e.g. user wheel/drag).
    ///
    /// Returns `false` when the position did not move.
    pub fn on_scroll(&mut self, scroll_top: u64, now_ms: u64) -> bool {
        if !self.scroll.on_scroll_event(scroll_top, now_ms) {
            return false;
        }
        atrace!(scroll_top, now_ms, "on_scroll");
        self.move_list(self.list_offset());
        true
    }

    /// Advances the `is_scrolling` debounce.
    ///
    /// Returns `true` on the tick where scrolling ends.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let ended = self.scroll.update(now_ms);
        if ended {
            adebug!(now_ms, scroll_top = self.scroll.scroll_top(), "scroll ended");
        }
        ended
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.list.set_item_count(item_count);
        self.sync_scroll();
    }

    /// Applies a new row height. A height of 0 means "not provided" and is ignored.
    pub fn set_item_height(&mut self, item_height: u32) {
        if item_height == 0 {
            return;
        }
        self.list.set_item_height(item_height);
        self.sync_scroll();
    }

    pub fn set_viewport_padding(&mut self, viewport_padding: u32) {
        self.list.set_viewport_padding(viewport_padding);
        self.sync_scroll();
    }

    /// Height of the box the placements are laid out in.
    pub fn content_height(&self) -> u64 {
        self.list.total_height()
    }

    pub fn for_each_placement(&self, mut f: impl FnMut(ItemPlacement)) {
        self.list.for_each_visible_item(|item| f(item.into()));
    }

    /// Collects the current placements into `out` (clears `out` first).
    pub fn placements(&self, out: &mut Vec<ItemPlacement>) {
        out.clear();
        self.for_each_placement(|p| out.push(p));
    }

    /// Hands every visible row to `renderer`, in index order.
    pub fn render<R: ItemRenderer>(&self, renderer: &mut R) -> Vec<R::Output> {
        let mut out = Vec::with_capacity(self.list.visible_items().len());
        self.for_each_placement(|p| out.push(renderer.render_item(p)));
        out
    }

    fn list_offset(&self) -> u64 {
        self.scroll.scroll_top().saturating_sub(self.list_origin)
    }

    fn move_list(&mut self, offset: u64) {
        self.list
            .move_scroll_offset(i64::try_from(offset).unwrap_or(i64::MAX));
    }

    // The engine re-anchors on the leading row after a mutation; pull it back to the container's
    // real position so the two never disagree.
    fn sync_scroll(&mut self) {
        let target = self.list_offset().min(self.list.max_scroll_offset());
        if self.list.scroll_offset() != target {
            self.move_list(target);
        }
    }
}
