use shadow_list::ShadowItem;

/// Where a renderer should place one materialized row.
///
/// `top` is measured from the list's leading edge (not from the scroll container), so a row is
/// absolutely positioned at `top` inside a content box of `Controller::content_height()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub index: usize,
    pub top: u64,
    pub height: u32,
}

impl ItemPlacement {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }

    /// Reconciliation key: a row keeps its identity while both its index and its position
    /// stay put.
    pub fn key(&self) -> (usize, u64) {
        (self.index, self.top)
    }
}

impl From<ShadowItem> for ItemPlacement {
    fn from(item: ShadowItem) -> Self {
        Self {
            index: item.index,
            top: item.offset,
            height: item.height,
        }
    }
}

/// The rendering side of the contract: turns one placement into whatever the UI layer draws.
///
/// The controller never inspects the output. Closures `FnMut(ItemPlacement) -> O` implement
/// this trait.
pub trait ItemRenderer {
    type Output;

    fn render_item(&mut self, placement: ItemPlacement) -> Self::Output;
}

impl<F, O> ItemRenderer for F
where
    F: FnMut(ItemPlacement) -> O,
{
    type Output = O;

    fn render_item(&mut self, placement: ItemPlacement) -> O {
        self(placement)
    }
}
