use crate::ShadowItem;

/// Rechains `offset` for every item from `from` onward.
///
/// Offsets before `from` are trusted as-is; `items[from]` is rebuilt from its predecessor (or
/// pinned to 0 when `from == 0`). This runs in `O(len - from)`.
pub(crate) fn chain_offsets(items: &mut [ShadowItem], from: usize) {
    if from >= items.len() {
        return;
    }
    if from == 0 {
        items[0].offset = 0;
    }
    for i in from.max(1)..items.len() {
        items[i].offset = items[i - 1].end();
    }
}

/// Sum of all heights, read off the trailing edge of the last item.
pub(crate) fn content_height(items: &[ShadowItem]) -> u64 {
    items.last().map_or(0, ShadowItem::end)
}

/// Returns the index of an item whose closed span `[offset, end]` contains `coord`.
///
/// The search bisects the monotone offsets with `mid = (left + right) / 2`, starting from
/// `left = 0, right = len`, and narrowing to `right = mid` / `left = mid`. The first probe that
/// contains `coord` wins, so a coordinate on the edge shared by two items resolves to whichever
/// of them is probed first.
///
/// `coord` must already be clamped to `[0, content_height]`. `None` means the offsets are not
/// contiguous (or the list is empty).
pub(crate) fn bisect(items: &[ShadowItem], coord: u64) -> Option<usize> {
    let mut left = 0usize;
    let mut right = items.len();
    if right == 0 {
        return None;
    }

    loop {
        let mid = left + (right - left) / 2;
        let item = items.get(mid)?;

        if left == right && !item.contains(coord) {
            return None;
        }

        if coord < item.offset {
            right = mid;
        } else if coord > item.end() {
            // With contiguous offsets the bracket always has room to move right here.
            if mid == left {
                return None;
            }
            left = mid;
        } else {
            return Some(mid);
        }
    }
}

/// Returns the last item whose leading edge is at or before `coord`.
pub(crate) fn leading_item_at(items: &[ShadowItem], coord: u64) -> Option<usize> {
    items
        .partition_point(|item| item.offset <= coord)
        .checked_sub(1)
}
