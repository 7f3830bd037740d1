// Example: minimal usage, scrolling, and reacting to data changes.
use shadow_list::{ShadowList, ShadowListOptions};

fn main() {
    let mut list =
        ShadowList::new(ShadowListOptions::new(1_000_000, 24, 480).with_viewport_padding(48));
    println!("total_height={}", list.total_height());
    println!("visible_range={:?}", list.visible_range());

    list.move_scroll_offset(123_456);
    let mut items = Vec::new();
    list.collect_visible_items(&mut items);
    println!(
        "after scroll: offset={} range={:?}",
        list.scroll_offset(),
        list.visible_range()
    );
    println!("first_visible={:?}", items.first());

    // The data source shrank under the viewport: the window re-anchors inside the new content.
    list.set_item_count(1_000);
    println!(
        "after shrink: offset={} range={:?} total_height={}",
        list.scroll_offset(),
        list.visible_range(),
        list.total_height()
    );
}
