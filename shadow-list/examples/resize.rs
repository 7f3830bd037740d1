// Example: viewport resizes and row-height changes keep the leading row in place.
use shadow_list::{ShadowList, ShadowListOptions};

fn main() {
    let mut list = ShadowList::new(ShadowListOptions::new(500, 20, 200));
    list.set_on_change(Some(|l: &ShadowList| {
        println!(
            "  changed: offset={} range={:?} total_height={}",
            l.scroll_offset(),
            l.visible_range(),
            l.total_height()
        );
    }));

    println!("scroll to 1_010");
    list.move_scroll_offset(1_010);

    println!("viewport 200 -> 320");
    list.set_viewport_height(320);

    println!("row height 20 -> 32");
    list.set_item_height(32);

    println!("overscan 0 -> 64");
    list.set_viewport_padding(64);
}
