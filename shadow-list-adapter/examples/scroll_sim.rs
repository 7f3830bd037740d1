use shadow_list::ShadowListOptions;
use shadow_list_adapter::{Controller, ItemPlacement};

fn main() {
    // Example: a list embedded 120px below the top of a scrolled page.
    //
    // An adapter would:
    // - forward container scroll/resize events to the controller
    // - call tick(now_ms) in a frame loop / timer to detect scroll end
    // - render the returned placements inside a box of `content_height()`
    let mut c = Controller::new(ShadowListOptions::new(10_000, 32, 0).with_viewport_padding(64));
    c.set_list_origin(120);
    c.on_viewport_height(640);

    let mut now_ms = 0u64;
    for scroll_top in (0..4_000u64).step_by(400) {
        now_ms += 16;
        c.on_scroll(scroll_top, now_ms);
        let rows = c.render(&mut |p: ItemPlacement| format!("row {} @ {}", p.index, p.top));
        println!(
            "t={now_ms} scroll_top={scroll_top} scrolling={} rows={} first={:?}",
            c.is_scrolling(),
            rows.len(),
            rows.first()
        );
    }

    while !c.tick(now_ms) {
        now_ms += 16;
    }
    println!(
        "scroll ended at t={now_ms}; content_height={}",
        c.content_height()
    );
}
