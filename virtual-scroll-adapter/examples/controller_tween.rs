// Example: a host frame loop driving a ListController (throttled wheel input + tween jump).
use virtual_scroll::{Align, ScrollState, VirtualScrollConfig};
use virtual_scroll_adapter::{Easing, ListController};

fn main() {
    let config = VirtualScrollConfig::new(28, 560)
        .with_overscan(3)
        .with_smooth_scrolling(true)
        .with_smoothing_interval_ms(16);
    let mut c = ListController::<u32>::new(config, |s: &ScrollState| {
        println!(
            "render top={} rows={}..={}",
            s.scroll_top, s.visible_start_index, s.visible_end_index
        );
    })
    .expect("valid geometry");
    c.set_items((0..50_000u32).collect::<Vec<_>>());
    println!("spacer={:?}", c.spacer());

    // A burst of wheel events every 4ms: coalesced to one update per 16ms frame.
    let mut now_ms = 0u64;
    for step in 1..=12i64 {
        c.on_scroll(step * 40, 0, now_ms);
        now_ms += 4;
        c.tick(now_ms);
    }
    c.tick(now_ms + 16);

    // "Jump to ticket" with motion instead of a hard cut.
    let target = c.start_tween_to_index(42_000, Align::Center, now_ms, 240, Easing::EaseInOutCubic);
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            // A host with a native scroll container writes `off` back here.
            let _ = off;
        }
    }
    println!("arrived at {target}: first row={:?}", c.placements().next());

    c.dispose();
}
