// Example: a host feeding a ticket board of 100k rows into the manager.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use virtual_scroll::{Align, ScrollState, VirtualScrollConfig, VirtualScrollManager};

fn main() {
    let renders = Arc::new(AtomicUsize::new(0));
    let renders_in_cb = Arc::clone(&renders);

    let config = VirtualScrollConfig::new(32, 480).with_overscan(4);
    let mut m = VirtualScrollManager::<String>::new(config, move |s: &ScrollState| {
        renders_in_cb.fetch_add(1, Ordering::Relaxed);
        println!(
            "state: top={} window={}..={} spacer={}px",
            s.scroll_top, s.visible_start_index, s.visible_end_index, s.total_height
        );
    })
    .expect("valid geometry");

    let tickets: Vec<String> = (0..100_000).map(|i| format!("TICKET-{i}")).collect();
    m.set_items(tickets);
    m.handle_scroll(123_456, 0);

    for (index, top, title) in m.get_visible_items().iter_positioned().take(3) {
        println!("  row {index} at {top}px: {title}");
    }

    let off = m.scroll_to_index(99_999, Align::End);
    println!("after scroll_to_index: offset={off}");

    // The board was filtered down to a handful of tickets: the offset is pulled back in range.
    m.set_items(vec!["TICKET-1".to_string(), "TICKET-2".to_string()]);
    println!(
        "after filter: {:?} (renders={})",
        m.get_visible_items().items,
        renders.load(Ordering::Relaxed)
    );
}
