use crate::*;

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use virtual_scroll::{Align, ScrollState, VirtualScrollConfig};

fn board(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

fn controller(config: VirtualScrollConfig, n: usize) -> ListController<u32> {
    let mut c = ListController::new(config, |_: &ScrollState| {}).unwrap();
    c.set_items(board(n));
    c
}

#[test]
fn spacer_and_placements_follow_state() {
    let cfg = VirtualScrollConfig::new(120, 600)
        .with_overscan(5)
        .with_horizontal_scrolling(1600, 400);
    let mut c = controller(cfg, 1000);
    c.on_scroll(1200, 0, 0);

    assert_eq!(
        c.spacer(),
        Spacer {
            height: 120_000,
            width: 1600
        }
    );

    let placed: Vec<_> = c.placements().collect();
    assert_eq!(placed.len(), 15);
    assert_eq!(
        placed[0],
        ItemPlacement {
            index: 5,
            top: 600,
            height: 120
        }
    );
    assert_eq!(placed[14].index, 19);
    assert_eq!(placed[14].bottom(), 2400);
    assert!(placed.windows(2).all(|w| w[1].top == w[0].bottom()));

    assert_eq!(window_translate(&c.state(), 120), 600 - 1200);
}

#[test]
fn placements_empty_for_empty_collection() {
    let c = controller(VirtualScrollConfig::new(10, 100), 0);
    assert_eq!(c.placements().count(), 0);
    assert_eq!(c.spacer(), Spacer::default());
}

#[test]
fn tween_reaches_target_monotonically() {
    let mut c = controller(VirtualScrollConfig::new(1, 10), 1000);

    let to = c.start_tween_to_index(500, Align::Start, 0, 100, Easing::EaseInOutCubic);
    assert_eq!(to, 500);
    assert!(c.is_animating());

    let mut last = 0u64;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        if let Some(off) = c.tick(now_ms) {
            assert!(off >= last);
            last = off;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(c.state().scroll_top, to);
}

#[test]
fn user_scroll_cancels_tween() {
    let mut c = controller(VirtualScrollConfig::new(10, 100), 1000);
    c.start_tween_to_offset(5000, 0, 200, Easing::Linear);
    c.tick(50);
    c.on_scroll(30, 0, 60);
    assert!(!c.is_animating());
    assert_eq!(c.state().scroll_top, 30);
    assert_eq!(c.tick(500), None);
}

#[test]
fn tween_target_is_clamped() {
    let mut c = controller(VirtualScrollConfig::new(10, 100), 20);
    let to = c.start_tween_to_offset(10_000, 0, 50, Easing::Linear);
    assert_eq!(to, 100);
    c.tick(50);
    assert_eq!(c.state().scroll_top, 100);
}

#[test]
fn retarget_keeps_current_position() {
    let mut c = controller(VirtualScrollConfig::new(1, 10), 10_000);
    c.start_tween_to_offset(1000, 0, 100, Easing::Linear);
    assert_eq!(c.tick(50), Some(500));
    c.start_tween_to_offset(2000, 50, 100, Easing::Linear);
    assert_eq!(c.tick(50), Some(500));
    assert_eq!(c.tick(100), Some(1250));
    assert_eq!(c.tick(150), Some(2000));
    assert!(!c.is_animating());
}

#[test]
fn tick_releases_throttled_scroll() {
    let cfg = VirtualScrollConfig::new(10, 100)
        .with_smooth_scrolling(true)
        .with_smoothing_interval_ms(16);
    let mut c = controller(cfg, 1000);
    c.on_scroll(100, 0, 0);
    c.on_scroll(400, 0, 5);
    assert_eq!(c.state().scroll_top, 100);
    assert_eq!(c.tick(10), None);
    assert_eq!(c.tick(16), Some(400));
    assert_eq!(c.tick(40), None);
}

#[test]
fn dispose_silences_pending_work() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls2 = Arc::clone(&calls);
    let cfg = VirtualScrollConfig::new(10, 100).with_smooth_scrolling(true);
    let mut c = ListController::<u32>::new(cfg, move |_: &ScrollState| {
        calls2.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();
    c.set_items(board(1000));
    c.on_scroll(100, 0, 0);
    c.on_scroll(900, 0, 1);
    let before = calls.load(Ordering::Relaxed);

    c.dispose();
    assert_eq!(c.tick(1_000), None);
    assert_eq!(calls.load(Ordering::Relaxed), before);

    c.start_tween_to_offset(500, 0, 10, Easing::Linear);
    c.dispose();
    assert_eq!(c.tick(1_000), None);
    assert_eq!(calls.load(Ordering::Relaxed), before);
}

#[test]
fn resize_goes_through_validation() {
    let mut c = controller(VirtualScrollConfig::new(10, 100), 1000);
    c.on_resize(300, 0).unwrap();
    assert_eq!(c.manager().config().container_height, 300);
    assert!(c.on_resize(0, 0).is_err());
    assert_eq!(c.manager().config().container_height, 300);
}

#[test]
fn easing_endpoints() {
    for easing in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseInOutCubic] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert!(easing.apply(0.5) > 0.0 && easing.apply(0.5) < 1.0);
    }
    let t = ScrollTween::new(10, 0, 0, 0, Easing::default());
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(0), 10);
    assert_eq!(t.sample(1), 0);
}
