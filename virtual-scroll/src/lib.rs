//! A headless virtual scrolling engine for fixed-height lists.
//!
//! For host-side helpers (spacer geometry, placements, tween scrolling), see the
//! `virtual-scroll-adapter` crate.
//!
//! Given a scroll offset, a viewport height and a large backing collection, the engine decides
//! which contiguous window of items must actually be materialized: floor/ceil windowing over a
//! fixed row height, overscan on both edges, clamping of any host-reported offset, and optional
//! throttling of rapid scroll input.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to:
//! - call `set_items` whenever its data source changes
//! - forward raw scroll offsets to `handle_scroll` (or `handle_scroll_at` + `tick`)
//! - size a spacer to `total_height`/`total_width` and place rows at `index * item_height`
//!
//! ```
//! use virtual_scroll::{VirtualScrollConfig, VirtualScrollManager};
//!
//! let config = VirtualScrollConfig::new(120, 600).with_overscan(5);
//! let mut m: VirtualScrollManager<u32> = VirtualScrollManager::new(config, |_state| {}).unwrap();
//! m.set_items((0..1000).collect::<Vec<u32>>());
//! m.handle_scroll(1200, 0);
//!
//! let visible = m.get_visible_items();
//! assert_eq!((visible.start_index, visible.end_index), (5, 19));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod deferred;
mod error;
mod manager;
mod state;
mod types;
pub mod window;


pub use config::{
    DEFAULT_OVERSCAN, DEFAULT_SMOOTHING_INTERVAL_MS, OnStateChange, VirtualScrollConfig,
};
pub use deferred::Deferred;
pub use error::ConfigError;
pub use manager::VirtualScrollManager;
pub use state::{ScrollState, VisibleItems};
pub use types::{Align, ScrollDirection, VisibleRange};

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub const LOG_TARGET: &str = "virtual_scroll";
