use alloc::sync::Arc;

use crate::{ConfigError, ScrollState};

/// A listener fired with the freshly computed state after every recomputation.
pub type OnStateChange = Arc<dyn Fn(&ScrollState) + Send + Sync>;

pub const DEFAULT_OVERSCAN: usize = 5;
pub const DEFAULT_SMOOTHING_INTERVAL_MS: u64 = 16;

/// Geometry and behavior of a [`crate::VirtualScrollManager`].
///
/// This is plain data: the listener is handed to the manager separately, so a config can be
/// cloned, compared, persisted (with `feature = "serde"`) and swapped in with
/// `VirtualScrollManager::set_config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualScrollConfig {
    /// Fixed height of every row, in pixels.
    pub item_height: u32,
    /// Height of the scroll viewport, in pixels.
    pub container_height: u32,
    /// Extra rows materialized beyond each edge of the viewport.
    pub overscan: usize,

    /// Throttle scroll updates fed through `handle_scroll_at`.
    ///
    /// When enabled, at most one update is applied per `smoothing_interval_ms`; the newest
    /// suppressed offset is kept as a deferred update and applied by `tick`/`flush`.
    pub enable_smooth_scrolling: bool,
    pub smoothing_interval_ms: u64,

    /// Track `scroll_left` and `total_width` in addition to the vertical axis.
    pub enable_horizontal_scrolling: bool,
    /// Full width of a row. Only read in horizontal mode.
    pub content_width: u32,
    /// Width of the scroll viewport. Only read in horizontal mode.
    pub container_width: u32,
}

impl VirtualScrollConfig {
    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
            overscan: DEFAULT_OVERSCAN,
            enable_smooth_scrolling: false,
            smoothing_interval_ms: DEFAULT_SMOOTHING_INTERVAL_MS,
            enable_horizontal_scrolling: false,
            content_width: 0,
            container_width: 0,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_smooth_scrolling(mut self, enabled: bool) -> Self {
        self.enable_smooth_scrolling = enabled;
        self
    }

    pub fn with_smoothing_interval_ms(mut self, interval_ms: u64) -> Self {
        self.smoothing_interval_ms = interval_ms;
        self
    }

    /// Enables the horizontal axis with the given row width and viewport width.
    pub fn with_horizontal_scrolling(mut self, content_width: u32, container_width: u32) -> Self {
        self.enable_horizontal_scrolling = true;
        self.content_width = content_width;
        self.container_width = container_width;
        self
    }

    /// Checks the geometric invariants the windowing math relies on.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first degenerate dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_height == 0 {
            return Err(ConfigError::ZeroItemHeight);
        }
        if self.container_height == 0 {
            return Err(ConfigError::ZeroContainerHeight);
        }
        if self.enable_horizontal_scrolling && self.container_width == 0 {
            return Err(ConfigError::ZeroContainerWidth);
        }
        Ok(())
    }

    /// Total scrollable height for `item_count` rows.
    pub fn total_height(&self, item_count: usize) -> u64 {
        (item_count as u64).saturating_mul(self.item_height as u64)
    }

    /// Total scrollable width; `0` unless horizontal scrolling is enabled.
    pub fn total_width(&self) -> u64 {
        if self.enable_horizontal_scrolling {
            self.content_width as u64
        } else {
            0
        }
    }

    /// Upper bound on how many rows a single window can hold.
    pub fn max_window_len(&self) -> usize {
        let per_viewport = self.container_height.div_ceil(self.item_height.max(1)) as usize;
        per_viewport
            .saturating_add(self.overscan.saturating_mul(2))
            .saturating_add(1)
    }
}
