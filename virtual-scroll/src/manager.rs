use alloc::sync::Arc;
use core::cmp;
use core::fmt;

use crate::config::OnStateChange;
use crate::deferred::Deferred;
use crate::window;
use crate::{
    Align, ConfigError, ScrollDirection, ScrollState, VirtualScrollConfig, VisibleItems,
    VisibleRange,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingScroll {
    scroll_top: i64,
    scroll_left: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WindowKey {
    scroll_top: u64,
    item_count: usize,
    item_height: u32,
    container_height: u32,
    overscan: usize,
}

/// A headless, fixed-height virtual scrolling engine.
///
/// The manager owns its configuration, the current backing collection and the current scroll
/// offsets, and derives a [`ScrollState`] from them. It holds no UI objects:
/// - the host feeds it collections via [`Self::set_items`] and offsets via
///   [`Self::handle_scroll`] / [`Self::handle_scroll_at`];
/// - every recomputation is pushed to the listener given at construction;
/// - the host pulls what to render with [`Self::get_visible_items`].
///
/// The collection is held as an `Arc<[T]>` and never mutated. Replacing it is the only way to
/// change what the manager sees.
pub struct VirtualScrollManager<T> {
    config: VirtualScrollConfig,
    on_change: OnStateChange,
    items: Arc<[T]>,
    state: ScrollState,

    window_cache: Option<(WindowKey, VisibleRange)>,
    pending: Deferred<PendingScroll>,
    last_applied_ms: Option<u64>,

    notify_depth: usize,
    notify_pending: bool,
}

impl<T> VirtualScrollManager<T> {
    /// Creates a manager with an empty collection.
    ///
    /// The listener is not invoked here; the first notification follows the first
    /// `set_items`/`handle_scroll`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `item_height` or `container_height` is zero, or when
    /// horizontal scrolling is enabled with a zero `container_width`.
    pub fn new(
        config: VirtualScrollConfig,
        on_change: impl Fn(&ScrollState) + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        Self::with_listener(config, Arc::new(on_change))
    }

    /// Same as [`Self::new`], but takes an already shared listener.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn with_listener(
        config: VirtualScrollConfig,
        on_change: OnStateChange,
    ) -> Result<Self, ConfigError> {
        config
            .validate()
            .inspect_err(|_err| vwarn!(error = %_err, "VirtualScrollManager::new rejected config"))?;
        vdebug!(
            item_height = config.item_height,
            container_height = config.container_height,
            overscan = config.overscan,
            smooth = config.enable_smooth_scrolling,
            horizontal = config.enable_horizontal_scrolling,
            "VirtualScrollManager::new"
        );
        Ok(Self {
            state: ScrollState {
                total_width: config.total_width(),
                ..ScrollState::default()
            },
            config,
            on_change,
            items: Arc::from([]),
            window_cache: None,
            pending: Deferred::new(),
            last_applied_ms: None,
            notify_depth: 0,
            notify_pending: false,
        })
    }

    pub fn config(&self) -> &VirtualScrollConfig {
        &self.config
    }

    /// The most recently computed (and notified) state.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.state.visible_range()
    }

    /// Replaces the listener. Does not notify.
    pub fn set_on_change(&mut self, on_change: impl Fn(&ScrollState) + Send + Sync + 'static) {
        self.on_change = Arc::new(on_change);
    }

    /// Replaces the backing collection and recomputes.
    ///
    /// Offsets are re-clamped against the new totals before the window is computed, so a
    /// shrinking collection pulls `scroll_top` back to the new maximum instead of leaving the
    /// window pointing past the end. Always notifies, even if nothing changed.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) {
        self.items = items.into();
        vtrace!(item_count = self.items.len(), "set_items");
        self.recompute(self.state.scroll_top, self.state.scroll_left);
    }

    /// Applies raw offsets from the host synchronously and notifies.
    ///
    /// Negative or overflowing values are clamped into `[0, total - container]` per axis. A
    /// pending deferred update from [`Self::handle_scroll_at`] is discarded: this call is
    /// newer.
    pub fn handle_scroll(&mut self, scroll_top: i64, scroll_left: i64) {
        if self.pending.cancel() {
            vtrace!("handle_scroll superseded a deferred update");
        }
        self.apply_raw(scroll_top, scroll_left);
    }

    /// Smoothing-aware scroll entry point.
    ///
    /// Without `enable_smooth_scrolling` this is [`Self::handle_scroll`]. With it, an update is
    /// applied immediately when at least `smoothing_interval_ms` passed since the last applied
    /// one; otherwise it is kept as a deferred update (replacing any older one) due at
    /// `last_applied + smoothing_interval_ms`. Drive deferred updates with [`Self::tick`].
    pub fn handle_scroll_at(&mut self, scroll_top: i64, scroll_left: i64, now_ms: u64) {
        if !self.config.enable_smooth_scrolling {
            self.last_applied_ms = Some(now_ms);
            self.handle_scroll(scroll_top, scroll_left);
            return;
        }

        let interval = self.config.smoothing_interval_ms;
        match self.last_applied_ms {
            Some(last) if now_ms.saturating_sub(last) < interval => {
                let due_ms = last.saturating_add(interval);
                let _superseded = self.pending.schedule(
                    PendingScroll {
                        scroll_top,
                        scroll_left,
                    },
                    due_ms,
                );
                vtrace!(
                    scroll_top,
                    scroll_left,
                    now_ms,
                    due_ms,
                    superseded = _superseded,
                    "handle_scroll_at deferred"
                );
            }
            _ => {
                self.pending.cancel();
                self.last_applied_ms = Some(now_ms);
                self.apply_raw(scroll_top, scroll_left);
            }
        }
    }

    /// Applies the deferred update if it is due. Returns `true` if one was applied.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(p) = self.pending.take_due(now_ms) else {
            return false;
        };
        self.last_applied_ms = Some(now_ms);
        self.apply_raw(p.scroll_top, p.scroll_left);
        true
    }

    /// Applies the deferred update now, regardless of its due time.
    pub fn flush(&mut self) -> bool {
        let Some(p) = self.pending.take() else {
            return false;
        };
        self.apply_raw(p.scroll_top, p.scroll_left);
        true
    }

    /// Discards the deferred update without applying it.
    ///
    /// Call this when the host tears down: afterwards no call can deliver a stale offset.
    pub fn cancel_pending(&mut self) -> bool {
        let cancelled = self.pending.cancel();
        if cancelled {
            vdebug!("cancel_pending discarded a deferred update");
        }
        cancelled
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn pending_due_ms(&self) -> Option<u64> {
        self.pending.due_ms()
    }

    /// The slice to render plus its absolute bounds. Pure: no recomputation, no notification.
    pub fn get_visible_items(&self) -> VisibleItems<'_, T> {
        let range = self.state.visible_range();
        VisibleItems {
            items: self.items.get(range.as_slice_range()).unwrap_or(&[]),
            start_index: range.start_index,
            end_index: range.end_index,
            item_height: self.config.item_height,
        }
    }

    /// Replaces the configuration, re-clamps offsets and notifies.
    ///
    /// Turning smoothing off applies any deferred update as part of this recomputation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] and leaves the manager untouched when `config` is invalid.
    pub fn set_config(&mut self, config: VirtualScrollConfig) -> Result<(), ConfigError> {
        config
            .validate()
            .inspect_err(|_err| vwarn!(error = %_err, "set_config rejected config"))?;
        vdebug!(
            item_height = config.item_height,
            container_height = config.container_height,
            overscan = config.overscan,
            "set_config"
        );
        self.config = config;

        if !config.enable_smooth_scrolling {
            if let Some(p) = self.pending.take() {
                self.apply_raw(p.scroll_top, p.scroll_left);
                return Ok(());
            }
        }
        self.recompute(self.state.scroll_top, self.state.scroll_left);
        Ok(())
    }

    /// Applies a viewport resize. A no-op when the size is unchanged.
    ///
    /// `container_width` is only validated and used in horizontal mode.
    ///
    /// # Errors
    ///
    /// See [`Self::set_config`].
    pub fn set_container_size(
        &mut self,
        container_height: u32,
        container_width: u32,
    ) -> Result<(), ConfigError> {
        let next = VirtualScrollConfig {
            container_height,
            container_width,
            ..self.config
        };
        if next == self.config {
            return Ok(());
        }
        self.set_config(next)
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.config.overscan == overscan {
            return;
        }
        self.config.overscan = overscan;
        self.recompute(self.state.scroll_top, self.state.scroll_left);
    }

    /// Batches several updates into a single notification.
    ///
    /// State is still recomputed by every inner call; only the listener is deferred until the
    /// outermost batch returns, and it fires at most once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);
        f(self);
        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::take(&mut self.notify_pending) {
            self.notify_now();
        }
    }

    pub fn max_scroll_top(&self) -> u64 {
        window::max_scroll(
            self.config.total_height(self.items.len()),
            self.config.container_height,
        )
    }

    pub fn max_scroll_left(&self) -> u64 {
        if !self.config.enable_horizontal_scrolling {
            return 0;
        }
        window::max_scroll(self.config.total_width(), self.config.container_width)
    }

    /// Absolute top offset of `index`, or `None` past the end of the collection.
    pub fn item_top(&self, index: usize) -> Option<u64> {
        (index < self.items.len()).then(|| window::item_top(index, self.config.item_height))
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        window::index_at_offset(offset, self.config.item_height, self.items.len())
    }

    /// The clamped `scroll_top` that brings `index` into view with the given alignment.
    ///
    /// Out-of-range indexes are clamped to the last item. Returns `0` for an empty collection.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        let count = self.items.len();
        if count == 0 {
            return 0;
        }
        let index = index.min(count - 1);
        let h = self.config.item_height as u64;
        let view = self.config.container_height as u64;
        let start = window::item_top(index, self.config.item_height);
        let end = start.saturating_add(h);

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => start.saturating_add(h / 2).saturating_sub(view / 2),
            Align::Auto => {
                let cur = self.state.scroll_top;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };
        target.min(self.max_scroll_top())
    }

    /// Scrolls to `index` synchronously (no smoothing) and returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.pending.cancel();
        self.recompute(offset, self.state.scroll_left);
        self.state.scroll_top
    }

    fn apply_raw(&mut self, scroll_top: i64, scroll_left: i64) {
        let top = window::clamp_offset(scroll_top, self.max_scroll_top());
        let left = window::clamp_offset(scroll_left, self.max_scroll_left());
        if i64::try_from(top).ok() != Some(scroll_top) {
            vtrace!(raw = scroll_top, clamped = top, "scroll_top clamped");
        }
        self.recompute(top, left);
    }

    fn recompute(&mut self, scroll_top: u64, scroll_left: u64) {
        let item_count = self.items.len();
        let scroll_top = scroll_top.min(self.max_scroll_top());
        let scroll_left = scroll_left.min(self.max_scroll_left());
        let range = self.window_for(scroll_top, item_count);

        let scroll_direction = match scroll_top.cmp(&self.state.scroll_top) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.state.scroll_direction,
        };

        self.state = ScrollState {
            scroll_top,
            scroll_left,
            visible_start_index: range.start_index,
            visible_end_index: range.end_index,
            total_height: self.config.total_height(item_count),
            total_width: self.config.total_width(),
            item_count,
            scroll_direction,
        };
        vtrace!(
            scroll_top,
            scroll_left,
            start = range.start_index,
            end = range.end_index,
            item_count,
            "recompute"
        );
        self.notify();
    }

    fn window_for(&mut self, scroll_top: u64, item_count: usize) -> VisibleRange {
        let key = WindowKey {
            scroll_top,
            item_count,
            item_height: self.config.item_height,
            container_height: self.config.container_height,
            overscan: self.config.overscan,
        };
        match self.window_cache {
            Some((cached, range)) if cached == key => range,
            _ => {
                let range = window::compute_window(
                    scroll_top,
                    key.container_height,
                    key.item_height,
                    key.overscan,
                    item_count,
                );
                self.window_cache = Some((key, range));
                range
            }
        }
    }

    fn notify(&mut self) {
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        self.notify_now();
    }

    fn notify_now(&self) {
        (self.on_change)(&self.state);
    }
}

impl<T> fmt::Debug for VirtualScrollManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualScrollManager")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("item_count", &self.items.len())
            .field("pending", &self.pending.due_ms())
            .field("last_applied_ms", &self.last_applied_ms)
            .finish_non_exhaustive()
    }
}
