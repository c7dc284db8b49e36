use alloc::sync::Arc;

use virtual_scroll::{Align, ConfigError, ScrollState, VirtualScrollConfig, VirtualScrollManager};

use crate::{Easing, ItemPlacement, ScrollTween, Spacer, placements};

fn to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// A framework-neutral controller that owns a [`VirtualScrollManager`] and the host workflows
/// around it: throttled user scrolling, tween-driven programmatic scrolling and teardown.
///
/// Adapters drive it by calling:
/// - `set_items` / `on_resize` when data or geometry changes
/// - `on_scroll` for every scroll event from the scroll container
/// - `tick(now_ms)` each frame/timer tick (advances tweens and deferred scroll updates)
/// - `dispose` when the view unmounts
///
/// When `tick` returns an offset, a host with a native scroll container should write it back to
/// the container so both stay in sync.
#[derive(Debug)]
pub struct ListController<T> {
    m: VirtualScrollManager<T>,
    tween: Option<ScrollTween>,
}

impl<T> ListController<T> {
    /// # Errors
    ///
    /// Returns [`ConfigError`] for degenerate geometry, see [`VirtualScrollManager::new`].
    pub fn new(
        config: VirtualScrollConfig,
        on_change: impl Fn(&ScrollState) + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_manager(VirtualScrollManager::new(config, on_change)?))
    }

    pub fn from_manager(m: VirtualScrollManager<T>) -> Self {
        Self { m, tween: None }
    }

    pub fn manager(&self) -> &VirtualScrollManager<T> {
        &self.m
    }

    pub fn manager_mut(&mut self) -> &mut VirtualScrollManager<T> {
        &mut self.m
    }

    pub fn into_manager(self) -> VirtualScrollManager<T> {
        self.m
    }

    pub fn state(&self) -> ScrollState {
        self.m.state()
    }

    pub fn spacer(&self) -> Spacer {
        Spacer::from_state(&self.m.state())
    }

    pub fn placements(&self) -> impl Iterator<Item = ItemPlacement> + '_ {
        placements(&self.m)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            vdebug!("tween cancelled");
        }
    }

    /// Replaces the backing collection. An active tween keeps running; its samples are clamped
    /// against the new length.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) {
        self.m.set_items(items);
    }

    /// # Errors
    ///
    /// See [`VirtualScrollManager::set_container_size`].
    pub fn on_resize(
        &mut self,
        container_height: u32,
        container_width: u32,
    ) -> Result<(), ConfigError> {
        self.m.set_container_size(container_height, container_width)
    }

    /// Call this when the scroll container reports new offsets (wheel, drag, keyboard).
    ///
    /// User input wins over programmatic motion: this cancels any active tween.
    pub fn on_scroll(&mut self, scroll_top: i64, scroll_left: i64, now_ms: u64) {
        self.cancel_animation();
        self.m.handle_scroll_at(scroll_top, scroll_left, now_ms);
    }

    /// Advances the controller.
    ///
    /// - With an active tween, applies its sample and returns the applied offset.
    /// - Otherwise, releases a due deferred scroll update and returns its offset, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let Some(tween) = self.tween else {
            return self.m.tick(now_ms).then(|| self.m.state().scroll_top);
        };

        let left = to_i64(self.m.state().scroll_left);
        self.m.handle_scroll(to_i64(tween.sample(now_ms)), left);
        if tween.is_done(now_ms) {
            vdebug!(to = tween.to, now_ms, "tween finished");
            self.tween = None;
        }
        Some(self.m.state().scroll_top)
    }

    /// Jumps to `index` immediately. Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        self.cancel_animation();
        self.m.scroll_to_index(index, align)
    }

    /// Starts a tween toward `index`. Returns the clamped target offset.
    pub fn start_tween_to_index(
        &mut self,
        index: usize,
        align: Align,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = self.m.scroll_to_index_offset(index, align);
        self.start_tween_to_offset(to, now_ms, duration_ms, easing)
    }

    /// Starts a tween toward `offset`. Returns the clamped target offset.
    ///
    /// A deferred user scroll still waiting to be applied is discarded; a running tween is
    /// retargeted from its current position.
    pub fn start_tween_to_offset(
        &mut self,
        offset: u64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = offset.min(self.m.max_scroll_top());
        self.m.cancel_pending();
        if let Some(tween) = self.tween.as_mut().filter(|t| t.easing == easing) {
            tween.retarget(now_ms, to, duration_ms);
        } else {
            let from = self.m.state().scroll_top;
            self.tween = Some(ScrollTween::new(from, to, now_ms, duration_ms, easing));
        }
        vdebug!(to, now_ms, duration_ms, "tween started");
        to
    }

    /// Drops every pending time-based update. After this, `tick` never notifies the listener
    /// until new input arrives.
    pub fn dispose(&mut self) {
        self.cancel_animation();
        self.m.cancel_pending();
    }
}
