use virtual_scroll::{ScrollState, VirtualScrollManager, window};

/// Size for the host's invisible scroll-track element.
///
/// Sizing a spacer to the full virtual content keeps native scrollbar proportions correct while
/// only a window of rows is materialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacer {
    pub height: u64,
    /// `0` unless horizontal scrolling is enabled.
    pub width: u64,
}

impl Spacer {
    pub fn from_state(state: &ScrollState) -> Self {
        Self {
            height: state.total_height,
            width: state.total_width,
        }
    }
}

/// Where one materialized row goes, in absolute content coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub index: usize,
    pub top: u64,
    pub height: u32,
}

impl ItemPlacement {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

/// Placements for every row in the manager's current window, in index order.
pub fn placements<T>(m: &VirtualScrollManager<T>) -> impl Iterator<Item = ItemPlacement> + '_ {
    let height = m.config().item_height;
    let range = m.visible_range();
    range.as_slice_range().map(move |index| ItemPlacement {
        index,
        top: window::item_top(index, height),
        height,
    })
}

/// Offset of the first materialized row relative to the viewport's top edge.
///
/// Hosts that translate a single container (instead of positioning each row) shift it by this
/// amount. It is `<= 0` whenever overscan rows sit above the viewport.
pub fn window_translate(state: &ScrollState, item_height: u32) -> i64 {
    let first = window::item_top(state.visible_start_index, item_height);
    let first = i64::try_from(first).unwrap_or(i64::MAX);
    let top = i64::try_from(state.scroll_top).unwrap_or(i64::MAX);
    first.saturating_sub(top)
}
