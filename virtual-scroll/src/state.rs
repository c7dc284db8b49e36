use crate::{ScrollDirection, VisibleRange};

/// An immutable snapshot of the manager's computed output.
///
/// A new snapshot is built on every recomputation and handed to the listener; fields are never
/// patched in place. With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Clamped vertical offset.
    pub scroll_top: u64,
    /// Clamped horizontal offset; always `0` unless horizontal scrolling is enabled.
    pub scroll_left: u64,
    /// First materialized index (overscan included).
    pub visible_start_index: usize,
    /// Last materialized index, inclusive (overscan included).
    pub visible_end_index: usize,
    /// `item_count * item_height`; size the host's spacer with this.
    pub total_height: u64,
    pub total_width: u64,
    pub item_count: usize,
    pub scroll_direction: Option<ScrollDirection>,
}

impl ScrollState {
    pub fn visible_range(&self) -> VisibleRange {
        if self.item_count == 0 {
            return VisibleRange::EMPTY;
        }
        VisibleRange::inclusive(self.visible_start_index, self.visible_end_index)
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// The slice of the backing collection to render, with its absolute index bounds.
///
/// Render each element at `top = (start_index + local_index) * item_height`; see
/// [`VisibleItems::iter_positioned`].
#[derive(Debug, PartialEq, Eq)]
pub struct VisibleItems<'a, T> {
    pub items: &'a [T],
    pub start_index: usize,
    pub end_index: usize,
    pub(crate) item_height: u32,
}

impl<T> Clone for VisibleItems<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VisibleItems<'_, T> {}

impl<'a, T> VisibleItems<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Yields `(index, top, item)` where `top` is the absolute pixel offset of the row.
    pub fn iter_positioned(&self) -> impl Iterator<Item = (usize, u64, &'a T)> + use<'a, T> {
        let start = self.start_index;
        let h = self.item_height as u64;
        self.items.iter().enumerate().map(move |(i, item)| {
            let index = start + i;
            (index, (index as u64).saturating_mul(h), item)
        })
    }
}
