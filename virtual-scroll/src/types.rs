/// Where a target item should land inside the viewport for programmatic scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Scroll the minimum distance needed to bring the item fully into view.
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// An inclusive index window over the backing collection.
///
/// For an empty collection both bounds are `0` and `len` is `0`; use
/// [`VisibleRange::is_empty`] rather than comparing bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
    pub len: usize,
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
        len: 0,
    };

    pub(crate) fn inclusive(start_index: usize, end_index: usize) -> Self {
        debug_assert!(start_index <= end_index, "inverted window");
        Self {
            start_index,
            end_index,
            len: end_index - start_index + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        !self.is_empty() && (self.start_index..=self.end_index).contains(&index)
    }

    /// The half-open equivalent, suitable for slicing.
    pub fn as_slice_range(&self) -> core::ops::Range<usize> {
        if self.is_empty() {
            return 0..0;
        }
        self.start_index..self.end_index + 1
    }
}
