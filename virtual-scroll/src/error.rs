use core::fmt;

/// Rejected configuration.
///
/// This is the only failure the engine reports: everything downstream divides by
/// `item_height` or subtracts `container_height`, so a degenerate geometry is refused
/// up front. Runtime inputs (scroll offsets, collection changes) are always clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroItemHeight,
    ZeroContainerHeight,
    /// Horizontal scrolling was enabled with a zero-width viewport.
    ZeroContainerWidth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItemHeight => f.write_str("item_height must be greater than zero"),
            Self::ZeroContainerHeight => f.write_str("container_height must be greater than zero"),
            Self::ZeroContainerWidth => f.write_str(
                "container_width must be greater than zero when horizontal scrolling is enabled",
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
