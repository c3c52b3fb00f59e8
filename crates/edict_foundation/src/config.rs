//! Configuration for order processing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default capacity for rendered and constructed order text.
pub const DISPLAY_SIZE: usize = 8192;

/// Configuration for order parsing, construction and rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrderConfig {
    /// Capacity used when rendering orders to text.
    pub display_size: usize,

    /// Capacity of the buffer programmatic orders are assembled in.
    pub build_size: usize,

    /// Whether closing the token stream tears down the payload store.
    pub clear_store_on_close: bool,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            display_size: DISPLAY_SIZE,
            build_size: DISPLAY_SIZE,
            clear_store_on_close: true,
        }
    }
}

impl OrderConfig {
    /// Creates a configuration for long-lived tools that keep orders across
    /// phases, such as an interactive console: the store survives `close`.
    #[must_use]
    pub fn persistent() -> Self {
        Self {
            clear_store_on_close: false,
            ..Self::default()
        }
    }

    /// Builder method to set the display size.
    #[must_use]
    pub fn with_display_size(mut self, size: usize) -> Self {
        self.display_size = size;
        self
    }

    /// Builder method to set the construction buffer size.
    #[must_use]
    pub fn with_build_size(mut self, size: usize) -> Self {
        self.build_size = size;
        self
    }

    /// Builder method to enable/disable store teardown on close.
    #[must_use]
    pub fn with_clear_store_on_close(mut self, clear: bool) -> Self {
        self.clear_store_on_close = clear;
        self
    }
}
