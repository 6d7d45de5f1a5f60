//! Conversion settings threaded through every classifier call.

use serde::Deserialize;

/// Configuration for class generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Omit classes that restate Tailwind defaults: `flex-row` on
    /// horizontal containers and `space-*` on containers with fewer than
    /// two children. Default: **true**.
    pub optimize: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { optimize: true }
    }
}

impl ConvertConfig {
    /// Emit every class, defaults included.
    pub const fn verbose() -> Self {
        Self { optimize: false }
    }
}
