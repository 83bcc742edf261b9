//! Encoder configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an [`Encoder`](crate::Encoder).
///
/// The defaults produce the canonical encoding. Options only exist for
/// compatibility with stores that place extra constraints on keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Encode empty text as a single `0x00` byte instead of zero bytes.
    ///
    /// Some stores do not accept empty keys or bucket names. The sentinel
    /// still sorts before every non-empty string but is indistinguishable
    /// from the one-character string `"\0"`. Raw bytes are never affected.
    /// Default: false
    pub empty_text_sentinel: bool,
}

impl EncodeConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the empty text sentinel.
    #[must_use]
    pub const fn empty_text_sentinel(mut self, enabled: bool) -> Self {
        self.empty_text_sentinel = enabled;
        self
    }
}
