//! Error types for sortable encoding.

use thiserror::Error;

/// Maximum length for a custom error message in [`EncodeError::Custom`].
const MAX_MESSAGE_LEN: usize = 200;

/// Errors that can occur while producing a sortable encoding.
///
/// Every variant renders with a `bytesort:` prefix so the failure can be traced
/// back to this crate once it has been folded into a caller's own error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value's category has no sortable encoding.
    #[error("bytesort: unsupported type {type_name}")]
    UnsupportedType {
        /// Name of the rejected value's type.
        type_name: String,
    },

    /// The instant could not be serialized to its canonical binary form.
    #[error("bytesort: instant encoding failed: {0}")]
    Instant(String),

    /// A custom [`EncodeSortable`](crate::EncodeSortable) implementation failed.
    #[error("bytesort: custom encoding failed: {0}")]
    Custom(String),
}

impl EncodeError {
    /// Creates an unsupported type error.
    #[must_use]
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType { type_name: type_name.into() }
    }

    /// Creates a custom encoding error.
    ///
    /// The message is truncated to 200 characters for display.
    #[must_use]
    pub fn custom(message: impl std::fmt::Display) -> Self {
        let message = message.to_string();
        let truncated = match message.char_indices().nth(MAX_MESSAGE_LEN) {
            Some((end, _)) => format!("{}...", &message[..end]),
            None => message,
        };
        Self::Custom(truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_type_display() {
        let err = EncodeError::unsupported("map");
        assert_eq!(err.to_string(), "bytesort: unsupported type map");
    }

    #[test]
    fn instant_display() {
        let err = EncodeError::Instant("year -5 out of range".into());
        assert_eq!(err.to_string(), "bytesort: instant encoding failed: year -5 out of range");
    }

    #[test]
    fn custom_message_truncated() {
        let err = EncodeError::custom("x".repeat(500));
        match err {
            EncodeError::Custom(msg) => {
                assert_eq!(msg.len(), MAX_MESSAGE_LEN + 3);
                assert!(msg.ends_with("..."));
            }
            other => panic!("expected Custom, got {other:?}"),
        }
    }

    #[test]
    fn custom_message_truncated_on_char_boundary() {
        let err = EncodeError::custom("ä".repeat(300));
        match err {
            EncodeError::Custom(msg) => assert_eq!(msg.chars().count(), MAX_MESSAGE_LEN + 3),
            other => panic!("expected Custom, got {other:?}"),
        }
    }
}
