//! `bytesort`
//!
//! Byte-sortable encodings of primitive values, for use as keys in ordered
//! key-value stores.
//!
//! # Overview
//!
//! Ordered stores (B-trees, LSM trees) compare keys as raw bytes. This crate
//! turns values into bytes whose unsigned lexicographic order is the natural
//! order of the values:
//!
//! - **Integers and booleans**: big-endian, with the sign bit of signed
//!   integers flipped
//! - **Floats**: IEEE-754 bits with a sign-dependent flip
//! - **Text and bytes**: passed through unchanged
//! - **Instants**: normalized to UTC, seconds and nanoseconds since year 1
//! - **Custom types**: anything implementing [`EncodeSortable`]
//!
//! Order is only guaranteed between values of the same category. Encodings
//! carry no type information and cannot be decoded.
//!
//! # Example
//!
//! ```
//! use bytesort::encode;
//!
//! let mut keys: Vec<Vec<u8>> = [0.1f32, -f32::MAX, 0.0, -0.1]
//!     .into_iter()
//!     .map(|f| encode(f).unwrap())
//!     .collect();
//! keys.sort();
//!
//! let expected: Vec<Vec<u8>> =
//!     [-f32::MAX, -0.1, 0.0, 0.1].into_iter().map(|f| encode(f).unwrap()).collect();
//! assert_eq!(keys, expected);
//! ```
//!
//! # Modules
//!
//! - [`encoding`] - Bit transforms, the [`Encoder`] and the [`EncodeSortable`] trait
//! - [`keys`] - Composite key building and prefix scan bounds
//! - [`types`] - The [`Value`] enum
//! - [`config`] - Encoder configuration ([`EncodeConfig`])
//! - [`error`] - Error types ([`EncodeError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod keys;
pub mod types;

// Re-export commonly used types
pub use config::EncodeConfig;
pub use encoding::{encode, EncodeSortable, Encoder};
pub use error::EncodeError;
pub use types::Value;
