//! Byte-sortable encodings.
//!
//! Each submodule holds the bit transform for one family of categories. The
//! transforms return fixed-size arrays where the width is fixed, so callers
//! that build keys by hand never allocate.
//!
//! - [`int`] - booleans and signed/unsigned integers
//! - [`float`] - IEEE-754 `f32`/`f64`
//! - [`time`] - zone-aware instants
//! - [`sortable`] - the [`Encoder`] dispatching a [`Value`](crate::Value) to
//!   the right transform
//!
//! [`EncodeSortable`] is the capability shared by the built-in types and
//! caller types.

pub mod float;
pub mod int;
pub mod sortable;
pub mod time;
mod traits;


pub use sortable::{encode, Encoder};
pub use traits::EncodeSortable;
