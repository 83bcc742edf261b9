//! Core data types.

mod value;

pub use value::Value;
