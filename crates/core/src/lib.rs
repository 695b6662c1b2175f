//! Domain types shared by the store and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod payload;
pub mod types;
