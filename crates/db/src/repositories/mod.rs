//! Repository layer.
//!
//! [`CarRepo`] is a zero-sized struct providing async CRUD methods that accept
//! `&PgPool` as the first argument. The [`CarStore`](crate::store::CarStore)
//! implementations wrap it (or replace it, for the in-memory store).

pub mod car_repo;
pub mod memory;

pub use car_repo::{CarRepo, PgCarStore};
pub use memory::InMemoryCarStore;
