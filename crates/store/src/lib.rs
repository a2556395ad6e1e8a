//! `soletrack-store` — persistence boundary for users and shoes.
//!
//! The store is modeled after an external document store: atomic
//! single-record operations, lookup by id and by filter, no multi-record
//! transactions. Traits keep the API layer storage-agnostic; the shipped
//! implementations are in-memory.

pub mod error;
pub mod shoe;
pub mod shoes;
pub mod user;
pub mod users;

pub use error::StoreError;
pub use shoe::Shoe;
pub use shoes::{InMemoryShoeStore, ShoeStore};
pub use user::{PublicUser, User};
pub use users::{InMemoryUserStore, UserStore};
