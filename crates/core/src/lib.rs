//! `soletrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod brand;
pub mod error;
pub mod id;

pub use brand::Brand;
pub use error::{DomainError, DomainResult};
pub use id::{ShoeId, UserId};
