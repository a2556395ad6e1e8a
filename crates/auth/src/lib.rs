//! `soletrack-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: token
//! signing/verification, credential hashing and the brand-scoping policy are
//! all expressed without reference to a transport or a store.

pub mod authorize;
pub mod claims;
pub mod password;
pub mod policy;
pub mod principal;
pub mod roles;
pub mod token;

pub use authorize::{AuthzError, authorize_role};
pub use claims::Claims;
pub use password::{BCRYPT_COST, PasswordError, hash_password, verify_password};
pub use policy::{
    PolicyError, authorize_brand_change, authorize_create, authorize_existing, list_scope,
};
pub use principal::Principal;
pub use roles::Role;
pub use token::{TokenCodec, TokenError};
