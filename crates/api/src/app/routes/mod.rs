pub mod auth;
pub mod shoes;
pub mod system;
pub mod users;
