//! HTTP API for the brand-scoped shoe inventory service.

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod middleware;
