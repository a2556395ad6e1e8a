use std::sync::Arc;

use soletrack_auth::{Principal, TokenCodec};
use soletrack_store::{InMemoryShoeStore, InMemoryUserStore, ShoeStore, UserStore};

use crate::config::Config;

/// Application context, constructed once at startup and injected into
/// handlers. Replaces module-level globals: lifecycle = created at boot,
/// dropped at shutdown.
#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UserStore>,
    pub shoes: Arc<dyn ShoeStore>,
    pub tokens: Arc<TokenCodec>,
}

impl AppContext {
    pub fn new(
        users: Arc<dyn UserStore>,
        shoes: Arc<dyn ShoeStore>,
        tokens: Arc<TokenCodec>,
    ) -> Self {
        Self {
            users,
            shoes,
            tokens,
        }
    }

    /// Context backed by the in-memory stores.
    pub fn in_memory(config: &Config) -> Self {
        Self::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryShoeStore::new()),
            Arc::new(TokenCodec::new(
                config.jwt_secret.as_bytes(),
                config.token_ttl,
            )),
        )
    }
}

/// Principal context for a request (attached by the auth middleware).
#[derive(Debug, Clone)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
