//! HTTP server configuration object.

use std::net::SocketAddr;

use users_service::outbound::persistence::DbPool;

/// Everything [`super::create_server`] needs once startup checks passed.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Bundle the bound address with the ready pool.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
