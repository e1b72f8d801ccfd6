//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use burzcontent::inbound::http::state::HttpStatePorts;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) ports: HttpStatePorts,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with fresh in-memory stores.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ports: HttpStatePorts::in_memory(),
        }
    }

    /// Serve from the given stores instead of fresh in-memory ones.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests to share stores")
    )]
    #[must_use]
    pub fn with_ports(mut self, ports: HttpStatePorts) -> Self {
        self.ports = ports;
        self
    }
}
