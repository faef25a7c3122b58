//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;

impl HttpServer {
    /// Turn a bind failure into an actionable message
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> GatewayError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => GatewayError::server(format!(
                "Port {} is already in use. Stop the other process (lsof -i:{}) \
                 or set SERVER_PORT, e.g. SERVER_PORT={}",
                port,
                port,
                port.saturating_add(1)
            )),
            std::io::ErrorKind::PermissionDenied => GatewayError::server(format!(
                "Permission denied for port {}. Use a port >= 1024 via SERVER_PORT",
                port
            )),
            _ => GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
