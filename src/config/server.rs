/// Server configuration.
///
/// Default bind address for the HTTP/WebSocket server, overridable with the
/// `SNAKE_BIND_ADDR` environment variable (`host:port`).
use std::env;

use log::warn;

/// Default host the server binds to.
pub const BIND_HOST: &str = "127.0.0.1";

/// Default port the server binds to.
pub const BIND_PORT: u16 = 8080;

/// Environment variable overriding the bind address.
pub const BIND_ADDR_ENV: &str = "SNAKE_BIND_ADDR";

/// Resolve the bind address from the environment, falling back to the defaults.
pub fn bind_address() -> (String, u16) {
    match env::var(BIND_ADDR_ENV) {
        Ok(value) => parse_bind_address(&value).unwrap_or_else(|| {
            warn!("[Config] Ignoring malformed {}={:?}", BIND_ADDR_ENV, value);
            (BIND_HOST.to_string(), BIND_PORT)
        }),
        Err(_) => (BIND_HOST.to_string(), BIND_PORT),
    }
}

/// Parse `host:port`. Returns `None` on a missing host or invalid port.
pub fn parse_bind_address(value: &str) -> Option<(String, u16)> {
    let (host, port) = value.trim().rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    let port = port.parse().ok()?;
    Some((host.to_string(), port))
}
