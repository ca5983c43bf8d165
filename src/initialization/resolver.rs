//! Resolver address parsing.
//!
//! Turns the `--resolver` command-line value into a socket address for the
//! DNS client.

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error_handling::InitializationError;

/// Port assumed when the resolver spec carries none.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Parses a `host[:port]` resolver spec into a socket address.
///
/// A spec without a colon gets the default DNS port appended. Hostname specs
/// are resolved through the system resolver once, at startup.
///
/// # Errors
///
/// Returns `InitializationError::ResolverAddrError` if the spec cannot be
/// parsed or yields no usable address.
pub fn parse_resolver_addr(spec: &str) -> Result<SocketAddr, InitializationError> {
    let with_port = if spec.contains(':') {
        spec.to_string()
    } else {
        format!("{spec}:{DEFAULT_DNS_PORT}")
    };

    with_port
        .to_socket_addrs()
        .map_err(|e| InitializationError::ResolverAddrError {
            addr: spec.to_string(),
            reason: e.to_string(),
        })?
        .next()
        .ok_or_else(|| InitializationError::ResolverAddrError {
            addr: spec.to_string(),
            reason: "no usable address".to_string(),
        })
}
