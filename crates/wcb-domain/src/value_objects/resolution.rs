//! Host, port and URL derivation
//!
//! Pure string helpers used by [`ConnectionSettings`](super::ConnectionSettings)
//! and by the local construction strategy. Host strings may embed a port
//! (`example.com:9200`), be an IPv6 loopback literal (`::1`) or a bracketed
//! IPv6 literal (`[fe80::1]:8080`).

use crate::constants::{HTTP_DEFAULT_PORT, HTTPS_DEFAULT_PORT, IPV6_LOOPBACK};

/// URL scheme for the given security flag
pub fn protocol(secure: bool) -> &'static str {
    if secure { "https" } else { "http" }
}

/// Port implied by the scheme for the given security flag
pub fn implied_port(secure: bool) -> u16 {
    if secure {
        HTTPS_DEFAULT_PORT
    } else {
        HTTP_DEFAULT_PORT
    }
}

/// Build `{protocol}://{target}`
pub fn url_for(secure: bool, target: &str) -> String {
    format!("{}://{}", protocol(secure), target)
}

/// Host without an embedded port
///
/// The IPv6 loopback literal is returned unchanged; a bracketed literal
/// keeps its brackets and loses only a trailing `:port`.
pub fn host_only(host: &str) -> &str {
    if host == IPV6_LOOPBACK {
        return host;
    }
    if host.starts_with('[') {
        return host.find(']').map_or(host, |end| &host[..=end]);
    }
    match host.split_once(':') {
        Some((name, _)) => name,
        None => host,
    }
}

/// Port embedded in a host string
///
/// Only digits after a single `:` (or after `]:` for a bracketed literal)
/// count as an embedded port.
pub fn embedded_port(host: &str) -> Option<u16> {
    let port = if host.starts_with('[') {
        let end = host.find(']')?;
        host[end + 1..].strip_prefix(':')?
    } else {
        if host.matches(':').count() != 1 {
            return None;
        }
        host.split_once(':')?.1
    };
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}

/// Join host and port
///
/// The port is omitted only when it is the one the scheme implies (80 for
/// `http`, 443 for `https`). Unbracketed IPv6 hosts are bracketed before a
/// port is appended.
pub fn host_with_port(host: &str, port: u16, secure: bool) -> String {
    if port == implied_port(secure) {
        return host.to_string();
    }
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
