//! Localhost and private-network host classification.

use std::net::IpAddr;

/// True when `host` names the local machine or a private network address.
///
/// `localhost` matches by name (case-insensitive). Everything else must be
/// an IP literal whose address is contained in a loopback range or one of
/// the RFC 1918 private ranges (10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16),
/// or the IPv6 loopback. Bracketed IPv6 literals are accepted. A domain
/// name that merely starts with a matching digit sequence (e.g.
/// `10.example.com`) is an ordinary domain, not a private address.
pub fn is_localhost_or_private(host: &str) -> bool {
    let normalized = host.to_ascii_lowercase();
    if normalized == "localhost" {
        return true;
    }
    let literal = normalized.trim_start_matches('[').trim_end_matches(']');
    match literal.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => v4.is_loopback() || v4.is_private(),
        Ok(IpAddr::V6(v6)) => v6.is_loopback(),
        Err(_) => false,
    }
}
