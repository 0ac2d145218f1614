//! Canonical URL form used for strict-mode allows.

/// Rebuilds `raw` as `scheme://host` + path + `?query`.
///
/// Fragment, port and userinfo are dropped. Returns `None` when the input
/// is relative, malformed, or has no host to rebuild around.
pub fn sanitize_url(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    let host = parsed.host_str()?;
    let query = parsed
        .query()
        .map(|q| format!("?{q}"))
        .unwrap_or_default();
    Some(format!("{}://{}{}{}", parsed.scheme(), host, parsed.path(), query))
}
