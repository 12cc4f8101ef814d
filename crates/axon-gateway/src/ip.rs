//! Caller IP resolution from proxy headers.

use axum::http::HeaderMap;

/// Fallback when no proxy header is present (direct local calls).
const LOCALHOST: &str = "127.0.0.1";

/// Resolves the caller IP the backend should rate-limit on.
///
/// `x-forwarded-for` is what the edge proxy sets; `x-real-ip` covers
/// alternative deployments.
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|value| value.to_str().ok())
        .unwrap_or(LOCALHOST)
        .to_string()
}
