//! URL helpers for building absolute API links.

use axum::http::HeaderMap;

/// Request origin (`{scheme}://{host}`), honoring forwarding headers when present.
///
/// Hosts with an explicit port are assumed to be plain HTTP (local development); bare
/// hostnames default to HTTPS.
pub fn origin_from_headers(headers: &HeaderMap) -> String {
    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get("host"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    let scheme = headers
        .get("x-forwarded-proto")
        .or_else(|| headers.get("x-forwarded-scheme"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or(if host.contains(':') { "http" } else { "https" });

    format!("{}://{}", scheme, host)
}
