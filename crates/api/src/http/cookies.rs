//! Session cookie parsing and formatting

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Extract a cookie value by name from the request headers.
///
/// Handles multiple `Cookie` headers and multiple pairs per header. Values
/// are returned verbatim; session cookie values never need percent-decoding.
pub fn extract_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };

        for pair in raw.split(';') {
            if let Some((key, value)) = pair.trim().split_once('=') {
                if key == name {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}

/// Format the session `Set-Cookie` value.
///
/// `HttpOnly` keeps the cookie away from page scripts; `SameSite=Lax` still
/// lets the OAuth redirect back from the provider carry it.
#[must_use]
pub fn session_set_cookie(name: &str, value: &str, ttl_seconds: i64) -> String {
    format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}")
}
