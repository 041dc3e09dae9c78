//! `Authorization: Bearer <token>` parsing

const BEARER_PREFIX: &str = "bearer ";

/// Extracts the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively. An empty token is treated as
/// no token at all.
pub fn bearer_token(header: &str) -> Option<&str> {
    let header = header.trim();
    let scheme = header.get(..BEARER_PREFIX.len())?;
    if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }
    let token = header[BEARER_PREFIX.len()..].trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
