use super::errors::JwtError;

/// Authorization scheme prefix expected in front of the token.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
///
/// # Arguments
/// * `header_value` - Raw header value, `None` if the header is absent
///
/// # Errors
/// * `MissingCredentials` - Header absent, not using the Bearer scheme, or empty token
pub fn bearer_token(header_value: Option<&str>) -> Result<&str, JwtError> {
    header_value
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(JwtError::MissingCredentials)
}
