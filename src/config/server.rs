//! HTTP server configuration.

/// Bind address used when `HTTP_BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Resolves the HTTP bind address from an optional environment value.
#[must_use]
pub fn resolve_bind_addr(env_value: Option<String>) -> String {
    env_value.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

/// Gets the HTTP bind address from the `HTTP_BIND_ADDR` environment variable,
/// falling back to [`DEFAULT_BIND_ADDR`] if unset.
#[must_use]
pub fn get_bind_addr() -> String {
    resolve_bind_addr(std::env::var("HTTP_BIND_ADDR").ok())
}
