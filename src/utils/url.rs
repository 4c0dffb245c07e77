//! Joining the backend base URL with endpoint paths.
//!
//! Base URLs come from flags, the environment, and the config file, so they
//! may or may not end in a slash; endpoints are written with a leading one.

/// Strip trailing slashes from a base URL.
///
/// ```
/// use faceless::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("http://chat.local/api//"), "http://chat.local/api");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Append an endpoint path to a base URL with exactly one slash between them.
///
/// ```
/// use faceless::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:8000/", "/generate_persona"),
///     "http://localhost:8000/generate_persona"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalize_base_url(base_url), endpoint)
}
