//! API utilities for frontend-backend communication
//!
//! Joins the configured base URL with resource paths.

use super::config::use_config;

/// Base URL of the backend REST API
///
/// # Example
/// ```ignore
/// let url = join_url(&api_base(), "/menus/all");
/// ```
pub fn api_base() -> String {
    use_config().api_base_url
}

/// Plain concatenation of base and path; an empty path yields the base itself
pub fn join_url(base: &str, path: &str) -> String {
    let mut url = base.to_string();
    if !path.is_empty() {
        url.push_str(path);
    }
    url
}

/// Appends `?k=v&…` with URL-encoded values; no `?` when `params` is empty
pub fn with_query(url: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8080", "/ingredient-groups"),
            "http://localhost:8080/ingredient-groups"
        );
        assert_eq!(join_url("http://localhost:8080", ""), "http://localhost:8080");
    }

    #[test]
    fn test_with_query() {
        let url = with_query(
            "http://h/purchases",
            &[("size", "8".to_string()), ("startDate", "2024-03-01T10:00".to_string())],
        );
        assert_eq!(url, "http://h/purchases?size=8&startDate=2024-03-01T10%3A00");
        assert_eq!(with_query("http://h/x", &[]), "http://h/x");
    }
}
