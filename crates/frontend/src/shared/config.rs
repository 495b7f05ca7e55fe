//! Frontend configuration
//!
//! Values are baked in at build time (`API_BASE_URL`, `FIFO_CONCURRENCY`)
//! and fall back to defaults derived from the page location.

use leptos::prelude::*;

/// Port of the backend when no explicit base URL is configured
pub const DEFAULT_API_PORT: u16 = 8080;
pub const DEFAULT_FIFO_CONCURRENCY: usize = 8;
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3000;
pub const DEFAULT_PAGE_SIZE: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every resource path is appended to, without trailing slash
    pub api_base_url: String,
    /// Maximum number of FIFO cost requests in flight at once
    pub fifo_concurrency: usize,
    pub toast_timeout_ms: u32,
    /// Page size of paged lists (customers, purchases)
    pub page_size: u32,
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base_url = match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => normalize_base_url(url),
            _ => base_url_from_location(),
        };

        Self {
            api_base_url,
            fifo_concurrency: parse_concurrency(option_env!("FIFO_CONCURRENCY")),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}

/// Config provided at the app root
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_concurrency(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .map(|n| n.max(1))
        .unwrap_or(DEFAULT_FIFO_CONCURRENCY)
}

fn base_url_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://api.local/ "), "http://api.local");
        assert_eq!(normalize_base_url("http://api.local"), "http://api.local");
    }

    #[test]
    fn test_parse_concurrency() {
        assert_eq!(parse_concurrency(None), DEFAULT_FIFO_CONCURRENCY);
        assert_eq!(parse_concurrency(Some("16")), 16);
        assert_eq!(parse_concurrency(Some("0")), 1);
        assert_eq!(parse_concurrency(Some("many")), DEFAULT_FIFO_CONCURRENCY);
    }
}
