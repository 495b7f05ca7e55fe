//! HTTP client over `gloo-net`
//!
//! Every call returns `Result<_, ApiError>`; non-2xx responses become
//! `ApiError::Status` carrying the response text.

use super::error::ApiError;
use crate::shared::api_utils::{api_base, join_url, with_query};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn parse(method: &str) -> Option<Self> {
        match method {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

/// Decoded body of a successful response
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// 204 No Content
    Empty,
    Json(serde_json::Value),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the base URL provided in the app config
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn url_with_query(&self, path: &str, params: &[(&str, String)]) -> String {
        with_query(&self.url(path), params)
    }

    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        let builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        };
        builder.header("Accept", "application/json")
    }

    /// Sends a request to an absolute URL and checks the status.
    async fn send_url(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        log::debug!("{} {}", method.as_str(), url);

        let builder = Self::builder(method, url);
        let result = match body {
            Some(json) => {
                let request = builder
                    .header("Content-Type", "application/json")
                    .body(json)
                    .map_err(|e| ApiError::Serialize(e.to_string()))?;
                request.send().await
            }
            None => builder.send().await,
        };

        let response = result.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), url, e);
            ApiError::Network(e.to_string())
        })?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("{} {} -> HTTP {}", method.as_str(), url, status);
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        self.send_url(method, &self.url(path), body).await
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))
    }

    async fn read_body(response: Response) -> Result<Body, ApiError> {
        if response.status() == 204 {
            return Ok(Body::Empty);
        }
        let is_json = response
            .headers()
            .get("content-type")
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_body(is_json, text)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(HttpMethod::Get, path, None).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url_with_query(path, params);
        let response = self.send_url(HttpMethod::Get, &url, None).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET returning the raw response text
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let response = self.send(HttpMethod::Get, path, None).await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sends a JSON body (or none) and decodes whatever comes back.
    pub async fn request<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<Body, ApiError> {
        let encoded = body.map(Self::encode).transpose()?;
        let response = self.send(method, path, encoded).await?;
        Self::read_body(response).await
    }

    /// POST whose response body is not needed
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.request(HttpMethod::Post, path, Some(body)).await.map(|_| ())
    }

    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.request(HttpMethod::Put, path, Some(body)).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Delete, path, None).await.map(|_| ())
    }
}

fn decode_body(is_json: bool, text: String) -> Result<Body, ApiError> {
    if is_json {
        if text.trim().is_empty() {
            return Ok(Body::Empty);
        }
        serde_json::from_str(&text)
            .map(Body::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Ok(Body::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_round_trip() {
        for m in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ] {
            assert_eq!(HttpMethod::parse(m.as_str()), Some(m));
        }
        assert_eq!(HttpMethod::parse("PATCH"), None);
    }

    #[test]
    fn test_client_urls() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.url("/units/all"), "http://localhost:8080/units/all");
        assert_eq!(
            client.url_with_query("/customers", &[("size", "8".into()), ("page", "0".into())]),
            "http://localhost:8080/customers?size=8&page=0"
        );
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(
            decode_body(true, r#"{"id": 1}"#.into()).unwrap(),
            Body::Json(serde_json::json!({"id": 1}))
        );
        assert_eq!(decode_body(true, "  ".into()).unwrap(), Body::Empty);
        assert_eq!(
            decode_body(false, "120.50".into()).unwrap(),
            Body::Text("120.50".into())
        );
        assert!(matches!(
            decode_body(true, "{oops".into()),
            Err(ApiError::Decode(_))
        ));
    }
}
