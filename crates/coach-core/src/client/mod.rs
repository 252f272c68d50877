//! Thin wrapper around the admin backend's HTTP API.
//!
//! Every request goes through [`ApiClient::fetch`], which applies the shared
//! contract: the base URL is prepended, `Content-Type: application/json` is
//! sent unless the body is multipart, JSON responses are parsed and anything
//! else is returned as text, and non-2xx responses become
//! [`AdminError::Api`] carrying the backend's `error` field when present.

mod options;
mod response;

pub use options::{RequestBody, RequestOptions};
pub use response::{interpret, ApiResponse, Saved};

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::decode::{decode_collection, DecodeMode};
use crate::error::{AdminError, Result, TransportResultExt};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    decode_mode: DecodeMode,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            decode_mode: DecodeMode::default(),
        }
    }

    pub fn with_decode_mode(mut self, decode_mode: DecodeMode) -> Self {
        self.decode_mode = decode_mode;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }

    /// Builds the outgoing request without sending it.
    ///
    /// Caller headers override the default JSON content type. Multipart
    /// bodies never receive the JSON content type so the boundary header
    /// set by the form survives.
    pub fn build_request(&self, path: &str, options: RequestOptions) -> Result<reqwest::Request> {
        let url = format!("{}{}", self.base_url, path);
        let RequestOptions {
            method,
            headers: extra,
            body,
        } = options;

        let mut headers = HeaderMap::new();
        if !body.is_form() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                AdminError::invalid_input("header").with_reason(format!("{name}: {e}"))
            })?;
            let value = HeaderValue::from_str(&value).map_err(|e| {
                AdminError::invalid_input("header").with_reason(format!("{name}: {e}"))
            })?;
            headers.insert(name, value);
        }

        let builder = self.http.request(method, &url).headers(headers);
        let builder = match body {
            RequestBody::None => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Form(form) => builder.multipart(form),
        };

        builder
            .build()
            .transport_context(&format!("Failed to build request for {url}"))
    }

    /// Sends a request and interprets the response.
    pub async fn fetch(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        let request = self.build_request(path, options)?;
        debug!("{} {}", request.method(), request.url());

        let response = self
            .http
            .execute(request)
            .await
            .transport_context(&format!("Request to {path} failed"))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .transport_context(&format!("Failed to read response from {path}"))?;

        debug!("{path} answered {status}");
        interpret(status, content_type.as_deref(), &body)
    }

    /// GET a JSON document.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        self.fetch(path, RequestOptions::get()).await?.into_json(path)
    }

    /// GET a collection and decode it through the envelope decoder.
    pub async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let value = self.get_json(path).await?;
        decode_collection(value, self.decode_mode)
    }

    /// Sends a mutation and requires the backend not to report
    /// `success: false`.
    pub async fn mutate(
        &self,
        action: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let response = self.fetch(path, options).await?;
        response.require_success(action)?;
        Ok(response)
    }

    /// Like [`ApiClient::mutate`], but the backend must answer with
    /// `success: true`.
    pub async fn commit(
        &self,
        action: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let response = self.fetch(path, options).await?;
        response.require_success_flag(action)?;
        Ok(response)
    }

    /// Decodes a single JSON payload into `T`.
    pub fn decode_value<T: DeserializeOwned>(what: &str, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(|source| AdminError::Decode {
            what: what.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::multipart::Form;
    use reqwest::Method;
    use serde_json::json;

    use super::*;

    fn content_type(request: &reqwest::Request) -> Option<String> {
        request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    }

    #[test]
    fn prepends_base_url_and_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/");
        let request = client
            .build_request("/admin/meal/all", RequestOptions::get())
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:3000/admin/meal/all");
        assert_eq!(request.method(), Method::GET);
    }

    #[test]
    fn json_content_type_is_sent_even_without_body() {
        let client = ApiClient::default();
        let request = client
            .build_request("/admin/workout/all", RequestOptions::get())
            .unwrap();
        assert_eq!(content_type(&request).as_deref(), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn json_body_is_serialized() {
        let client = ApiClient::default();
        let request = client
            .build_request(
                "/admin/workout-category/save",
                RequestOptions::post_json(json!({"name": "Chest"})),
            )
            .unwrap();
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(sent, json!({"name": "Chest"}));
        assert_eq!(request.method(), Method::POST);
    }

    #[test]
    fn form_bodies_skip_json_content_type() {
        let client = ApiClient::default();
        let form = Form::new().text("name", "Oats");
        let request = client
            .build_request("/admin/meal/save", RequestOptions::post_form(form))
            .unwrap();
        let content_type = content_type(&request).unwrap();
        assert!(content_type.starts_with("multipart/form-data"), "{content_type}");
    }

    #[test]
    fn caller_headers_override_defaults() {
        let client = ApiClient::default();
        let request = client
            .build_request(
                "/admin/meal/all",
                RequestOptions::get().header("Content-Type", "text/plain"),
            )
            .unwrap();
        assert_eq!(content_type(&request).as_deref(), Some("text/plain"));
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let client = ApiClient::default();
        let result = client.build_request(
            "/admin/meal/all",
            RequestOptions::get().header("bad header", "x"),
        );
        assert!(matches!(result, Err(AdminError::InvalidInput { .. })));
    }
}
