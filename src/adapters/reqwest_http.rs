//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of the [`HttpClient`] trait.

use async_trait::async_trait;

use crate::error::classify_reqwest_error;
use crate::traits::{Headers, HttpClient, HttpError, MultipartForm, MultipartPart, RequestBody, Response};

/// HTTP client implementation using reqwest.
///
/// No timeout is configured beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Build a reqwest multipart form from our transport-neutral form.
    fn build_multipart(form: MultipartForm) -> Result<reqwest::multipart::Form, HttpError> {
        let mut multipart = reqwest::multipart::Form::new();
        for part in form.parts {
            multipart = match part {
                MultipartPart::Text { name, value } => multipart.text(name, value),
                MultipartPart::File {
                    name,
                    file_name,
                    mime_type,
                    bytes,
                } => {
                    let file_part = reqwest::multipart::Part::bytes(bytes.to_vec())
                        .file_name(file_name)
                        .mime_str(&mime_type)
                        .map_err(|e| HttpError::Other(e.to_string()))?;
                    multipart.part(name, file_part)
                }
            };
        }
        Ok(multipart)
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Io(e.to_string()))?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.send(self.client.get(url)).await
    }

    async fn post(&self, url: &str, body: RequestBody) -> Result<Response, HttpError> {
        let builder = self.client.post(url);
        let builder = match body {
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(Self::build_multipart(form)?),
        };
        self.send(builder).await
    }
}
