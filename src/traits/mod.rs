//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations (GET, form/JSON/multipart POST)

pub mod http;

pub use http::{Headers, HttpClient, HttpError, MultipartForm, MultipartPart, RequestBody, Response};
