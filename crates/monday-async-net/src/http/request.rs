//! HTTP request builder and multipart forms.

use serde::Serialize;

use super::client::HttpClient;
use super::response::HttpResponse;
use crate::error::Result;
use monday_async_core::logging::targets;

/// The body of an HTTP request.
#[derive(Default)]
pub(crate) enum RequestBody {
    #[default]
    None,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Multipart(form) => write!(f, "Multipart(boundary={})", form.boundary()),
        }
    }
}

/// A POST request being assembled.
pub struct HttpRequestBuilder {
    client: HttpClient,
    url: String,
    headers: http::HeaderMap,
    body: RequestBody,
}

impl HttpRequestBuilder {
    pub(crate) fn new(client: HttpClient, url: String) -> Self {
        Self {
            client,
            url,
            headers: http::HeaderMap::new(),
            body: RequestBody::None,
        }
    }

    /// Add headers, replacing earlier values of the same name.
    pub fn headers(mut self, headers: http::HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Send `body` as JSON.
    ///
    /// A value that cannot be serialized is logged and leaves the body
    /// unchanged.
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = RequestBody::Json(value),
            Err(e) => {
                tracing::error!(target: targets::HTTP, "Failed to serialize JSON body: {}", e);
            }
        }
        self
    }

    /// Send a `multipart/form-data` body.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Send the request and wait for the response head.
    pub async fn send(self) -> Result<HttpResponse> {
        let url = url::Url::parse(&self.url)?;

        let mut req_builder = self
            .client
            .reqwest_client()
            .post(url)
            .headers(self.headers);

        match self.body {
            RequestBody::None => {}
            RequestBody::Json(value) => {
                req_builder = req_builder.json(&value);
            }
            RequestBody::Multipart(form) => {
                req_builder = req_builder.multipart(form.into_reqwest());
            }
        }

        tracing::trace!(target: targets::HTTP, url = %self.url, "sending POST");
        let response = req_builder.send().await?;
        Ok(HttpResponse::from_reqwest(response))
    }
}

/// Multipart form data for file uploads.
pub struct MultipartForm {
    inner: reqwest::multipart::Form,
}

impl MultipartForm {
    /// Create a new empty multipart form.
    pub fn new() -> Self {
        Self {
            inner: reqwest::multipart::Form::new(),
        }
    }

    /// Add a text field to the form.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner = self.inner.text(name.into(), value.into());
        self
    }

    /// Add a file field from bytes.
    pub fn file_bytes(
        mut self,
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        filename: impl Into<String>,
        mime_type: &str,
    ) -> Result<Self> {
        let part = reqwest::multipart::Part::bytes(bytes.into())
            .file_name(filename.into())
            .mime_str(mime_type)
            .inspect_err(|e| {
                tracing::warn!(target: targets::HTTP, "Invalid MIME type '{}': {}", mime_type, e);
            })?;
        self.inner = self.inner.part(name.into(), part);
        Ok(self)
    }

    /// The multipart boundary.
    pub fn boundary(&self) -> &str {
        self.inner.boundary()
    }

    pub(crate) fn into_reqwest(self) -> reqwest::multipart::Form {
        self.inner
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
