//! GraphQL client implementation.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use monday_async_core::logging::targets;
use monday_async_core::raise_for_errors;
use serde_json::Value;

use super::request::{FILE_UPLOAD_MAP, GraphQLRequest};
use crate::error::{ClientError, Result};
use crate::http::{HttpClient, HttpClientBuilder, MultipartForm};

const UPLOAD_MIME_TYPE: &str = "application/octet-stream";

/// Builder for creating a GraphQL client.
#[derive(Debug)]
pub struct GraphQLClientBuilder {
    endpoint: String,
    token: Option<String>,
    headers: Vec<(String, String)>,
    http_client: Option<HttpClient>,
    request_timeout: Option<Duration>,
}

impl GraphQLClientBuilder {
    /// Create a new builder for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            headers: Vec::new(),
            http_client: None,
            request_timeout: None,
        }
    }

    /// Set the API token, sent verbatim in the `Authorization` header.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add a header to every request.
    ///
    /// A later header with the same name replaces the earlier one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add multiple headers.
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Use an existing HTTP client, sharing its connection pool.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the request timeout. Ignored when an HTTP client is supplied.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the GraphQL client.
    ///
    /// Fails when the endpoint is not a URL or a header is invalid.
    pub fn build(self) -> Result<GraphQLClient> {
        url::Url::parse(&self.endpoint)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = HttpClientBuilder::new();
                if let Some(timeout) = self.request_timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        let mut headers = http::HeaderMap::new();
        for (name, value) in &self.headers {
            headers.insert(
                http::HeaderName::try_from(name.as_str())?,
                http::HeaderValue::try_from(value.as_str())?,
            );
        }
        if let Some(ref token) = self.token {
            let mut value = http::HeaderValue::try_from(token.as_str())?;
            value.set_sensitive(true);
            headers.insert(http::header::AUTHORIZATION, value);
        }

        Ok(GraphQLClient {
            inner: Arc::new(GraphQLClientInner {
                http_client,
                endpoint: self.endpoint,
                headers,
            }),
        })
    }
}

struct GraphQLClientInner {
    http_client: HttpClient,
    endpoint: String,
    headers: http::HeaderMap,
}

/// A client for one monday.com GraphQL endpoint.
///
/// Every response is checked for an error payload before it is returned;
/// a response reporting errors becomes [`ClientError::Api`], regardless of
/// the HTTP status. Successful responses are returned as raw JSON.
///
/// # Example
///
/// ```ignore
/// use monday_async_net::graphql::GraphQLClient;
///
/// let client = GraphQLClient::builder("https://api.monday.com/v2")
///     .token("my-token")
///     .header("API-Version", "2024-04")
///     .build()?;
///
/// let response = client.execute("{\n  me {\n    id\n  }\n}", None).await?;
/// println!("{}", response["data"]["me"]["id"]);
/// ```
#[derive(Clone)]
pub struct GraphQLClient {
    inner: Arc<GraphQLClientInner>,
}

impl GraphQLClient {
    /// Create a new builder for configuring a GraphQL client.
    pub fn builder(endpoint: impl Into<String>) -> GraphQLClientBuilder {
        GraphQLClientBuilder::new(endpoint)
    }

    /// The endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// The headers sent with every request.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.inner.headers
    }

    /// Execute `query` with optional variables.
    ///
    /// When the variables contain a `file` path, the request is sent as a
    /// multipart upload of that file.
    pub async fn execute(&self, query: &str, variables: Option<Value>) -> Result<Value> {
        let mut request = GraphQLRequest::new(query);
        request.variables = variables;
        self.execute_request(&request).await
    }

    /// Execute a prepared request.
    pub async fn execute_request(&self, request: &GraphQLRequest) -> Result<Value> {
        let builder = self
            .inner
            .http_client
            .post(&self.inner.endpoint)
            .headers(self.inner.headers.clone());

        let builder = match request.file_path() {
            Some(path) => builder.multipart(upload_form(&request.query, path).await?),
            None => builder.json(request),
        };

        tracing::debug!(
            target: targets::GRAPHQL,
            endpoint = %self.inner.endpoint,
            upload = request.file_path().is_some(),
            "sending GraphQL request"
        );

        let response = builder.send().await?;
        let status = response.status();
        if !response.is_success() {
            tracing::debug!(target: targets::GRAPHQL, status, "non-success HTTP status");
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(target: targets::GRAPHQL, status, error = %e, "response is not JSON");
            ClientError::InvalidBody {
                status,
                body: String::from_utf8(body.to_vec()).ok(),
            }
        })?;

        raise_for_errors(&value, &request.query).map_err(|err| {
            tracing::warn!(
                target: targets::GRAPHQL,
                kind = %err.kind(),
                code = err.error_code(),
                status,
                "API reported an error"
            );
            ClientError::from(err)
        })?;

        Ok(value)
    }
}

async fn upload_form(query: &str, path: &str) -> Result<MultipartForm> {
    let contents = tokio::fs::read(path).await.inspect_err(|e| {
        tracing::warn!(target: targets::GRAPHQL, path, error = %e, "cannot read upload file");
    })?;
    let filename = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    tracing::debug!(
        target: targets::GRAPHQL,
        filename = %filename,
        size = contents.len(),
        "prepared file upload"
    );

    MultipartForm::new()
        .text("query", query)
        .text("map", FILE_UPLOAD_MAP)
        .file_bytes("0", contents, filename, UPLOAD_MIME_TYPE)
}

impl std::fmt::Debug for GraphQLClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLClient")
            .field("endpoint", &self.inner.endpoint)
            .finish()
    }
}
