//! The monday.com client.

use std::sync::Arc;
use std::time::Duration;

use monday_async_core::logging::targets;
use monday_async_net::{GraphQLClient, HttpClient, HttpClientBuilder, Result};
use serde_json::Value;

use crate::resources::{
    AccountResource, ApiResource, AssetsResource, ColumnsResource, ComplexityResource,
    CustomResource, GroupsResource, NotificationsResource, UpdatesResource, UsersResource,
    WebhooksResource,
};

/// Default endpoint for regular calls.
pub const DEFAULT_ENDPOINT: &str = "https://api.monday.com/v2";

/// Default endpoint for file uploads.
pub const DEFAULT_FILE_ENDPOINT: &str = "https://api.monday.com/v2/file";

/// Default `API-Version` header value.
pub const DEFAULT_API_VERSION: &str = "2024-04";

const API_VERSION_HEADER: &str = "API-Version";

/// Configuration for a [`MondayClient`].
#[derive(Clone)]
pub struct MondayClientConfig {
    /// API token, sent verbatim in the `Authorization` header.
    pub token: String,
    /// Value of the `API-Version` header.
    pub api_version: String,
    /// Endpoint for regular calls.
    pub endpoint: String,
    /// Endpoint for file uploads.
    pub file_endpoint: String,
    /// Request timeout.
    pub timeout: Option<Duration>,
    /// Extra headers, applied after `API-Version`.
    pub headers: Vec<(String, String)>,
}

impl MondayClientConfig {
    /// Create a configuration with default endpoints and API version.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            file_endpoint: DEFAULT_FILE_ENDPOINT.to_string(),
            timeout: None,
            headers: Vec::new(),
        }
    }
}

impl std::fmt::Debug for MondayClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MondayClientConfig")
            .field("token", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("endpoint", &self.endpoint)
            .field("file_endpoint", &self.file_endpoint)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers)
            .finish()
    }
}

/// Builder for creating a [`MondayClient`].
#[derive(Debug)]
pub struct MondayClientBuilder {
    config: MondayClientConfig,
    http_client: Option<HttpClient>,
}

impl MondayClientBuilder {
    /// Create a new builder with the given API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            config: MondayClientConfig::new(token),
            http_client: None,
        }
    }

    /// Set the `API-Version` header.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Set the endpoint for regular calls.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the endpoint for file uploads.
    pub fn file_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.file_endpoint = endpoint.into();
        self
    }

    /// Set the request timeout. Ignored when an HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a header to every request.
    ///
    /// Extra headers are applied after `API-Version`, so an `API-Version`
    /// header set here wins.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.push((name.into(), value.into()));
        self
    }

    /// Use an existing HTTP client.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MondayClient> {
        MondayClient::with_config(self.config, self.http_client)
    }
}

struct MondayClientInner {
    config: MondayClientConfig,
    api: GraphQLClient,
    files: GraphQLClient,
}

/// An async client for the monday.com API.
///
/// The client is cheap to clone; clones share one connection pool. Calls
/// are grouped into resources, and every call returns the raw JSON
/// response or a [`ClientError`](monday_async_net::ClientError). A response
/// reporting errors becomes
/// [`ClientError::Api`](monday_async_net::ClientError::Api) with a readable
/// message.
///
/// # Example
///
/// ```ignore
/// use monday_async::{ClientError, ErrorKind, MondayClient};
///
/// let client = MondayClient::builder("my-token").build()?;
///
/// match client.users().get_me(false).await {
///     Ok(response) => println!("{}", response["data"]["me"]["name"]),
///     Err(ClientError::Api(e)) if e.kind() == ErrorKind::Complexity => {
///         println!("retry in {:?}s", e.complexity_budget().map(|b| b.reset_in_seconds));
///     }
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Clone)]
pub struct MondayClient {
    inner: Arc<MondayClientInner>,
}

impl MondayClient {
    /// Create a new builder with the given API token.
    pub fn builder(token: impl Into<String>) -> MondayClientBuilder {
        MondayClientBuilder::new(token)
    }

    /// Create a client with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a client from a configuration.
    pub fn with_config(config: MondayClientConfig, http_client: Option<HttpClient>) -> Result<Self> {
        let http_client = match http_client {
            Some(client) => client,
            None => {
                let mut builder = HttpClientBuilder::new();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        let graphql_client = |endpoint: &str| {
            GraphQLClient::builder(endpoint)
                .token(config.token.as_str())
                .header(API_VERSION_HEADER, config.api_version.as_str())
                .headers(config.headers.iter().cloned())
                .http_client(http_client.clone())
                .build()
        };
        let api = graphql_client(&config.endpoint)?;
        let files = graphql_client(&config.file_endpoint)?;

        tracing::debug!(
            target: targets::RESOURCES,
            endpoint = %config.endpoint,
            api_version = %config.api_version,
            "created monday.com client"
        );

        Ok(Self {
            inner: Arc::new(MondayClientInner { config, api, files }),
        })
    }

    /// The client configuration.
    pub fn config(&self) -> &MondayClientConfig {
        &self.inner.config
    }

    /// API version queries.
    pub fn api(&self) -> ApiResource<'_> {
        ApiResource::new(self)
    }

    /// Account queries.
    pub fn account(&self) -> AccountResource<'_> {
        AccountResource::new(self)
    }

    /// Complexity budget queries.
    pub fn complexity(&self) -> ComplexityResource<'_> {
        ComplexityResource::new(self)
    }

    /// User and team queries.
    pub fn users(&self) -> UsersResource<'_> {
        UsersResource::new(self)
    }

    /// Board columns.
    pub fn columns(&self) -> ColumnsResource<'_> {
        ColumnsResource::new(self)
    }

    /// Board groups.
    pub fn groups(&self) -> GroupsResource<'_> {
        GroupsResource::new(self)
    }

    /// Updates on items, and their files.
    pub fn updates(&self) -> UpdatesResource<'_> {
        UpdatesResource::new(self)
    }

    /// Webhook queries.
    pub fn webhooks(&self) -> WebhooksResource<'_> {
        WebhooksResource::new(self)
    }

    /// Notification mutations.
    pub fn notifications(&self) -> NotificationsResource<'_> {
        NotificationsResource::new(self)
    }

    /// File uploads.
    pub fn assets(&self) -> AssetsResource<'_> {
        AssetsResource::new(self)
    }

    /// Caller-written queries.
    pub fn custom(&self) -> CustomResource<'_> {
        CustomResource::new(self)
    }

    pub(crate) async fn execute(&self, query: &str) -> Result<Value> {
        self.inner.api.execute(query, None).await
    }

    pub(crate) async fn execute_file(&self, query: &str, variables: Value) -> Result<Value> {
        self.inner.files.execute(query, Some(variables)).await
    }
}

impl std::fmt::Debug for MondayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MondayClient")
            .field("endpoint", &self.inner.config.endpoint)
            .field("file_endpoint", &self.inner.config.file_endpoint)
            .field("api_version", &self.inner.config.api_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monday_async_net::ClientError;

    #[test]
    fn test_defaults() {
        let client = MondayClient::new("secret").unwrap();
        let config = client.config();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.file_endpoint, DEFAULT_FILE_ENDPOINT);
        assert_eq!(config.api_version, "2024-04");
        assert_eq!(client.inner.api.headers()["authorization"], "secret");
        assert_eq!(client.inner.api.headers()["api-version"], "2024-04");
        assert_eq!(client.inner.files.endpoint(), DEFAULT_FILE_ENDPOINT);
    }

    #[test]
    fn test_extra_headers_override_version() {
        let client = MondayClient::builder("secret")
            .api_version("2023-10")
            .header("API-Version", "2024-07")
            .header("X-Trace", "abc")
            .build()
            .unwrap();

        let headers = client.inner.api.headers();
        assert_eq!(headers["api-version"], "2024-07");
        assert_eq!(headers["x-trace"], "abc");
        assert_eq!(client.inner.files.headers()["api-version"], "2024-07");
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = MondayClient::builder("secret").endpoint("nope").build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = MondayClientConfig::new("very-secret");
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}
