//! Caller-written queries, formatted before sending.

use monday_async_core::format_query;
use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

resource! {
    /// Caller-written queries.
    CustomResource
}

impl CustomResource<'_> {
    /// Run a query written by the caller.
    ///
    /// The text is formatted before it is sent, so error locations point
    /// into the formatted text shown in error messages. Invalid text fails
    /// with [`ClientError::QuerySyntax`](monday_async_net::ClientError::QuerySyntax)
    /// without a request.
    pub async fn execute_custom_query(&self, query: &str) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, "execute_custom_query");
        let query = format_query(query)?;
        self.client.execute(&query).await
    }

    /// Run a caller-written query against the file endpoint.
    ///
    /// A `file` variable naming a local path turns the request into a
    /// multipart upload of that file.
    pub async fn execute_custom_file_query(&self, query: &str, variables: Value) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, "execute_custom_file_query");
        let query = format_query(query)?;
        self.client.execute_file(&query, variables).await
    }
}
