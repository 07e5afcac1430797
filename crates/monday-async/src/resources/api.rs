//! API version resource.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

use crate::queries::{get_all_api_versions_query, get_current_api_version_query};

resource! {
    /// API version queries.
    ApiResource
}

impl ApiResource<'_> {
    /// The API version the client talks to.
    pub async fn get_current_api_version(&self, with_complexity: bool) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, "get_current_api_version");
        let query = get_current_api_version_query(with_complexity)?;
        self.client.execute(&query).await
    }

    /// All API versions and their status.
    pub async fn get_all_api_versions(&self, with_complexity: bool) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, "get_all_api_versions");
        let query = get_all_api_versions_query(with_complexity)?;
        self.client.execute(&query).await
    }
}
