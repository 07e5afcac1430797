//! Complexity budget resource.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

use crate::queries::get_complexity_query;

resource! {
    /// Complexity budget queries.
    ComplexityResource
}

impl ComplexityResource<'_> {
    /// The remaining complexity budget.
    pub async fn get_complexity(&self) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, "get_complexity");
        let query = get_complexity_query()?;
        self.client.execute(&query).await
    }
}
