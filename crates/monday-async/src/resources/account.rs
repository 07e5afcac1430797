//! Account resource.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

use crate::queries::get_account_query;

resource! {
    /// Account queries.
    AccountResource
}

impl AccountResource<'_> {
    /// The account the token belongs to, with its plan.
    pub async fn get_account(&self, with_complexity: bool) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, "get_account");
        let query = get_account_query(with_complexity)?;
        self.client.execute(&query).await
    }
}
