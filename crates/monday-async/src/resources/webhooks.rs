//! Board webhooks.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

use crate::format::Id;
use crate::queries::{create_webhook_query, delete_webhook_query, get_webhooks_by_board_id_query};
use crate::types::WebhookEventType;

resource! {
    /// Webhook queries.
    WebhooksResource
}

impl WebhooksResource<'_> {
    /// The webhooks of a board.
    pub async fn get_webhooks_by_board_id(
        &self,
        board_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, "get_webhooks_by_board_id");
        let query = get_webhooks_by_board_id_query(board_id, with_complexity)?;
        self.client.execute(&query).await
    }

    /// Subscribe `url` to `event`s on a board.
    pub async fn create_webhook(
        &self,
        board_id: impl Into<Id>,
        url: &str,
        event: WebhookEventType,
        config: Option<&Value>,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, %event, "create_webhook");
        let query = create_webhook_query(board_id, url, event, config, with_complexity)?;
        self.client.execute(&query).await
    }

    /// Delete a webhook.
    pub async fn delete_webhook(
        &self,
        webhook_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<Value> {
        let webhook_id = webhook_id.into();
        tracing::debug!(target: targets::RESOURCES, %webhook_id, "delete_webhook");
        let query = delete_webhook_query(webhook_id, with_complexity)?;
        self.client.execute(&query).await
    }
}
