//! Notifications sent to users.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

use crate::format::Id;
use crate::queries::create_notification_query;
use crate::types::TargetType;

resource! {
    /// Notification mutations.
    NotificationsResource
}

impl NotificationsResource<'_> {
    /// Send a notification to a user.
    pub async fn create_notification(
        &self,
        user_id: impl Into<Id>,
        target_id: impl Into<Id>,
        text: &str,
        target_type: TargetType,
        with_complexity: bool,
    ) -> Result<Value> {
        let user_id = user_id.into();
        tracing::debug!(target: targets::RESOURCES, %user_id, %target_type, "create_notification");
        let query = create_notification_query(user_id, target_id, text, target_type, with_complexity)?;
        self.client.execute(&query).await
    }
}
