//! Updates posted on items.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use monday_async_net::graphql::FILE_VARIABLE;
use serde_json::{Map, Value};

use crate::format::{Id, IdList};
use crate::queries::{
    add_file_to_update_query, create_update_query, delete_update_query, get_updates_query,
    like_update_query,
};

const DEFAULT_UPDATES_LIMIT: u32 = 25;

resource! {
    /// Updates and their attachments.
    UpdatesResource
}

impl UpdatesResource<'_> {
    /// A page of updates. `limit` defaults to 25 and `page` to 1.
    pub async fn get_updates(
        &self,
        ids: Option<IdList>,
        limit: Option<u32>,
        page: Option<u32>,
        with_complexity: bool,
    ) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, ?limit, ?page, "get_updates");
        let query = get_updates_query(
            ids,
            limit.unwrap_or(DEFAULT_UPDATES_LIMIT),
            page.unwrap_or(1),
            with_complexity,
        )?;
        self.client.execute(&query).await
    }

    /// Post `body` on an item, or reply to `parent_id`.
    pub async fn create_update(
        &self,
        body: &str,
        item_id: impl Into<Id>,
        parent_id: Option<Id>,
        with_complexity: bool,
    ) -> Result<Value> {
        let item_id = item_id.into();
        tracing::debug!(target: targets::RESOURCES, %item_id, "create_update");
        let query = create_update_query(body, item_id, parent_id, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn like_update(&self, update_id: impl Into<Id>, with_complexity: bool) -> Result<Value> {
        let update_id = update_id.into();
        tracing::debug!(target: targets::RESOURCES, %update_id, "like_update");
        let query = like_update_query(update_id, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn delete_update(
        &self,
        update_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<Value> {
        let update_id = update_id.into();
        tracing::debug!(target: targets::RESOURCES, %update_id, "delete_update");
        let query = delete_update_query(update_id, with_complexity)?;
        self.client.execute(&query).await
    }

    /// Upload the file at `file_path` and attach it to an update.
    ///
    /// Fails with [`ClientError::Io`](monday_async_net::ClientError::Io)
    /// when the file cannot be read.
    pub async fn add_file_to_update(
        &self,
        update_id: impl Into<Id>,
        file_path: &str,
        with_complexity: bool,
    ) -> Result<Value> {
        let update_id = update_id.into();
        tracing::debug!(target: targets::RESOURCES, %update_id, file_path, "add_file_to_update");
        let query = add_file_to_update_query(update_id, with_complexity)?;

        let mut variables = Map::new();
        variables.insert(FILE_VARIABLE.to_string(), Value::from(file_path));
        self.client.execute_file(&query, Value::Object(variables)).await
    }
}
