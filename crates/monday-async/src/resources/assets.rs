//! Uploads to file columns.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use monday_async_net::graphql::FILE_VARIABLE;
use serde_json::{Map, Value};

use crate::format::Id;
use crate::queries::upload_file_to_column_query;

resource! {
    /// File uploads.
    AssetsResource
}

impl AssetsResource<'_> {
    /// Upload the file at `file_path` into a file column of an item.
    ///
    /// Fails with [`ClientError::Io`](monday_async_net::ClientError::Io)
    /// when the file cannot be read.
    pub async fn upload_file_to_column(
        &self,
        item_id: impl Into<Id>,
        column_id: &str,
        file_path: &str,
        with_complexity: bool,
    ) -> Result<Value> {
        let item_id = item_id.into();
        tracing::debug!(
            target: targets::RESOURCES,
            %item_id,
            column_id,
            file_path,
            "upload_file_to_column"
        );
        let query = upload_file_to_column_query(item_id, column_id, with_complexity)?;

        let mut variables = Map::new();
        variables.insert(FILE_VARIABLE.to_string(), Value::from(file_path));
        self.client.execute_file(&query, Value::Object(variables)).await
    }
}
