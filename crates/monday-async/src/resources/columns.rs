//! Column queries and mutations.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

use crate::format::Id;
use crate::queries::{
    NewColumn, change_column_description_query, change_column_title_query, create_column_query,
    delete_column_query, get_columns_by_board_query,
};
use crate::types::ColumnType;

resource! {
    /// Board columns.
    ColumnsResource
}

impl ColumnsResource<'_> {
    /// The columns of a board. Empty `ids` or `types` do not filter.
    pub async fn get_columns_by_board(
        &self,
        board_id: impl Into<Id>,
        ids: &[&str],
        types: &[ColumnType],
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, "get_columns_by_board");
        let query = get_columns_by_board_query(board_id, ids, types, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn create_column(
        &self,
        board_id: impl Into<Id>,
        title: &str,
        column_type: ColumnType,
        column: NewColumn<'_>,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, %column_type, "create_column");
        let query = create_column_query(board_id, title, column_type, column, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn change_column_title(
        &self,
        board_id: impl Into<Id>,
        column_id: &str,
        title: &str,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, column_id, "change_column_title");
        let query = change_column_title_query(board_id, column_id, title, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn change_column_description(
        &self,
        board_id: impl Into<Id>,
        column_id: &str,
        description: &str,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(
            target: targets::RESOURCES,
            %board_id,
            column_id,
            "change_column_description"
        );
        let query =
            change_column_description_query(board_id, column_id, description, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn delete_column(
        &self,
        board_id: impl Into<Id>,
        column_id: &str,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, column_id, "delete_column");
        let query = delete_column_query(board_id, column_id, with_complexity)?;
        self.client.execute(&query).await
    }
}
