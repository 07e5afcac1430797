//! Group queries and mutations.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

use crate::format::Id;
use crate::queries::{
    archive_group_query, create_group_query, delete_group_query, duplicate_group_query,
    get_groups_by_board_query, update_group_query,
};
use crate::types::{GroupAttributes, GroupColors, PositionRelative};

resource! {
    /// Board groups.
    GroupsResource
}

impl GroupsResource<'_> {
    /// The groups of a board, all of them when `ids` is empty.
    pub async fn get_groups_by_board(
        &self,
        board_id: impl Into<Id>,
        ids: &[&str],
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, "get_groups_by_board");
        let query = get_groups_by_board_query(board_id, ids, with_complexity)?;
        self.client.execute(&query).await
    }

    /// Create a group, optionally colored and placed next to `relative_to`.
    pub async fn create_group(
        &self,
        board_id: impl Into<Id>,
        group_name: &str,
        color: Option<GroupColors>,
        relative_to: Option<&str>,
        position: Option<PositionRelative>,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, group_name, "create_group");
        let query = create_group_query(
            board_id,
            group_name,
            color,
            relative_to,
            position,
            with_complexity,
        )?;
        self.client.execute(&query).await
    }

    /// Set one attribute of a group to `new_value`.
    pub async fn update_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        attribute: GroupAttributes,
        new_value: &str,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, group_id, %attribute, "update_group");
        let query = update_group_query(board_id, group_id, attribute, new_value, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn duplicate_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        add_to_top: Option<bool>,
        group_title: Option<&str>,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, group_id, "duplicate_group");
        let query =
            duplicate_group_query(board_id, group_id, add_to_top, group_title, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn archive_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, group_id, "archive_group");
        let query = archive_group_query(board_id, group_id, with_complexity)?;
        self.client.execute(&query).await
    }

    pub async fn delete_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        with_complexity: bool,
    ) -> Result<Value> {
        let board_id = board_id.into();
        tracing::debug!(target: targets::RESOURCES, %board_id, group_id, "delete_group");
        let query = delete_group_query(board_id, group_id, with_complexity)?;
        self.client.execute(&query).await
    }
}
