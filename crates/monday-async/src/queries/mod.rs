//! Query builders.
//!
//! Each builder assembles the query text, then runs it through
//! [`format_query`](monday_async_core::format_query) so the text sent is
//! the canonical form that server-reported locations refer to. Passing
//! `with_complexity = true` adds a `complexity` selection reporting the
//! cost of the query.

mod account;
mod api;
mod assets;
mod columns;
mod complexity;
mod groups;
mod notifications;
mod teams;
mod updates;
mod users;
mod webhooks;

pub use account::get_account_query;
pub use api::{get_all_api_versions_query, get_current_api_version_query};
pub use assets::upload_file_to_column_query;
pub use columns::{
    NewColumn, change_column_description_query, change_column_title_query, create_column_query,
    delete_column_query, get_columns_by_board_query,
};
pub use complexity::get_complexity_query;
pub use groups::{
    archive_group_query, create_group_query, delete_group_query, duplicate_group_query,
    get_groups_by_board_query, update_group_query,
};
pub use notifications::create_notification_query;
pub use teams::{add_users_to_team_query, get_teams_query, remove_users_from_team_query};
pub use updates::{
    add_file_to_update_query, create_update_query, delete_update_query, get_updates_query,
    like_update_query,
};
pub use users::{get_me_query, get_users_by_email_query, get_users_query};
pub use webhooks::{create_webhook_query, delete_webhook_query, get_webhooks_by_board_id_query};

pub(crate) const COMPLEXITY_SELECTION: &str = "complexity { before query after reset_in_x_seconds }";

/// The complexity selection, or nothing.
pub(crate) fn complexity(with_complexity: bool) -> &'static str {
    if with_complexity { COMPLEXITY_SELECTION } else { "" }
}
