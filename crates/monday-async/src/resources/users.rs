//! Users and teams.

use monday_async_core::logging::targets;
use monday_async_net::Result;
use serde_json::Value;

use crate::format::{Id, IdList};
use crate::queries::{
    add_users_to_team_query, get_me_query, get_teams_query, get_users_by_email_query,
    get_users_query, remove_users_from_team_query,
};
use crate::types::UserKind;

resource! {
    /// User and team queries.
    UsersResource
}

impl UsersResource<'_> {
    /// The user the token belongs to.
    pub async fn get_me(&self, with_complexity: bool) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, "get_me");
        let query = get_me_query(with_complexity)?;
        self.client.execute(&query).await
    }

    /// Users, all of them or those in `user_ids`.
    pub async fn get_users(
        &self,
        user_ids: Option<IdList>,
        limit: u32,
        user_kind: UserKind,
        newest_first: bool,
        page: u32,
        with_complexity: bool,
    ) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, limit, page, "get_users");
        let query = get_users_query(user_ids, limit, user_kind, newest_first, page, with_complexity)?;
        self.client.execute(&query).await
    }

    /// Users with the given email addresses.
    pub async fn get_users_by_email(
        &self,
        emails: &[&str],
        user_kind: UserKind,
        newest_first: bool,
        with_complexity: bool,
    ) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, count = emails.len(), "get_users_by_email");
        let query = get_users_by_email_query(emails, user_kind, newest_first, with_complexity)?;
        self.client.execute(&query).await
    }

    /// Teams, all of them or those in `team_ids`.
    pub async fn get_teams(&self, team_ids: Option<IdList>, with_complexity: bool) -> Result<Value> {
        tracing::debug!(target: targets::RESOURCES, "get_teams");
        let query = get_teams_query(team_ids, with_complexity)?;
        self.client.execute(&query).await
    }

    /// Add users to a team.
    pub async fn add_users_to_team(
        &self,
        team_id: impl Into<Id>,
        user_ids: impl Into<IdList>,
        with_complexity: bool,
    ) -> Result<Value> {
        let team_id = team_id.into();
        tracing::debug!(target: targets::RESOURCES, %team_id, "add_users_to_team");
        let query = add_users_to_team_query(team_id, user_ids, with_complexity)?;
        self.client.execute(&query).await
    }

    /// Remove users from a team.
    pub async fn remove_users_from_team(
        &self,
        team_id: impl Into<Id>,
        user_ids: impl Into<IdList>,
        with_complexity: bool,
    ) -> Result<Value> {
        let team_id = team_id.into();
        tracing::debug!(target: targets::RESOURCES, %team_id, "remove_users_from_team");
        let query = remove_users_from_team_query(team_id, user_ids, with_complexity)?;
        self.client.execute(&query).await
    }
}
