//! Team queries and membership mutations.

use monday_async_core::{QuerySyntaxError, format_query};

use super::complexity;
use crate::format::{Id, IdList, format_param_value};

const MEMBERSHIP_RESULT: &str = "successful_users { name email } failed_users { name email }";

/// Query teams, all of them or those in `team_ids`.
pub fn get_teams_query(
    team_ids: Option<IdList>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "query {{ {} teams (ids: {}) {{ id name users {{ id email name }} }} }}",
        complexity(with_complexity),
        format_param_value(&team_ids),
    ))
}

/// Add users to a team.
pub fn add_users_to_team_query(
    team_id: impl Into<Id>,
    user_ids: impl Into<IdList>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    membership_mutation("add_users_to_team", team_id.into(), user_ids.into(), with_complexity)
}

/// Remove users from a team.
pub fn remove_users_from_team_query(
    team_id: impl Into<Id>,
    user_ids: impl Into<IdList>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    membership_mutation("remove_users_from_team", team_id.into(), user_ids.into(), with_complexity)
}

fn membership_mutation(
    field: &str,
    team_id: Id,
    user_ids: IdList,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation {{ {} {field} (team_id: {}, user_ids: {}) {{ {MEMBERSHIP_RESULT} }} }}",
        complexity(with_complexity),
        format_param_value(&team_id),
        format_param_value(&user_ids),
    ))
}
