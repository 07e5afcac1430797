//! User queries.

use monday_async_core::{QuerySyntaxError, format_query};

use super::complexity;
use crate::format::{IdList, format_param_value};
use crate::types::UserKind;

const USER_FIELDS: &str = r#"
    id
    email
    name
    title
    location
    phone
    teams { id name }
    url
    is_admin
    is_guest
    is_view_only
    is_pending
"#;

/// Query the user the token belongs to.
pub fn get_me_query(with_complexity: bool) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "query {{ {} me {{ {USER_FIELDS} }} }}",
        complexity(with_complexity)
    ))
}

/// Query users, all of them or those in `user_ids`.
///
/// When `user_ids` is a list, `limit` is replaced by its length.
pub fn get_users_query(
    user_ids: Option<IdList>,
    limit: u32,
    user_kind: UserKind,
    newest_first: bool,
    page: u32,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let limit = match &user_ids {
        Some(ids) if ids.is_list() => ids.len(),
        _ => limit as usize,
    };

    format_query(&format!(
        r#"
        query {{
            {}
            users (
                ids: {},
                limit: {limit},
                kind: {user_kind},
                newest_first: {newest_first},
                page: {page}
            ) {{ {USER_FIELDS} }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&user_ids),
    ))
}

/// Query users by email address.
pub fn get_users_by_email_query(
    user_emails: &[&str],
    user_kind: UserKind,
    newest_first: bool,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        query {{
            {}
            users (
                emails: {},
                limit: {},
                kind: {user_kind},
                newest_first: {newest_first}
            ) {{ {USER_FIELDS} }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(user_emails),
        user_emails.len().max(1),
    ))
}
