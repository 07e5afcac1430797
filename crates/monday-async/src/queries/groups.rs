//! Board group queries.

use monday_async_core::{QuerySyntaxError, format_query};

use super::complexity;
use crate::format::{Id, format_param_value};
use crate::types::{GroupAttributes, GroupColors, PositionRelative};

/// Query the groups of a board, all of them or those in `ids`.
pub fn get_groups_by_board_query(
    board_id: impl Into<Id>,
    ids: &[&str],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let ids = if ids.is_empty() { "null".to_string() } else { format_param_value(ids) };
    format_query(&format!(
        "query {{ {} boards (ids: {}) {{ groups (ids: {ids}) {{ id title color position }} }} }}",
        complexity(with_complexity),
        format_param_value(&board_id.into()),
    ))
}

/// Create a group on a board.
///
/// With `relative_to` set, the group is placed before or after that group
/// according to `position`.
pub fn create_group_query(
    board_id: impl Into<Id>,
    group_name: &str,
    color: Option<GroupColors>,
    relative_to: Option<&str>,
    position: Option<PositionRelative>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let position = position.map_or("null", PositionRelative::as_str);
    format_query(&format!(
        r#"
        mutation {{
            {}
            create_group (
                board_id: {},
                group_name: {},
                group_color: {},
                relative_to: {},
                position_relative_method: {position}
            ) {{ id title color }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        format_param_value(group_name),
        format_param_value(&color.map(GroupColors::as_str)),
        format_param_value(&relative_to),
    ))
}

/// Change one attribute of a group.
///
/// `new_value` is a title, a [`GroupUpdateColors`](crate::GroupUpdateColors)
/// name, or the ID of the group to position against.
pub fn update_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    attribute: GroupAttributes,
    new_value: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        mutation {{
            {}
            update_group (
                board_id: {},
                group_id: {},
                group_attribute: {attribute},
                new_value: {}
            ) {{ id title color position }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        format_param_value(group_id),
        format_param_value(new_value),
    ))
}

/// Duplicate a group, optionally at the top and under a new title.
pub fn duplicate_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    add_to_top: Option<bool>,
    group_title: Option<&str>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        mutation {{
            {}
            duplicate_group (
                board_id: {},
                group_id: {},
                add_to_top: {},
                group_title: {}
            ) {{ id title }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        format_param_value(group_id),
        format_param_value(&add_to_top),
        format_param_value(&group_title),
    ))
}

/// Archive a group.
pub fn archive_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    group_mutation("archive_group", board_id.into(), group_id, with_complexity)
}

/// Delete a group.
pub fn delete_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    group_mutation("delete_group", board_id.into(), group_id, with_complexity)
}

fn group_mutation(
    field: &str,
    board_id: Id,
    group_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation {{ {} {field} (board_id: {}, group_id: {}) {{ id }} }}",
        complexity(with_complexity),
        format_param_value(&board_id),
        format_param_value(group_id),
    ))
}
