//! Update (item comment) queries.

use monday_async_core::{QuerySyntaxError, format_query};

use super::complexity;
use crate::format::{Id, IdList, format_param_value};

const UPDATE_FIELDS: &str = "id text_body body creator_id \
    assets { id name file_extension url public_url } \
    replies { id text_body } \
    likes { id reaction_type creator_id updated_at }";

/// Query updates, a page of all of them or those in `ids`.
///
/// With a list of IDs the page size is the number of IDs.
pub fn get_updates_query(
    ids: Option<IdList>,
    limit: u32,
    page: u32,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let limit = match &ids {
        Some(ids) if ids.is_list() => ids.len(),
        _ => limit as usize,
    };
    format_query(&format!(
        "query {{ {} updates (ids: {}, limit: {limit}, page: {page}) {{ {UPDATE_FIELDS} }} }}",
        complexity(with_complexity),
        format_param_value(&ids),
    ))
}

/// Post an update on an item, or a reply when `parent_id` is set.
pub fn create_update_query(
    body: &str,
    item_id: impl Into<Id>,
    parent_id: Option<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation {{ {} create_update (body: {}, item_id: {}, parent_id: {}) {{ id body }} }}",
        complexity(with_complexity),
        format_param_value(body),
        format_param_value(&item_id.into()),
        format_param_value(&parent_id),
    ))
}

/// Like an update.
pub fn like_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation {{ {} like_update (update_id: {}) {{ id item_id likes {{ id reaction_type }} }} }}",
        complexity(with_complexity),
        format_param_value(&update_id.into()),
    ))
}

/// Delete an update.
pub fn delete_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation {{ {} delete_update (id: {}) {{ id }} }}",
        complexity(with_complexity),
        format_param_value(&update_id.into()),
    ))
}

/// Attach the uploaded `$file` to an update.
///
/// Send it to the file endpoint with a `file` variable naming the local
/// path.
pub fn add_file_to_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation ($file: File!) {{ {} add_file_to_update (update_id: {}, file: $file) {{ id }} }}",
        complexity(with_complexity),
        format_param_value(&update_id.into()),
    ))
}
