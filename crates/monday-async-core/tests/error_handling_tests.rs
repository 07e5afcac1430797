//! End-to-end tests for query formatting and error aggregation.

use monday_async_core::{
    AggregatedError, ErrorKind, MondayApiError, format_query, raise_for_errors,
};
use serde_json::json;

fn formatted(raw: &str) -> String {
    format_query(raw).expect("query should parse")
}

#[test]
fn test_success_response_passes() {
    let query = formatted("query { me { id name } }");
    let response = json!({"data": {"me": {"id": 1, "name": "Ann"}}, "account_id": 7});

    assert!(raise_for_errors(&response, &query).is_ok());
}

#[test]
fn test_location_points_into_formatted_query() {
    let query = formatted("query { boards(ids: 1) { nme } }");
    let line_of_field = query
        .lines()
        .position(|line| line.trim() == "nme")
        .expect("field on its own line")
        + 1;
    let column = query.lines().nth(line_of_field - 1).unwrap().find('n').unwrap() + 1;

    let response = json!({
        "errors": [{
            "message": "Field 'nme' doesn't exist on type 'Board'",
            "locations": [{"line": line_of_field, "column": column}],
            "extensions": {"code": "undefinedField"}
        }]
    });

    let err = raise_for_errors(&response, &query).unwrap_err();
    let rendered: Vec<&str> = err.message().lines().collect();

    assert_eq!(rendered[0], "Field 'nme' doesn't exist on type 'Board'");
    assert_eq!(
        rendered[1],
        format!("  Location: Line {line_of_field}, Column {column}")
    );

    let error_line = rendered
        .iter()
        .find(|line| line.trim_start().starts_with(&format!("{line_of_field})")))
        .expect("error line rendered");
    let caret_line = rendered
        .iter()
        .find(|line| line.trim() == "^")
        .expect("caret rendered");
    let caret = caret_line.find('^').unwrap();
    assert_eq!(&error_line[caret..caret + 3], "nme");
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[test]
fn test_records_keep_input_order() {
    let response = json!({
        "errors": ["one", {"message": "two"}, "three", {"message": "four"}]
    });
    let aggregate = AggregatedError::from_response(&response, "").unwrap();

    let messages: Vec<&str> = aggregate.errors().iter().map(|r| r.message()).collect();
    assert_eq!(messages, vec!["one", "two", "three", "four"]);

    let rendered = aggregate.formatted_message();
    let positions: Vec<usize> = messages
        .iter()
        .map(|m| rendered.find(&format!("\n{m}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_duplicate_records_are_kept() {
    let response = json!({"errors": ["same", "same"]});
    let aggregate = AggregatedError::from_response(&response, "").unwrap();

    assert_eq!(aggregate.errors().len(), 2);
    assert_eq!(aggregate.formatted_message().matches("same").count(), 2);
}

#[test]
fn test_out_of_range_locations_never_fail() {
    let query = formatted("{ me { id } }");
    let response = json!({
        "errors": [{
            "message": "Way off",
            "locations": [{"line": 500, "column": 80}, {"line": 0, "column": 0}]
        }]
    });

    let err = raise_for_errors(&response, &query).unwrap_err();
    assert!(err.message().contains("Location: Line 500, Column 80"));
    assert!(!err.message().contains('^'));
}

#[test]
fn test_every_known_code_dispatches() {
    for (code, kind) in ErrorKind::known_codes() {
        let response = json!({
            "errors": [{"message": "failure", "extensions": {"code": code}}]
        });
        let err = raise_for_errors(&response, "").unwrap_err();

        assert_eq!(err.kind(), kind, "code {code}");
        assert_eq!(err.error_code(), Some(code));
    }
}

#[test]
fn test_complexity_error_exposes_budget() {
    let response = json!({
        "errors": [{
            "message": "Complexity budget exhausted, query cost 30001 budget remaining 29998 out of 1000000 reset in 12 seconds",
            "extensions": {"code": "ComplexityException", "status_code": 429}
        }]
    });

    let err = raise_for_errors(&response, "").unwrap_err();
    let budget = err.complexity_budget().expect("budget parsed");

    assert_eq!(err.kind(), ErrorKind::Complexity);
    assert_eq!(budget.remaining, 29998);
    assert_eq!(budget.reset_in_seconds, 12);
    assert!(err.is_rate_limit());
}

#[test]
fn test_single_and_multiple_shapes_differ() {
    let single = raise_for_errors(&json!({"errors": ["only"]}), "").unwrap_err();
    let multiple = raise_for_errors(&json!({"errors": ["a", "b"]}), "").unwrap_err();

    assert!(!single.message().contains("Multiple errors occurred:"));
    assert!(multiple.message().starts_with("Multiple errors occurred:\n\na"));
}

#[test]
fn test_structured_fields_survive_to_caller() {
    let response = json!({
        "errors": [{
            "message": "Item name is too long",
            "path": ["create_item"],
            "extensions": {
                "code": "ItemNameTooLongException",
                "status_code": 400,
                "error_data": {"limit": 255},
                "request_id": "abc"
            }
        }]
    });

    let err: MondayApiError = raise_for_errors(&response, "").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ItemNameTooLong);
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.error_data()["limit"], 255);
    assert_eq!(err.extensions()["request_id"], "abc");
    assert_eq!(err.path()[0].to_string(), "create_item");
}

#[test]
fn test_flat_error_without_message_uses_default() {
    let response = json!({"error_message": "", "error_code": "Unauthorized"});
    assert!(raise_for_errors(&response, "").is_ok());

    let response = json!({"errors": [{"extensions": {"code": "Unauthorized"}}]});
    let err = raise_for_errors(&response, "").unwrap_err();
    assert!(err.message().starts_with("An error occurred"));
    assert!(err.is_authorization());
}

#[test]
fn test_malformed_entries_are_dropped_with_logging_enabled() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let response = json!({"errors": [42, null, {"message": "Kept"}, ["nested"]]});
    let aggregate = AggregatedError::from_response(&response, "").unwrap();

    assert_eq!(aggregate.errors().len(), 1);
    assert_eq!(aggregate.errors()[0].message(), "Kept");
    assert_eq!(aggregate.kind(), ErrorKind::Generic);
}

#[test]
fn test_huge_column_on_valid_line_never_fails() {
    let query = formatted("{ me { id } }");
    let response = json!({
        "errors": [{
            "message": "x",
            "locations": [{"line": 2, "column": u64::MAX}, {"line": 3, "column": 4_000_000_000u64}]
        }]
    });

    let err = raise_for_errors(&response, &query).unwrap_err();
    let caret_lines: Vec<&str> = err.message().lines().filter(|l| l.ends_with('^')).collect();

    assert_eq!(caret_lines.len(), 2);
    // "2)   me {" is 9 characters, so the caret lands one past it.
    assert_eq!(caret_lines[0].strip_prefix("    ").map(str::len), Some(10));
    assert!(caret_lines.iter().all(|l| l.len() < 64));
}

#[test]
fn test_empty_code_does_not_hide_later_code() {
    let response = json!({
        "errors": [
            {"message": "First", "extensions": {"code": ""}},
            {"message": "Second", "extensions": {"code": "InvalidItemIdException"}}
        ],
        "error_code": ""
    });

    let err = raise_for_errors(&response, "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidItemId);
    assert_eq!(err.error_code(), Some("InvalidItemIdException"));
}
