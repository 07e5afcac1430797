//! Integration tests for the monday.com client against a mocked API.

use std::io::Write;

use monday_async::queries::{get_me_query, get_teams_query};
use monday_async::queries::NewColumn;
use monday_async::{
    ClientError, ColumnType, ErrorKind, GroupAttributes, GroupColors, GroupUpdateColors,
    MondayClient, PositionRelative, TargetType, UserKind, WebhookEventType, format_query,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> MondayClient {
    MondayClient::builder("test-token")
        .endpoint(format!("{}/v2", server.uri()))
        .file_endpoint(format!("{}/v2/file", server.uri()))
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_get_me_sends_formatted_query() {
    let server = MockServer::start().await;
    let query = get_me_query(false).unwrap();

    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(header("Authorization", "test-token"))
        .and(header("API-Version", "2024-04"))
        .and(body_json(json!({"query": query})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"me": {"id": "1"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).users().get_me(false).await.unwrap();
    assert_eq!(response["data"]["me"]["id"], "1");
}

#[tokio::test]
async fn test_api_version_override() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("API-Version", "2024-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = MondayClient::builder("test-token")
        .endpoint(format!("{}/v2", server.uri()))
        .api_version("2024-10")
        .build()
        .unwrap();

    client.api().get_current_api_version(false).await.unwrap();
}

#[tokio::test]
async fn test_error_message_points_into_sent_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{
                "message": "Field 'nme' doesn't exist on type 'User'",
                "locations": [{"line": 4, "column": 5}],
                "extensions": {"code": "undefinedField"}
            }]
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .custom()
        .execute_custom_query("query { me { id nme } }")
        .await
        .unwrap_err();

    let api = err.api_error().expect("API error");
    assert_eq!(api.kind(), ErrorKind::Generic);
    assert!(api.message().starts_with("Field 'nme' doesn't exist on type 'User'"));
    assert!(api.message().contains("Location: Line 4, Column 5"));
    assert!(api.message().contains("4)     nme"));
    assert!(api.message().contains("- Error Code: undefinedField"));
}

#[tokio::test]
async fn test_invalid_custom_query_is_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let result = client(&server)
        .custom()
        .execute_custom_query("query { me { id }")
        .await;

    assert!(matches!(result, Err(ClientError::QuerySyntax(_))));
}

#[tokio::test]
async fn test_complexity_error_exposes_budget() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{
                "message": "Complexity budget exhausted, query cost 30001 budget remaining 10000 out of 1000000 reset in 42 seconds",
                "extensions": {"code": "ComplexityException", "status_code": 429}
            }],
            "account_id": 1
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .complexity()
        .get_complexity()
        .await
        .unwrap_err();

    let api = err.api_error().expect("API error");
    assert_eq!(api.kind(), ErrorKind::Complexity);
    assert!(api.is_rate_limit());
    assert_eq!(api.status_code(), Some(429));
    let budget = api.complexity_budget().expect("budget");
    assert_eq!(budget.reset_in_seconds, 42);
}

#[tokio::test]
async fn test_multiple_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                {"message": "First", "extensions": {"code": "InvalidBoardIdException"}},
                {"message": "Second", "extensions": {"code": "InvalidItemIdException"}}
            ]
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .users()
        .get_teams(None, false)
        .await
        .unwrap_err();

    let api = err.api_error().expect("API error");
    assert_eq!(api.kind(), ErrorKind::InvalidBoardId);
    assert!(api.message().starts_with("Multiple errors occurred:"));
    let first = api.message().find("First").unwrap();
    let second = api.message().find("Second").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_users_teams_and_webhooks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("users"))
        .and(body_string_contains("non_guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"users": []}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_json(json!({"query": get_teams_query(Some(vec![7u64].into()), false).unwrap()})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"teams": []}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("create_webhook"))
        .and(body_string_contains("change_specific_column_value"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"create_webhook": {"id": "9"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client
        .users()
        .get_users(None, 10, UserKind::NonGuests, false, 1, false)
        .await
        .unwrap();
    client
        .users()
        .get_teams(Some(vec![7u64].into()), false)
        .await
        .unwrap();
    let response = client
        .webhooks()
        .create_webhook(
            1u64,
            "https://example.com/hook",
            WebhookEventType::ChangeSpecificColumnValue,
            Some(&json!({"columnId": "status"})),
            false,
        )
        .await
        .unwrap();
    assert_eq!(response["data"]["create_webhook"]["id"], "9");
}

#[tokio::test]
async fn test_notification() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("create_notification"))
        .and(body_string_contains("target_type: Project"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"create_notification": {"text": "hi"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .notifications()
        .create_notification(1u64, 2u64, "hi", TargetType::Project, false)
        .await
        .unwrap();
    assert_eq!(response["data"]["create_notification"]["text"], "hi");
}

#[tokio::test]
async fn test_upload_file_to_column() {
    let server = MockServer::start().await;

    let mut file = tempfile::Builder::new()
        .prefix("invoice")
        .suffix(".pdf")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(b"%PDF-1.4").unwrap();
    let file_path = file.path().to_string_lossy().into_owned();

    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .and(header("Authorization", "test-token"))
        .and(body_string_contains("add_file_to_column"))
        .and(body_string_contains(r#"{"0": ["variables.file"]}"#))
        .and(body_string_contains("%PDF-1.4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"add_file_to_column": {"id": "5"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .assets()
        .upload_file_to_column(42u64, "files", &file_path, false)
        .await
        .unwrap();
    assert_eq!(response["data"]["add_file_to_column"]["id"], "5");
}

#[tokio::test]
async fn test_custom_file_query_goes_to_file_endpoint() {
    let server = MockServer::start().await;
    let query = "mutation { add_file_to_update (update_id: 1, file: null) { id } }";

    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .and(body_json(json!({
            "query": format_query(query).unwrap(),
            "variables": {"note": "x"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .custom()
        .execute_custom_file_query(query, json!({"note": "x"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_columns_and_groups() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(body_string_contains("create_column"))
        .and(body_string_contains("column_type: status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"create_column": {"id": "state"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("create_group"))
        .and(body_string_contains("#ffcb00"))
        .and(body_string_contains("before_at"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"create_group": {"id": "new_group"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("update_group"))
        .and(body_string_contains("light-pink"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let column = NewColumn { column_id: Some("state"), ..NewColumn::default() };
    let response = client
        .columns()
        .create_column(1u64, "State", ColumnType::Status, column, false)
        .await
        .unwrap();
    assert_eq!(response["data"]["create_column"]["id"], "state");

    let response = client
        .groups()
        .create_group(
            1u64,
            "Later",
            Some(GroupColors::Yellow),
            Some("topics"),
            Some(PositionRelative::BeforeAt),
            false,
        )
        .await
        .unwrap();
    assert_eq!(response["data"]["create_group"]["id"], "new_group");

    client
        .groups()
        .update_group(
            1u64,
            "new_group",
            GroupAttributes::Color,
            GroupUpdateColors::LightPink.as_str(),
            false,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_column_error_is_raised() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error_code": "ColumnValueException",
            "error_message": "Column not found",
            "status_code": 200
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .columns()
        .delete_column(1u64, "missing", false)
        .await
        .unwrap_err();
    match err {
        ClientError::Api(err) => {
            assert_eq!(err.kind(), ErrorKind::ColumnValue);
            assert_eq!(err.error_code(), Some("ColumnValueException"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_add_file_to_update() {
    let server = MockServer::start().await;

    let mut file = tempfile::Builder::new()
        .prefix("notes")
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(b"meeting notes").unwrap();
    let file_path = file.path().to_string_lossy().into_owned();

    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .and(body_string_contains("add_file_to_update"))
        .and(body_string_contains("update_id: 77"))
        .and(body_string_contains(r#"{"0": ["variables.file"]}"#))
        .and(body_string_contains("meeting notes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"add_file_to_update": {"id": "3"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .updates()
        .add_file_to_update(77u64, &file_path, false)
        .await
        .unwrap();
    assert_eq!(response["data"]["add_file_to_update"]["id"], "3");
}

#[tokio::test]
async fn test_add_missing_file_to_update() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("gone.txt");

    let err = client(&server)
        .updates()
        .add_file_to_update(77u64, &missing.to_string_lossy(), false)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Io(_)));
}

#[tokio::test]
async fn test_updates_page() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("updates"))
        .and(body_string_contains("limit: 25"))
        .and(body_string_contains("page: 1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"updates": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .updates()
        .get_updates(None, None, None, false)
        .await
        .unwrap();
    assert_eq!(response["data"]["updates"], json!([]));
}
