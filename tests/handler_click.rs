mod common;

use affiliate_tracker::domain::repositories::ClickRepository;

#[tokio::test]
async fn test_click_tracked() {
    let (state, store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .get("/click")
        .add_query_param("affiliate_id", "A1")
        .add_query_param("campaign_id", "C1")
        .add_query_param("click_id", "X1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Click tracked successfully.");
    assert_eq!(json["data"]["affiliate_id"], "A1");
    assert_eq!(json["data"]["campaign_id"], "C1");
    assert_eq!(json["data"]["click_id"], "X1");
    assert!(json["data"]["id"].is_i64());
    assert!(json["data"]["created_at"].is_string());

    assert_eq!(common::click_count(&store).await, 1);
}

#[tokio::test]
async fn test_duplicate_click_conflict() {
    let (state, store) = common::create_test_state();
    let server = common::test_server(state);

    server
        .get("/click?affiliate_id=A1&campaign_id=C1&click_id=X1")
        .await
        .assert_status_ok();

    let response = server
        .get("/click?affiliate_id=A2&campaign_id=C7&click_id=X1")
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Duplicate click ID.");
    assert!(json.get("data").is_none());

    assert_eq!(common::click_count(&store).await, 1);
    let owned = store.find_owned("X1", "A1").await.unwrap();
    assert_eq!(owned.unwrap().campaign_id, "C1");
}

#[tokio::test]
async fn test_missing_campaign_rejected() {
    let (state, store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .get("/click")
        .add_query_param("affiliate_id", "A1")
        .add_query_param("click_id", "X2")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Missing required parameters.");

    assert_eq!(common::click_count(&store).await, 0);
}

#[tokio::test]
async fn test_empty_parameter_rejected() {
    let (state, store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .get("/click?affiliate_id=&campaign_id=C1&click_id=X3")
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::click_count(&store).await, 0);
}

#[tokio::test]
async fn test_click_store_unavailable() {
    let server = common::test_server(common::create_unavailable_state());

    let response = server
        .get("/click?affiliate_id=A1&campaign_id=C1&click_id=X1")
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Failed to track click.");
}

#[tokio::test]
async fn test_repeated_parameter_rejected_as_json() {
    let (state, store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .get("/click?affiliate_id=A1&affiliate_id=A2&campaign_id=C1&click_id=X1")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Missing required parameters.");

    assert_eq!(common::click_count(&store).await, 0);
}
