mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_postback_attributed() {
    let (state, store) = common::create_test_state();
    common::seed_click(&store, "A1", "C1", "X1").await;
    let server = common::test_server(state);

    let response = server
        .get("/postback")
        .add_query_param("affiliate_id", "A1")
        .add_query_param("click_id", "X1")
        .add_query_param("amount", "99.50")
        .add_query_param("currency", "USD")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Conversion tracked");
    assert_eq!(json["data"]["affiliate_id"], "A1");
    assert_eq!(json["data"]["click_ref"], 1);
    assert_eq!(json["data"]["amount"], "99.50");
    assert_eq!(json["data"]["currency"], "USD");

    assert_eq!(common::conversion_count(&store).await, 1);
}

#[tokio::test]
async fn test_postback_small_amount_rendered_as_plain_decimal() {
    let (state, store) = common::create_test_state();
    common::seed_click(&store, "A1", "C1", "X1").await;
    let server = common::test_server(state);

    let response = server
        .get("/postback?affiliate_id=A1&click_id=X1&amount=0.0000001&currency=BTC")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["amount"], "0.0000001");

    let listing = server
        .get("/dashboard/conversions/A1")
        .await
        .json::<serde_json::Value>();
    assert_eq!(listing["data"][0]["amount"], "0.0000001");
}

#[tokio::test]
async fn test_postback_repeated_parameter_rejected_as_json() {
    let (state, store) = common::create_test_state();
    common::seed_click(&store, "A1", "C1", "X1").await;
    let server = common::test_server(state);

    let response = server
        .get("/postback?affiliate_id=A1&affiliate_id=A2&click_id=X1&amount=1&currency=USD")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Missing required parameters.");

    assert_eq!(common::conversion_count(&store).await, 0);
}

#[tokio::test]
async fn test_postback_from_other_affiliate_ignored() {
    let (state, store) = common::create_test_state();
    common::seed_click(&store, "A1", "C1", "X1").await;
    let server = common::test_server(state);

    let response = server
        .get("/postback?affiliate_id=A2&click_id=X1&amount=10&currency=USD")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(
        json["message"],
        "Invalid click_id for affiliate_id. Postback ignored."
    );

    assert_eq!(common::conversion_count(&store).await, 0);
}

#[tokio::test]
async fn test_postback_for_unknown_click() {
    let (state, store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .get("/postback?affiliate_id=A1&click_id=NOPE&amount=10&currency=USD")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::conversion_count(&store).await, 0);
}

#[tokio::test]
async fn test_postback_missing_currency() {
    let (state, store) = common::create_test_state();
    common::seed_click(&store, "A1", "C1", "X1").await;
    let server = common::test_server(state);

    let response = server
        .get("/postback?affiliate_id=A1&click_id=X1&amount=10")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Missing required parameters.");

    assert_eq!(common::conversion_count(&store).await, 0);
}

#[tokio::test]
async fn test_postback_malformed_amount() {
    let (state, store) = common::create_test_state();
    common::seed_click(&store, "A1", "C1", "X1").await;
    let server = common::test_server(state);

    let response = server
        .get("/postback?affiliate_id=A1&click_id=X1&amount=lots&currency=USD")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Invalid amount.");

    assert_eq!(common::conversion_count(&store).await, 0);
}

#[tokio::test]
async fn test_repeated_postback_records_each_conversion() {
    let (state, store) = common::create_test_state();
    common::seed_click(&store, "A1", "C1", "X1").await;
    let server = common::test_server(state);

    for _ in 0..2 {
        server
            .get("/postback?affiliate_id=A1&click_id=X1&amount=5&currency=EUR")
            .await
            .assert_status_ok();
    }

    assert_eq!(common::conversion_count(&store).await, 2);
}

#[tokio::test]
async fn test_postback_store_unavailable() {
    let server = common::test_server(common::create_unavailable_state());

    let response = server
        .get("/postback?affiliate_id=A1&click_id=X1&amount=5&currency=EUR")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Failed to process postback.");
}

#[sqlx::test]
async fn test_click_then_postback_over_postgres(pool: sqlx::PgPool) {
    let server = common::test_server(common::create_pg_state(pool));

    server
        .get("/click?affiliate_id=A1&campaign_id=C1&click_id=X1")
        .await
        .assert_status_ok();
    server
        .get("/postback?affiliate_id=A2&click_id=X1&amount=10&currency=USD")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/postback?affiliate_id=A1&click_id=X1&amount=10.25&currency=USD")
        .await
        .assert_status_ok();

    let response = server
        .get("/postback?affiliate_id=A1&click_id=X1&amount=0.0000001&currency=BTC")
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["data"]["amount"],
        "0.0000001"
    );

    let json = server
        .get("/dashboard/conversions/A1")
        .await
        .json::<serde_json::Value>();
    let conversions = json["data"].as_array().unwrap();
    assert_eq!(conversions.len(), 2);
    assert_eq!(conversions[0]["amount"], "0.0000001");
    assert_eq!(conversions[1]["amount"], "10.25");
}
