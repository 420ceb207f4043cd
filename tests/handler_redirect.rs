mod common;

use serde_json::json;
use short_url::domain::repositories::ShortUrlRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    common::create_test_short_url(&store, "abc12345", "https://example.com/page").await;
    let server = common::create_test_server(state);

    let response = server.get("/abc12345").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[tokio::test]
async fn test_redirect_records_visit() {
    let (state, store) = common::create_test_state();
    common::create_test_short_url(&store, "abc12345", "https://example.com").await;
    let server = common::create_test_server(state);

    let before = chrono::Utc::now().timestamp_millis();
    server.get("/abc12345").await;
    let after = chrono::Utc::now().timestamp_millis();

    let record = store.find_by_short_id("abc12345").await.unwrap().unwrap();
    assert_eq!(record.total_clicks(), 1);

    let visited = record.visit_history[0].timestamp;
    assert!(visited >= before && visited <= after);
}

#[tokio::test]
async fn test_each_redirect_appends_one_visit() {
    let (state, store) = common::create_test_state();
    common::create_test_short_url(&store, "abc12345", "https://example.com").await;
    let server = common::create_test_server(state);

    for _ in 0..3 {
        assert_eq!(server.get("/abc12345").await.status_code(), 302);
    }

    let record = store.find_by_short_id("abc12345").await.unwrap().unwrap();
    assert_eq!(record.total_clicks(), 3);

    let timestamps: Vec<i64> = record.visit_history.iter().map(|v| v.timestamp).collect();
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/missing0").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(store.count_visits().await.unwrap(), 0);
}

#[tokio::test]
async fn test_redirect_does_not_touch_other_records() {
    let (state, store) = common::create_test_state();
    common::create_test_short_url(&store, "first000", "https://one.com").await;
    common::create_test_short_url(&store, "second00", "https://two.com").await;
    let server = common::create_test_server(state);

    server.get("/first000").await;

    let untouched = store.find_by_short_id("second00").await.unwrap().unwrap();
    assert_eq!(untouched.total_clicks(), 0);
}

#[tokio::test]
async fn test_redirect_after_shorten() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let created = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/landing" }))
        .await
        .json::<serde_json::Value>();
    let short_id = created["shortId"].as_str().unwrap();

    let response = server.get(&format!("/{short_id}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/landing");
}

#[tokio::test]
async fn test_redirect_encodes_control_characters() {
    let (state, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let created = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await
        .json::<serde_json::Value>();
    let short_id = created["shortId"].as_str().unwrap();

    let response = server.get(&format!("/{short_id}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a%0Ab");

    let record = store.find_by_short_id(short_id).await.unwrap().unwrap();
    assert_eq!(record.redirect_url, "https://example.com/a\nb");
    assert_eq!(record.total_clicks(), 1);
}

#[tokio::test]
async fn test_redirect_encodes_non_ascii() {
    let (state, store) = common::create_test_state();
    common::create_test_short_url(&store, "cafe0000", "https://example.com/café").await;
    let server = common::create_test_server(state);

    let response = server.get("/cafe0000").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = common::create_test_server(common::create_failing_state());

    let response = server.get("/abc12345").await;

    assert_eq!(response.status_code(), 500);
}
