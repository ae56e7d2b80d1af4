//! Configuration endpoint tests over the real HTTP server.

mod test_support;

use serde_json::{json, Value};
use test_support::http_server::start_http_test_server;

async fn config_row_count(database_path: &str) -> i64 {
    let pool = onboarding_core::db::connect(database_path).await.unwrap();
    sqlx::query_scalar("SELECT COUNT(*) FROM onboarding_config")
        .fetch_one(&pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_get_config_seeds_documented_defaults() {
    let server = start_http_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let body: Value = client
        .get(server.url("/api/config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["page2Components"], json!(["aboutMe", "birthdate"]));
    assert_eq!(body["page3Components"], json!(["address"]));
    assert!(body.get("page1Components").is_none());

    // A second read returns the same row and does not seed again.
    let again: Value = client
        .get(server.url("/api/config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again, body);
    assert_eq!(config_row_count(server.database_path()).await, 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_first_reads_store_exactly_one_row() {
    let server = start_http_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let requests = (0..8).map(|_| {
        let client = client.clone();
        let url = server.url("/api/config");
        async move {
            client
                .get(url)
                .send()
                .await
                .unwrap()
                .json::<Value>()
                .await
                .unwrap()
        }
    });
    let bodies = futures_util::future::join_all(requests).await;

    for body in bodies {
        assert_eq!(body["page2Components"], json!(["aboutMe", "birthdate"]));
        assert_eq!(body["page3Components"], json!(["address"]));
    }
    assert_eq!(config_row_count(server.database_path()).await, 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_post_config_sequence_input_round_trips() {
    let server = start_http_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let saved: Value = client
        .post(server.url("/api/config"))
        .json(&json!({"page2Components": ["a", "b"], "page3Components": ["c"]}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(saved["page2Components"], json!(["a", "b"]));
    assert_eq!(saved["page3Components"], json!(["c"]));

    let read_back: Value = client
        .get(server.url("/api/config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(read_back, saved);

    server.shutdown().await;
}

#[tokio::test]
async fn test_post_config_comma_string_input_is_normalized() {
    let server = start_http_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let saved: Value = client
        .post(server.url("/api/config"))
        .json(&json!({"page2Components": "a, b ,,c", "page3Components": ""}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(saved["page2Components"], json!(["a", "b", "c"]));
    assert_eq!(saved["page3Components"], json!([]));

    server.shutdown().await;
}

#[tokio::test]
async fn test_post_config_null_slot_becomes_empty() {
    let server = start_http_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let saved: Value = client
        .post(server.url("/api/config"))
        .json(&json!({"page2Components": null, "page3Components": ["x"]}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(saved["page2Components"], json!([]));
    assert_eq!(saved["page3Components"], json!(["x"]));

    server.shutdown().await;
}

#[tokio::test]
async fn test_post_config_replaces_instead_of_merging() {
    let server = start_http_test_server().await.unwrap();
    let client = reqwest::Client::new();

    client
        .post(server.url("/api/config"))
        .json(&json!({"page2Components": ["a", "b"], "page3Components": ["c"]}))
        .send()
        .await
        .unwrap();

    let second: Value = client
        .post(server.url("/api/config"))
        .json(&json!({"page1Components": ["email"], "page2Components": ["z"]}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["page1Components"], json!(["email"]));
    assert_eq!(second["page2Components"], json!(["z"]));
    // page3 was omitted from the second write, so it is now empty.
    assert_eq!(second["page3Components"], json!([]));

    let read_back: Value = client
        .get(server.url("/api/config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(read_back, second);

    server.shutdown().await;
}

#[tokio::test]
async fn test_post_config_stringifies_sequence_elements() {
    let server = start_http_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let saved: Value = client
        .post(server.url("/api/config"))
        .json(&json!({"page2Components": ["aboutMe", 7, false], "page3Components": []}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(saved["page2Components"], json!(["aboutMe", "7", "false"]));

    server.shutdown().await;
}

#[tokio::test]
async fn test_post_config_rejects_malformed_json() {
    let server = start_http_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/api/config"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    server.shutdown().await;
}
