//! End-to-end HTTP tests driving a live server on an ephemeral port.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};

use quote_api::router::Router;
use quote_api::server::Server;
use quote_store::{QuoteStore, ServiceConfig};

/// Spawns a seeded server on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let store = Arc::new(QuoteStore::new());
    store.reset().unwrap();
    let config = Arc::new(ServiceConfig::default());
    let router = Router::new(store, config);

    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = Server::bind(addr, router).await.unwrap();
    let local_addr = server.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server.serve().await;
    });

    format!("http://{}", local_addr)
}

async fn get_quotes(client: &reqwest::Client, base: &str) -> Vec<Value> {
    let body: Value = client
        .get(format!("{}/quotes", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["ok"], json!(true));
    body["data"].as_array().unwrap().clone()
}

#[tokio::test]
async fn reset_returns_ok_and_restores_seed_set() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/reset", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(true));

    let quotes = get_quotes(&client, &base).await;
    assert!(quotes.len() >= 12);
}

#[tokio::test]
async fn list_is_sorted_by_id_without_duplicates() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let quotes = get_quotes(&client, &base).await;
    let ids: Vec<u64> = quotes.iter().map(|q| q["id"].as_u64().unwrap()).collect();

    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not ascending");
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids in list");
}

#[tokio::test]
async fn add_quote_returns_updated_list_with_fresh_id() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let before = get_quotes(&client, &base).await;
    let previous_ids: HashSet<u64> = before.iter().map(|q| q["id"].as_u64().unwrap()).collect();
    let max_before = previous_ids.iter().copied().max().unwrap();

    let resp = client
        .post(format!("{}/quotes", base))
        .json(&json!({"text": "I have a dream"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(true));

    // The response carries the full updated list
    let updated = body["data"].as_array().unwrap();
    assert_eq!(updated.len(), before.len() + 1);

    let new_quote = updated
        .iter()
        .find(|q| q["text"] == json!("I have a dream"))
        .expect("added quote missing from response list");
    let new_id = new_quote["id"].as_u64().unwrap();
    assert_eq!(new_id, max_before + 1);
    assert!(!previous_ids.contains(&new_id));

    // And the quote is individually retrievable
    let resp = client
        .get(format!("{}/quotes/{}", base, new_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["text"], json!("I have a dream"));
}

#[tokio::test]
async fn add_quote_rejects_invalid_text() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let before = get_quotes(&client, &base).await;

    // Empty, non-string, and missing `text` all fail with 400
    for payload in [json!({"text": ""}), json!({"text": 123}), json!({})] {
        let resp = client
            .post(format!("{}/quotes", base))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "payload {} not rejected", payload);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["ok"], json!(false));
    }

    // Store unchanged after every rejection
    let after = get_quotes(&client, &base).await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn get_quote_by_id_matches_list_entry() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let quotes = get_quotes(&client, &base).await;
    let expected = &quotes[4];
    let id = expected["id"].as_u64().unwrap();

    let resp = client
        .get(format!("{}/quotes/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["data"]["id"], expected["id"]);
    assert_eq!(body["data"]["text"], expected["text"]);
}

#[tokio::test]
async fn get_unknown_id_is_404_and_bad_id_is_400() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/quotes/999999", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(false));

    let resp = client
        .get(format!("{}/quotes/not-a-number", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(false));
}

#[tokio::test]
async fn delete_removes_quote_and_repeat_delete_is_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let len_before = get_quotes(&client, &base).await.len();

    let resp = client
        .delete(format!("{}/quotes/3", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["data"], Value::Null);

    let quotes = get_quotes(&client, &base).await;
    assert_eq!(quotes.len(), len_before - 1);
    assert!(quotes.iter().all(|q| q["id"] != json!(3)));

    // Fetching or deleting the removed id keeps failing with 404
    let resp = client
        .get(format!("{}/quotes/3", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{}/quotes/3", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(false));
}

#[tokio::test]
async fn deleted_ids_are_not_recycled_by_add() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let quotes = get_quotes(&client, &base).await;
    let max_id = quotes
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .max()
        .unwrap();

    let resp = client
        .delete(format!("{}/quotes/{}", base, max_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(format!("{}/quotes", base))
        .json(&json!({"text": "fills the gap?"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let new_max = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .max()
        .unwrap();
    assert_eq!(new_max, max_id + 1, "deleted id was recycled");
}

#[tokio::test]
async fn unknown_route_and_wrong_method_get_enveloped_errors() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/nope", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(false));

    let resp = client
        .put(format!("{}/quotes", base))
        .json(&json!({"text": "nope"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], json!(false));
}
