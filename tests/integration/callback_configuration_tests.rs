use crate::common::authenticated_client_for;
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use relayo_client::prelude::*;
use serde_json::json;

const PATH: &str = "/api/panel/application/callback/configuration/whatsapp";

#[tokio::test]
async fn test_get_and_update_callback_configuration() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", PATH)
        .with_status(200)
        .with_body(r#"{"data":[{"id":"cb-1","url":"https://hooks.example.com"}]}"#)
        .create_async()
        .await;
    let one = server
        .mock("GET", format!("{PATH}/cb-1").as_str())
        .with_status(200)
        .with_body(r#"{"data":{"id":"cb-1","url":"https://hooks.example.com"}}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", format!("{PATH}/cb-1").as_str())
        .match_body(Matcher::Json(json!({"url": "https://new.example.com"})))
        .with_status(200)
        .with_body(r#"{"data":{"id":"cb-1","url":"https://new.example.com"}}"#)
        .create_async()
        .await;

    let client = authenticated_client_for(&server);
    let callbacks = client.callback_configuration();

    let all = callbacks.get().await.unwrap();
    assert_json_eq!(all, json!([{"id": "cb-1", "url": "https://hooks.example.com"}]));
    assert_eq!(callbacks.get_by_id("cb-1").await.unwrap()["id"], "cb-1");
    let updated = callbacks
        .update("cb-1", &json!({"url": "https://new.example.com"}))
        .await
        .unwrap();
    assert_eq!(updated["url"], "https://new.example.com");

    list.assert_async().await;
    one.assert_async().await;
    update.assert_async().await;
}
