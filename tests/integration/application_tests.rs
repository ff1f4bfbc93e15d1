use crate::common::authenticated_client_for;
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use relayo_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_list_applications_unwraps_data() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/panel/application")
        .with_status(200)
        .with_body(
            json!({"data": [{"id": "app-1", "name": "Main"}], "meta": {"total": 1}}).to_string(),
        )
        .create_async()
        .await;

    let client = authenticated_client_for(&server);
    let apps = client.applications().list(&json!({})).await.unwrap();

    mock.assert_async().await;
    assert_json_eq!(apps, json!([{"id": "app-1", "name": "Main"}]));
}

#[tokio::test]
async fn test_find_by_name_uses_default_page_size() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/panel/application")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "Loja Centro".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = authenticated_client_for(&server);
    let apps = client
        .applications()
        .find_by_name("Loja Centro", None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_json_eq!(apps, json!([]));
}

#[tokio::test]
async fn test_crud_round() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/panel/application")
        .match_body(Matcher::Json(json!({"name": "New"})))
        .with_status(201)
        .with_body(r#"{"data":{"id":"app-2","name":"New"}}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/panel/application/app-2")
        .match_body(Matcher::Json(json!({"name": "Renamed"})))
        .with_status(200)
        .with_body(r#"{"data":{"id":"app-2","name":"Renamed"}}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/panel/application/app-2")
        .with_status(204)
        .create_async()
        .await;

    let client = authenticated_client_for(&server);
    let apps = client.applications();

    let created = apps.create(&json!({"name": "New"})).await.unwrap();
    assert_eq!(created["id"], "app-2");
    let updated = apps.update("app-2", &json!({"name": "Renamed"})).await.unwrap();
    assert_eq!(updated["name"], "Renamed");
    apps.delete("app-2").await.unwrap();

    create.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_get_without_envelope_returns_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/panel/application/app-1")
        .with_status(200)
        .with_body(r#"{"id":"app-1"}"#)
        .create_async()
        .await;

    let client = authenticated_client_for(&server);
    let app = client.applications().get("app-1").await.unwrap();
    assert_json_eq!(app, json!([]));
}

#[tokio::test]
async fn test_stats_and_activation() {
    let mut server = mockito::Server::new_async().await;
    let stats = server
        .mock("GET", "/panel/application/app-1/stats")
        .with_status(200)
        .with_body(r#"{"data":{"messages":42}}"#)
        .create_async()
        .await;
    let activate = server
        .mock("POST", "/panel/application/app-1/activate")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(r#"{"data":{"active":true}}"#)
        .create_async()
        .await;
    let deactivate = server
        .mock("POST", "/panel/application/app-1/deactivate")
        .with_status(200)
        .with_body(r#"{"data":{"active":false}}"#)
        .create_async()
        .await;

    let client = authenticated_client_for(&server);
    let apps = client.applications();

    assert_eq!(apps.get_stats("app-1").await.unwrap()["messages"], 42);
    assert_eq!(apps.activate("app-1").await.unwrap()["active"], true);
    assert_eq!(apps.deactivate("app-1").await.unwrap()["active"], false);

    stats.assert_async().await;
    activate.assert_async().await;
    deactivate.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/panel/application/missing")
        .with_status(404)
        .with_body(r#"{"message":"Application not found"}"#)
        .create_async()
        .await;

    let client = authenticated_client_for(&server);
    let err = client.applications().get("missing").await.unwrap_err();
    assert_eq!(err.code(), 404);
    assert_eq!(err.message(), "Application not found");
}

#[tokio::test]
async fn test_reserved_characters_in_id_stay_in_one_segment() {
    let mut server = mockito::Server::new_async().await;
    let logout = server
        .mock("DELETE", "/panel/customer/logout")
        .expect(0)
        .create_async()
        .await;
    let item = server
        .mock(
            "DELETE",
            Matcher::Regex(r"^/panel/application/[^/?#]+$".to_string()),
        )
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let client = authenticated_client_for(&server);
    client
        .applications()
        .delete("../customer/logout")
        .await
        .unwrap();

    item.assert_async().await;
    logout.assert_async().await;
}
