use crate::common::client_for;
use mockito::Matcher;
use relayo_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_login_sets_token_for_following_requests() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/panel/customer/login")
        .match_body(Matcher::Json(
            json!({"email": "test@example.com", "password": "password123"}),
        ))
        .with_status(200)
        .with_body(
            json!({
                "success": {"token": "test-token-123"},
                "data": {"id": 1, "email": "test@example.com", "customer_id": 123}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let apps = server
        .mock("GET", "/panel/application")
        .match_header("authorization", "Bearer test-token-123")
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let body = client
        .auth()
        .login("test@example.com", "password123")
        .await
        .unwrap();

    assert_eq!(body["data"]["customer_id"], 123);
    assert!(client.is_authenticated());
    assert!(client.auth().validate_token());

    client.applications().list(&json!({})).await.unwrap();

    login.assert_async().await;
    apps.assert_async().await;
}

#[tokio::test]
async fn test_login_with_wrong_credentials() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/panel/customer/login")
        .with_status(401)
        .with_body(r#"{"errors":["Credenciais inválidas"]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .auth()
        .login("email_invalido@test.com", "senha_errada")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Authentication { code: 401, .. }));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_login_without_token_in_response() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/panel/customer/login")
        .with_status(200)
        .with_body(r#"{"success":{"token":""},"data":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.auth().login("a@b.c", "x").await.unwrap_err();

    assert!(matches!(err, AppError::TokenNotFound));
    assert_eq!(client.get_token(), None);
}

#[tokio::test]
async fn test_logout_clears_token() {
    let mut server = mockito::Server::new_async().await;
    let logout = server
        .mock("POST", "/panel/customer/logout")
        .match_header("authorization", "Bearer abc")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client.set_token("abc");
    client.auth().logout().await.unwrap();

    logout.assert_async().await;
    assert!(!client.is_authenticated());
    assert_eq!(client.auth().get_token(), None);
}
