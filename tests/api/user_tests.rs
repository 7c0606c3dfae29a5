//! User and authentication endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, unique_email, TestApp, TEST_USER};

#[tokio::test]
async fn register_returns_user_without_password_hash() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/v1/users/register",
            &json!({
                "email": TEST_USER.email,
                "password": TEST_USER.password,
                "first_name": "Ada",
            })
            .to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "user created");
    assert_eq!(body["user"]["email"], TEST_USER.email);
    assert_eq!(body["user"]["first_name"], "Ada");
    assert_eq!(body["user"]["is_user"], true);
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn register_without_content_type_is_accepted() {
    let app = TestApp::new().await;

    let response = app
        .post_raw(
            "/api/v1/users/register",
            &json!({ "email": unique_email(), "password": "pw" }).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn register_missing_password_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/v1/users/register", r#"{"email":"a@example.com"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "MISSING_FIELDS");
}

#[tokio::test]
async fn register_with_invalid_body_is_rejected() {
    let app = TestApp::new().await;

    for body in ["not json", "[]"] {
        let response = app.post_json("/api/v1/users/register", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "INVALID_BODY");
    }
}

#[tokio::test]
async fn duplicate_registration_conflicts_and_keeps_original() {
    let app = TestApp::new().await;
    let email = unique_email();
    let (original_id, _) = app.register(&email, "first-password").await;

    let response = app
        .post_json(
            "/api/v1/users/register",
            &json!({ "email": email, "password": "second-password" }).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"]["code"], "DUPLICATE_EMAIL");

    let users = body_json(app.get("/api/v1/users").await).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["id"], original_id.as_str());

    let login = app
        .post_json(
            "/api/v1/users/login",
            &json!({ "email": email, "password": "first-password" }).to_string(),
        )
        .await;
    assert_eq!(login.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_registered_password_returns_token() {
    let app = TestApp::new().await;
    let email = unique_email();
    app.register(&email, TEST_USER.password).await;

    let response = app
        .post_json(
            "/api/v1/users/login",
            &json!({ "email": email, "password": TEST_USER.password }).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "user authenticated");
    assert_eq!(body["is_user"], true);

    let token = body["access_token"].as_str().unwrap();
    let messages = app.get_auth("/api/v1/messages", token).await;
    assert_eq!(messages.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    let email = unique_email();
    app.register(&email, TEST_USER.password).await;

    for (email, password) in [(email.as_str(), "wrong"), ("nobody@example.com", TEST_USER.password)] {
        let response = app
            .post_json(
                "/api/v1/users/login",
                &json!({ "email": email, "password": password }).to_string(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"]["code"], "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn login_missing_fields_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/v1/users/login", r#"{"email":"","password":"pw"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "MISSING_FIELDS");
}

#[tokio::test]
async fn get_user_by_id() {
    let app = TestApp::new().await;
    let email = unique_email();
    let (id, _) = app.register(&email, "pw").await;

    let response = app.get(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], email.as_str());

    let missing = app.get("/api/v1/users/does-not-exist").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing).await["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_user_changes_allowed_fields_only() {
    let app = TestApp::new().await;
    let (id, _) = app.register(&unique_email(), "old-password").await;
    let new_email = unique_email();

    let response = app
        .put_json(
            &format!("/api/v1/users/{}", id),
            &json!({
                "email": new_email,
                "last_name": "Lovelace",
                "password": "new-password",
                "id": "hijacked",
                "is_user": false,
            })
            .to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "user updated");
    assert_eq!(body["user"]["id"], id.as_str());
    assert_eq!(body["user"]["email"], new_email.as_str());
    assert_eq!(body["user"]["last_name"], "Lovelace");
    assert_eq!(body["user"]["is_user"], true);

    let login = app
        .post_json(
            "/api/v1/users/login",
            &json!({ "email": new_email, "password": "new-password" }).to_string(),
        )
        .await;
    assert_eq!(login.status(), StatusCode::OK);
}

#[tokio::test]
async fn update_missing_user_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .put_json("/api/v1/users/ghost", r#"{"first_name":"x"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_user_with_malformed_body_is_not_found() {
    let app = TestApp::new().await;

    let response = app.put_raw("/api/v1/users/ghost", "not json").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_existing_user_with_malformed_body_is_bad_request() {
    let app = TestApp::new().await;
    let (id, _) = app.register(&unique_email(), "pw").await;

    let response = app
        .put_raw(&format!("/api/v1/users/{}", id), "not json")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "INVALID_BODY");
}

#[tokio::test]
async fn null_profile_name_clears_it() {
    let app = TestApp::new().await;
    let registered = app
        .post_json(
            "/api/v1/users/register",
            &json!({
                "email": unique_email(),
                "password": "pw",
                "first_name": "Ada",
                "last_name": "Lovelace",
            })
            .to_string(),
        )
        .await;
    assert_eq!(registered.status(), StatusCode::CREATED);
    let id = body_json(registered).await["user"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .put_json(
            &format!("/api/v1/users/{}", id),
            r#"{"first_name":null}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["user"]["first_name"].is_null());
    assert_eq!(body["user"]["last_name"], "Lovelace");

    let fetched = body_json(app.get(&format!("/api/v1/users/{}", id)).await).await;
    assert!(fetched["first_name"].is_null());
}

#[tokio::test]
async fn update_to_taken_email_is_a_database_error() {
    let app = TestApp::new().await;
    let taken = unique_email();
    app.register(&taken, "pw").await;
    let (id, _) = app.register(&unique_email(), "pw").await;

    let response = app
        .put_json(
            &format!("/api/v1/users/{}", id),
            &json!({ "email": taken }).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    assert!(body["error"]["detail"].is_string());
}

#[tokio::test]
async fn delete_user_removes_account_and_messages() {
    let app = TestApp::new().await;
    let (id, token) = app.register(&unique_email(), "pw").await;
    let created = app
        .post_json_auth(
            "/api/v1/messages",
            r#"{"session_id":"s1","content":"bye"}"#,
            &token,
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = app.delete(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(&app.state.db)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    let again = app.delete(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
