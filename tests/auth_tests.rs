
use chrono::Duration;
use job_tracker::{auth::jwt::JwtService, entities::owner::OwnerId};
use reqwest::StatusCode;
use serde_json::Value;
use test_application::*;
use test_utils::*;
use uuid::Uuid;

#[actix_rt::test]
async fn list_without_identity_is_401_and_never_reaches_the_store() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.applications_url())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Unauthorized access");
    assert_eq!(app.repo.call_count(), 0);
}

#[actix_rt::test]
async fn every_application_endpoint_requires_identity() {
    let app = TestApp::spawn().await;
    let id = Uuid::new_v4().to_string();

    let responses = vec![
        app.client.get(app.applications_url()).send().await.unwrap(),
        app.client.get(app.application_url(&id)).send().await.unwrap(),
        app.client
            .post(app.applications_url())
            .json(&valid_application())
            .send()
            .await
            .unwrap(),
        // An invalid body still gets 401: identity is checked first.
        app.client
            .post(app.applications_url())
            .json(&serde_json::json!({ "status": "nope" }))
            .send()
            .await
            .unwrap(),
        app.client
            .put(app.application_url(&id))
            .json(&serde_json::json!({ "status": "OFFER" }))
            .send()
            .await
            .unwrap(),
        app.client.delete(app.application_url(&id)).send().await.unwrap(),
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    assert_eq!(app.repo.call_count(), 0);
}

#[actix_rt::test]
async fn expired_token_is_rejected() {
    let app = TestApp::spawn().await;
    let owner = OwnerId::new("user-1").unwrap();

    let token = app
        .jwt
        .create_jwt_with_ttl(&owner, Duration::minutes(-1))
        .expect("Failed to create JWT");

    let response = app.list_applications(&token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Unauthorized access" }));
    assert_eq!(app.repo.call_count(), 0);
}

#[actix_rt::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = TestApp::spawn().await;

    let mut config = app.config.clone();
    config.jwt_secret = "an_attacker_controlled_secret_that_is_long_enough".into();
    let forged = JwtService::new(&config)
        .create_jwt(&OwnerId::new("user-1").unwrap())
        .unwrap();

    let response = app.list_applications(&forged).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn session_cookie_is_accepted() {
    let app = TestApp::spawn().await;
    let token = app.token_for("cookie-user");
    app.create_application_ok(&token, &valid_application()).await;

    let response = app
        .client
        .get(app.applications_url())
        .header(
            reqwest::header::COOKIE,
            format!("{}={}", app.config.session_cookie_name, token),
        )
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let records: Vec<Value> = response.json().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["ownerId"], "cookie-user");
}

#[actix_rt::test]
async fn health_and_home_are_public() {
    let app = TestApp::spawn().await;

    let response = app.client.get(format!("{}/health", app.address)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let health: Value = response.json().await.unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "OK");

    let response = app.client.get(format!("{}/", app.address)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
