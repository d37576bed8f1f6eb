mod common;

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::{http::StatusCode, test};
use common::{client::{response_cookie, TestClient, TEST_PASSWORD}, TestContext};

#[tokio::test]
async fn test_login_flow_sets_session_cookie_pair() {
    println!("\n\n[+] Running test: test_login_flow_sets_session_cookie_pair");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let (user_id, email) = client.create_test_user(None).await;
    println!("[+] Staff account created: {}", user_id);

    println!("[>] Sending login request for {}", email);
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "email": email, "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);

    let access = response_cookie(&resp, "session_access").expect("access cookie missing");
    let refresh = response_cookie(&resp, "session_refresh").expect("refresh cookie missing");
    let fresh = response_cookie(&resp, "login_fresh").expect("fresh-login marker missing");

    assert_eq!(access.http_only(), Some(true));
    assert_eq!(refresh.http_only(), Some(true));
    assert_eq!(access.max_age(), Some(CookieDuration::seconds(3600)));
    assert_eq!(refresh.max_age(), Some(CookieDuration::seconds(86400)));
    assert!(!fresh.value().is_empty());

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["data"]["user"]["id"].as_str().unwrap(), user_id.to_string());

    // an immediate session lookup with the access cookie returns the same user
    println!("[>] Fetching /auth/session with the new access cookie");
    let req = test::TestRequest::get()
        .uri("/auth/session")
        .cookie(access)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["id"].as_str().unwrap(), user_id.to_string());
    println!("[/] Test passed: login issues a working session cookie pair.");
}

#[tokio::test]
async fn test_login_flow_wrong_password_unauthorized() {
    println!("\n\n[+] Running test: test_login_flow_wrong_password_unauthorized");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, email) = client.create_test_user(None).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "email": email, "password": "not the password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // unknown accounts look exactly the same
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "email": "nobody@test.com", "password": "whatever!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: bad credentials are rejected.");
}

#[tokio::test]
async fn test_login_flow_missing_fields_bad_request() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "email": "", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_flow_rotates_access_token() {
    println!("\n\n[+] Running test: test_refresh_flow_rotates_access_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, email) = client.create_test_user(None).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "email": email, "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let old_access = response_cookie(&resp, "session_access").unwrap();
    let refresh = response_cookie(&resp, "session_refresh").unwrap();

    println!("[>] Refreshing the session");
    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .cookie(refresh)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let new_access = response_cookie(&resp, "session_access").expect("rotated cookie missing");
    assert_ne!(new_access.value(), old_access.value());

    // the rotated cookie works, the old one no longer does
    let req = test::TestRequest::get()
        .uri("/auth/session")
        .cookie(new_access)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/auth/session")
        .cookie(old_access)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
    println!("[/] Test passed: refresh rotates the access token.");
}

#[tokio::test]
async fn test_refresh_flow_without_cookie_unauthorized() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post().uri("/auth/refresh").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_flow_without_cookie_unauthorized() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/auth/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_flow_invalidates_session() {
    println!("\n\n[+] Running test: test_logout_flow_invalidates_session");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, email) = client.create_test_user(None).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "email": email, "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let access = response_cookie(&resp, "session_access").unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .cookie(access.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // cleared client-side and deleted server-side
    let cleared = response_cookie(&resp, "session_access").unwrap();
    assert!(cleared.value().is_empty());

    let req = test::TestRequest::get()
        .uri("/auth/session")
        .cookie(access)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
    println!("[/] Test passed: logout invalidates the session.");
}
