mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use common::{
    client::{login_staff as login, TestClient},
    test_data, TestContext,
};

#[tokio::test]
async fn test_item_registration_flow() {
    println!("\n\n[+] Running test: test_item_registration_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let access = login(&app, &client).await;
    println!("[+] Logged in.");

    println!("[>] Registering a found item");
    let req = test::TestRequest::post()
        .uri("/item/create")
        .cookie(access.clone())
        .set_json(test_data::sample_item())
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let item_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["name"], "Black umbrella");
    assert!(body["data"]["signature_ref"].is_null());

    println!("[>] Fetching the item back by id");
    let req = test::TestRequest::get()
        .uri(&format!("/item/{}", item_id))
        .cookie(access.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"].as_str().unwrap(), item_id);
    println!("[/] Test passed: item registration flow successful.");
}

#[tokio::test]
async fn test_item_routes_require_a_session() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/item/create")
        .set_json(test_data::sample_item())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get().uri("/item/list").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_item_list_flow_substring_filter() {
    println!("\n\n[+] Running test: test_item_list_flow_substring_filter");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let access = login(&app, &client).await;

    for name in ["Black umbrella", "Red umbrella", "Leather wallet"] {
        let req = test::TestRequest::post()
            .uri("/item/create")
            .cookie(access.clone())
            .set_json(test_data::sample_item_named(name))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    println!("[>] Filtering by q=umbrella");
    let req = test::TestRequest::get()
        .uri("/item/list?q=umbrella")
        .cookie(access.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // the substring match also covers the descriptive columns
    let req = test::TestRequest::get()
        .uri("/item/list?q=wooden")
        .cookie(access.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/item/list?q=no-such-item")
        .cookie(access)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    println!("[/] Test passed: substring filter works.");
}

#[tokio::test]
async fn test_item_list_flow_date_range_filter() {
    println!("\n\n[+] Running test: test_item_list_flow_date_range_filter");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let access = login(&app, &client).await;

    let req = test::TestRequest::post()
        .uri("/item/create")
        .cookie(access.clone())
        .set_json(test_data::sample_item())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // "today" on the desk's clock (UTC+9 in the test config)
    let local_today = (Utc::now() + Duration::hours(9)).date_naive();
    let tomorrow = local_today + Duration::days(1);

    let req = test::TestRequest::get()
        .uri(&format!("/item/list?from={}&to={}", local_today, local_today))
        .cookie(access.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // a range starting tomorrow excludes it
    let req = test::TestRequest::get()
        .uri(&format!("/item/list?from={}", tomorrow))
        .cookie(access)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    println!("[/] Test passed: date range filter respects the local day.");
}

#[tokio::test]
async fn test_item_update_flow_partial_patch() {
    println!("\n\n[+] Running test: test_item_update_flow_partial_patch");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let access = login(&app, &client).await;

    let req = test::TestRequest::post()
        .uri("/item/create")
        .cookie(access.clone())
        .set_json(test_data::sample_item())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let item_id = body["data"]["id"].as_str().unwrap().to_string();

    println!("[>] Patching only the color");
    let req = test::TestRequest::post()
        .uri("/item/update")
        .cookie(access.clone())
        .set_json(serde_json::json!({ "id": item_id, "color": "navy" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["color"], "navy");
    // untouched fields survive the patch
    assert_eq!(body["data"]["name"], "Black umbrella");
    assert_eq!(body["data"]["place"], "platform 2 bench");
    println!("[/] Test passed: partial patch leaves other fields alone.");
}

#[tokio::test]
async fn test_item_get_flow_unknown_id_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let access = login(&app, &client).await;

    let req = test::TestRequest::get()
        .uri(&format!("/item/{}", uuid::Uuid::new_v4()))
        .cookie(access)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
