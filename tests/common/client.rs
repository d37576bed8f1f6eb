use actix_http::Request;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use reclaim::{
    db::postgres_service::PostgresService,
    notify::ClaimNotifier,
    types::user::DBUserCreate,
    utils::token::encrypt,
};
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "correct horse battery";

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub notifier: ClaimNotifier,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            notifier: ClaimNotifier::new(16),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.notifier.clone()))
            .configure(reclaim::routes::configure_routes)
    }

    /// Provisions a staff account directly in the database and returns
    /// (id, email); the password is always TEST_PASSWORD.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> (Uuid, String) {
        let random_id = Uuid::new_v4();
        let email = email.unwrap_or_else(|| format!("staff-{}@test.com", random_id));
        let pass_hash = encrypt(TEST_PASSWORD).expect("Failed to hash password");

        let user_id = self
            .db
            .create_user(DBUserCreate {
                name: "Test Staff".to_string(),
                email: email.clone(),
                pass_hash,
            })
            .await
            .expect("Failed to create staff user");

        (user_id, email)
    }
}

/// Pulls a Set-Cookie value off a service response by name.
#[allow(dead_code)]
pub fn response_cookie(resp: &ServiceResponse, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}

/// Provisions a staff account, logs it in over HTTP and hands back the
/// access cookie most flow tests start from.
#[allow(dead_code)]
pub async fn login_staff(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    client: &TestClient,
) -> Cookie<'static> {
    let (_id, email) = client.create_test_user(None).await;
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "email": email, "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    response_cookie(&resp, "session_access").expect("access cookie missing")
}
