use reclaim::config::{
    AppEnv, EnvConfig, GateConfig, SessionConfig, StorageConfig, VisionConfig,
};
use reclaim::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

#[allow(dead_code)]
pub const TEST_ADMIN_KEY: &str = "test-admin-key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // first caller wins; every test binary shares one config
        let _ = reclaim::config::CONFIG.set(test_config());

        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "unused".to_string(), // tests connect through TestContext
        admin_key: TEST_ADMIN_KEY.to_string(),
        app_env: AppEnv::Development,
        tz_offset_hours: 9,
        gate: GateConfig {
            user: None,
            pass: None,
            realm: "reclaim".to_string(),
            max_attempts: 3,
            lock_secs: 60,
            login_path: "/auth/login".to_string(),
        },
        session: SessionConfig {
            max_age_secs: 3600,
            refresh_secs: 86400,
        },
        vision: VisionConfig {
            endpoint: "http://127.0.0.1:9/analyze".to_string(),
            api_key: "test".to_string(),
            fetch_timeout_secs: 1,
            infer_timeout_secs: 1,
            max_image_bytes: 1024,
        },
        storage: StorageConfig {
            endpoint: "http://127.0.0.1:9/storage".to_string(),
            bucket: "reclaim-test".to_string(),
            api_key: "test".to_string(),
        },
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use chrono::NaiveDate;
    use reclaim::types::claim::RClaimCreate;
    use reclaim::types::item::RItemCreate;
    use uuid::Uuid;

    pub fn sample_item() -> RItemCreate {
        RItemCreate {
            name: "Black umbrella".to_string(),
            brand: "Totes".to_string(),
            color: "black".to_string(),
            feature: "wooden curved handle".to_string(),
            place: "platform 2 bench".to_string(),
            category: "umbrella".to_string(),
            image_ref: "items/umbrella.jpg".to_string(),
        }
    }

    pub fn sample_item_named(name: &str) -> RItemCreate {
        RItemCreate {
            name: name.to_string(),
            ..sample_item()
        }
    }

    pub fn sample_claim(item_id: Uuid) -> RClaimCreate {
        RClaimCreate {
            item_id,
            applicant: "Aiko Tanaka".to_string(),
            applied_on: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            remarks: Some("lost it on the evening train".to_string()),
        }
    }
}
