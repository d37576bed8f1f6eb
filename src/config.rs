use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub admin_key: String,
    pub app_env: AppEnv,
    pub tz_offset_hours: i32,
    pub gate: GateConfig,
    pub session: SessionConfig,
    pub vision: VisionConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

/// Basic-Auth perimeter in front of the app. Leaving GATE_USER/GATE_PASS
/// unset disables the gate entirely.
#[derive(Clone, Debug)]
pub struct GateConfig {
    pub user: Option<String>,
    pub pass: Option<String>,
    pub realm: String,
    pub max_attempts: u32,
    pub lock_secs: i64,
    pub login_path: String,
}

impl GateConfig {
    pub fn enabled(&self) -> bool {
        self.user.is_some() && self.pass.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub max_age_secs: i64,
    pub refresh_secs: i64,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub fetch_timeout_secs: u64,
    pub infer_timeout_secs: u64,
    pub max_image_bytes: usize,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
    pub api_key: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");

        let app_env = match Self::get_env_or("APP_ENV", "development").as_str() {
            "production" => AppEnv::Production,
            _ => AppEnv::Development,
        };

        EnvConfig {
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            db_url,
            admin_key: Self::get_env("ADMIN_KEY"),
            app_env,
            tz_offset_hours: Self::get_env_or("TZ_OFFSET_HOURS", "9").parse().unwrap_or(9),
            gate: GateConfig {
                user: env::var("GATE_USER").ok(),
                pass: env::var("GATE_PASS").ok(),
                realm: Self::get_env_or("GATE_REALM", "reclaim"),
                max_attempts: Self::get_env_or("GATE_MAX_ATTEMPTS", "5").parse().unwrap_or(5),
                lock_secs: Self::get_env_or("GATE_LOCK_SECS", "300").parse().unwrap_or(300),
                login_path: Self::get_env_or("GATE_LOGIN_PATH", "/auth/login"),
            },
            session: SessionConfig {
                max_age_secs: Self::get_env_or("SESSION_MAX_AGE_SECS", "3600")
                    .parse()
                    .unwrap_or(3600),
                refresh_secs: Self::get_env_or("SESSION_REFRESH_SECS", "1209600")
                    .parse()
                    .unwrap_or(1_209_600),
            },
            vision: VisionConfig {
                endpoint: Self::get_env("VISION_ENDPOINT"),
                api_key: Self::get_env("VISION_KEY"),
                fetch_timeout_secs: Self::get_env_or("VISION_FETCH_TIMEOUT_SECS", "10")
                    .parse()
                    .unwrap_or(10),
                infer_timeout_secs: Self::get_env_or("VISION_INFER_TIMEOUT_SECS", "30")
                    .parse()
                    .unwrap_or(30),
                max_image_bytes: Self::get_env_or("VISION_MAX_IMAGE_BYTES", "5242880")
                    .parse()
                    .unwrap_or(5 * 1024 * 1024),
            },
            storage: StorageConfig {
                endpoint: Self::get_env("STORAGE_ENDPOINT"),
                bucket: Self::get_env_or("STORAGE_BUCKET", "reclaim"),
                api_key: Self::get_env("STORAGE_KEY"),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
