//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: u64,
    pub access_key: String,
    pub secret: String,
    pub region: String,
    pub bucket_name: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// This method is used internally to populate the singleton. It panics
    /// if required variables are missing or improperly formatted.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "rollcall".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH").expect("DATABASE_PATH is required"),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .expect("PORT must be a valid port number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET is required"),
            jwt_duration_minutes: env::var("JWT_DURATION_MINUTES")
                .unwrap_or("60".into())
                .parse()
                .expect("JWT_DURATION_MINUTES must be an integer"),
            access_key: env::var("ACCESS_KEY").unwrap_or_default(),
            secret: env::var("SECRET").unwrap_or_default(),
            region: env::var("REGION").unwrap_or_default(),
            bucket_name: env::var("BUCKET_NAME").unwrap_or_default(),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    ///
    /// Used by public per-field setter methods.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_jwt_secret(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.jwt_secret = value.into());
    }

    pub fn set_jwt_duration_minutes(value: impl Into<u64>) {
        AppConfig::set_field(|cfg| cfg.jwt_duration_minutes = value.into());
    }

    pub fn set_access_key(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.access_key = value.into());
    }

    pub fn set_secret(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.secret = value.into());
    }

    pub fn set_region(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.region = value.into());
    }

    pub fn set_bucket_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.bucket_name = value.into());
    }
}

// --- Free accessor functions ---
//
// Call sites read single values through these rather than holding the
// read guard across awaits.

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn jwt_secret() -> String {
    AppConfig::global().jwt_secret.clone()
}

pub fn jwt_duration_minutes() -> u64 {
    AppConfig::global().jwt_duration_minutes
}

pub fn access_key() -> String {
    AppConfig::global().access_key.clone()
}

pub fn secret() -> String {
    AppConfig::global().secret.clone()
}

pub fn region() -> String {
    AppConfig::global().region.clone()
}

pub fn bucket_name() -> String {
    AppConfig::global().bucket_name.clone()
}
