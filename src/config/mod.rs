use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub scenario: ScenarioConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Параметры сценария симуляции
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    pub theatre_count: u32,
    pub seats_per_theatre: u32,
    pub customer_count: u32,
    pub request_min: usize,
    pub request_max: usize,
    pub confirm_delay_min_ms: u64,
    pub confirm_delay_max_ms: u64,
    pub await_deadline_secs: u64,
    pub shutdown_grace_ms: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid number, got {value:?}")]
    Invalid { var: &'static str, value: String },
}

// Читает переменную окружения или возвращает значение по умолчанию
fn var_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = ScenarioConfig::default();
        Ok(Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "theatre_sim=info".to_string()),
            },
            scenario: ScenarioConfig {
                theatre_count: var_or("THEATRE_COUNT", defaults.theatre_count)?,
                seats_per_theatre: var_or("SEATS_PER_THEATRE", defaults.seats_per_theatre)?,
                customer_count: var_or("CUSTOMER_COUNT", defaults.customer_count)?,
                request_min: var_or("SEATS_PER_REQUEST_MIN", defaults.request_min)?,
                request_max: var_or("SEATS_PER_REQUEST_MAX", defaults.request_max)?,
                confirm_delay_min_ms: var_or("CONFIRM_DELAY_MIN_MS", defaults.confirm_delay_min_ms)?,
                confirm_delay_max_ms: var_or("CONFIRM_DELAY_MAX_MS", defaults.confirm_delay_max_ms)?,
                await_deadline_secs: var_or("AWAIT_DEADLINE_SECS", defaults.await_deadline_secs)?,
                shutdown_grace_ms: var_or("SHUTDOWN_GRACE_MS", defaults.shutdown_grace_ms)?,
            },
        })
    }
}

impl Default for ScenarioConfig {
    // Сценарий по умолчанию: 3 театра по 20 мест, 100 покупателей
    fn default() -> Self {
        Self {
            theatre_count: 3,
            seats_per_theatre: 20,
            customer_count: 100,
            request_min: 1,
            request_max: 3,
            confirm_delay_min_ms: 500,
            confirm_delay_max_ms: 1000,
            await_deadline_secs: 60,
            shutdown_grace_ms: 250,
        }
    }
}

impl ScenarioConfig {
    pub fn await_deadline(&self) -> Duration {
        Duration::from_secs(self.await_deadline_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}
