use serde::{Deserialize, Serialize};
use crate::utils::constants::DEFAULT_API_BASE_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub theme_preset: String,
    pub toast_life_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            theme_preset: "nora".to_string(),
            toast_life_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("THEME_PRESET"),
            option_env!("TOAST_LIFE_MS"),
        )
    }

    /// Construye la configuración a partir de valores opcionales (vacío = no definido)
    pub fn from_values(
        api_base_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        theme_preset: Option<&str>,
        toast_life_ms: Option<&str>,
    ) -> Self {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }

        let defaults = Self::default();

        Self {
            api_base_url: non_empty(api_base_url)
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: non_empty(environment)
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: non_empty(enable_logging)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: non_empty(log_level)
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
            theme_preset: non_empty(theme_preset)
                .map(str::to_lowercase)
                .unwrap_or(defaults.theme_preset),
            toast_life_ms: non_empty(toast_life_ms)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.toast_life_ms),
        }
    }

    /// URL base de la API (sin `/` final)
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log efectivo para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url(), "http://localhost:8000/api");
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://gamehub.example/api/"), None, None, None, None, None);
        assert_eq!(config.api_base_url(), "https://gamehub.example/api");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some(""), Some("nope"), None, None, Some("abc"));
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.environment, "development");
        assert!(config.enable_logging);
        assert_eq!(config.toast_life_ms, 3000);
    }

    #[test]
    fn test_logging_disabled_only_errors() {
        let config = AppConfig::from_values(None, Some("production"), Some("false"), Some("debug"), None, None);
        assert!(config.is_production());
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
