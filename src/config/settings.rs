//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub uploads: UploadConfig,
    pub rate_limit: RateLimitSettings,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for any request body, uploads included
    pub max_body_bytes: usize,
}

/// Student photo upload configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    pub directory: String,
    /// URL prefix the stored photos are served under
    pub public_prefix: String,
    pub max_photo_bytes: usize,
}

/// Submission rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitSettings {
    pub enabled: bool,
    pub requests_per_minute: u32,
    pub burst: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Directory for the daily rolling log file; stdout only when unset
    pub directory: Option<String>,
    pub file_name: String,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub contact_form: bool,
    pub donation_form: bool,
    pub registration_form: bool,
    pub hire_form: bool,
}

impl FeaturesConfig {
    /// Whether at least one form is served
    pub fn any_form_enabled(&self) -> bool {
        self.contact_form || self.donation_form || self.registration_form || self.hire_form
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables.
    ///
    /// Built-in defaults are layered under an optional `config` file and
    /// `FORMDESK__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load settings using a specific configuration file name
    pub fn load_from(file_name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(
                config::Environment::with_prefix("FORMDESK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::FormDeskError> {
        super::validation::validate_settings(self)
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                max_body_bytes: 8 * 1024 * 1024,
            },
            uploads: UploadConfig {
                directory: "./uploads".to_string(),
                public_prefix: "/uploads".to_string(),
                max_photo_bytes: 2 * 1024 * 1024,
            },
            rate_limit: RateLimitSettings {
                enabled: true,
                requests_per_minute: 30,
                burst: 10,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
                directory: None,
                file_name: "formdesk.log".to_string(),
            },
            features: FeaturesConfig {
                contact_form: true,
                donation_form: true,
                registration_form: true,
                hire_form: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_load_without_file() {
        let settings = Settings::load_from("does-not-exist").unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.uploads.max_photo_bytes, 2 * 1024 * 1024);
        assert!(settings.features.any_form_enabled());
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        std::env::set_var("FORMDESK__SERVER__PORT", "9191");
        std::env::set_var("FORMDESK__FEATURES__HIRE_FORM", "false");

        let settings = Settings::load_from("does-not-exist").unwrap();

        std::env::remove_var("FORMDESK__SERVER__PORT");
        std::env::remove_var("FORMDESK__FEATURES__HIRE_FORM");

        assert_eq!(settings.server.port, 9191);
        assert!(!settings.features.hire_form);
        assert!(settings.features.contact_form);
    }

    #[test]
    fn test_bind_address() {
        let settings = Settings::default();
        assert_eq!(settings.bind_address(), "0.0.0.0:8080");
    }
}
