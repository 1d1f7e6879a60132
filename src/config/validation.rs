//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{FormDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_upload_config(&settings.uploads, &settings.server)?;
    validate_rate_limit_config(&settings.rate_limit)?;
    validate_logging_config(&settings.logging)?;
    validate_features_config(&settings.features)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(FormDeskError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(FormDeskError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate upload configuration
fn validate_upload_config(config: &super::UploadConfig, server: &super::ServerConfig) -> Result<()> {
    if config.directory.is_empty() {
        return Err(FormDeskError::Config(
            "Upload directory is required".to_string()
        ));
    }

    if !config.public_prefix.starts_with('/') || config.public_prefix.trim_end_matches('/').is_empty() {
        return Err(FormDeskError::Config(
            format!("Upload public prefix must be a path below '/': {}", config.public_prefix)
        ));
    }

    if config.max_photo_bytes == 0 {
        return Err(FormDeskError::Config(
            "Max photo size must be greater than 0".to_string()
        ));
    }

    if server.max_body_bytes < config.max_photo_bytes {
        return Err(FormDeskError::Config(
            "Max request body cannot be smaller than max photo size".to_string()
        ));
    }

    Ok(())
}

/// Validate rate limit configuration
fn validate_rate_limit_config(config: &super::RateLimitSettings) -> Result<()> {
    if config.enabled && config.requests_per_minute == 0 {
        return Err(FormDeskError::Config(
            "Rate limit requests per minute must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FormDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(FormDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_name.is_empty() {
        return Err(FormDeskError::Config(
            "Log file name is required".to_string()
        ));
    }

    Ok(())
}

/// Validate feature flags
fn validate_features_config(config: &super::FeaturesConfig) -> Result<()> {
    if !config.any_form_enabled() {
        return Err(FormDeskError::Config(
            "At least one form must be enabled".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert_matches!(validate_settings(&settings), Err(FormDeskError::Config(_)));
    }

    #[test]
    fn test_rejects_body_limit_below_photo_limit() {
        let mut settings = Settings::default();
        settings.server.max_body_bytes = 1024;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_relative_public_prefix() {
        let mut settings = Settings::default();
        settings.uploads.public_prefix = "uploads".to_string();
        assert!(validate_settings(&settings).is_err());

        settings.uploads.public_prefix = "/".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rate_limit_quota_only_checked_when_enabled() {
        let mut settings = Settings::default();
        settings.rate_limit.requests_per_minute = 0;
        assert!(validate_settings(&settings).is_err());

        settings.rate_limit.enabled = false;
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_all_forms_disabled() {
        let mut settings = Settings::default();
        settings.features.contact_form = false;
        settings.features.donation_form = false;
        settings.features.registration_form = false;
        settings.features.hire_form = false;
        assert!(validate_settings(&settings).is_err());
    }
}
