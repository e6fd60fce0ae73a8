use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty
/// - API base URL and database URL must look like a URL or domain name
/// - Database URL and key must be set together
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    validate_url("API base URL", &config.api_base_url)?;

    match (&config.database_url, &config.database_key) {
        (Some(url), Some(_)) => validate_url("Database URL", url)?,
        (None, None) => {}
        _ => {
            return Err(AppError::config_error(
                "Database URL and database key must be configured together",
            ));
        }
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_url(label: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    if !url.starts_with("http://")
        && !url.starts_with("https://")
        && !url.contains('.')
        && !url.starts_with("localhost")
    {
        return Err(AppError::config_error(format!(
            "{label} must be a valid URL or domain name"
        )));
    }

    Ok(())
}
