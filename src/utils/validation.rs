use crate::utils::error::ConfigError;
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<(), ConfigError> {
    if url_str.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::InvalidValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("invalid URL format: {}", e),
        }),
    }
}

/// Dates on the CLI must be "YYYY-MM-DD"; the filter itself never validates.
pub fn validate_date(field_name: &str, value: &str) -> Result<(), ConfigError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("expected YYYY-MM-DD: {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
