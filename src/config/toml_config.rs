use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based defaults for the CLI; flags win over file values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: TomlConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.service.url {
            validate_url("service.url", url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            r#"
[service]
url = "http://example.com/wfs"
timeout_seconds = 30
"#,
        );

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.service.url.as_deref(), Some("http://example.com/wfs"));
        assert_eq!(config.service.timeout_seconds, Some(30));
    }

    #[test]
    fn test_from_file_with_defaults_omitted() {
        let file = write_config("[service]\n");

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert!(config.service.url.is_none());
        assert!(config.service.timeout_seconds.is_none());
    }

    #[test]
    fn test_from_file_rejects_bad_url() {
        let file = write_config("[service]\nurl = \"ftp://example.com\"\n");

        assert!(matches!(
            TomlConfig::from_file(file.path()),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let file = write_config("[service\n");

        assert!(matches!(
            TomlConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            TomlConfig::from_file("/nonexistent/geodesy.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
