use thiserror::Error;

/// Uniform error for every failure of a WFS request/parse cycle.
///
/// Transport problems (unreachable host, refused connection, timeout,
/// non-2xx status) and response problems (malformed XML, missing feature
/// fields) all surface as this one type. The underlying cause is kept as a
/// source for diagnostics; callers never see reqwest or quick-xml types.
#[derive(Debug, Error)]
#[error("{context}")]
pub struct ServiceError {
    context: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ServiceError {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source: None,
        }
    }

    pub fn with_source(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            context: context.into(),
            source: Some(source.into()),
        }
    }

    /// Failure while sending the request or reading the response.
    pub fn transport(
        url: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self::with_source(format!("WFS request to {} failed", url), source)
    }

    /// Failure while interpreting the response document.
    pub fn parse(
        detail: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self::with_source(format!("invalid WFS response: {}", detail.into()), source)
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Configuration problems reported by the CLI layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required setting: {field}")]
    MissingField { field: String },

    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_service_error_carries_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ServiceError::transport("http://example.com/wfs", cause);

        assert_eq!(err.context(), "WFS request to http://example.com/wfs failed");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_service_error_without_cause() {
        let err = ServiceError::new("WFS endpoint returned 503");
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "WFS endpoint returned 503");
    }
}
